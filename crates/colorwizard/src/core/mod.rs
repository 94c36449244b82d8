mod contrast;
mod conversion;
mod equality;
mod math;
mod model;
mod named;
mod string;

// contrast
pub(crate) use contrast::{to_contrast, to_relative_luminance};

// conversion
pub use conversion::linear_rgb_value;
pub(crate) use conversion::{convert, rgb_to_linear_rgb};

// equality
pub use equality::to_eq_bits;

// math
pub(crate) use math::FloatExt;

// model
pub use model::ColorModel;

// string
pub(crate) use string::{format, parse};

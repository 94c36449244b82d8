//! # Color Wizard
//!
//! Color Wizard is a small, deterministic library for color computation. It
//! converts colors between gamma-encoded sRGB, linear sRGB, HSL, Oklab, and
//! Oklch, parses and formats CSS color strings, linearly interpolates between
//! colors, and searches the HSL cube for colors with a desired WCAG contrast.
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**."
)]
//!
//!
//! ## 1. Overview
//!
//! Color Wizard's main abstractions are:
//!
//!   * [`Color`] is a **color in one of the supported color models**, i.e., one
//!     of the records [`Rgb`], [`LinearRgb`], [`Hsl`], [`Oklab`], or
//!     [`Oklch`], tagged with its [`ColorModel`]. Records only have the
//!     coordinates valid for their model plus an optional alpha. Colors parse
//!     from CSS color strings through [`FromStr`](std::str::FromStr) and
//!     format as CSS color strings through [`Display`](std::fmt::Display).
//!   * [`LinearMix`] **interpolates between two colors**. The string-level
//!     [`mix_linear`] and its per-model shortcuts [`mix_rgb_linear`],
//!     [`mix_hsl_linear`], [`mix_oklab_linear`], and [`mix_oklch_linear`]
//!     parse two CSS colors and return the interpolated colors as CSS
//!     strings.
//!   * [`ContrastSearch`] **finds colors with a given contrast** by scanning
//!     a fixed grid of the HSL cube. The string-level
//!     [`find_hsl_colors_with_contrast`] and [`find_hsl_colors_near_contrast`]
//!     cover the common cases.
//!   * [`WizardError`] is the error returned by all string-level operations.
//!     Its only kind is the parser error, whose [`WizardError::reason`] is
//!     `ColorParserError`.
//!
//! Out-of-gamut coordinates are never clamped. A missing hue is `None` in a
//! record and `none` in a CSS string.
//!
//!
//! ## 2. Example
//!
//! ```
//! # use colorwizard::{mix_hsl_linear, to_oklch, WizardError};
//! let colors = mix_hsl_linear("red", "blue", 3)?;
//! assert_eq!(colors, ["hsl(0 100% 50%)", "hsl(120 100% 50%)", "hsl(240 100% 50%)"]);
//!
//! let gray = to_oklch("#808080")?;
//! assert_eq!(gray.h, None);
//! # Ok::<(), WizardError>(())
//! ```
//!
//!
//! ## 3. Feature Flags
//!
//! The `f64` feature, enabled by default, selects `f64` as [`Float`].
//! Without it, [`Float`] is `f32`. The `pyffi` feature exposes the
//! string-level operations to Python through [PyO3](https://pyo3.rs).
//!
//! Color Wizard logs through the [`log`](https://docs.rs/log) facade but
//! never installs a logger.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod core;
pub mod error;
mod mix;
mod object;
mod perception;
mod search;
mod util;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use core::{linear_rgb_value, ColorModel};
pub use error::{ColorFormatError, WizardError};
pub use mix::{
    mix_hsl_linear, mix_linear, mix_oklab_linear, mix_oklch_linear, mix_rgb_linear, LinearMix,
};
pub use object::{
    quick_rgb_to_lrgb, to_hsl, to_linear_rgb, to_oklab, to_oklch, to_rgb, wcag_contrast, Color,
    Hsl, LinearRgb, ModelColor, Oklab, Oklch, Rgb, LRGB_BLACK, LRGB_WHITE,
};
#[allow(deprecated)]
pub use perception::{
    distance_rgb, perceived_brightness_diffs, perceived_brightness_oklab,
    perceived_brightness_rgb,
};
pub use search::{
    find_hsl_colors_near_contrast, find_hsl_colors_with_contrast, Backdrop, ContrastBand,
    ContrastSearch, ContrastSearchBuilder,
};
pub use util::group_by;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

/// Initialize the Python module. <i class=python-only>Python only!</i>
#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn colorwizard(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ColorModel>()?;
    m.add_class::<Hsl>()?;

    m.add_function(wrap_pyfunction!(linear_rgb_value, m)?)?;
    m.add_function(wrap_pyfunction!(distance_rgb, m)?)?;

    m.add_function(wrap_pyfunction!(mix_linear, m)?)?;
    m.add_function(wrap_pyfunction!(mix_rgb_linear, m)?)?;
    m.add_function(wrap_pyfunction!(mix_hsl_linear, m)?)?;
    m.add_function(wrap_pyfunction!(mix_oklab_linear, m)?)?;
    m.add_function(wrap_pyfunction!(mix_oklch_linear, m)?)?;

    m.add_function(wrap_pyfunction!(find_hsl_colors_with_contrast, m)?)?;
    m.add_function(wrap_pyfunction!(find_hsl_colors_near_contrast, m)?)?;

    Ok(())
}

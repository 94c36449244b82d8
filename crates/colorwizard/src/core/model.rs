#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::error::ColorFormatError;

/// The enumeration of supported color models.
///
/// # RGB
///
/// [`ColorModel::Rgb`] is gamma-encoded [sRGB](https://en.wikipedia.org/wiki/SRGB),
/// the default color space of the web. [`ColorModel::LinearRgb`] is the same
/// color space with the sRGB transfer function removed. It is the color space
/// for physically linear light mixing and serves as the basis for computing
/// relative luminance and hence WCAG contrast. In-gamut coordinates for both
/// range `0..=1`.
///
/// # HSL
///
/// [`ColorModel::Hsl`] is the hexcone reshaping of sRGB into hue (in degrees),
/// saturation, and lightness, with the latter two ranging `0..=1`. Grays have
/// no hue.
///
/// # Oklab and Oklch
///
/// [Oklab/Oklch](https://bottosson.github.io/posts/oklab/) is a perceptually
/// uniform color space. Oklab uses Cartesian coordinates L, a, b, whereas
/// Oklch uses polar coordinates L, C, hº for the same space. Lightness is
/// `0..=1`, a/b in practice are `-0.4..=0.4`, chroma is non-negative and in
/// practice `0..=0.4`. Grays have no hue.
///
/// # Coordinate Order
///
/// Internally, colors are three coordinates in the order of the model's
/// name, i.e., `[r, g, b]`, `[h, s, l]`, `[L, a, b]`, and `[L, C, h]`. A
/// missing hue is not-a-number.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "colorwizard")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorModel {
    Rgb,
    LinearRgb,
    Hsl,
    Oklab,
    Oklch,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl ColorModel {
    /// Determine whether this color model has a hue.
    pub const fn is_polar(&self) -> bool {
        matches!(*self, Self::Hsl | Self::Oklch)
    }

    /// Determine whether this color model is one of the RGB models.
    pub const fn is_rgb(&self) -> bool {
        matches!(*self, Self::Rgb | Self::LinearRgb)
    }

    /// Get the tag naming this color model, e.g., `oklch`.
    pub const fn tag(&self) -> &'static str {
        match *self {
            Self::Rgb => "rgb",
            Self::LinearRgb => "lrgb",
            Self::Hsl => "hsl",
            Self::Oklab => "oklab",
            Self::Oklch => "oklch",
        }
    }

    /// Create a human-readable representation for this color model. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl ColorModel {
    /// Get the index of the hue coordinate, if this color model has one.
    pub(crate) const fn hue_index(&self) -> Option<usize> {
        match *self {
            Self::Hsl => Some(0),
            Self::Oklch => Some(2),
            _ => None,
        }
    }
}

impl std::fmt::Display for ColorModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl std::str::FromStr for ColorModel {
    type Err = ColorFormatError;

    /// Parse a color model from its tag. Matching is case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        match tag.as_str() {
            "rgb" => Ok(Self::Rgb),
            "lrgb" => Ok(Self::LinearRgb),
            "hsl" => Ok(Self::Hsl),
            "oklab" => Ok(Self::Oklab),
            "oklch" => Ok(Self::Oklch),
            _ => Err(ColorFormatError::UnknownColorSpace),
        }
    }
}

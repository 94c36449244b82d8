use std::str::FromStr;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{
    convert, format, parse, rgb_to_linear_rgb, to_contrast, to_relative_luminance, ColorModel,
};
use crate::error::{ColorFormatError, WizardError};
use crate::Float;

/// A color record for one particular color model.
///
/// Each record carries only the coordinates that are valid for its color
/// model, plus an optional alpha. Hues are optional, with `None` denoting an
/// achromatic color or a missing hue. Internally, a missing hue is
/// not-a-number, which is what [`ModelColor::coordinates`] returns and
/// [`ModelColor::from_coordinates`] accepts.
pub trait ModelColor: Copy + Into<Color> {
    /// The record's color model.
    const MODEL: ColorModel;

    /// Create a new record from raw coordinates and alpha.
    fn from_coordinates(coordinates: [Float; 3], alpha: Option<Float>) -> Self;

    /// Get the raw coordinates.
    fn coordinates(&self) -> [Float; 3];

    /// Get the alpha, if any.
    fn alpha(&self) -> Option<Float>;
}

#[inline]
fn to_hue(h: Float) -> Option<Float> {
    if h.is_nan() {
        None
    } else {
        Some(h)
    }
}

/// Implement [`ModelColor`] and the conversion into [`Color`] for a record
/// with three plain coordinates.
macro_rules! cartesian_color {
    ($name:ident, $model:ident, $c1:ident, $c2:ident, $c3:ident) => {
        impl $name {
            /// Create a new, fully opaque color record.
            pub const fn new($c1: Float, $c2: Float, $c3: Float) -> Self {
                Self {
                    $c1,
                    $c2,
                    $c3,
                    alpha: None,
                }
            }

            /// Replace the alpha of this color record.
            #[must_use]
            pub const fn with_alpha(self, alpha: Float) -> Self {
                Self {
                    alpha: Some(alpha),
                    ..self
                }
            }
        }

        impl ModelColor for $name {
            const MODEL: ColorModel = ColorModel::$model;

            fn from_coordinates(coordinates: [Float; 3], alpha: Option<Float>) -> Self {
                let [$c1, $c2, $c3] = coordinates;
                Self {
                    $c1,
                    $c2,
                    $c3,
                    alpha,
                }
            }

            fn coordinates(&self) -> [Float; 3] {
                [self.$c1, self.$c2, self.$c3]
            }

            fn alpha(&self) -> Option<Float> {
                self.alpha
            }
        }

        impl From<$name> for Color {
            fn from(value: $name) -> Self {
                Color::$model(value)
            }
        }
    };
}

/// A gamma-encoded sRGB color. In-gamut channels range `0..=1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: Float,
    pub g: Float,
    pub b: Float,
    pub alpha: Option<Float>,
}

cartesian_color!(Rgb, Rgb, r, g, b);

/// A linear sRGB color. In-gamut channels range `0..=1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearRgb {
    pub r: Float,
    pub g: Float,
    pub b: Float,
    pub alpha: Option<Float>,
}

cartesian_color!(LinearRgb, LinearRgb, r, g, b);

/// An Oklab color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Oklab {
    pub l: Float,
    pub a: Float,
    pub b: Float,
    pub alpha: Option<Float>,
}

cartesian_color!(Oklab, Oklab, l, a, b);

/// The linear sRGB coordinates of white.
pub const LRGB_WHITE: LinearRgb = LinearRgb::new(1.0, 1.0, 1.0);

/// The linear sRGB coordinates of black.
pub const LRGB_BLACK: LinearRgb = LinearRgb::new(0.0, 0.0, 0.0);

// --------------------------------------------------------------------------------------------------------------------

/// An HSL color.
///
/// The hue is in degrees and `None` for grays. Saturation and lightness
/// range `0..=1`. The contrast search returns its results as HSL colors.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, get_all, module = "colorwizard")
)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub h: Option<Float>,
    pub s: Float,
    pub l: Float,
    pub alpha: Option<Float>,
}

impl Hsl {
    /// Create a new, fully opaque HSL color.
    pub const fn new(h: Option<Float>, s: Float, l: Float) -> Self {
        Self {
            h,
            s,
            l,
            alpha: None,
        }
    }

    /// Replace the alpha of this color.
    #[must_use]
    pub const fn with_alpha(self, alpha: Float) -> Self {
        Self {
            alpha: Some(alpha),
            ..self
        }
    }
}

#[cfg(feature = "pyffi")]
#[pymethods]
impl Hsl {
    /// Convert this color to its CSS string. <i class=python-only>Python
    /// only!</i>
    pub fn __str__(&self) -> String {
        Color::from(*self).to_string()
    }

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }
}

impl ModelColor for Hsl {
    const MODEL: ColorModel = ColorModel::Hsl;

    fn from_coordinates(coordinates: [Float; 3], alpha: Option<Float>) -> Self {
        let [h, s, l] = coordinates;
        Self {
            h: to_hue(h),
            s,
            l,
            alpha,
        }
    }

    fn coordinates(&self) -> [Float; 3] {
        [self.h.unwrap_or(Float::NAN), self.s, self.l]
    }

    fn alpha(&self) -> Option<Float> {
        self.alpha
    }
}

impl From<Hsl> for Color {
    fn from(value: Hsl) -> Self {
        Color::Hsl(value)
    }
}

/// An Oklch color.
///
/// The hue is in degrees and `None` for achromatic colors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Oklch {
    pub l: Float,
    pub c: Float,
    pub h: Option<Float>,
    pub alpha: Option<Float>,
}

impl Oklch {
    /// Create a new, fully opaque Oklch color.
    pub const fn new(l: Float, c: Float, h: Option<Float>) -> Self {
        Self {
            l,
            c,
            h,
            alpha: None,
        }
    }

    /// Replace the alpha of this color.
    #[must_use]
    pub const fn with_alpha(self, alpha: Float) -> Self {
        Self {
            alpha: Some(alpha),
            ..self
        }
    }
}

impl ModelColor for Oklch {
    const MODEL: ColorModel = ColorModel::Oklch;

    fn from_coordinates(coordinates: [Float; 3], alpha: Option<Float>) -> Self {
        let [l, c, h] = coordinates;
        Self {
            l,
            c,
            h: to_hue(h),
            alpha,
        }
    }

    fn coordinates(&self) -> [Float; 3] {
        [self.l, self.c, self.h.unwrap_or(Float::NAN)]
    }

    fn alpha(&self) -> Option<Float> {
        self.alpha
    }
}

impl From<Oklch> for Color {
    fn from(value: Oklch) -> Self {
        Color::Oklch(value)
    }
}

// ====================================================================================================================

/// A color in one of the supported color models.
///
/// This enumeration tags each record with its color model, which makes
/// records with invalid fields, e.g., an RGB color with a hue, impossible to
/// construct. Colors parse from and format as CSS color strings:
///
/// ```
/// # use colorwizard::{Color, ColorModel, Hsl, WizardError};
/// let color = "#ff0000".parse::<Color>().map_err(WizardError::from)?;
/// assert_eq!(color.model(), ColorModel::Rgb);
/// assert_eq!(color.to_string(), "color(srgb 1 0 0)");
///
/// let hsl = color.to_hsl();
/// assert_eq!(hsl, Hsl::new(Some(0.0), 1.0, 0.5));
/// assert_eq!(Color::from(hsl).to_string(), "hsl(0 100% 50%)");
/// # Ok::<(), WizardError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    Rgb(Rgb),
    LinearRgb(LinearRgb),
    Hsl(Hsl),
    Oklab(Oklab),
    Oklch(Oklch),
}

impl Color {
    /// Create a new color from the color model, raw coordinates, and alpha.
    /// A not-a-number hue becomes `None`.
    pub fn new(model: ColorModel, coordinates: [Float; 3], alpha: Option<Float>) -> Self {
        match model {
            ColorModel::Rgb => Rgb::from_coordinates(coordinates, alpha).into(),
            ColorModel::LinearRgb => LinearRgb::from_coordinates(coordinates, alpha).into(),
            ColorModel::Hsl => Hsl::from_coordinates(coordinates, alpha).into(),
            ColorModel::Oklab => Oklab::from_coordinates(coordinates, alpha).into(),
            ColorModel::Oklch => Oklch::from_coordinates(coordinates, alpha).into(),
        }
    }

    /// Get this color's model.
    pub const fn model(&self) -> ColorModel {
        match *self {
            Self::Rgb(_) => ColorModel::Rgb,
            Self::LinearRgb(_) => ColorModel::LinearRgb,
            Self::Hsl(_) => ColorModel::Hsl,
            Self::Oklab(_) => ColorModel::Oklab,
            Self::Oklch(_) => ColorModel::Oklch,
        }
    }

    /// Get this color's raw coordinates, with a missing hue as not-a-number.
    pub fn coordinates(&self) -> [Float; 3] {
        match self {
            Self::Rgb(c) => c.coordinates(),
            Self::LinearRgb(c) => c.coordinates(),
            Self::Hsl(c) => c.coordinates(),
            Self::Oklab(c) => c.coordinates(),
            Self::Oklch(c) => c.coordinates(),
        }
    }

    /// Get this color's alpha, if any.
    pub fn alpha(&self) -> Option<Float> {
        match self {
            Self::Rgb(c) => c.alpha,
            Self::LinearRgb(c) => c.alpha,
            Self::Hsl(c) => c.alpha,
            Self::Oklab(c) => c.alpha,
            Self::Oklch(c) => c.alpha,
        }
    }

    /// Convert this color to the given color model.
    ///
    /// Converting to the same color model returns the color unchanged.
    /// Otherwise, missing coordinates count as zero. Alpha passes through
    /// unchanged. Out-of-gamut coordinates are not clamped.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn to_model(&self, model: ColorModel) -> Self {
        Self::new(
            model,
            convert(self.model(), model, &self.coordinates()),
            self.alpha(),
        )
    }

    /// Convert this color to the record type for some color model.
    pub fn to<C: ModelColor>(&self) -> C {
        C::from_coordinates(
            convert(self.model(), C::MODEL, &self.coordinates()),
            self.alpha(),
        )
    }

    /// Convert this color to gamma-encoded sRGB.
    pub fn to_rgb(&self) -> Rgb {
        self.to()
    }

    /// Convert this color to linear sRGB.
    pub fn to_linear_rgb(&self) -> LinearRgb {
        self.to()
    }

    /// Convert this color to HSL.
    pub fn to_hsl(&self) -> Hsl {
        self.to()
    }

    /// Convert this color to Oklab.
    pub fn to_oklab(&self) -> Oklab {
        self.to()
    }

    /// Convert this color to Oklch.
    pub fn to_oklch(&self) -> Oklch {
        self.to()
    }

    /// Compute this color's WCAG relative luminance.
    pub fn relative_luminance(&self) -> Float {
        to_relative_luminance(&self.to_linear_rgb().coordinates())
    }

    /// Compute the WCAG contrast ratio between this and the other color.
    ///
    /// The ratio is symmetric and ranges from 1 to 21. Alpha is ignored.
    ///
    /// ```
    /// # use colorwizard::{Color, Rgb};
    /// let black = Color::from(Rgb::new(0.0, 0.0, 0.0));
    /// let white = Color::from(Rgb::new(1.0, 1.0, 1.0));
    /// assert!((black.contrast_against(&white) - 21.0).abs() < 1e-9);
    /// ```
    pub fn contrast_against(&self, other: &Self) -> Float {
        to_contrast(self.relative_luminance(), other.relative_luminance())
    }
}

impl FromStr for Color {
    type Err = ColorFormatError;

    /// Parse a CSS color string into a color.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (model, coordinates, alpha) = parse(s)?;
        Ok(Self::new(model, coordinates, alpha))
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Color::from_str(value)
    }
}

impl std::fmt::Display for Color {
    /// Format this color as a CSS color string.
    ///
    /// The formatter's precision, if any, determines the number of digits
    /// past the decimal. It defaults to 5.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format(self.model(), &self.coordinates(), self.alpha(), f)
    }
}

// ====================================================================================================================

/// Linearize an sRGB color channel by channel, carrying alpha through.
pub fn quick_rgb_to_lrgb(color: &Rgb) -> LinearRgb {
    LinearRgb::from_coordinates(rgb_to_linear_rgb(&color.coordinates()), color.alpha)
}

/// Compute the WCAG contrast ratio between two colors.
pub fn wcag_contrast(color1: &Color, color2: &Color) -> Float {
    color1.contrast_against(color2)
}

/// Parse a user-supplied color string.
pub(crate) fn parse_input(s: &str) -> Result<Color, WizardError> {
    Color::from_str(s).map_err(|error| {
        log::debug!("unable to parse {:?} as color: {}", s, error);
        WizardError::from(error)
    })
}

/// Parse the CSS color string and convert it to gamma-encoded sRGB.
pub fn to_rgb(s: &str) -> Result<Rgb, WizardError> {
    Ok(parse_input(s)?.to_rgb())
}

/// Parse the CSS color string and convert it to linear sRGB.
pub fn to_linear_rgb(s: &str) -> Result<LinearRgb, WizardError> {
    Ok(parse_input(s)?.to_linear_rgb())
}

/// Parse the CSS color string and convert it to HSL.
///
/// ```
/// # use colorwizard::{to_hsl, WizardError};
/// let gray = to_hsl("#808080")?;
/// assert_eq!(gray.h, None);
/// assert_eq!(gray.s, 0.0);
/// # Ok::<(), WizardError>(())
/// ```
pub fn to_hsl(s: &str) -> Result<Hsl, WizardError> {
    Ok(parse_input(s)?.to_hsl())
}

/// Parse the CSS color string and convert it to Oklab.
pub fn to_oklab(s: &str) -> Result<Oklab, WizardError> {
    Ok(parse_input(s)?.to_oklab())
}

/// Parse the CSS color string and convert it to Oklch.
pub fn to_oklch(s: &str) -> Result<Oklch, WizardError> {
    Ok(parse_input(s)?.to_oklch())
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::assert_close_enough;

    #[test]
    fn test_string_converters() -> Result<(), WizardError> {
        assert_eq!(to_rgb("red")?, Rgb::new(1.0, 0.0, 0.0));
        assert_eq!(to_rgb("#00ff0080")?.alpha, Some(128.0 / 255.0));
        assert_eq!(to_hsl("blue")?, Hsl::new(Some(240.0), 1.0, 0.5));
        assert_eq!(to_hsl("white")?.h, None);

        let white = to_oklch("white")?;
        assert!((white.l - 1.0).abs() < 1e-6);
        assert_eq!(white.c, 0.0);
        assert_eq!(white.h, None);

        let linear = to_linear_rgb("white")?;
        assert_close_enough!(linear.r, 1.0);

        let oklab = to_oklab("oklch(0.5 0.1 none)")?;
        assert_eq!(oklab, Oklab::new(0.5, 0.0, 0.0));

        assert_eq!(
            to_oklab("rgb(1 2)"),
            Err(WizardError::ColorParser(ColorFormatError::MissingCoordinate))
        );
        assert_eq!(
            to_rgb("#12345").map_err(|error| error.reason()),
            Err("ColorParserError")
        );
        Ok(())
    }

    #[test]
    fn test_same_model_is_identity() {
        let color = Color::from(Oklch::new(0.5, 0.0, None).with_alpha(0.5));
        assert_eq!(color.to_model(ColorModel::Oklch), color);

        let color = Color::from(Rgb::new(1.5, -0.25, 0.0));
        assert_eq!(color.to_rgb(), Rgb::new(1.5, -0.25, 0.0));
    }

    #[test]
    fn test_alpha_passes_through() -> Result<(), ColorFormatError> {
        let color: Color = "rgb(255 0 0 / 25%)".parse()?;
        assert_eq!(color.to_oklch().alpha, Some(0.25));
        assert_eq!(color.to_hsl().alpha, Some(0.25));
        assert_eq!(
            quick_rgb_to_lrgb(&color.to_rgb()).alpha,
            Some(0.25)
        );
        Ok(())
    }

    #[test]
    fn test_quick_rgb_to_lrgb() {
        assert_eq!(quick_rgb_to_lrgb(&Rgb::new(1.0, 1.0, 1.0)), LRGB_WHITE);
        assert_eq!(quick_rgb_to_lrgb(&Rgb::new(0.0, 0.0, 0.0)), LRGB_BLACK);

        let gray = quick_rgb_to_lrgb(&Rgb::new(0.5, 0.5, 0.5));
        let expected = ((0.5 + 0.055) / 1.055 as Float).powf(2.4);
        assert_close_enough!(gray.r, expected);
        assert_eq!(gray.r, gray.g);
        assert_eq!(gray.g, gray.b);
    }

    #[test]
    fn test_contrast() {
        let black = Color::from(Rgb::new(0.0, 0.0, 0.0));
        let white = Color::from(Hsl::new(None, 0.0, 1.0));
        assert!((wcag_contrast(&black, &white) - 21.0).abs() < 1e-9);
        assert_eq!(wcag_contrast(&white, &white), 1.0);
        assert_close_enough!(
            Color::from(Rgb::new(0.0, 0.0, 1.0)).relative_luminance(),
            0.0722
        );
    }

    #[test]
    fn test_display_round_trip() -> Result<(), ColorFormatError> {
        for text in [
            "color(srgb 0.1 0.2 0.3)",
            "color(srgb-linear 0.1 0.2 0.3 / 0.5)",
            "hsl(200 50% 25%)",
            "hsl(none 0% 50%)",
            "oklab(0.5 -0.1 0.1)",
            "oklch(0.7 0.15 none)",
        ] {
            let color: Color = text.parse()?;
            assert_eq!(color.to_string(), text);
        }
        Ok(())
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn rgb_component() -> impl Strategy<Value = Float> {
            0.0..=1.0 as Float
        }

        fn any_model() -> impl Strategy<Value = ColorModel> {
            prop_oneof![
                Just(ColorModel::Rgb),
                Just(ColorModel::LinearRgb),
                Just(ColorModel::Hsl),
                Just(ColorModel::Oklab),
                Just(ColorModel::Oklch),
            ]
        }

        proptest! {
            #[test]
            fn rgb_to_oklab_round_trip(
                r in rgb_component(),
                g in rgb_component(),
                b in rgb_component(),
            ) {
                let original = Rgb::new(r, g, b);
                let round_tripped = Color::from(Color::from(original).to_oklab()).to_rgb();
                prop_assert!((round_tripped.r - r).abs() < 1e-6, "r: {} vs {}", round_tripped.r, r);
                prop_assert!((round_tripped.g - g).abs() < 1e-6, "g: {} vs {}", round_tripped.g, g);
                prop_assert!((round_tripped.b - b).abs() < 1e-6, "b: {} vs {}", round_tripped.b, b);
            }

            #[test]
            fn rgb_to_hsl_round_trip(
                r in rgb_component(),
                g in rgb_component(),
                b in rgb_component(),
            ) {
                let original = Rgb::new(r, g, b);
                let round_tripped = Color::from(Color::from(original).to_hsl()).to_rgb();
                prop_assert!((round_tripped.r - r).abs() < 1e-9, "r: {} vs {}", round_tripped.r, r);
                prop_assert!((round_tripped.g - g).abs() < 1e-9, "g: {} vs {}", round_tripped.g, g);
                prop_assert!((round_tripped.b - b).abs() < 1e-9, "b: {} vs {}", round_tripped.b, b);
            }

            #[test]
            fn format_is_stable_after_one_round(
                r in rgb_component(),
                g in rgb_component(),
                b in rgb_component(),
                model in any_model(),
            ) {
                let once = Color::from(Rgb::new(r, g, b)).to_model(model).to_string();
                let parsed: Color = once.parse().map_err(|e: ColorFormatError| TestCaseError::fail(e.to_string()))?;
                prop_assert_eq!(parsed.to_string(), once);
            }
        }
    }
}

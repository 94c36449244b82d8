//! Linear interpolation between two colors.

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::ColorModel;
use crate::error::WizardError;
use crate::object::{parse_input, Color};
use crate::Float;

/// Determine whether a hue counts as present. Both a missing hue and a hue
/// of zero do not.
#[inline]
fn is_present(hue: Float) -> bool {
    !hue.is_nan() && hue != 0.0
}

/// A linear interpolator between two colors.
///
/// The interpolator converts both colors into the color model used for
/// interpolation once and then computes each component as `A + (B - A) * t`.
/// Hues are interpolated as plain numbers, without taking the shorter arc
/// around the color wheel. Missing hues are handled differently per model:
///
///   * For HSL, a missing hue is coerced to zero on either endpoint. Since
///     the coercion treats zero like a missing hue, a red endpoint and a
///     gray endpoint both interpolate from hue 0.
///   * For Oklch, the hue is interpolated only if both endpoints have a
///     present, non-zero hue. Otherwise, all interpolated colors have no
///     hue.
///
/// Alpha is not interpolated and the interpolated colors are opaque.
///
/// ```
/// # use colorwizard::{Color, ColorModel, LinearMix, Rgb};
/// let black = Color::from(Rgb::new(0.0, 0.0, 0.0));
/// let white = Color::from(Rgb::new(1.0, 1.0, 1.0));
/// let mix = LinearMix::new(&black, &white, ColorModel::Rgb);
/// assert_eq!(mix.at(0.25), Color::from(Rgb::new(0.25, 0.25, 0.25)));
/// ```
#[derive(Clone, Debug)]
pub struct LinearMix {
    model: ColorModel,
    start: [Float; 3],
    end: [Float; 3],
    interpolate_hue: bool,
}

impl LinearMix {
    /// Create a new interpolator between the two colors in the given color
    /// model.
    pub fn new(start: &Color, end: &Color, model: ColorModel) -> Self {
        let mut start = start.to_model(model).coordinates();
        let mut end = end.to_model(model).coordinates();
        let mut interpolate_hue = true;

        match model {
            ColorModel::Hsl => {
                if !is_present(start[0]) {
                    start[0] = 0.0;
                }
                if !is_present(end[0]) {
                    end[0] = 0.0;
                }
            }
            ColorModel::Oklch => {
                interpolate_hue = is_present(start[2]) && is_present(end[2]);
            }
            _ => (),
        }

        Self {
            model,
            start,
            end,
            interpolate_hue,
        }
    }

    /// Get the color model used for interpolation.
    pub const fn model(&self) -> ColorModel {
        self.model
    }

    /// Compute the interpolated color for the given fraction.
    pub fn at(&self, fraction: Float) -> Color {
        let mut coordinates = [0.0; 3];
        for (index, coordinate) in coordinates.iter_mut().enumerate() {
            let (a, b) = (self.start[index], self.end[index]);
            *coordinate = a + (b - a) * fraction;
        }

        if !self.interpolate_hue {
            if let Some(index) = self.model.hue_index() {
                coordinates[index] = Float::NAN;
            }
        }

        Color::new(self.model, coordinates, None)
    }

    /// Compute the given number of evenly spaced colors, from the start to
    /// the end color.
    ///
    /// The fraction for the i-th color is `i / (steps - 1)`. Zero steps
    /// produce no colors. A single step divides zero by zero and hence
    /// produces a color with not-a-number components.
    pub fn steps(&self, steps: usize) -> Vec<Color> {
        let divisor = steps as Float - 1.0;
        (0..steps)
            .map(|index| self.at(index as Float / divisor))
            .collect()
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Linearly interpolate between two CSS colors in the given color model.
///
/// This function parses both colors, interpolates `steps` colors with
/// [`LinearMix`], and formats the results as CSS color strings. If either
/// color does not parse, it returns a [`WizardError::ColorParser`].
///
/// ```
/// # use colorwizard::{mix_linear, ColorModel, WizardError};
/// let colors = mix_linear("#000000", "#ffffff", 3, ColorModel::Rgb)?;
/// assert_eq!(
///     colors,
///     ["color(srgb 0 0 0)", "color(srgb 0.5 0.5 0.5)", "color(srgb 1 1 1)"]
/// );
/// # Ok::<(), WizardError>(())
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn mix_linear(
    start: &str,
    end: &str,
    steps: usize,
    model: ColorModel,
) -> Result<Vec<String>, WizardError> {
    let start = parse_input(start)?;
    let end = parse_input(end)?;

    Ok(LinearMix::new(&start, &end, model)
        .steps(steps)
        .iter()
        .map(Color::to_string)
        .collect())
}

/// Linearly interpolate between two CSS colors in gamma-encoded sRGB.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn mix_rgb_linear(start: &str, end: &str, steps: usize) -> Result<Vec<String>, WizardError> {
    mix_linear(start, end, steps, ColorModel::Rgb)
}

/// Linearly interpolate between two CSS colors in HSL.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn mix_hsl_linear(start: &str, end: &str, steps: usize) -> Result<Vec<String>, WizardError> {
    mix_linear(start, end, steps, ColorModel::Hsl)
}

/// Linearly interpolate between two CSS colors in Oklab.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn mix_oklab_linear(start: &str, end: &str, steps: usize) -> Result<Vec<String>, WizardError> {
    mix_linear(start, end, steps, ColorModel::Oklab)
}

/// Linearly interpolate between two CSS colors in Oklch.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn mix_oklch_linear(start: &str, end: &str, steps: usize) -> Result<Vec<String>, WizardError> {
    mix_linear(start, end, steps, ColorModel::Oklch)
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::object::{Hsl, Oklch, Rgb};

    #[test]
    fn test_rgb() -> Result<(), WizardError> {
        assert_eq!(
            mix_rgb_linear("#000000", "#ffffff", 3)?,
            [
                "color(srgb 0 0 0)",
                "color(srgb 0.5 0.5 0.5)",
                "color(srgb 1 1 1)"
            ]
        );
        assert_eq!(
            mix_linear("black", "white", 5, ColorModel::Rgb)?[1],
            "color(srgb 0.25 0.25 0.25)"
        );
        Ok(())
    }

    #[test]
    fn test_hsl() -> Result<(), WizardError> {
        assert_eq!(
            mix_hsl_linear("red", "blue", 3)?,
            ["hsl(0 100% 50%)", "hsl(120 100% 50%)", "hsl(240 100% 50%)"]
        );

        // Gray has no hue, which is coerced to 0.
        assert_eq!(
            mix_hsl_linear("#808080", "hsl(100 100% 50%)", 2)?[0],
            "hsl(0 0% 50.196%)"
        );

        // No shortest arc: 350 to 10 goes through 180.
        assert_eq!(
            mix_hsl_linear("hsl(350 100% 50%)", "hsl(10 100% 50%)", 3)?[1],
            "hsl(180 100% 50%)"
        );
        Ok(())
    }

    #[test]
    fn test_hsl_zero_hue_is_missing_hue() {
        let red = Color::from(Hsl::new(Some(0.0), 1.0, 0.5));
        let gray = Color::from(Hsl::new(None, 0.0, 0.5));
        let blue = Color::from(Hsl::new(Some(240.0), 1.0, 0.5));

        let from_red = LinearMix::new(&red, &blue, ColorModel::Hsl).at(0.5);
        let from_gray = LinearMix::new(&gray, &blue, ColorModel::Hsl).at(0.5);
        assert_eq!(from_red.to_hsl().h, Some(120.0));
        assert_eq!(from_gray.to_hsl().h, Some(120.0));
    }

    #[test]
    fn test_oklch() -> Result<(), WizardError> {
        for color in mix_oklch_linear("gray", "red", 4)? {
            assert!(color.ends_with(" none)"), "{}", color);
        }

        let colors = mix_oklch_linear("red", "blue", 2)?;
        assert_eq!(colors.len(), 2);
        assert_eq!(colors[0], parse_input("red")?.to_model(ColorModel::Oklch).to_string());
        assert!(!colors[0].ends_with(" none)"));

        // A zero hue counts as missing, too.
        let start = Color::from(Oklch::new(0.5, 0.1, Some(0.0)));
        let end = Color::from(Oklch::new(0.7, 0.1, Some(90.0)));
        let mix = LinearMix::new(&start, &end, ColorModel::Oklch);
        assert_eq!(mix.at(0.5), Color::from(Oklch::new(0.6, 0.1, None)));
        Ok(())
    }

    #[test]
    fn test_degenerate_steps() -> Result<(), WizardError> {
        assert!(mix_oklab_linear("red", "blue", 0)?.is_empty());
        assert_eq!(
            mix_rgb_linear("red", "blue", 1)?,
            ["color(srgb NaN NaN NaN)"]
        );
        // A not-a-number hue is a missing hue.
        assert_eq!(mix_oklch_linear("red", "blue", 1)?, ["oklch(NaN NaN none)"]);
        assert_eq!(mix_hsl_linear("red", "blue", 1)?, ["hsl(none NaN% NaN%)"]);

        let reparsed = parse_input(&mix_rgb_linear("red", "blue", 1)?[0])?;
        assert!(reparsed.coordinates().iter().all(|c| c.is_nan()));

        let red = Color::from(Rgb::new(1.0, 0.0, 0.0));
        let [c1, c2, c3] = LinearMix::new(&red, &red, ColorModel::Oklab).steps(1)[0].coordinates();
        assert!(c1.is_nan() && c2.is_nan() && c3.is_nan());
        Ok(())
    }

    #[test]
    fn test_alpha_is_dropped() -> Result<(), WizardError> {
        assert_eq!(
            mix_rgb_linear("rgb(255 0 0 / 50%)", "#0000ff80", 2)?,
            ["color(srgb 1 0 0)", "color(srgb 0 0 1)"]
        );
        Ok(())
    }

    #[test]
    fn test_invalid_input() {
        for (start, end) in [("nope", "red"), ("red", "rgb(1 2 3"), ("", "")] {
            assert_eq!(
                mix_linear(start, end, 3, ColorModel::Oklab).map_err(|error| error.reason()),
                Err("ColorParserError")
            );
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn rgb_color() -> impl Strategy<Value = Color> {
            (0.0..=1.0 as Float, 0.0..=1.0 as Float, 0.0..=1.0 as Float)
                .prop_map(|(r, g, b)| Color::from(Rgb::new(r, g, b)))
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
            fn steps_span_both_endpoints_monotonically(
                start in rgb_color(),
                end in rgb_color(),
                model in any_model(),
                steps in 2_usize..24,
            ) {
                let colors = LinearMix::new(&start, &end, model).steps(steps);
                prop_assert_eq!(colors.len(), steps);

                let first = start.to_model(model).coordinates();
                let last = end.to_model(model).coordinates();
                let actual_first = colors[0].coordinates();
                let actual_last = colors[steps - 1].coordinates();
                // Hues are subject to coercion and skipping.
                for index in (0..3).filter(|index| model.hue_index() != Some(*index)) {
                    prop_assert!((actual_first[index] - first[index]).abs() < 1e-9);
                    prop_assert!((actual_last[index] - last[index]).abs() < 1e-9);

                    let direction = last[index] - first[index];
                    for pair in colors.windows(2) {
                        let delta = pair[1].coordinates()[index] - pair[0].coordinates()[index];
                        prop_assert!(delta * direction.signum() >= -1e-12, "{} against {}", delta, direction);
                    }
                }
            }
        }
    }
}

//! Color distance and brightness estimates.

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::error::WizardError;
use crate::object::parse_input;
use crate::Float;

/// Compute the Euclidean distance between two CSS colors in gamma-encoded
/// sRGB.
///
/// ```
/// # use colorwizard::{distance_rgb, WizardError};
/// assert_eq!(distance_rgb("red", "#f00")?, 0.0);
/// assert!((distance_rgb("black", "white")? - 3.0_f64.sqrt()).abs() < 1e-12);
/// # Ok::<(), WizardError>(())
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn distance_rgb(color1: &str, color2: &str) -> Result<Float, WizardError> {
    let c1 = parse_input(color1)?.to_rgb();
    let c2 = parse_input(color2)?.to_rgb();

    let (dr, dg, db) = (c1.r - c2.r, c1.g - c2.g, c1.b - c2.b);
    Ok(dr.mul_add(dr, dg.mul_add(dg, db * db)).sqrt())
}

/// Estimate a CSS color's brightness as its Oklab lightness.
#[deprecated = "use Oklab or Oklch lightness directly, or WCAG contrast"]
pub fn perceived_brightness_oklab(color: &str) -> Result<Float, WizardError> {
    Ok(parse_input(color)?.to_oklab().l)
}

/// Estimate a CSS color's brightness with the weighted root-mean-square of
/// its gamma-encoded sRGB channels.
///
/// The weights 0.299, 0.587, and 0.114 are the Rec. 601 luma coefficients.
/// Applying them to squared gamma-encoded channels is not a standard measure.
#[deprecated = "use WCAG relative luminance instead"]
pub fn perceived_brightness_rgb(color: &str) -> Result<Float, WizardError> {
    let rgb = parse_input(color)?.to_rgb();
    let (r, g, b) = (rgb.r, rgb.g, rgb.b);

    Ok((r * r).mul_add(0.299, (g * g).mul_add(0.587, b * b * 0.114)).sqrt())
}

/// Compute the differences between the Oklab lightness of successive CSS
/// colors.
///
/// If any color fails to parse, this function returns an error. Fewer than
/// two colors produce no differences.
#[deprecated = "use Oklab or Oklch lightness directly, or WCAG contrast"]
#[allow(deprecated)]
pub fn perceived_brightness_diffs<S>(colors: &[S]) -> Result<Vec<Float>, WizardError>
where
    S: AsRef<str>,
{
    let brightnesses = colors
        .iter()
        .map(|color| perceived_brightness_oklab(color.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(brightnesses
        .windows(2)
        .map(|pair| pair[1] - pair[0])
        .collect())
}

#[cfg(test)]
#[allow(deprecated)]
mod test {
    use super::*;
    use crate::assert_close_enough;

    #[test]
    fn test_distance_rgb() -> Result<(), WizardError> {
        assert_eq!(distance_rgb("white", "#ffffff")?, 0.0);
        assert_close_enough!(distance_rgb("black", "white")?, (3.0 as Float).sqrt());
        assert_close_enough!(distance_rgb("red", "lime")?, (2.0 as Float).sqrt());
        assert_eq!(
            distance_rgb("red", "hsl(0 100% 50%)")?,
            distance_rgb("hsl(0 100% 50%)", "red")?
        );
        assert_eq!(
            distance_rgb("red", "reddish").map_err(|e| e.reason()),
            Err("ColorParserError")
        );
        Ok(())
    }

    #[test]
    fn test_perceived_brightness() -> Result<(), WizardError> {
        assert_eq!(perceived_brightness_rgb("black")?, 0.0);
        assert_close_enough!(perceived_brightness_rgb("white")?, 1.0);
        assert_close_enough!(perceived_brightness_rgb("red")?, (0.299 as Float).sqrt());

        assert_eq!(perceived_brightness_oklab("black")?, 0.0);
        assert!((perceived_brightness_oklab("white")? - 1.0).abs() < 1e-6);
        assert!(perceived_brightness_oklab("blue")? < perceived_brightness_oklab("red")?);
        Ok(())
    }

    #[test]
    fn test_perceived_brightness_diffs() -> Result<(), WizardError> {
        let diffs = perceived_brightness_diffs(&["black", "gray", "white"])?;
        assert_eq!(diffs.len(), 2);
        assert!(diffs.iter().all(|d| *d > 0.0));

        let lightness = perceived_brightness_oklab("gray")?;
        assert_eq!(diffs[0], lightness);

        assert!(perceived_brightness_diffs::<&str>(&[])?.is_empty());
        assert!(perceived_brightness_diffs(&["red"])?.is_empty());
        assert_eq!(
            perceived_brightness_diffs(&["red".to_string(), "nope".to_string()])
                .map_err(|e| e.reason()),
            Err("ColorParserError")
        );
        Ok(())
    }
}

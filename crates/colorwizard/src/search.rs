//! Exhaustive search of the HSL cube for colors with a given contrast.
//!
//! The search scans a fixed grid around a reference color: hues in steps of
//! 1 degree within the hue constraint of the reference's hue, saturations in
//! steps of 0.01 from the reference's saturation (or the minimum saturation,
//! whichever is larger) up to 1, and lightnesses in steps of 0.01 across the
//! full range. For each candidate, it computes the WCAG contrast against a
//! fixed backdrop and retains the candidates within the desired contrast
//! band. The results are in scan order, with hue as the outer, saturation as
//! the middle, and lightness as the inner loop.
//!
//! ```
//! # use colorwizard::{ContrastSearch, WizardError};
//! let search = ContrastSearch::builder()
//!     .hue_constraint(2.0)
//!     .target(4.5, 0.25)
//!     .build();
//! let colors = search.find("#3366cc")?;
//! assert!(!colors.is_empty());
//! assert!(colors.iter().all(|c| matches!(c.h, Some(h) if 217.5 < h && h < 222.5)));
//! # Ok::<(), WizardError>(())
//! ```

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{to_contrast, to_relative_luminance};
use crate::error::WizardError;
use crate::object::{parse_input, quick_rgb_to_lrgb, Color, Hsl, ModelColor, LRGB_WHITE};
use crate::Float;

/// Grid resolution for hues, i.e., samples per degree.
const HUE_RESOLUTION: Float = 1.0;

/// Grid resolution for saturation and lightness, i.e., samples per unit.
const RESOLUTION: Float = 100.0;

/// Tolerance for computing the number of grid samples.
const EPSILON: Float = 1e-9;

/// Sample the closed interval with the given number of samples per unit.
///
/// Samples are computed from an integer index and hence do not accumulate
/// floating point error. The interval is empty if the end is smaller than the
/// start or either is not-a-number.
fn grid(start: Float, end: Float, resolution: Float) -> impl Iterator<Item = Float> {
    let span = (end - start) * resolution;
    let count = if span >= 0.0 {
        (span + EPSILON).floor() as usize + 1
    } else {
        0
    };

    (0..count).map(move |index| start + index as Float / resolution)
}

// --------------------------------------------------------------------------------------------------------------------

/// The band of acceptable contrast values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ContrastBand {
    /// Retain a contrast `c` when `|c - contrast| < delta`.
    Target { contrast: Float, delta: Float },
    /// Retain a contrast `c` when `lower <= c <= upper`.
    Range { lower: Float, upper: Float },
}

impl ContrastBand {
    /// Determine whether the contrast value falls into this band.
    pub fn contains(&self, contrast: Float) -> bool {
        match *self {
            Self::Target {
                contrast: target,
                delta,
            } => (contrast - target).abs() < delta,
            Self::Range { lower, upper } => lower <= contrast && contrast <= upper,
        }
    }
}

/// The backdrop against which the search measures contrast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Backdrop {
    #[default]
    White,
    Black,
}

impl Backdrop {
    /// Get the backdrop's relative luminance.
    pub fn luminance(&self) -> Float {
        match *self {
            Self::White => to_relative_luminance(&LRGB_WHITE.coordinates()),
            Self::Black => 0.0,
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

#[derive(Clone, Debug)]
struct SearchData {
    hue_constraint: Float,
    band: ContrastBand,
    saturation_min: Float,
    backdrop: Backdrop,
}

impl SearchData {
    pub const fn new() -> Self {
        Self {
            hue_constraint: 0.0,
            band: ContrastBand::Range {
                lower: 1.0,
                upper: 21.0,
            },
            saturation_min: 0.0,
            backdrop: Backdrop::White,
        }
    }
}

/// A builder of contrast searches.
#[derive(Debug)]
pub struct ContrastSearchBuilder(SearchData);

impl ContrastSearchBuilder {
    /// Set the hue constraint, i.e., the maximum distance in degrees from the
    /// reference's hue.
    pub fn hue_constraint(&mut self, degrees: Float) -> &mut Self {
        self.0.hue_constraint = degrees;
        self
    }

    /// Search for contrasts strictly within `delta` of `contrast`.
    pub fn target(&mut self, contrast: Float, delta: Float) -> &mut Self {
        self.0.band = ContrastBand::Target { contrast, delta };
        self
    }

    /// Search for contrasts between `lower` and `upper`, inclusive.
    pub fn range(&mut self, lower: Float, upper: Float) -> &mut Self {
        self.0.band = ContrastBand::Range { lower, upper };
        self
    }

    /// Set the contrast band.
    pub fn band(&mut self, band: ContrastBand) -> &mut Self {
        self.0.band = band;
        self
    }

    /// Set the minimum saturation.
    pub fn saturation_min(&mut self, saturation: Float) -> &mut Self {
        self.0.saturation_min = saturation;
        self
    }

    /// Set the backdrop.
    pub fn backdrop(&mut self, backdrop: Backdrop) -> &mut Self {
        self.0.backdrop = backdrop;
        self
    }

    /// Instantiate the contrast search.
    pub fn build(&self) -> ContrastSearch {
        ContrastSearch(self.0.clone())
    }
}

/// A contrast search.
///
/// By default, a search has no hue freedom, accepts all contrasts from 1 to
/// 21, has no minimum saturation, and measures contrast against white.
#[derive(Clone, Debug)]
pub struct ContrastSearch(SearchData);

impl Default for ContrastSearch {
    fn default() -> Self {
        ContrastSearch(SearchData::new())
    }
}

impl ContrastSearch {
    /// Create a new builder with the default search parameters.
    pub fn builder() -> ContrastSearchBuilder {
        ContrastSearchBuilder(SearchData::new())
    }

    /// Get the hue constraint.
    pub fn hue_constraint(&self) -> Float {
        self.0.hue_constraint
    }

    /// Get the contrast band.
    pub fn band(&self) -> ContrastBand {
        self.0.band
    }

    /// Get the minimum saturation.
    pub fn saturation_min(&self) -> Float {
        self.0.saturation_min
    }

    /// Get the backdrop.
    pub fn backdrop(&self) -> Backdrop {
        self.0.backdrop
    }

    /// Run this search for the given reference color.
    ///
    /// If the reference color has no hue, the search only covers hue 0 and
    /// saturation 0, i.e., the grays.
    pub fn run(&self, reference: &Color) -> Vec<Hsl> {
        let reference = reference.to_hsl();
        let (hue_start, hue_end, saturation_start, saturation_end) = match reference.h {
            Some(h) => (
                h - self.0.hue_constraint,
                h + self.0.hue_constraint,
                reference.s.max(self.0.saturation_min),
                1.0,
            ),
            None => (0.0, 0.0, 0.0, 0.0),
        };

        log::trace!(
            "contrast search over hue {}..={}, saturation {}..={}, {:?} against {:?}",
            hue_start,
            hue_end,
            saturation_start,
            saturation_end,
            self.0.band,
            self.0.backdrop
        );

        let backdrop = self.0.backdrop.luminance();
        let mut colors = Vec::new();
        let mut candidates = 0_usize;

        for h in grid(hue_start, hue_end, HUE_RESOLUTION) {
            for s in grid(saturation_start, saturation_end, RESOLUTION) {
                for l in grid(0.0, 1.0, RESOLUTION) {
                    candidates += 1;
                    let candidate = Hsl::new(Some(h), s, l);
                    let linear = quick_rgb_to_lrgb(&Color::from(candidate).to_rgb());
                    let contrast =
                        to_contrast(to_relative_luminance(&linear.coordinates()), backdrop);
                    if self.0.band.contains(contrast) {
                        colors.push(candidate);
                    }
                }
            }
        }

        log::debug!(
            "contrast search retained {} of {} candidates",
            colors.len(),
            candidates
        );
        colors
    }

    /// Parse the reference color and run this search.
    pub fn find(&self, reference: &str) -> Result<Vec<Hsl>, WizardError> {
        Ok(self.run(&parse_input(reference)?))
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Find the HSL colors whose contrast against white lies between the lower
/// and upper bounds, inclusive.
///
/// This function is a shortcut for a [`ContrastSearch`] with a range band.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn find_hsl_colors_with_contrast(
    reference: &str,
    hue_constraint: Float,
    lower_contrast: Float,
    upper_contrast: Float,
    saturation_min: Float,
) -> Result<Vec<Hsl>, WizardError> {
    ContrastSearch::builder()
        .hue_constraint(hue_constraint)
        .range(lower_contrast, upper_contrast)
        .saturation_min(saturation_min)
        .build()
        .find(reference)
}

/// Find the HSL colors whose contrast against white lies strictly within
/// `contrast_delta` of `contrast`.
///
/// This function is a shortcut for a [`ContrastSearch`] with a target band.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn find_hsl_colors_near_contrast(
    reference: &str,
    hue_constraint: Float,
    contrast: Float,
    contrast_delta: Float,
    saturation_min: Float,
) -> Result<Vec<Hsl>, WizardError> {
    ContrastSearch::builder()
        .hue_constraint(hue_constraint)
        .target(contrast, contrast_delta)
        .saturation_min(saturation_min)
        .build()
        .find(reference)
}

// ====================================================================================================================

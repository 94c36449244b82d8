use crate::Float;

/// The coefficients for computing relative luminance from linear sRGB
/// coordinates, as defined by WCAG 2.
const SRGB_LUMINANCE: &[Float; 3] = &[0.2126, 0.7152, 0.0722];

/// Compute the WCAG relative luminance for the given linear sRGB coordinates.
#[inline]
pub(crate) fn to_relative_luminance(coordinates: &[Float; 3]) -> Float {
    let [c1, c2, c3] = *SRGB_LUMINANCE;
    let [r, g, b] = *coordinates;

    r.mul_add(c1, g.mul_add(c2, b * c3))
}

/// Compute the WCAG contrast ratio between two relative luminances.
///
/// Unlike APCA-style perceptual contrast, the WCAG ratio is symmetric: The
/// arguments are interchangeable and the result ranges from 1 for identical
/// luminances to 21 for black against white.
#[inline]
pub(crate) fn to_contrast(luminance1: Float, luminance2: Float) -> Float {
    let (lighter, darker) = if luminance1 < luminance2 {
        (luminance2, luminance1)
    } else {
        (luminance1, luminance2)
    };

    (lighter + 0.05) / (darker + 0.05)
}

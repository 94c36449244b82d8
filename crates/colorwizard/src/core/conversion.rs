use super::ColorModel;
use crate::Float;

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing a
/// new 3-element vector.
#[inline]
fn multiply(matrix: &[[Float; 3]; 3], vector: &[Float; 3]) -> [Float; 3] {
    let [row1, row2, row3] = matrix;

    [
        row1[0].mul_add(vector[0], row1[1].mul_add(vector[1], row1[2] * vector[2])),
        row2[0].mul_add(vector[0], row2[1].mul_add(vector[1], row2[2] * vector[2])),
        row3[0].mul_add(vector[0], row3[1].mul_add(vector[1], row3[2] * vector[2])),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Linearize a single gamma-encoded sRGB channel value.
///
/// This is the standard sRGB transfer function, which also underlies WCAG's
/// relative luminance. It is linear for magnitudes up to 0.04045 and a power
/// curve beyond. Negative values are mirrored, with the sign of zero treated
/// as positive.
///
/// ```
/// # use colorwizard::linear_rgb_value;
/// assert_eq!(linear_rgb_value(0.0), 0.0);
/// assert_eq!(linear_rgb_value(0.04), 0.04 / 12.92);
/// assert!((linear_rgb_value(0.5) - 0.214).abs() < 0.001);
/// ```
#[cfg_attr(feature = "pyffi", pyo3::pyfunction)]
pub fn linear_rgb_value(value: Float) -> Float {
    let magnitude = value.abs();
    if magnitude <= 0.04045 {
        value / 12.92
    } else {
        ((magnitude + 0.055) / 1.055).powf(2.4).copysign(value)
    }
}

/// Gamma-encode a single linear sRGB channel value. This is the inverse of
/// [`linear_rgb_value`].
#[inline]
fn gamma_rgb_value(value: Float) -> Float {
    let magnitude = value.abs();
    if magnitude <= 0.0031308 {
        value * 12.92
    } else {
        magnitude
            .powf(1.0 / 2.4)
            .mul_add(1.055, -0.055)
            .copysign(value)
    }
}

/// Convert coordinates from gamma-encoded sRGB to linear sRGB. This is a
/// one-hop, direct conversion.
pub(crate) fn rgb_to_linear_rgb(value: &[Float; 3]) -> [Float; 3] {
    [
        linear_rgb_value(value[0]),
        linear_rgb_value(value[1]),
        linear_rgb_value(value[2]),
    ]
}

/// Convert coordinates from linear sRGB to gamma-encoded sRGB. This is a
/// one-hop, direct conversion.
fn linear_rgb_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    [
        gamma_rgb_value(value[0]),
        gamma_rgb_value(value[1]),
        gamma_rgb_value(value[2]),
    ]
}

// --------------------------------------------------------------------------------------------------------------------
// https://github.com/color-js/color.js/blob/a77e080a070039c534dda3965a769675aac5f75e/src/spaces/oklab.js
// The linear sRGB to LMS matrix folds color.js' XYZ to LMS matrix into its
// linear sRGB to XYZ matrix. The LMS to linear sRGB matrix is the exact
// inverse of the product.

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINEAR_SRGB_TO_OKLMS: [[Float; 3]; 3] = [
    [ 0.4122214694707629,  0.5363325372617349,  0.05144599326750218 ],
    [ 0.21190349581782517, 0.6806995506452345,  0.10739695353694055 ],
    [ 0.08830245919005637, 0.2817188391361215,  0.6299787016738222  ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLMS_TO_OKLAB: [[Float; 3]; 3] = [
    [ 0.2104542683093140,  0.7936177747023054, -0.0040720430116193 ],
    [ 1.9779985324311684, -2.4285922420485799,  0.4505937096174110 ],
    [ 0.0259040424655478,  0.7827717124575296, -0.8086757549230774 ],
];

/// Convert coordinates for linear sRGB to Oklab. This is a one-hop, direct
/// conversion, even though it requires two matrix multiplications and a
/// coordinate-wise cube root.
fn linear_rgb_to_oklab(value: &[Float; 3]) -> [Float; 3] {
    let [l, m, s] = multiply(&LINEAR_SRGB_TO_OKLMS, value);
    multiply(&OKLMS_TO_OKLAB, &[l.cbrt(), m.cbrt(), s.cbrt()])
}

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLAB_TO_OKLMS: [[Float; 3]; 3] = [
    [ 1.0000000000000000,  0.3963377773761749,  0.2158037573099136 ],
    [ 1.0000000000000000, -0.1055613458156586, -0.0638541728258133 ],
    [ 1.0000000000000000, -0.0894841775298119, -1.2914855480194092 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLMS_TO_LINEAR_SRGB: [[Float; 3]; 3] = [
    [  4.076741636075959,    -3.3077115392580634,  0.23096990318210464 ],
    [ -1.2684379732850317,    2.6097573492876887, -0.34131937600265727 ],
    [ -0.004196076138675429, -0.7034186179359362,  1.7076146940746115  ],
];

/// Convert coordinates for Oklab to linear sRGB. This is a one-hop, direct
/// conversion, even though it requires two matrix multiplications and a
/// coordinate-wise cube.
fn oklab_to_linear_rgb(value: &[Float; 3]) -> [Float; 3] {
    let [l, m, s] = multiply(&OKLAB_TO_OKLMS, value);
    multiply(&OKLMS_TO_LINEAR_SRGB, &[l.powi(3), m.powi(3), s.powi(3)])
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates for Oklch to Oklab. A not-a-number hue has no a/b
/// contribution. This is a one-hop, direct conversion.
#[allow(non_snake_case)]
fn oklch_to_oklab(value: &[Float; 3]) -> [Float; 3] {
    let [L, C, h] = *value;

    if h.is_nan() {
        [L, 0.0, 0.0]
    } else {
        let hue_radian = h.to_radians();
        [L, C * hue_radian.cos(), C * hue_radian.sin()]
    }
}

/// The magnitude of a/b below which an Oklab color is treated as achromatic.
const ACHROMATIC_EPSILON: Float = 0.0002;

/// Convert coordinates for Oklab to Oklch. Grays get zero chroma and a
/// not-a-number hue. This is a one-hop, direct conversion.
#[allow(non_snake_case)]
fn oklab_to_oklch(value: &[Float; 3]) -> [Float; 3] {
    let [L, a, b] = *value;

    let a_m = a.abs();
    if a_m < ACHROMATIC_EPSILON && b.abs() < ACHROMATIC_EPSILON {
        return [L, 0.0, Float::NAN];
    }

    let C = a.hypot(b);
    let h = b.atan2(a).to_degrees();
    let h = if h.is_sign_negative() { h + 360.0 } else { h };

    [L, C, h]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates for sRGB to HSL. Grays, i.e., colors with identical
/// channels, get a not-a-number hue. This is a one-hop, direct conversion.
pub(crate) fn rgb_to_hsl(value: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = *value;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let l = 0.5 * (max + min);
    if delta == 0.0 {
        return [Float::NAN, 0.0, l];
    }

    let s = delta / (1.0 - (max + min - 1.0).abs());
    let h = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    [h * 60.0, s, l]
}

/// Convert coordinates for HSL to sRGB. A not-a-number hue counts as 0 and
/// other hues are reduced modulo 360. This is a one-hop, direct conversion.
pub(crate) fn hsl_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    let [h, s, l] = *value;
    let h = if h.is_nan() { 0.0 } else { h.rem_euclid(360.0) };

    let m1 = l + s * if l < 0.5 { l } else { 1.0 - l };
    let m2 = m1 - (m1 - l) * 2.0 * ((h / 60.0) % 2.0 - 1.0).abs();
    let m3 = 2.0 * l - m1;

    match (h / 60.0).floor() as i32 {
        0 => [m1, m2, m3],
        1 => [m2, m1, m3],
        2 => [m3, m1, m2],
        3 => [m3, m2, m1],
        4 => [m2, m3, m1],
        5 => [m1, m3, m2],
        _ => [m3, m3, m3],
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Normalize the color coordinates before conversion.
///
/// This function replaces not-a-number coordinates with zero. For Oklch, a
/// not-a-number hue also zeroes out the chroma. It does not clamp any
/// coordinates.
#[inline]
pub(crate) fn normalize(model: ColorModel, coordinates: &[Float; 3]) -> [Float; 3] {
    let [mut c1, mut c2, mut c3] = *coordinates;

    if c1.is_nan() {
        c1 = 0.0;
    }
    if c2.is_nan() {
        c2 = 0.0;
    }
    if c3.is_nan() {
        c3 = 0.0;
        if model == ColorModel::Oklch {
            c2 = 0.0;
        }
    }

    [c1, c2, c3]
}

/// Convert the coordinates from one color model to another.
///
/// If both color models are the same, this function returns the coordinates
/// unchanged, including a not-a-number hue. Otherwise, it normalizes the
/// coordinates and converts them, taking direct routes between sRGB and HSL
/// as well as Oklab and Oklch and going through linear sRGB for everything
/// else. This function does not clamp the result.
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub(crate) fn convert(
    from_model: ColorModel,
    to_model: ColorModel,
    coordinates: &[Float; 3],
) -> [Float; 3] {
    use ColorModel::*;

    // 1. Be done if color models are the same. Otherwise normalize.
    if from_model == to_model {
        return *coordinates;
    }
    let coordinates = normalize(from_model, coordinates);

    // 2. Handle in-branch conversions that don't go through linear sRGB
    match (from_model, to_model) {
        (Rgb, Hsl) => return rgb_to_hsl(&coordinates),
        (Hsl, Rgb) => return hsl_to_rgb(&coordinates),
        (Oklab, Oklch) => return oklab_to_oklch(&coordinates),
        (Oklch, Oklab) => return oklch_to_oklab(&coordinates),
        _ => (),
    };

    // 3a. Convert from source color model to linear sRGB
    let intermediate = match from_model {
        Rgb => rgb_to_linear_rgb(&coordinates),
        LinearRgb => coordinates,
        Hsl => rgb_to_linear_rgb(&hsl_to_rgb(&coordinates)),
        Oklab => oklab_to_linear_rgb(&coordinates),
        Oklch => oklab_to_linear_rgb(&oklch_to_oklab(&coordinates)),
    };

    // 3b. Convert from linear sRGB to target color model
    match to_model {
        Rgb => linear_rgb_to_rgb(&intermediate),
        LinearRgb => intermediate,
        Hsl => rgb_to_hsl(&linear_rgb_to_rgb(&intermediate)),
        Oklab => linear_rgb_to_oklab(&intermediate),
        Oklch => oklab_to_oklch(&linear_rgb_to_oklab(&intermediate)),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::assert_close_enough;
    use crate::core::ColorModel::*;

    fn assert_near(actual: &[Float; 3], expected: &[Float; 3], tolerance: Float) {
        for index in 0..3 {
            let (a, e) = (actual[index], expected[index]);
            assert!(
                (a.is_nan() && e.is_nan()) || (a - e).abs() < tolerance,
                "coordinates differ:\n{:?}\n{:?}",
                actual,
                expected
            );
        }
    }

    #[test]
    fn test_linear_rgb_value() {
        assert_close_enough!(linear_rgb_value(0.5), ((0.5 + 0.055) / 1.055 as Float).powf(2.4));
        assert!((linear_rgb_value(0.5) - 0.21404114048223255).abs() < 1e-12);
        assert_eq!(linear_rgb_value(0.0), 0.0);
        assert_eq!(linear_rgb_value(0.04), 0.04 / 12.92);
        assert_eq!(linear_rgb_value(0.04045), 0.04045 / 12.92);
        assert_eq!(linear_rgb_value(1.0), 1.0);
        assert_eq!(linear_rgb_value(-0.5), -linear_rgb_value(0.5));
        assert_eq!(linear_rgb_value(-0.02), -0.02 / 12.92);
    }

    #[test]
    fn test_gamma_round_trip() {
        for value in [-0.7, -0.01, 0.0, 0.002, 0.04, 0.2, 0.5, 0.95, 1.0, 1.3] {
            let there_and_back = gamma_rgb_value(linear_rgb_value(value));
            assert!(
                (there_and_back - value).abs() < 1e-12,
                "{} became {}",
                value,
                there_and_back
            );
        }
    }

    #[test]
    fn test_hsl() {
        assert_near(&rgb_to_hsl(&[1.0, 0.0, 0.0]), &[0.0, 1.0, 0.5], 1e-12);
        assert_near(&rgb_to_hsl(&[0.0, 1.0, 0.0]), &[120.0, 1.0, 0.5], 1e-12);
        assert_near(&rgb_to_hsl(&[0.0, 0.0, 1.0]), &[240.0, 1.0, 0.5], 1e-12);
        assert_near(&rgb_to_hsl(&[1.0, 0.0, 1.0]), &[300.0, 1.0, 0.5], 1e-12);
        assert_near(&rgb_to_hsl(&[0.5, 0.5, 0.5]), &[Float::NAN, 0.0, 0.5], 1e-12);
        assert_near(
            &rgb_to_hsl(&[0.2, 0.4, 0.6]),
            &[210.0, 0.5, 0.4],
            1e-12,
        );

        assert_near(&hsl_to_rgb(&[0.0, 1.0, 0.5]), &[1.0, 0.0, 0.0], 1e-12);
        assert_near(&hsl_to_rgb(&[60.0, 1.0, 0.5]), &[1.0, 1.0, 0.0], 1e-12);
        assert_near(&hsl_to_rgb(&[120.0, 1.0, 0.5]), &[0.0, 1.0, 0.0], 1e-12);
        assert_near(&hsl_to_rgb(&[480.0, 1.0, 0.5]), &[0.0, 1.0, 0.0], 1e-12);
        assert_near(&hsl_to_rgb(&[-120.0, 1.0, 0.5]), &[0.0, 0.0, 1.0], 1e-12);
        assert_near(&hsl_to_rgb(&[Float::NAN, 0.0, 0.25]), &[0.25, 0.25, 0.25], 1e-12);
        assert_near(&hsl_to_rgb(&[210.0, 0.5, 0.4]), &[0.2, 0.4, 0.6], 1e-12);
    }

    #[test]
    fn test_oklab() {
        // Reference values from https://bottosson.github.io/posts/oklab/
        assert_near(
            &convert(Rgb, Oklab, &[1.0, 0.0, 0.0]),
            &[0.627955, 0.224863, 0.125846],
            1e-5,
        );
        assert_near(
            &convert(Rgb, Oklab, &[0.0, 0.0, 1.0]),
            &[0.452014, -0.032457, -0.311528],
            1e-5,
        );
        assert_near(&convert(Rgb, Oklab, &[0.0, 0.0, 0.0]), &[0.0, 0.0, 0.0], 1e-12);

        let white = convert(Rgb, Oklch, &[1.0, 1.0, 1.0]);
        assert_near(&white, &[1.0, 0.0, Float::NAN], 1e-6);

        let red = convert(Rgb, Oklch, &[1.0, 0.0, 0.0]);
        assert_near(&red, &[0.627955, 0.257683, 29.2339], 1e-4);
    }

    #[test]
    fn test_round_trips() {
        let rgb = [0.19215686274509805, 0.47058823529411764, 0.9176470588235294];
        for model in [LinearRgb, Hsl, Oklab, Oklch] {
            let there = convert(Rgb, model, &rgb);
            let back = convert(model, Rgb, &there);
            assert_near(&back, &rgb, 1e-6);
        }
    }

    #[test]
    fn test_oklab_matrices_invert_each_other() {
        for rgb in [
            [0.0, 0.9223379617235564, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0],
            [1.0, 1.0, 1.0],
            [0.25, 0.5, 0.75],
        ] {
            let back = convert(Oklab, Rgb, &convert(Rgb, Oklab, &rgb));
            assert_near(&back, &rgb, 1e-12);
        }
    }

    #[test]
    fn test_same_model_keeps_missing_hue() {
        let gray = [Float::NAN, 0.0, 0.5];
        let same = convert(Hsl, Hsl, &gray);
        assert!(same[0].is_nan());

        let rgb = convert(Hsl, Rgb, &gray);
        assert_near(&rgb, &[0.5, 0.5, 0.5], 1e-12);
    }

    #[test]
    fn test_out_of_range_passes_through() {
        let rgb = convert(LinearRgb, Rgb, &[1.5, -0.25, 0.0]);
        assert!(rgb[0] > 1.0);
        assert!(rgb[1] < 0.0);
    }
}

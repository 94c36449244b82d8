use super::named;
use crate::error::ColorFormatError;
use crate::{ColorModel, Float};

/// A color parsed from a string: its model, coordinates, and optional alpha.
pub(crate) type ParsedColor = (ColorModel, [Float; 3], Option<Float>);

/// Convert the given 24-bit RGB coordinates to floating point coordinates.
#[inline]
pub(crate) fn from_24bit(r: u8, g: u8, b: u8) -> [Float; 3] {
    [r as Float / 255.0, g as Float / 255.0, b as Float / 255.0]
}

/// Parse a color in hashed hexadecimal format. This function transparently
/// handles single-digit coordinates and an optional fourth coordinate for
/// alpha.
fn parse_hashed(s: &str) -> Result<ParsedColor, ColorFormatError> {
    if !s.starts_with('#') {
        return Err(ColorFormatError::UnknownFormat);
    }

    let digits = s.len() - 1;
    let factor = match digits {
        3 | 4 => 1,
        6 | 8 => 2,
        _ => return Err(ColorFormatError::UnexpectedCharacters),
    };

    fn parse_coordinate(s: &str, factor: usize, index: usize) -> Result<u8, ColorFormatError> {
        let t = s
            .get(1 + factor * index..1 + factor * (index + 1))
            .ok_or(ColorFormatError::UnexpectedCharacters)?;
        if !t.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorFormatError::MalformedHex);
        }
        let n = u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)?;

        Ok(if factor == 1 { 16 * n + n } else { n })
    }

    let c1 = parse_coordinate(s, factor, 0)?;
    let c2 = parse_coordinate(s, factor, 1)?;
    let c3 = parse_coordinate(s, factor, 2)?;
    let alpha = if digits / factor == 4 {
        Some(parse_coordinate(s, factor, 3)? as Float / 255.0)
    } else {
        None
    };

    Ok((ColorModel::Rgb, from_24bit(c1, c2, c3), alpha))
}

// --------------------------------------------------------------------------------------------------------------------

/// A single argument of a CSS color function.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Token {
    Number(Float),
    Percentage(Float),
    /// An angle in degrees.
    Angle(Float),
    None,
}

/// Angle units with their factor for conversion to degrees. `grad` must come
/// before `rad`, which is its suffix.
const ANGLE_UNITS: [(&str, Float); 4] = [
    ("deg", 1.0),
    ("grad", 0.9),
    ("rad", 180.0 / std::f64::consts::PI as Float),
    ("turn", 360.0),
];

/// Parse a finite number. The only non-finite number accepted is `nan`, which
/// is how [`format`] writes not-a-number coordinates other than hues.
fn parse_number(s: &str) -> Result<Float, ColorFormatError> {
    if s == "nan" {
        return Ok(Float::NAN);
    }

    let n: Float = s.parse().map_err(|_| ColorFormatError::MalformedNumber)?;
    if n.is_finite() {
        Ok(n)
    } else {
        Err(ColorFormatError::MalformedNumber)
    }
}

fn parse_token(s: &str) -> Result<Token, ColorFormatError> {
    if s == "none" {
        return Ok(Token::None);
    } else if let Some(n) = s.strip_suffix('%') {
        return Ok(Token::Percentage(parse_number(n)?));
    }

    for (unit, factor) in ANGLE_UNITS {
        if let Some(n) = s.strip_suffix(unit) {
            return Ok(Token::Angle(factor * parse_number(n)?));
        }
    }

    Ok(Token::Number(parse_number(s)?))
}

/// The role of a coordinate, which determines how to interpret its token.
#[derive(Clone, Copy, Debug)]
enum Role {
    /// An sRGB channel in `rgb()`, with numbers ranging `0..=255`.
    Channel,
    /// An RGB channel in `color()`, with numbers ranging `0..=1`.
    UnitChannel,
    /// A hue in degrees.
    Hue,
    /// HSL saturation or lightness, with numbers read as percentages.
    Percentage,
    /// Oklab/Oklch lightness.
    Lightness,
    /// Oklab a/b or Oklch chroma, with 100% corresponding to 0.4.
    Colorness,
    Alpha,
}

fn to_coordinate(token: Token, role: Role) -> Result<Float, ColorFormatError> {
    use Role::*;

    match (token, role) {
        (Token::None, Hue) => Ok(Float::NAN),
        (Token::None, _) => Ok(0.0),
        (Token::Angle(degrees), Hue) => Ok(degrees),
        (Token::Angle(_), _) => Err(ColorFormatError::UnexpectedUnit),
        (Token::Percentage(_), Hue) => Err(ColorFormatError::UnexpectedUnit),
        (Token::Number(n), Channel) => Ok(n / 255.0),
        (Token::Number(n), Percentage) => Ok(n / 100.0),
        (Token::Number(n), UnitChannel | Hue | Lightness | Colorness | Alpha) => Ok(n),
        (Token::Percentage(p), Colorness) => Ok(p / 100.0 * 0.4),
        (Token::Percentage(p), _) => Ok(p / 100.0),
    }
}

/// Split the arguments of a CSS color function into three coordinates and
/// an optional alpha. This function accepts both the legacy comma-separated
/// syntax and the modern space-separated syntax with a slash before alpha.
fn split_arguments(body: &str) -> Result<([&str; 3], Option<&str>), ColorFormatError> {
    fn next<'a, I>(iter: &mut I) -> Result<&'a str, ColorFormatError>
    where
        I: Iterator<Item = &'a str>,
    {
        match iter.next() {
            Some(t) if !t.is_empty() => Ok(t),
            _ => Err(ColorFormatError::MissingCoordinate),
        }
    }

    if body.contains(',') {
        let mut iter = body.split(',').map(str::trim);
        let coordinates = [next(&mut iter)?, next(&mut iter)?, next(&mut iter)?];
        let alpha = match iter.next() {
            Some("") => return Err(ColorFormatError::MissingCoordinate),
            other => other,
        };
        if iter.next().is_some() {
            return Err(ColorFormatError::TooManyCoordinates);
        }
        return Ok((coordinates, alpha));
    }

    let (main, alpha) = match body.split_once('/') {
        Some((main, alpha)) => {
            let alpha = alpha.trim();
            if alpha.is_empty() {
                return Err(ColorFormatError::MissingCoordinate);
            } else if alpha.contains(|c: char| c == '/' || c.is_whitespace()) {
                return Err(ColorFormatError::TooManyCoordinates);
            }
            (main, Some(alpha))
        }
        None => (body, None),
    };

    // Iterator eats all leading or trailing white space.
    let mut iter = main.split_whitespace();
    let coordinates = [next(&mut iter)?, next(&mut iter)?, next(&mut iter)?];
    if iter.next().is_some() {
        return Err(ColorFormatError::TooManyCoordinates);
    }

    Ok((coordinates, alpha))
}

/// The CSS color functions, longer prefixes first.
const FUNCTIONS: [(&str, Option<ColorModel>); 7] = [
    ("rgba", Some(ColorModel::Rgb)),
    ("rgb", Some(ColorModel::Rgb)),
    ("hsla", Some(ColorModel::Hsl)),
    ("hsl", Some(ColorModel::Hsl)),
    ("oklab", Some(ColorModel::Oklab)),
    ("oklch", Some(ColorModel::Oklch)),
    ("color", None),
];

/// The color spaces for the `color()` function, longer prefixes first.
const COLOR_SPACES: [(&str, ColorModel); 2] = [
    ("srgb-linear", ColorModel::LinearRgb),
    ("srgb", ColorModel::Rgb),
];

/// Parse a CSS color function, i.e., `rgb()`, `rgba()`, `hsl()`, `hsla()`,
/// `oklab()`, `oklch()`, or `color()` with the `srgb` or `srgb-linear` color
/// space.
fn parse_function(s: &str) -> Result<ParsedColor, ColorFormatError> {
    use ColorModel::*;

    // Munge CSS function name
    let (model, rest) = FUNCTIONS
        .iter()
        .find_map(|(name, model)| s.strip_prefix(name).map(|r| (*model, r)))
        .ok_or(ColorFormatError::UnknownFormat)?;

    // Munge parentheses after trimming leading whitespace
    let rest = rest
        .trim_start()
        .strip_prefix('(')
        .ok_or(ColorFormatError::NoOpeningParenthesis)
        .and_then(|rest| {
            rest.strip_suffix(')')
                .ok_or(ColorFormatError::NoClosingParenthesis)
        })?;

    let (model, body, is_function_color) = if let Some(model) = model {
        (model, rest, false)
    } else {
        // Munge color space
        let rest = rest.trim_start();
        let (model, body) = COLOR_SPACES
            .iter()
            .find_map(|(name, model)| rest.strip_prefix(name).map(|r| (*model, r)))
            .ok_or(ColorFormatError::UnknownColorSpace)?;
        (model, body, true)
    };

    let roles = match model {
        Rgb | LinearRgb if is_function_color => [Role::UnitChannel; 3],
        Rgb | LinearRgb => [Role::Channel; 3],
        Hsl => [Role::Hue, Role::Percentage, Role::Percentage],
        Oklab => [Role::Lightness, Role::Colorness, Role::Colorness],
        Oklch => [Role::Lightness, Role::Colorness, Role::Hue],
    };

    let (arguments, alpha) = split_arguments(body)?;
    let mut coordinates = [0.0; 3];
    for ((coordinate, argument), role) in coordinates.iter_mut().zip(arguments).zip(roles) {
        *coordinate = to_coordinate(parse_token(argument)?, role)?;
    }

    let alpha = match alpha {
        Some(t) => match parse_token(t)? {
            Token::None => None,
            token => Some(to_coordinate(token, Role::Alpha)?),
        },
        None => None,
    };

    Ok((model, coordinates, alpha))
}

// --------------------------------------------------------------------------------------------------------------------

/// Parse the string into a color.
///
/// This function recognizes CSS named colors, `transparent`, the three,
/// four, six, and eight digit hashed hexadecimal formats, and the `rgb()`,
/// `rgba()`, `hsl()`, `hsla()`, `oklab()`, `oklch()`, and `color()` CSS
/// functions with either comma-separated or space-separated arguments.
/// Before trying to parse either of these formats, this function trims
/// leading and trailing white space and converts ASCII letters to lowercase.
pub(crate) fn parse(s: &str) -> Result<ParsedColor, ColorFormatError> {
    let lowercase = s.trim().to_ascii_lowercase(); // Keep around for fn scope
    let s = lowercase.as_str();

    if s.starts_with('#') {
        parse_hashed(s)
    } else if s == "transparent" {
        Ok((ColorModel::Rgb, [0.0; 3], Some(0.0)))
    } else if let Some([r, g, b]) = named::lookup(s) {
        Ok((ColorModel::Rgb, from_24bit(r, g, b), None))
    } else {
        parse_function(s)
    }
}

// --------------------------------------------------------------------------------------------------------------------

fn css_prefix(model: ColorModel) -> &'static str {
    match model {
        ColorModel::Rgb => "color(srgb ",
        ColorModel::LinearRgb => "color(srgb-linear ",
        ColorModel::Hsl => "hsl(",
        ColorModel::Oklab => "oklab(",
        ColorModel::Oklch => "oklch(",
    }
}

/// Write the number rounded to the given decimals, without trailing zeros.
fn write_number(
    f: &mut std::fmt::Formatter<'_>,
    value: Float,
    decimals: usize,
    suffix: &str,
) -> std::fmt::Result {
    if value.is_nan() {
        return write!(f, "NaN{}", suffix);
    }

    // CSS mandates NO trailing zeros whatsoever. But formatting floats with a
    // precision produces trailing zeros. Rounding avoids them, for the most
    // part. If fractional part is zero, we do need an explicit precision---of
    // zero! Rounding may also produce negative zero, which gets dropped.
    let factor = (10.0 as Float).powi(decimals as i32);
    let mut c = (value * factor).round() / factor;
    if c == 0.0 {
        c = 0.0;
    }

    if c == c.trunc() {
        write!(f, "{:.0}{}", c, suffix)
    } else {
        write!(f, "{}{}", c, suffix)
    }
}

/// Format the color as a string.
///
/// This function formats the given coordinates for the given color model as
/// a CSS color with the `color()`, `hsl()`, `oklab()`, or `oklch()` function
/// and space-separated arguments. It respects the formatter's precision,
/// defaulting to 5 digits past the decimal. Since degrees and percentages
/// are up to two orders of magnitude larger than other coordinates, this
/// function uses a precision smaller by 2 for them. A not-a-number hue
/// formats as `none`, i.e., a missing hue. Any other not-a-number coordinate
/// formats as `NaN`. An alpha below 1 is appended after a slash.
pub(crate) fn format(
    model: ColorModel,
    coordinates: &[Float; 3],
    alpha: Option<Float>,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    f.write_str(css_prefix(model))?;

    let precision = f.precision().unwrap_or(5);
    for (index, coordinate) in coordinates.iter().enumerate() {
        if model.hue_index() == Some(index) {
            if coordinate.is_nan() {
                f.write_str("none")?;
            } else {
                write_number(f, *coordinate, precision.saturating_sub(2), "")?;
            }
        } else if model == ColorModel::Hsl {
            write_number(f, 100.0 * coordinate, precision.saturating_sub(2), "%")?;
        } else {
            write_number(f, *coordinate, precision, "")?;
        }

        if index < 2 {
            f.write_str(" ")?;
        }
    }

    if let Some(alpha) = alpha {
        if alpha < 1.0 {
            f.write_str(" / ")?;
            write_number(f, alpha, precision, "")?;
        }
    }

    f.write_str(")")
}

// ====================================================================================================================

//! Utility module with the color wizard's errors.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// An erroneous color format.
///
/// Every variant is a unit variant, which keeps the error cheap to copy and
/// compare. The string that failed to parse is logged at the public boundary
/// instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color format that is neither a named color nor starts with a known
    /// prefix such as `#`, `rgb(`, or `oklch(`.
    UnknownFormat,

    /// A hashed hexadecimal color with the wrong number of digits. For
    /// example, `#00` is missing a digit.
    UnexpectedCharacters,

    /// A hashed hexadecimal color with a character that is not a hexadecimal
    /// digit. For example, `#efg`.
    MalformedHex,

    /// A functional color format without the opening parenthesis. For
    /// example, `rgb 0 0 0)`.
    NoOpeningParenthesis,

    /// A functional color format without the closing parenthesis. For
    /// example, `oklab(1 2 3`.
    NoClosingParenthesis,

    /// A `color()` function naming an unsupported color space. For example,
    /// `color(display-p3 1 1 1)`.
    UnknownColorSpace,

    /// A functional color format that is missing a coordinate. For example,
    /// `rgb(0 0)` or `rgb(0, , 0)`.
    MissingCoordinate,

    /// A functional color format with more coordinates than the color model
    /// has. For example, `hsl(0 0% 0% 0%)`.
    TooManyCoordinates,

    /// A coordinate that is not a number. For example, `oklab(0.5 abc 0)`.
    MalformedNumber,

    /// A coordinate with a unit that does not fit. For example, a hue with a
    /// percentage or `rgb(10deg 0 0)`.
    UnexpectedUnit,
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ColorFormatError::*;

        match self {
            UnknownFormat => f.write_str(
                "color format should be a color name or start with `#`, `rgb()`, `hsl()`, `oklab()`, `oklch()`, or `color()`",
            ),
            UnexpectedCharacters => {
                f.write_str("hashed color format should have 3, 4, 6, or 8 hexadecimal digits")
            }
            MalformedHex => {
                f.write_str("hashed color format should contain hexadecimal digits only")
            }
            NoOpeningParenthesis => {
                f.write_str("color format should include an opening parenthesis but has none")
            }
            NoClosingParenthesis => {
                f.write_str("color format should include a closing parenthesis but has none")
            }
            UnknownColorSpace => {
                f.write_str("color format should use `srgb` or `srgb-linear` but does not")
            }
            MissingCoordinate => {
                f.write_str("color format should have 3 coordinates but is missing one")
            }
            TooManyCoordinates => {
                f.write_str("color format should have 3 coordinates and alpha at most but has more")
            }
            MalformedNumber => {
                f.write_str("color format coordinates should be numbers but are not")
            }
            UnexpectedUnit => {
                f.write_str("color format coordinate has a unit that does not fit the coordinate")
            }
        }
    }
}

impl std::error::Error for ColorFormatError {}

#[cfg(feature = "pyffi")]
impl From<ColorFormatError> for PyErr {
    fn from(value: ColorFormatError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// The failure side of the color wizard's operations.
///
/// All string-level operations return this error instead of panicking. There
/// is a single kind, the parser error, because parsing user-supplied color
/// strings is the only fallible step. Numeric edge cases such as
/// not-a-number coordinates are not errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WizardError {
    /// A user-supplied string does not parse as a color.
    ColorParser(ColorFormatError),
}

impl WizardError {
    /// Get the stable name of this error's kind.
    ///
    /// ```
    /// # use colorwizard::to_rgb;
    /// let error = to_rgb("not-a-color").unwrap_err();
    /// assert_eq!(error.reason(), "ColorParserError");
    /// ```
    pub const fn reason(&self) -> &'static str {
        match *self {
            Self::ColorParser(_) => "ColorParserError",
        }
    }
}

impl From<ColorFormatError> for WizardError {
    fn from(value: ColorFormatError) -> Self {
        Self::ColorParser(value)
    }
}

impl std::fmt::Display for WizardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::ColorParser(ref error) => write!(f, "{}: {}", self.reason(), error),
        }
    }
}

impl std::error::Error for WizardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Self::ColorParser(ref error) => Some(error),
        }
    }
}

#[cfg(feature = "pyffi")]
impl From<WizardError> for PyErr {
    fn from(value: WizardError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

#[cfg(test)]
mod test {
    use super::{ColorFormatError, WizardError};
    use std::error::Error;

    #[test]
    fn test_wizard_error() {
        let error = WizardError::from(ColorFormatError::MalformedHex);
        assert_eq!(error.reason(), "ColorParserError");
        assert_eq!(
            error.to_string(),
            "ColorParserError: hashed color format should contain hexadecimal digits only"
        );
        assert!(error.source().is_some());
    }
}

//! Utility module with prettypalette's errors.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// An invalid channel range.
///
/// This error indicates that a sampler's range for one of the three RGB
/// channels is empty or exceeds `0..256`. Since samplers draw from half-open
/// ranges, a valid range `min..max` satisfies `min < max <= 256`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RangeError {
    /// The offending channel, `0` for red, `1` for green, `2` for blue.
    pub channel: usize,
    /// The offending range.
    pub range: std::ops::Range<u16>,
}

impl RangeError {
    /// Create a new range error.
    pub fn new(channel: usize, range: std::ops::Range<u16>) -> Self {
        Self { channel, range }
    }

    /// Get the name of the offending channel.
    pub fn channel_name(&self) -> &'static str {
        match self.channel {
            0 => "red",
            1 => "green",
            2 => "blue",
            _ => "unknown",
        }
    }
}

impl std::fmt::Display for RangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "{} channel range {}..{} should be non-empty and fit into 0..256",
            self.channel_name(),
            self.range.start,
            self.range.end
        ))
    }
}

impl std::error::Error for RangeError {}

#[cfg(feature = "pyffi")]
impl From<RangeError> for PyErr {
    fn from(value: RangeError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// An error while reading a color list.
#[derive(Debug)]
pub enum ColorListError {
    /// The underlying reader failed.
    Io(std::io::Error),

    /// A token is not a 32-bit decimal integer. The line number is 1-based.
    MalformedColor { line: usize, token: String },
}

impl From<std::io::Error> for ColorListError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<ColorListError> for std::io::Error {
    fn from(value: ColorListError) -> Self {
        match value {
            ColorListError::Io(error) => error,
            other => std::io::Error::new(std::io::ErrorKind::InvalidData, other),
        }
    }
}

impl std::fmt::Display for ColorListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(_) => f.write_str("could not read color list"),
            Self::MalformedColor { line, token } => f.write_fmt(format_args!(
                "color list line {} should contain 32-bit decimal integers but has `{}`",
                line, token
            )),
        }
    }
}

impl std::error::Error for ColorListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(error) => Some(error),
            Self::MalformedColor { .. } => None,
        }
    }
}

#[cfg(feature = "pyffi")]
impl From<ColorListError> for PyErr {
    fn from(value: ColorListError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

#[cfg(test)]
mod test {
    use super::{ColorListError, RangeError};
    use std::error::Error;

    #[test]
    fn test_messages() {
        let error = RangeError::new(1, 200..100);
        assert_eq!(
            error.to_string(),
            "green channel range 200..100 should be non-empty and fit into 0..256"
        );

        let error = ColorListError::MalformedColor {
            line: 3,
            token: "#fff".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "color list line 3 should contain 32-bit decimal integers but has `#fff`"
        );
        assert!(error.source().is_none());
    }

    #[test]
    fn test_io_source() {
        let error = ColorListError::from(std::io::Error::other("boom"));
        assert!(error.source().is_some());

        let io_error = std::io::Error::from(error);
        assert_eq!(io_error.to_string(), "boom");

        let io_error = std::io::Error::from(ColorListError::MalformedColor {
            line: 1,
            token: "x".to_string(),
        });
        assert_eq!(io_error.kind(), std::io::ErrorKind::InvalidData);
    }
}

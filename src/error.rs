//! Error types for visual timer construction and styling.

use thiserror::Error;

/// Errors returned when constructing or configuring a visual timer.
///
/// Every error is raised synchronously by a constructor or setter. Ticking and
/// rendering never fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The requested timer style is not implemented.
    #[error("unsupported timer style: {0}")]
    UnsupportedStyle(String),

    /// A styling property was given a value it cannot take, such as a negative
    /// bar thickness or an unknown cap style name.
    #[error("invalid value for {property}: {value}")]
    InvalidStyle {
        /// Name of the rejected property.
        property: &'static str,
        /// The rejected value, formatted for display.
        value: String,
    },
}

impl Error {
    pub(crate) fn invalid(property: &'static str, value: impl ToString) -> Self {
        Error::InvalidStyle {
            property,
            value: value.to_string(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Checks that a geometric styling value is finite and not negative.
pub(crate) fn non_negative(property: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(Error::invalid(property, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_negative_accepts_zero_and_positive() {
        assert_eq!(non_negative("bar_thickness", 0.0), Ok(0.0));
        assert_eq!(non_negative("bar_thickness", 5.0), Ok(5.0));
    }

    #[test]
    fn test_non_negative_rejects_negative_and_nan() {
        assert!(matches!(
            non_negative("bar_padding", -1.0),
            Err(Error::InvalidStyle {
                property: "bar_padding",
                ..
            })
        ));
        assert!(non_negative("bar_padding", f64::NAN).is_err());
        assert!(non_negative("bar_padding", f64::INFINITY).is_err());
    }

    #[test]
    fn test_error_display() {
        let err = Error::UnsupportedStyle("circle".to_string());
        assert_eq!(err.to_string(), "unsupported timer style: circle");

        let err = Error::invalid("bar_thickness", -2.5);
        assert_eq!(err.to_string(), "invalid value for bar_thickness: -2.5");
    }
}

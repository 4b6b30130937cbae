//! Domain validation errors.

use std::fmt;

/// Errors that can occur when a value is written into a validated field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The phone number contains a character other than digits, `-`, space, `(` or `)`.
    InvalidPhone(String),

    /// The birthday is not a calendar date in `YYYY-MM-DD` form.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {}", phone),
            Self::InvalidBirthday(date) => {
                write!(f, "Invalid date format: {}. Use YYYY-MM-DD", date)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::InvalidPhone("abc".to_string());
        assert_eq!(err.to_string(), "Invalid phone number: abc");

        let err = ValidationError::InvalidBirthday("2020-13-01".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid date format: 2020-13-01. Use YYYY-MM-DD"
        );
    }
}

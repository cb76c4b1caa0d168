//! Token validation errors.

use thiserror::Error;

/// Error returned when a token registry is inconsistent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// A palette entry has an empty name
    #[error("palette entry with value '{value}' has an empty name")]
    EmptyName { value: String },
    /// Two palette entries share a name
    #[error("palette entry '{name}' is defined more than once")]
    DuplicateColor { name: String },
    /// A scale lists the same step twice
    #[error("{scale} scale lists step {step} more than once")]
    DuplicateStep { scale: &'static str, step: String },
    /// A scale other than margin contains a negative step
    #[error("{scale} scale contains negative step {step}; only margin steps may be negative")]
    NegativeStep { scale: &'static str, step: String },
    /// A type scale step is zero, negative or not a number
    #[error("type scale step {step} must be a positive number")]
    InvalidTypeStep { step: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_color_display() {
        let err = TokenError::DuplicateColor {
            name: "red".to_string(),
        };
        assert_eq!(err.to_string(), "palette entry 'red' is defined more than once");
    }

    #[test]
    fn test_negative_step_display() {
        let err = TokenError::NegativeStep {
            scale: "padding",
            step: "-1".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("padding"));
        assert!(msg.contains("-1"));
    }
}

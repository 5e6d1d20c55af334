//! Error types for statistical operations.

use std::fmt;

/// Result type for statistics operations.
pub type StatsResult<T> = Result<T, StatsError>;

/// Errors that can occur during statistical operations.
#[derive(Debug, Clone)]
pub enum StatsError {
    /// Invalid parameter value for a distribution.
    InvalidParameter {
        name: String,
        value: f64,
        reason: String,
    },

    /// Probability value out of range [0, 1].
    InvalidProbability { value: f64 },
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                name,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{}' = {}: {}", name, value, reason)
            }
            Self::InvalidProbability { value } => {
                write!(f, "Invalid probability {}: must be in [0, 1]", value)
            }
        }
    }
}

impl std::error::Error for StatsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StatsError::InvalidParameter {
            name: "p".to_string(),
            value: -0.1,
            reason: "probability must be in [0, 1]".to_string(),
        };
        assert!(err.to_string().contains("p"));
        assert!(err.to_string().contains("-0.1"));

        let err = StatsError::InvalidProbability { value: 1.5 };
        assert!(err.to_string().contains("1.5"));
        assert!(err.to_string().contains("[0, 1]"));
    }
}

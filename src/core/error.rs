//! Error type shared by every stage of a session.

use thiserror::Error;

use super::RowId;

/// Errors that abort a session run.
///
/// None of these are retried: each one is either a rejected configuration
/// or a broken invariant between stages.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    /// Configuration rejected before any round started.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The resolver was asked about a row the layout does not contain.
    #[error("layout data for {row} is missing")]
    MissingRow { row: RowId },

    /// A growth multiplier that is not a finite positive number.
    #[error("invalid multiplier: {multiplier}")]
    InvalidMultiplier { multiplier: f64 },

    /// A row was played before the round's layout was generated.
    #[error("round has no layout yet")]
    RoundNotStarted,

    /// The round already cashed out and cannot advance.
    #[error("round already cashed out")]
    RoundFinished,
}

impl SessionError {
    /// Shorthand for [`SessionError::InvalidConfiguration`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SessionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SessionError::MissingRow { row: RowId::new(7) };
        assert_eq!(err.to_string(), "layout data for Row(7) is missing");

        let err = SessionError::config("target_row must be at least 1");
        assert_eq!(
            err.to_string(),
            "invalid configuration: target_row must be at least 1"
        );

        let err = SessionError::InvalidMultiplier { multiplier: -1.5 };
        assert_eq!(err.to_string(), "invalid multiplier: -1.5");

        assert_eq!(SessionError::RoundNotStarted.to_string(), "round has no layout yet");
    }
}

//! Library error types surfaced by the schedule engine.
//!
//! The engine itself has no transient failure modes: the only fatal input
//! error is a malformed anchor date, and everything else that can fail is a
//! persistence-collaborator error propagated unchanged. Data-integrity
//! problems in individual exceptions are warnings, not errors, and never
//! appear here (the affected exception is skipped and the rest of the week
//! still resolves).

use std::fmt;

/// Error type for schedule resolution failures.
#[derive(Debug)]
pub enum ScheduleError {
    /// The anchor date could not be parsed in the `dd-mm-yyyy` convention.
    InvalidDateFormat(String),
    /// A persistence-collaborator failure, propagated unchanged.
    Store(anyhow::Error),
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDateFormat(input) => {
                write!(f, "Invalid anchor date '{}': expected dd-mm-yyyy", input)
            }
            Self::Store(err) => write!(f, "Schedule store failure: {}", err),
        }
    }
}

impl std::error::Error for ScheduleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidDateFormat(_) => None,
            Self::Store(err) => Some(&**err),
        }
    }
}

impl From<anyhow::Error> for ScheduleError {
    fn from(err: anyhow::Error) -> Self {
        Self::Store(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_format_display() {
        let err = ScheduleError::InvalidDateFormat("2025/09/18".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid anchor date '2025/09/18': expected dd-mm-yyyy"
        );
    }

    #[test]
    fn test_store_error_preserves_source() {
        use std::error::Error;

        let err = ScheduleError::from(anyhow::anyhow!("connection refused"));
        assert!(err.source().is_some());
        assert!(err.to_string().contains("connection refused"));
    }
}

use std::any::Any;

use thiserror::Error;

/// Raised by a check that could not reach a verdict.
///
/// The executor never lets this escape a forge call; it becomes an
/// [`IssueCode::UnexpectedError`](crate::IssueCode::UnexpectedError) issue
/// and aborts the chain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    /// The check returned an error.
    #[error("{0}")]
    Raised(String),
    /// The check panicked.
    #[error("check panicked: {0}")]
    Panicked(String),
}

impl CheckError {
    /// Wraps any displayable error.
    pub fn raised(error: impl std::fmt::Display) -> Self {
        CheckError::Raised(error.to_string())
    }

    /// Converts a panic payload caught by `catch_unwind`.
    pub(crate) fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "non-string panic payload".to_string()
        };
        CheckError::Panicked(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raised_display() {
        let err = CheckError::raised("lookup failed");
        assert_eq!(err.to_string(), "lookup failed");
    }

    #[test]
    fn test_panic_payloads() {
        let err = CheckError::from_panic(Box::new("boom"));
        assert_eq!(err, CheckError::Panicked("boom".to_string()));

        let err = CheckError::from_panic(Box::new(String::from("owned boom")));
        assert_eq!(err.to_string(), "check panicked: owned boom");

        let err = CheckError::from_panic(Box::new(42_u8));
        assert_eq!(err.to_string(), "check panicked: non-string panic payload");
    }
}

//! Error types for the window layer.

use std::fmt;

/// Errors returned by window and widget operations.
///
/// None of these are transient. Callers should not retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    /// An argument violated the operation's contract.
    InvalidArgument {
        /// Description of the violation.
        message: String,
    },

    /// The operation is part of a capability contract but is not available
    /// on this implementor.
    Unsupported {
        /// Name of the rejected operation.
        operation: &'static str,
        /// Why it is rejected.
        reason: &'static str,
    },

    /// The window was already disposed.
    Disposed,
}

impl UiError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        UiError::InvalidArgument {
            message: message.into(),
        }
    }

    pub const fn unsupported(operation: &'static str, reason: &'static str) -> Self {
        UiError::Unsupported { operation, reason }
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, UiError::Unsupported { .. })
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, UiError::InvalidArgument { .. })
    }
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiError::InvalidArgument { message } => write!(f, "Invalid argument: {}", message),
            UiError::Unsupported { operation, reason } => {
                write!(f, "Unsupported operation '{}': {}", operation, reason)
            }
            UiError::Disposed => write!(f, "Window has already been disposed"),
        }
    }
}

impl std::error::Error for UiError {}

/// Result type for window and widget operations.
pub type UiResult<T> = Result<T, UiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            UiError::invalid_argument("widget cannot be reattached").to_string(),
            "Invalid argument: widget cannot be reattached"
        );
        assert_eq!(
            UiError::unsupported("set_bounds", "window bounds cannot be changed").to_string(),
            "Unsupported operation 'set_bounds': window bounds cannot be changed"
        );
        assert_eq!(UiError::Disposed.to_string(), "Window has already been disposed");
    }

    #[test]
    fn test_kind_queries() {
        assert!(UiError::unsupported("a", "b").is_unsupported());
        assert!(!UiError::Disposed.is_unsupported());
        assert!(UiError::invalid_argument("x").is_invalid_argument());
    }
}

//! Error types for the modalg library.
//!
//! Every fallible operation returns [`Error`] through the crate-wide
//! [`Result`] alias. Errors are local to the call that raised them: no
//! operation partially succeeds.

use thiserror::Error;

/// The main error type for the modalg library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // ============ Construction Errors ============
    /// The input vector does not have the length required by the system.
    #[error("dimension mismatch: expected {expected} components, got {actual}")]
    InvalidDimension {
        /// Dimension of the target system.
        expected: usize,
        /// Length of the supplied vector.
        actual: usize,
    },

    /// The system description is not valid for its layout.
    #[error("invalid system: {message}")]
    InvalidSystem {
        /// Description of what is invalid.
        message: String,
    },

    /// The system configuration is out of range (e.g. modulus below 2).
    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        /// Description of what is invalid.
        message: String,
    },

    // ============ Operation Errors ============
    /// A binary operation was applied to elements of different systems.
    #[error("system mismatch in {operation}: operands belong to different systems")]
    SystemMismatch {
        /// Name of the refused operation.
        operation: &'static str,
    },

    /// The exponent is not a non-negative integer.
    #[error("exponent {exponent} is invalid, must be a non-negative integer")]
    InvalidExponent {
        /// Decimal rendering of the rejected exponent.
        exponent: String,
    },
}

/// A specialized `Result` type for modalg operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Create a new `InvalidSystem` error.
    #[must_use]
    pub fn invalid_system(message: impl Into<String>) -> Self {
        Self::InvalidSystem {
            message: message.into(),
        }
    }

    /// Create a new `InvalidConfiguration` error.
    #[must_use]
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimension {
            expected: 3,
            actual: 4,
        };
        assert!(err.to_string().contains("expected 3"));
        assert!(err.to_string().contains("got 4"));

        let err = Error::SystemMismatch { operation: "mul" };
        assert!(err.to_string().contains("mul"));
        assert!(err.to_string().contains("different systems"));

        let err = Error::InvalidExponent {
            exponent: "-3".to_string(),
        };
        assert!(err.to_string().contains("-3"));

        let err = Error::invalid_configuration("modulus 1 is below 2");
        assert!(err.to_string().contains("modulus 1"));
    }

    #[test]
    fn test_error_equality() {
        let err1 = Error::invalid_system("expected 5 constants, got 4");
        let err2 = Error::invalid_system("expected 5 constants, got 4");
        let err3 = Error::invalid_system("expected 9 constants, got 4");

        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }
}

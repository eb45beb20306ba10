//! Programming-contract violations.
//!
//! Domain failures travel as [`Error`](crate::types::Error) values inside an
//! [`Outcome`](crate::types::Outcome). A [`ContractViolation`] is different: it
//! signals that the *caller* broke an API contract (an unknown classification
//! string, an empty metadata key, a second registry configuration). It is
//! returned from the `try_*` operations at the exact call that violated the
//! contract and is never folded into an outcome.

use core::fmt;

/// A broken API contract, reported at the call that broke it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractViolation {
    /// A classification string outside `BusinessError`, `NotFound`, `SystemError`.
    InvalidErrorType(String),
    /// A required argument was empty or null. Holds the argument name.
    NullArgument(&'static str),
    /// The default profile registry was already configured.
    AlreadyConfigured,
}

impl fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidErrorType(value) => write!(
                f,
                "invalid error type '{}': expected BusinessError, NotFound or SystemError",
                value
            ),
            Self::NullArgument(name) => write!(f, "argument '{}' must not be null or empty", name),
            Self::AlreadyConfigured => {
                write!(f, "the default response profile can only be configured once")
            },
        }
    }
}

impl std::error::Error for ContractViolation {}

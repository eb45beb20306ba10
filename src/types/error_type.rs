//! Closed classification of failures.
//!
//! [`ErrorType`] decides the HTTP status and the problem title of a failure
//! response. The mapping lives in [`ErrorType::response_mapping`] and nowhere
//! else; adding a classification means adding a variant and one arm there.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::types::ErrorType;
//!
//! let parsed: ErrorType = "NotFound".parse().unwrap();
//! assert_eq!(parsed.status().as_u16(), 404);
//! assert!("Teapot".parse::<ErrorType>().is_err());
//! ```

use core::fmt;
use core::str::FromStr;

use http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::types::ContractViolation;

/// Classification of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorType {
    /// The request violated a business rule. Rendered as `400 Bad Request`.
    BusinessError,
    /// The requested data does not exist. Rendered as `404 Not Found`.
    NotFound,
    /// Anything unexpected. Rendered as `500 Internal Server Error`.
    SystemError,
}

impl ErrorType {
    /// Every accepted classification, in declaration order.
    pub const ALL: [ErrorType; 3] = [Self::BusinessError, Self::NotFound, Self::SystemError];

    /// Returns the canonical name of the classification.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BusinessError => "BusinessError",
            Self::NotFound => "NotFound",
            Self::SystemError => "SystemError",
        }
    }

    /// Status code and problem title for this classification.
    #[inline]
    pub const fn response_mapping(&self) -> (StatusCode, &'static str) {
        match self {
            Self::BusinessError => (StatusCode::BAD_REQUEST, "business logic error"),
            Self::NotFound => (StatusCode::NOT_FOUND, "requested data not found"),
            Self::SystemError => (StatusCode::INTERNAL_SERVER_ERROR, "system error"),
        }
    }

    #[inline]
    pub const fn status(&self) -> StatusCode {
        self.response_mapping().0
    }

    #[inline]
    pub const fn title(&self) -> &'static str {
        self.response_mapping().1
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorType {
    type Err = ContractViolation;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_str() == value)
            .ok_or_else(|| ContractViolation::InvalidErrorType(value.to_owned()))
    }
}

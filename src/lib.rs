//! Outcome values for fallible operations, and their translation to HTTP
//! responses.
//!
//! Business code returns an [`Outcome`](types::Outcome) instead of propagating
//! raw faults. At the boundary, a [`ResponseProfile`](response::ResponseProfile)
//! turns it into a [`ResponseDescriptor`](response::ResponseDescriptor): a
//! status, headers and either the success payload or a problem document whose
//! title and status follow the error's [`ErrorType`](types::ErrorType).
//!
//! # Examples
//!
//! ## Failing with a classification
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn ship(order_id: u64, paid: bool) -> Outcome<u64> {
//!     ensure!(paid, ErrorType::BusinessError, "order {} is not paid", order_id);
//!     Outcome::success_with(order_id)
//! }
//!
//! let response = ship(7, false).to_value_response_with(&MinimalProfile);
//! let problem = response.problem_document().unwrap();
//!
//! assert_eq!(response.status().as_u16(), 400);
//! assert_eq!(problem.title, "business logic error");
//! assert_eq!(problem.extension("error").unwrap()["message"], "order 7 is not paid");
//! ```
//!
//! ## Absorbing an external fault
//!
//! ```
//! use outcome_rail::types::{Error, ErrorType};
//!
//! let parse = "x1".parse::<u32>().unwrap_err();
//! let err = Error::new("invalid quantity")
//!     .with_error_type(ErrorType::BusinessError)
//!     .caused_by_error(&parse);
//!
//! assert_eq!(err.details(), ["invalid digit found in string"]);
//! ```

/// Early-return macros and internal logging helpers
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Process-wide default profile
pub mod registry;
/// Outcome to response translation
pub mod response;
/// Call-site extension traits
pub mod traits;
/// Outcome, Error and classification types
pub mod types;

/// Async extensions (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Tower integration - Layer and Service implementations (requires `tower` feature)
#[cfg(feature = "tower")]
pub mod tower;

pub use response::{MinimalProfile, ResponseDescriptor, ResponseProfile, ResultTransformer};
pub use types::{ContractViolation, Error, ErrorType, Outcome};

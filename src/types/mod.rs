//! Outcome value model.
//!
//! This module provides the values that business code returns instead of
//! propagating raw faults: [`Outcome`], [`Error`] and its [`ErrorType`]
//! classification, plus [`ContractViolation`] for broken API contracts.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::types::{Error, ErrorType, Outcome};
//!
//! fn find_order(id: u64) -> Outcome<String> {
//!     if id == 0 {
//!         return Error::new("order id must be positive")
//!             .with_error_type(ErrorType::BusinessError)
//!             .into();
//!     }
//!     Outcome::success_with(format!("order-{}", id))
//! }
//!
//! assert!(find_order(0).is_failure());
//! assert_eq!(find_order(7).value().map(String::as_str), Some("order-7"));
//! ```
use smallvec::SmallVec;

pub mod error;
pub mod error_type;
pub mod outcome;
pub mod violation;

pub use error::*;
pub use error_type::*;
pub use outcome::*;
pub use violation::*;

/// SmallVec-backed collection used for accumulating details, trace lines and errors.
///
/// Uses inline storage for up to 1 element to avoid heap allocations
/// in the common case of a single entry.
pub type ErrorVec<E> = SmallVec<[E; 1]>;

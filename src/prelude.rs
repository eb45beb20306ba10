//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn find(id: u64) -> Outcome<&'static str> {
//!     if id != 1 {
//!         fail!(ErrorType::NotFound, "no order {}", id);
//!     }
//!     Outcome::success_with("first")
//! }
//!
//! assert_eq!(find(2).to_value_response().status().as_u16(), 404);
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`fail!`], [`ensure!`], [`capture_fault!`]
//! - **Types**: [`Outcome`], [`Error`], [`ErrorType`], [`ContractViolation`],
//!   [`MinimalProfile`], [`ContextAwareProfile`], [`ResponseDescriptor`]
//! - **Traits**: [`ResponseExt`], [`ValueResponseExt`], [`ResponseProfile`], [`Fault`]
//! - **Async** (with `async`): [`FutureOutcomeExt`], [`RequestScope`]

// Macros
pub use crate::{capture_fault, ensure, fail};

// Core types
pub use crate::response::{
    ContextAwareProfile, MinimalProfile, ResponseDescriptor, ResponseProfile, ResultTransformer,
    ServiceInfo,
};
pub use crate::types::{ContractViolation, Error, ErrorType, Fault, Outcome};

// Traits
pub use crate::traits::{ResponseExt, ValueResponseExt};

#[cfg(feature = "async")]
pub use crate::async_ext::{FutureOutcomeExt, RequestScope};

//! Call-site entry points from an outcome to a response.
//!
//! - [`ResponseExt`]: `Outcome<()>` to [`ResponseDescriptor`](crate::response::ResponseDescriptor)
//! - [`ValueResponseExt`]: `Outcome<T: Serialize>` to a descriptor carrying `T` as JSON
//!
//! Without an explicit profile both use the default from
//! [`registry::default_profile`](crate::registry::default_profile).
//!
//! # Examples
//!
//! ```
//! use outcome_rail::response::MinimalProfile;
//! use outcome_rail::traits::{ResponseExt, ValueResponseExt};
//! use outcome_rail::types::{Error, Outcome};
//!
//! let created = Outcome::success().to_response();
//! assert_eq!(created.status().as_u16(), 200);
//!
//! let missing: Outcome<u32> = Error::not_found().clone().into();
//! let response = missing.to_value_response_with(&MinimalProfile);
//! assert_eq!(response.status().as_u16(), 500);
//! ```

pub mod response_ext;

pub use response_ext::{ResponseExt, ValueResponseExt};

//! Ergonomic macros for returning failures early.
//!
//! - [`macro@crate::fail`] - Returns a failure from the enclosing function, either
//!   from a ready-made [`Error`](crate::types::Error) or from a classification and
//!   a `format!` message.
//! - [`macro@crate::ensure`] - Returns a failure unless a condition holds.
//! - [`macro@crate::capture_fault`] - Snapshots a standard error together with a
//!   backtrace of the current call site, ready for
//!   [`Error::caused_by`](crate::types::Error::caused_by).
//!
//! # Examples
//!
//! ```
//! use outcome_rail::types::{ErrorType, Outcome};
//! use outcome_rail::{ensure, fail};
//!
//! fn reserve(stock: u32, wanted: u32) -> Outcome<u32> {
//!     ensure!(wanted > 0, ErrorType::BusinessError, "nothing to reserve");
//!     if wanted > stock {
//!         fail!(ErrorType::BusinessError, "only {} items left", stock);
//!     }
//!     Outcome::success_with(stock - wanted)
//! }
//!
//! assert_eq!(reserve(5, 2).value(), Some(&3));
//! assert_eq!(reserve(1, 2).error().message(), "only 1 items left");
//! assert!(reserve(1, 0).is_failure());
//! ```

/// Returns a failed outcome from the enclosing function.
///
/// # Syntax
///
/// - `fail!(error)` - Returns `error.into()`
/// - `fail!(error_type, "format {}", args)` - Builds an [`Error`](crate::types::Error)
///   with the formatted message and the given classification
///
/// The enclosing function must return a type implementing `From<Error>`,
/// such as [`Outcome`](crate::types::Outcome).
///
/// # Examples
///
/// ```
/// use outcome_rail::fail;
/// use outcome_rail::types::{Error, Outcome};
///
/// fn lookup(id: u64) -> Outcome<&'static str> {
///     if id != 1 {
///         fail!(Error::not_found().clone());
///     }
///     Outcome::success_with("first")
/// }
///
/// assert_eq!(lookup(2).error().code(), "Error.NotFound");
/// ```
#[macro_export]
macro_rules! fail {
    ($error_type:expr, $($arg:tt)+) => {
        return ::core::convert::From::from(
            $crate::types::Error::new(::std::format!($($arg)+)).with_error_type($error_type),
        )
    };
    ($error:expr $(,)?) => {
        return ::core::convert::From::from($error)
    };
}

/// Returns a failed outcome unless `condition` holds.
///
/// Accepts the same failure arguments as [`macro@crate::fail`].
#[macro_export]
macro_rules! ensure {
    ($condition:expr, $($rest:tt)+) => {
        if !$condition {
            $crate::fail!($($rest)+);
        }
    };
}

/// Snapshots a standard error chain with a forced backtrace of this call site.
///
/// Expands to [`CapturedFault::capture`](crate::types::CapturedFault::capture).
///
/// # Examples
///
/// ```
/// use outcome_rail::capture_fault;
/// use outcome_rail::types::Error;
///
/// let io = std::io::Error::other("disk full");
/// let err = Error::new("saving order failed").caused_by(&capture_fault!(io));
///
/// assert_eq!(err.details(), ["disk full"]);
/// ```
#[macro_export]
macro_rules! capture_fault {
    ($error:expr) => {
        $crate::types::CapturedFault::capture(&$error)
    };
}

macro_rules! log_debug {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)+);
    };
}

macro_rules! log_info {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        ::tracing::info!($($arg)+);
    };
}

macro_rules! log_warn {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        ::tracing::warn!($($arg)+);
    };
}

macro_rules! log_error {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        ::tracing::error!($($arg)+);
    };
}

pub(crate) use {log_debug, log_error, log_info, log_warn};

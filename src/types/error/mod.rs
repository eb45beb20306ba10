//! Structured failure value.
//!
//! [`Error`] is what travels inside a failed [`Outcome`](crate::types::Outcome):
//! a message, an optional code, an optional [`ErrorType`] classification, an
//! open metadata map, and the detail and trace lines accumulated while the
//! failure bubbled up.
//!
//! - Classification is read through [`Error::error_type`], which falls back to
//!   [`ErrorType::SystemError`] when none was set.
//! - External faults enter only through [`Error::caused_by`] (see [`Fault`]).
//! - [`Error::none`], [`Error::not_found`] and [`Error::null_value`] are
//!   process-wide sentinels.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::types::{Error, ErrorType};
//!
//! let err = Error::new("bad input")
//!     .with_error_code("ORDER-17")
//!     .with_error_type(ErrorType::BusinessError)
//!     .with_details("quantity must be positive");
//!
//! assert_eq!(err.error_type(), ErrorType::BusinessError);
//! assert_eq!(err.details(), ["quantity must be positive"]);
//! assert_eq!(Error::new("boom").error_type(), ErrorType::SystemError);
//! ```

use std::borrow::Cow;
use std::collections::BTreeMap;

use chrono::{DateTime, Local};
use serde_json::Value;

use crate::types::{ContractViolation, ErrorType, ErrorVec};

mod fault;
mod render;

pub use fault::{position_lines, CapturedFault, Fault};
pub use render::{RenderedError, TIMESTAMP_FORMAT};

static NONE: Error = Error::blank("", "", true);
static NULL_VALUE: Error = Error::blank("Error.NullValue", "the expected value is null", false);
static NOT_FOUND: Error =
    Error::blank("Error.NotFound", "the expected value was not found", false);

/// Structured failure carried by a failed outcome.
///
/// Identity fields (message, code, classification) are set by the builder
/// methods; metadata, details and trace lines only ever grow.
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    message: Cow<'static, str>,
    code: Cow<'static, str>,
    classification: Option<ErrorType>,
    metadata: BTreeMap<String, Value>,
    details: ErrorVec<String>,
    trace_lines: ErrorVec<String>,
    // Set only on `NONE`; copies of it keep the mark.
    no_error: bool,
}

impl Error {
    const fn blank(code: &'static str, message: &'static str, no_error: bool) -> Self {
        Self {
            message: Cow::Borrowed(message),
            code: Cow::Borrowed(code),
            classification: None,
            metadata: BTreeMap::new(),
            details: ErrorVec::new_const(),
            trace_lines: ErrorVec::new_const(),
            no_error,
        }
    }

    /// Creates an unclassified error with only a message.
    #[inline]
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self { message: message.into(), ..Self::blank("", "", false) }
    }

    /// Creates an unclassified error with a message and a code.
    #[inline]
    pub fn with_code(
        message: impl Into<Cow<'static, str>>,
        code: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self { code: code.into(), ..Self::new(message) }
    }

    /// Creates a classified error.
    #[inline]
    pub fn classified(
        message: impl Into<Cow<'static, str>>,
        code: impl Into<Cow<'static, str>>,
        error_type: ErrorType,
    ) -> Self {
        Self::with_code(message, code).with_error_type(error_type)
    }

    /// Creates an error whose classification is given by name.
    ///
    /// An empty `error_type` leaves the error unclassified.
    ///
    /// # Errors
    ///
    /// [`ContractViolation::InvalidErrorType`] when `error_type` is neither
    /// empty nor one of `BusinessError`, `NotFound`, `SystemError`.
    pub fn try_classified(
        message: impl Into<Cow<'static, str>>,
        code: impl Into<Cow<'static, str>>,
        error_type: &str,
    ) -> Result<Self, ContractViolation> {
        let error = Self::with_code(message, code);
        if error_type.is_empty() {
            return Ok(error);
        }
        error.try_with_error_type(error_type)
    }

    /// The "no error" sentinel. Every successful outcome reports this error.
    #[inline]
    pub fn none() -> &'static Error {
        &NONE
    }

    /// Sentinel used by [`Outcome::create`](crate::types::Outcome::create) for absent values.
    #[inline]
    pub fn null_value() -> &'static Error {
        &NULL_VALUE
    }

    /// Generic "not found" sentinel.
    ///
    /// It carries no classification, so it renders as a system error unless
    /// a copy is reclassified with [`Error::with_error_type`].
    #[inline]
    pub fn not_found() -> &'static Error {
        &NOT_FOUND
    }

    /// Returns `true` if this error is the [`Error::none`] sentinel or a clone of it.
    ///
    /// A freshly built error is never the sentinel, even with an empty message
    /// and code.
    #[inline]
    pub fn is_none(&self) -> bool {
        self.no_error
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the code, or an empty string if none was set.
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the classification exactly as stored.
    #[inline]
    pub fn classification(&self) -> Option<ErrorType> {
        self.classification
    }

    /// Returns the classification, treating unclassified errors as system errors.
    #[inline]
    pub fn error_type(&self) -> ErrorType {
        self.classification.unwrap_or(ErrorType::SystemError)
    }

    /// Returns the current local time. Not the creation time.
    #[inline]
    pub fn timestamp(&self) -> DateTime<Local> {
        Local::now()
    }

    #[inline]
    pub fn metadata(&self) -> &BTreeMap<String, Value> {
        &self.metadata
    }

    /// Detail lines in insertion order, duplicates included.
    #[inline]
    pub fn details(&self) -> &[String] {
        &self.details
    }

    /// Source-position lines extracted from ingested faults.
    #[inline]
    pub fn trace_lines(&self) -> &[String] {
        &self.trace_lines
    }

    /// Appends a detail line. Empty text is ignored.
    #[inline]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        let details = details.into();
        if !details.is_empty() {
            self.details.push(details);
        }
        self
    }

    /// Replaces the code.
    #[inline]
    pub fn with_error_code(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets (or overrides) the classification.
    #[inline]
    pub fn with_error_type(mut self, error_type: ErrorType) -> Self {
        self.classification = Some(error_type);
        self
    }

    /// Sets the classification from its name.
    ///
    /// # Errors
    ///
    /// [`ContractViolation::InvalidErrorType`] unless `error_type` is exactly
    /// `BusinessError`, `NotFound` or `SystemError`.
    pub fn try_with_error_type(self, error_type: &str) -> Result<Self, ContractViolation> {
        Ok(self.with_error_type(error_type.parse()?))
    }

    /// Ingests an external fault chain without a depth limit.
    ///
    /// See [`Error::caused_by_with_depth`].
    #[inline]
    pub fn caused_by(self, fault: &dyn Fault) -> Self {
        self.caused_by_with_depth(fault, usize::MAX)
    }

    /// Ingests at most `depth` faults of an external fault chain.
    ///
    /// Messages are taken outer to inner and appended to the details, each
    /// non-empty message once. Source-position lines of every fault's trace are appended
    /// to the trace lines until a fault yields none.
    pub fn caused_by_with_depth(mut self, fault: &dyn Fault, depth: usize) -> Self {
        let mut messages: Vec<String> = Vec::new();
        let mut tracing_active = true;
        let mut current = Some(fault);
        let mut visited = 0usize;

        while let Some(link) = current {
            if visited >= depth {
                break;
            }
            visited += 1;

            let message = link.message();
            if !messages.contains(&message) {
                messages.push(message);
            }

            if tracing_active {
                let lines = link.trace().map(|trace| position_lines(&trace)).unwrap_or_default();
                if lines.is_empty() {
                    tracing_active = false;
                } else {
                    self.trace_lines.extend(lines);
                }
            }

            current = link.cause();
        }

        self.details.extend(messages.into_iter().filter(|message| !message.is_empty()));
        self
    }

    /// Ingests a standard error and its `source()` chain.
    #[inline]
    pub fn caused_by_error<E>(self, error: &E) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        self.caused_by(&CapturedFault::from_error(error))
    }

    /// Inserts or replaces a metadata entry.
    ///
    /// # Errors
    ///
    /// [`ContractViolation::NullArgument`] if `key` is empty or `value` is `null`.
    pub fn with_metadata(
        mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Self, ContractViolation> {
        let key = key.into();
        if key.is_empty() {
            return Err(ContractViolation::NullArgument("key"));
        }
        let value = value.into();
        if value.is_null() {
            return Err(ContractViolation::NullArgument("value"));
        }
        self.metadata.insert(key, value);
        Ok(self)
    }

    /// Upserts every entry of `entries`, stopping at the first invalid one.
    pub fn with_metadata_map<I, K, V>(self, entries: I) -> Result<Self, ContractViolation>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        entries
            .into_iter()
            .try_fold(self, |error, (key, value)| error.with_metadata(key, value))
    }

    /// Looks up a metadata entry.
    #[inline]
    pub fn metadata_value(&self, key: &str) -> Option<&Value> {
        self.metadata.get(key)
    }

    /// # Errors
    ///
    /// [`ContractViolation::NullArgument`] if `key` is empty.
    pub fn has_metadata_key(&self, key: &str) -> Result<bool, ContractViolation> {
        if key.is_empty() {
            return Err(ContractViolation::NullArgument("key"));
        }
        Ok(self.metadata.contains_key(key))
    }

    /// Returns whether `key` exists and its value satisfies `predicate`.
    ///
    /// # Errors
    ///
    /// [`ContractViolation::NullArgument`] if `key` is empty.
    pub fn has_metadata<P>(&self, key: &str, predicate: P) -> Result<bool, ContractViolation>
    where
        P: FnOnce(&Value) -> bool,
    {
        if key.is_empty() {
            return Err(ContractViolation::NullArgument("key"));
        }
        Ok(self.metadata.get(key).is_some_and(predicate))
    }
}

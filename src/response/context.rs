//! Per-call inputs handed to a [`ResponseProfile`](super::ResponseProfile).
//!
//! Contexts borrow from the outcome being translated, so a profile can read
//! the error but never mutate it.

use serde_json::Value;

use crate::types::{Error, Outcome};

/// Input of [`ResponseProfile::on_failure`](super::ResponseProfile::on_failure).
#[derive(Debug, Clone, Copy)]
pub struct FailureContext<'a> {
    error: &'a Error,
    errors: &'a [Error],
}

impl<'a> FailureContext<'a> {
    #[inline]
    pub fn new(error: &'a Error) -> Self {
        Self { error, errors: core::slice::from_ref(error) }
    }

    /// Context for a failure with several errors; `errors[0]` is the primary one.
    ///
    /// Falls back to [`Error::none`] for an empty slice.
    #[inline]
    pub fn with_errors(errors: &'a [Error]) -> Self {
        Self { error: errors.first().unwrap_or_else(|| Error::none()), errors }
    }

    /// The primary error.
    #[inline]
    pub fn error(&self) -> &'a Error {
        self.error
    }

    #[inline]
    pub fn errors(&self) -> &'a [Error] {
        self.errors
    }
}

/// Input of [`ResponseProfile::on_success`](super::ResponseProfile::on_success).
#[derive(Debug, Clone, Copy)]
pub struct SuccessContext<'a> {
    outcome: &'a Outcome,
}

impl<'a> SuccessContext<'a> {
    #[inline]
    pub fn new(outcome: &'a Outcome) -> Self {
        Self { outcome }
    }

    #[inline]
    pub fn outcome(&self) -> &'a Outcome {
        self.outcome
    }
}

/// Input of [`ResponseProfile::on_success_value`](super::ResponseProfile::on_success_value).
///
/// The payload has already been serialized, which keeps profiles object-safe.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueSuccessContext {
    value: Value,
    type_name: &'static str,
}

impl ValueSuccessContext {
    #[inline]
    pub fn new(value: Value, type_name: &'static str) -> Self {
        Self { value, type_name }
    }

    #[inline]
    pub fn value(&self) -> &Value {
        &self.value
    }

    #[inline]
    pub fn into_value(self) -> Value {
        self.value
    }

    /// Rust type name of the original payload.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

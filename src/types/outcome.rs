//! Two-armed outcome of a fallible operation.
//!
//! An [`Outcome`] is either a success (with a payload, `()` when there is none)
//! or a failure carrying at least one [`Error`]. The factories are the only
//! way to build one and they enforce the invariant:
//!
//! - a success reports [`Error::none`] and has no errors;
//! - a failure has at least one error and none of them is [`Error::none`].
//!
//! # Examples
//!
//! ```
//! use outcome_rail::types::{Error, ErrorType, Outcome};
//!
//! fn parse_quantity(raw: &str) -> Outcome<u32> {
//!     match raw.parse::<u32>() {
//!         Ok(0) => Error::new("quantity must be positive")
//!             .with_error_type(ErrorType::BusinessError)
//!             .into(),
//!         Ok(value) => Outcome::success_with(value),
//!         Err(err) => Error::new("quantity is not a number").caused_by_error(&err).into(),
//!     }
//! }
//!
//! assert_eq!(parse_quantity("3").value(), Some(&3));
//! assert!(parse_quantity("0").is_failure());
//! assert_eq!(parse_quantity("x").error().error_type(), ErrorType::SystemError);
//! ```

use std::borrow::Cow;

use crate::types::{ContractViolation, Error, ErrorType, ErrorVec};

/// Success with a payload of type `T`, or failure with one or more [`Error`]s.
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<T = ()> {
    value: Option<T>,
    errors: ErrorVec<Error>,
}

impl Outcome<()> {
    /// A success without payload.
    #[inline]
    pub fn success() -> Self {
        Self::success_with(())
    }
}

impl<T> Outcome<T> {
    /// Single construction point; aborts on an invariant violation.
    ///
    /// # Panics
    ///
    /// If a success carries a real error, or a failure carries no error or
    /// the [`Error::none`] sentinel.
    pub(crate) fn from_parts(is_success: bool, value: Option<T>, errors: ErrorVec<Error>) -> Self {
        if is_success {
            assert!(
                errors.iter().all(Error::is_none),
                "a successful outcome must not carry an error"
            );
            Self { value, errors: ErrorVec::new() }
        } else {
            assert!(
                !errors.is_empty() && !errors.iter().any(Error::is_none),
                "a failed outcome must carry an error other than Error::none()"
            );
            Self { value: None, errors }
        }
    }

    #[inline]
    pub fn success_with(value: T) -> Self {
        Self::from_parts(true, Some(value), ErrorVec::new())
    }

    /// # Panics
    ///
    /// If `error` is [`Error::none`].
    #[inline]
    pub fn failure(error: Error) -> Self {
        Self::failures([error])
    }

    /// A failure carrying several errors; the first one is the primary error.
    ///
    /// # Panics
    ///
    /// If `errors` is empty or contains [`Error::none`].
    pub fn failures<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = Error>,
    {
        Self::from_parts(false, None, errors.into_iter().collect())
    }

    /// Builds the error inline and fails with it.
    #[inline]
    pub fn failure_classified(
        message: impl Into<Cow<'static, str>>,
        code: impl Into<Cow<'static, str>>,
        error_type: ErrorType,
    ) -> Self {
        Self::failure(Error::classified(message, code, error_type))
    }

    /// Like [`Outcome::failure_classified`] with the classification given by name.
    ///
    /// # Errors
    ///
    /// See [`Error::try_classified`].
    pub fn try_failure_with(
        message: impl Into<Cow<'static, str>>,
        code: impl Into<Cow<'static, str>>,
        error_type: &str,
    ) -> Result<Self, ContractViolation> {
        Error::try_classified(message, code, error_type).map(Self::failure)
    }

    /// Succeeds with `value`, or fails with [`Error::null_value`] when absent.
    #[inline]
    pub fn create(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::success_with(value),
            None => Self::failure(Error::null_value().clone()),
        }
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The primary error, or [`Error::none`] on success.
    #[inline]
    pub fn error(&self) -> &Error {
        self.errors.first().unwrap_or_else(|| Error::none())
    }

    /// Every error of a failure; empty on success.
    #[inline]
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    #[inline]
    pub fn has_error<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Error) -> bool,
    {
        self.errors.iter().any(predicate)
    }

    pub fn errors_matching<'a, P>(&'a self, mut predicate: P) -> impl Iterator<Item = &'a Error>
    where
        P: FnMut(&Error) -> bool + 'a,
    {
        self.errors.iter().filter(move |error| predicate(*error))
    }

    /// The payload; always `None` on failure.
    #[inline]
    pub fn value(&self) -> Option<&T> {
        if self.is_failure() {
            return None;
        }
        self.value.as_ref()
    }

    #[inline]
    pub fn into_value(self) -> Option<T> {
        if self.is_failure() {
            return None;
        }
        self.value
    }

    /// The payload, or `T::default()` on failure.
    #[inline]
    pub fn value_or_default(&self) -> T
    where
        T: Default + Clone,
    {
        self.value().cloned().unwrap_or_default()
    }

    /// Converts into a std `Result`, keeping only the primary error.
    pub fn into_result(self) -> Result<T, Error> {
        match (self.value, self.errors.into_iter().next()) {
            (_, Some(error)) => Err(error),
            (Some(value), None) => Ok(value),
            (None, None) => unreachable!("successful outcomes always hold a value"),
        }
    }

    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        Outcome { value: self.value.map(f), errors: self.errors }
    }

    /// Chains another fallible step on success.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self.value {
            Some(value) if self.errors.is_empty() => f(value),
            _ => Outcome { value: None, errors: self.errors },
        }
    }

    /// Rewrites every error of a failure.
    ///
    /// # Panics
    ///
    /// If `f` turns an error into [`Error::none`].
    pub fn map_errors<F>(self, f: F) -> Self
    where
        F: FnMut(Error) -> Error,
    {
        if self.is_success() {
            return self;
        }
        Self::from_parts(false, None, self.errors.into_iter().map(f).collect())
    }

    /// Replaces a failure with the outcome produced by `f`.
    pub fn recover<F>(self, f: F) -> Self
    where
        F: FnOnce(&[Error]) -> Self,
    {
        if self.is_success() {
            return self;
        }
        f(&self.errors)
    }

    #[inline]
    pub fn inspect_failure<F>(self, f: F) -> Self
    where
        F: FnOnce(&Error),
    {
        if let Some(error) = self.errors.first() {
            f(error);
        }
        self
    }
}

impl<T> From<Error> for Outcome<T> {
    /// Lets a function returning an outcome fail with `return error.into();`.
    #[inline]
    fn from(error: Error) -> Self {
        Self::failure(error)
    }
}

impl<T> From<Vec<Error>> for Outcome<T> {
    /// Fails with every error of the list. See [`Outcome::failures`].
    #[inline]
    fn from(errors: Vec<Error>) -> Self {
        Self::failures(errors)
    }
}

impl<T> From<Result<T, Error>> for Outcome<T> {
    #[inline]
    fn from(result: Result<T, Error>) -> Self {
        match result {
            Ok(value) => Self::success_with(value),
            Err(error) => Self::failure(error),
        }
    }
}

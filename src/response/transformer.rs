//! Dispatch of an outcome to the matching profile method.

use serde::Serialize;

use super::{FailureContext, ResponseDescriptor, ResponseProfile, SuccessContext, ValueSuccessContext};
use crate::types::{Error, ErrorType, Outcome};
use crate::macros::{log_debug, log_error};

/// Stateless dispatcher from an [`Outcome`] to a [`ResponseProfile`].
///
/// Failures go to [`ResponseProfile::on_failure`], successes to
/// [`ResponseProfile::on_success`] (no payload) or
/// [`ResponseProfile::on_success_value`] (serialized payload).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResultTransformer;

impl ResultTransformer {
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    pub fn transform(&self, outcome: &Outcome, profile: &dyn ResponseProfile) -> ResponseDescriptor {
        if outcome.is_failure() {
            return self.dispatch_failure(outcome.errors(), profile);
        }
        log_debug!("dispatching success outcome");
        profile.on_success(SuccessContext::new(outcome))
    }

    /// Dispatches an outcome with a payload.
    ///
    /// A payload that cannot be serialized to JSON is reported through
    /// [`ResponseProfile::on_failure`] as a [`ErrorType::SystemError`].
    pub fn transform_value<T>(
        &self,
        outcome: &Outcome<T>,
        profile: &dyn ResponseProfile,
    ) -> ResponseDescriptor
    where
        T: Serialize,
    {
        let Some(value) = outcome.value() else {
            return self.dispatch_failure(outcome.errors(), profile);
        };

        match serde_json::to_value(value) {
            Ok(json) => {
                log_debug!(payload = core::any::type_name::<T>(), "dispatching success outcome");
                profile.on_success_value(ValueSuccessContext::new(json, core::any::type_name::<T>()))
            },
            Err(err) => {
                log_error!(error = %err, "success payload could not be serialized");
                let error = Error::classified(
                    "the response payload could not be serialized",
                    "Error.Serialization",
                    ErrorType::SystemError,
                )
                .caused_by_error(&err);
                profile.on_failure(FailureContext::new(&error))
            },
        }
    }

    fn dispatch_failure(&self, errors: &[Error], profile: &dyn ResponseProfile) -> ResponseDescriptor {
        let context = FailureContext::with_errors(errors);
        log_debug!(
            error_type = %context.error().error_type(),
            code = context.error().code(),
            "dispatching failure outcome"
        );
        profile.on_failure(context)
    }
}

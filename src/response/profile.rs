//! The [`ResponseProfile`] strategy and its minimal implementation.

use std::sync::Arc;

use serde_json::Value;

use super::{FailureContext, ProblemDocument, ResponseDescriptor, SuccessContext, ValueSuccessContext};

/// Strategy translating an outcome into a [`ResponseDescriptor`].
///
/// Profiles are shared across request handlers, so they must be `Send + Sync`
/// and must not keep per-request state.
pub trait ResponseProfile: Send + Sync {
    /// Success without payload.
    fn on_success(&self, context: SuccessContext<'_>) -> ResponseDescriptor;

    /// Success with a serialized payload.
    fn on_success_value(&self, context: ValueSuccessContext) -> ResponseDescriptor;

    fn on_failure(&self, context: FailureContext<'_>) -> ResponseDescriptor;
}

impl<P> ResponseProfile for Arc<P>
where
    P: ResponseProfile + ?Sized,
{
    fn on_success(&self, context: SuccessContext<'_>) -> ResponseDescriptor {
        (**self).on_success(context)
    }

    fn on_success_value(&self, context: ValueSuccessContext) -> ResponseDescriptor {
        (**self).on_success_value(context)
    }

    fn on_failure(&self, context: FailureContext<'_>) -> ResponseDescriptor {
        (**self).on_failure(context)
    }
}

/// Problem document shared by the built-in profiles.
///
/// Title and status come from the primary error's classification; the
/// rendered error goes under `error`. Secondary errors, if any, are listed
/// under `errors`.
pub fn failure_problem(context: &FailureContext<'_>) -> ProblemDocument {
    let error = context.error();
    let mut problem = ProblemDocument::new(error.error_type()).with_extension("error", rendered(error));

    if context.errors().len() > 1 {
        let all: Vec<Value> = context.errors().iter().map(rendered).collect();
        problem = problem.with_extension("errors", all);
    }
    problem
}

fn rendered(error: &crate::types::Error) -> Value {
    serde_json::to_value(error.render()).unwrap_or(Value::Null)
}

/// Profile that needs nothing but the outcome itself.
///
/// - success: `200`, payload as body (empty when there is none);
/// - failure: status and title from the classification, error under `error`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinimalProfile;

impl ResponseProfile for MinimalProfile {
    fn on_success(&self, _context: SuccessContext<'_>) -> ResponseDescriptor {
        ResponseDescriptor::ok(None)
    }

    fn on_success_value(&self, context: ValueSuccessContext) -> ResponseDescriptor {
        match context.into_value() {
            Value::Null => ResponseDescriptor::ok(None),
            value => ResponseDescriptor::ok(Some(value)),
        }
    }

    fn on_failure(&self, context: FailureContext<'_>) -> ResponseDescriptor {
        ResponseDescriptor::problem(failure_problem(&context))
    }
}

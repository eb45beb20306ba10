//! Extension traits turning an [`Outcome`] into a [`ResponseDescriptor`].

use serde::Serialize;

use crate::registry;
use crate::response::{ResponseDescriptor, ResponseProfile, ResultTransformer};
use crate::types::Outcome;

/// Translation of a payload-less outcome.
pub trait ResponseExt {
    /// Translates with the registry's default profile.
    fn to_response(&self) -> ResponseDescriptor {
        self.to_response_with(&*registry::default_profile())
    }

    fn to_response_with(&self, profile: &dyn ResponseProfile) -> ResponseDescriptor;
}

impl ResponseExt for Outcome {
    #[inline]
    fn to_response_with(&self, profile: &dyn ResponseProfile) -> ResponseDescriptor {
        ResultTransformer::new().transform(self, profile)
    }
}

/// Translation of an outcome whose success payload becomes the response body.
///
/// # Examples
///
/// ```
/// use outcome_rail::traits::ValueResponseExt;
/// use outcome_rail::types::Outcome;
///
/// let response = Outcome::success_with(vec![1, 2, 3]).to_value_response();
/// assert_eq!(response.payload().unwrap(), &serde_json::json!([1, 2, 3]));
/// ```
pub trait ValueResponseExt {
    /// Translates with the registry's default profile.
    fn to_value_response(&self) -> ResponseDescriptor {
        self.to_value_response_with(&*registry::default_profile())
    }

    fn to_value_response_with(&self, profile: &dyn ResponseProfile) -> ResponseDescriptor;
}

impl<T> ValueResponseExt for Outcome<T>
where
    T: Serialize,
{
    #[inline]
    fn to_value_response_with(&self, profile: &dyn ResponseProfile) -> ResponseDescriptor {
        ResultTransformer::new().transform_value(self, profile)
    }
}

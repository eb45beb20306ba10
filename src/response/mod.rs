//! Outcome to HTTP response translation.
//!
//! A [`ResponseProfile`] decides how an outcome looks on the wire; the
//! [`ResultTransformer`] picks the success or failure path of that profile.
//! Both produce a [`ResponseDescriptor`]: status, headers and a body that is
//! either empty, an opaque JSON payload, or a [`ProblemDocument`].
//!
//! # Examples
//!
//! ```
//! use outcome_rail::response::{MinimalProfile, ResultTransformer};
//! use outcome_rail::types::{Error, ErrorType, Outcome};
//!
//! let outcome: Outcome =
//!     Error::new("bad input").with_error_type(ErrorType::BusinessError).into();
//! let response = ResultTransformer::new().transform(&outcome, &MinimalProfile);
//!
//! assert_eq!(response.status().as_u16(), 400);
//! let problem = response.problem_document().unwrap();
//! assert_eq!(problem.title, "business logic error");
//! assert_eq!(problem.extension("error").unwrap()["message"], "bad input");
//! ```

use std::collections::BTreeMap;

use http::header::{HeaderName, HeaderValue, CONTENT_TYPE};
use http::{HeaderMap, StatusCode};
use serde::Serialize;
use serde_json::Value;

use crate::macros::log_warn;
use crate::types::ErrorType;

pub mod context;
pub mod context_aware;
pub mod profile;
pub mod transformer;

pub use context::*;
pub use context_aware::*;
pub use profile::*;
pub use transformer::*;

/// Media type of problem documents.
pub const APPLICATION_PROBLEM_JSON: &str = "application/problem+json";
/// Media type of success payloads.
pub const APPLICATION_JSON: &str = "application/json";

/// Structured failure body (`title`, `status` and free-form extensions).
///
/// Extensions are flattened next to `title` and `status` when serialized;
/// they can never shadow those two members.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProblemDocument {
    pub title: String,
    pub status: u16,
    #[serde(flatten)]
    extensions: BTreeMap<String, Value>,
}

const RESERVED_MEMBERS: [&str; 2] = ["title", "status"];

impl ProblemDocument {
    /// Creates a document whose title and status come from `error_type`.
    pub fn new(error_type: ErrorType) -> Self {
        let (status, title) = error_type.response_mapping();
        Self { title: title.to_owned(), status: status.as_u16(), extensions: BTreeMap::new() }
    }

    /// Inserts (or replaces) an extension member.
    ///
    /// `title` and `status` are reserved; extensions with those names are
    /// dropped. Set the typed fields instead.
    pub fn with_extension(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if RESERVED_MEMBERS.contains(&key.as_str()) {
            log_warn!(member = %key, "reserved problem member ignored as extension");
            return self;
        }
        self.extensions.insert(key, value.into());
        self
    }

    #[inline]
    pub fn extension(&self, key: &str) -> Option<&Value> {
        self.extensions.get(key)
    }

    #[inline]
    pub fn extensions(&self) -> &BTreeMap<String, Value> {
        &self.extensions
    }
}

/// Body of a [`ResponseDescriptor`].
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Empty,
    Payload(Value),
    Problem(ProblemDocument),
}

/// Abstract HTTP response produced by a profile.
///
/// The host serializes and sends it; [`ResponseDescriptor::into_http`] does
/// this for `http`-based hosts.
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseDescriptor {
    status: StatusCode,
    headers: HeaderMap,
    body: ResponseBody,
}

impl ResponseDescriptor {
    /// A response with the given status, no headers and no body.
    #[inline]
    pub fn new(status: StatusCode) -> Self {
        Self { status, headers: HeaderMap::new(), body: ResponseBody::Empty }
    }

    /// `200 OK` with the payload as JSON body, or an empty body.
    pub fn ok(payload: Option<Value>) -> Self {
        match payload {
            Some(value) => Self::new(StatusCode::OK)
                .with_header(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON))
                .with_body(ResponseBody::Payload(value)),
            None => Self::new(StatusCode::OK),
        }
    }

    /// A problem response; the status is taken from the document.
    pub fn problem(problem: ProblemDocument) -> Self {
        let status =
            StatusCode::from_u16(problem.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Self::new(status)
            .with_header(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_PROBLEM_JSON))
            .with_body(ResponseBody::Problem(problem))
    }

    #[inline]
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// Sets a header, replacing any previous value.
    #[inline]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    #[inline]
    pub fn with_body(mut self, body: ResponseBody) -> Self {
        self.body = body;
        self
    }

    #[inline]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    #[inline]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    #[inline]
    pub fn body(&self) -> &ResponseBody {
        &self.body
    }

    /// The problem document, if this is a failure response.
    #[inline]
    pub fn problem_document(&self) -> Option<&ProblemDocument> {
        match &self.body {
            ResponseBody::Problem(problem) => Some(problem),
            _ => None,
        }
    }

    /// The JSON payload, if this is a success response with a body.
    #[inline]
    pub fn payload(&self) -> Option<&Value> {
        match &self.body {
            ResponseBody::Payload(value) => Some(value),
            _ => None,
        }
    }

    /// Serializes the body and converts into an [`http::Response`].
    pub fn into_http(self) -> http::Response<String> {
        let body = match &self.body {
            ResponseBody::Empty => String::new(),
            ResponseBody::Payload(value) => value.to_string(),
            ResponseBody::Problem(problem) => {
                serde_json::to_string(problem).unwrap_or_else(|_| String::new())
            },
        };

        let mut response = http::Response::new(body);
        *response.status_mut() = self.status;
        *response.headers_mut() = self.headers;
        response
    }
}

//! External fault chains and source-position extraction.

use std::backtrace::Backtrace;

/// An external fault that an [`Error`](super::Error) can absorb.
///
/// A fault exposes its own message, an optional trace text, and the next
/// fault of its cause chain.
pub trait Fault {
    fn message(&self) -> String;

    /// Raw trace text, e.g. a rendered [`Backtrace`].
    fn trace(&self) -> Option<String> {
        None
    }

    fn cause(&self) -> Option<&dyn Fault> {
        None
    }
}

/// Owned snapshot of a fault chain.
///
/// Built by hand, from a standard error with [`CapturedFault::from_error`],
/// or with a backtrace of the capture site via [`CapturedFault::capture`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedFault {
    message: String,
    trace: Option<String>,
    cause: Option<Box<CapturedFault>>,
}

impl CapturedFault {
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), trace: None, cause: None }
    }

    #[inline]
    pub fn with_trace(mut self, trace: impl Into<String>) -> Self {
        self.trace = Some(trace.into());
        self
    }

    #[inline]
    pub fn with_cause(mut self, cause: CapturedFault) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Snapshots `error` and its `source()` chain, without traces.
    pub fn from_error<E>(error: &E) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        let mut messages = vec![error.to_string()];
        let mut source = error.source();
        while let Some(inner) = source {
            messages.push(inner.to_string());
            source = inner.source();
        }

        let mut chain: Option<CapturedFault> = None;
        for message in messages.into_iter().rev() {
            let link = CapturedFault::new(message);
            chain = Some(match chain {
                Some(cause) => link.with_cause(cause),
                None => link,
            });
        }
        chain.unwrap_or_else(|| CapturedFault::new(String::new()))
    }

    /// Snapshots `error` and attaches a backtrace of the current call site to
    /// the outermost fault.
    pub fn capture<E>(error: &E) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        Self::from_error(error).with_trace(Backtrace::force_capture().to_string())
    }
}

impl Fault for CapturedFault {
    fn message(&self) -> String {
        self.message.clone()
    }

    fn trace(&self) -> Option<String> {
        self.trace.clone()
    }

    fn cause(&self) -> Option<&dyn Fault> {
        self.cause.as_deref().map(|cause| cause as &dyn Fault)
    }
}

/// Extracts the source positions of a trace text.
///
/// Only lines of the form `at <path>:<line>` or `at <path>:<line>:<column>`
/// count; the returned entries are the text after `at `.
///
/// ```
/// use outcome_rail::types::position_lines;
///
/// let trace = "   0: app::handler\n             at ./src/handler.rs:42:9\n   1: main";
/// assert_eq!(position_lines(trace), ["./src/handler.rs:42:9"]);
/// ```
pub fn position_lines(trace: &str) -> Vec<String> {
    trace
        .lines()
        .filter_map(|line| line.trim().strip_prefix("at "))
        .map(str::trim)
        .filter(|location| is_source_position(location))
        .map(str::to_owned)
        .collect()
}

fn is_source_position(location: &str) -> bool {
    let Some(head) = strip_number(location) else {
        return false;
    };
    let path = strip_number(head).unwrap_or(head);
    !path.is_empty()
}

fn strip_number(text: &str) -> Option<&str> {
    let (head, tail) = text.rsplit_once(':')?;
    (!tail.is_empty() && tail.bytes().all(|b| b.is_ascii_digit())).then_some(head)
}

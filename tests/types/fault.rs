use outcome_rail::types::{CapturedFault, Error, Fault};

#[derive(Debug)]
struct Outer {
    inner: std::io::Error,
}

impl std::fmt::Display for Outer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("loading inventory failed")
    }
}

impl std::error::Error for Outer {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.inner)
    }
}

struct Looping;

impl Fault for Looping {
    fn message(&self) -> String {
        "again".into()
    }

    fn cause(&self) -> Option<&dyn Fault> {
        Some(self)
    }
}

#[test]
fn caused_by_appends_chain_messages_outer_to_inner() {
    let fault = Outer { inner: std::io::Error::other("connection reset") };
    let err = Error::new("stock lookup failed").caused_by_error(&fault);

    assert_eq!(err.details(), ["loading inventory failed", "connection reset"]);
    assert!(err.trace_lines().is_empty());
}

#[test]
fn caused_by_deduplicates_messages_within_one_call() {
    let fault = CapturedFault::new("timeout")
        .with_cause(CapturedFault::new("timeout").with_cause(CapturedFault::new("socket closed")));
    let err = Error::new("x").with_details("timeout").caused_by(&fault);

    // the earlier detail is kept; dedup only applies within the ingestion
    assert_eq!(err.details(), ["timeout", "timeout", "socket closed"]);
}

#[test]
fn caused_by_skips_empty_messages() {
    let fault = CapturedFault::new("").with_cause(CapturedFault::new("root"));
    let err = Error::new("x").caused_by(&fault);
    assert_eq!(err.details(), ["root"]);
}

#[test]
fn trace_traversal_stops_at_first_fault_without_positions() {
    let fault = CapturedFault::new("outer")
        .with_trace("0: handler\n    at src/api.rs:10:5\n1: router\n    at src/router.rs:3")
        .with_cause(
            CapturedFault::new("middle")
                .with_trace("no positions here")
                .with_cause(CapturedFault::new("inner").with_trace("at src/db.rs:99:1")),
        );

    let err = Error::new("x").caused_by(&fault);

    assert_eq!(err.trace_lines(), ["src/api.rs:10:5", "src/router.rs:3"]);
    assert_eq!(err.details(), ["outer", "middle", "inner"]);
}

#[test]
fn depth_limit_bounds_cyclic_chains() {
    let err = Error::new("x").caused_by_with_depth(&Looping, 16);
    assert_eq!(err.details(), ["again"]);

    let err = Error::new("x").caused_by_with_depth(&Looping, 0);
    assert!(err.details().is_empty());
}

#[test]
fn captured_fault_snapshot_keeps_backtrace_text() {
    let io = std::io::Error::other("disk full");
    let fault = CapturedFault::capture(&io);

    assert_eq!(fault.message(), "disk full");
    assert!(fault.trace().is_some());
}

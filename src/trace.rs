//! Explicit, injectable trace sink for the verifiers.
//!
//! The reference Python implementation gated every diagnostic line behind
//! a process-wide `config.enableDebugLogging` flag. That hides state a
//! caller can't see or scope, so here a `Tracer` is passed explicitly into
//! each verifier call instead. `NoopTracer` is the zero-overhead default
//! (the call sites are a single virtual-dispatch no-op); swap in
//! `PrintTracer`, or any other `Tracer` impl, to see the same
//! position-keyed trace lines the draft's worked examples use.

/// A sink for human-readable trace lines keyed by AS position.
pub trait Tracer {
    fn trace(&self, message: &str);
}

/// Discards every trace line. Used as the default so verification has no
/// observable tracing cost unless a caller opts in.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    fn trace(&self, _message: &str) {}
}

/// Prints every trace line to stdout, prefixed for readability.
pub struct PrintTracer;

impl Tracer for PrintTracer {
    fn trace(&self, message: &str) {
        println!("{}", message);
    }
}

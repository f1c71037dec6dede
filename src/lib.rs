//! Core ASPA-based BGP AS_PATH verification engine.
//!
//! Implements draft-ietf-sidrops-aspa-verification's upstream and
//! downstream procedures as three independently-derived algorithms that
//! must agree on every input: a [`verifiers::reference`] transcription of
//! the draft text, a single-pass [`verifiers::optimized`] scan, and a
//! sentinel-based [`verifiers::simplified`] scan. [`harness`] runs all
//! three and treats the reference as authoritative.

pub mod harness;
pub mod hop;
pub mod shared;
pub mod trace;
pub mod verifiers;

pub use harness::{run_case, run_suite, Disagreement, HarnessError, Scenario};
pub use hop::{hop, hop0, hop_sentinel};
pub use shared::{
    describe_position, AsPath, AspaMap, Direction, EmptyPathError, Hop, InvalidIndexError, Verdict,
    VerifierId, ASN,
};
pub use trace::{NoopTracer, PrintTracer, Tracer};

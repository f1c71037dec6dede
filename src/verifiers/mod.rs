//! The three algorithmic variants that must
//! agree on every input, plus the plumbing the cross-validation harness
//! uses to run all of them uniformly.

pub mod optimized;
pub mod reference;
pub mod simplified;

use crate::shared::{AsPath, AspaMap, Direction, EmptyPathError, Verdict, VerifierId};
use crate::trace::Tracer;

/// Signature shared by every verifier's tracer-free entry point.
pub type VerifyFn = fn(&AspaMap, &AsPath, Direction) -> Result<Verdict, EmptyPathError>;

/// Signature shared by every verifier's tracing entry point.
pub type VerifyTracedFn =
    fn(&AspaMap, &AsPath, Direction, &dyn Tracer) -> Result<Verdict, EmptyPathError>;

/// All three variants paired with their identifier, in a stable order.
/// The cross-validation harness iterates this so that adding a fourth
/// variant (the draft leaves room for additional variants)
/// only means extending this list.
pub const ALL: [(VerifierId, VerifyFn); 3] = [
    (VerifierId::Reference, reference::verify),
    (VerifierId::Optimized, optimized::verify),
    (VerifierId::Simplified, simplified::verify),
];

pub const ALL_TRACED: [(VerifierId, VerifyTracedFn); 3] = [
    (VerifierId::Reference, reference::verify_traced),
    (VerifierId::Optimized, optimized::verify_traced),
    (VerifierId::Simplified, simplified::verify_traced),
];

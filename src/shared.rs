use std::collections::{HashMap, HashSet};
use std::fmt;

/// An Autonomous System Number. Treated opaquely everywhere except for
/// equality and membership tests.
pub type ASN = u32;

/// Mapping from a customer ASN to the set of ASNs it authorizes as
/// providers. An absent key means "no ASPA published for this customer"
/// (`Hop::NoAttestation`); a present-but-empty set means "an ASPA was
/// published that authorizes no providers at all" (every outgoing edge is
/// `Hop::NotProviderPlus`). These two cases are distinct and a plain
/// `HashMap` preserves the distinction without extra bookkeeping.
pub type AspaMap = HashMap<ASN, HashSet<ASN>>;

/// The ordered sequence of ASNs on an observed route, in *received* order:
/// index 0 is the neighbor that announced the route, index N-1 is the
/// origin AS.
pub type AsPath = Vec<ASN>;

/// Which side of the announcement this AS_PATH arrived on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Direction {
    /// Received from a customer.
    Upstream,
    /// Received from a provider or peer.
    Downstream,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Upstream => "UPSTREAM",
            Direction::Downstream => "DOWNSTREAM",
        };
        write!(f, "{}", s)
    }
}

/// The outcome of checking a single directed (customer, provider) hop
/// against the ASPA map. Kept as a three-valued tagged enum rather than a
/// pair of booleans, which would admit a fourth, invalid state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Hop {
    /// No ASPA is published for the claimed customer.
    NoAttestation,
    /// An ASPA is published, but it does not authorize the claimed
    /// provider.
    NotProviderPlus,
    /// An ASPA is published and authorizes the claimed provider.
    ProviderPlus,
}

impl fmt::Display for Hop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Hop::NoAttestation => "nA",
            Hop::NotProviderPlus => "nP+",
            Hop::ProviderPlus => "P+",
        };
        write!(f, "{}", s)
    }
}

/// The result of verifying an AS_PATH.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Verdict {
    Valid,
    Invalid,
    Unknown,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Verdict::Valid => "VALID",
            Verdict::Invalid => "INVALID",
            Verdict::Unknown => "UNKNOWN",
        };
        write!(f, "{}", s)
    }
}

/// Identifies which of the three algorithmic variants produced a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub enum VerifierId {
    Reference,
    Optimized,
    Simplified,
}

impl fmt::Display for VerifierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            VerifierId::Reference => "reference",
            VerifierId::Optimized => "optimized",
            VerifierId::Simplified => "simplified",
        };
        write!(f, "{}", s)
    }
}

/// The AS_PATH passed to a verifier had length zero. This indicates a bug
/// in the BGP-layer caller; it is not retryable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyPathError;

impl fmt::Display for EmptyPathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AS_PATH must contain at least one ASN")
    }
}

impl std::error::Error for EmptyPathError {}

/// The hop oracle was invoked with `(i, j)` outside the path's valid
/// index range. This is an internal contract violation of a verifier, not
/// a caller-facing condition -- a correct verifier never triggers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidIndexError {
    pub i: i64,
    pub j: i64,
    pub n: usize,
}

impl fmt::Display for InvalidIndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid hop index i={} j={}, both must be in [1, {}]",
            self.i, self.j, self.n
        )
    }
}

impl std::error::Error for InvalidIndexError {}

/// Renders the 1-based position `i` (possibly a sentinel, `0` or `N+1`)
/// the way the draft's own worked examples describe positions: `"0"` for
/// the left sentinel, `"N+k"` for a right sentinel, `"#i:ASN"` otherwise.
pub fn describe_position(path: &[ASN], i: i64) -> String {
    let n = path.len() as i64;
    if i == 0 {
        "0".to_string()
    } else if i > n {
        format!("N+{}", i - n)
    } else {
        format!("#{}:{}", i, path[(n - i) as usize])
    }
}

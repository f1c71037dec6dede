//! Simplified verifier: a single 1-based scan with
//! virtual sentinel hops at positions `0` and `N+1` standing in for the
//! verifying AS. The sentinel rules fold the
//! direction-specific trivial cases into the scan itself, so the same
//! up-ramp/down-ramp/opposing-`nP+` shape handles both Upstream and
//! Downstream without a separate branch per direction.

use crate::hop::hop_sentinel;
use crate::shared::{describe_position, AsPath, AspaMap, Direction, EmptyPathError, Hop, Verdict};
use crate::trace::{NoopTracer, Tracer};

pub fn verify(aspa: &AspaMap, path: &AsPath, direction: Direction) -> Result<Verdict, EmptyPathError> {
    verify_traced(aspa, path, direction, &NoopTracer)
}

pub fn verify_traced(
    aspa: &AspaMap,
    path: &AsPath,
    direction: Direction,
    tracer: &dyn Tracer,
) -> Result<Verdict, EmptyPathError> {
    let n = path.len() as i64;
    if n == 0 {
        return Err(EmptyPathError);
    }

    let checked_hop = |i: i64, j: i64| -> Hop {
        let result = hop_sentinel(aspa, path, i, j, direction)
            .expect("simplified verifier only queries (N+1,N)/(N,N+1) sentinels or in-range hops");
        tracer.trace(&format!(
            "Hop {} C->P {} is {}",
            describe_position(path, i),
            describe_position(path, j),
            result
        ));
        result
    };

    // Up-ramp end: advance from 1 while each forward hop is Provider+.
    // On Upstream, reaching N+1 means the whole path (plus the entry
    // sentinel) is one continuous chain.
    let mut u = 1;
    while u < n + 1 && checked_hop(u, u + 1) == Hop::ProviderPlus {
        u += 1;
    }

    // Down-ramp start: recede from N+1 while each backward hop is
    // Provider+.
    let mut d = n + 1;
    while d > u && checked_hop(d, d - 1) == Hop::ProviderPlus {
        d -= 1;
    }

    if d - u <= 1 {
        tracer.trace("ramps meet with at most one hop of gap, VALID");
        return Ok(Verdict::Valid);
    }

    // Opposing nP+ search, right-facing: scan the gap from the up-ramp
    // side toward the down-ramp side.
    let mut found_np_from_right = false;
    let mut uu = u;
    while uu < d - 1 && !found_np_from_right {
        uu += 1;
        found_np_from_right = checked_hop(uu - 1, uu) == Hop::NotProviderPlus;
    }

    // Opposing nP+ search, left-facing: scan the gap from the down-ramp
    // side back toward where the right-facing scan stopped.
    let mut found_np_from_left = false;
    let mut dd = d;
    while dd > uu && !found_np_from_left {
        dd -= 1;
        found_np_from_left = checked_hop(dd + 1, dd) == Hop::NotProviderPlus;
    }

    if found_np_from_right && (found_np_from_left || direction == Direction::Upstream) {
        tracer.trace("opposing nP+ hops found, INVALID");
        Ok(Verdict::Invalid)
    } else {
        Ok(Verdict::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    fn aspa_of(pairs: &[(u32, &[u32])]) -> AspaMap {
        pairs
            .iter()
            .map(|(k, v)| (*k, v.iter().copied().collect::<HashSet<_>>()))
            .collect::<HashMap<_, _>>()
    }

    #[test]
    fn empty_path_fails() {
        let aspa = aspa_of(&[]);
        let path: AsPath = vec![];
        assert_eq!(verify(&aspa, &path, Direction::Upstream), Err(EmptyPathError));
    }

    #[test]
    fn upstream_single_hop_trivially_valid() {
        let aspa = aspa_of(&[]);
        let path: AsPath = vec![20];
        assert_eq!(verify(&aspa, &path, Direction::Upstream), Ok(Verdict::Valid));
    }

    #[test]
    fn downstream_adversarial_two_hop_path_is_still_valid() {
        // Even with ASPAs that would make the single internal hop nP+ in
        // both directions, a two-hop downstream path has no room for a
        // gap and must stay Valid.
        let aspa = aspa_of(&[(20, &[]), (30, &[])]);
        let path: AsPath = vec![20, 30];
        assert_eq!(verify(&aspa, &path, Direction::Downstream), Ok(Verdict::Valid));
    }

    #[test]
    fn upstream_all_attested_chain_is_valid() {
        let aspa = aspa_of(&[(40, &[30]), (30, &[20])]);
        let path: AsPath = vec![20, 30, 40];
        assert_eq!(verify(&aspa, &path, Direction::Upstream), Ok(Verdict::Valid));
    }
}

//! Reference verifier: a direct transcription of the
//! draft's upstream (section 6.1) and downstream (section 6.2.2)
//! algorithms. This is the oracle every other variant is checked against.

use crate::hop::{hop, trace_hop};
use crate::shared::{AsPath, AspaMap, Direction, EmptyPathError, Hop, Verdict};
use crate::trace::{NoopTracer, Tracer};

/// Verify `path` against `aspa` for `direction`, with tracing disabled.
pub fn verify(aspa: &AspaMap, path: &AsPath, direction: Direction) -> Result<Verdict, EmptyPathError> {
    verify_traced(aspa, path, direction, &NoopTracer)
}

/// Verify `path` against `aspa` for `direction`, emitting one trace line
/// per hop check via `tracer`.
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
        let result = hop(aspa, path, i, j).expect("reference verifier only queries in-range hops");
        trace_hop(tracer, path, i, j, result);
        result
    };

    match direction {
        Direction::Upstream => {
            tracer.trace("applying upstream (section 6.1) algorithm");

            // 3. If N = 1, the procedure halts with "Valid".
            if n == 1 {
                tracer.trace("N=1, trivially VALID");
                return Ok(Verdict::Valid);
            }

            // If any hop(i-1, i) for 2 <= i <= N is "Not Provider+", halt
            // "Invalid". This pass must complete before the nA pass below
            // runs: nP+ dominates nA.
            for i in 2..=n {
                if checked_hop(i - 1, i) == Hop::NotProviderPlus {
                    tracer.trace("nP+ on upstream path, INVALID");
                    return Ok(Verdict::Invalid);
                }
            }

            // Else, if any hop(i-1, i) is "No Attestation", halt "Unknown".
            for i in 2..=n {
                if checked_hop(i - 1, i) == Hop::NoAttestation {
                    tracer.trace("nA on upstream path, UNKNOWN");
                    return Ok(Verdict::Unknown);
                }
            }

            Ok(Verdict::Valid)
        }
        Direction::Downstream => {
            tracer.trace("applying downstream (section 6.2.2) algorithm");

            // 3. If 1 <= N <= 2, the procedure halts with "Valid".
            if n <= 2 {
                tracer.trace("N<=2, trivially VALID");
                return Ok(Verdict::Valid);
            }

            // Lowest u in [2, N] with hop(u-1, u) == nP+; N+1 if none.
            let mut u_min = n + 1;
            for u in 2..=n {
                if checked_hop(u - 1, u) == Hop::NotProviderPlus {
                    u_min = u;
                    break;
                }
            }

            // Highest v in [1, N-1] with hop(v+1, v) == nP+; 0 if none.
            let mut v_max = 0;
            for v in (1..=n - 1).rev() {
                if checked_hop(v + 1, v) == Hop::NotProviderPlus {
                    v_max = v;
                    break;
                }
            }

            if u_min <= v_max {
                tracer.trace("u_min <= v_max, INVALID");
                return Ok(Verdict::Invalid);
            }

            // Up-ramp: largest K such that hop(i-1, i) == P+ for all
            // 2 <= i <= K; 1 if no such i.
            let mut k = 1;
            for i in 2..=n {
                if checked_hop(i - 1, i) == Hop::ProviderPlus {
                    k += 1;
                } else {
                    break;
                }
            }

            // Down-ramp: smallest L such that hop(j+1, j) == P+ for all
            // N-1 >= j >= L; N if no such j.
            let mut l = n;
            for j in (1..=n - 1).rev() {
                if checked_hop(j + 1, j) == Hop::ProviderPlus {
                    l -= 1;
                } else {
                    break;
                }
            }

            if l - k <= 1 {
                tracer.trace("L - K <= 1, VALID");
                Ok(Verdict::Valid)
            } else {
                Ok(Verdict::Unknown)
            }
        }
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
        assert_eq!(verify(&aspa, &path, Direction::Downstream), Err(EmptyPathError));
    }

    #[test]
    fn upstream_single_hop_trivially_valid() {
        let aspa = aspa_of(&[]);
        let path: AsPath = vec![20];
        assert_eq!(verify(&aspa, &path, Direction::Upstream), Ok(Verdict::Valid));
    }

    #[test]
    fn downstream_up_to_two_hops_trivially_valid() {
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

    #[test]
    fn upstream_forward_nP_dominates_nA() {
        // hop(1,2) is nA (100 unattested); hop(2,3).. eventually nP+ on the
        // chain. nP+ must still win over the earlier nA.
        let aspa = aspa_of(&[(70, &[80])]);
        let path: AsPath = vec![100, 30, 40, 50, 60, 70, 80];
        assert_eq!(verify(&aspa, &path, Direction::Upstream), Ok(Verdict::Invalid));
    }
}

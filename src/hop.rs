//! The hop oracle: a pure function deciding the
//! relation between a claimed customer and a claimed provider along an
//! AS_PATH, given a set of ASPA attestations.

use crate::shared::{describe_position, AsPath, AspaMap, Direction, Hop, InvalidIndexError, ASN};
use crate::trace::Tracer;

/// `hop(aspa, path, i, j)` with `1 <= i, j <= N` (`N = path.len()`).
///
/// Lets `C = path[N-i]` (the claimed customer) and `P = path[N-j]` (the
/// claimed provider):
/// - `C` has no key in `aspa` -> `NoAttestation`.
/// - `P` is in `aspa[C]` -> `ProviderPlus`.
/// - otherwise -> `NotProviderPlus`.
///
/// `i == j` is accepted syntactically (the draft never exercises it, but
/// nothing here requires `i != j`).
pub fn hop(aspa: &AspaMap, path: &AsPath, i: i64, j: i64) -> Result<Hop, InvalidIndexError> {
    let n = path.len() as i64;
    if i < 1 || i > n || j < 1 || j > n {
        return Err(InvalidIndexError {
            i,
            j,
            n: path.len(),
        });
    }
    Ok(hop_kind(aspa, path[(n - i) as usize], path[(n - j) as usize]))
}

/// 0-based convenience wrapper used by the optimized verifier, with
/// `0 <= i, j <= N-1` (`0` = neighbor, `N-1` = origin). Converts to the
/// 1-based call via `hop0(i, j) = hop(N-i, N-j)`, per the bridging
/// invariant tying the two coordinate systems together.
pub fn hop0(aspa: &AspaMap, path: &AsPath, i: i64, j: i64) -> Result<Hop, InvalidIndexError> {
    let n = path.len() as i64;
    if i < 0 || i > n - 1 || j < 0 || j > n - 1 {
        return Err(InvalidIndexError {
            i,
            j,
            n: path.len(),
        });
    }
    hop(aspa, path, n - i, n - j)
}

/// Sentinel-aware 1-based oracle for the simplified verifier, with
/// `0 <= i, j <= N+1`. Positions `0` and `N+1` are virtual endpoints
/// representing the verifying AS; every other `(i, j)` delegates to
/// [`hop`]. `(N+1, N)` and `(N, N+1)` are the only valid sentinel
/// queries -- anything else touching `0` or `N+1` is a contract
/// violation, matching the draft's own restriction that the virtual
/// endpoints only ever appear adjacent to the real path.
pub fn hop_sentinel(
    aspa: &AspaMap,
    path: &AsPath,
    i: i64,
    j: i64,
    direction: Direction,
) -> Result<Hop, InvalidIndexError> {
    let n = path.len() as i64;
    if (i, j) == (n + 1, n) {
        return Ok(if direction == Direction::Downstream {
            Hop::ProviderPlus
        } else {
            Hop::NoAttestation
        });
    }
    if (i, j) == (n, n + 1) {
        return Ok(if direction == Direction::Upstream {
            Hop::ProviderPlus
        } else {
            Hop::NoAttestation
        });
    }
    hop(aspa, path, i, j)
}

fn hop_kind(aspa: &AspaMap, customer: ASN, provider: ASN) -> Hop {
    match aspa.get(&customer) {
        None => Hop::NoAttestation,
        Some(providers) => {
            if providers.contains(&provider) {
                Hop::ProviderPlus
            } else {
                Hop::NotProviderPlus
            }
        }
    }
}

/// Emits a trace line describing a hop check and its result, in the same
/// shape as the draft's own worked-example logging:
/// `Hop #i:ASN C->P #j:ASN is <kind>`.
pub fn trace_hop(tracer: &dyn Tracer, path: &AsPath, i: i64, j: i64, result: Hop) {
    tracer.trace(&format!(
        "Hop {} C->P {} is {}",
        describe_position(path, i),
        describe_position(path, j),
        result
    ));
}

/// Same as [`trace_hop`], but for the optimized verifier's 0-based
/// positions (`0` = neighbor, `N-1` = origin).
pub fn trace_hop0(tracer: &dyn Tracer, path: &AsPath, i: i64, j: i64, result: Hop) {
    tracer.trace(&format!(
        "Hop #{}:{} C->P #{}:{} is {}",
        i, path[i as usize], j, path[j as usize], result
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    fn aspa_of(pairs: &[(ASN, &[ASN])]) -> AspaMap {
        pairs
            .iter()
            .map(|(k, v)| (*k, v.iter().copied().collect::<HashSet<_>>()))
            .collect::<HashMap<_, _>>()
    }

    #[test]
    fn no_attestation_when_customer_absent() {
        let aspa = aspa_of(&[]);
        let path: AsPath = vec![20, 30];
        assert_eq!(hop(&aspa, &path, 1, 2).unwrap(), Hop::NoAttestation);
    }

    #[test]
    fn provider_plus_when_listed() {
        let aspa = aspa_of(&[(30, &[20])]);
        let path: AsPath = vec![20, 30];
        // i=1 -> path[N-1]=path[1]=30 (customer), j=2 -> path[N-2]=path[0]=20 (provider)
        assert_eq!(hop(&aspa, &path, 1, 2).unwrap(), Hop::ProviderPlus);
    }

    #[test]
    fn not_provider_plus_when_empty_set() {
        let aspa = aspa_of(&[(30, &[])]);
        let path: AsPath = vec![20, 30];
        assert_eq!(hop(&aspa, &path, 1, 2).unwrap(), Hop::NotProviderPlus);
    }

    #[test]
    fn out_of_range_index_is_invalid() {
        let aspa = aspa_of(&[]);
        let path: AsPath = vec![20, 30];
        assert!(hop(&aspa, &path, 0, 1).is_err());
        assert!(hop(&aspa, &path, 1, 3).is_err());
    }

    #[test]
    fn hop0_matches_hop1_bridging_invariant() {
        let aspa = aspa_of(&[(30, &[20]), (40, &[30])]);
        let path: AsPath = vec![20, 30, 40];
        let n = path.len() as i64;
        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                assert_eq!(
                    hop0(&aspa, &path, i, j).unwrap(),
                    hop(&aspa, &path, n - i, n - j).unwrap()
                );
            }
        }
    }

    #[test]
    fn sentinel_hops_encode_entry_direction() {
        let aspa = aspa_of(&[]);
        let path: AsPath = vec![20, 30];
        let n = path.len() as i64;
        assert_eq!(
            hop_sentinel(&aspa, &path, n + 1, n, Direction::Downstream).unwrap(),
            Hop::ProviderPlus
        );
        assert_eq!(
            hop_sentinel(&aspa, &path, n + 1, n, Direction::Upstream).unwrap(),
            Hop::NoAttestation
        );
        assert_eq!(
            hop_sentinel(&aspa, &path, n, n + 1, Direction::Upstream).unwrap(),
            Hop::ProviderPlus
        );
        assert_eq!(
            hop_sentinel(&aspa, &path, n, n + 1, Direction::Downstream).unwrap(),
            Hop::NoAttestation
        );
    }
}

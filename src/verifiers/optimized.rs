//! Optimized verifier: a single 0-based pass that
//! never inspects the same hop twice. Discovers the up-ramp from the
//! origin side and (for Downstream) the down-ramp from the neighbor side,
//! then searches only the remaining gap for a pair of opposing `nP+`
//! hops -- the route-leak signature the reference verifier finds via its
//! four linear passes.

use crate::hop::{hop0, trace_hop0};
use crate::shared::{AsPath, AspaMap, Direction, EmptyPathError, Hop, Verdict};
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

    let checked_hop0 = |i: i64, j: i64| -> Hop {
        let result = hop0(aspa, path, i, j).expect("optimized verifier only queries in-range hops");
        trace_hop0(tracer, path, i, j, result);
        result
    };

    if n == 1 {
        tracer.trace("N=1, trivially VALID");
        return Ok(Verdict::Valid);
    }
    if n == 2 && direction == Direction::Downstream {
        tracer.trace("N=2 downstream, trivially VALID");
        return Ok(Verdict::Valid);
    }

    // Up-ramp from the origin side: walk from N-1 toward 0 while each
    // step is a Provider+ hop.
    let mut r = n - 1;
    let mut last_hop_right = None;
    while r > 0 {
        let h = checked_hop0(r, r - 1);
        last_hop_right = Some(h);
        if h == Hop::ProviderPlus {
            r -= 1;
        } else {
            break;
        }
    }
    let last_hop_right = last_hop_right.expect("N>=2 guarantees at least one up-ramp check");
    tracer.trace(&format!("up-ramp ends at {}", r));

    if direction == Direction::Upstream && r == 0 {
        tracer.trace("complete customer-provider chain, VALID");
        return Ok(Verdict::Valid);
    }

    // Down-ramp from the neighbor side (Downstream only): walk from 0
    // toward R while each step is a Provider+ hop.
    let mut l = 0;
    let mut last_hop_left = None;
    if direction == Direction::Downstream {
        while l < r {
            let h = checked_hop0(l, l + 1);
            last_hop_left = Some(h);
            if h == Hop::ProviderPlus {
                l += 1;
            } else {
                break;
            }
        }
        tracer.trace(&format!("down-ramp ends at {}", l));

        if r - l <= 1 {
            tracer.trace("gap is narrow, VALID");
            return Ok(Verdict::Valid);
        }
    }

    // Opposing nP+ search, right-facing: scan the gap from the up-ramp
    // side toward the down-ramp side (or toward 0 on Upstream).
    let mut found_np_from_right = false;
    let mut rr = r;
    if last_hop_right == Hop::NotProviderPlus {
        found_np_from_right = true;
    } else {
        let bound = if direction == Direction::Downstream {
            l + 1
        } else {
            0
        };
        while rr > bound {
            let c = rr;
            rr -= 1;
            if checked_hop0(c, rr) == Hop::NotProviderPlus {
                found_np_from_right = true;
                break;
            }
        }
    }

    // Opposing nP+ search, left-facing (Downstream only, only if a
    // right-facing nP+ was already found -- otherwise the two can't
    // oppose each other).
    let mut found_np_from_left = false;
    if direction == Direction::Downstream && found_np_from_right {
        let mut ll = l + 1;
        if last_hop_left == Some(Hop::NotProviderPlus) {
            found_np_from_left = true;
        } else {
            while ll < rr {
                let c = ll;
                ll += 1;
                if checked_hop0(c, ll) == Hop::NotProviderPlus {
                    found_np_from_left = true;
                    break;
                }
            }
        }
    }

    let verdict = match direction {
        Direction::Downstream => {
            if found_np_from_right && found_np_from_left {
                Verdict::Invalid
            } else {
                Verdict::Unknown
            }
        }
        Direction::Upstream => {
            if found_np_from_right {
                Verdict::Invalid
            } else {
                Verdict::Unknown
            }
        }
    };
    Ok(verdict)
}

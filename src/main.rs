// Runs the built-in cross-validation scenario suite and reports any
// disagreement between the reference, optimized and simplified verifiers.
use aspa_verifier::*;

use std::collections::{HashMap, HashSet};

fn aspa(pairs: &[(ASN, &[ASN])]) -> AspaMap {
    pairs
        .iter()
        .map(|(k, v)| (*k, v.iter().copied().collect::<HashSet<_>>()))
        .collect::<HashMap<_, _>>()
}

/// The scenarios from the draft's own worked examples, transcribed from
/// the hackathon reference implementation's test suite.
fn builtin_scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new(
            "Ex1",
            aspa(&[(80, &[70]), (70, &[40]), (20, &[30])]),
            vec![20, 30, 40, 70, 80],
            Direction::Downstream,
        ),
        Scenario::new(
            "Ex2",
            aspa(&[(80, &[70]), (70, &[40]), (20, &[30]), (90, &[30, 40])]),
            vec![20, 30, 90, 40, 70, 80],
            Direction::Downstream,
        ),
        Scenario::new(
            "Ex2b",
            aspa(&[
                (80, &[70]),
                (70, &[40]),
                (20, &[30]),
                (90, &[30, 40]),
                (30, &[]),
                (40, &[]),
            ]),
            vec![20, 30, 90, 40, 70, 80],
            Direction::Downstream,
        ),
        Scenario::new(
            "Ex3a",
            aspa(&[(80, &[70]), (70, &[40]), (20, &[30])]),
            vec![20, 30, 90, 40, 70, 80],
            Direction::Downstream,
        ),
        Scenario::new(
            "Ex3b",
            aspa(&[(80, &[70]), (70, &[40]), (20, &[30])]),
            vec![20, 30, 90, 100, 40, 70, 80],
            Direction::Downstream,
        ),
        Scenario::new(
            "Ex3c",
            aspa(&[
                (80, &[70]),
                (70, &[40]),
                (20, &[30]),
                (30, &[]),
                (40, &[]),
            ]),
            vec![20, 30, 90, 100, 40, 70, 80],
            Direction::Downstream,
        ),
        Scenario::new(
            "Ex3d",
            aspa(&[
                (80, &[70]),
                (70, &[40]),
                (20, &[30]),
                (30, &[]),
                (90, &[]),
            ]),
            vec![20, 30, 90, 100, 40, 70, 80],
            Direction::Downstream,
        ),
        Scenario::new(
            "Ex3f",
            aspa(&[
                (80, &[70]),
                (70, &[40]),
                (20, &[30]),
                (100, &[]),
                (90, &[]),
            ]),
            vec![20, 30, 90, 100, 40, 70, 80],
            Direction::Downstream,
        ),
        Scenario::new(
            "Ex4",
            aspa(&[(70, &[80])]),
            vec![100, 30, 40, 50, 60, 70, 80],
            Direction::Upstream,
        ),
        Scenario::new(
            "Ex4-fixed",
            aspa(&[(70, &[80]), (60, &[70]), (30, &[100])]),
            vec![100, 30, 40, 50, 60, 70, 80],
            Direction::Upstream,
        ),
        Scenario::new(
            "Ex5",
            aspa(&[(40, &[30]), (30, &[20])]),
            vec![20, 30, 40],
            Direction::Upstream,
        ),
        Scenario::new(
            "Ex6",
            aspa(&[
                (120, &[110]),
                (110, &[100]),
                (100, &[90]),
                (80, &[90]),
                (60, &[50]),
                (40, &[50]),
                (30, &[40]),
                (20, &[30]),
            ]),
            vec![20, 30, 40, 50, 60, 70, 80, 90, 100, 110, 120],
            Direction::Downstream,
        ),
        Scenario::new(
            "Ex7",
            aspa(&[
                (20, &[30]),
                (30, &[40]),
                (40, &[50]),
                (80, &[90]),
                (90, &[100]),
                (110, &[100]),
                (120, &[110]),
                (130, &[120]),
                (140, &[130]),
            ]),
            vec![20, 30, 40, 50, 60, 70, 80, 90, 100, 110, 120, 130, 140],
            Direction::Downstream,
        ),
        Scenario::new("Ex8", aspa(&[]), vec![20], Direction::Downstream),
        Scenario::new("Ex9", aspa(&[]), vec![20], Direction::Upstream),
        Scenario::new(
            "Ex11",
            aspa(&[(20, &[]), (30, &[])]),
            vec![20, 30],
            Direction::Downstream,
        ),
        Scenario::new("Ex12", aspa(&[]), vec![20, 30], Direction::Upstream),
        Scenario::new(
            "Ex13",
            aspa(&[(60, &[50]), (50, &[]), (40, &[30]), (30, &[20]), (20, &[])]),
            vec![20, 30, 40, 50, 60],
            Direction::Upstream,
        ),
        Scenario::new(
            "Ex14",
            aspa(&[
                (60, &[50]),
                (50, &[40, 60]),
                (40, &[30, 50]),
                (30, &[40]),
                (20, &[30]),
            ]),
            vec![20, 30, 40, 50, 60],
            Direction::Upstream,
        ),
        Scenario::new(
            "Ex15",
            aspa(&[
                (60, &[50, 20]),
                (50, &[40, 60]),
                (40, &[30, 50]),
                (30, &[40]),
                (20, &[30]),
            ]),
            vec![20, 30, 40, 50, 60],
            Direction::Upstream,
        ),
        Scenario::new(
            "Ex16",
            aspa(&[(10, &[20]), (20, &[100]), (40, &[30])]),
            vec![10, 20, 30, 40],
            Direction::Upstream,
        ),
        Scenario::new(
            "Ex17",
            aspa(&[(10, &[20]), (20, &[100]), (40, &[30, 50]), (50, &[40])]),
            vec![10, 20, 30, 40],
            Direction::Upstream,
        ),
    ]
}

/// Loads the scenario suite from a JSON fixture path given as the first
/// CLI argument; falls back to the built-in suite (and writes it out to
/// `path` for next time) when no such file exists yet. Mirrors the
/// teacher's `engine_runner::store_data`, which writes its run artifacts
/// to disk for a later run to pick back up.
fn load_or_seed_scenarios(path: &std::path::Path) -> Vec<Scenario> {
    if path.exists() {
        match harness::load_scenarios(path) {
            Ok(scenarios) => {
                println!("loaded {} scenarios from {}", scenarios.len(), path.display());
                return scenarios;
            }
            Err(e) => {
                eprintln!("failed to load scenarios from {}: {e}, falling back to built-in suite", path.display());
            }
        }
    }

    let scenarios = builtin_scenarios();
    if let Err(e) = harness::save_scenarios(path, &scenarios) {
        eprintln!("failed to seed {} with the built-in suite: {e}", path.display());
    } else {
        println!("seeded {} with the built-in suite", path.display());
    }
    scenarios
}

fn main() {
    println!("ASPA AS_PATH verification -- cross-validation suite\n");

    let fixture_path = std::env::args()
        .nth(1)
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("aspa_verifier_scenarios.json"));

    let scenarios = load_or_seed_scenarios(&fixture_path);
    match harness::run_suite(&scenarios) {
        Ok(()) => println!("\nall {} scenarios agree across verifiers", scenarios.len()),
        Err(e) => {
            eprintln!("\ncross-validation failed: {}", e);
            std::process::exit(1);
        }
    }
}

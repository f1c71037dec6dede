//! Cross-validation harness: runs every verifier on
//! a labelled case and treats the reference verifier's verdict as
//! authoritative. Disagreement is a bug in the disagreeing verifier, not
//! an ambiguity in the underlying procedure, and aborts with a diagnostic
//! naming the case, the offending verifier, and both verdicts.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::shared::{AsPath, AspaMap, Direction, EmptyPathError, Verdict, VerifierId};
use crate::verifiers;

/// A single labelled cross-validation case. Serializable so the built-in
/// scenario table can be dumped to or loaded from a fixture file instead
/// of being hardcoded in `main.rs` -- see [`load_scenarios`] and
/// [`save_scenarios`].
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Scenario {
    pub label: String,
    pub aspa: AspaMap,
    pub path: AsPath,
    pub direction: Direction,
}

impl Scenario {
    pub fn new(
        label: impl Into<String>,
        aspa: AspaMap,
        path: AsPath,
        direction: Direction,
    ) -> Self {
        Scenario {
            label: label.into(),
            aspa,
            path,
            direction,
        }
    }
}

/// Loads a scenario fixture from a JSON file, in the same shape
/// `save_scenarios` writes. Mirrors the teacher's `store_data`/config
/// loading pattern of reading a whole file into a `String` and handing it
/// to `serde_json`, bubbling any I/O or parse failure up as a boxed error
/// rather than threading a dedicated error type through a one-off CLI
/// path.
pub fn load_scenarios(path: &Path) -> Result<Vec<Scenario>, Box<dyn std::error::Error>> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Writes a scenario fixture to a JSON file, pretty-printed, the way the
/// teacher's `engine_runner::store_data` writes its run artifacts.
pub fn save_scenarios(path: &Path, scenarios: &[Scenario]) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string_pretty(scenarios)?;
    fs::write(path, json)?;
    Ok(())
}

/// A non-reference verifier returned a verdict that disagrees with the
/// reference verifier on the same case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disagreement {
    pub label: String,
    pub verifier: VerifierId,
    pub expected: Verdict,
    pub actual: Verdict,
}

impl fmt::Display for Disagreement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} -- expected {} (reference), got {}",
            self.label, self.verifier, self.expected, self.actual
        )
    }
}

impl std::error::Error for Disagreement {}

/// Everything that can stop the harness from producing a clean cross-
/// validated result for a case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HarnessError {
    EmptyPath(EmptyPathError),
    Disagreement(Disagreement),
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HarnessError::EmptyPath(e) => write!(f, "{}", e),
            HarnessError::Disagreement(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for HarnessError {}

impl From<EmptyPathError> for HarnessError {
    fn from(e: EmptyPathError) -> Self {
        HarnessError::EmptyPath(e)
    }
}

impl From<Disagreement> for HarnessError {
    fn from(e: Disagreement) -> Self {
        HarnessError::Disagreement(e)
    }
}

/// Runs every verifier in [`verifiers::ALL`] on `(aspa, path, direction)`,
/// prints one line per verifier (`label`, verifier id, verdict), and
/// returns the full set of verdicts if every non-reference verifier
/// agrees with the reference. On the first disagreement, returns a
/// [`HarnessError::Disagreement`] instead of continuing.
pub fn run_case(
    label: &str,
    aspa: &AspaMap,
    path: &AsPath,
    direction: Direction,
) -> Result<BTreeMap<VerifierId, Verdict>, HarnessError> {
    let mut results = BTreeMap::new();

    for (id, verify) in verifiers::ALL {
        let verdict = verify(aspa, path, direction)?;
        println!("{}: {} = {}", label, id, verdict);
        results.insert(id, verdict);
    }

    let reference = *results
        .get(&VerifierId::Reference)
        .expect("verifiers::ALL always includes Reference");

    for (id, verdict) in &results {
        if *id == VerifierId::Reference {
            continue;
        }
        if *verdict != reference {
            return Err(Disagreement {
                label: label.to_string(),
                verifier: *id,
                expected: reference,
                actual: *verdict,
            }
            .into());
        }
    }

    Ok(results)
}

/// Runs [`run_case`] on every scenario in `scenarios`, stopping at (and
/// returning) the first disagreement.
pub fn run_suite(scenarios: &[Scenario]) -> Result<(), HarnessError> {
    for scenario in scenarios {
        run_case(
            &scenario.label,
            &scenario.aspa,
            &scenario.path,
            scenario.direction,
        )?;
    }
    Ok(())
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
    fn agreeing_case_returns_all_verdicts() {
        let aspa = aspa_of(&[(80, &[70]), (70, &[40]), (20, &[30])]);
        let path: AsPath = vec![20, 30, 40, 70, 80];
        let results = run_case("Ex1", &aspa, &path, Direction::Downstream).unwrap();
        assert_eq!(results.len(), 3);
        assert!(results.values().all(|v| *v == Verdict::Valid));
    }

    #[test]
    fn empty_path_propagates_as_harness_error() {
        let aspa = aspa_of(&[]);
        let path: AsPath = vec![];
        let err = run_case("empty", &aspa, &path, Direction::Upstream).unwrap_err();
        assert_eq!(err, HarnessError::EmptyPath(EmptyPathError));
    }

    #[test]
    fn scenarios_round_trip_through_json() {
        let scenarios = vec![
            Scenario::new(
                "Ex1",
                aspa_of(&[(80, &[70]), (70, &[40]), (20, &[30])]),
                vec![20, 30, 40, 70, 80],
                Direction::Downstream,
            ),
            Scenario::new("Ex9", aspa_of(&[]), vec![20], Direction::Upstream),
        ];

        let path = std::env::temp_dir().join("aspa_verifier_harness_round_trip_test.json");
        save_scenarios(&path, &scenarios).expect("save_scenarios should write valid JSON");
        let loaded = load_scenarios(&path).expect("load_scenarios should parse what was written");
        let _ = fs::remove_file(&path);

        assert_eq!(loaded.len(), scenarios.len());
        for (original, round_tripped) in scenarios.iter().zip(loaded.iter()) {
            assert_eq!(original.label, round_tripped.label);
            assert_eq!(original.aspa, round_tripped.aspa);
            assert_eq!(original.path, round_tripped.path);
            assert_eq!(original.direction, round_tripped.direction);
        }
    }
}

//! Fixed aggregation scenarios and the harness that checks them
//!
//! Each scenario is evaluated on its own: an aggregation error marks that
//! scenario as failed and the remaining scenarios still run.

use serde::Serialize;
use std::fmt;
use std::time::Instant;

use crate::sales::{aggregate_daily_sales, Sale};

#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub name: String,
    pub input: Vec<Sale>,
    pub expected: Vec<Sale>,
}

impl Scenario {
    pub fn new(name: impl Into<String>, input: &[(i32, f64)], expected: &[(i32, f64)]) -> Self {
        let to_sales = |pairs: &[(i32, f64)]| {
            pairs
                .iter()
                .map(|&(day, amount)| Sale::new(day, amount))
                .collect::<Vec<_>>()
        };
        Self {
            name: name.into(),
            input: to_sales(input),
            expected: to_sales(expected),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioOutcome {
    pub name: String,
    pub passed: bool,
    /// Aggregated output, absent when aggregation failed
    pub actual: Option<Vec<Sale>>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioReport {
    pub outcomes: Vec<ScenarioOutcome>,
    pub elapsed_ms: f64,
}

impl ScenarioReport {
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed)
    }

    pub fn passed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }
}

impl fmt::Display for ScenarioReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.outcomes {
            let status = if outcome.passed { "PASSED" } else { "FAILED" };
            write!(f, "{}: {}", outcome.name, status)?;
            if let Some(error) = &outcome.error {
                write!(f, " ({})", error)?;
            }
            writeln!(f)?;
        }
        write!(f, " took {} ms", self.elapsed_ms)
    }
}

/// The seven fixed daily sales vectors.
pub fn builtin_scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new(
            "TEST 1",
            &[(1, 12.0), (1, 5.0), (1, 6.0), (3, 7.0), (5, 1.0), (5, 1.0), (5, 3.0)],
            &[(1, 23.0), (3, 7.0), (5, 5.0)],
        ),
        Scenario::new(
            "TEST 2",
            &[(1, 12.0), (1, 5.0), (1, 6.0), (5, 1.0), (5, 1.0), (5, 3.0)],
            &[(1, 23.0), (5, 5.0)],
        ),
        Scenario::new(
            "TEST 3",
            &[(1, 12.0), (3, 5.0), (3, 6.0), (3, 7.0)],
            &[(1, 12.0), (3, 18.0)],
        ),
        Scenario::new(
            "TEST 4",
            &[(3, 5.0), (3, 6.0), (3, 7.0), (4, 13.0)],
            &[(3, 18.0), (4, 13.0)],
        ),
        Scenario::new("TEST 5", &[(3, 5.0), (3, 6.0), (3, 7.0)], &[(3, 18.0)]),
        Scenario::new("TEST 6", &[(3, 5.0)], &[(3, 5.0)]),
        Scenario::new("TEST 7", &[], &[]),
    ]
}

fn run_scenario(scenario: &Scenario) -> ScenarioOutcome {
    match aggregate_daily_sales(&scenario.input) {
        Ok(actual) => ScenarioOutcome {
            name: scenario.name.clone(),
            passed: actual == scenario.expected,
            actual: Some(actual),
            error: None,
        },
        Err(e) => {
            log::warn!("{} failed: {}", scenario.name, e);
            ScenarioOutcome {
                name: scenario.name.clone(),
                passed: false,
                actual: None,
                error: Some(e.to_string()),
            }
        }
    }
}

/// Runs every scenario and measures the total wall time.
pub fn run_scenarios(scenarios: &[Scenario]) -> ScenarioReport {
    let start = Instant::now();
    let outcomes = scenarios.iter().map(run_scenario).collect();
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    ScenarioReport {
        outcomes,
        elapsed_ms,
    }
}

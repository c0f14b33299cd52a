//! Test orchestration
//!
//! Discovers the test scripts, runs them strictly one at a time, and folds
//! the results into a summary. Sequential execution is deliberate: every
//! script drives the same target application instance through a browser
//! session, and overlapping runs would interfere through shared UI and
//! session state. Do not parallelize this loop without removing that
//! sharing first.

mod discover;
mod executor;
mod report;

pub use discover::{discover, TestUnit};
pub use executor::{execute, ExecutionResult, Outcome, UNIT_TIMEOUT};
pub use report::RunSummary;

use std::path::Path;
use std::time::Duration;

use crate::common::Result;

/// Aggregate status of a whole run, mapped to the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Every discovered script passed
    AllPassed,
    /// At least one script did not pass
    SomeFailed,
    /// Discovery found no scripts; reported distinctly from a passing run
    NothingToDo,
}

impl RunStatus {
    pub fn exit_code(self) -> i32 {
        match self {
            RunStatus::AllPassed | RunStatus::NothingToDo => 0,
            RunStatus::SomeFailed => 1,
        }
    }
}

/// Run every discovered test script and print the summary.
///
/// A script failing, timing out, or refusing to launch never stops the
/// run; all discovered scripts are attempted so one broken script cannot
/// hide the results of the others. The only error this returns is a
/// discovery failure, which aborts before any summary is printed.
pub async fn run(dir: &Path, prefix: &str, budget: Duration) -> Result<RunStatus> {
    let units = discover(dir, prefix)?;

    if units.is_empty() {
        println!(
            "No test scripts matching '{prefix}*' found in {}",
            dir.display()
        );
        return Ok(RunStatus::NothingToDo);
    }

    tracing::debug!(
        count = units.len(),
        dir = %dir.display(),
        budget_secs = budget.as_secs(),
        "discovered test scripts"
    );
    println!("Found {} test scripts\n", units.len());

    let mut results = Vec::with_capacity(units.len());
    for unit in &units {
        report::print_banner(unit);
        tracing::debug!(unit = %unit.name, "starting");
        let result = executor::execute(unit, budget).await;
        tracing::debug!(unit = %unit.name, outcome = ?result.outcome, "finished");
        report::print_result(&result);
        results.push(result);
    }

    let summary = report::print_summary(&results);
    Ok(if summary.all_passed() {
        RunStatus::AllPassed
    } else {
        RunStatus::SomeFailed
    })
}

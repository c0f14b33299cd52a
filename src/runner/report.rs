//! Result aggregation and console reporting
//!
//! Summary statistics are computed as a pure fold over the completed
//! result sequence, never from counters carried through the run loop, so
//! the printed summary cannot drift from the results it describes.

use colored::{ColoredString, Colorize};

use super::discover::TestUnit;
use super::executor::{ExecutionResult, Outcome};

const RULE: &str = "============================================================";

/// Derived aggregate statistics over a sequence of results.
#[derive(Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

impl RunSummary {
    /// Fold the full result sequence into counts.
    pub fn from_results(results: &[ExecutionResult]) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed()).count();
        Self {
            total,
            passed,
            failed: total - passed,
        }
    }

    /// Pass rate as a percentage with one decimal place.
    pub fn pass_rate(&self) -> String {
        if self.total == 0 {
            return "0.0".to_string();
        }
        format!("{:.1}", self.passed as f64 / self.total as f64 * 100.0)
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

fn tag(outcome: &Outcome) -> ColoredString {
    match outcome {
        Outcome::Passed => "PASS".green().bold(),
        Outcome::Failed => "FAIL".red().bold(),
        Outcome::TimedOut => "TIMEOUT".yellow().bold(),
        Outcome::Errored(_) => "ERROR".red().bold(),
    }
}

/// Print the banner shown before a script starts.
pub fn print_banner(unit: &TestUnit) {
    println!("{}", RULE.dimmed());
    println!("{} {}", "Running:".blue().bold(), unit.name.white().bold());
    println!("{}", RULE.dimmed());
}

/// Print the status line for one completed script, echoing captured
/// output for anything that did not pass.
pub fn print_result(result: &ExecutionResult) {
    match &result.outcome {
        Outcome::Passed => {
            println!("  {} {} {}", "✓".green(), tag(&result.outcome), result.unit.name);
        }
        Outcome::Failed => {
            match result.exit_code {
                Some(code) => println!(
                    "  {} {} {} (exit code {})",
                    "✗".red(),
                    tag(&result.outcome),
                    result.unit.name,
                    code
                ),
                None => println!(
                    "  {} {} {} (killed by signal)",
                    "✗".red(),
                    tag(&result.outcome),
                    result.unit.name
                ),
            }
            echo_output(result);
        }
        Outcome::TimedOut => {
            println!(
                "  {} {} {} (budget exceeded, process terminated)",
                "✗".yellow(),
                tag(&result.outcome),
                result.unit.name
            );
            echo_output(result);
        }
        Outcome::Errored(message) => {
            println!(
                "  {} {} {}",
                "✗".red(),
                tag(&result.outcome),
                result.unit.name
            );
            println!("    {}", message);
            echo_output(result);
        }
    }
    println!();
}

fn echo_output(result: &ExecutionResult) {
    if !result.stdout.is_empty() {
        println!("  {}", "--- stdout ---".dimmed());
        for line in result.stdout.lines() {
            println!("  {line}");
        }
    }
    if !result.stderr.is_empty() {
        println!("  {}", "--- stderr ---".dimmed());
        for line in result.stderr.lines() {
            println!("  {line}");
        }
    }
}

/// Print the final summary table and return the folded counts.
pub fn print_summary(results: &[ExecutionResult]) -> RunSummary {
    let summary = RunSummary::from_results(results);

    println!("{}", RULE.dimmed());
    println!("{}", "TEST SUMMARY".bold());
    println!("{}", RULE.dimmed());

    for result in results {
        println!("  {} {}", tag(&result.outcome), result.unit.name);
    }

    println!();
    println!(
        "Total: {} | Passed: {} | Failed: {}",
        summary.total, summary.passed, summary.failed
    );
    println!("Pass Rate: {}%", summary.pass_rate());

    summary
}

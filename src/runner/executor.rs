//! Test unit execution
//!
//! Runs one test script to completion as an isolated child process with a
//! bounded wall-clock budget. The process boundary is the sole isolation
//! mechanism: a script that crashes, hangs, or leaks cannot take the
//! runner or the scripts after it down with it.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command as TokioCommand;
use tokio::time;

use super::discover::TestUnit;

/// Default wall-clock budget per test script
pub const UNIT_TIMEOUT: Duration = Duration::from_secs(120);

/// How one test script finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Script exited with status zero
    Passed,
    /// Script exited with a non-zero status (or was killed by a signal)
    Failed,
    /// Script exceeded the wall-clock budget and was terminated
    TimedOut,
    /// Script could not be launched; carries the diagnostic message
    Errored(String),
}

/// The recorded outcome of running one test script once.
///
/// Created here, owned by the orchestrator afterwards, never mutated.
#[derive(Debug)]
pub struct ExecutionResult {
    pub unit: TestUnit,
    pub outcome: Outcome,
    pub stdout: String,
    pub stderr: String,
    /// Numeric exit status; absent for timed-out, errored, and
    /// signal-killed scripts
    pub exit_code: Option<i32>,
}

impl ExecutionResult {
    pub fn passed(&self) -> bool {
        self.outcome == Outcome::Passed
    }

    fn errored(unit: &TestUnit, message: String) -> Self {
        Self {
            unit: unit.clone(),
            outcome: Outcome::Errored(message),
            stdout: String::new(),
            stderr: String::new(),
            exit_code: None,
        }
    }
}

/// Run one test script to completion under `budget`.
///
/// The script is invoked with no arguments and its own containing
/// directory as working directory; stdout/stderr and the exit status are
/// its entire contract surface. Every condition comes back as an
/// `ExecutionResult`, never as an error, and the child is reaped on every
/// path so no process or pipe handle outlives the call.
pub async fn execute(unit: &TestUnit, budget: Duration) -> ExecutionResult {
    let workdir = unit.path.parent().unwrap_or(Path::new("."));

    let mut child = match TokioCommand::new(&unit.path)
        .current_dir(workdir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
    {
        Ok(child) => child,
        Err(e) => {
            return ExecutionResult::errored(
                unit,
                format!("failed to launch '{}': {}", unit.path.display(), e),
            );
        }
    };

    // Drain both pipes concurrently with the wait so capture stays
    // complete even when the child is killed at the deadline.
    let stdout_task = tokio::spawn(read_pipe(child.stdout.take()));
    let stderr_task = tokio::spawn(read_pipe(child.stderr.take()));

    let (outcome, exit_code) = match time::timeout(budget, child.wait()).await {
        Ok(Ok(status)) => {
            if status.success() {
                (Outcome::Passed, status.code())
            } else {
                (Outcome::Failed, status.code())
            }
        }
        Ok(Err(e)) => (
            Outcome::Errored(format!("failed to wait for '{}': {}", unit.name, e)),
            None,
        ),
        Err(_) => {
            // Budget exceeded: kill and reap so the pipes close and the
            // reader tasks can finish.
            let _ = child.start_kill();
            let _ = child.wait().await;
            (Outcome::TimedOut, None)
        }
    };

    let stdout = stdout_task.await.unwrap_or_default();
    let stderr = stderr_task.await.unwrap_or_default();

    ExecutionResult {
        unit: unit.clone(),
        outcome,
        stdout,
        stderr,
        exit_code,
    }
}

async fn read_pipe<R: AsyncRead + Unpin>(pipe: Option<R>) -> String {
    let Some(mut pipe) = pipe else {
        return String::new();
    };
    let mut buf = Vec::new();
    let _ = pipe.read_to_end(&mut buf).await;
    String::from_utf8_lossy(&buf).into_owned()
}

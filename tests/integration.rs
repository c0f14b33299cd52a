//! End-to-end tests for the uitest binary
//!
//! These tests generate executable test scripts in a temporary directory,
//! run the built binary against it, and verify the exit code, the per-unit
//! status lines, and the summary.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use std::process::{Command, Output};

/// Test context owning a scripts directory and the runner binary path
struct TestContext {
    dir: tempfile::TempDir,
    runner_bin: PathBuf,
}

impl TestContext {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
            runner_bin: find_runner_binary(),
        }
    }

    /// Write an executable shell script into the scripts directory
    fn add_script(&self, name: &str, body: &str) {
        let path = self.dir.path().join(name);
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("Failed to write script");
        let mut perms = fs::metadata(&path).expect("Failed to stat script").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("Failed to chmod script");
    }

    /// Write a non-script file (should be ignored by discovery)
    fn add_file(&self, name: &str, content: &str) {
        fs::write(self.dir.path().join(name), content).expect("Failed to write file");
    }

    /// Run the binary against the scripts directory
    fn run(&self) -> Output {
        Command::new(&self.runner_bin)
            .arg(self.dir.path())
            // Keep cwd inside the temp dir so no stray uitest.toml applies
            .current_dir(self.dir.path())
            .output()
            .expect("Failed to run uitest")
    }
}

/// Locate the uitest binary next to the test executable
fn find_runner_binary() -> PathBuf {
    let mut path = std::env::current_exe().expect("Failed to get test executable path");
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    let bin = path.join("uitest");
    assert!(
        bin.exists(),
        "uitest binary not found at {}",
        bin.display()
    );
    bin
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn all_passing_run_exits_zero_with_full_pass_rate() {
    let ctx = TestContext::new();
    ctx.add_script("TC001_login.sh", "echo login ok\nexit 0");
    ctx.add_script("TC002_search.sh", "echo search ok\nexit 0");

    let output = ctx.run();
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(0), "stdout was:\n{stdout}");
    assert!(stdout.contains("Found 2 test scripts"));
    assert!(stdout.contains("Total: 2 | Passed: 2 | Failed: 0"));
    assert!(stdout.contains("Pass Rate: 100.0%"));
}

#[test]
fn failing_script_fails_the_run_and_its_output_is_echoed() {
    let ctx = TestContext::new();
    ctx.add_script("TC001_ok.sh", "exit 0");
    ctx.add_script(
        "TC002_broken.sh",
        "echo clicked the wrong button\necho locator not found >&2\nexit 1",
    );

    let output = ctx.run();
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(1), "stdout was:\n{stdout}");
    assert!(stdout.contains("FAIL"));
    assert!(stdout.contains("exit code 1"));
    // Captured output of the failed unit is surfaced in the report
    assert!(stdout.contains("clicked the wrong button"));
    assert!(stdout.contains("locator not found"));
    assert!(stdout.contains("Total: 2 | Passed: 1 | Failed: 1"));
    assert!(stdout.contains("Pass Rate: 50.0%"));
}

#[test]
fn empty_directory_is_a_distinct_non_error_condition() {
    let ctx = TestContext::new();
    ctx.add_file("README.md", "nothing executable here");

    let output = ctx.run();
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(0), "stdout was:\n{stdout}");
    assert!(stdout.contains("No test scripts matching 'TC*'"));
    // Distinct from a passing run: no summary is printed
    assert!(!stdout.contains("TEST SUMMARY"));
}

#[test]
fn scripts_run_in_lexicographic_order() {
    let ctx = TestContext::new();
    ctx.add_script("TC010_third.sh", "exit 0");
    ctx.add_script("TC002_first.sh", "exit 0");
    ctx.add_script("TC005_second.sh", "exit 0");

    let output = ctx.run();
    let stdout = stdout_of(&output);

    let first = stdout.find("TC002_first.sh").expect("first script missing");
    let second = stdout.find("TC005_second.sh").expect("second script missing");
    let third = stdout.find("TC010_third.sh").expect("third script missing");
    assert!(first < second && second < third, "stdout was:\n{stdout}");
}

#[test]
fn unlaunchable_script_is_errored_and_later_scripts_still_run() {
    let ctx = TestContext::new();
    // Matching name but no execute bit, so the spawn fails
    ctx.add_file("TC001_noexec.sh", "#!/bin/sh\nexit 0\n");
    ctx.add_script("TC002_after.sh", "echo still here\nexit 0");

    let output = ctx.run();
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(1), "stdout was:\n{stdout}");
    assert!(stdout.contains("ERROR"));
    assert!(stdout.contains("failed to launch"));
    assert!(stdout.contains("still here"), "later script did not run");
    assert!(stdout.contains("Total: 2 | Passed: 1 | Failed: 1"));
}

#[test]
fn timeout_is_named_explicitly_in_the_summary() {
    let ctx = TestContext::new();
    ctx.add_script("TC001_hang.sh", "sleep 600");
    // Short per-unit budget so the test itself stays fast
    fs::write(
        ctx.dir.path().join("uitest.toml"),
        "[timeouts]\nunit_secs = 1\n",
    )
    .expect("Failed to write config");

    let output = ctx.run();
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(1), "stdout was:\n{stdout}");
    assert!(stdout.contains("TIMEOUT"));
    assert!(stdout.contains("Pass Rate: 0.0%"));
}

#[test]
fn config_file_overrides_the_discovery_prefix() {
    let ctx = TestContext::new();
    ctx.add_script("ui_smoke.sh", "exit 0");
    ctx.add_script("TC001_ignored.sh", "exit 1");
    fs::write(
        ctx.dir.path().join("uitest.toml"),
        "[discovery]\nprefix = \"ui_\"\n",
    )
    .expect("Failed to write config");

    let output = ctx.run();
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(0), "stdout was:\n{stdout}");
    assert!(stdout.contains("ui_smoke.sh"));
    assert!(!stdout.contains("TC001_ignored.sh"));
}

#[test]
fn malformed_config_is_a_fatal_runner_error() {
    let ctx = TestContext::new();
    ctx.add_script("TC001_ok.sh", "exit 0");
    fs::write(ctx.dir.path().join("uitest.toml"), "[discovery\nprefix =")
        .expect("Failed to write config");

    let output = ctx.run();

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid configuration file"));
}

#[test]
fn missing_directory_aborts_before_any_summary() {
    let ctx = TestContext::new();

    let output = Command::new(&ctx.runner_bin)
        .arg("/nonexistent/test-scripts")
        .current_dir(ctx.dir.path())
        .output()
        .expect("Failed to run uitest");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read test directory"));
    assert!(!stdout_of(&output).contains("TEST SUMMARY"));
}

use std::process::{Command, Output};

fn fibench(args: &[&str]) -> Output {
  Command::new(env!("CARGO_BIN_EXE_fibench"))
    .args(args)
    .env_remove("FIBENCH_BOUND")
    .env_remove("RUST_LOG")
    .env_remove("RUST_TRACER")
    .output()
    .expect("failed to spawn fibench")
}

fn stdout_lines(output: &Output) -> Vec<String> {
  String::from_utf8_lossy(&output.stdout)
    .lines()
    .map(str::to_owned)
    .collect()
}

#[test]
fn test_default_run() {
  let output = fibench(&[]);
  assert!(output.status.success());

  let lines = stdout_lines(&output);
  assert_eq!(lines.len(), 33);
  assert!(lines[0].starts_with("Start: "));
  assert_eq!(lines[1], "Fibonacci(0) = 0");
  assert_eq!(lines[11], "Fibonacci(10) = 55");
  assert_eq!(lines[30], "Fibonacci(29) = 514229");
  assert!(lines[31].starts_with("End: "));
  assert!(lines[32].starts_with("Time passed: "));
}

#[test]
fn test_run_subcommand_with_bound() {
  let output = fibench(&["run", "--bound", "6"]);
  assert!(output.status.success());

  let results: Vec<_> = stdout_lines(&output)
    .into_iter()
    .filter(|l| l.starts_with("Fibonacci("))
    .collect();
  assert_eq!(
    results,
    [
      "Fibonacci(0) = 0",
      "Fibonacci(1) = 1",
      "Fibonacci(2) = 1",
      "Fibonacci(3) = 2",
      "Fibonacci(4) = 3",
      "Fibonacci(5) = 5",
    ]
  );
}

#[test]
fn test_bound_from_env() {
  let output = Command::new(env!("CARGO_BIN_EXE_fibench"))
    .env("FIBENCH_BOUND", "2")
    .env_remove("RUST_LOG")
    .env_remove("RUST_TRACER")
    .output()
    .expect("failed to spawn fibench");
  assert!(output.status.success());
  assert_eq!(stdout_lines(&output).len(), 5);
}

#[test]
fn test_verbose_keeps_stdout_clean() {
  let output = fibench(&["--bound", "3", "--verbose"]);
  assert!(output.status.success());
  assert_eq!(stdout_lines(&output).len(), 6);
  assert!(String::from_utf8_lossy(&output.stderr).contains("Finished"));
}

#[test]
fn test_oversized_bound_fails() {
  let output = fibench(&["--bound", "200"]);
  assert!(!output.status.success());
  assert!(output.stdout.is_empty());
  assert!(String::from_utf8_lossy(&output.stderr).contains("does not fit in 64 bits"));
}

#[test]
fn test_eval() {
  let output = fibench(&["eval", "10"]);
  assert!(output.status.success());
  assert_eq!(stdout_lines(&output), ["Fibonacci(10) = 55"]);
}

#[test]
fn test_eval_logs_failure_when_enabled() {
  let output = Command::new(env!("CARGO_BIN_EXE_fibench"))
    .args(["eval", "100"])
    .env("RUST_LOG", "error")
    .output()
    .expect("failed to spawn fibench");
  assert!(!output.status.success());
  assert!(output.stdout.is_empty());
  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("ERROR"));
  assert!(stderr.matches("does not fit in 64 bits").count() >= 2);
}

#[test]
fn test_profile_honours_tracer_env() {
  let output = Command::new(env!("CARGO_BIN_EXE_fibench"))
    .args(["--bound", "2", "--profile"])
    .env_remove("FIBENCH_BOUND")
    .env("RUST_TRACER", "info")
    .output()
    .expect("failed to spawn fibench");
  assert!(output.status.success());
  assert_eq!(stdout_lines(&output).len(), 5);
}

#[test]
fn test_eval_negative_index() {
  let output = fibench(&["eval", "-3"]);
  assert!(!output.status.success());
  assert!(output.stdout.is_empty());
  assert!(String::from_utf8_lossy(&output.stderr).contains("fibonacci index -3 is negative"));
}

#[test]
fn test_profile_prints_tree_on_stderr() {
  let output = fibench(&["--bound", "4", "--profile"]);
  assert!(output.status.success());
  assert_eq!(stdout_lines(&output).len(), 7);
  assert!(String::from_utf8_lossy(&output.stderr).contains("fibonacci"));
}

#[test]
fn test_version() {
  let output = fibench(&["--version"]);
  assert!(output.status.success());
  let version = String::from_utf8_lossy(&output.stdout);
  assert!(version.starts_with(&format!("fibench {} (", env!("CARGO_PKG_VERSION"))));
}

use std::io::Write;
use std::time::Duration;

use anstyle::Style;

/// Writes a cargo-style `   Finished message` line to stderr.
pub(crate) fn write_status(style: &Style, status: &str, msg: &str) {
  let mut stderr = std::io::stderr().lock();
  let _ = writeln!(stderr, "{style}{status:>12}{style:#} {msg}");
}

pub(crate) fn elapsed(duration: Duration) -> String {
  let secs = duration.as_secs();
  if secs >= 60 {
    format!("{}m {:02}s", secs / 60, secs % 60)
  } else {
    format!("{}.{:02}s", secs, duration.subsec_millis() / 10)
  }
}

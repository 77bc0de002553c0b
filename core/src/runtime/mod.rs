mod clock;

pub use clock::Timestamp;

use std::io::{self, Write};

use thiserror::Error;
use web_time::{Duration, Instant};

use crate::fibonacci::{fibonacci, FibError, MAX_INDEX};
use crate::utils::FibCoreOpts;

#[non_exhaustive]
#[derive(Error, Debug)]
pub enum DriverError {
  #[error(transparent)]
  Fib(#[from] FibError),
  #[error("failed to write output: {0}")]
  Io(#[from] io::Error),
}

/// What a completed run measured.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
  pub start: Timestamp,
  pub end: Timestamp,
  pub elapsed: Duration,
  /// Number of `Fibonacci(i) = value` lines written.
  pub count: u32,
}

/// Prints `F(i)` for every `i` below the configured bound, bracketed by
/// start and end timestamps.
pub struct Driver {
  opts: FibCoreOpts,
}

impl Driver {
  pub fn new(opts: FibCoreOpts) -> Self {
    Self { opts }
  }

  /// Runs the loop, writing every line to `out`.
  ///
  /// A bound past the last representable index is rejected before anything
  /// is written. The elapsed time comes from the monotonic clock and the end
  /// timestamp is the start timestamp plus that elapsed time.
  #[tracing::instrument(name = "run", skip_all, fields(bound = self.opts.bound()))]
  pub fn run<W: Write>(&self, out: &mut W) -> Result<RunSummary, DriverError> {
    let bound = self.opts.bound();
    if i64::from(bound) > MAX_INDEX + 1 {
      return Err(FibError::Overflow(i64::from(bound) - 1).into());
    }

    let start = Timestamp::now();
    let clock = Instant::now();
    writeln!(out, "Start: {start}")?;

    for i in 0..bound {
      let value =
        tracing::info_span!("fibonacci", index = i).in_scope(|| fibonacci(i64::from(i)))?;
      tracing::debug!(index = i, value, "computed");
      writeln!(out, "Fibonacci({i}) = {value}")?;
    }

    // End - Start == Time passed, and End >= Start.
    let end = start + clock.elapsed();
    let elapsed = end.duration_since(start);
    writeln!(out, "End: {end}")?;
    writeln!(out, "Time passed: {} seconds", elapsed.as_secs_f64())?;
    out.flush()?;

    tracing::info!(count = bound, ?elapsed, "run finished");
    Ok(RunSummary {
      start,
      end,
      elapsed,
      count: bound,
    })
  }
}

use anstyle::*;
use anyhow::{Context, Result};
use clap::Parser;
use fibench_core::utils::{setup_logger, setup_tracer, with_bound, FibCoreOpts, DEFAULT_BOUND};
use fibench_core::Driver;
use std::env;

use crate::util::{elapsed, write_status};

#[derive(Parser)]
#[command(
  name = "run",
  about = "(default) Print naive recursive Fibonacci numbers below a bound"
)]
pub struct RunCmd {
  /// Compute indices 0 up to, but not including, this bound.
  #[clap(long, env = "FIBENCH_BOUND", default_value_t = DEFAULT_BOUND)]
  bound: u32,

  /// Print a span tree with the time spent on each index.
  #[clap(long, action)]
  profile: bool,

  #[clap(long, action)]
  verbose: bool,
}

impl RunCmd {
  pub fn run(&self) -> Result<()> {
    if !self.profile {
      if self.verbose && env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
      }
      setup_logger();
    } else {
      if env::var("RUST_TRACER").is_err() {
        env::set_var("RUST_TRACER", "info");
      }
      setup_tracer();
    }

    tracing::debug!(bound = self.bound, profile = self.profile, "starting run");
    let opts = FibCoreOpts::new().with_options([with_bound(self.bound)]);
    let driver = Driver::new(opts);
    let summary = {
      let mut stdout = std::io::stdout().lock();
      driver
        .run(&mut stdout)
        .with_context(|| format!("while running with bound {}", self.bound))?
    };

    tracing::info!(
      count = summary.count,
      start = %summary.start,
      end = %summary.end,
      "run complete"
    );
    if self.verbose {
      let green = AnsiColor::Green.on_default().effects(Effects::BOLD);
      write_status(
        &green,
        "Finished",
        format!("{} values in {}", summary.count, elapsed(summary.elapsed)).as_str(),
      );
    }

    Ok(())
  }
}

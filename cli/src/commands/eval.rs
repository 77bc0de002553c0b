use anyhow::Result;
use clap::Parser;
use fibench_core::fibonacci;
use fibench_core::utils::setup_logger;

#[derive(Parser)]
#[command(name = "eval", about = "Print the Fibonacci number at a single index")]
pub struct EvalCmd {
  #[arg(allow_negative_numbers = true)]
  index: i64,
}

impl EvalCmd {
  pub fn run(&self) -> Result<()> {
    setup_logger();
    self.evaluate()
  }

  #[tracing::instrument(name = "eval", skip(self), fields(index = self.index), err)]
  fn evaluate(&self) -> Result<()> {
    let value = fibonacci(self.index)?;
    println!("Fibonacci({}) = {}", self.index, value);
    Ok(())
  }
}

use anyhow::Result;
use clap::{Parser, Subcommand};
use fibench_cli::{
  commands::{eval::EvalCmd, run::RunCmd},
  FIBENCH_VERSION_MESSAGE,
};

#[derive(Parser)]
#[command(name = "fibench", author, about, long_about = None, args_conflicts_with_subcommands = true, version = FIBENCH_VERSION_MESSAGE)]
pub struct FibenchCli {
  #[clap(subcommand)]
  pub command: Option<FibenchCliCommands>,

  #[clap(flatten)]
  pub run: RunCmd,
}

#[derive(Subcommand)]
pub enum FibenchCliCommands {
  Run(RunCmd),
  Eval(EvalCmd),
}

fn main() -> Result<()> {
  let args = FibenchCli::parse();
  let command = args.command.unwrap_or(FibenchCliCommands::Run(args.run));
  match command {
    FibenchCliCommands::Run(cmd) => cmd.run(),
    FibenchCliCommands::Eval(cmd) => cmd.run(),
  }
}

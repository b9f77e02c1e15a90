use anyhow::Result;
use clap::{ArgAction, Parser};

mod run_impl;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "bitcols",
    version,
    about = "Print a binary string with reversed indices under its set bits",
    long_about = None
)]
pub struct Args {
    /// Binary string to render (prompts on stdin when omitted)
    #[arg(value_name = "BITS")]
    pub bits: Option<String>,

    /// Output JSON instead of the two aligned lines
    #[arg(long = "json", action = ArgAction::SetTrue)]
    pub json: bool,
}

/// Runs the CLI application.
///
/// # Errors
/// Returns an error if reading the input line fails.
pub fn run() -> Result<()> {
    let args = Args::parse();
    run_impl::run_with_args(&args)
}

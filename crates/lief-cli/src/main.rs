//! `lief` binary: handles one GitHub event with the Jira bridge dispatcher.

mod bootstrap;
mod cli_args;
mod run;

use anyhow::Result;
use clap::Parser;

use crate::bootstrap::init_tracing;
use crate::cli_args::Cli;
use crate::run::run_event;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let report = run_event(&cli).await?;
    println!("{}", report.summary());
    Ok(())
}

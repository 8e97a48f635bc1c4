// src/main.rs
use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use wordstat::{Args, run};

fn main() -> ExitCode {
    if let Err(err) = init_tracing() {
        eprintln!("Error: {err:#}");
        return ExitCode::FAILURE;
    }

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive("wordstat=warn".parse()?)
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

use bank_ledger::{Cli, Config, Session};

fn main() -> Result<()> {
    let config = Config::from(Cli::parse());
    init_tracing(&config.log_filter);

    tracing::debug!(version = bank_ledger::VERSION, title = %config.title, "starting session");

    let stdin = io::stdin();
    let mut session = Session::new(config, stdin.lock(), io::stdout().lock());
    session.run().context("console session failed")?;

    session
        .into_output()
        .flush()
        .context("failed to flush stdout")?;

    Ok(())
}

/// Diagnostics go to stderr so stdout carries only the menu transcript
fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|err| {
        eprintln!("Ignoring invalid log filter {:?}: {}", filter, err);
        EnvFilter::new(bank_ledger::config::DEFAULT_LOG_FILTER)
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

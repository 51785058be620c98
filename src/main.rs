//! synth-oracle entry point.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use synth_oracle::cli::{OracleArgs, init_tracing};
use synth_oracle::harness::Harness;
use synth_oracle::oracle::{self, AppState};
use synth_oracle::synth::ToneFactory;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let args = OracleArgs::parse();
    init_tracing("info");

    let port = args.port()?;

    let listener = oracle::bind(port)
        .await
        .with_context(|| format!("Failed to bind oracle on port {port}"))?;
    info!(addr = %listener.local_addr()?, "oracle listening");

    // Bound: safe for the parent to start sending requests.
    oracle::signal_ready(&mut io::stdout().lock()).context("Failed to signal readiness")?;

    let state = AppState::new(Harness::new(ToneFactory));
    oracle::serve(listener, state)
        .await
        .context("Oracle server failed")?;

    Ok(())
}

//! synth-direct: one fixed synthesizer run, printed as JSON.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use synth_oracle::cli::{DirectArgs, init_tracing};
use synth_oracle::collector::Collector;
use synth_oracle::harness::Harness;
use synth_oracle::synth::ToneFactory;

fn main() -> Result<()> {
    let _args = DirectArgs::parse();
    init_tracing("warn");

    let harness = Harness::new(ToneFactory);
    let mut collector = Collector::new();

    harness
        .run_direct(&mut collector)
        .context("Direct synthesis run failed")?;

    let mut stdout = io::stdout().lock();
    serde_json::to_writer(&mut stdout, &collector).context("Failed to write result")?;
    writeln!(stdout)?;

    Ok(())
}

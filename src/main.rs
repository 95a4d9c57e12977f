use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use listbench::BenchConfig;

/// Times common list operations on a `Vec` and a `LinkedList` and prints a
/// comparison table.
#[derive(Parser, Debug)]
#[command(name = "listbench", version, about)]
struct Args {}

fn main() -> Result<()> {
    let _args = Args::parse();
    setup_tracing();

    let config = BenchConfig::default();
    info!("starting list benchmark with config {:?}", config);

    let report = listbench::run_all(&config).context("list benchmark failed")?;
    print!("{report}");
    Ok(())
}

fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

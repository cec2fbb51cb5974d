//! whiteout CLI - make near-white backgrounds transparent and crop to content.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use whiteout_core::PathPair;

/// Turn near-white pixels transparent and crop two images to their content.
///
/// Pixels with red, green and blue all above 230 become fully transparent.
/// Each output is written as RGBA PNG, whatever its file extension.
#[derive(Parser, Debug)]
#[command(name = "whiteout")]
#[command(version, about, long_about = None)]
struct Args {
    /// First input image.
    #[arg(value_name = "INPUT1")]
    input1: PathBuf,

    /// PNG output for the first image.
    #[arg(value_name = "OUTPUT1")]
    output1: PathBuf,

    /// Second input image.
    #[arg(value_name = "INPUT2")]
    input2: PathBuf,

    /// PNG output for the second image.
    #[arg(value_name = "OUTPUT2")]
    output2: PathBuf,
}

impl Args {
    fn pairs(&self) -> [PathPair; 2] {
        [
            PathPair::new(&self.input1, &self.output1),
            PathPair::new(&self.input2, &self.output2),
        ]
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr so stdout stays free
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "whiteout=info,whiteout_core=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    // Fatal errors bypass the log filter; RUST_LOG must not silence them
    if let Err(err) = run(&args) {
        eprintln!("Error: {err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Process both pairs in order, stopping at the first failure.
fn run(args: &Args) -> Result<()> {
    for pair in args.pairs() {
        pair.process().with_context(|| {
            format!(
                "Failed to process {} -> {}",
                pair.input.display(),
                pair.output.display()
            )
        })?;
    }

    Ok(())
}

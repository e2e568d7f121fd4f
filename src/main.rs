use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use mybb_core::config::Config;
use mybb_core::Zone;
use mybb_extract::pipeline::{self, Pipeline, PipelineOptions};
use mybb_extract::report;

/// Extract username, email, registration date/time, last IP and password
/// hash from a MyBB SQL dump (`INSERT INTO mybb_users VALUES ...`).
#[derive(Parser)]
#[command(
    name = "mybb-extract",
    version,
    about = "Extract MyBB users from an SQL dump to the console or a CSV file"
)]
struct Cli {
    /// SQL dump to read.
    input: PathBuf,
    /// CSV file to write. Records are printed to the console when omitted.
    output: Option<PathBuf>,
    /// Config file to use instead of ~/.config/mybb-extract/config.toml.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Render registration times in UTC instead of the configured zone.
    #[arg(long)]
    utc: bool,
    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .init();

    let config = Config::load(cli.config.as_deref()).context("could not load configuration")?;
    let mut normalizer = config.normalizer()?;
    if cli.utc {
        normalizer = mybb_core::Normalizer::new(normalizer.layout(), Zone::utc());
    }
    let pipeline = Pipeline::new(normalizer, PipelineOptions::from(&config.pipeline));
    tracing::debug!(?normalizer, "configured");

    pipeline::ensure_input(&cli.input)?;

    let output = cli.output.as_deref();
    report::write_banner(&mut io::stdout(), &cli.input, output)?;

    let stats = pipeline::extract_file(&pipeline, &cli.input, output)
        .with_context(|| format!("extraction from {} failed", cli.input.display()))?;

    report::write_summary(&mut io::stdout(), &stats, output)?;
    Ok(())
}

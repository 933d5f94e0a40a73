mod args;
mod commands;
mod config;
pub mod defaults;
mod io;
mod printing;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use args::{AnalyzeArgs, DecodeArgs, EncodeArgs, RunArgs};
use commands::{analyze, decode, encode, run};
use config::BintextConfig;

/// bintext: files as binary text
///
/// Writes every bit of a file as an ASCII '0' or '1', reads such text back
/// into the original bytes, and reports how often each byte, nibble or bit
/// value occurs.
#[derive(Parser, Debug)]
#[command(name = "bintext")]
#[command(author, version, about = "Converts files to and from binary text", long_about = None)]
struct Cli {
    /// Path to a TOML config file (default: ./bintext.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level filter (overridden by RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Number of threads to use for parallel processing
    ///
    /// If not specified, defaults to the number of logical CPUs.
    #[arg(short = 't', long, global = true)]
    threads: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode a file into a binary-text artifact.
    Encode(EncodeArgs),

    /// Decode a binary-text artifact back into the original file.
    Decode(DecodeArgs),

    /// Report value distributions of a binary-text artifact.
    ///
    /// Reads the artifact at each width (bytes, nibbles and bits by default)
    /// and prints the relative frequency of every observed value.
    Analyze(AnalyzeArgs),

    /// Encode a file, then analyze the artifact at widths 8, 4 and 1.
    Run(RunArgs),
}

/// Initialize the `tracing` subscriber with the given level filter.
///
/// Respects `RUST_LOG` if set. Logs go to stderr so reports on stdout stay clean.
fn setup_tracing(level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config =
        BintextConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    setup_tracing(cli.log_level.as_deref().unwrap_or(&config.log.level));

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    match cli.command {
        Commands::Encode(args) => {
            let input = args.input.unwrap_or(config.paths.input);
            let artifact = args.artifact.unwrap_or(config.paths.artifact);
            encode::encode_file(&input, &artifact, &args.codec.resolve(&config.codec))?;
        }
        Commands::Decode(args) => {
            let artifact = args.artifact.unwrap_or(config.paths.artifact);
            let output = args.output.unwrap_or(config.paths.output);
            decode::decode_file(&artifact, &output, &args.codec.resolve(&config.codec))?;
        }
        Commands::Analyze(args) => {
            let artifact = args.artifact.unwrap_or(config.paths.artifact);
            let widths = args.report.widths.unwrap_or(config.analysis.widths);
            let format = args.report.format.unwrap_or(config.analysis.format);
            let policy = args.short_chunk.unwrap_or(config.codec.short_chunk);
            analyze::analyze_file(
                &artifact,
                &widths,
                policy,
                &format,
                args.report.report.as_deref(),
            )?;
        }
        Commands::Run(args) => {
            let input = args.input.unwrap_or(config.paths.input);
            let artifact = args.artifact.unwrap_or(config.paths.artifact);
            let widths = args.report.widths.unwrap_or(config.analysis.widths);
            let format = args.report.format.unwrap_or(config.analysis.format);
            run::run_pipeline(
                &input,
                &artifact,
                &args.codec.resolve(&config.codec),
                &widths,
                &format,
                args.report.report.as_deref(),
            )?;
        }
    }

    Ok(())
}

use bintext_codec::{CodecStrategy, DigitWidth, ShortChunkPolicy};
use clap::Args;
use std::path::PathBuf;

use crate::config::CodecSection;

/// Codec flags shared by every subcommand. Unset flags keep the config value.
#[derive(Args, Debug, Default)]
pub struct CodecArgs {
    /// Digits per chunk (1-64)
    #[arg(short, long)]
    pub width: Option<DigitWidth>,

    /// Codec strategy (sequential, parallel)
    #[arg(long)]
    pub strategy: Option<CodecStrategy>,

    /// Handling of a trailing chunk shorter than the width (reject, drop, keep)
    #[arg(long)]
    pub short_chunk: Option<ShortChunkPolicy>,
}

impl CodecArgs {
    pub fn resolve(&self, section: &CodecSection) -> CodecSection {
        CodecSection {
            width: self.width.unwrap_or(section.width),
            strategy: self.strategy.unwrap_or(section.strategy),
            short_chunk: self.short_chunk.unwrap_or(section.short_chunk),
        }
    }
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// File to encode
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Binary-text artifact to write
    #[arg(short, long)]
    pub artifact: Option<PathBuf>,

    #[command(flatten)]
    pub codec: CodecArgs,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Binary-text artifact to read
    #[arg(short, long)]
    pub artifact: Option<PathBuf>,

    /// Reconstructed file to write
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub codec: CodecArgs,
}

/// Reporting flags shared by `analyze` and `run`.
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Widths to read the artifact at, comma separated (default: 8,4,1)
    #[arg(long, value_delimiter = ',')]
    pub widths: Option<Vec<DigitWidth>>,

    /// Output format (pretty, json)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub report: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Binary-text artifact to read
    #[arg(short, long)]
    pub artifact: Option<PathBuf>,

    /// Handling of a trailing chunk shorter than the width (reject, drop, keep)
    #[arg(long)]
    pub short_chunk: Option<ShortChunkPolicy>,

    #[command(flatten)]
    pub report: ReportArgs,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// File to encode
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Binary-text artifact to write and analyze
    #[arg(short, long)]
    pub artifact: Option<PathBuf>,

    #[command(flatten)]
    pub codec: CodecArgs,

    #[command(flatten)]
    pub report: ReportArgs,
}

use anyhow::Result;
use bintext_codec::DigitWidth;
use std::path::Path;

use crate::commands::{analyze, encode};
use crate::config::CodecSection;

/// Encode `input`, then analyze the fresh artifact at every width.
pub fn run_pipeline(
    input: &Path,
    artifact: &Path,
    codec: &CodecSection,
    widths: &[DigitWidth],
    format: &str,
    report: Option<&Path>,
) -> Result<()> {
    encode::encode_file(input, artifact, codec)?;
    analyze::analyze_file(artifact, widths, codec.short_chunk, format, report)
}

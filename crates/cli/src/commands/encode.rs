use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use crate::config::CodecSection;
use crate::io;

/// Encode `input` into a binary-text artifact at `artifact`.
pub fn encode_file(input: &Path, artifact: &Path, codec: &CodecSection) -> Result<()> {
    info!(
        input = %input.display(),
        artifact = %artifact.display(),
        width = %codec.width,
        strategy = %codec.strategy,
        "encoding file"
    );

    let bytes = io::read_bytes(input)?;
    let text = codec
        .strategy
        .encode(&bytes, codec.width)
        .with_context(|| format!("Failed to encode {}", input.display()))?;
    io::write(artifact, &text)?;

    println!(
        "Encoded {} bytes from {} into {} digits at {} (width {})",
        bytes.len(),
        input.display(),
        text.len(),
        artifact.display(),
        codec.width
    );

    Ok(())
}

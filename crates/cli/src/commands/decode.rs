use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use crate::config::CodecSection;
use crate::io;

/// Reconstruct the original bytes from the artifact at `artifact`.
pub fn decode_file(artifact: &Path, output: &Path, codec: &CodecSection) -> Result<()> {
    info!(
        artifact = %artifact.display(),
        output = %output.display(),
        width = %codec.width,
        strategy = %codec.strategy,
        short_chunk = %codec.short_chunk,
        "decoding file"
    );

    let text = io::read_bytes(artifact)?;
    let bytes = codec
        .strategy
        .decode(&text, codec.width, codec.short_chunk)
        .with_context(|| format!("Failed to decode {}", artifact.display()))?;
    io::write(output, &bytes)?;

    println!(
        "Decoded {} digits from {} into {} bytes at {}",
        text.len(),
        artifact.display(),
        bytes.len(),
        output.display()
    );

    Ok(())
}

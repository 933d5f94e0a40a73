use anyhow::{Context, Result};
use bintext_analysis::analyze_artifact;
use bintext_codec::{DigitWidth, ShortChunkPolicy};
use std::path::Path;
use tracing::info;

use crate::io;
use crate::printing::render_profiles;

/// Print (or write to `report`) one distribution per width for `artifact`.
pub fn analyze_file(
    artifact: &Path,
    widths: &[DigitWidth],
    policy: ShortChunkPolicy,
    format: &str,
    report: Option<&Path>,
) -> Result<()> {
    info!(artifact = %artifact.display(), widths = ?widths, "analyzing artifact");

    if widths.is_empty() {
        anyhow::bail!("At least one width is required for analysis");
    }

    let text = io::read_bytes(artifact)?;
    let profiles = analyze_artifact(&text, widths, policy)
        .with_context(|| format!("Failed to analyze {}", artifact.display()))?;
    let content = render_profiles(&profiles, format)?;

    if let Some(path) = report {
        io::write(path, content)?;
        println!("Report written to {}", path.display());
    } else {
        println!("{content}");
    }

    Ok(())
}

//! Per-width profiles of a binary-text artifact
//!
//! Reading the same artifact at widths 8, 4 and 1 yields the byte, nibble
//! and bit distributions of the original file.

use bintext_codec::{decode_with, DigitWidth, ShortChunkPolicy};
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::analysis::distribution::Distribution;
use crate::error::AnalysisError;

/// Byte, nibble and bit widths, in that order.
pub const STANDARD_WIDTHS: [DigitWidth; 3] = [DigitWidth::BYTE, DigitWidth::NIBBLE, DigitWidth::BIT];

/// The distribution of chunk values at one digit width.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidthProfile {
    pub width: DigitWidth,
    pub distribution: Distribution,
}

/// Decode `artifact` at each width and build one distribution per width.
///
/// Widths are independent and analyzed on the rayon pool. Profiles come back
/// in the order of `widths`; if several widths fail, the error for the
/// earliest one is returned.
pub fn analyze_artifact(
    artifact: &[u8],
    widths: &[DigitWidth],
    policy: ShortChunkPolicy,
) -> Result<Vec<WidthProfile>, AnalysisError> {
    debug!(digits = artifact.len(), widths = widths.len(), "analyzing artifact");

    let results: Vec<Result<WidthProfile, AnalysisError>> = widths
        .par_iter()
        .map(|&width| {
            let values = decode_with(artifact, width, policy)?;
            let distribution = Distribution::from_values(&values)?;
            debug!(width = %width, distinct = distribution.len(), "profile complete");
            Ok(WidthProfile {
                width,
                distribution,
            })
        })
        .collect();

    results.into_iter().collect()
}

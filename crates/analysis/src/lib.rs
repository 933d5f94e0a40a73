//! Value distribution analysis for binary-text artifacts.

pub mod analysis;
mod error;

pub use analysis::{analyze_artifact, distribution, Distribution, WidthProfile, STANDARD_WIDTHS};
pub use error::AnalysisError;

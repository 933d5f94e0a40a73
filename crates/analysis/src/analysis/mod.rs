//! Frequency analysis tools
//!
//! - Empirical value distributions and their entropy
//! - Per-width profiles of a binary-text artifact (bytes, nibbles, bits)

pub mod distribution;
pub mod profile;

pub use distribution::{distribution, Distribution};
pub use profile::{analyze_artifact, WidthProfile, STANDARD_WIDTHS};

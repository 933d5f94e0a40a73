//! TOML configuration for the `bintext` tool.
//!
//! Every section is optional; missing keys fall back to [`crate::defaults`].
//! Command-line flags override whatever the file sets.

use std::path::{Path, PathBuf};

use anyhow::Context;
use bintext_analysis::STANDARD_WIDTHS;
use bintext_codec::{CodecStrategy, DigitWidth, ShortChunkPolicy};
use serde::Deserialize;

use crate::defaults;

/// Top-level configuration, parsed from TOML.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BintextConfig {
    /// File locations.
    pub paths: PathsSection,
    /// Codec parameters for encode and decode.
    pub codec: CodecSection,
    /// Distribution analysis settings.
    pub analysis: AnalysisSection,
    /// Logging configuration.
    pub log: LogSection,
}

/// `[paths]` section.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PathsSection {
    /// File to encode.
    pub input: PathBuf,
    /// Binary-text artifact written by encode and read by decode/analyze.
    pub artifact: PathBuf,
    /// Reconstructed file written by decode.
    pub output: PathBuf,
}

impl Default for PathsSection {
    fn default() -> Self {
        Self {
            input: PathBuf::from(defaults::INPUT_FILE),
            artifact: PathBuf::from(defaults::ARTIFACT_FILE),
            output: PathBuf::from(defaults::OUTPUT_FILE),
        }
    }
}

/// `[codec]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CodecSection {
    /// Digits per encoded byte.
    pub width: DigitWidth,
    /// `"parallel"` (default) or `"sequential"`.
    pub strategy: CodecStrategy,
    /// `"reject"` (default), `"drop"` or `"keep"`.
    pub short_chunk: ShortChunkPolicy,
}

impl Default for CodecSection {
    fn default() -> Self {
        Self {
            width: defaults::WIDTH,
            strategy: CodecStrategy::default(),
            short_chunk: ShortChunkPolicy::default(),
        }
    }
}

/// `[analysis]` section.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AnalysisSection {
    /// Widths to read the artifact at.
    pub widths: Vec<DigitWidth>,
    /// Report format: `"pretty"` or `"json"`.
    pub format: String,
}

impl Default for AnalysisSection {
    fn default() -> Self {
        Self {
            widths: STANDARD_WIDTHS.to_vec(),
            format: defaults::REPORT_FORMAT.to_string(),
        }
    }
}

/// `[log]` section.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LogSection {
    /// Log level filter (e.g. `"warn"`, `"info"`, `"debug"`).
    pub level: String,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            level: defaults::LOG_LEVEL.to_string(),
        }
    }
}

impl BintextConfig {
    /// Load config from a TOML file.
    ///
    /// Without an explicit path, `bintext.toml` in the working directory is
    /// used if it exists, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => {
                let local = Path::new(defaults::CONFIG_FILE);
                if local.is_file() {
                    Self::from_file(local)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn from_toml(s: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(s)?)
    }
}

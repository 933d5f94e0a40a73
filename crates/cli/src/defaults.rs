//! Shared default values for paths, codec settings and reporting.
//! These values are used both by the TOML config sections and the clap arguments.

use bintext_codec::DigitWidth;

pub const CONFIG_FILE: &str = "bintext.toml";

pub const INPUT_FILE: &str = "input.bin";
pub const ARTIFACT_FILE: &str = "file-in-binary.txt";
pub const OUTPUT_FILE: &str = "output.bin";

// Encode and decode use full bytes; analysis reads the artifact at every standard width.
pub const WIDTH: DigitWidth = DigitWidth::BYTE;

pub const REPORT_FORMAT: &str = "pretty";
pub const LOG_LEVEL: &str = "warn";

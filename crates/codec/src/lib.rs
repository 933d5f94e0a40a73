//! Binary-text codec.
//!
//! Converts bytes into ASCII `'0'`/`'1'` text and reassembles fixed-width
//! chunks of that text back into integers.

mod chunk;
mod decoder;
mod digit;
mod encoder;
mod error;
mod strategies;
mod traits;
mod width;

pub use chunk::{chunk_count, parse_chunk, usable_len, ShortChunkPolicy};
pub use decoder::{decode, decode_bytes, decode_with};
pub use digit::Digit;
pub use encoder::{byte_to_binary, encode};
pub use error::CodecError as Error;
pub use error::CodecError;
pub use strategies::{BinaryText, ParallelBinaryText};
pub use traits::Codec;
pub use width::DigitWidth;

use serde::{Deserialize, Serialize};

/// Strategies for running the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CodecStrategy {
    /// Single pass on the calling thread.
    Sequential,
    /// Segmented across the rayon pool.
    #[default]
    Parallel,
}

impl CodecStrategy {
    /// Encode using the selected strategy.
    pub fn encode(&self, bytes: &[u8], width: DigitWidth) -> Result<Vec<u8>, CodecError> {
        match self {
            Self::Sequential => BinaryText::new(width).encode(bytes),
            Self::Parallel => ParallelBinaryText::new(width).encode(bytes),
        }
    }

    /// Decode an artifact into one value per chunk.
    pub fn decode_values(
        &self,
        artifact: &[u8],
        width: DigitWidth,
        policy: ShortChunkPolicy,
    ) -> Result<Vec<u64>, CodecError> {
        match self {
            Self::Sequential => BinaryText::new(width)
                .with_policy(policy)
                .decode_values(artifact),
            Self::Parallel => ParallelBinaryText::new(width)
                .with_policy(policy)
                .decode_values(artifact),
        }
    }

    /// Decode an artifact back into bytes.
    pub fn decode(
        &self,
        artifact: &[u8],
        width: DigitWidth,
        policy: ShortChunkPolicy,
    ) -> Result<Vec<u8>, CodecError> {
        match self {
            Self::Sequential => BinaryText::new(width).with_policy(policy).decode(artifact),
            Self::Parallel => ParallelBinaryText::new(width)
                .with_policy(policy)
                .decode(artifact),
        }
    }
}

impl std::fmt::Display for CodecStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sequential => write!(f, "sequential"),
            Self::Parallel => write!(f, "parallel"),
        }
    }
}

impl std::str::FromStr for CodecStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sequential" => Ok(Self::Sequential),
            "parallel" => Ok(Self::Parallel),
            _ => Err(format!(
                "Unknown codec strategy: {s}. Available: sequential, parallel"
            )),
        }
    }
}

//! The "chunk then reinterpret" primitive shared by the decoder and the
//! analyzer.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::digit::Digit;
use crate::error::CodecError;
use crate::width::DigitWidth;

/// What to do with a trailing group shorter than the chunk width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShortChunkPolicy {
    /// Fail with [`CodecError::MalformedArtifact`].
    #[default]
    Reject,
    /// Ignore the trailing digits.
    Drop,
    /// Parse the short group as-is, so `"10"` at width 8 decodes to 2.
    Keep,
}

impl fmt::Display for ShortChunkPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reject => write!(f, "reject"),
            Self::Drop => write!(f, "drop"),
            Self::Keep => write!(f, "keep"),
        }
    }
}

impl std::str::FromStr for ShortChunkPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reject" => Ok(Self::Reject),
            "drop" => Ok(Self::Drop),
            "keep" => Ok(Self::Keep),
            _ => Err(format!(
                "Unknown short chunk policy: {s}. Available: reject, drop, keep"
            )),
        }
    }
}

/// Parse a group of digits as an unsigned base-2 integer, most significant first.
///
/// Groups longer than 64 digits keep only the low 64 bits; [`DigitWidth`]
/// prevents that from happening through the public decoders.
#[inline]
pub fn parse_chunk(digits: &[Digit]) -> u64 {
    digits
        .iter()
        .fold(0u64, |acc, &d| (acc << 1) | u64::from(d.to_bit()))
}

/// Number of digits to consume from an artifact of `len` digits.
///
/// Applies `policy` when `len` is not a multiple of `width`.
pub fn usable_len(
    len: usize,
    width: DigitWidth,
    policy: ShortChunkPolicy,
) -> Result<usize, CodecError> {
    let remainder = len % width.get();
    if remainder == 0 {
        return Ok(len);
    }
    match policy {
        ShortChunkPolicy::Reject => Err(CodecError::MalformedArtifact {
            len,
            width: width.get(),
        }),
        ShortChunkPolicy::Drop => Ok(len - remainder),
        ShortChunkPolicy::Keep => Ok(len),
    }
}

/// Number of values `len` digits decode into under `policy`.
pub fn chunk_count(
    len: usize,
    width: DigitWidth,
    policy: ShortChunkPolicy,
) -> Result<usize, CodecError> {
    usable_len(len, width, policy).map(|usable| usable.div_ceil(width.get()))
}

/// Validate every byte of an artifact into digits.
///
/// `offset` is added to reported positions so that segments of a larger
/// artifact report absolute offsets.
pub(crate) fn validate(artifact: &[u8], offset: usize) -> Result<Vec<Digit>, CodecError> {
    artifact
        .iter()
        .enumerate()
        .map(|(i, &byte)| Digit::parse_at(byte, offset + i))
        .collect()
}

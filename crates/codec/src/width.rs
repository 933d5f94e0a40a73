use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CodecError;

/// Number of binary digits that make up one encoded unit.
///
/// Values decode into `u64`, so the width is bounded to `1..=64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DigitWidth(u8);

impl DigitWidth {
    /// Full bytes.
    pub const BYTE: Self = Self(8);
    /// Half bytes.
    pub const NIBBLE: Self = Self(4);
    /// Individual bits.
    pub const BIT: Self = Self(1);

    pub const MAX: usize = 64;

    pub fn new(width: usize) -> Result<Self, CodecError> {
        if (1..=Self::MAX).contains(&width) {
            Ok(Self(width as u8))
        } else {
            Err(CodecError::InvalidWidth(width))
        }
    }

    #[inline(always)]
    pub const fn get(self) -> usize {
        self.0 as usize
    }

    /// Largest value a chunk of this width can decode to.
    #[inline]
    pub const fn max_value(self) -> u64 {
        if self.0 as usize == Self::MAX {
            u64::MAX
        } else {
            (1u64 << self.0) - 1
        }
    }
}

impl Default for DigitWidth {
    fn default() -> Self {
        Self::BYTE
    }
}

impl TryFrom<u8> for DigitWidth {
    type Error = CodecError;

    fn try_from(width: u8) -> Result<Self, Self::Error> {
        Self::new(width as usize)
    }
}

impl TryFrom<usize> for DigitWidth {
    type Error = CodecError;

    fn try_from(width: usize) -> Result<Self, Self::Error> {
        Self::new(width)
    }
}

impl From<DigitWidth> for u8 {
    fn from(width: DigitWidth) -> u8 {
        width.0
    }
}

impl fmt::Display for DigitWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for DigitWidth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let width: usize = s
            .trim()
            .parse()
            .map_err(|_| format!("Invalid digit width: {s}. Expected an integer in 1..=64"))?;
        Self::new(width).map_err(|e| e.to_string())
    }
}

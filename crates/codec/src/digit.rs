use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CodecError;

/// A single binary digit read from a binary-text artifact.
///
/// `Digit` is backed by a single byte (Zero=0, One=1) and converts to and
/// from the ASCII bytes `b'0'` and `b'1'`. Every other byte is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Digit {
    Zero = 0,
    One = 1,
}

impl Digit {
    /// Convert from an ASCII byte. Returns `None` for anything but `b'0'` / `b'1'`.
    #[inline]
    pub const fn from_ascii(byte: u8) -> Option<Self> {
        match byte {
            b'0' => Some(Self::Zero),
            b'1' => Some(Self::One),
            _ => None,
        }
    }

    /// Convert to the ASCII byte representing this digit.
    #[inline(always)]
    pub const fn to_ascii(self) -> u8 {
        match self {
            Self::Zero => b'0',
            Self::One => b'1',
        }
    }

    /// The numeric value of the digit (0 or 1).
    #[inline(always)]
    pub const fn to_bit(self) -> u8 {
        self as u8
    }

    /// Validate a byte at `position` within an artifact.
    #[inline]
    pub fn parse_at(byte: u8, position: usize) -> Result<Self, CodecError> {
        Self::from_ascii(byte).ok_or(CodecError::InvalidDigit { byte, position })
    }
}

impl TryFrom<u8> for Digit {
    type Error = CodecError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Self::parse_at(byte, 0)
    }
}

impl From<Digit> for char {
    #[inline(always)]
    fn from(digit: Digit) -> char {
        digit.to_ascii() as char
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}

use thiserror::Error;

/// Error type for codec operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// An artifact byte was neither `b'0'` (48) nor `b'1'` (49).
    #[error("Invalid digit byte {byte} at position {position}: expected 48 ('0') or 49 ('1')")]
    InvalidDigit { byte: u8, position: usize },

    /// Digit widths must lie in `1..=64`.
    #[error("Invalid digit width {0}: must be between 1 and 64")]
    InvalidWidth(usize),

    /// The artifact length is not a multiple of the chunk width.
    #[error("Malformed artifact: length {len} is not a multiple of width {width}")]
    MalformedArtifact { len: usize, width: usize },

    /// A decoded chunk does not fit in a byte.
    #[error("Decoded value {value} at chunk {index} does not fit in a byte")]
    ValueOutOfRange { value: u64, index: usize },
}

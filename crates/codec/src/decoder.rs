use tracing::debug;

use crate::chunk::{parse_chunk, usable_len, validate, ShortChunkPolicy};
use crate::error::CodecError;
use crate::width::DigitWidth;

/// Decode a binary-text artifact into one value per `width`-digit chunk.
///
/// Rejects artifacts whose length is not a multiple of `width`. Use
/// [`decode_with`] to pick another [`ShortChunkPolicy`].
pub fn decode(artifact: &[u8], width: DigitWidth) -> Result<Vec<u64>, CodecError> {
    decode_with(artifact, width, ShortChunkPolicy::Reject)
}

/// Decode a binary-text artifact with an explicit short-chunk policy.
///
/// Every byte is validated before any chunk is parsed, including trailing
/// digits that `ShortChunkPolicy::Drop` would discard.
pub fn decode_with(
    artifact: &[u8],
    width: DigitWidth,
    policy: ShortChunkPolicy,
) -> Result<Vec<u64>, CodecError> {
    debug!(digits = artifact.len(), width = %width, %policy, "decoding binary text");
    decode_segment(artifact, 0, width, policy)
}

/// Decode a binary-text artifact back into the bytes it was encoded from.
pub fn decode_bytes(
    artifact: &[u8],
    width: DigitWidth,
    policy: ShortChunkPolicy,
) -> Result<Vec<u8>, CodecError> {
    let values = decode_with(artifact, width, policy)?;
    values_to_bytes(&values)
}

/// Decode one segment of a larger artifact starting at digit `offset`.
pub(crate) fn decode_segment(
    segment: &[u8],
    offset: usize,
    width: DigitWidth,
    policy: ShortChunkPolicy,
) -> Result<Vec<u64>, CodecError> {
    let digits = validate(segment, offset)?;
    let usable = usable_len(digits.len(), width, policy)?;

    Ok(digits[..usable]
        .chunks(width.get())
        .map(parse_chunk)
        .collect())
}

/// Narrow decoded values to bytes, reporting the first chunk that does not fit.
pub(crate) fn values_to_bytes(values: &[u64]) -> Result<Vec<u8>, CodecError> {
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            u8::try_from(value).map_err(|_| CodecError::ValueOutOfRange {
                value,
                index: i,
            })
        })
        .collect()
}

use rayon::prelude::*;
use tracing::debug;

use crate::chunk::{usable_len, ShortChunkPolicy};
use crate::decoder::decode_segment;
use crate::digit::Digit;
use crate::encoder::{encode_segment, warn_overflow};
use crate::error::CodecError;
use crate::traits::Codec;
use crate::width::DigitWidth;

/// Strategy: the same codec as `BinaryText`, split into segments that are
/// processed on the rayon pool.
///
/// # How it works
///
/// Chunks never depend on each other, so the input is cut into segments of
/// whole chunks, each segment is encoded or decoded independently, and the
/// results are concatenated in their original order.
///
/// Validation scans the whole artifact with `find_first`, so the reported
/// invalid digit is always the earliest one, exactly as `BinaryText` reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParallelBinaryText {
    pub width: DigitWidth,
    pub policy: ShortChunkPolicy,
}

// Chunks per segment handed to a single rayon task.
const SEGMENT_CHUNKS: usize = 64 * 1024;

impl ParallelBinaryText {
    pub fn new(width: DigitWidth) -> Self {
        Self {
            width,
            policy: ShortChunkPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: ShortChunkPolicy) -> Self {
        self.policy = policy;
        self
    }

    fn segment_digits(&self) -> usize {
        SEGMENT_CHUNKS * self.width.get()
    }
}

impl Codec for ParallelBinaryText {
    fn encode(&self, bytes: &[u8]) -> Result<Vec<u8>, CodecError> {
        debug!(bytes = bytes.len(), width = %self.width, "encoding to binary text in parallel");

        let portions: Vec<(String, usize)> = bytes
            .par_chunks(SEGMENT_CHUNKS)
            .map(|segment| encode_segment(segment, self.width))
            .collect();

        let overflowed = portions.iter().map(|(_, n)| n).sum();
        warn_overflow(overflowed, self.width);

        let total_size: usize = portions.iter().map(|(text, _)| text.len()).sum();
        let mut result = Vec::with_capacity(total_size);
        for (text, _) in portions {
            result.extend_from_slice(text.as_bytes());
        }

        Ok(result)
    }

    fn decode_values(&self, artifact: &[u8]) -> Result<Vec<u64>, CodecError> {
        debug!(
            digits = artifact.len(),
            width = %self.width,
            policy = %self.policy,
            "decoding binary text in parallel"
        );

        if let Some((position, &byte)) = artifact
            .par_iter()
            .enumerate()
            .find_first(|&(_, &byte)| Digit::from_ascii(byte).is_none())
        {
            return Err(CodecError::InvalidDigit { byte, position });
        }

        let usable = usable_len(artifact.len(), self.width, self.policy)?;
        let segment_digits = self.segment_digits();

        // Every segment but the last is a whole number of chunks, and the
        // policy has already been applied to the tail.
        let decoded_segments = artifact[..usable]
            .par_chunks(segment_digits)
            .enumerate()
            .map(|(i, segment)| {
                decode_segment(segment, i * segment_digits, self.width, ShortChunkPolicy::Keep)
            })
            .collect::<Result<Vec<Vec<u64>>, CodecError>>()?;

        let total: usize = decoded_segments.iter().map(Vec::len).sum();
        let mut result = Vec::with_capacity(total);
        for values in decoded_segments {
            result.extend_from_slice(&values);
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::BinaryText;
    use rand::Rng;

    #[test]
    fn test_parallel_round_trip() {
        let codec = ParallelBinaryText::new(DigitWidth::BYTE);
        let mut rng = rand::thread_rng();
        // More than one segment, with a partial last segment
        let size = SEGMENT_CHUNKS * 2 + 500;
        let input: Vec<u8> = (0..size).map(|_| rng.gen()).collect();

        let encoded = codec.encode(&input).expect("Encoding failed");
        let decoded = codec.decode(&encoded).expect("Decoding failed");

        assert_eq!(decoded, input);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mut rng = rand::thread_rng();
        let input: Vec<u8> = (0..SEGMENT_CHUNKS + 17).map(|_| rng.gen()).collect();

        let sequential = BinaryText::new(DigitWidth::BYTE);
        let parallel = ParallelBinaryText::new(DigitWidth::BYTE);

        let encoded = sequential.encode(&input).unwrap();
        assert_eq!(parallel.encode(&input).unwrap(), encoded);

        for width in [DigitWidth::BYTE, DigitWidth::NIBBLE, DigitWidth::BIT] {
            assert_eq!(
                ParallelBinaryText::new(width).decode_values(&encoded).unwrap(),
                BinaryText::new(width).decode_values(&encoded).unwrap(),
            );
        }
    }

    #[test]
    fn test_parallel_reports_first_invalid_digit() {
        let codec = ParallelBinaryText::new(DigitWidth::BYTE);
        let mut artifact = vec![b'0'; SEGMENT_CHUNKS * 8 * 3];
        let late = artifact.len() - 5;
        let early = SEGMENT_CHUNKS * 8 + 3;
        artifact[late] = b'7';
        artifact[early] = b'x';

        let err = codec.decode_values(&artifact).unwrap_err();
        assert_eq!(
            err,
            CodecError::InvalidDigit {
                byte: b'x',
                position: early
            }
        );
    }

    #[test]
    fn test_parallel_short_tail() {
        let artifact = b"000000010000001";
        let strict = ParallelBinaryText::new(DigitWidth::BYTE);
        assert_eq!(
            strict.decode_values(artifact),
            Err(CodecError::MalformedArtifact { len: 15, width: 8 })
        );

        let keep = strict.with_policy(ShortChunkPolicy::Keep);
        assert_eq!(keep.decode_values(artifact).unwrap(), vec![1, 1]);
    }

    #[test]
    fn test_parallel_empty() {
        let codec = ParallelBinaryText::default();
        assert!(codec.encode(&[]).unwrap().is_empty());
        assert!(codec.decode_values(&[]).unwrap().is_empty());
    }
}

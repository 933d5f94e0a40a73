use crate::decoder::values_to_bytes;
use crate::error::CodecError;

/// Core trait for binary-text codecs.
///
/// Any strategy (like `BinaryText` or `ParallelBinaryText`) must be able to:
/// 1.  `encode`: Turn raw bytes into an ASCII `'0'`/`'1'` artifact.
/// 2.  `decode_values`: Turn an artifact into one integer per chunk.
///
/// `decode` narrows those integers back into the original bytes.
pub trait Codec {
    fn encode(&self, bytes: &[u8]) -> Result<Vec<u8>, CodecError>;
    fn decode_values(&self, artifact: &[u8]) -> Result<Vec<u64>, CodecError>;

    fn decode(&self, artifact: &[u8]) -> Result<Vec<u8>, CodecError> {
        let values = self.decode_values(artifact)?;
        values_to_bytes(&values)
    }
}

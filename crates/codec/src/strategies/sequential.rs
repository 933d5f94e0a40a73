use crate::chunk::ShortChunkPolicy;
use crate::decoder::decode_with;
use crate::encoder::encode;
use crate::error::CodecError;
use crate::traits::Codec;
use crate::width::DigitWidth;

/// Strategy: one pass over the whole buffer on the calling thread.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BinaryText {
    pub width: DigitWidth,
    pub policy: ShortChunkPolicy,
}

impl BinaryText {
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
}

impl Codec for BinaryText {
    fn encode(&self, bytes: &[u8]) -> Result<Vec<u8>, CodecError> {
        Ok(encode(bytes, self.width).into_bytes())
    }

    fn decode_values(&self, artifact: &[u8]) -> Result<Vec<u64>, CodecError> {
        decode_with(artifact, self.width, self.policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_encode_empty() {
        let codec = BinaryText::default();
        let encoded = codec.encode(&[]).expect("Encoding failed");
        assert!(encoded.is_empty());
        let decoded = codec.decode(&encoded).expect("Decoding failed");
        assert!(decoded.is_empty());
    }

    #[test]
    fn test_round_trip_random() {
        let codec = BinaryText::new(DigitWidth::BYTE);
        let mut rng = rand::thread_rng();
        for _ in 0..10 {
            let len = rng.gen_range(1..1000);
            let input: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
            let encoded = codec.encode(&input).expect("Encoding failed");
            assert_eq!(encoded.len(), input.len() * 8);
            let decoded = codec.decode(&encoded).expect("Decoding failed");
            assert_eq!(decoded, input);
        }
    }

    #[test]
    fn test_decode_values_at_narrower_width() {
        let codec = BinaryText::new(DigitWidth::BYTE);
        let encoded = codec.encode(&[0xA5]).unwrap();

        let nibbles = BinaryText::new(DigitWidth::NIBBLE)
            .decode_values(&encoded)
            .unwrap();
        assert_eq!(nibbles, vec![0xA, 0x5]);
    }

    #[test]
    fn test_policy_is_applied() {
        let codec = BinaryText::new(DigitWidth::BYTE).with_policy(ShortChunkPolicy::Drop);
        assert_eq!(codec.decode(b"00000011101").unwrap(), vec![3]);

        let strict = BinaryText::new(DigitWidth::BYTE);
        assert!(matches!(
            strict.decode(b"00000011101"),
            Err(CodecError::MalformedArtifact { .. })
        ));
    }

    #[test]
    fn test_decode_rejects_wide_values() {
        let codec = BinaryText::new(DigitWidth::new(16).unwrap());
        let result = codec.decode(b"0000000100000000");
        assert_eq!(result, Err(CodecError::ValueOutOfRange { value: 256, index: 0 }));
    }
}

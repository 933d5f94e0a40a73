use bintext_codec::CodecError;
use thiserror::Error;

/// Error type for analysis operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// A distribution over zero values has no defined probabilities.
    #[error("Cannot compute a distribution over an empty sequence")]
    EmptyInput,

    #[error(transparent)]
    Codec(#[from] CodecError),
}

//! Error handling for the field-element codec.
//!
//! Every fallible operation in the crate returns [`CodecResult`]. Failures
//! are never retried internally and never downgraded to a zero value.

use thiserror::Error;

/// Errors surfaced by the codec, the element buffer and element backends.
#[derive(Debug, Error)]
pub enum CodecError {
    /// A non-empty read was requested from a source with no elements left.
    #[error("end of element sequence")]
    EndOfSequence,

    /// A value or destination outside the supported unsigned widths.
    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    /// A fixed-width decode recovered fewer bytes than its width.
    #[error("insufficient data: expected {expected} bytes, got {actual}")]
    InsufficientData {
        /// Bytes required by the destination.
        expected: usize,
        /// Bytes actually recovered.
        actual: usize,
    },

    /// A decimal string is not a value of the requested width.
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// More than four bytes were handed to the chunk packer.
    #[error("chunk of {0} bytes does not fit in a single element")]
    ChunkTooLong(usize),

    /// A decimal string is not a canonical element of the field.
    #[error("invalid field element: {0}")]
    InvalidElement(String),

    /// Failure reported by a non-memory read or write backend.
    #[error("backend failure: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A backend failure observed while running a codec operation.
    #[error("{op} failed: {source}")]
    Capability {
        /// Codec operation that observed the failure.
        op: &'static str,
        /// Underlying failure.
        #[source]
        source: Box<CodecError>,
    },
}

impl CodecError {
    /// Attaches the name of the codec operation to a backend failure.
    ///
    /// Sequence and length conditions pass through unchanged so callers can
    /// match on them directly.
    pub(crate) fn during(self, op: &'static str) -> Self {
        match self {
            err @ (CodecError::EndOfSequence | CodecError::InsufficientData { .. }) => err,
            err @ CodecError::Capability { .. } => err,
            other => CodecError::Capability {
                op,
                source: Box::new(other),
            },
        }
    }

    /// Returns true when the error signals an exhausted source.
    pub fn is_end_of_sequence(&self) -> bool {
        matches!(self, CodecError::EndOfSequence)
    }
}

/// Result alias used throughout the crate.
pub type CodecResult<T> = Result<T, CodecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_during_keeps_end_of_sequence() {
        let err = CodecError::EndOfSequence.during("decode_bytes");
        assert!(err.is_end_of_sequence());
    }

    #[test]
    fn test_during_wraps_backend() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = CodecError::Backend(Box::new(io)).during("encode_bytes");
        assert_eq!(
            err.to_string(),
            "encode_bytes failed: backend failure: pipe closed"
        );
    }
}

//! Flat decoder: field elements back to values and byte strings.

use super::chunk::{decode_chunk, elements_for, BYTES_PER_ELEMENT};
use super::value::{Unsigned, Value, Width};
use crate::error::{CodecError, CodecResult};
use crate::field::FieldElement;
use crate::io::VectorRead;
use std::marker::PhantomData;

/// Reads elements from a [`VectorRead`] source and unpacks them.
#[derive(Debug)]
pub struct Decoder<F, R> {
    r: R,
    _field: PhantomData<F>,
}

impl<F: FieldElement, R: VectorRead<F>> Decoder<F, R> {
    /// Create a decoder over `r`.
    pub fn new(r: R) -> Self {
        Self {
            r,
            _field: PhantomData,
        }
    }

    /// Decode an unsigned integer of type `T`.
    ///
    /// Fails with [`CodecError::InsufficientData`] when the source holds
    /// fewer elements than the width requires.
    pub fn decode<T: Unsigned>(&mut self) -> CodecResult<T> {
        let mut bytes = T::Bytes::default();
        self.decode_full(bytes.as_mut())?;
        Ok(T::from_be_array(bytes))
    }

    /// Decode an unsigned integer whose width is only known at runtime.
    pub fn decode_value(&mut self, width: Width) -> CodecResult<Value> {
        Ok(match width {
            Width::U8 => Value::U8(self.decode()?),
            Width::U16 => Value::U16(self.decode()?),
            Width::U32 => Value::U32(self.decode()?),
            Width::U64 => Value::U64(self.decode()?),
        })
    }

    /// Decode up to `buf.len()` bytes, four per element.
    ///
    /// Returns the number of bytes recovered, which is short when the source
    /// held fewer elements than requested. `buf` is left untouched if the
    /// read fails.
    pub fn decode_bytes(&mut self, buf: &mut [u8]) -> CodecResult<usize> {
        let len = buf.len();
        let mut elements = vec![F::default(); elements_for(len)];

        let n = self
            .r
            .read_vector(&mut elements)
            .map_err(|e| e.during("decode_bytes"))?;

        for (chunk, e) in buf.chunks_mut(BYTES_PER_ELEMENT).zip(&elements[..n]) {
            decode_chunk(e, chunk)?;
        }

        let decoded = (n * BYTES_PER_ELEMENT).min(len);
        if decoded < len {
            tracing::debug!(requested = len, decoded, "short element read");
        }
        Ok(decoded)
    }

    /// Decode exactly `n` bytes.
    ///
    /// Fails with [`CodecError::InsufficientData`] on a short read.
    pub fn decode_exact(&mut self, n: usize) -> CodecResult<Vec<u8>> {
        let mut bytes = vec![0u8; n];
        self.decode_full(&mut bytes)?;
        Ok(bytes)
    }

    fn decode_full(&mut self, buf: &mut [u8]) -> CodecResult<()> {
        let n = self.decode_bytes(buf)?;
        if n < buf.len() {
            return Err(CodecError::InsufficientData {
                expected: buf.len(),
                actual: n,
            });
        }
        Ok(())
    }

    /// Borrow the underlying source.
    pub fn get_ref(&self) -> &R {
        &self.r
    }

    /// Mutably borrow the underlying source.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.r
    }

    /// Consume the decoder and return the source.
    pub fn into_inner(self) -> R {
        self.r
    }
}

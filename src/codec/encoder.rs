//! Flat encoder: values and byte strings to field elements.

use super::chunk::{elements_for, encode_chunk, BYTES_PER_ELEMENT};
use super::value::{Unsigned, Value};
use crate::error::CodecResult;
use crate::field::FieldElement;
use crate::io::VectorWrite;
use std::marker::PhantomData;

/// Writes encoded elements through a [`VectorWrite`] sink.
#[derive(Debug)]
pub struct Encoder<F, W> {
    w: W,
    _field: PhantomData<F>,
}

impl<F: FieldElement, W: VectorWrite<F>> Encoder<F, W> {
    /// Create an encoder over `w`.
    pub fn new(w: W) -> Self {
        Self {
            w,
            _field: PhantomData,
        }
    }

    /// Encode an unsigned integer as its big-endian bytes.
    ///
    /// A `u64` always produces two elements (high and low halves), a
    /// narrower type exactly one.
    pub fn encode<T: Unsigned>(&mut self, value: T) -> CodecResult<()> {
        self.encode_bytes(&value.to_be_vec())?;
        Ok(())
    }

    /// Encode a runtime-tagged unsigned integer.
    pub fn encode_value(&mut self, value: Value) -> CodecResult<()> {
        self.encode_bytes(&value.to_be_vec())?;
        Ok(())
    }

    /// Encode raw bytes, four per element, most significant chunk first.
    ///
    /// The final chunk carries the 1-4 remaining bytes; nothing is padded.
    /// Returns the number of bytes consumed.
    pub fn encode_bytes(&mut self, buf: &[u8]) -> CodecResult<usize> {
        if buf.is_empty() {
            return Ok(0);
        }

        let elements = buf
            .chunks(BYTES_PER_ELEMENT)
            .map(encode_chunk::<F>)
            .collect::<CodecResult<Vec<F>>>()?;
        debug_assert_eq!(elements.len(), elements_for(buf.len()));

        self.append(&elements, "encode_bytes")?;
        Ok(buf.len())
    }

    /// Append a pre-built element without chunking.
    pub fn encode_element(&mut self, e: F) -> CodecResult<()> {
        self.append(&[e], "encode_element")?;
        Ok(())
    }

    /// Append pre-built elements without chunking.
    pub fn encode_vector(&mut self, v: &[F]) -> CodecResult<usize> {
        self.append(v, "encode_vector")
    }

    /// Borrow the underlying sink.
    pub fn get_ref(&self) -> &W {
        &self.w
    }

    /// Mutably borrow the underlying sink.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.w
    }

    /// Consume the encoder and return the sink.
    pub fn into_inner(self) -> W {
        self.w
    }

    fn append(&mut self, elements: &[F], op: &'static str) -> CodecResult<usize> {
        self.w.write_vector(elements).map_err(|e| e.during(op))
    }
}

//! In-memory FIFO of field elements.
//!
//! [`ElementBuffer`] is the reference implementation of the element and
//! vector capabilities in [`crate::io`]. Writes append; reads advance a
//! cursor. The buffer is append-only while unread data exists and drops its
//! storage the moment a read finds nothing left.

use crate::error::{CodecError, CodecResult};
use crate::field::FieldElement;
use crate::io::{ElementRead, ElementWrite, VectorRead, VectorWrite};

/// Single-reader, single-writer element queue.
///
/// Not synchronized. Wrap it in a lock to share it across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementBuffer<F> {
    storage: Vec<F>,
    offset: usize,
}

impl<F> Default for ElementBuffer<F> {
    fn default() -> Self {
        Self {
            storage: Vec::new(),
            offset: 0,
        }
    }
}

impl<F: FieldElement> ElementBuffer<F> {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer whose unread elements are `storage`.
    pub fn from_vec(storage: Vec<F>) -> Self {
        Self { storage, offset: 0 }
    }

    /// Number of unread elements.
    pub fn count(&self) -> usize {
        self.storage.len() - self.offset
    }

    /// True when no unread element is left.
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Unread suffix of the buffer.
    pub fn unread(&self) -> &[F] {
        &self.storage[self.offset..]
    }

    /// Take the unread elements and reset the buffer.
    pub fn flush(&mut self) -> Vec<F> {
        let mut storage = std::mem::take(&mut self.storage);
        storage.drain(..self.offset);
        self.offset = 0;
        storage
    }

    /// Clear the buffer to its empty state.
    pub fn reset(&mut self) {
        self.storage = Vec::new();
        self.offset = 0;
    }

    /// Reset on exhaustion and report [`CodecError::EndOfSequence`].
    fn exhausted(&mut self) -> CodecError {
        tracing::trace!(consumed = self.offset, "element buffer drained");
        self.reset();
        CodecError::EndOfSequence
    }
}

impl<F: FieldElement> ElementRead<F> for ElementBuffer<F> {
    fn read_element(&mut self) -> CodecResult<F> {
        if self.is_empty() {
            return Err(self.exhausted());
        }

        let e = self.storage[self.offset];
        self.offset += 1;
        Ok(e)
    }
}

impl<F: FieldElement> VectorRead<F> for ElementBuffer<F> {
    fn read_vector(&mut self, dst: &mut [F]) -> CodecResult<usize> {
        if self.is_empty() {
            if dst.is_empty() {
                self.reset();
                return Ok(0);
            }
            return Err(self.exhausted());
        }

        let n = dst.len().min(self.count());
        dst[..n].copy_from_slice(&self.storage[self.offset..self.offset + n]);
        self.offset += n;
        Ok(n)
    }
}

impl<F: FieldElement> ElementWrite<F> for ElementBuffer<F> {
    fn write_element(&mut self, e: F) -> CodecResult<()> {
        self.storage.push(e);
        Ok(())
    }
}

impl<F: FieldElement> VectorWrite<F> for ElementBuffer<F> {
    fn write_vector(&mut self, v: &[F]) -> CodecResult<usize> {
        self.storage.extend_from_slice(v);
        Ok(v.len())
    }
}

impl<F: FieldElement> From<Vec<F>> for ElementBuffer<F> {
    fn from(storage: Vec<F>) -> Self {
        Self::from_vec(storage)
    }
}

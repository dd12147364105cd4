//! Read and write capabilities over field elements.
//!
//! Encoders and decoders only depend on these traits, so any backing store
//! (memory, files of decimal strings, a pipe to a VM) can be swapped in.
//! Backends report their own failures as [`CodecError::Backend`].
//!
//! [`CodecError::Backend`]: crate::error::CodecError::Backend

use crate::error::CodecResult;
use crate::field::FieldElement;

/// Reads a single element.
pub trait ElementRead<F: FieldElement> {
    /// Returns the next element or [`EndOfSequence`] when none is left.
    ///
    /// [`EndOfSequence`]: crate::error::CodecError::EndOfSequence
    fn read_element(&mut self) -> CodecResult<F>;
}

/// Writes a single element.
pub trait ElementWrite<F: FieldElement> {
    /// Appends one element.
    fn write_element(&mut self, e: F) -> CodecResult<()>;
}

/// Best-effort bulk read.
pub trait VectorRead<F: FieldElement> {
    /// Fills a prefix of `dst` and returns how many slots were filled.
    ///
    /// Filling fewer than `dst.len()` slots is not an error. Fails with
    /// [`EndOfSequence`] only when nothing is available and `dst` is
    /// non-empty.
    ///
    /// [`EndOfSequence`]: crate::error::CodecError::EndOfSequence
    fn read_vector(&mut self, dst: &mut [F]) -> CodecResult<usize>;
}

/// Append-only bulk write.
pub trait VectorWrite<F: FieldElement> {
    /// Appends all of `v` and returns the number of elements written.
    fn write_vector(&mut self, v: &[F]) -> CodecResult<usize>;
}

impl<F: FieldElement, T: ElementRead<F> + ?Sized> ElementRead<F> for &mut T {
    fn read_element(&mut self) -> CodecResult<F> {
        (**self).read_element()
    }
}

impl<F: FieldElement, T: ElementWrite<F> + ?Sized> ElementWrite<F> for &mut T {
    fn write_element(&mut self, e: F) -> CodecResult<()> {
        (**self).write_element(e)
    }
}

impl<F: FieldElement, T: VectorRead<F> + ?Sized> VectorRead<F> for &mut T {
    fn read_vector(&mut self, dst: &mut [F]) -> CodecResult<usize> {
        (**self).read_vector(dst)
    }
}

impl<F: FieldElement, T: VectorWrite<F> + ?Sized> VectorWrite<F> for &mut T {
    fn write_vector(&mut self, v: &[F]) -> CodecResult<usize> {
        (**self).write_vector(v)
    }
}

impl<F: FieldElement> VectorWrite<F> for Vec<F> {
    fn write_vector(&mut self, v: &[F]) -> CodecResult<usize> {
        self.extend_from_slice(v);
        Ok(v.len())
    }
}

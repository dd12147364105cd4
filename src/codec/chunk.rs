//! Packing of up to four raw bytes into one field element.

use crate::error::{CodecError, CodecResult};
use crate::field::FieldElement;

/// Number of raw bytes carried by a single element.
pub const BYTES_PER_ELEMENT: usize = 4;

/// Number of elements needed to carry `len` bytes.
pub const fn elements_for(len: usize) -> usize {
    len.div_ceil(BYTES_PER_ELEMENT)
}

/// Packs `bytes` (big-endian, at most four) into an element of equal value.
pub fn encode_chunk<F: FieldElement>(bytes: &[u8]) -> CodecResult<F> {
    if bytes.len() > BYTES_PER_ELEMENT {
        return Err(CodecError::ChunkTooLong(bytes.len()));
    }

    let mut word = [0u8; BYTES_PER_ELEMENT];
    word[BYTES_PER_ELEMENT - bytes.len()..].copy_from_slice(bytes);
    Ok(F::from_u32(u32::from_be_bytes(word)))
}

/// Copies the rightmost `out.len()` bytes of the element's canonical
/// big-endian representation into `out`.
///
/// `out` should match the length used when the chunk was encoded; a shorter
/// `out` truncates. More than four bytes is [`CodecError::ChunkTooLong`].
pub fn decode_chunk<F: FieldElement>(e: &F, out: &mut [u8]) -> CodecResult<()> {
    if out.len() > BYTES_PER_ELEMENT {
        return Err(CodecError::ChunkTooLong(out.len()));
    }

    let repr = e.to_bytes_be();
    let bytes = repr.as_ref();
    out.copy_from_slice(&bytes[bytes.len() - out.len()..]);
    Ok(())
}

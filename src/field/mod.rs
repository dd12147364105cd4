//! Prime field element backends.
//!
//! The codec never performs field arithmetic. It only needs to build an
//! element from a small integer and read back the element's canonical
//! big-endian bytes, which is what [`FieldElement`] captures. Decimal
//! strings are the interchange format of external execution environments.
//!
//! Two backends are provided:
//!
//! - [`Goldilocks`] - the 64-bit field `2^64 - 2^32 + 1` used by the Miden VM
//! - [`Fr`] - the BLS12-381 scalar field

mod fr;
mod goldilocks;

pub use fr::Fr;
pub use goldilocks::{Goldilocks, GOLDILOCKS_PRIME};

use crate::error::{CodecError, CodecResult};
use std::fmt;

/// Opaque element of a prime field whose modulus exceeds `2^32`.
pub trait FieldElement: Copy + Eq + Default + fmt::Debug + fmt::Display {
    /// Width in bytes of the canonical representation.
    const BYTES: usize;

    /// Canonical big-endian representation, `BYTES` long.
    type Repr: AsRef<[u8]>;

    /// Embeds a 32-bit integer. Exact because the modulus exceeds `2^32`.
    fn from_u32(value: u32) -> Self;

    /// Canonical big-endian bytes of the element's residue.
    fn to_bytes_be(&self) -> Self::Repr;

    /// Canonical decimal representation.
    fn to_decimal(&self) -> String;

    /// Parses a canonical decimal representation.
    ///
    /// Empty strings, signs, non-digits and values not below the modulus are
    /// rejected with [`CodecError::InvalidElement`].
    fn from_decimal(s: &str) -> CodecResult<Self>;
}

/// Checks that `s` is a non-empty run of ASCII digits.
pub(crate) fn ensure_digits(s: &str) -> CodecResult<()> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CodecError::InvalidElement(format!("not a decimal: {s:?}")));
    }
    Ok(())
}

//! BLS12-381 scalar field element (Fr).
//!
//! Wraps `bls12_381::Scalar`. The scalar's native encoding is 32 bytes
//! little-endian; the codec sees it reversed, as big-endian.

use super::{ensure_digits, FieldElement};
use crate::error::{CodecError, CodecResult};
use bls12_381::Scalar;
use ff::Field;
use std::fmt;

/// A BLS12-381 scalar field element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fr(Scalar);

impl Fr {
    /// The additive identity (zero).
    pub const ZERO: Fr = Fr(Scalar::ZERO);

    /// The multiplicative identity (one).
    pub const ONE: Fr = Fr(Scalar::ONE);

    /// Create an Fr from a u64 value.
    pub fn from_u64(val: u64) -> Fr {
        Fr(Scalar::from(val))
    }

    /// Create an Fr from canonical little-endian bytes.
    ///
    /// Returns `None` if the value is not below the field modulus.
    pub fn from_bytes_le(bytes: &[u8; 32]) -> Option<Fr> {
        Option::from(Scalar::from_bytes(bytes)).map(Fr)
    }

    /// Convert to canonical 32-byte little-endian representation.
    pub fn to_bytes_le(&self) -> [u8; 32] {
        self.0.to_bytes()
    }

    /// Get the underlying scalar value.
    pub fn inner(&self) -> &Scalar {
        &self.0
    }
}

impl FieldElement for Fr {
    const BYTES: usize = 32;
    type Repr = [u8; 32];

    fn from_u32(value: u32) -> Self {
        Fr::from_u64(u64::from(value))
    }

    fn to_bytes_be(&self) -> [u8; 32] {
        let mut bytes = self.to_bytes_le();
        bytes.reverse();
        bytes
    }

    fn to_decimal(&self) -> String {
        let mut limbs = to_limbs(&self.to_bytes_le());
        if limbs == [0; 4] {
            return "0".to_string();
        }

        let mut digits = Vec::new();
        while limbs != [0; 4] {
            digits.push(b'0' + div_by_10(&mut limbs));
        }
        digits.iter().rev().map(|d| *d as char).collect()
    }

    fn from_decimal(s: &str) -> CodecResult<Self> {
        ensure_digits(s)?;

        let mut limbs = [0u64; 4];
        for digit in s.bytes().map(|b| b - b'0') {
            if mul10_add(&mut limbs, digit) != 0 {
                return Err(CodecError::InvalidElement(format!("{s} exceeds 256 bits")));
            }
        }

        let mut bytes = [0u8; 32];
        for (chunk, limb) in bytes.chunks_exact_mut(8).zip(limbs) {
            chunk.copy_from_slice(&limb.to_le_bytes());
        }
        Fr::from_bytes_le(&bytes).ok_or_else(|| {
            CodecError::InvalidElement(format!("{s} is not below the BLS12-381 scalar modulus"))
        })
    }
}

/// Split little-endian bytes into little-endian u64 limbs.
fn to_limbs(bytes: &[u8; 32]) -> [u64; 4] {
    let mut limbs = [0u64; 4];
    for (limb, chunk) in limbs.iter_mut().zip(bytes.chunks_exact(8)) {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(chunk);
        *limb = u64::from_le_bytes(buf);
    }
    limbs
}

/// Divide a 256-bit number (as 4 u64 limbs, little-endian) by 10 in place.
/// Returns the remainder.
fn div_by_10(limbs: &mut [u64; 4]) -> u8 {
    let mut carry: u128 = 0;
    for limb in limbs.iter_mut().rev() {
        let cur = (carry << 64) | u128::from(*limb);
        *limb = (cur / 10) as u64;
        carry = cur % 10;
    }
    carry as u8
}

/// Computes `limbs * 10 + digit` in place. Returns the overflow carry.
fn mul10_add(limbs: &mut [u64; 4], digit: u8) -> u64 {
    let mut carry = u128::from(digit);
    for limb in limbs.iter_mut() {
        let cur = u128::from(*limb) * 10 + carry;
        *limb = cur as u64;
        carry = cur >> 64;
    }
    carry as u64
}

impl Default for Fr {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<u64> for Fr {
    fn from(val: u64) -> Self {
        Fr::from_u64(val)
    }
}

impl fmt::Display for Fr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}

//! Goldilocks field element, `p = 2^64 - 2^32 + 1`.
//!
//! Wraps `winter_math`'s 64-bit base field so the codec can target the
//! Miden VM stacks directly.

use super::{ensure_digits, FieldElement};
use crate::error::{CodecError, CodecResult};
use std::fmt;
use std::hash::{Hash, Hasher};
use winter_math::fields::f64::BaseElement;
use winter_math::FieldElement as WinterFieldElement;

/// The Goldilocks prime.
pub const GOLDILOCKS_PRIME: u64 = 0xFFFF_FFFF_0000_0001;

/// An element of the Goldilocks field.
#[derive(Clone, Copy)]
pub struct Goldilocks(BaseElement);

impl Goldilocks {
    /// The additive identity (zero).
    pub const ZERO: Goldilocks = Goldilocks(<BaseElement as WinterFieldElement>::ZERO);

    /// The multiplicative identity (one).
    pub const ONE: Goldilocks = Goldilocks(<BaseElement as WinterFieldElement>::ONE);

    /// Create an element from a u64, reducing modulo the prime.
    pub fn new(value: u64) -> Self {
        Goldilocks(BaseElement::new(value))
    }

    /// Canonical integer representative in `[0, p)`.
    pub fn as_u64(&self) -> u64 {
        self.0.as_int()
    }

    /// Get the underlying `winter_math` element.
    pub fn inner(&self) -> &BaseElement {
        &self.0
    }
}

impl FieldElement for Goldilocks {
    const BYTES: usize = 8;
    type Repr = [u8; 8];

    fn from_u32(value: u32) -> Self {
        Goldilocks::new(u64::from(value))
    }

    fn to_bytes_be(&self) -> [u8; 8] {
        self.as_u64().to_be_bytes()
    }

    fn to_decimal(&self) -> String {
        self.as_u64().to_string()
    }

    fn from_decimal(s: &str) -> CodecResult<Self> {
        ensure_digits(s)?;
        let value: u64 = s
            .parse()
            .map_err(|_| CodecError::InvalidElement(format!("{s} exceeds 64 bits")))?;
        if value >= GOLDILOCKS_PRIME {
            return Err(CodecError::InvalidElement(format!(
                "{s} is not below the Goldilocks prime"
            )));
        }
        Ok(Goldilocks::new(value))
    }
}

impl Default for Goldilocks {
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialEq for Goldilocks {
    fn eq(&self, other: &Self) -> bool {
        self.as_u64() == other.as_u64()
    }
}

impl Eq for Goldilocks {}

impl Hash for Goldilocks {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_u64().hash(state);
    }
}

impl From<u64> for Goldilocks {
    fn from(value: u64) -> Self {
        Goldilocks::new(value)
    }
}

impl From<BaseElement> for Goldilocks {
    fn from(value: BaseElement) -> Self {
        Goldilocks(value)
    }
}

impl fmt::Debug for Goldilocks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Goldilocks").field(&self.as_u64()).finish()
    }
}

impl fmt::Display for Goldilocks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u64())
    }
}

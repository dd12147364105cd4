//! The closed set of unsigned integer types the codec understands.
//!
//! [`Unsigned`] resolves the width statically; [`Width`] and [`Value`] carry
//! it at runtime for callers that only learn the type from input, such as
//! the CLI.

use crate::error::{CodecError, CodecResult};
use std::fmt;
use std::str::FromStr;

mod sealed {
    pub trait Sealed {}
    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
}

/// Fixed-width unsigned integer with a big-endian byte form.
pub trait Unsigned: sealed::Sealed + Copy {
    /// Width in bytes.
    const BYTES: usize;

    /// Runtime tag for this type.
    const WIDTH: Width;

    /// Fixed-size big-endian byte array, `BYTES` long.
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Default;

    /// Big-endian bytes, `BYTES` long.
    fn to_be_vec(self) -> Vec<u8>;

    /// Reads a value from its big-endian byte array.
    fn from_be_array(bytes: Self::Bytes) -> Self;

    /// Wraps the value into its runtime variant.
    fn into_value(self) -> Value;
}

macro_rules! impl_unsigned {
    ($($ty:ty => $width:ident),* $(,)?) => {
        $(
            impl Unsigned for $ty {
                const BYTES: usize = std::mem::size_of::<$ty>();
                const WIDTH: Width = Width::$width;
                type Bytes = [u8; std::mem::size_of::<$ty>()];

                fn to_be_vec(self) -> Vec<u8> {
                    self.to_be_bytes().to_vec()
                }

                fn from_be_array(bytes: Self::Bytes) -> Self {
                    <$ty>::from_be_bytes(bytes)
                }

                fn into_value(self) -> Value {
                    Value::$width(self)
                }
            }
        )*
    };
}

impl_unsigned!(u8 => U8, u16 => U16, u32 => U32, u64 => U64);

/// Runtime tag of a supported unsigned width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Width {
    /// 8-bit
    U8,
    /// 16-bit
    U16,
    /// 32-bit
    U32,
    /// 64-bit
    U64,
}

impl Width {
    /// Width in bytes.
    pub const fn bytes(self) -> usize {
        match self {
            Width::U8 => 1,
            Width::U16 => 2,
            Width::U32 => 4,
            Width::U64 => 8,
        }
    }

    /// Looks up the width for a bit count.
    pub fn from_bits(bits: u32) -> CodecResult<Self> {
        match bits {
            8 => Ok(Width::U8),
            16 => Ok(Width::U16),
            32 => Ok(Width::U32),
            64 => Ok(Width::U64),
            other => Err(CodecError::UnsupportedType(format!("{other}-bit integer"))),
        }
    }

    /// Parses a decimal value of this width.
    pub fn parse(self, s: &str) -> CodecResult<Value> {
        let invalid = |_| CodecError::InvalidValue(format!("{s:?} is not a valid {self}"));
        Ok(match self {
            Width::U8 => Value::U8(s.parse().map_err(invalid)?),
            Width::U16 => Value::U16(s.parse().map_err(invalid)?),
            Width::U32 => Value::U32(s.parse().map_err(invalid)?),
            Width::U64 => Value::U64(s.parse().map_err(invalid)?),
        })
    }
}

impl FromStr for Width {
    type Err = CodecError;

    fn from_str(s: &str) -> CodecResult<Self> {
        match s {
            "u8" => Ok(Width::U8),
            "u16" => Ok(Width::U16),
            "u32" => Ok(Width::U32),
            "u64" => Ok(Width::U64),
            other => Err(CodecError::UnsupportedType(other.to_string())),
        }
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Width::U8 => "u8",
            Width::U16 => "u16",
            Width::U32 => "u32",
            Width::U64 => "u64",
        };
        f.write_str(name)
    }
}

/// A supported unsigned integer tagged with its width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Value {
    /// 8-bit value
    U8(u8),
    /// 16-bit value
    U16(u16),
    /// 32-bit value
    U32(u32),
    /// 64-bit value
    U64(u64),
}

impl Value {
    /// Width tag of the value.
    pub fn width(&self) -> Width {
        match self {
            Value::U8(_) => Width::U8,
            Value::U16(_) => Width::U16,
            Value::U32(_) => Width::U32,
            Value::U64(_) => Width::U64,
        }
    }

    /// Big-endian bytes, as wide as the value's type.
    pub fn to_be_vec(&self) -> Vec<u8> {
        match *self {
            Value::U8(v) => v.to_be_vec(),
            Value::U16(v) => v.to_be_vec(),
            Value::U32(v) => v.to_be_vec(),
            Value::U64(v) => v.to_be_vec(),
        }
    }

    /// The value widened to u64.
    pub fn as_u64(&self) -> u64 {
        match *self {
            Value::U8(v) => u64::from(v),
            Value::U16(v) => u64::from(v),
            Value::U32(v) => u64::from(v),
            Value::U64(v) => v,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u64())
    }
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    v.into_value()
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64);

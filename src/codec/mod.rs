//! Flat codec between unsigned integers, byte strings and field elements.
//!
//! Bytes are grouped into big-endian chunks of four, and each chunk becomes
//! one element whose numeric value equals the chunk. Because every supported
//! modulus exceeds `2^32` the embedding is exact, so `n` bytes always map to
//! `ceil(n / 4)` elements and back without loss.
//!
//! ```
//! use felt_codec::{Decoder, ElementBuffer, Encoder, Goldilocks};
//!
//! let mut buf = ElementBuffer::<Goldilocks>::new();
//! Encoder::new(&mut buf).encode(0x1234u16).unwrap();
//! assert_eq!(buf.unread(), &[Goldilocks::new(0x1234)]);
//!
//! let value: u16 = Decoder::new(&mut buf).decode().unwrap();
//! assert_eq!(value, 0x1234);
//! ```

pub mod chunk;
mod decoder;
mod encoder;
mod value;

pub use chunk::{decode_chunk, encode_chunk, elements_for, BYTES_PER_ELEMENT};
pub use decoder::Decoder;
pub use encoder::Encoder;
pub use value::{Unsigned, Value, Width};

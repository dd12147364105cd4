//! felt-codec - flat encoding of integers and bytes into prime field elements.
//!
//! Field-element oriented execution environments, such as the Miden VM, only
//! understand field elements on their stacks. This crate converts fixed-width
//! unsigned integers and arbitrary byte strings into ordered element
//! sequences and back, exactly and deterministically.
//!
//! # Architecture
//!
//! - [`field`] - the opaque field element boundary and its backends
//! - [`codec`] - chunk packing, [`Encoder`] and [`Decoder`]
//! - [`buffer`] - [`ElementBuffer`], the in-memory element FIFO
//! - [`io`] - read and write capabilities over elements
//! - [`miden`] - Miden VM input/output files and subprocess driver
//! - [`error`] - error types

// Library code must propagate errors instead of panicking.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod buffer;
pub mod codec;
pub mod error;
pub mod field;
pub mod io;
pub mod miden;

// Re-export commonly used types
pub use buffer::ElementBuffer;
pub use codec::{Decoder, Encoder, Unsigned, Value, Width};
pub use error::{CodecError, CodecResult};
pub use field::{FieldElement, Fr, Goldilocks};
pub use io::{ElementRead, ElementWrite, VectorRead, VectorWrite};

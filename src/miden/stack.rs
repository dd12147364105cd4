//! Miden input and output files.
//!
//! Elements are written as decimal strings, e.g.
//! `{"operand_stack": ["1", "2"], "advice_stack": ["3"]}`.

use crate::buffer::ElementBuffer;
use crate::field::Goldilocks;
use serde::{Deserialize, Serialize};

/// Initial stacks handed to a Miden program.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputFile {
    /// Operand stack, top of stack first.
    #[serde(with = "decimal_vec", default)]
    pub operand_stack: Vec<Goldilocks>,
    /// Advice stack; omitted from the file when empty.
    #[serde(
        with = "decimal_vec",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub advice_stack: Vec<Goldilocks>,
}

impl InputFile {
    /// Input with the given operand stack and no advice.
    pub fn new(operand_stack: Vec<Goldilocks>) -> Self {
        Self {
            operand_stack,
            advice_stack: Vec::new(),
        }
    }

    /// Sets the advice stack.
    pub fn with_advice(mut self, advice_stack: Vec<Goldilocks>) -> Self {
        self.advice_stack = advice_stack;
        self
    }

    /// Builds an input from the unread contents of element buffers.
    pub fn from_buffers(
        operand: &mut ElementBuffer<Goldilocks>,
        advice: &mut ElementBuffer<Goldilocks>,
    ) -> Self {
        Self {
            operand_stack: operand.flush(),
            advice_stack: advice.flush(),
        }
    }
}

/// Result of running a Miden program.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
    /// Final operand stack, top of stack first.
    #[serde(with = "decimal_vec", default)]
    pub stack: Vec<Goldilocks>,
    /// Addresses of stack overflow table rows.
    #[serde(default)]
    pub overflow_addrs: Vec<String>,
}

impl Output {
    /// The final stack as a buffer ready for decoding.
    pub fn stack_buffer(&self) -> ElementBuffer<Goldilocks> {
        ElementBuffer::from_vec(self.stack.clone())
    }
}

/// Serde adapter for element vectors written as decimal strings.
mod decimal_vec {
    use crate::field::{FieldElement, Goldilocks};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(v: &[Goldilocks], s: S) -> Result<S::Ok, S::Error> {
        s.collect_seq(v.iter().map(|e| e.to_decimal()))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<Goldilocks>, D::Error> {
        let raw = Option::<Vec<String>>::deserialize(d)?.unwrap_or_default();
        raw.iter()
            .map(|s| Goldilocks::from_decimal(s).map_err(D::Error::custom))
            .collect()
    }
}

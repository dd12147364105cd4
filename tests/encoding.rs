//! Encoding vectors for the flat codec.
//!
//! Expected element sequences are fixed: they are what an external VM sees
//! on its stacks, so any change here is a wire format change.

use felt_codec::codec::decode_chunk;
use felt_codec::{
    CodecError, CodecResult, Decoder, ElementBuffer, Encoder, FieldElement, Fr, Goldilocks,
    Value, VectorRead, VectorWrite, Width,
};

fn e(v: u64) -> Goldilocks {
    Goldilocks::new(v)
}

fn encode_value(value: Value) -> Vec<Goldilocks> {
    let mut buf = ElementBuffer::<Goldilocks>::new();
    Encoder::new(&mut buf).encode_value(value).unwrap();
    buf.flush()
}

// ============================================================================
// Unsigned Integers
// ============================================================================

#[test]
fn encode_unsigned_table() {
    let table: Vec<(Value, Vec<Goldilocks>)> = vec![
        (Value::U64(0x0), vec![e(0), e(0)]),
        (Value::U64(0x1), vec![e(0), e(1)]),
        (Value::U64(0x7), vec![e(0), e(7)]),
        (Value::U64(0x1234), vec![e(0), e(0x1234)]),
        (Value::U64(0x2468), vec![e(0), e(0x2468)]),
        (Value::U64(0x12_3456_789A), vec![e(0x12), e(0x3456_789A)]),
        (Value::U64(u64::MAX), vec![e(0xFFFF_FFFF), e(0xFFFF_FFFF)]),
        (Value::U32(0x0), vec![e(0)]),
        (Value::U32(0x1), vec![e(1)]),
        (Value::U32(0x3), vec![e(3)]),
        (Value::U32(u32::MAX), vec![e(0xFFFF_FFFF)]),
        (Value::U16(0x0), vec![e(0)]),
        (Value::U16(0x2), vec![e(2)]),
        (Value::U16(0x1234), vec![e(0x1234)]),
        (Value::U8(0x0), vec![e(0)]),
        (Value::U8(0x3), vec![e(3)]),
        (Value::U8(0xFF), vec![e(0xFF)]),
    ];

    for (value, want) in table {
        let mut buf = ElementBuffer::<Goldilocks>::new();
        Encoder::new(&mut buf).encode_value(value).unwrap();
        assert_eq!(buf.unread(), want.as_slice(), "encode {:?}", value);

        let got = Decoder::new(&mut buf).decode_value(value.width()).unwrap();
        assert_eq!(got, value);
        assert_eq!(buf.count(), 0);
    }
}

#[test]
fn encode_u16_single_element() {
    let mut buf = ElementBuffer::<Goldilocks>::new();
    Encoder::new(&mut buf).encode(0x1234u16).unwrap();
    assert_eq!(buf.flush(), vec![e(0x1234)]);
}

/// A u64 encodes as its two 32-bit halves, so a 40-bit value matches its
/// high byte and low word encoded separately.
#[test]
fn split_encode_equivalence() {
    let mut a = ElementBuffer::<Goldilocks>::new();
    let mut b = ElementBuffer::<Goldilocks>::new();

    Encoder::new(&mut a).encode(0x12_3456_789Au64).unwrap();
    let mut f = Encoder::new(&mut b);
    f.encode(0x12u8).unwrap();
    f.encode(0x3456_789Au32).unwrap();

    assert_eq!(a.flush(), b.flush());
}

#[test]
fn static_and_tagged_encoding_agree() {
    let mut a = ElementBuffer::<Fr>::new();
    let mut b = ElementBuffer::<Fr>::new();
    Encoder::new(&mut a).encode(0xDEAD_BEEFu32).unwrap();
    Encoder::new(&mut b).encode_value(Value::U32(0xDEAD_BEEF)).unwrap();
    assert_eq!(a.flush(), b.flush());
}

#[test]
fn unsupported_widths_rejected() {
    for name in ["u128", "i32", "usize", "", "U8"] {
        assert!(
            matches!(name.parse::<Width>(), Err(CodecError::UnsupportedType(_))),
            "{name:?} should be unsupported"
        );
    }
    for bits in [0, 1, 7, 24, 128] {
        assert!(matches!(
            Width::from_bits(bits),
            Err(CodecError::UnsupportedType(_))
        ));
    }
}

#[test]
fn out_of_range_value_is_invalid_not_unsupported() {
    let err = Width::U8.parse("256").unwrap_err();
    assert!(matches!(err, CodecError::InvalidValue(_)), "{err}");
    assert_eq!(Width::U8.parse("255").unwrap(), Value::U8(0xFF));
}

// ============================================================================
// Byte Strings
// ============================================================================

#[test]
fn encode_bytes_table() {
    let table: &[(&[u8], &[u64])] = &[
        (&[], &[]),
        (&[0x00], &[0x00]),
        (&[0x01], &[0x01]),
        (&[0x02], &[0x02]),
        (&[0x12, 0x34, 0x56, 0x78], &[0x1234_5678]),
        (&[0x12, 0x34, 0x56, 0x78, 0x9A], &[0x1234_5678, 0x9A]),
        (
            &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10],
            &[0x0102_0304, 0x0506_0708, 0x090A],
        ),
        (&[0, 0, 0, 0, 0], &[0, 0]),
    ];

    for (input, want) in table {
        let mut buf = ElementBuffer::<Goldilocks>::new();
        let n = Encoder::new(&mut buf).encode_bytes(input).unwrap();
        assert_eq!(n, input.len());

        let want: Vec<Goldilocks> = want.iter().map(|v| e(*v)).collect();
        assert_eq!(buf.flush(), want, "encode {:02x?}", input);
    }
}

#[test]
fn decode_bytes_five() {
    let mut buf = ElementBuffer::<Goldilocks>::new();
    Encoder::new(&mut buf)
        .encode_bytes(&[0x12, 0x34, 0x56, 0x78, 0x9A])
        .unwrap();
    assert_eq!(buf.unread(), &[e(0x1234_5678), e(0x9A)]);

    let mut out = [0u8; 5];
    let n = Decoder::new(&mut buf).decode_bytes(&mut out).unwrap();
    assert_eq!(n, 5);
    assert_eq!(out, [0x12, 0x34, 0x56, 0x78, 0x9A]);
}

#[test]
fn chunk_count_law() {
    for n in 0..=33usize {
        let bytes: Vec<u8> = (0..n).map(|i| i as u8).collect();
        let mut enc = Encoder::<Fr, _>::new(Vec::new());
        enc.encode_bytes(&bytes).unwrap();
        assert_eq!(enc.into_inner().len(), n.div_ceil(4), "{n} bytes");
    }
}

#[test]
fn fr_and_goldilocks_agree_numerically() {
    let bytes = [0xFF, 0xEE, 0xDD, 0xCC, 0xBB, 0xAA, 0x99];

    let mut g = Encoder::<Goldilocks, _>::new(Vec::new());
    g.encode_bytes(&bytes).unwrap();
    let mut f = Encoder::<Fr, _>::new(Vec::new());
    f.encode_bytes(&bytes).unwrap();

    let g: Vec<String> = g.into_inner().iter().map(|e| e.to_decimal()).collect();
    let f: Vec<String> = f.into_inner().iter().map(|e| e.to_decimal()).collect();
    assert_eq!(g, f);
    assert_eq!(g, vec!["4293844428", "12298905"]);
}

#[test]
fn decode_chunk_rejects_oversized_output() {
    let e = Goldilocks::new(0x1234);
    let mut out = [0u8; 9];
    assert!(matches!(
        decode_chunk(&e, &mut out),
        Err(CodecError::ChunkTooLong(9))
    ));

    let mut out = [0u8; 2];
    decode_chunk(&e, &mut out).unwrap();
    assert_eq!(out, [0x12, 0x34]);
}

// ============================================================================
// Short Reads
// ============================================================================

#[test]
fn truncated_source_is_insufficient_data() {
    let mut buf = ElementBuffer::from_vec(vec![e(0x12)]);
    let err = Decoder::new(&mut buf).decode::<u64>().unwrap_err();
    assert!(matches!(
        err,
        CodecError::InsufficientData {
            expected: 8,
            actual: 4
        }
    ));
}

#[test]
fn empty_source_is_end_of_sequence() {
    let mut buf = ElementBuffer::<Goldilocks>::new();
    let err = Decoder::new(&mut buf).decode::<u32>().unwrap_err();
    assert!(err.is_end_of_sequence());
}

// ============================================================================
// Custom Backends
// ============================================================================

/// Source that hands out at most one element per read.
struct Trickle(Vec<Goldilocks>);

impl VectorRead<Goldilocks> for Trickle {
    fn read_vector(&mut self, dst: &mut [Goldilocks]) -> CodecResult<usize> {
        if dst.is_empty() {
            return Ok(0);
        }
        if self.0.is_empty() {
            return Err(CodecError::EndOfSequence);
        }
        dst[0] = self.0.remove(0);
        Ok(1)
    }
}

#[test]
fn trickling_source_reports_short_read() {
    let mut dec = Decoder::new(Trickle(vec![e(0), e(7)]));
    let err = dec.decode::<u64>().unwrap_err();
    assert!(matches!(err, CodecError::InsufficientData { .. }));
}

/// Sink that rejects everything.
struct Closed;

impl VectorWrite<Goldilocks> for Closed {
    fn write_vector(&mut self, _: &[Goldilocks]) -> CodecResult<usize> {
        Err(CodecError::Backend("sink closed".into()))
    }
}

#[test]
fn sink_failures_propagate_with_context() {
    let mut enc = Encoder::new(Closed);
    let err = enc.encode_vector(&[e(1)]).unwrap_err();
    assert_eq!(err.to_string(), "encode_vector failed: backend failure: sink closed");

    // Empty byte strings never reach the sink.
    assert_eq!(enc.encode_bytes(&[]).unwrap(), 0);
}

#[test]
fn decoded_value_matches_encode_value() {
    assert_eq!(encode_value(Value::U8(9)), vec![e(9)]);
}

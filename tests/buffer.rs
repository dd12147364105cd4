//! ElementBuffer behaviour through the public read and write capabilities.

use felt_codec::{
    CodecError, ElementBuffer, ElementRead, ElementWrite, Goldilocks, VectorRead, VectorWrite,
};

fn input(count: u64) -> Vec<Goldilocks> {
    (0..count).map(Goldilocks::new).collect()
}

#[test]
fn write_element_then_read_element() {
    let mut buf = ElementBuffer::<Goldilocks>::new();
    for e in input(10) {
        buf.write_element(e).unwrap();
    }
    assert_eq!(buf.count(), 10);

    for want in input(10) {
        assert_eq!(buf.read_element().unwrap(), want);
    }
    assert!(buf.is_empty());
}

#[test]
fn write_vector_then_read_vector() {
    let mut buf = ElementBuffer::<Goldilocks>::new();
    assert_eq!(buf.write_vector(&input(100)).unwrap(), 100);

    let mut out = vec![Goldilocks::ZERO; 100];
    assert_eq!(buf.read_vector(&mut out).unwrap(), 100);
    assert_eq!(out, input(100));
}

#[test]
fn drain_then_reset() {
    let mut buf = ElementBuffer::<Goldilocks>::new();
    buf.write_vector(&input(3)).unwrap();

    let mut out = [Goldilocks::ZERO; 2];
    assert_eq!(buf.read_vector(&mut out).unwrap(), 2);
    assert_eq!(buf.count(), 1);

    // Larger request than available returns only what is left.
    let mut out = [Goldilocks::ZERO; 5];
    assert_eq!(buf.read_vector(&mut out).unwrap(), 1);
    assert_eq!(out[0], Goldilocks::new(2));
    assert_eq!(buf.count(), 0);

    let mut out = [Goldilocks::ZERO; 1];
    assert!(matches!(
        buf.read_vector(&mut out),
        Err(CodecError::EndOfSequence)
    ));

    // After the reset the buffer behaves like a fresh one.
    assert_eq!(buf, ElementBuffer::new());
    buf.write_element(Goldilocks::new(42)).unwrap();
    assert_eq!(buf.unread(), &[Goldilocks::new(42)]);
    assert_eq!(buf.read_element().unwrap(), Goldilocks::new(42));
}

#[test]
fn read_element_on_empty_buffer() {
    let mut buf = ElementBuffer::<Goldilocks>::new();
    assert!(buf.read_element().unwrap_err().is_end_of_sequence());
    // Repeated reads keep failing the same way.
    assert!(buf.read_element().unwrap_err().is_end_of_sequence());
}

#[test]
fn empty_request_on_empty_buffer() {
    let mut buf = ElementBuffer::<Goldilocks>::new();
    assert_eq!(buf.read_vector(&mut [Goldilocks::ZERO; 0]).unwrap(), 0);
}

#[test]
fn empty_request_on_filled_buffer() {
    let mut buf = ElementBuffer::from_vec(input(2));
    assert_eq!(buf.read_vector(&mut [Goldilocks::ZERO; 0]).unwrap(), 0);
    assert_eq!(buf.count(), 2);
}

#[test]
fn flush_returns_only_unread() {
    let mut buf = ElementBuffer::from_vec(input(4));
    buf.read_element().unwrap();

    assert_eq!(buf.flush(), input(4)[1..].to_vec());
    assert_eq!(buf.count(), 0);
    assert!(buf.flush().is_empty());
}

#[test]
fn interleaved_reads_and_writes() {
    let mut buf = ElementBuffer::<Goldilocks>::new();
    buf.write_element(Goldilocks::new(1)).unwrap();
    buf.write_element(Goldilocks::new(2)).unwrap();
    assert_eq!(buf.read_element().unwrap(), Goldilocks::new(1));

    buf.write_vector(&[Goldilocks::new(3), Goldilocks::new(4)]).unwrap();
    assert_eq!(
        buf.unread(),
        &[Goldilocks::new(2), Goldilocks::new(3), Goldilocks::new(4)]
    );
}

#[test]
fn usable_through_mutable_reference() {
    fn fill<W: VectorWrite<Goldilocks>>(mut w: W) {
        w.write_vector(&input(3)).unwrap();
    }
    fn drain<R: VectorRead<Goldilocks>>(mut r: R) -> usize {
        let mut out = [Goldilocks::ZERO; 8];
        r.read_vector(&mut out).unwrap()
    }

    let mut buf = ElementBuffer::<Goldilocks>::new();
    fill(&mut buf);
    assert_eq!(drain(&mut buf), 3);
}

extern crate max72xx_chain;

use max72xx_chain::{ChainBuffer, ChainError, Frame, Register};

#[test]
fn new_buffer_test() {
    assert_eq!(ChainBuffer::new(0), Err(ChainError::EmptyChain));

    let buffer = ChainBuffer::new(3).unwrap();
    assert_eq!(buffer.len(), 3);
    assert_eq!(buffer.bit_len(), 48);
    assert_eq!(buffer.devices().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert!(buffer.frames().iter().all(|f| *f == Frame::NO_OP));
    assert!(buffer.bits().all(|bit| !bit));
}

#[test]
fn large_chain_test() {
    // no fixed device ceiling
    let mut buffer = ChainBuffer::new(250).unwrap();
    assert!(buffer.write(250, Frame::new(Register::Intensity, 3)).is_ok());
    assert_eq!(buffer.frame(250), Some(Frame::new(Register::Intensity, 3)));
}

#[test]
fn write_only_touches_addressed_slot_test() {
    let mut buffer = ChainBuffer::new(4).unwrap();
    let first = Frame::new(Register::Digit3, 0xA5);
    let last = Frame::new(Register::ScanLimit, 0x07);

    buffer.write(1, first).unwrap();
    assert_eq!(buffer.frames(), &[first, Frame::NO_OP, Frame::NO_OP, Frame::NO_OP]);

    buffer.write(4, last).unwrap();
    assert_eq!(buffer.frames(), &[first, Frame::NO_OP, Frame::NO_OP, last]);

    let middle = Frame::new(Register::Digit0, 0x01);
    buffer.write(2, middle).unwrap();
    buffer.write(2, Frame::new(Register::Digit0, 0x02)).unwrap();
    assert_eq!(buffer.frame(1), Some(first));
    assert_eq!(buffer.frame(2), Some(Frame::new(Register::Digit0, 0x02)));
    assert_eq!(buffer.frame(3), Some(Frame::NO_OP));
    assert_eq!(buffer.frame(4), Some(last));
}

#[test]
fn invalid_device_test() {
    let mut buffer = ChainBuffer::new(2).unwrap();
    buffer.write(2, Frame::new(Register::Digit1, 0x11)).unwrap();
    let before = buffer.clone();

    let frame = Frame::new(Register::Intensity, 0x0F);
    assert_eq!(buffer.write(0, frame), Err(ChainError::InvalidDevice(0)));
    assert_eq!(buffer.write(3, frame), Err(ChainError::InvalidDevice(3)));
    assert_eq!(buffer, before);
    assert_eq!(buffer.frame(0), None);
    assert_eq!(buffer.frame(3), None);
}

#[test]
fn bits_in_chain_order_test() {
    let mut buffer = ChainBuffer::new(2).unwrap();
    buffer.write(1, Frame::from_bits(0x8000)).unwrap();
    buffer.write(2, Frame::from_bits(0x0001)).unwrap();

    let bits: Vec<bool> = buffer.bits().collect();
    assert_eq!(bits.len(), 32);
    let set: Vec<usize> = bits
        .iter()
        .enumerate()
        .filter(|(_, bit)| **bit)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(set, vec![0, 31]);
}

#[test]
fn fill_and_clear_test() {
    let mut buffer = ChainBuffer::new(3).unwrap();
    let frame = Frame::new(Register::Shutdown, 0x01);
    buffer.fill(frame);
    assert_eq!(buffer.frames(), &[frame; 3]);

    buffer.clear();
    assert_eq!(buffer.frames(), &[Frame::NO_OP; 3]);
}

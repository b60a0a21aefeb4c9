extern crate max72xx_chain;

use max72xx_chain::{register, Frame, Register};

// reads a frame back out in shift order
fn decode(frame: Frame) -> (u8, u8, u8) {
    let mut reserved = 0u8;
    let mut register = 0u8;
    let mut data = 0u8;
    for i in 0..16 {
        let bit = frame.bit(i) as u8;
        match i {
            0..=3 => reserved = (reserved << 1) | bit,
            4..=7 => register = (register << 1) | bit,
            _ => data = (data << 1) | bit,
        }
    }
    (reserved, register, data)
}

#[test]
fn frame_layout_test() {
    for register in 0x0..=0xFu8 {
        for data in 0x00..=0xFFu8 {
            let frame = Frame::encode(register, data);
            assert_eq!(decode(frame), (0, register, data));
            assert_eq!(frame.register(), register);
            assert_eq!(frame.data(), data);
        }
    }
}

#[test]
fn known_frames_test() {
    assert_eq!(Frame::encode(register::DIGIT_OFFSET, 0xFF).bits(), 0b0000_0001_1111_1111);
    assert_eq!(Frame::encode(register::INTENSITY, 0x0F).bits(), 0x0A0F);
    assert_eq!(Frame::new(Register::Shutdown, 0x01).bits(), 0x0C01);
    assert_eq!(Frame::new(Register::DisplayTest, 0x01).bits(), 0x0F01);
    assert_eq!(Frame::NO_OP.bits(), 0);
}

#[test]
fn register_upper_nibble_dropped_test() {
    assert_eq!(Frame::encode(0xFA, 0x12).bits(), 0x0A12);
    assert_eq!(Frame::encode(0x10, 0x00), Frame::NO_OP);
}

#[test]
fn bit_order_test() {
    let frame = Frame::from_bits(0x8001);
    assert!(frame.bit(0));
    assert!(!frame.bit(1));
    assert!(frame.bit(15));
    assert!(!frame.bit(16));
}

#[test]
fn register_map_test() {
    assert_eq!(Register::NoOp.addr(), register::SEGMENT_PINS);
    assert_eq!(Register::Digit0.addr(), 0x01);
    assert_eq!(Register::Digit7.addr(), 0x08);
    assert_eq!(Register::DecodeMode.addr(), 0x09);
    assert_eq!(Register::Intensity.addr(), 0x0A);
    assert_eq!(Register::ScanLimit.addr(), 0x0B);
    assert_eq!(Register::Shutdown.addr(), 0x0C);
    assert_eq!(Register::DisplayTest.addr(), 0x0F);

    assert_eq!(Register::digit(0), Some(Register::Digit0));
    assert_eq!(Register::digit(5), Some(Register::Digit5));
    assert_eq!(Register::digit(8), None);

    assert_eq!(Register::try_from(0x0C), Ok(Register::Shutdown));
    assert_eq!(Register::try_from(0x0D), Err(0x0D));
    assert_eq!(Register::try_from(0x10), Err(0x10));
}

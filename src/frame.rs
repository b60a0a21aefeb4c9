use crate::constants::{register, DATA_BITS, FRAME_BITS, NUM_DIGITS, REGISTER_BITS};

/// Registers addressable through the 4-bit address nibble of a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    NoOp,
    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    DecodeMode,
    Intensity,
    ScanLimit,
    Shutdown,
    DisplayTest,
}

impl Register {
    pub const fn addr(self) -> u8 {
        match self {
            Register::NoOp => register::NO_OP,
            Register::Digit0 => register::DIGIT_OFFSET,
            Register::Digit1 => register::DIGIT_OFFSET + 1,
            Register::Digit2 => register::DIGIT_OFFSET + 2,
            Register::Digit3 => register::DIGIT_OFFSET + 3,
            Register::Digit4 => register::DIGIT_OFFSET + 4,
            Register::Digit5 => register::DIGIT_OFFSET + 5,
            Register::Digit6 => register::DIGIT_OFFSET + 6,
            Register::Digit7 => register::DIGIT_OFFSET + 7,
            Register::DecodeMode => register::DECODE_MODE,
            Register::Intensity => register::INTENSITY,
            Register::ScanLimit => register::SCAN_LIMIT,
            Register::Shutdown => register::SHUTDOWN,
            Register::DisplayTest => register::DISPLAY_TEST,
        }
    }

    /// Digit register for `digit` in `0..8`.
    pub fn digit(digit: u8) -> Option<Register> {
        if digit >= NUM_DIGITS {
            return None;
        }
        Register::try_from(register::DIGIT_OFFSET + digit).ok()
    }
}

impl TryFrom<u8> for Register {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        let register = match value {
            0x00 => Register::NoOp,
            0x01 => Register::Digit0,
            0x02 => Register::Digit1,
            0x03 => Register::Digit2,
            0x04 => Register::Digit3,
            0x05 => Register::Digit4,
            0x06 => Register::Digit5,
            0x07 => Register::Digit6,
            0x08 => Register::Digit7,
            0x09 => Register::DecodeMode,
            0x0A => Register::Intensity,
            0x0B => Register::ScanLimit,
            0x0C => Register::Shutdown,
            0x0F => Register::DisplayTest,
            _ => return Err(value),
        };
        Ok(register)
    }
}

/// One device's 16-bit word: `0000 rrrr dddd dddd`, shifted out MSB first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame(u16);

impl Frame {
    pub const NO_OP: Frame = Frame(0);

    /// Builds a frame from a raw register address and a data byte.
    ///
    /// Only the low nibble of `register` fits in the frame; the upper nibble
    /// is dropped rather than validated, and undefined addresses are left
    /// for the chip to ignore.
    pub fn encode(register: u8, data: u8) -> Frame {
        let mut bits: u16 = 0;
        for i in 0..REGISTER_BITS {
            let bit = (register >> (REGISTER_BITS - 1 - i)) & 1;
            bits |= (bit as u16) << (DATA_BITS + REGISTER_BITS - 1 - i);
        }
        for i in 0..DATA_BITS {
            let bit = (data >> (DATA_BITS - 1 - i)) & 1;
            bits |= (bit as u16) << (DATA_BITS - 1 - i);
        }
        Frame(bits)
    }

    pub fn new(register: Register, data: u8) -> Frame {
        Frame::encode(register.addr(), data)
    }

    pub const fn from_bits(bits: u16) -> Frame {
        Frame(bits)
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    pub const fn register(self) -> u8 {
        ((self.0 >> DATA_BITS) & 0x0F) as u8
    }

    pub const fn data(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// Bit `index` in shift order, 0 being the MSB.
    pub const fn bit(self, index: usize) -> bool {
        if index >= FRAME_BITS {
            return false;
        }
        (self.0 >> (FRAME_BITS - 1 - index)) & 1 != 0
    }
}

impl From<Frame> for u16 {
    fn from(frame: Frame) -> u16 {
        frame.0
    }
}

pub const NUM_DIGITS: u8 = 8;
pub const MAX_INTENSITY: u8 = 0x0F; // 4 bits
pub const MAX_SCAN_LIMIT: u8 = 0x07;

pub const FRAME_BITS: usize = 16;
pub const REGISTER_BITS: usize = 4;
pub const DATA_BITS: usize = 8;

/// Time the clock line is held high for each shifted bit.
pub const CLOCK_PULSE_US: u32 = 1;

#[allow(dead_code)]
pub mod register {
    pub const NO_OP: u8 = 0x00;
    pub const SEGMENT_PINS: u8 = 0x00; // bypasses to the segment pins, or through code-B decode
    pub const DIGIT_OFFSET: u8 = 0x01; // Digit0 - Digit7
    pub const DECODE_MODE: u8 = 0x09;
    pub const INTENSITY: u8 = 0x0A;
    pub const SCAN_LIMIT: u8 = 0x0B;
    pub const SHUTDOWN: u8 = 0x0C;
    pub const DISPLAY_TEST: u8 = 0x0F;

    pub mod decode_mode {
        pub const NO_DECODE: u8 = 0x00; // no decode for digits 7:0
        pub const DECODE_DIGIT_0: u8 = 0x01; // code B decode for digit 0
        pub const DECODE_DIGITS_0_3: u8 = 0x0F; // code B decode for digits 3:0
        pub const DECODE_ALL: u8 = 0xFF; // code B decode for digits 7:0
    }

    pub mod shutdown {
        pub const SHUTDOWN_MODE: u8 = 0x00;
        pub const NORMAL_OPERATION: u8 = 0x01;
    }

    pub mod display_test {
        pub const NORMAL_OPERATION: u8 = 0x00;
        pub const TEST_MODE: u8 = 0x01;
    }
}

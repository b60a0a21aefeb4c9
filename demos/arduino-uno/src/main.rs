#![no_std]
#![no_main]

extern crate alloc;

use arduino_hal::prelude::*;
use embedded_alloc::LlffHeap as Heap;
use max72xx_chain::{register, Max72xx, Register, NUM_DIGITS};
use panic_halt as _;

#[global_allocator]
static HEAP: Heap = Heap::empty();

const CHAIN_LEN: usize = 4; // four 8x8 matrix modules
const DEFAULT_INTENSITY: u8 = 3;

#[arduino_hal::entry]
fn main() -> ! {
    {
        use core::mem::MaybeUninit;
        const HEAP_SIZE: usize = 128;
        static mut HEAP_MEM: [MaybeUninit<u8>; HEAP_SIZE] = [MaybeUninit::uninit(); HEAP_SIZE];
        unsafe { HEAP.init(core::ptr::addr_of_mut!(HEAP_MEM) as usize, HEAP_SIZE) }
    }

    let dp = arduino_hal::Peripherals::take().unwrap();
    let pins = arduino_hal::pins!(dp);
    let mut serial = arduino_hal::default_serial!(dp, pins, 57600);

    let clk = pins.d13.into_output();
    let din = pins.d11.into_output();
    let cs = pins.d10.into_output();

    let mut chain = Max72xx::new(clk, din, cs, arduino_hal::Delay::new(), CHAIN_LEN).unwrap();
    chain.init().unwrap();

    ufmt::uwriteln!(&mut serial, "Configuring chain...").unwrap_infallible();
    chain
        .write_register_all(Register::DisplayTest, register::display_test::NORMAL_OPERATION)
        .unwrap();
    chain
        .write_register_all(Register::DecodeMode, register::decode_mode::NO_DECODE)
        .unwrap();
    chain
        .write_register_all(Register::ScanLimit, NUM_DIGITS - 1)
        .unwrap();
    chain
        .write_register_all(Register::Intensity, DEFAULT_INTENSITY)
        .unwrap();
    chain
        .write_register_all(Register::Shutdown, register::shutdown::NORMAL_OPERATION)
        .unwrap();
    for digit in 0..NUM_DIGITS {
        chain.write_register_all(Register::digit(digit).unwrap(), 0).unwrap();
    }

    ufmt::uwriteln!(&mut serial, "Walking a column across devices...").unwrap_infallible();
    loop {
        for device in 1..=CHAIN_LEN {
            for digit in 0..NUM_DIGITS {
                chain.write_digit(device, digit, 0xFF).unwrap();
                arduino_hal::delay_ms(50);
                chain.write_digit(device, digit, 0x00).unwrap();
            }
        }
    }
}

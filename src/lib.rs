//! Bit-banged driver for daisy-chained MAX7219/MAX7221 LED drivers.
//!
//! Every device in the chain shifts every bit, so each write updates one
//! device's slot in a [`ChainBuffer`] and then clocks the whole chain out
//! again before latching it with chip-select.
//!
//! Device addresses are assigned 1 to N, device 1 being the one farthest
//! from the controller.
#![no_std]

extern crate alloc;

mod chain;
mod constants;
mod frame;
mod transmit;

pub use chain::{ChainBuffer, ChainError};
pub use constants::*;
pub use frame::{Frame, Register};
pub use transmit::ChainTransmitter;

use core::ops::RangeInclusive;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use log::{debug, trace};

pub struct Max72xx<CLK, DIN, CS, DELAY> {
    buffer: ChainBuffer,
    transmitter: ChainTransmitter<CLK, DIN, CS, DELAY>,
}

impl<CLK, DIN, CS, DELAY, E> Max72xx<CLK, DIN, CS, DELAY>
where
    CLK: OutputPin<Error = E>,
    DIN: OutputPin<Error = E>,
    CS: OutputPin<Error = E>,
    DELAY: DelayNs,
{
    /// Creates a driver for `chain_len` devices. Pins must already be outputs.
    pub fn new(
        clk: CLK,
        din: DIN,
        cs: CS,
        delay: DELAY,
        chain_len: usize,
    ) -> Result<Self, Max72xxError<E>> {
        debug!("creating max72xx chain of {} devices", chain_len);
        Ok(Self {
            buffer: ChainBuffer::new(chain_len)?,
            transmitter: ChainTransmitter::new(clk, din, cs, delay),
        })
    }

    pub fn destroy(self) -> (CLK, DIN, CS, DELAY) {
        self.transmitter.release()
    }

    /// Drives the lines to their idle levels. Must be called before any write.
    pub fn init(&mut self) -> Result<(), Max72xxError<E>> {
        debug!("initializing max72xx chain pins");
        self.transmitter.init()
    }

    pub fn chain_len(&self) -> usize {
        self.buffer.len()
    }

    pub fn devices(&self) -> RangeInclusive<usize> {
        self.buffer.devices()
    }

    pub fn buffer(&self) -> &ChainBuffer {
        &self.buffer
    }

    pub fn write_register(
        &mut self,
        device: usize,
        register: Register,
        data: u8,
    ) -> Result<(), Max72xxError<E>> {
        self.write_raw(device, register.addr(), data)
    }

    /// Writes an arbitrary register address; only its low nibble is sent.
    pub fn write_raw(&mut self, device: usize, register: u8, data: u8) -> Result<(), Max72xxError<E>> {
        if !self.transmitter.is_configured() {
            return Err(Max72xxError::NotConfigured);
        }
        trace!("device {}: register {:#04x} = {:#04x}", device, register, data);
        self.buffer.write(device, Frame::encode(register, data))?;
        self.transmitter.transmit(&self.buffer)
    }

    /// Writes the same register on every device with a single transmit.
    pub fn write_register_all(&mut self, register: Register, data: u8) -> Result<(), Max72xxError<E>> {
        if !self.transmitter.is_configured() {
            return Err(Max72xxError::NotConfigured);
        }
        trace!("all devices: register {:#04x} = {:#04x}", register.addr(), data);
        self.buffer.fill(Frame::new(register, data));
        self.transmitter.transmit(&self.buffer)
    }

    /// Shifts the current chain image out again.
    pub fn refresh(&mut self) -> Result<(), Max72xxError<E>> {
        self.transmitter.transmit(&self.buffer)
    }

    /// Resets every slot to a no-op frame. Nothing is sent until the next write.
    pub fn clear_buffer(&mut self) {
        self.buffer.clear();
    }

    pub fn write_segment_pins(&mut self, device: usize, data: u8) -> Result<(), Max72xxError<E>> {
        self.write_register(device, Register::NoOp, data)
    }

    pub fn write_digit(&mut self, device: usize, digit: u8, data: u8) -> Result<(), Max72xxError<E>> {
        let register = Register::digit(digit).ok_or(Max72xxError::InvalidDigit(digit))?;
        self.write_register(device, register, data)
    }

    pub fn write_decode_mode(&mut self, device: usize, data: u8) -> Result<(), Max72xxError<E>> {
        self.write_register(device, Register::DecodeMode, data)
    }

    pub fn write_intensity(&mut self, device: usize, data: u8) -> Result<(), Max72xxError<E>> {
        self.write_register(device, Register::Intensity, data)
    }

    pub fn write_scan_limit(&mut self, device: usize, data: u8) -> Result<(), Max72xxError<E>> {
        self.write_register(device, Register::ScanLimit, data)
    }

    pub fn write_shutdown(&mut self, device: usize, data: u8) -> Result<(), Max72xxError<E>> {
        self.write_register(device, Register::Shutdown, data)
    }

    pub fn write_display_test(&mut self, device: usize, data: u8) -> Result<(), Max72xxError<E>> {
        self.write_register(device, Register::DisplayTest, data)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Max72xxError<E> {
    PinError(E),
    InvalidDevice(usize),
    InvalidDigit(u8),
    EmptyChain,
    NotConfigured,
}

impl<E> From<ChainError> for Max72xxError<E> {
    fn from(error: ChainError) -> Self {
        match error {
            ChainError::InvalidDevice(device) => Max72xxError::InvalidDevice(device),
            ChainError::EmptyChain => Max72xxError::EmptyChain,
        }
    }
}

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use log::trace;

use crate::chain::ChainBuffer;
use crate::constants::CLOCK_PULSE_US;
use crate::Max72xxError;

/// Bit-bangs a [`ChainBuffer`] over the clock, data and chip-select lines.
///
/// Each transmit pulls chip-select low, shifts every bit of the chain
/// MSB first with one clock pulse per bit, then raises chip-select so all
/// devices latch their 16 bits at once.
pub struct ChainTransmitter<CLK, DIN, CS, DELAY> {
    clk: CLK,
    din: DIN,
    cs: CS,
    delay: DELAY,
    configured: bool,
}

impl<CLK, DIN, CS, DELAY, E> ChainTransmitter<CLK, DIN, CS, DELAY>
where
    CLK: OutputPin<Error = E>,
    DIN: OutputPin<Error = E>,
    CS: OutputPin<Error = E>,
    DELAY: DelayNs,
{
    pub fn new(clk: CLK, din: DIN, cs: CS, delay: DELAY) -> Self {
        Self {
            clk,
            din,
            cs,
            delay,
            configured: false,
        }
    }

    pub fn release(self) -> (CLK, DIN, CS, DELAY) {
        (self.clk, self.din, self.cs, self.delay)
    }

    pub fn is_configured(&self) -> bool {
        self.configured
    }

    /// Puts the lines in their idle state: clock low, chip-select high.
    pub fn init(&mut self) -> Result<(), Max72xxError<E>> {
        self.clk.set_low().map_err(Max72xxError::PinError)?;
        self.cs.set_high().map_err(Max72xxError::PinError)?;
        self.configured = true;
        Ok(())
    }

    pub fn transmit(&mut self, buffer: &ChainBuffer) -> Result<(), Max72xxError<E>> {
        if !self.configured {
            return Err(Max72xxError::NotConfigured);
        }
        trace!("shifting {} bits to {} devices", buffer.bit_len(), buffer.len());

        self.clk.set_low().map_err(Max72xxError::PinError)?;
        self.cs.set_low().map_err(Max72xxError::PinError)?;

        for bit in buffer.bits() {
            self.shift_bit(bit)?;
        }

        // rising edge latches every device's shift register
        self.cs.set_high().map_err(Max72xxError::PinError)?;
        Ok(())
    }

    fn shift_bit(&mut self, bit: bool) -> Result<(), Max72xxError<E>> {
        if bit {
            self.din.set_high().map_err(Max72xxError::PinError)?;
        } else {
            self.din.set_low().map_err(Max72xxError::PinError)?;
        }
        self.clk.set_high().map_err(Max72xxError::PinError)?;
        self.delay.delay_us(CLOCK_PULSE_US);
        self.clk.set_low().map_err(Max72xxError::PinError)?;
        Ok(())
    }
}

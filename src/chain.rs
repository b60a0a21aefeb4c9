use alloc::vec;
use alloc::vec::Vec;
use core::ops::RangeInclusive;

use crate::constants::FRAME_BITS;
use crate::frame::Frame;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChainError {
    InvalidDevice(usize),
    EmptyChain,
}

/// Image of the whole daisy chain, one frame per device.
///
/// Device addresses run from 1 to `len()`. Device 1 sits at the far end of
/// the chain, so its frame is the first one shifted out; the device wired
/// to the controller is shifted last. A device's frame starts at bit
/// `16 * (address - 1)` of the shifted stream.
///
/// Slots are never cleared between writes, so every transmit carries the
/// last frame written to each device.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainBuffer {
    frames: Vec<Frame>,
}

impl ChainBuffer {
    pub fn new(len: usize) -> Result<Self, ChainError> {
        if len == 0 {
            return Err(ChainError::EmptyChain);
        }
        Ok(Self {
            frames: vec![Frame::NO_OP; len],
        })
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Addresses of every device on the chain, farthest first.
    pub fn devices(&self) -> RangeInclusive<usize> {
        1..=self.frames.len()
    }

    /// Replaces the frame held for `device`, leaving every other slot untouched.
    pub fn write(&mut self, device: usize, frame: Frame) -> Result<(), ChainError> {
        let slot = self.slot(device)?;
        self.frames[slot] = frame;
        Ok(())
    }

    /// Installs `frame` in every slot.
    pub fn fill(&mut self, frame: Frame) {
        self.frames.fill(frame);
    }

    pub fn clear(&mut self) {
        self.fill(Frame::NO_OP);
    }

    pub fn frame(&self, device: usize) -> Option<Frame> {
        self.slot(device).ok().map(|slot| self.frames[slot])
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn bit_len(&self) -> usize {
        self.frames.len() * FRAME_BITS
    }

    /// Every bit of the chain in the order it is shifted onto the data line.
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        self.frames
            .iter()
            .flat_map(|frame| (0..FRAME_BITS).map(move |i| frame.bit(i)))
    }

    fn slot(&self, device: usize) -> Result<usize, ChainError> {
        if device == 0 || device > self.frames.len() {
            return Err(ChainError::InvalidDevice(device));
        }
        Ok(device - 1)
    }
}

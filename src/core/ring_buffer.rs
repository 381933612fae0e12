//! Fixed-capacity multi-channel ring buffer for real-time audio paths.

use crate::core::types::Sample;
use crate::error::EngineError;

/// Multi-channel circular sample store with mask-based wrap-around.
///
/// Capacity must be a power of two so that `position & (capacity - 1)`
/// implements wrap-around without branching or division. The buffer holds
/// one row per channel and never allocates after construction.
///
/// The buffer does not own a write cursor: callers supply monotonic
/// positions to `write` and `read`, and the mask makes every position
/// valid. Channels stay frame-aligned because the scheduler advances one
/// shared cursor for all of them.
#[derive(Debug, Clone)]
pub struct RingBuffer {
    channels: Vec<Vec<Sample>>,
    mask: usize,
}

impl RingBuffer {
    /// Creates a ring buffer with `num_channels` rows of `capacity` samples,
    /// all zero-initialized.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CapacityNotPowerOfTwo`] unless `capacity` is a
    /// power of two.
    pub fn new(num_channels: usize, capacity: usize) -> Result<Self, EngineError> {
        if capacity == 0 || !capacity.is_power_of_two() {
            return Err(EngineError::CapacityNotPowerOfTwo(capacity));
        }
        Ok(Self {
            channels: vec![vec![0.0; capacity]; num_channels],
            mask: capacity - 1,
        })
    }

    /// Returns the fixed capacity of each channel row.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.mask + 1
    }

    /// Returns the number of channel rows.
    #[inline]
    pub fn num_channels(&self) -> usize {
        self.channels.len()
    }

    /// Stores `sample` in `channel` at `position`, wrapped into the buffer.
    #[inline]
    pub fn write(&mut self, channel: usize, position: usize, sample: Sample) {
        self.channels[channel][position & self.mask] = sample;
    }

    /// Returns the sample stored in `channel` at `position`, wrapped.
    #[inline]
    pub fn read(&self, channel: usize, position: usize) -> Sample {
        self.channels[channel][position & self.mask]
    }

    /// Zeroes all channel rows. Positions are owned by the caller and are
    /// unaffected.
    pub fn clear(&mut self) {
        for row in &mut self.channels {
            row.fill(0.0);
        }
    }
}

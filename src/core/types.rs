//! Engine configuration parameters.

use serde::{Deserialize, Serialize};

use crate::core::fft::{DEFAULT_FFT_SIZE, DEFAULT_HOP_SIZE};
use crate::error::EngineError;

/// A single audio sample (32-bit float, range -1.0 to 1.0).
pub type Sample = f32;

/// Parameters controlling the block-processing engine.
///
/// The FFT size doubles as the ring-buffer capacity, so it must be a power
/// of two: wrap-around indexing masks positions with `fft_size - 1`.
/// Serializable so a host or control thread can snapshot and restore the
/// configuration; the engine itself never mutates params mid-stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineParams {
    /// Transform size and ring-buffer capacity (default: 512).
    pub fft_size: usize,
    /// Samples ingested between successive frame analyses (default: 64).
    pub hop_size: usize,
    /// Number of audio channels (1 = mono, 2 = stereo; default: 2).
    pub channels: u16,
    /// Sample rate in Hz (default: 44100).
    pub sample_rate: u32,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            fft_size: DEFAULT_FFT_SIZE,
            hop_size: DEFAULT_HOP_SIZE,
            channels: 2,
            sample_rate: 44100,
        }
    }
}

impl EngineParams {
    /// Creates parameters with the default 512/64 frame/hop sizes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the FFT size (and ring capacity). Must be a power of two.
    pub fn with_fft_size(mut self, fft_size: usize) -> Self {
        self.fft_size = fft_size;
        self
    }

    /// Sets the hop size.
    pub fn with_hop_size(mut self, hop_size: usize) -> Self {
        self.hop_size = hop_size;
        self
    }

    /// Sets the number of channels.
    pub fn with_channels(mut self, channels: u16) -> Self {
        self.channels = channels;
        self
    }

    /// Sets the sample rate.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Validates all parameters.
    ///
    /// Called once at engine construction; violations here are fatal to
    /// initialization and are never reported mid-stream.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.fft_size == 0 || !self.fft_size.is_power_of_two() {
            return Err(EngineError::CapacityNotPowerOfTwo(self.fft_size));
        }
        if self.hop_size == 0 || self.hop_size > self.fft_size {
            return Err(EngineError::InvalidHopSize {
                hop: self.hop_size,
                fft: self.fft_size,
            });
        }
        if self.channels == 0 || self.channels > 2 {
            return Err(EngineError::InvalidChannels(self.channels));
        }
        if self.sample_rate == 0 {
            return Err(EngineError::InvalidSampleRate(self.sample_rate));
        }
        Ok(())
    }
}

//! Error types for the blockfft crate.
//!
//! All variants are configuration errors surfaced at setup time. The
//! per-block processing path is infallible by design: once an engine has
//! been constructed, no operation on the hot path returns an error.

use std::fmt;

/// Errors that can occur while configuring the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Ring-buffer/FFT capacity is not a power of two. Wrap-around indexing
    /// relies on `position & (capacity - 1)`, which only works for powers
    /// of two.
    CapacityNotPowerOfTwo(usize),
    /// Hop size is zero or larger than the FFT size.
    InvalidHopSize { hop: usize, fft: usize },
    /// Channel count is zero or greater than two.
    InvalidChannels(u16),
    /// Sample rate is zero.
    InvalidSampleRate(u32),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::CapacityNotPowerOfTwo(cap) => {
                write!(f, "capacity must be a power of two, got {}", cap)
            }
            EngineError::InvalidHopSize { hop, fft } => {
                write!(
                    f,
                    "hop size must be in 1..={} (the FFT size), got {}",
                    fft, hop
                )
            }
            EngineError::InvalidChannels(channels) => {
                write!(f, "channel count must be 1 or 2, got {}", channels)
            }
            EngineError::InvalidSampleRate(rate) => {
                write!(f, "sample rate must be positive, got {}", rate)
            }
        }
    }
}

impl std::error::Error for EngineError {}

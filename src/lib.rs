#![forbid(unsafe_code)]
//! Real-time audio block-processing engine.
//!
//! `blockfft` accumulates streaming audio into a fixed-size circular
//! history buffer and, every hop's worth of samples, extracts a linear
//! analysis frame and runs it through a forward/inverse FFT round trip.
//! A pluggable [`SpectralEdit`] hook sits between the two transforms; the
//! default is an identity pass-through.
//!
//! The per-block path is real-time safe: no allocation, no blocking, no
//! error returns, bounded work per call. All sizing happens once at
//! construction.
//!
//! # Quick Start
//!
//! ```
//! use blockfft::{BlockProcessor, EngineParams};
//!
//! let params = EngineParams::new()
//!     .with_channels(1)
//!     .with_sample_rate(44100);
//! let mut engine = BlockProcessor::new(params).unwrap();
//! engine.prepare(44100, 64);
//!
//! // Host delivers 64-sample blocks; one frame fires per hop once more
//! // than a full frame of history has accumulated.
//! for _ in 0..10 {
//!     let mut block = [0.0f32; 64];
//!     let mut channels: Vec<&mut [f32]> = vec![&mut block];
//!     engine.process(&mut channels);
//! }
//! assert_eq!(engine.frames_processed(), 2);
//! ```
//!
//! # Spectral edits
//!
//! ```
//! use blockfft::{BlockProcessor, EngineParams, SpectralEdit};
//! use rustfft::num_complex::Complex;
//!
//! struct HalfGain;
//! impl SpectralEdit for HalfGain {
//!     fn edit(&mut self, spectrum: &mut [Complex<f32>], _channel: usize) {
//!         for bin in spectrum.iter_mut() {
//!             *bin *= 0.5;
//!         }
//!     }
//! }
//!
//! let mut engine = BlockProcessor::new(EngineParams::new().with_channels(1)).unwrap();
//! engine.set_edit(Box::new(HalfGain));
//! ```

pub mod core;
pub mod error;
pub mod spectral;
pub mod stream;

pub use crate::core::fft::{DEFAULT_FFT_SIZE, DEFAULT_HOP_SIZE, ROUND_TRIP_TOLERANCE};
pub use crate::core::frame::FrameAssembler;
pub use crate::core::ring_buffer::RingBuffer;
pub use crate::core::types::{EngineParams, Sample};
pub use error::EngineError;
pub use spectral::transform::{Passthrough, SpectralEdit, SpectralStage};
pub use stream::processor::BlockProcessor;

//! Core types: ring buffer, frame assembly, FFT constants, and parameters.

pub mod fft;
pub mod frame;
pub mod ring_buffer;
pub mod types;

pub use frame::FrameAssembler;
pub use ring_buffer::RingBuffer;
pub use types::{EngineParams, Sample};

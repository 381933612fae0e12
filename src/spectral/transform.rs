//! Forward/inverse FFT pair with an edit hook between the two passes.

use std::sync::Arc;

use rustfft::{num_complex::Complex, Fft, FftPlanner};

/// Hook invoked on the spectrum between the forward and inverse transforms.
///
/// Implementations may scale bins, apply a gain curve, or rewrite the
/// spectrum entirely; the surrounding control flow is identical either way.
/// Channels are edited independently, one call per channel per frame.
pub trait SpectralEdit {
    /// Edits `spectrum` (length = FFT size) in place for `channel`.
    fn edit(&mut self, spectrum: &mut [Complex<f32>], channel: usize);
}

/// The identity edit: leaves the spectrum untouched, so the round trip
/// reproduces the input frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl SpectralEdit for Passthrough {
    #[inline]
    fn edit(&mut self, _spectrum: &mut [Complex<f32>], _channel: usize) {}
}

/// Owns the forward and inverse transform plans for one frame size.
///
/// Plans and scratch storage are built once at construction and never
/// mutated afterwards; no state persists between `forward`/`inverse`
/// invocations other than the buffer passed in, so one instance is safely
/// reused across channels within a processing call.
pub struct SpectralStage {
    forward: Arc<dyn Fft<f32>>,
    inverse: Arc<dyn Fft<f32>>,
    scratch: Vec<Complex<f32>>,
    size: usize,
}

impl SpectralStage {
    /// Plans forward and inverse transforms of length `size`.
    pub fn new(size: usize) -> Self {
        let mut planner = FftPlanner::new();
        let forward = planner.plan_fft_forward(size);
        let inverse = planner.plan_fft_inverse(size);
        let scratch_len = forward
            .get_inplace_scratch_len()
            .max(inverse.get_inplace_scratch_len());
        Self {
            forward,
            inverse,
            scratch: vec![Complex::new(0.0, 0.0); scratch_len],
            size,
        }
    }

    /// Returns the transform size.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// In-place forward transform: time domain to frequency domain.
    pub fn forward(&mut self, buffer: &mut [Complex<f32>]) {
        self.forward.process_with_scratch(buffer, &mut self.scratch);
    }

    /// In-place inverse transform back to the time domain.
    ///
    /// rustfft leaves normalization to the caller, so the 1/N scaling is
    /// applied here: forward-then-inverse on an untouched spectrum
    /// reproduces the original signal up to floating-point rounding.
    pub fn inverse(&mut self, buffer: &mut [Complex<f32>]) {
        self.inverse.process_with_scratch(buffer, &mut self.scratch);
        let scale = 1.0 / self.size as f32;
        for bin in buffer.iter_mut() {
            *bin *= scale;
        }
    }
}

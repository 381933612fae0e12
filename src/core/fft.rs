//! FFT-related constants shared across the crate.

use rustfft::num_complex::Complex;

/// Zero-valued complex number, used for spectrum buffer initialization.
pub const COMPLEX_ZERO: Complex<f32> = Complex::new(0.0, 0.0);

/// Default transform size (samples per analysis frame).
///
/// Fixed independently of the host block size; the ring buffer capacity
/// equals this value.
pub const DEFAULT_FFT_SIZE: usize = 512;

/// Default hop size: new samples ingested between successive frames.
pub const DEFAULT_HOP_SIZE: usize = DEFAULT_FFT_SIZE / 8;

/// Maximum absolute error tolerated for a forward/inverse round trip on a
/// 512-sample frame with no spectral edit applied.
pub const ROUND_TRIP_TOLERANCE: f32 = 1e-4;

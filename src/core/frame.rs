//! Analysis-frame extraction from the circular history buffer.

use rustfft::num_complex::Complex;

use crate::core::fft::COMPLEX_ZERO;
use crate::core::ring_buffer::RingBuffer;
use crate::core::types::Sample;

/// Converts wrapped ring-buffer storage into a linear, time-ordered frame.
///
/// Owns a reusable pair of buffers: the unwrapped real frame and the
/// complex spectrum buffer handed to the transform stage. Both are sized
/// once at construction; `assemble` performs no allocation. Contents are
/// transient and valid only until the next call overwrites them.
pub struct FrameAssembler {
    frame: Vec<Sample>,
    spectrum: Vec<Complex<f32>>,
}

impl FrameAssembler {
    /// Creates an assembler for frames of `frame_size` samples.
    pub fn new(frame_size: usize) -> Self {
        Self {
            frame: vec![0.0; frame_size],
            spectrum: vec![COMPLEX_ZERO; frame_size],
        }
    }

    /// Returns the frame size.
    #[inline]
    pub fn frame_size(&self) -> usize {
        self.frame.len()
    }

    /// Fills the frame buffers from `frame_size` consecutive wrapped
    /// positions of `channel`, starting at `start_position`.
    ///
    /// Starting at the shared write cursor yields oldest-to-newest framing:
    /// the sample about to be overwritten is the oldest in the history.
    /// Purely real input, so every spectrum slot gets a zero imaginary part.
    ///
    /// If fewer than `frame_size` samples have been written since the ring
    /// was cleared, the frame carries the zero-initialized remainder; that
    /// is the accepted cold-start transient, not an error.
    pub fn assemble(&mut self, ring: &RingBuffer, channel: usize, start_position: usize) {
        for (offset, (real, bin)) in self
            .frame
            .iter_mut()
            .zip(self.spectrum.iter_mut())
            .enumerate()
        {
            let sample = ring.read(channel, start_position + offset);
            *real = sample;
            *bin = Complex::new(sample, 0.0);
        }
    }

    /// The most recently assembled linear frame, oldest sample first.
    #[inline]
    pub fn frame(&self) -> &[Sample] {
        &self.frame
    }

    /// Mutable access to the complex buffer for the transform stage.
    #[inline]
    pub fn spectrum_mut(&mut self) -> &mut [Complex<f32>] {
        &mut self.spectrum
    }

    /// The complex buffer contents after the transform round trip.
    #[inline]
    pub fn spectrum(&self) -> &[Complex<f32>] {
        &self.spectrum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assembles_in_chronological_order() {
        let cap = 8;
        let mut ring = RingBuffer::new(1, cap).unwrap();
        // Write 11 samples; cursor ends at 11, so the oldest retained
        // sample (3.0) lives at position 11 & 7 == 3.
        for pos in 0..11 {
            ring.write(0, pos, pos as f32);
        }
        let mut assembler = FrameAssembler::new(cap);
        assembler.assemble(&ring, 0, 11);
        let expected: Vec<f32> = (3..11).map(|v| v as f32).collect();
        assert_eq!(assembler.frame(), expected.as_slice());
    }

    #[test]
    fn spectrum_has_zero_imaginary_parts() {
        let mut ring = RingBuffer::new(1, 8).unwrap();
        for pos in 0..8 {
            ring.write(0, pos, (pos as f32) * 0.1);
        }
        let mut assembler = FrameAssembler::new(8);
        assembler.assemble(&ring, 0, 0);
        for (bin, real) in assembler.spectrum().iter().zip(assembler.frame()) {
            assert_eq!(bin.re, *real);
            assert_eq!(bin.im, 0.0);
        }
    }

    #[test]
    fn cold_start_reads_zero_initialized_history() {
        let mut ring = RingBuffer::new(1, 8).unwrap();
        // Only 3 of 8 samples written.
        for pos in 0..3 {
            ring.write(0, pos, 1.0);
        }
        let mut assembler = FrameAssembler::new(8);
        assembler.assemble(&ring, 0, 3);
        // Positions 3..8 were never written and stay zero.
        assert_eq!(&assembler.frame()[..5], &[0.0; 5]);
        assert_eq!(&assembler.frame()[5..], &[1.0; 3]);
    }

    #[test]
    fn reassembly_overwrites_previous_contents() {
        let mut ring = RingBuffer::new(1, 4).unwrap();
        for pos in 0..4 {
            ring.write(0, pos, 1.0);
        }
        let mut assembler = FrameAssembler::new(4);
        assembler.assemble(&ring, 0, 0);
        ring.clear();
        assembler.assemble(&ring, 0, 0);
        assert_eq!(assembler.frame(), &[0.0; 4]);
    }
}

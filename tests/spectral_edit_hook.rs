//! The spectral-edit hook: invocation cadence and effect on resynthesis.

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use blockfft::{BlockProcessor, EngineParams, SpectralEdit};
use common::feed_mono_blocks;
use rustfft::num_complex::Complex;

/// Counts invocations and records the spectrum length it was handed.
struct CountingEdit {
    calls: Arc<AtomicUsize>,
    seen_len: Arc<AtomicUsize>,
}

impl SpectralEdit for CountingEdit {
    fn edit(&mut self, spectrum: &mut [Complex<f32>], _channel: usize) {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.seen_len.store(spectrum.len(), Ordering::Relaxed);
    }
}

/// Zeroes every bin, silencing the resynthesized frame.
struct Mute;

impl SpectralEdit for Mute {
    fn edit(&mut self, spectrum: &mut [Complex<f32>], _channel: usize) {
        for bin in spectrum.iter_mut() {
            *bin = Complex::new(0.0, 0.0);
        }
    }
}

#[test]
fn edit_runs_once_per_channel_per_frame() {
    let calls = Arc::new(AtomicUsize::new(0));
    let seen_len = Arc::new(AtomicUsize::new(0));

    let params = EngineParams::new().with_channels(2);
    let mut engine = BlockProcessor::new(params).unwrap();
    engine.set_edit(Box::new(CountingEdit {
        calls: Arc::clone(&calls),
        seen_len: Arc::clone(&seen_len),
    }));

    for _ in 0..10 {
        let mut left = vec![0.0f32; 64];
        let mut right = vec![0.0f32; 64];
        let mut block: Vec<&mut [f32]> = vec![&mut left, &mut right];
        engine.process(&mut block);
    }

    assert_eq!(engine.frames_processed(), 2);
    // Two frames, two channels each.
    assert_eq!(calls.load(Ordering::Relaxed), 4);
    assert_eq!(seen_len.load(Ordering::Relaxed), 512);
}

#[test]
fn muting_edit_silences_resynthesized_frame() {
    let params = EngineParams::new().with_channels(1);
    let mut engine = BlockProcessor::new(params).unwrap();
    engine.set_edit(Box::new(Mute));

    let signal = vec![0.5f32; 640];
    feed_mono_blocks(&mut engine, &signal, 64);

    assert!(engine.frames_processed() > 0);
    assert!(engine.last_frame(0).iter().all(|&s| s == 0.0));
}

#[test]
fn identity_default_preserves_frame() {
    let params = EngineParams::new().with_channels(1);
    let mut engine = BlockProcessor::new(params).unwrap();

    let signal = vec![0.5f32; 640];
    feed_mono_blocks(&mut engine, &signal, 64);

    assert!(engine
        .last_frame(0)
        .iter()
        .all(|&s| (s - 0.5).abs() < 1e-3));
}

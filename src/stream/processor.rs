//! Per-block scheduler driving the ring buffer and transform stage.

use crate::core::frame::FrameAssembler;
use crate::core::ring_buffer::RingBuffer;
use crate::core::types::{EngineParams, Sample};
use crate::error::EngineError;
use crate::spectral::transform::{Passthrough, SpectralEdit, SpectralStage};

/// Block-driven processing engine.
///
/// The host calls [`process`](BlockProcessor::process) once per audio block
/// from a single real-time thread. Each call ingests the block into the
/// circular history buffer and, once a hop's worth of new samples has
/// accumulated past the cold-start threshold, extracts a linear frame per
/// channel and runs it through the forward transform, the spectral-edit
/// hook, and the inverse transform.
///
/// All buffers and plans are sized at construction; the per-block path
/// performs no allocation, no blocking, and returns no errors.
pub struct BlockProcessor {
    params: EngineParams,
    ring: RingBuffer,
    assembler: FrameAssembler,
    stage: SpectralStage,
    edit: Box<dyn SpectralEdit + Send + Sync>,
    /// Shared write cursor, one for all channels, always in `[0, fft_size)`.
    write_pointer: usize,
    /// Samples ingested since the last processed frame. Reset by assignment
    /// when a frame fires.
    hop_counter: usize,
    /// Monotonic count of all samples ever ingested; guards the cold start.
    total_ingested: u64,
    frames_processed: u64,
    /// Most recent resynthesized time-domain frame per channel.
    last_frames: Vec<Vec<Sample>>,
    max_block_size: usize,
}

impl BlockProcessor {
    /// Creates an engine from validated parameters.
    ///
    /// This is the one-time setup point: the ring buffer, frame buffers,
    /// and FFT plans are all sized here and never reallocated.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] if the parameters fail validation (FFT size
    /// not a power of two, hop out of range, bad channel count or rate).
    pub fn new(params: EngineParams) -> Result<Self, EngineError> {
        params.validate()?;
        let num_channels = params.channels as usize;
        let fft_size = params.fft_size;
        Ok(Self {
            ring: RingBuffer::new(num_channels, fft_size)?,
            assembler: FrameAssembler::new(fft_size),
            stage: SpectralStage::new(fft_size),
            edit: Box::new(Passthrough),
            write_pointer: 0,
            hop_counter: 0,
            total_ingested: 0,
            frames_processed: 0,
            last_frames: vec![vec![0.0; fft_size]; num_channels],
            max_block_size: 0,
            params,
        })
    }

    /// Installs the spectral edit applied between the forward and inverse
    /// transforms. Defaults to [`Passthrough`]. Setup-time only; do not call
    /// concurrently with `process`.
    pub fn set_edit(&mut self, edit: Box<dyn SpectralEdit + Send + Sync>) {
        self.edit = edit;
    }

    /// Host setup call: announces the stream format before playback.
    ///
    /// The ring capacity stays the configured power of two regardless of
    /// the host block size. Clears all history and counters.
    pub fn prepare(&mut self, sample_rate: u32, max_block_size: usize) {
        self.params.sample_rate = sample_rate;
        self.max_block_size = max_block_size;
        self.reset();
    }

    /// Host teardown call. No dynamic resources are held beyond the
    /// setup-time buffers, so this only clears state.
    pub fn release(&mut self) {
        self.reset();
    }

    /// Clears the ring buffer, counters, and retained frames.
    pub fn reset(&mut self) {
        self.ring.clear();
        self.write_pointer = 0;
        self.hop_counter = 0;
        self.total_ingested = 0;
        self.frames_processed = 0;
        for frame in &mut self.last_frames {
            frame.fill(0.0);
        }
    }

    /// Processes one host block in place.
    ///
    /// `block` holds one mutable slice per channel, all of equal length `N`
    /// (up to the announced maximum). Ingests all `N` samples per channel
    /// at sequentially advancing positions from the shared write cursor,
    /// then runs the frame pipeline if the hop threshold is reached.
    ///
    /// A channel-count mismatch against the configured layout is a
    /// configuration error; it trips a debug assertion and the common
    /// channel prefix is processed in release builds. This path never
    /// returns an error and never allocates.
    pub fn process(&mut self, block: &mut [&mut [Sample]]) {
        debug_assert_eq!(
            block.len(),
            self.ring.num_channels(),
            "channel count mismatch between setup and process"
        );
        let num_channels = block.len().min(self.ring.num_channels());
        if num_channels == 0 {
            return;
        }
        let block_len = block[..num_channels]
            .iter()
            .map(|channel| channel.len())
            .min()
            .unwrap_or(0);
        debug_assert!(
            self.max_block_size == 0 || block_len <= self.max_block_size,
            "block longer than the announced maximum"
        );

        let mask = self.params.fft_size - 1;
        let start = self.write_pointer;
        for (channel, data) in block.iter().take(num_channels).enumerate() {
            for (offset, &sample) in data[..block_len].iter().enumerate() {
                self.ring.write(channel, start + offset, sample);
            }
        }
        self.write_pointer = (start + block_len) & mask;
        self.hop_counter += block_len;
        self.total_ingested += block_len as u64;

        // Hop threshold reached, and at least one full frame of real
        // history exists (strictly more than fft_size samples ingested).
        if self.hop_counter >= self.params.hop_size
            && self.total_ingested > self.params.fft_size as u64
        {
            for channel in 0..num_channels {
                self.assembler
                    .assemble(&self.ring, channel, self.write_pointer);
                self.stage.forward(self.assembler.spectrum_mut());
                self.edit.edit(self.assembler.spectrum_mut(), channel);
                self.stage.inverse(self.assembler.spectrum_mut());
                for (out, bin) in self.last_frames[channel]
                    .iter_mut()
                    .zip(self.assembler.spectrum())
                {
                    *out = bin.re;
                }
            }
            self.frames_processed += 1;
            self.hop_counter = 0;
        }
    }

    /// Returns the engine parameters.
    pub fn params(&self) -> &EngineParams {
        &self.params
    }

    /// Number of frame-processing events since the last reset.
    #[inline]
    pub fn frames_processed(&self) -> u64 {
        self.frames_processed
    }

    /// Samples ingested since the last processed frame.
    #[inline]
    pub fn pending_samples(&self) -> usize {
        self.hop_counter
    }

    /// Total samples ingested per channel since the last reset.
    #[inline]
    pub fn total_ingested(&self) -> u64 {
        self.total_ingested
    }

    /// Current shared write cursor, in `[0, fft_size)`.
    #[inline]
    pub fn write_position(&self) -> usize {
        self.write_pointer
    }

    /// Analysis latency in samples: one full frame of history must exist
    /// before the first frame is processed.
    #[inline]
    pub fn latency_samples(&self) -> usize {
        self.params.fft_size
    }

    /// Analysis latency in seconds.
    pub fn latency_secs(&self) -> f64 {
        self.latency_samples() as f64 / self.params.sample_rate as f64
    }

    /// The most recent resynthesized time-domain frame for `channel`,
    /// oldest sample first. All zeros until the first frame fires.
    pub fn last_frame(&self, channel: usize) -> &[Sample] {
        &self.last_frames[channel]
    }
}

use blockfft::BlockProcessor;

/// Unit impulse: 1.0 at `position`, zero elsewhere.
pub fn gen_impulse(position: usize, n: usize) -> Vec<f32> {
    let mut out = vec![0.0f32; n];
    if position < n {
        out[position] = 1.0;
    }
    out
}

/// Linear ramp scaled to stay well inside [-1, 1].
pub fn gen_ramp(n: usize) -> Vec<f32> {
    (0..n).map(|i| i as f32 * 1e-3).collect()
}

/// Feeds a mono signal to the engine in fixed-size blocks and returns the
/// number of frames processed after each block.
pub fn feed_mono_blocks(
    engine: &mut BlockProcessor,
    signal: &[f32],
    block_size: usize,
) -> Vec<u64> {
    let mut counts = Vec::new();
    for chunk in signal.chunks(block_size) {
        let mut data = chunk.to_vec();
        let mut block: Vec<&mut [f32]> = vec![&mut data];
        engine.process(&mut block);
        counts.push(engine.frames_processed());
    }
    counts
}

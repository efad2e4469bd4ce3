//! WAV export of the playback buffer.

use std::path::Path;

use anyhow::{Context, Result};
use seiswave_synth::Playback;

/// Writes `playback` as a mono 32-bit float WAV file.
pub fn write_wav(path: &Path, playback: &Playback) -> Result<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: playback.sample_rate(),
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let mut writer = hound::WavWriter::create(path, spec)
        .with_context(|| format!("failed to create WAV file: {}", path.display()))?;
    for &s in playback.samples() {
        writer
            .write_sample(s as f32)
            .context("failed to write WAV sample")?;
    }
    writer.finalize().context("failed to finalize WAV file")?;
    Ok(())
}

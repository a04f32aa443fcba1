//! Saving rendered buffers as WAV files.

use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};

use crate::error::Result;
use crate::synth::Rendering;

/// Writes `samples` as a mono, 32-bit float WAV file at `sample_rate` Hz.
///
/// Samples are stored as-is; composed audio already sits inside [-0.5, 0.5].
pub fn write_wav<P: AsRef<Path>>(path: P, samples: &[f64], sample_rate: u32) -> Result<()> {
    let path = path.as_ref();
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };

    let mut writer = WavWriter::create(path, spec)?;
    for &sample in samples {
        writer.write_sample(sample as f32)?;
    }
    writer.finalize()?;

    tracing::info!(
        path = %path.display(),
        samples = samples.len(),
        sample_rate,
        "wrote WAV file"
    );
    Ok(())
}

impl Rendering {
    /// Writes the final samples with [`write_wav`] at the rendering's own rate.
    pub fn write_wav<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        write_wav(path, self.samples(), self.sample_rate())
    }
}

//! Rendering sounds into sample buffers.
//!
//! [`compose`] is the last stage of the pipeline: it multiplies an oscillator
//! buffer by an envelope buffer and applies fixed headroom. [`Synthesizer`]
//! runs the whole pipeline for a [`Sound`] at one sample rate.

use std::fmt;

use rand::Rng;

use crate::error::{Result, SynthError};
use crate::oscillators::oscillate_with_rng;
use crate::sound::{SampleRate, Sound};

/// Fixed attenuation applied by [`compose`] to keep the output clear of clipping.
pub const HEADROOM: f64 = 0.5;

/// Combines a waveform and an envelope into the final audio buffer.
///
/// Every output sample is `HEADROOM * waveform[i] * envelope[i]`. Fails with
/// `LengthMismatch` when the buffers differ in length.
///
/// # Examples
///
/// ```
/// use toneforge::compose;
///
/// let audio = compose(&[1.0, -1.0], &[1.0, 0.5]).unwrap();
/// assert_eq!(audio, vec![0.5, -0.25]);
///
/// assert!(compose(&[1.0, -1.0], &[1.0]).is_err());
/// ```
pub fn compose(waveform: &[f64], envelope: &[f64]) -> Result<Vec<f64>> {
    if waveform.len() != envelope.len() {
        return Err(SynthError::LengthMismatch {
            waveform: waveform.len(),
            envelope: envelope.len(),
        });
    }
    Ok(waveform
        .iter()
        .zip(envelope)
        .map(|(w, e)| HEADROOM * w * e)
        .collect())
}

/// Renders [`Sound`]s at a fixed sample rate.
///
/// # Examples
///
/// ```
/// use toneforge::{Envelope, Frequency, SampleRate, Sound, Synthesizer, WaveformKind};
///
/// let sound = Sound::new(
///     WaveformKind::Sine,
///     Frequency::audible(440.0)?,
///     0.25,
///     Envelope::default(),
/// )?;
///
/// let rendering = Synthesizer::new(SampleRate::Low).render(&sound)?;
/// assert_eq!(rendering.sample_rate(), 8_000);
/// assert_eq!(rendering.samples().len(), 2_000);
/// # Ok::<(), toneforge::SynthError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Synthesizer {
    sample_rate: u32,
}

impl Synthesizer {
    /// Creates a synthesizer at one of the preset rates.
    ///
    /// # Arguments
    ///
    /// * `sample_rate` - Preset the rendered buffers are sampled at
    pub fn new(sample_rate: SampleRate) -> Self {
        Self::with_sample_rate(sample_rate.hz())
    }

    /// A synthesizer running at an arbitrary rate in Hz.
    pub fn with_sample_rate(sample_rate: u32) -> Self {
        Self { sample_rate }
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Renders `sound`: oscillator, envelope, then [`compose`].
    ///
    /// A `Sound` is validated when it is built, so this only fails if the
    /// pipeline itself is broken.
    pub fn render(&self, sound: &Sound) -> Result<Rendering> {
        self.render_with_rng(sound, &mut rand::thread_rng())
    }

    /// Like [`render`](Self::render), drawing noise from `rng`.
    pub fn render_with_rng<R: Rng>(&self, sound: &Sound, rng: &mut R) -> Result<Rendering> {
        let _span = tracing::debug_span!(
            "render",
            waveform = %sound.waveform(),
            frequency = sound.frequency().hz(),
            duration = sound.duration(),
            sample_rate = self.sample_rate,
        )
        .entered();

        let sample_count = sound.sample_count(self.sample_rate);
        let waveform = oscillate_with_rng(
            sound.waveform(),
            sound.frequency().hz(),
            sample_count,
            self.sample_rate,
            rng,
        );
        let duration = sound.duration();
        let envelope = sound.envelope().generate(self.sample_rate, duration);
        let samples = compose(&waveform, &envelope)?;

        tracing::debug!(samples = samples.len(), "rendered sound");

        Ok(Rendering {
            sample_rate: self.sample_rate,
            waveform,
            envelope,
            samples,
        })
    }
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self::new(SampleRate::default())
    }
}

/// Output of [`Synthesizer::render`]: the final samples plus the intermediate buffers.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendering {
    sample_rate: u32,
    waveform: Vec<f64>,
    envelope: Vec<f64>,
    samples: Vec<f64>,
}

impl Rendering {
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Final audio, ready for playback or encoding.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Consumes the rendering, keeping only the final audio.
    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }

    /// Raw oscillator output before the envelope was applied.
    pub fn waveform(&self) -> &[f64] {
        &self.waveform
    }

    /// Envelope amplitudes, one per sample.
    pub fn envelope(&self) -> &[f64] {
        &self.envelope
    }

    /// Length of the rendered audio in seconds.
    pub fn duration(&self) -> f64 {
        self.samples.len() as f64 / f64::from(self.sample_rate)
    }

    /// Samples roughly `rows` evenly spaced points of all three buffers for inspection.
    pub fn sample_table(&self, rows: usize) -> SampleTable {
        let len = self.samples.len();
        let step = (len / rows.max(1)).max(1);
        let rows = (0..len)
            .step_by(step)
            .map(|index| SampleRow {
                index,
                time: index as f64 / f64::from(self.sample_rate),
                waveform: self.waveform[index],
                envelope: self.envelope[index],
                audio: self.samples[index],
            })
            .collect();
        SampleTable { rows }
    }
}

/// One line of a [`SampleTable`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRow {
    pub index: usize,
    /// Seconds since the start of the sound
    pub time: f64,
    pub waveform: f64,
    pub envelope: f64,
    pub audio: f64,
}

/// Waveform, envelope and audio values at regular intervals of a [`Rendering`].
///
/// Its `Display` impl prints an aligned text table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SampleTable {
    rows: Vec<SampleRow>,
}

impl SampleTable {
    /// Rows in ascending sample order.
    pub fn rows(&self) -> &[SampleRow] {
        &self.rows
    }
}

impl fmt::Display for SampleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Samples at regular intervals:")?;
        writeln!(
            f,
            "{:>6} {:>10} {:>10} {:>10} {:>10}",
            "Index", "Time", "Waveform", "Envelope", "Audio"
        )?;
        for row in &self.rows {
            writeln!(
                f,
                "{:>6} {:>10.4} {:>10.4} {:>10.4} {:>10.4}",
                row.index, row.time, row.waveform, row.envelope, row.audio
            )?;
        }
        Ok(())
    }
}

//! Declarative description of a single sound.

use crate::envelopes::Envelope;
use crate::error::{Result, SynthError};
use crate::music::Frequency;
use crate::oscillators::WaveformKind;

/// Common sample rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum SampleRate {
    /// 8 kHz, telephone quality
    Low,
    /// 44.1 kHz
    #[default]
    CdQuality,
    /// 48 kHz
    DvdQuality,
    /// 96 kHz
    StudioQuality,
    /// 192 kHz
    HighResolution,
}

impl SampleRate {
    /// Rate in Hz.
    pub const fn hz(self) -> u32 {
        match self {
            SampleRate::Low => 8_000,
            SampleRate::CdQuality => 44_100,
            SampleRate::DvdQuality => 48_000,
            SampleRate::StudioQuality => 96_000,
            SampleRate::HighResolution => 192_000,
        }
    }
}

impl From<SampleRate> for u32 {
    fn from(rate: SampleRate) -> Self {
        rate.hz()
    }
}

/// Everything needed to render one sound: oscillator, pitch, length and envelope.
///
/// # Examples
///
/// ```
/// use toneforge::{Envelope, Frequency, Sound, WaveformKind};
///
/// let sound = Sound::new(
///     WaveformKind::Sine,
///     Frequency::bass(60.0)?,
///     0.5,
///     Envelope::default(),
/// )?;
/// assert_eq!(sound.sample_count(44_100), 22_050);
///
/// let silent = Sound::new(WaveformKind::Sine, Frequency::bass(60.0)?, 0.0, Envelope::default());
/// assert!(silent.is_err());
/// # Ok::<(), toneforge::SynthError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sound {
    waveform: WaveformKind,
    frequency: Frequency,
    duration: f64,
    envelope: Envelope,
}

impl Sound {
    /// Fails with `InvalidParameter` unless `duration` is a positive, finite number of seconds.
    pub fn new(
        waveform: WaveformKind,
        frequency: Frequency,
        duration: f64,
        envelope: Envelope,
    ) -> Result<Self> {
        if !duration.is_finite() || duration <= 0.0 {
            return Err(SynthError::invalid(
                "duration",
                format!("{duration} must be a positive, finite number of seconds"),
            ));
        }
        Ok(Self {
            waveform,
            frequency,
            duration,
            envelope,
        })
    }

    /// Oscillator that produces the raw signal.
    pub fn waveform(&self) -> WaveformKind {
        self.waveform
    }

    /// Pitch of the oscillator.
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Length of the sound in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Amplitude envelope applied over the whole duration.
    pub fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    /// Number of samples the sound spans at `sample_rate`: `floor(sample_rate * duration)`.
    pub fn sample_count(&self, sample_rate: u32) -> usize {
        (f64::from(sample_rate) * self.duration).floor() as usize
    }
}

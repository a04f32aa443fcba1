//! Plain-data sound descriptions for configuration files.
//!
//! Descriptors deserialize from any serde format (TOML, JSON, ...) without
//! validation. Converting one into a [`Sound`] runs every constructor check,
//! so a loaded file is rejected exactly where a hand-built sound would be.
//!
//! ```toml
//! waveform = "sine"
//! frequency = "B0"
//! duration = 0.5
//!
//! [envelope]
//! attack = { percent = 10, curve = "sine" }
//! decay = { percent = 20, curve = "sine" }
//! sustain = { percent = 50 }
//! release = { percent = 20, curve = "sine" }
//! sustain_level = 0.7
//! ```

use serde::{Deserialize, Serialize};

use crate::envelopes::{CurveKind, Envelope, PhaseParameter, SustainLevel};
use crate::error::{Result, SynthError};
use crate::music::{Frequency, FrequencyBand, Note};
use crate::oscillators::WaveformKind;
use crate::sound::Sound;

/// Serializable form of a [`Sound`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SoundDescriptor {
    pub waveform: WaveformKind,
    pub frequency: FrequencyDescriptor,
    /// Seconds
    pub duration: f64,
    #[serde(default)]
    pub envelope: EnvelopeDescriptor,
}

/// A frequency given as plain Hz, as a pitch name, or as Hz checked against a named band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FrequencyDescriptor {
    Hz(f64),
    Note(String),
    Banded { hz: f64, band: String },
}

/// Serializable form of an [`Envelope`]. Missing phases take no time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnvelopeDescriptor {
    pub attack: PhaseDescriptor,
    pub decay: PhaseDescriptor,
    pub sustain: PhaseDescriptor,
    pub release: PhaseDescriptor,
    pub sustain_level: f64,
    pub sustain_curve: CurveKind,
}

impl Default for EnvelopeDescriptor {
    fn default() -> Self {
        Self {
            attack: PhaseDescriptor::default(),
            decay: PhaseDescriptor::default(),
            sustain: PhaseDescriptor::default(),
            release: PhaseDescriptor::default(),
            sustain_level: 1.0,
            sustain_curve: CurveKind::default(),
        }
    }
}

/// One phase, timed by either `seconds` or `percent` of the sound's duration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PhaseDescriptor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seconds: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent: Option<f64>,
    pub curve: CurveKind,
}

impl TryFrom<&PhaseDescriptor> for PhaseParameter {
    type Error = SynthError;

    fn try_from(phase: &PhaseDescriptor) -> Result<Self> {
        let parameter = match (phase.seconds, phase.percent) {
            (Some(_), Some(_)) => {
                return Err(SynthError::invalid(
                    "phase",
                    "set either `seconds` or `percent`, not both",
                ));
            }
            (Some(seconds), None) => PhaseParameter::seconds(seconds)?,
            (None, Some(percent)) => PhaseParameter::percent(percent)?,
            (None, None) => PhaseParameter::none(),
        };
        Ok(parameter.with_curve(phase.curve))
    }
}

impl TryFrom<&EnvelopeDescriptor> for Envelope {
    type Error = SynthError;

    fn try_from(envelope: &EnvelopeDescriptor) -> Result<Self> {
        let level = SustainLevel::new(envelope.sustain_level)?;
        Ok(Envelope::new(
            (&envelope.attack).try_into()?,
            (&envelope.decay).try_into()?,
            (&envelope.sustain).try_into()?,
            (&envelope.release).try_into()?,
            level.with_curve(envelope.sustain_curve),
        ))
    }
}

impl TryFrom<&FrequencyDescriptor> for Frequency {
    type Error = SynthError;

    fn try_from(frequency: &FrequencyDescriptor) -> Result<Self> {
        match frequency {
            FrequencyDescriptor::Hz(hz) => Frequency::from_hz(*hz),
            FrequencyDescriptor::Note(name) => name
                .parse::<Note>()
                .map(Frequency::from)
                .map_err(|e| SynthError::invalid("frequency", e.to_string())),
            FrequencyDescriptor::Banded { hz, band } => {
                let band = FrequencyBand::by_name(band).ok_or_else(|| {
                    SynthError::invalid("frequency band", format!("unknown band '{band}'"))
                })?;
                Frequency::new(*hz, band)
            }
        }
    }
}

impl TryFrom<&SoundDescriptor> for Sound {
    type Error = SynthError;

    fn try_from(sound: &SoundDescriptor) -> Result<Self> {
        Sound::new(
            sound.waveform,
            (&sound.frequency).try_into()?,
            sound.duration,
            (&sound.envelope).try_into()?,
        )
    }
}

impl TryFrom<SoundDescriptor> for Sound {
    type Error = SynthError;

    fn try_from(sound: SoundDescriptor) -> Result<Self> {
        Sound::try_from(&sound)
    }
}

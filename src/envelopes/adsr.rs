//! ADSR (Attack, Decay, Sustain, Release) envelope generator.

use super::{CurveKind, PhaseParameter, SustainLevel, shape};

/// The four ordered phases of an ADSR envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopePhase {
    /// Ramping from 0 to peak level
    Attack,
    /// Ramping from peak to sustain level
    Decay,
    /// Holding at sustain level
    Sustain,
    /// Ramping from sustain level to 0, anchored to the end of the sound
    Release,
}

/// Sample counts of every phase after resolving against a duration and sample rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseSamples {
    pub attack: usize,
    pub decay: usize,
    pub sustain: usize,
    pub release: usize,
    /// Length of the whole envelope buffer
    pub total: usize,
}

impl PhaseSamples {
    /// Sample count resolved for `phase`.
    pub fn of(&self, phase: EnvelopePhase) -> usize {
        match phase {
            EnvelopePhase::Attack => self.attack,
            EnvelopePhase::Decay => self.decay,
            EnvelopePhase::Sustain => self.sustain,
            EnvelopePhase::Release => self.release,
        }
    }

    /// Sum of all four phases; may be larger or smaller than `total`.
    pub fn requested(&self) -> usize {
        self.attack
            .saturating_add(self.decay)
            .saturating_add(self.sustain)
            .saturating_add(self.release)
    }

    /// Samples claimed by more than one phase.
    pub fn overlap(&self) -> usize {
        self.requested().saturating_sub(self.total)
    }

    /// Samples no phase writes to; these stay silent.
    pub fn gap(&self) -> usize {
        self.total.saturating_sub(self.requested())
    }
}

/// ADSR amplitude envelope over a finite sound.
///
/// Phase lengths are resolved against the sound's duration when the envelope
/// is generated, so percent-based phases scale with the sound:
/// - **Attack** rises from 0 to 1 at the start of the buffer
/// - **Decay** falls from 1 to the sustain level right after the attack
/// - **Sustain** holds the sustain level for its own resolved length
/// - **Release** falls from the sustain level to 0 over the last samples
///
/// Release is written last. When the phases ask for more samples than the
/// buffer holds it overwrites the tail; when they ask for fewer, the samples
/// between sustain and release stay at 0.
///
/// # Examples
///
/// ```
/// use toneforge::{CurveKind, Envelope, PhaseParameter, SustainLevel};
///
/// let envelope = Envelope::new(
///     PhaseParameter::percent(20.0)?,
///     PhaseParameter::percent(20.0)?,
///     PhaseParameter::percent(40.0)?,
///     PhaseParameter::percent(20.0)?.with_curve(CurveKind::Sine),
///     SustainLevel::new(0.5)?,
/// );
///
/// let buffer = envelope.generate(10, 1.0);
/// assert_eq!(buffer.len(), 10);
/// assert_eq!(buffer[0], 0.0);
/// assert_eq!(buffer[5], 0.5);
/// assert_eq!(buffer[9], 0.0);
/// # Ok::<(), toneforge::SynthError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Envelope {
    attack: PhaseParameter,
    decay: PhaseParameter,
    sustain: PhaseParameter,
    release: PhaseParameter,
    sustain_level: SustainLevel,
}

impl Envelope {
    /// Creates an envelope from its four phases and the sustain level.
    ///
    /// # Arguments
    ///
    /// * `attack` - Rise from 0 to 1
    /// * `decay` - Fall from 1 to the sustain level
    /// * `sustain` - How long the sustain level is held
    /// * `release` - Fall from the sustain level to 0 at the end of the sound
    /// * `sustain_level` - Plateau between decay and release
    pub fn new(
        attack: PhaseParameter,
        decay: PhaseParameter,
        sustain: PhaseParameter,
        release: PhaseParameter,
        sustain_level: SustainLevel,
    ) -> Self {
        Self {
            attack,
            decay,
            sustain,
            release,
            sustain_level,
        }
    }

    /// Replaces the attack phase.
    pub fn with_attack(mut self, attack: PhaseParameter) -> Self {
        self.attack = attack;
        self
    }

    /// Replaces the decay phase.
    pub fn with_decay(mut self, decay: PhaseParameter) -> Self {
        self.decay = decay;
        self
    }

    /// Replaces the sustain phase.
    pub fn with_sustain(mut self, sustain: PhaseParameter) -> Self {
        self.sustain = sustain;
        self
    }

    /// Replaces the release phase.
    pub fn with_release(mut self, release: PhaseParameter) -> Self {
        self.release = release;
        self
    }

    /// Replaces the sustain level.
    pub fn with_sustain_level(mut self, sustain_level: SustainLevel) -> Self {
        self.sustain_level = sustain_level;
        self
    }

    /// Parameter controlling `phase`.
    pub fn phase(&self, phase: EnvelopePhase) -> &PhaseParameter {
        match phase {
            EnvelopePhase::Attack => &self.attack,
            EnvelopePhase::Decay => &self.decay,
            EnvelopePhase::Sustain => &self.sustain,
            EnvelopePhase::Release => &self.release,
        }
    }

    /// Level held during the sustain phase.
    pub fn sustain_level(&self) -> SustainLevel {
        self.sustain_level
    }

    /// Resolves every phase to a whole number of samples.
    pub fn phase_samples(&self, sample_rate: u32, duration: f64) -> PhaseSamples {
        PhaseSamples {
            attack: self.attack.resolve_samples(duration, sample_rate),
            decay: self.decay.resolve_samples(duration, sample_rate),
            sustain: self.sustain.resolve_samples(duration, sample_rate),
            release: self.release.resolve_samples(duration, sample_rate),
            total: (f64::from(sample_rate) * duration).floor() as usize,
        }
    }

    /// Renders the envelope into a new buffer of `floor(sample_rate * duration)` samples.
    pub fn generate(&self, sample_rate: u32, duration: f64) -> Vec<f64> {
        let counts = self.phase_samples(sample_rate, duration);
        let level = self.sustain_level.level();

        tracing::trace!(
            attack = counts.attack,
            decay = counts.decay,
            sustain = counts.sustain,
            release = counts.release,
            total = counts.total,
            "resolved envelope phases"
        );
        if counts.overlap() > 0 {
            tracing::debug!(
                overlap = counts.overlap(),
                "envelope phases exceed the sound, release overwrites the tail"
            );
        } else if counts.gap() > 0 {
            tracing::debug!(
                gap = counts.gap(),
                "envelope leaves a silent gap before release"
            );
        }

        let mut buffer = vec![0.0; counts.total];

        if counts.attack > 0 {
            let attack = shape(self.attack.curve(), counts.attack, 0.0, 1.0);
            write_clipped(&mut buffer, 0, &attack);
        }

        let decay_start = counts.attack;
        if counts.decay > 0 {
            let decay = shape(self.decay.curve(), counts.decay, 1.0, level);
            write_clipped(&mut buffer, decay_start, &decay);
        }

        let sustain_start = decay_start.saturating_add(counts.decay);
        if counts.sustain > 0 && sustain_start < counts.total {
            let requested_end = sustain_start.saturating_add(counts.sustain);
            let sustain_end = requested_end.min(counts.total);
            buffer[sustain_start..sustain_end].fill(level);
        }

        if counts.release > 0 {
            let release = shape(self.release.curve(), counts.release, level, 0.0);
            let visible = counts.release.min(counts.total);
            let tail = &release[counts.release - visible..];
            buffer[counts.total - visible..].copy_from_slice(tail);
        }

        buffer
    }
}

/// Copies `values` into `buffer` starting at `offset`, dropping whatever runs past the end.
fn write_clipped(buffer: &mut [f64], offset: usize, values: &[f64]) {
    if offset >= buffer.len() {
        return;
    }
    let n = values.len().min(buffer.len() - offset);
    buffer[offset..offset + n].copy_from_slice(&values[..n]);
}

/// A percent-based envelope whose phases split the whole sound in the given shares,
/// every phase following `curve`.
///
/// Handy for sounds whose envelope should stretch with their duration.
pub fn proportional(
    attack: f64,
    decay: f64,
    sustain: f64,
    release: f64,
    sustain_level: f64,
    curve: CurveKind,
) -> crate::Result<Envelope> {
    Ok(Envelope::new(
        PhaseParameter::percent(attack)?.with_curve(curve),
        PhaseParameter::percent(decay)?.with_curve(curve),
        PhaseParameter::percent(sustain)?,
        PhaseParameter::percent(release)?.with_curve(curve),
        SustainLevel::new(sustain_level)?,
    ))
}

//! Validated parameters for the phases of an ADSR envelope.

use super::CurveKind;
use crate::error::{Result, SynthError};

/// How long a phase lasts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PhaseTime {
    /// A fixed length in seconds
    Absolute(f64),
    /// A share of the sound's total duration, in percent (0 to 100)
    Percent(f64),
}

impl PhaseTime {
    /// Converts the phase time into seconds for a sound of `total_duration` seconds.
    pub fn resolve(&self, total_duration: f64) -> f64 {
        match *self {
            PhaseTime::Absolute(seconds) => seconds,
            PhaseTime::Percent(percent) => (percent / 100.0) * total_duration,
        }
    }
}

/// Length and shaping curve of one envelope phase (attack, decay, sustain or release).
///
/// # Examples
///
/// ```
/// use toneforge::{CurveKind, PhaseParameter};
///
/// let attack = PhaseParameter::percent(50.0).unwrap().with_curve(CurveKind::Sine);
/// assert_eq!(attack.resolve(2.0), 1.0);
///
/// let release = PhaseParameter::seconds(0.25).unwrap();
/// assert_eq!(release.resolve(10.0), 0.25);
/// assert_eq!(release.curve(), CurveKind::Linear);
///
/// assert!(PhaseParameter::percent(150.0).is_err());
/// assert!(PhaseParameter::seconds(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseParameter {
    time: PhaseTime,
    curve: CurveKind,
}

impl PhaseParameter {
    /// A phase lasting a fixed number of seconds.
    ///
    /// Fails with `InvalidParameter` for negative or non-finite values.
    pub fn seconds(seconds: f64) -> Result<Self> {
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(SynthError::invalid(
                "phase seconds",
                format!("{seconds} must be a finite, non-negative number of seconds"),
            ));
        }
        Ok(Self {
            time: PhaseTime::Absolute(seconds),
            curve: CurveKind::default(),
        })
    }

    /// A phase lasting `percent` of the sound's total duration.
    ///
    /// Fails with `InvalidParameter` unless `percent` lies in [0, 100].
    pub fn percent(percent: f64) -> Result<Self> {
        if !(0.0..=100.0).contains(&percent) {
            return Err(SynthError::invalid(
                "phase percent",
                format!("{percent} is outside [0, 100]"),
            ));
        }
        Ok(Self {
            time: PhaseTime::Percent(percent),
            curve: CurveKind::default(),
        })
    }

    /// A phase that takes no time at all.
    pub const fn none() -> Self {
        Self {
            time: PhaseTime::Absolute(0.0),
            curve: CurveKind::Linear,
        }
    }

    /// Sets the curve the amplitude follows across this phase.
    pub fn with_curve(mut self, curve: CurveKind) -> Self {
        self.curve = curve;
        self
    }

    /// Length of the phase in seconds for a sound lasting `total_duration` seconds.
    pub fn resolve(&self, total_duration: f64) -> f64 {
        self.time.resolve(total_duration)
    }

    /// Number of whole samples the phase covers.
    pub fn resolve_samples(&self, total_duration: f64, sample_rate: u32) -> usize {
        let seconds = self.resolve(total_duration);
        (seconds * f64::from(sample_rate)).floor() as usize
    }

    /// How the phase length is expressed.
    pub fn time(&self) -> PhaseTime {
        self.time
    }

    /// Curve drawn across the phase.
    pub fn curve(&self) -> CurveKind {
        self.curve
    }
}

impl Default for PhaseParameter {
    fn default() -> Self {
        Self::none()
    }
}

/// Amplitude held during the sustain phase, in [0.0, 1.0].
///
/// The attached curve describes how the level would be approached if it were
/// treated as a ramp; the envelope generator itself holds the level constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SustainLevel {
    level: f64,
    curve: CurveKind,
}

impl SustainLevel {
    /// Fails with `InvalidParameter` unless `level` lies in [0.0, 1.0].
    ///
    /// ```
    /// use toneforge::SustainLevel;
    ///
    /// assert_eq!(SustainLevel::new(0.7).unwrap().level(), 0.7);
    /// assert!(SustainLevel::new(1.5).is_err());
    /// ```
    pub fn new(level: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&level) {
            return Err(SynthError::invalid(
                "sustain level",
                format!("{level} is outside [0, 1]"),
            ));
        }
        Ok(Self {
            level,
            curve: CurveKind::default(),
        })
    }

    /// Attaches a curve, kept for descriptor round trips.
    pub fn with_curve(mut self, curve: CurveKind) -> Self {
        self.curve = curve;
        self
    }

    /// Held amplitude.
    pub fn level(&self) -> f64 {
        self.level
    }

    pub fn curve(&self) -> CurveKind {
        self.curve
    }
}

impl Default for SustainLevel {
    fn default() -> Self {
        Self {
            level: 1.0,
            curve: CurveKind::Linear,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_resolves_unchanged() {
        let phase = PhaseParameter::seconds(0.3).unwrap();
        assert_eq!(phase.resolve(0.5), 0.3);
        assert_eq!(phase.resolve(100.0), 0.3);
        assert_eq!(phase.time(), PhaseTime::Absolute(0.3));
    }

    #[test]
    fn test_percent_resolves_against_duration() {
        let phase = PhaseParameter::percent(50.0).unwrap();
        assert_eq!(phase.resolve(2.0), 1.0);
        assert_eq!(phase.resolve(0.0), 0.0);

        let phase = PhaseParameter::percent(100.0).unwrap();
        assert_eq!(phase.resolve(0.5), 0.5);
    }

    #[test]
    fn test_percent_bounds() {
        assert!(PhaseParameter::percent(0.0).is_ok());
        assert!(PhaseParameter::percent(100.0).is_ok());
        assert!(matches!(
            PhaseParameter::percent(150.0),
            Err(SynthError::InvalidParameter {
                name: "phase percent",
                ..
            })
        ));
        assert!(PhaseParameter::percent(-0.1).is_err());
        assert!(PhaseParameter::percent(f64::NAN).is_err());
    }

    #[test]
    fn test_seconds_bounds() {
        assert!(PhaseParameter::seconds(0.0).is_ok());
        assert!(matches!(
            PhaseParameter::seconds(-0.5),
            Err(SynthError::InvalidParameter {
                name: "phase seconds",
                ..
            })
        ));
        assert!(PhaseParameter::seconds(f64::INFINITY).is_err());
    }

    #[test]
    fn test_resolve_samples_floors() {
        let phase = PhaseParameter::seconds(0.3).unwrap();
        assert_eq!(phase.resolve_samples(1.0, 10), 3);

        let phase = PhaseParameter::percent(10.0).unwrap();
        assert_eq!(phase.resolve_samples(0.5, 44100), 2205);

        let phase = PhaseParameter::seconds(0.09).unwrap();
        assert_eq!(phase.resolve_samples(1.0, 10), 0);
    }

    #[test]
    fn test_curve_defaults_to_linear() {
        assert_eq!(PhaseParameter::none().curve(), CurveKind::Linear);
        let phase = PhaseParameter::none().with_curve(CurveKind::Tanh);
        assert_eq!(phase.curve(), CurveKind::Tanh);
    }

    #[test]
    fn test_sustain_level_bounds() {
        assert!(SustainLevel::new(0.0).is_ok());
        assert!(SustainLevel::new(1.0).is_ok());
        assert!(SustainLevel::new(1.5).is_err());
        assert!(SustainLevel::new(-0.1).is_err());

        let level = SustainLevel::new(0.7).unwrap().with_curve(CurveKind::Cubic);
        assert_eq!(level.level(), 0.7);
        assert_eq!(level.curve(), CurveKind::Cubic);
    }
}

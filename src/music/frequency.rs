//! Frequency type for representing pitch in Hz.

use std::fmt;

use super::core::Note;
use crate::error::{Result, SynthError};

/// Named, inclusive range of frequencies a [`Frequency`] is validated against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyBand {
    name: &'static str,
    min: f64,
    max: f64,
}

impl FrequencyBand {
    /// Any finite, non-negative frequency
    pub const UNBOUNDED: FrequencyBand = FrequencyBand::new("unbounded", 0.0, f64::MAX);
    /// Range of human hearing, 20 Hz to 20 kHz
    pub const AUDIBLE: FrequencyBand = FrequencyBand::new("audible", 20.0, 20_000.0);
    /// Everything a synth is expected to produce, 0 Hz to 40 kHz
    pub const FULL_RANGE: FrequencyBand = FrequencyBand::new("full range", 0.0, 40_000.0);
    /// Below hearing, 0 Hz to 20 Hz
    pub const SUBSONIC: FrequencyBand = FrequencyBand::new("subsonic", 0.0, 20.0);
    /// Above hearing, 20 kHz to 40 kHz
    pub const ULTRASONIC: FrequencyBand = FrequencyBand::new("ultrasonic", 20_000.0, 40_000.0);
    /// Kick and bass lines, 20 Hz to 250 Hz
    pub const BASS: FrequencyBand = FrequencyBand::new("bass", 20.0, 250.0);
    /// 20 Hz to 500 Hz
    pub const LOW: FrequencyBand = FrequencyBand::new("low", 20.0, 500.0);
    /// 250 Hz to 4 kHz
    pub const MID: FrequencyBand = FrequencyBand::new("mid", 250.0, 4_000.0);
    /// 4 kHz to 20 kHz
    pub const HIGH: FrequencyBand = FrequencyBand::new("high", 4_000.0, 20_000.0);

    /// Every predefined band.
    pub const ALL: [FrequencyBand; 9] = [
        FrequencyBand::UNBOUNDED,
        FrequencyBand::AUDIBLE,
        FrequencyBand::FULL_RANGE,
        FrequencyBand::SUBSONIC,
        FrequencyBand::ULTRASONIC,
        FrequencyBand::BASS,
        FrequencyBand::LOW,
        FrequencyBand::MID,
        FrequencyBand::HIGH,
    ];

    /// Declares a custom band. `min` and `max` are both inclusive.
    pub const fn new(name: &'static str, min: f64, max: f64) -> Self {
        Self { name, min, max }
    }

    /// Looks up a predefined band by name, ignoring case and `_`/`-` separators.
    pub fn by_name(name: &str) -> Option<FrequencyBand> {
        let normalized = name.trim().to_lowercase().replace(['_', '-'], " ");
        Self::ALL.into_iter().find(|band| band.name == normalized)
    }

    /// Lowercase name, as matched by [`FrequencyBand::by_name`].
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Lowest accepted frequency in Hz.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Highest accepted frequency in Hz.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Whether `hz` is finite and within the band, edges included.
    pub fn contains(&self, hz: f64) -> bool {
        hz.is_finite() && (self.min..=self.max).contains(&hz)
    }
}

impl fmt::Display for FrequencyBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.max >= f64::MAX {
            return write!(f, "{} (≥ {} Hz)", self.name, self.min);
        }
        write!(f, "{} ({} Hz to {} Hz)", self.name, self.min, self.max)
    }
}

/// A frequency value in Hz, validated against the band it was built for.
///
/// # Examples
///
/// ```
/// use toneforge::music::frequency::{Frequency, FrequencyBand};
///
/// let freq = Frequency::audible(440.0).unwrap();
/// assert_eq!(freq.hz(), 440.0);
/// assert_eq!(freq.band(), FrequencyBand::AUDIBLE);
///
/// assert!(Frequency::bass(440.0).is_err());
/// assert!(Frequency::new(30.0, FrequencyBand::SUBSONIC).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frequency {
    hz: f64,
    band: FrequencyBand,
}

impl Frequency {
    /// Creates a frequency, failing with `InvalidParameter` if `hz` lies outside `band`.
    pub fn new(hz: f64, band: FrequencyBand) -> Result<Self> {
        if !band.contains(hz) {
            return Err(SynthError::invalid(
                "frequency",
                format!("{hz} Hz is outside the {band} band"),
            ));
        }
        Ok(Self { hz, band })
    }

    /// Any finite, non-negative frequency.
    pub fn from_hz(hz: f64) -> Result<Self> {
        Self::new(hz, FrequencyBand::UNBOUNDED)
    }

    /// Frequency within human hearing.
    ///
    /// # Arguments
    ///
    /// * `hz` - Frequency in Hz, between 20 and 20,000 inclusive
    pub fn audible(hz: f64) -> Result<Self> {
        Self::new(hz, FrequencyBand::AUDIBLE)
    }

    /// Frequency in the [`FrequencyBand::FULL_RANGE`] band.
    pub fn full_range(hz: f64) -> Result<Self> {
        Self::new(hz, FrequencyBand::FULL_RANGE)
    }

    /// Frequency in the [`FrequencyBand::SUBSONIC`] band.
    pub fn subsonic(hz: f64) -> Result<Self> {
        Self::new(hz, FrequencyBand::SUBSONIC)
    }

    /// Frequency in the [`FrequencyBand::ULTRASONIC`] band.
    pub fn ultrasonic(hz: f64) -> Result<Self> {
        Self::new(hz, FrequencyBand::ULTRASONIC)
    }

    /// Frequency in the [`FrequencyBand::BASS`] band.
    ///
    /// # Examples
    ///
    /// ```
    /// use toneforge::Frequency;
    ///
    /// assert!(Frequency::bass(60.0).is_ok());
    /// assert!(Frequency::bass(440.0).is_err());
    /// ```
    pub fn bass(hz: f64) -> Result<Self> {
        Self::new(hz, FrequencyBand::BASS)
    }

    /// Frequency in the [`FrequencyBand::LOW`] band.
    pub fn low(hz: f64) -> Result<Self> {
        Self::new(hz, FrequencyBand::LOW)
    }

    /// Frequency in the [`FrequencyBand::MID`] band.
    pub fn mid(hz: f64) -> Result<Self> {
        Self::new(hz, FrequencyBand::MID)
    }

    /// Frequency in the [`FrequencyBand::HIGH`] band.
    pub fn high(hz: f64) -> Result<Self> {
        Self::new(hz, FrequencyBand::HIGH)
    }

    /// Returns the frequency value in Hz.
    pub fn hz(&self) -> f64 {
        self.hz
    }

    /// Band this frequency was validated against.
    pub fn band(&self) -> FrequencyBand {
        self.band
    }
}

impl From<Note> for Frequency {
    /// Equal-tempered notes are always positive and finite, so they land in the unbounded band.
    fn from(note: Note) -> Self {
        Frequency {
            hz: note.pitch,
            band: FrequencyBand::UNBOUNDED,
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Hz", self.hz)
    }
}

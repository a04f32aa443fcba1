use std::fmt;
use std::str::FromStr;

use crate::error::SynthError;

/// Oscillator waveform a sound is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum WaveformKind {
    Sine,
    /// Sign of a sine: ±1, with 0 at zero crossings
    Square,
    Sawtooth,
    Triangle,
    /// Pulse at the default 50% duty cycle
    Pulse,
    /// Uniform white noise in [-1, 1]
    Noise,
}

impl WaveformKind {
    /// Every waveform, in declaration order.
    pub const ALL: [WaveformKind; 6] = [
        WaveformKind::Sine,
        WaveformKind::Square,
        WaveformKind::Sawtooth,
        WaveformKind::Triangle,
        WaveformKind::Pulse,
        WaveformKind::Noise,
    ];

    /// Lowercase name accepted by `FromStr`.
    pub fn name(&self) -> &'static str {
        match self {
            WaveformKind::Sine => "sine",
            WaveformKind::Square => "square",
            WaveformKind::Sawtooth => "sawtooth",
            WaveformKind::Triangle => "triangle",
            WaveformKind::Pulse => "pulse",
            WaveformKind::Noise => "noise",
        }
    }

    /// Whether repeated renders of this kind give identical buffers.
    pub fn is_deterministic(&self) -> bool {
        !matches!(self, WaveformKind::Noise)
    }
}

impl fmt::Display for WaveformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WaveformKind {
    type Err = SynthError;

    /// Parses a waveform name, ignoring case.
    ///
    /// ```
    /// use toneforge::WaveformKind;
    ///
    /// assert_eq!("Pulse".parse::<WaveformKind>().unwrap(), WaveformKind::Pulse);
    /// assert!("organ".parse::<WaveformKind>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        WaveformKind::ALL
            .into_iter()
            .find(|kind| kind.name() == normalized)
            .ok_or_else(|| SynthError::InvalidWaveformKind(s.to_string()))
    }
}

impl TryFrom<&str> for WaveformKind {
    type Error = SynthError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

//! Error types for sound construction and rendering.

use thiserror::Error;

/// Errors raised while building sound descriptions or combining buffers.
///
/// Validation happens when value types are constructed. A correctly built
/// [`Sound`](crate::Sound) renders without producing any of these.
#[derive(Debug, Error)]
pub enum SynthError {
    /// A constructor received a value outside its accepted range
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Name of the rejected parameter.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// A curve name did not match any known curve kind
    #[error("unknown curve kind: '{0}'")]
    InvalidCurveKind(String),

    /// A waveform name did not match any known waveform kind
    #[error("unknown waveform kind: '{0}'")]
    InvalidWaveformKind(String),

    /// Waveform and envelope buffers handed to the composer differ in length
    #[error("buffer length mismatch: waveform has {waveform} samples, envelope has {envelope}")]
    LengthMismatch {
        /// Length of the waveform buffer.
        waveform: usize,
        /// Length of the envelope buffer.
        envelope: usize,
    },

    /// Writing a WAV file failed
    #[cfg(feature = "wav")]
    #[error("failed to write WAV: {0}")]
    Wav(#[from] hound::Error),
}

impl SynthError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        SynthError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SynthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = SynthError::invalid("sustain level", "1.5 is outside [0, 1]");
        assert_eq!(
            err.to_string(),
            "invalid parameter 'sustain level': 1.5 is outside [0, 1]"
        );

        let err = SynthError::LengthMismatch {
            waveform: 3,
            envelope: 2,
        };
        assert_eq!(
            err.to_string(),
            "buffer length mismatch: waveform has 3 samples, envelope has 2"
        );

        let err = SynthError::InvalidCurveKind("wobble".into());
        assert_eq!(err.to_string(), "unknown curve kind: 'wobble'");
    }
}

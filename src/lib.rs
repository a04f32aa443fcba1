//! Toneforge - offline ADSR synthesis for Rust
//!
//! A sound is described once, as a waveform, a frequency, a duration and an
//! envelope, then rendered into a buffer of `f64` samples. The product of
//! waveform and envelope is scaled by [`HEADROOM`], so every sample lies in
//! [-0.5, 0.5]:
//!
//! ```
//! use toneforge::{CurveKind, Envelope, Frequency, PhaseParameter, SampleRate, Sound,
//!     SustainLevel, Synthesizer, WaveformKind};
//!
//! let envelope = Envelope::new(
//!     PhaseParameter::percent(40.0)?.with_curve(CurveKind::Sine),
//!     PhaseParameter::percent(30.0)?.with_curve(CurveKind::Sine),
//!     PhaseParameter::percent(20.0)?,
//!     PhaseParameter::percent(10.0)?.with_curve(CurveKind::Sine),
//!     SustainLevel::new(0.7)?,
//! );
//! let sound = Sound::new(WaveformKind::Pulse, Frequency::audible(440.0)?, 2.0, envelope)?;
//!
//! let rendering = Synthesizer::new(SampleRate::CdQuality).render(&sound)?;
//! assert_eq!(rendering.samples().len(), 88_200);
//! assert!(rendering.samples().iter().all(|s| (-0.5..=0.5).contains(s)));
//! # Ok::<(), toneforge::SynthError>(())
//! ```
//!
//! The pipeline stages are public on their own: [`shape`] draws a single
//! curve, [`Envelope::generate`] an envelope, [`oscillate`] a waveform and
//! [`compose`] combines the last two.
//!
//! # Features
//!
//! - `macros`: the compile-time `note!` and `frequency!` pitch macros
//! - `wav`: `wav::write_wav` for saving renderings with `hound`
//! - `serde`: `descriptor` types for loading sounds from config files

pub mod envelopes;
pub mod error;
pub mod music;
pub mod noise;
pub mod oscillators;
pub mod sound;
pub mod synth;

#[cfg(feature = "serde")]
pub mod descriptor;
#[cfg(feature = "wav")]
pub mod wav;

// Re-export commonly used types at the crate root
pub use envelopes::{CurveKind, Envelope, PhaseParameter, SustainLevel, shape};
pub use error::{Result, SynthError};
pub use music::{Frequency, FrequencyBand, Note};
pub use oscillators::{WaveformKind, oscillate, oscillate_with_rng};
pub use sound::{SampleRate, Sound};
pub use synth::{HEADROOM, Rendering, Synthesizer, compose};

#[cfg(feature = "macros")]
pub use toneforge_macros::{frequency, note};

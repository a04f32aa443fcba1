//! Noise sources for the `Noise` waveform.

mod white;

pub use white::{white_noise, white_noise_with_rng};

//! Waveform generators.
//!
//! [`oscillate`] renders a whole buffer of one waveform kind. Time starts at
//! sample 0 on every call: no phase is carried over between calls.

pub mod periodic;
mod waveform;

pub use periodic::DEFAULT_DUTY_CYCLE;
pub use waveform::WaveformKind;

use crate::error::{Result, SynthError};
use crate::noise;
use rand::Rng;

/// Renders `sample_count` samples of `kind` at `frequency` Hz.
///
/// Sample `i` is taken at `t = i / sample_rate`. [`WaveformKind::Noise`]
/// ignores the frequency and draws from the thread-local RNG, so its output
/// differs on every call.
///
/// # Examples
///
/// ```
/// use toneforge::{oscillate, WaveformKind};
///
/// let saw = oscillate(WaveformKind::Sawtooth, 1.0, 4, 4);
/// assert_eq!(saw, vec![0.0, 0.5, -1.0, -0.5]);
/// ```
pub fn oscillate(
    kind: WaveformKind,
    frequency: f64,
    sample_count: usize,
    sample_rate: u32,
) -> Vec<f64> {
    oscillate_with_rng(
        kind,
        frequency,
        sample_count,
        sample_rate,
        &mut rand::thread_rng(),
    )
}

/// Like [`oscillate`], drawing [`WaveformKind::Noise`] samples from `rng`.
///
/// ```
/// use rand::SeedableRng;
/// use toneforge::{oscillate_with_rng, WaveformKind};
///
/// let mut a = rand::rngs::StdRng::seed_from_u64(7);
/// let mut b = rand::rngs::StdRng::seed_from_u64(7);
/// assert_eq!(
///     oscillate_with_rng(WaveformKind::Noise, 0.0, 32, 44100, &mut a),
///     oscillate_with_rng(WaveformKind::Noise, 0.0, 32, 44100, &mut b),
/// );
/// ```
pub fn oscillate_with_rng<R: Rng>(
    kind: WaveformKind,
    frequency: f64,
    sample_count: usize,
    sample_rate: u32,
    rng: &mut R,
) -> Vec<f64> {
    let shape: fn(f64) -> f64 = match kind {
        WaveformKind::Sine => periodic::sine,
        WaveformKind::Square => periodic::square,
        WaveformKind::Sawtooth => periodic::sawtooth,
        WaveformKind::Triangle => periodic::triangle,
        WaveformKind::Pulse => |cycles| periodic::pulse(cycles, DEFAULT_DUTY_CYCLE),
        WaveformKind::Noise => return noise::white_noise_with_rng(sample_count, rng),
    };
    cycles(frequency, sample_count, sample_rate)
        .map(shape)
        .collect()
}

/// Pulse wave with a custom duty cycle, the fraction of each cycle spent at +1.
///
/// Fails with `InvalidParameter` unless `duty_cycle` lies in [0, 1].
///
/// ```
/// use toneforge::oscillators::pulse;
///
/// let narrow = pulse(1.0, 4, 4, 0.25).unwrap();
/// assert_eq!(narrow, vec![1.0, -1.0, -1.0, -1.0]);
/// assert!(pulse(1.0, 4, 4, 1.5).is_err());
/// ```
pub fn pulse(
    frequency: f64,
    sample_count: usize,
    sample_rate: u32,
    duty_cycle: f64,
) -> Result<Vec<f64>> {
    if !(0.0..=1.0).contains(&duty_cycle) {
        return Err(SynthError::invalid(
            "duty cycle",
            format!("{duty_cycle} is outside [0, 1]"),
        ));
    }
    Ok(cycles(frequency, sample_count, sample_rate)
        .map(|c| periodic::pulse(c, duty_cycle))
        .collect())
}

/// Cycles elapsed (`f * t`) at each sample index.
fn cycles(hz: f64, sample_count: usize, sample_rate: u32) -> impl Iterator<Item = f64> {
    let rate = f64::from(sample_rate);
    (0..sample_count).map(move |i| hz * (i as f64 / rate))
}

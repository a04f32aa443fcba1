//! Closed-form periodic waveforms.
//!
//! Every function takes the number of cycles elapsed, `f * t`, and returns
//! the waveform's value at that point. Phase starts at zero on sample 0.

use std::f64::consts::TAU;

/// Duty cycle used by [`WaveformKind::Pulse`](super::WaveformKind::Pulse).
pub const DEFAULT_DUTY_CYCLE: f64 = 0.5;

/// Sign of `x` with zero mapping to zero rather than to ±1.
fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

pub fn sine(cycles: f64) -> f64 {
    (TAU * cycles).sin()
}

/// `sign(sin(2πft))`: ±1, or exactly 0 at zero crossings.
pub fn square(cycles: f64) -> f64 {
    sign(sine(cycles))
}

/// `ft - floor(ft + 0.5)`, kept inside [-0.5, 0.5) under rounding.
fn centred_phase(cycles: f64) -> f64 {
    (cycles + 0.5).rem_euclid(1.0) - 0.5
}

/// Rising ramp in [-1, 1), centred so that it crosses zero at whole cycles.
pub fn sawtooth(cycles: f64) -> f64 {
    2.0 * centred_phase(cycles)
}

/// Triangle in [-1, 1], starting at -1 on whole cycles.
pub fn triangle(cycles: f64) -> f64 {
    2.0 * (2.0 * centred_phase(cycles)).abs() - 1.0
}

/// +1 for the first `duty_cycle` fraction of every cycle, -1 for the rest.
pub fn pulse(cycles: f64, duty_cycle: f64) -> f64 {
    if cycles.rem_euclid(1.0) < duty_cycle {
        1.0
    } else {
        -1.0
    }
}

//! Amplitude envelopes and the curves that shape their phases.
//!
//! This module provides the curve engine, the validated phase parameters and
//! the ADSR envelope generator that composes them into one buffer.

mod adsr;
mod curve;
mod parameter;

pub use adsr::{Envelope, EnvelopePhase, PhaseSamples, proportional};
pub use curve::{CurveKind, LOG_FLOOR, shape};
pub use parameter::{PhaseParameter, PhaseTime, SustainLevel};

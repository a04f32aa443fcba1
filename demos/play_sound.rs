//! Renders a two second pulse at A4 and plays it on the default output device.
//!
//! Run with `RUST_LOG=debug` to see the render spans, then read the sample
//! table printed afterwards.

mod common;

use toneforge::{CurveKind, Envelope, Frequency, PhaseParameter, Sound, SustainLevel, WaveformKind};

fn main() -> Result<(), anyhow::Error> {
    common::init_tracing();

    let envelope = Envelope::new(
        PhaseParameter::percent(40.0)?.with_curve(CurveKind::Sine),
        PhaseParameter::percent(30.0)?.with_curve(CurveKind::Sine),
        PhaseParameter::percent(20.0)?,
        PhaseParameter::percent(10.0)?.with_curve(CurveKind::Sine),
        SustainLevel::new(0.7)?,
    );
    let frequency = Frequency::audible(440.0)?;
    let sound = Sound::new(WaveformKind::Pulse, frequency, 2.0, envelope)?;

    let rendering = common::play_sound(&sound)?;
    print!("{}", rendering.sample_table(20));

    Ok(())
}

//! Renders a short sine kick drum at 192 kHz and saves it as `files/kick.wav`.

mod common;

use std::fs;

use toneforge::{
    CurveKind, Envelope, Frequency, PhaseParameter, SampleRate, Sound, SustainLevel, Synthesizer,
    WaveformKind, note,
};

fn main() -> Result<(), anyhow::Error> {
    common::init_tracing();

    let envelope = Envelope::new(
        PhaseParameter::percent(10.0)?.with_curve(CurveKind::Sine),
        PhaseParameter::percent(20.0)?.with_curve(CurveKind::Sine),
        PhaseParameter::percent(50.0)?,
        PhaseParameter::percent(20.0)?.with_curve(CurveKind::Sine),
        SustainLevel::new(0.7)?,
    );

    // B0 sits just under 31 Hz; one octave up lands near a 60 Hz kick.
    let root = note!("B0");
    let frequency = Frequency::bass(root.pitch * 2.0)?;
    let sound = Sound::new(WaveformKind::Sine, frequency, 0.5, envelope)?;

    let rendering = Synthesizer::new(SampleRate::HighResolution).render(&sound)?;
    print!("{}", rendering.sample_table(10));

    fs::create_dir_all("files")?;
    rendering.write_wav("files/kick.wav")?;
    println!("saved files/kick.wav ({:.3} s)", rendering.duration());

    Ok(())
}

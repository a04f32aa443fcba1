//! Loads a sound description from TOML and prints its sample table.
//!
//! Usage: `cargo run --example sound_from_toml --features serde [-- path/to/sound.toml]`
//! Without an argument the bundled `demos/sounds/kick.toml` is used.

mod common;

use std::{env, fs};

use anyhow::Context;
use toneforge::descriptor::SoundDescriptor;
use toneforge::{SampleRate, Sound, Synthesizer};

const BUNDLED: &str = include_str!("sounds/kick.toml");

fn main() -> Result<(), anyhow::Error> {
    common::init_tracing();

    let source = match env::args().nth(1) {
        Some(path) => {
            let context = format!("reading {path}");
            fs::read_to_string(&path).context(context)?
        }
        None => BUNDLED.to_string(),
    };

    let descriptor: SoundDescriptor = toml::from_str(&source).context("parsing sound")?;
    let sound = Sound::try_from(&descriptor)?;
    tracing::info!(
        waveform = %sound.waveform(),
        frequency = %sound.frequency(),
        duration = sound.duration(),
        "loaded sound"
    );

    let rendering = Synthesizer::new(SampleRate::CdQuality).render(&sound)?;
    print!("{}", rendering.sample_table(25));

    Ok(())
}

//! Common utilities for the demos.

use anyhow::Result;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, Sample, SampleFormat, StreamConfig};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;
use toneforge::{Rendering, Sound, Synthesizer};

/// Installs a `tracing` subscriber honoring `RUST_LOG` (defaults to `info`).
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

/// Renders `sound` at the default output device's rate and plays it to the end.
#[allow(dead_code)]
pub fn play_sound(sound: &Sound) -> Result<Rendering> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| anyhow::anyhow!("No output device available"))?;
    let config = device.default_output_config()?;

    let synth = Synthesizer::with_sample_rate(config.sample_rate().0);
    let rendering = synth.render(sound)?;
    let samples = Arc::new(rendering.samples().to_vec());

    let _stream = match config.sample_format() {
        SampleFormat::F32 => create_buffer_stream::<f32>(&device, &config.into(), samples)?,
        SampleFormat::I16 => create_buffer_stream::<i16>(&device, &config.into(), samples)?,
        SampleFormat::U16 => create_buffer_stream::<u16>(&device, &config.into(), samples)?,
        sample_format => anyhow::bail!("Unsupported sample format: {sample_format}"),
    };

    tracing::info!(
        waveform = %sound.waveform(),
        frequency = sound.frequency().hz(),
        duration = sound.duration(),
        "playing"
    );
    // Let the device drain its last buffer before the stream drops.
    let wait = Duration::from_secs_f64(rendering.duration()) + Duration::from_millis(200);
    thread::sleep(wait);

    Ok(rendering)
}

/// Creates an output stream that plays `samples` once, then silence.
#[allow(dead_code)]
fn create_buffer_stream<T>(
    device: &cpal::Device,
    config: &StreamConfig,
    samples: Arc<Vec<f64>>,
) -> Result<cpal::Stream>
where
    T: Sample + FromSample<f64> + cpal::SizedSample,
{
    let channels = config.channels as usize;
    let position = Arc::new(Mutex::new(0usize));

    let stream = device.build_output_stream(
        config,
        move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
            let mut position = position.lock().unwrap();
            for frame in data.chunks_mut(channels) {
                let sample = samples.get(*position).copied().unwrap_or(0.0);
                *position += 1;
                let value: T = T::from_sample(sample);
                for s in frame.iter_mut() {
                    *s = value;
                }
            }
        },
        |err| eprintln!("Audio stream error: {}", err),
        None,
    )?;

    stream.play()?;
    Ok(stream)
}

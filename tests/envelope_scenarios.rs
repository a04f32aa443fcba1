//! End-to-end envelope and rendering scenarios built only from the public API.

use toneforge::envelopes::{EnvelopePhase, proportional};
use toneforge::{
    CurveKind, Envelope, Frequency, HEADROOM, PhaseParameter, SampleRate, Sound, SustainLevel,
    Synthesizer, WaveformKind,
};

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn percent(value: f64) -> PhaseParameter {
    PhaseParameter::percent(value).unwrap()
}

/// A percentage phase following a sine curve.
fn eased(value: f64) -> PhaseParameter {
    percent(value).with_curve(CurveKind::Sine)
}

fn kick_envelope() -> Envelope {
    Envelope::new(
        eased(10.0),
        eased(20.0),
        percent(50.0),
        eased(20.0),
        SustainLevel::new(0.7).unwrap(),
    )
}

#[test]
fn test_kick_phase_boundaries() {
    let envelope = kick_envelope();
    let rate = SampleRate::HighResolution.hz();
    let counts = envelope.phase_samples(rate, 0.5);
    assert_eq!(counts.total, 96_000);
    assert_eq!(counts.of(EnvelopePhase::Attack), 9_600);
    assert_eq!(counts.of(EnvelopePhase::Decay), 19_200);
    assert_eq!(counts.of(EnvelopePhase::Sustain), 48_000);
    assert_eq!(counts.of(EnvelopePhase::Release), 19_200);
    assert_eq!(counts.overlap(), 0);
    assert_eq!(counts.gap(), 0);

    let buffer = envelope.generate(rate, 0.5);
    assert_eq!(buffer.len(), 96_000);
    assert_eq!(buffer[0], 0.0);
    assert!(approx_eq(buffer[9_599], 1.0));
    assert!(approx_eq(buffer[9_600], 1.0));
    assert!(approx_eq(buffer[28_799], 0.7));
    assert!(buffer[28_800..76_800].iter().all(|&v| v == 0.7));
    assert!(approx_eq(buffer[76_800], 0.7));
    assert!(approx_eq(buffer[95_999], 0.0));
}

#[test]
fn test_kick_envelope_is_monotonic_per_phase() {
    let buffer = kick_envelope().generate(48_000, 0.5);
    let attack = &buffer[..2_400];
    let release = &buffer[19_200..];
    assert!(attack.windows(2).all(|w| w[0] <= w[1]));
    assert!(release.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_pulse_sound_fills_exactly() {
    let envelope = Envelope::new(
        eased(40.0),
        eased(30.0),
        percent(20.0),
        eased(10.0),
        SustainLevel::new(0.7).unwrap(),
    );
    let counts = envelope.phase_samples(44_100, 2.0);
    assert_eq!(counts.requested(), counts.total);
    assert_eq!(counts.total, 88_200);

    let sound = Sound::new(
        WaveformKind::Pulse,
        Frequency::audible(440.0).unwrap(),
        2.0,
        envelope,
    )
    .unwrap();
    let rendering = Synthesizer::default().render(&sound).unwrap();
    assert_eq!(rendering.samples().len(), 88_200);
    assert!(rendering.samples().iter().all(|s| s.abs() <= HEADROOM));
    assert_eq!(rendering.samples()[0], 0.0);
}

#[test]
fn test_absolute_phases_ignore_duration() {
    let envelope = Envelope::default()
        .with_attack(PhaseParameter::seconds(0.1).unwrap())
        .with_release(PhaseParameter::seconds(0.1).unwrap());

    let short = envelope.phase_samples(1_000, 0.5);
    let long = envelope.phase_samples(1_000, 2.0);
    assert_eq!(short.attack, long.attack);
    assert_eq!(short.release, 100);
    assert_eq!(long.release, 100);
}

#[test]
fn test_silent_gap_between_sustain_and_release() {
    let envelope = Envelope::default()
        .with_attack(percent(10.0))
        .with_release(percent(10.0))
        .with_sustain_level(SustainLevel::new(0.5).unwrap());

    let buffer = envelope.generate(100, 1.0);
    assert_eq!(buffer.len(), 100);
    // no decay or sustain: everything between attack and release is silent
    assert!(buffer[10..90].iter().all(|&v| v == 0.0));
    assert!(approx_eq(buffer[90], 0.5));
}

#[test]
fn test_proportional_matches_manual_envelope() {
    let curve = CurveKind::Linear;
    let built = proportional(25.0, 25.0, 25.0, 25.0, 0.6, curve).unwrap();
    let manual = Envelope::new(
        percent(25.0),
        percent(25.0),
        percent(25.0),
        percent(25.0),
        SustainLevel::new(0.6).unwrap(),
    );
    assert_eq!(built.generate(800, 1.0), manual.generate(800, 1.0));
    assert!(proportional(25.0, 25.0, 25.0, 125.0, 0.6, curve).is_err());
}

#[test]
fn test_noise_sounds_differ_between_renders() {
    let sound = Sound::new(
        WaveformKind::Noise,
        Frequency::from_hz(0.0).unwrap(),
        0.1,
        Envelope::default().with_sustain(percent(100.0)),
    )
    .unwrap();
    let synth = Synthesizer::new(SampleRate::Low);
    let first = synth.render(&sound).unwrap();
    let second = synth.render(&sound).unwrap();
    assert_eq!(first.samples().len(), second.samples().len());
    assert_ne!(first.samples(), second.samples());
}

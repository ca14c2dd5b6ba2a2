//! Integration tests for ddsynth-synth.
//!
//! Tests cover envelope periodicity and continuity, voice rendering bounds,
//! sequencing through a shared voice, and the one-shot fade path.

use ddsynth_core::{BitDepth, Quantizer, RandomSource, SampleRate, Waveform, beat_seconds};
use ddsynth_synth::{
    AdsrParams, EnvelopeGenerator, EnvelopedVoice, IterativeEnvelope, LengthPolicy, Oscillator,
    apply_gains, ionian_steps, random_melody_steps,
};
use proptest::prelude::*;

fn sr(hz: u32) -> SampleRate {
    SampleRate::new(hz).unwrap()
}

// ---------------------------------------------------------------------------
// 1. Envelope shape properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn closed_form_is_periodic(
        a in 0.01f64..1.0,
        d in 0.01f64..1.0,
        s in 0.01f64..1.0,
        r in 0.01f64..1.0,
        level in 0.0f64..=1.0,
        t in 0.0f64..10.0,
    ) {
        let p = AdsrParams::new(a, d, s, level, r).unwrap();
        let here = p.level_at(t);
        let next = p.level_at(t + p.total());
        prop_assert!((here - next).abs() < 1e-9, "{} vs {}", here, next);
    }

    #[test]
    fn closed_form_stays_in_unit_range(
        a in 0.01f64..1.0,
        d in 0.01f64..1.0,
        s in 0.01f64..1.0,
        r in 0.01f64..1.0,
        level in 0.0f64..=1.0,
        t in -10.0f64..10.0,
    ) {
        let p = AdsrParams::new(a, d, s, level, r).unwrap();
        let v = p.level_at(t);
        prop_assert!((-1e-12..=1.0 + 1e-12).contains(&v), "level {} at t={}", v, t);
    }
}

#[test]
fn closed_form_is_continuous_at_stage_boundaries() {
    let p = AdsrParams::new(0.2, 0.3, 0.4, 0.6, 0.1).unwrap();
    let eps = 1e-9;

    // end of attack meets start of decay at full level
    assert!((p.level_at(0.2 - eps) - 1.0).abs() < 1e-6);
    assert_eq!(p.level_at(0.2), 1.0);

    // end of decay meets sustain
    assert!((p.level_at(0.5 - eps) - 0.6).abs() < 1e-6);
    assert_eq!(p.level_at(0.5), 0.6);

    // release lands on zero at the period boundary
    assert!(p.level_at(1.0 - eps).abs() < 1e-6);
    assert!(p.level_at(1.0).abs() < 1e-12);
}

// ---------------------------------------------------------------------------
// 2. Voices
// ---------------------------------------------------------------------------

#[test]
fn every_waveform_renders_within_full_scale() {
    let rate = sr(8000);
    let env = EnvelopeGenerator::new(0.25, AdsrParams::default(), rate).unwrap();
    let mut rng = RandomSource::seeded(3);
    for w in Waveform::ALL {
        let osc = Oscillator::new(w, 440.0, rate).unwrap();
        let voice = EnvelopedVoice::new(env.clone(), osc).unwrap();
        let out = voice.oscillate(&mut rng);
        assert_eq!(out.len(), 2000);
        assert!(
            out.iter().all(|s| (-32767..=32767).contains(s)),
            "{w} left full scale"
        );
    }
}

#[test]
fn voice_starts_silent_under_attack() {
    let rate = sr(44_100);
    let env = EnvelopeGenerator::new(1.0, AdsrParams::default(), rate).unwrap();
    let osc = Oscillator::new(Waveform::Square, 440.0, rate).unwrap();
    let voice = EnvelopedVoice::new(env, osc).unwrap();
    let out = voice.oscillate(&mut RandomSource::seeded(0));
    assert_eq!(out.len(), 44_100);
    assert_eq!(out[0], 0);
    assert_eq!(out[4420], 32767);
}

#[test]
fn ionian_render_is_eight_notes_long() {
    let rate = sr(8000);
    let env = EnvelopeGenerator::new(0.05, AdsrParams::default(), rate).unwrap();
    let osc = Oscillator::new(Waveform::Sine, 440.0, rate).unwrap();
    let voice = EnvelopedVoice::new(env, osc.clone()).unwrap();

    let steps = ionian_steps(&osc, 2).unwrap();
    let out = voice
        .render_steps(&steps, &mut RandomSource::seeded(0))
        .unwrap();
    assert_eq!(steps.len(), 16);
    assert_eq!(out.len(), 16 * 400);
}

#[test]
fn random_melody_is_deterministic_under_seed() {
    let rate = sr(8000);
    let env = EnvelopeGenerator::new(0.05, AdsrParams::default(), rate).unwrap();
    let osc = Oscillator::new(Waveform::Sine, 440.0, rate).unwrap();
    let voice = EnvelopedVoice::new(env, osc.clone()).unwrap();

    let render = |seed| {
        let mut rng = RandomSource::seeded(seed);
        let steps = random_melody_steps(&osc, 6, &mut rng).unwrap();
        voice.render_steps(&steps, &mut rng).unwrap()
    };
    assert_eq!(render(11), render(11));
}

#[test]
fn reperiodised_envelope_halves_note_length() {
    let rate = sr(8000);
    let env = EnvelopeGenerator::new(beat_seconds(120.0, 1.0), AdsrParams::default(), rate)
        .unwrap();
    let osc = Oscillator::new(Waveform::Sine, 440.0, rate).unwrap();
    let mut voice = EnvelopedVoice::new(env, osc).unwrap();
    let mut rng = RandomSource::seeded(0);

    let quarter = voice.oscillate(&mut rng);
    voice
        .envelope_mut()
        .set_period(beat_seconds(120.0, 2.0))
        .unwrap();
    let eighth = voice.oscillate(&mut rng);

    assert_eq!(quarter.len(), 4000);
    assert_eq!(eighth.len(), 2000);
}

// ---------------------------------------------------------------------------
// 3. One-shot fade
// ---------------------------------------------------------------------------

#[test]
fn fade_tone_quantizes_with_rounding() {
    let rate = sr(1000);
    let osc = Oscillator::new(Waveform::Square, 10.0, rate).unwrap();
    let carrier = osc.oscillate(0.1, &mut RandomSource::seeded(0));

    let shape = AdsrParams::new(0.01, 0.0, 0.08, 1.0, 0.01).unwrap();
    let gains = IterativeEnvelope::new(shape, rate).gains();
    assert_eq!(gains.len(), 10 + 80 + 10);

    let shaped = apply_gains(&carrier, &gains, 1.0, LengthPolicy::Strict).unwrap();
    let q = Quantizer::new(BitDepth::Sixteen)
        .with_amplitude(0.5)
        .with_master(0.8);
    let pcm = q.quantize_all(&shaped).unwrap();

    assert_eq!(pcm.len(), 100);
    assert_eq!(pcm[9], 13107);
    assert_eq!(pcm[99], 0);
}

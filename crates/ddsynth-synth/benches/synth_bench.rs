//! Criterion benchmarks for ddsynth-synth components
//!
//! Run with: cargo bench -p ddsynth-synth

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use ddsynth_core::{RandomSource, SampleRate, Waveform};
use ddsynth_synth::{
    AdsrParams, EnvelopeGenerator, EnvelopedVoice, IterativeEnvelope, Oscillator, ionian_steps,
};

const SAMPLE_RATE: u32 = 44_100;
const DURATIONS: &[f64] = &[0.01, 0.1, 1.0];

fn sr() -> SampleRate {
    SampleRate::new(SAMPLE_RATE).unwrap()
}

// ============================================================================
// Oscillator benchmarks
// ============================================================================

fn bench_oscillator_waveforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("Oscillator");

    for waveform in Waveform::ALL {
        for &seconds in DURATIONS {
            let osc = Oscillator::new(waveform, 440.0, sr()).unwrap();
            let mut rng = RandomSource::seeded(0);

            group.bench_with_input(
                BenchmarkId::new(waveform.name(), seconds),
                &seconds,
                |b, &secs| b.iter(|| black_box(osc.oscillate(secs, &mut rng))),
            );
        }
    }

    group.finish();
}

fn bench_oscillator_phase_modulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("Oscillator_PM");

    let vibrato = Oscillator::new(Waveform::Sine, 8.0, sr()).unwrap();
    let osc = Oscillator::new(Waveform::Sine, 440.0, sr())
        .unwrap()
        .with_modulator(vibrato)
        .unwrap();
    let mut rng = RandomSource::seeded(0);

    for &seconds in DURATIONS {
        group.bench_with_input(BenchmarkId::from_parameter(seconds), &seconds, |b, &secs| {
            b.iter(|| black_box(osc.oscillate(secs, &mut rng)))
        });
    }

    group.finish();
}

// ============================================================================
// Envelope benchmarks
// ============================================================================

fn bench_envelopes(c: &mut Criterion) {
    let mut group = c.benchmark_group("Envelope");

    let periodic = EnvelopeGenerator::new(1.0, AdsrParams::default(), sr()).unwrap();
    group.bench_function("periodic_1s", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for n in 0..periodic.len() {
                sum += periodic.value_at_sample(n);
            }
            black_box(sum)
        })
    });

    let shape = AdsrParams::new(0.01, 0.1, 0.8, 0.7, 0.09).unwrap();
    let iterative = IterativeEnvelope::new(shape, sr());
    group.bench_function("iterative_1s", |b| b.iter(|| black_box(iterative.gains())));

    group.finish();
}

// ============================================================================
// Voice benchmarks
// ============================================================================

fn bench_voice(c: &mut Criterion) {
    let mut group = c.benchmark_group("Voice");

    let env = EnvelopeGenerator::new(0.25, AdsrParams::default(), sr()).unwrap();
    let osc = Oscillator::new(Waveform::Triangle, 440.0, sr()).unwrap();
    let voice = EnvelopedVoice::new(env, osc.clone()).unwrap();
    let steps = ionian_steps(&osc, 1).unwrap();
    let mut rng = RandomSource::seeded(0);

    group.bench_function("single_note", |b| b.iter(|| black_box(voice.oscillate(&mut rng))));
    group.bench_function("ionian_loop", |b| {
        b.iter(|| black_box(voice.render_steps(&steps, &mut rng)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_oscillator_waveforms,
    bench_oscillator_phase_modulation,
    bench_envelopes,
    bench_voice,
);
criterion_main!(benches);

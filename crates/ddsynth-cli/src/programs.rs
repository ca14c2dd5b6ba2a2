//! Program dispatch: one mono buffer per [`Program`].

use ddsynth_config::{Program, RenderConfig};
use ddsynth_core::{
    BitDepth, Quantizer, RandomSource, Result, Sample, SampleRate, Waveform, beat_seconds,
};
use ddsynth_effects::{delay, two_tone};
use ddsynth_synth::{
    AdsrParams, CHROMATIC_STEPS, EnvelopeGenerator, EnvelopedVoice, IONIAN_SKIP,
    IterativeEnvelope, LengthPolicy, Oscillator, apply_gains, constant, ionian_steps,
    random_melody_steps, slope,
};

const BPM: f64 = 120.0;
const TWO_TONE_INTERVAL: i32 = 5;
const VIBRATO_HZ: f64 = 8.0;
const KICK_HZ: f64 = 30.0;
const SNARE_LEVEL: f64 = 0.3;
const FADE_SECONDS: f64 = 0.01;
const FULL_SCALE: Sample = i16::MAX as Sample;
const FLOOR: Sample = i16::MIN as Sample;

/// Render `config.program` as one mono buffer of quantized samples.
///
/// `config` must already be validated.
pub fn render(config: &RenderConfig, rng: &mut RandomSource) -> Result<Vec<Sample>> {
    let sr = config.sample_rate()?;
    let adsr = config.adsr.to_params()?;

    let samples = match config.program {
        Program::Tone => voice(config, sr, adsr, config.waveform)?.oscillate(rng),
        Program::Beats => beats(sr, rng)?,
        Program::Vibrato => {
            let modulator = Oscillator::new(Waveform::Sine, VIBRATO_HZ, sr)?;
            let osc =
                Oscillator::new(config.waveform, config.frequency, sr)?.with_modulator(modulator)?;
            EnvelopedVoice::new(EnvelopeGenerator::new(config.duration, adsr, sr)?, osc)?
                .oscillate(rng)
        }
        Program::TwoTone => two_tone(
            &voice(config, sr, adsr, Waveform::Sine)?,
            TWO_TONE_INTERVAL,
            rng,
        )?,
        Program::TwoToneScale => {
            let v = voice(config, sr, adsr, Waveform::Sine)?;
            let mut out = Vec::new();
            for i in (0..CHROMATIC_STEPS).filter(|i| !IONIAN_SKIP.contains(i)) {
                out.extend(two_tone(&v, i as i32, rng)?);
            }
            out
        }
        Program::Constant => constant(FULL_SCALE, sr.samples_for(config.duration)),
        Program::Slope => slope(FLOOR, FULL_SCALE, 10)?,
        Program::Scale => scale(config, sr, adsr, rng)?,
        Program::Delay => {
            let melody = scale(config, sr, adsr, rng)?;
            let echoed = delay(&melody, sr, config.delay, config.feedback)?;
            if echoed.is_empty() {
                echoed
            } else {
                let whole = echoed.len() as f64 / sr.as_f64();
                EnvelopeGenerator::new(whole, adsr, sr)?.apply(&echoed)
            }
        }
        Program::Random => {
            let v = voice(config, sr, adsr, Waveform::Sine)?;
            let steps = random_melody_steps(v.oscillator(), config.loops, rng)?;
            v.render_steps(&steps, rng)?
        }
        Program::Divider => {
            let env = EnvelopeGenerator::new(beat_seconds(BPM, 1.0), adsr, sr)?;
            let osc = Oscillator::new(Waveform::Sine, config.frequency, sr)?;
            let mut v = EnvelopedVoice::new(env, osc)?;
            let mut out = Vec::new();
            for _ in 0..4 {
                out.extend(v.oscillate(rng));
            }
            v.envelope_mut().set_period(beat_seconds(BPM, 2.0))?;
            for _ in 0..4 {
                out.extend(v.oscillate(rng));
            }
            out
        }
        Program::Fade => fade(config, sr, rng)?,
    };

    tracing::debug!(program = %config.program, samples = samples.len(), "program rendered");
    Ok(samples)
}

fn voice(
    config: &RenderConfig,
    sr: SampleRate,
    adsr: AdsrParams,
    waveform: Waveform,
) -> Result<EnvelopedVoice> {
    let env = EnvelopeGenerator::new(config.duration, adsr, sr)?;
    let osc = Oscillator::new(waveform, config.frequency, sr)?;
    Ok(EnvelopedVoice::new(env, osc)?)
}

fn scale(
    config: &RenderConfig,
    sr: SampleRate,
    adsr: AdsrParams,
    rng: &mut RandomSource,
) -> Result<Vec<Sample>> {
    let v = voice(config, sr, adsr, config.waveform)?;
    let steps = ionian_steps(v.oscillator(), config.loops)?;
    Ok(v.render_steps(&steps, rng)?)
}

fn beats(sr: SampleRate, rng: &mut RandomSource) -> Result<Vec<Sample>> {
    let drum = AdsrParams::fractions(0.001, 0.5, 0.0, 0.0, 1.0 - (0.5 + 0.001))?;
    let beat = beat_seconds(BPM, 1.0);
    let env = EnvelopeGenerator::new(beat, drum, sr)?;

    let kick = EnvelopedVoice::new(env.clone(), Oscillator::new(Waveform::Sine, KICK_HZ, sr)?)?;
    let snare = EnvelopedVoice::new(
        env.with_master_level(SNARE_LEVEL),
        Oscillator::new(Waveform::Noise, 440.0, sr)?,
    )?;

    let mut out = Vec::new();
    for _ in 0..2 {
        out.extend(kick.oscillate(rng));
        out.extend(snare.oscillate(rng));
    }
    Ok(out)
}

fn fade(config: &RenderConfig, sr: SampleRate, rng: &mut RandomSource) -> Result<Vec<Sample>> {
    let carrier =
        Oscillator::new(config.waveform, config.frequency, sr)?.oscillate(config.duration, rng);
    // Notes shorter than two fades split the note between fade in and fade out.
    let ramp = FADE_SECONDS.min(config.duration / 2.0);
    let hold = (config.duration - 2.0 * ramp).max(0.0);
    let shape = AdsrParams::new(ramp, 0.0, hold, 1.0, ramp)?;
    let mut gains = IterativeEnvelope::new(shape, sr).gains();

    // Ramp rounding can overrun the carrier by a sample or two. Trim from the
    // middle so the fade out still reaches zero on the last sample.
    let excess = gains.len().saturating_sub(carrier.len());
    if excess > 0 {
        let mid = (gains.len() - excess) / 2;
        gains.drain(mid..mid + excess);
    }
    let shaped = apply_gains(&carrier, &gains, 1.0, LengthPolicy::Fit)?;

    let q = Quantizer::new(BitDepth::Sixteen)
        .with_amplitude(0.5)
        .with_master(0.8);
    Ok(q.quantize_all(&shaped)?)
}

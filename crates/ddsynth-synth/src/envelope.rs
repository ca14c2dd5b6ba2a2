//! ADSR envelope engine.
//!
//! Two evaluation strategies share one parameter type, [`AdsrParams`]:
//!
//! - **Periodic closed form** ([`AdsrParams::level_at`], [`EnvelopeGenerator`]):
//!   the gain is an analytic function of elapsed time wrapped modulo the
//!   envelope period. Durations are fractions of the period and must add up
//!   to exactly 1.
//! - **Iterative accumulation** ([`IterativeEnvelope`]): a one-shot envelope
//!   whose gain ramps by `1 / (sample_rate · stage_duration)` per sample.
//!   Durations are in seconds and zero-length stages are skipped, so the
//!   output length is generally not the sum of the stage lengths.
//!
//! ```text
//!   Level
//!     1.0 ┐  ╱╲
//!         │ ╱  ╲__________
//!     S   │╱              ╲
//!     0.0 └────────────────╲──→ t
//!          A   D     S      R
//! ```

use alloc::vec::Vec;
use libm::{ceil, fmod, trunc};

use ddsynth_core::{Sample, SampleRate, ValidationError};

/// Attack/decay/sustain/release shape.
///
/// `attack`, `decay`, `sustain` and `release` are durations in one unit
/// system: fractions of a period, seconds, or samples. `sustain_level` is a
/// gain in `[0, 1]`. Instances are immutable and always valid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdsrParams {
    attack: f64,
    decay: f64,
    sustain: f64,
    sustain_level: f64,
    release: f64,
}

impl Default for AdsrParams {
    /// 10% attack, no decay, 80% sustain at full level, 10% release.
    fn default() -> Self {
        Self {
            attack: 0.1,
            decay: 0.0,
            sustain: 0.8,
            sustain_level: 1.0,
            release: 0.1,
        }
    }
}

impl AdsrParams {
    /// Create a shape with durations in any single unit.
    pub fn new(
        attack: f64,
        decay: f64,
        sustain: f64,
        sustain_level: f64,
        release: f64,
    ) -> Result<Self, ValidationError> {
        if !(0.0..=1.0).contains(&sustain_level) {
            return Err(ValidationError::SustainLevel(sustain_level));
        }
        for (stage, value) in [
            ("attack", attack),
            ("decay", decay),
            ("sustain", sustain),
            ("release", release),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::StageDuration { stage, value });
            }
        }
        Ok(Self {
            attack,
            decay,
            sustain,
            sustain_level,
            release,
        })
    }

    /// Create a shape whose durations are fractions of one period.
    ///
    /// The four fractions must add up to exactly 1.
    pub fn fractions(
        attack: f64,
        decay: f64,
        sustain: f64,
        sustain_level: f64,
        release: f64,
    ) -> Result<Self, ValidationError> {
        let params = Self::new(attack, decay, sustain, sustain_level, release)?;
        params.ensure_unit_period()?;
        Ok(params)
    }

    fn ensure_unit_period(&self) -> Result<(), ValidationError> {
        let sum = self.total();
        if sum != 1.0 {
            return Err(ValidationError::AdsrFractionSum(sum));
        }
        Ok(())
    }

    /// Attack duration.
    pub fn attack(&self) -> f64 {
        self.attack
    }

    /// Decay duration.
    pub fn decay(&self) -> f64 {
        self.decay
    }

    /// Sustain duration.
    pub fn sustain(&self) -> f64 {
        self.sustain
    }

    /// Sustain gain in `[0, 1]`.
    pub fn sustain_level(&self) -> f64 {
        self.sustain_level
    }

    /// Release duration.
    pub fn release(&self) -> f64 {
        self.release
    }

    /// Sum of the four durations, the envelope period.
    pub fn total(&self) -> f64 {
        self.attack + self.decay + self.sustain + self.release
    }

    /// Same shape with every duration multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            attack: self.attack * factor,
            decay: self.decay * factor,
            sustain: self.sustain * factor,
            sustain_level: self.sustain_level,
            release: self.release * factor,
        }
    }

    /// Periodic closed-form gain at elapsed time `t`.
    ///
    /// `t` is wrapped modulo [`total`](Self::total), so the envelope repeats.
    /// A zero-length shape is silent.
    pub fn level_at(&self, t: f64) -> f64 {
        let period = self.total();
        if period <= 0.0 {
            return 0.0;
        }
        let t = rem_euclid(t, period);

        if t < self.attack {
            return (1.0 / self.attack) * (t - self.attack) + 1.0;
        }
        if t < self.attack + self.decay {
            return ((self.sustain_level - 1.0) / self.decay) * (t - self.attack) + 1.0;
        }
        if t < self.attack + self.decay + self.sustain {
            return self.sustain_level;
        }
        let release_start = self.attack + self.decay + self.sustain;
        (-self.sustain_level / self.release) * (t - release_start) + self.sustain_level
    }
}

/// Euclidean remainder, compatible with no_std.
#[inline]
fn rem_euclid(a: f64, b: f64) -> f64 {
    let r = fmod(a, b);
    if r < 0.0 { r + b } else { r }
}

/// Periodic envelope generator evaluated per sample index.
///
/// Durations are fractions of `period` seconds. The per-sample view of the
/// shape is derived once and refreshed by [`set_period`](Self::set_period).
///
/// # Example
///
/// ```rust
/// use ddsynth_core::SampleRate;
/// use ddsynth_synth::{AdsrParams, EnvelopeGenerator};
///
/// let sr = SampleRate::new(1000).unwrap();
/// let eg = EnvelopeGenerator::new(1.0, AdsrParams::default(), sr).unwrap();
///
/// assert_eq!(eg.len(), 1000);
/// assert_eq!(eg.value_at_sample(0), 0.0);
/// assert_eq!(eg.value_at_sample(100), 1.0); // attack ends at 10%
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EnvelopeGenerator {
    params: AdsrParams,
    period: f64,
    sample_rate: SampleRate,
    master_level: f64,
    ctrl_in_samples: AdsrParams,
}

impl EnvelopeGenerator {
    /// Create a generator over `period` seconds at unit master level.
    pub fn new(
        period: f64,
        params: AdsrParams,
        sample_rate: SampleRate,
    ) -> Result<Self, ValidationError> {
        params.ensure_unit_period()?;
        let period = validate_period(period)?;
        let mut eg = Self {
            params,
            period,
            sample_rate,
            master_level: 1.0,
            ctrl_in_samples: params,
        };
        eg.recalculate();
        Ok(eg)
    }

    /// Set the master level applied on top of the envelope gain.
    pub fn with_master_level(mut self, level: f64) -> Self {
        self.master_level = level;
        self
    }

    /// Change the period and refresh the per-sample shape.
    pub fn set_period(&mut self, period: f64) -> Result<(), ValidationError> {
        self.period = validate_period(period)?;
        self.recalculate();
        Ok(())
    }

    fn recalculate(&mut self) {
        let n_samples = self.period * self.sample_rate.as_f64();
        self.ctrl_in_samples = self.params.scaled(n_samples);
    }

    /// Shape as fractions of the period.
    pub fn params(&self) -> &AdsrParams {
        &self.params
    }

    /// Shape with durations converted to sample counts.
    pub fn ctrl_in_samples(&self) -> &AdsrParams {
        &self.ctrl_in_samples
    }

    /// Period in seconds.
    pub fn period(&self) -> f64 {
        self.period
    }

    /// Sample rate.
    pub fn sample_rate(&self) -> SampleRate {
        self.sample_rate
    }

    /// Master level.
    pub fn master_level(&self) -> f64 {
        self.master_level
    }

    /// Number of whole samples in one period.
    pub fn len(&self) -> usize {
        self.sample_rate.samples_for(self.period)
    }

    /// Whether one period holds no whole sample.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Envelope gain at sample index `n`, excluding the master level.
    #[inline]
    pub fn value_at_sample(&self, n: usize) -> f64 {
        self.ctrl_in_samples.level_at(n as f64)
    }

    /// Scale quantized samples by `master_level · gain`, truncating toward zero.
    ///
    /// The output has the same length as `samples`; index `i` is scaled by the
    /// gain at sample `i`, wrapping every period.
    pub fn apply(&self, samples: &[Sample]) -> Vec<Sample> {
        samples
            .iter()
            .enumerate()
            .map(|(i, &s)| trunc(f64::from(s) * self.master_level * self.value_at_sample(i)) as Sample)
            .collect()
    }
}

fn validate_period(period: f64) -> Result<f64, ValidationError> {
    if period.is_finite() && period > 0.0 {
        Ok(period)
    } else {
        Err(ValidationError::NonPositive {
            param: "envelope period",
            value: period,
        })
    }
}

/// One-shot envelope built by per-sample accumulation.
///
/// Durations are in seconds. Stage rules:
///
/// - attack of 0 starts at full gain
/// - decay of 0 jumps straight to the sustain level
/// - a sustain level of 0 ends the envelope after decay
/// - a release of 0, or a gain already at 0, emits no release samples
///
/// # Example
///
/// ```rust
/// use ddsynth_core::SampleRate;
/// use ddsynth_synth::{AdsrParams, IterativeEnvelope};
///
/// let sr = SampleRate::new(100).unwrap();
/// let params = AdsrParams::new(0.0, 0.0, 0.5, 0.8, 0.0).unwrap();
/// let gains = IterativeEnvelope::new(params, sr).gains();
/// assert_eq!(gains, vec![0.8; 50]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterativeEnvelope {
    params: AdsrParams,
    sample_rate: SampleRate,
}

impl IterativeEnvelope {
    /// Create an iterative envelope with durations in seconds.
    pub fn new(params: AdsrParams, sample_rate: SampleRate) -> Self {
        Self {
            params,
            sample_rate,
        }
    }

    /// Shape with durations in seconds.
    pub fn params(&self) -> &AdsrParams {
        &self.params
    }

    /// Compute the gain sequence.
    pub fn gains(&self) -> Vec<f64> {
        let p = &self.params;
        let sr = self.sample_rate.as_f64();
        let mut gains = Vec::new();

        if p.attack > 0.0 {
            ramp(&mut gains, 0.0, 1.0, sr * p.attack);
        }

        if p.decay > 0.0 && p.sustain_level < 1.0 {
            ramp(&mut gains, 1.0, p.sustain_level, sr * p.decay);
        }

        let gain = p.sustain_level;
        if gain == 0.0 {
            return gains;
        }

        let hold = self.sample_rate.samples_for(p.sustain);
        gains.extend(core::iter::repeat_n(gain, hold));

        if p.release > 0.0 {
            ramp(&mut gains, gain, 0.0, sr * p.release);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!("iterative envelope: {} gains", gains.len());

        gains
    }
}

/// Append a linear ramp from `from` toward `to` moving `1 / stage_samples`
/// per sample. The final sample lands exactly on `to`.
fn ramp(out: &mut Vec<f64>, from: f64, to: f64, stage_samples: f64) {
    let step = 1.0 / stage_samples;
    let span = (to - from).abs();
    // Tolerate float fuzz like 44100 * 0.01 = 441.00000000000006
    let count = ceil(span * stage_samples - 1e-9).max(1.0) as usize;
    let direction = if to >= from { 1.0 } else { -1.0 };

    out.reserve(count);
    for k in 1..count {
        let g = from + direction * k as f64 * step;
        let overshot = if direction > 0.0 { g >= to } else { g <= to };
        if overshot {
            break;
        }
        out.push(g);
    }
    out.push(to);
}

/// What to do when envelope and carrier lengths differ.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LengthPolicy {
    /// Output matches the carrier: extra gains are dropped, missing gains are
    /// treated as silence.
    #[default]
    Fit,
    /// Any length difference is a [`ValidationError::LengthMismatch`].
    Strict,
}

/// Multiply a float carrier by `master · gain` element-wise.
///
/// Samples are aligned by index from the start of both sequences.
pub fn apply_gains(
    carrier: &[f64],
    gains: &[f64],
    master: f64,
    policy: LengthPolicy,
) -> Result<Vec<f64>, ValidationError> {
    if policy == LengthPolicy::Strict && gains.len() != carrier.len() {
        return Err(ValidationError::LengthMismatch {
            envelope: gains.len(),
            carrier: carrier.len(),
        });
    }
    Ok(carrier
        .iter()
        .enumerate()
        .map(|(i, &c)| c * master * gains.get(i).copied().unwrap_or(0.0))
        .collect())
}

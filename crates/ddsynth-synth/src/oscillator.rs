//! Phase-accumulating oscillators.
//!
//! An [`Oscillator`] is a small value-type configuration: waveform, frequency,
//! level, sample rate and an optional modulator. It keeps no running phase.
//! The angle at sample `n` is computed directly from the sample index:
//!
//! ```text
//! phase(n) = n · frequency · 2π / sample_rate + modulator(n)
//! ```
//!
//! A render is therefore phase-continuous only while the frequency is held.
//! Retuning between renders restarts the phase from sample 0 of the next
//! buffer. Sequencers rely on this: each note is rendered from a derived
//! configuration, see [`Oscillator::with_frequency`].

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::f64::consts::PI;

use ddsynth_core::{RandomSource, SampleRate, ValidationError, Waveform};

/// Oscillator configuration with optional phase modulator.
///
/// # Example
///
/// ```rust
/// use ddsynth_core::{RandomSource, SampleRate, Waveform};
/// use ddsynth_synth::Oscillator;
///
/// let sr = SampleRate::new(44_100).unwrap();
/// let osc = Oscillator::new(Waveform::Sine, 440.0, sr).unwrap();
///
/// let mut rng = RandomSource::seeded(0);
/// let samples = osc.oscillate(1.0, &mut rng);
/// assert_eq!(samples.len(), 44_100);
/// assert_eq!(samples[0], 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Oscillator {
    waveform: Waveform,
    frequency: f64,
    level: f64,
    sample_rate: SampleRate,
    modulator: Option<Box<Oscillator>>,
}

impl Oscillator {
    /// Create an unmodulated oscillator at unit level.
    pub fn new(
        waveform: Waveform,
        frequency: f64,
        sample_rate: SampleRate,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            waveform,
            frequency: validate_frequency(frequency)?,
            level: 1.0,
            sample_rate,
            modulator: None,
        })
    }

    /// Derived configuration at a new frequency, sharing everything else.
    pub fn with_frequency(&self, frequency: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            frequency: validate_frequency(frequency)?,
            ..self.clone()
        })
    }

    /// Set the output level.
    pub fn with_level(mut self, level: f64) -> Self {
        self.level = level;
        self
    }

    /// Attach a phase modulator. Its output is added to the phase in radians.
    pub fn with_modulator(mut self, modulator: Oscillator) -> Result<Self, ValidationError> {
        self.sample_rate.ensure_matches(modulator.sample_rate)?;
        self.modulator = Some(Box::new(modulator));
        Ok(self)
    }

    /// Waveform selector.
    pub fn waveform(&self) -> Waveform {
        self.waveform
    }

    /// Frequency in Hz.
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Output level.
    pub fn level(&self) -> f64 {
        self.level
    }

    /// Sample rate.
    pub fn sample_rate(&self) -> SampleRate {
        self.sample_rate
    }

    /// Modulator, if any.
    pub fn modulator(&self) -> Option<&Oscillator> {
        self.modulator.as_deref()
    }

    /// Phase advance per sample in radians.
    pub fn radians_per_sample(&self) -> f64 {
        self.frequency * 2.0 * PI / self.sample_rate.as_f64()
    }

    /// Amplitude at sample index `n`.
    #[inline]
    pub fn value_at_sample(&self, n: usize, rng: &mut RandomSource) -> f64 {
        let modulation = match &self.modulator {
            Some(m) => m.value_at_sample(n, rng),
            None => 0.0,
        };
        let phase = n as f64 * self.frequency * 2.0 * PI / self.sample_rate.as_f64() + modulation;
        self.level * self.waveform.evaluate(phase, rng)
    }

    /// Render `seconds` worth of samples starting at index 0.
    pub fn oscillate(&self, seconds: f64, rng: &mut RandomSource) -> Vec<f64> {
        let count = self.sample_rate.samples_for(seconds);
        (0..count).map(|n| self.value_at_sample(n, rng)).collect()
    }
}

fn validate_frequency(frequency: f64) -> Result<f64, ValidationError> {
    if frequency.is_finite() && frequency > 0.0 {
        Ok(frequency)
    } else {
        Err(ValidationError::NonPositive {
            param: "frequency",
            value: frequency,
        })
    }
}

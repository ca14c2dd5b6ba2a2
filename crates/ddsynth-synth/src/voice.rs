//! Enveloped voice: one oscillator shaped by one periodic envelope.
//!
//! The voice renders exactly one envelope period. Oscillator and envelope
//! share the sample index, so their periods are independent:
//!
//! ```text
//! out[n] = trunc(output_scale · osc(n) · master · env(n)),  n in [0, sr · period)
//! ```

use alloc::vec::Vec;
use libm::trunc;

use ddsynth_core::{RandomSource, Sample, ValidationError};

use crate::envelope::EnvelopeGenerator;
use crate::oscillator::Oscillator;

/// Default quantization ceiling, the 16-bit full scale.
pub const DEFAULT_OUTPUT_SCALE: f64 = 32767.0;

/// Oscillator and envelope composed into quantized samples.
///
/// The envelope and oscillator are plain values owned by the voice. A
/// sequencer keeps one voice and renders a derived oscillator per note with
/// [`render_with`](Self::render_with) or [`render_steps`](Self::render_steps),
/// leaving the voice itself unchanged.
///
/// # Example
///
/// ```rust
/// use ddsynth_core::{RandomSource, SampleRate, Waveform};
/// use ddsynth_synth::{AdsrParams, EnvelopeGenerator, EnvelopedVoice, Oscillator};
///
/// let sr = SampleRate::new(44_100).unwrap();
/// let env = EnvelopeGenerator::new(0.5, AdsrParams::default(), sr).unwrap();
/// let osc = Oscillator::new(Waveform::Sine, 440.0, sr).unwrap();
/// let voice = EnvelopedVoice::new(env, osc).unwrap();
///
/// let mut rng = RandomSource::seeded(0);
/// let samples = voice.oscillate(&mut rng);
/// assert_eq!(samples.len(), 22_050);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EnvelopedVoice {
    envelope: EnvelopeGenerator,
    oscillator: Oscillator,
    output_scale: f64,
}

impl EnvelopedVoice {
    /// Compose a voice. Both parts must run at the same sample rate.
    pub fn new(
        envelope: EnvelopeGenerator,
        oscillator: Oscillator,
    ) -> Result<Self, ValidationError> {
        envelope
            .sample_rate()
            .ensure_matches(oscillator.sample_rate())?;
        Ok(Self {
            envelope,
            oscillator,
            output_scale: DEFAULT_OUTPUT_SCALE,
        })
    }

    /// Set the quantization ceiling.
    pub fn with_output_scale(mut self, scale: f64) -> Self {
        self.output_scale = scale;
        self
    }

    /// Envelope generator.
    pub fn envelope(&self) -> &EnvelopeGenerator {
        &self.envelope
    }

    /// Mutable envelope generator, for re-periodising between renders.
    pub fn envelope_mut(&mut self) -> &mut EnvelopeGenerator {
        &mut self.envelope
    }

    /// Oscillator.
    pub fn oscillator(&self) -> &Oscillator {
        &self.oscillator
    }

    /// Replace the oscillator.
    pub fn set_oscillator(&mut self, oscillator: Oscillator) -> Result<(), ValidationError> {
        self.envelope
            .sample_rate()
            .ensure_matches(oscillator.sample_rate())?;
        self.oscillator = oscillator;
        Ok(())
    }

    /// Quantization ceiling.
    pub fn output_scale(&self) -> f64 {
        self.output_scale
    }

    /// Render one envelope period with the voice's own oscillator.
    pub fn oscillate(&self, rng: &mut RandomSource) -> Vec<Sample> {
        self.render(&self.oscillator, rng)
    }

    /// Render one envelope period with a different oscillator.
    pub fn render_with(
        &self,
        oscillator: &Oscillator,
        rng: &mut RandomSource,
    ) -> Result<Vec<Sample>, ValidationError> {
        self.envelope
            .sample_rate()
            .ensure_matches(oscillator.sample_rate())?;
        Ok(self.render(oscillator, rng))
    }

    /// Render one period per step and concatenate them in step order.
    pub fn render_steps(
        &self,
        steps: &[Oscillator],
        rng: &mut RandomSource,
    ) -> Result<Vec<Sample>, ValidationError> {
        let mut out = Vec::with_capacity(steps.len() * self.envelope.len());
        for step in steps {
            out.extend(self.render_with(step, rng)?);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(steps = steps.len(), samples = out.len(), "rendered step sequence");

        Ok(out)
    }

    fn render(&self, oscillator: &Oscillator, rng: &mut RandomSource) -> Vec<Sample> {
        let gain = self.output_scale * self.envelope.master_level();
        (0..self.envelope.len())
            .map(|n| {
                let value = gain * oscillator.value_at_sample(n, rng) * self.envelope.value_at_sample(n);
                trunc(value) as Sample
            })
            .collect()
    }
}

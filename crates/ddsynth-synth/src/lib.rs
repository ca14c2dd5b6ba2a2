//! ddsynth Synth - oscillators, envelopes and voices for ddsynth
//!
//! Everything here computes whole buffers ahead of time from a sample
//! index. Nothing keeps running state between renders.
//!
//! # Core Components
//!
//! ## Oscillators
//!
//! - [`Oscillator`] - Waveform, frequency, level and optional phase modulator
//!
//! ```rust
//! use ddsynth_core::{RandomSource, SampleRate, Waveform};
//! use ddsynth_synth::Oscillator;
//!
//! let sr = SampleRate::new(44_100).unwrap();
//! let vibrato = Oscillator::new(Waveform::Sine, 8.0, sr).unwrap();
//! let osc = Oscillator::new(Waveform::Triangle, 440.0, sr)
//!     .unwrap()
//!     .with_modulator(vibrato)
//!     .unwrap();
//!
//! let mut rng = RandomSource::seeded(0);
//! let buffer = osc.oscillate(0.1, &mut rng);
//! assert_eq!(buffer.len(), 4410);
//! ```
//!
//! ## Envelopes
//!
//! - [`AdsrParams`] - Validated ADSR shape
//! - [`EnvelopeGenerator`] - Periodic closed-form envelope over a period in seconds
//! - [`IterativeEnvelope`] - One-shot envelope built by per-sample accumulation
//! - [`apply_gains`] / [`LengthPolicy`] - Apply a gain sequence to a carrier
//!
//! ## Voices and Sequencing
//!
//! - [`EnvelopedVoice`] - One oscillator shaped by one envelope, quantized
//! - [`ionian_steps`] / [`random_melody_steps`] - Derived oscillator configs per note
//!
//! ```rust
//! use ddsynth_core::{RandomSource, SampleRate, Waveform};
//! use ddsynth_synth::{AdsrParams, EnvelopeGenerator, EnvelopedVoice, Oscillator, ionian_steps};
//!
//! let sr = SampleRate::new(8_000).unwrap();
//! let env = EnvelopeGenerator::new(0.1, AdsrParams::default(), sr).unwrap();
//! let osc = Oscillator::new(Waveform::Sine, 440.0, sr).unwrap();
//! let voice = EnvelopedVoice::new(env, osc.clone()).unwrap();
//!
//! let steps = ionian_steps(&osc, 1).unwrap();
//! let mut rng = RandomSource::seeded(0);
//! let melody = voice.render_steps(&steps, &mut rng).unwrap();
//! assert_eq!(melody.len(), steps.len() * 800);
//! ```
//!
//! ## Test Signals
//!
//! - [`constant`] / [`slope`] - Integer signals for checking a PCM sink
//!
//! # Features
//!
//! - `std` (default) - Enables `std` in `ddsynth-core`
//! - `tracing` - Debug logging of render sizes

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod envelope;
pub mod oscillator;
pub mod sequence;
pub mod signal;
pub mod voice;

pub use envelope::{AdsrParams, EnvelopeGenerator, IterativeEnvelope, LengthPolicy, apply_gains};
pub use oscillator::Oscillator;
pub use sequence::{
    CHROMATIC_STEPS, IONIAN_SKIP, ionian_steps, random_melody_steps, scale_intervals,
};
pub use signal::{constant, slope};
pub use voice::{DEFAULT_OUTPUT_SCALE, EnvelopedVoice};

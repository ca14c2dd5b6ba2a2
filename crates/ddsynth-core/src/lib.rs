//! ddsynth Core - primitives for direct digital synthesis
//!
//! This crate holds the stateless building blocks every other ddsynth crate
//! is built on: phase-to-amplitude waveform functions, the injectable random
//! source behind noise, sample-rate bookkeeping, fixed-point quantization and
//! the error taxonomy shared by the whole workspace.
//!
//! # Waveforms
//!
//! - [`Waveform`] - Enumerated selector (Sine, Triangle, Sawtooth, Square, Noise)
//! - [`sine`], [`triangle`], [`sawtooth`], [`square`] - Pure `radians -> amplitude` functions
//! - [`RandomSource`] - Seedable generator used by [`Waveform::Noise`]
//!
//! ```rust
//! use ddsynth_core::{RandomSource, Waveform};
//!
//! let mut rng = RandomSource::seeded(7);
//! let value = Waveform::Triangle.evaluate(core::f64::consts::FRAC_PI_2, &mut rng);
//! assert!((value - 1.0).abs() < 1e-12);
//! ```
//!
//! # Quantization
//!
//! - [`Quantizer`] - Float amplitude to bounded signed integer, fail-fast on overflow
//! - [`check_sample`] - Validate an integer sample against a bit width
//!
//! ```rust
//! use ddsynth_core::{BitDepth, Quantizer};
//!
//! let q = Quantizer::new(BitDepth::Sixteen);
//! assert_eq!(q.quantize(1.0).unwrap(), 32767);
//! assert!(q.with_amplitude(2.0).quantize(1.0).is_err());
//! ```
//!
//! # no_std Support
//!
//! Disable the default `std` feature to build without the standard library.
//! [`RandomSource::from_entropy`] is only available with `std`.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod quantize;
pub mod random;
pub mod sample_rate;
pub mod tempo;
pub mod waveform;

// Re-export main types at crate root
pub use error::{Error, RangeError, Result, ValidationError};
pub use quantize::{BitDepth, Quantizer, Rounding, Sample, check_sample};
pub use random::RandomSource;
pub use sample_rate::SampleRate;
pub use tempo::{beat_seconds, semitone_ratio};
pub use waveform::{Waveform, noise, sawtooth, sine, square, triangle};

//! ddsynth Effects - post-processing over finished sample buffers
//!
//! Every effect here takes a whole quantized buffer and returns a new one.
//! Parameters are validated when the effect is built, never inside the
//! per-sample loop.
//!
//! # Effects
//!
//! - [`FeedbackDelay`] / [`delay`] - Integer echo with a zero-initialised ring
//! - [`two_tone`] / [`mix_pair`] - Floor-averaged mix of two renders
//! - [`interleave`] / [`interleave_strict`] - Per-channel buffers to frame-major PCM
//!
//! ```rust
//! use ddsynth_core::SampleRate;
//! use ddsynth_effects::{delay, interleave};
//!
//! let sr = SampleRate::new(8_000).unwrap();
//! let echoed = delay(&[800, 0, 0, 0], sr, 0.0005, 0.0).unwrap();
//! assert_eq!(echoed, vec![400, 0, 0, 400]);
//!
//! let stereo = interleave(&[echoed.clone(), echoed]);
//! assert_eq!(stereo.len(), 8);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod delay;
pub mod interleave;
pub mod mix;

pub use delay::{FeedbackDelay, delay};
pub use interleave::{interleave, interleave_strict};
pub use mix::{mix_pair, two_tone};

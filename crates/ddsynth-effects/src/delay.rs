//! Integer feedback delay over a whole sample buffer.
//!
//! The ring holds `round(sample_rate · seconds)` samples, all zero at start.
//! A record head and a playback head one slot ahead advance together:
//!
//! ```text
//! playback  = ring[(r + 1) mod L]
//! ring[r]   = x[i] + floor(playback · feedback)
//! y[i]      = floor((x[i] + playback) / 2)
//! r         = (r + 1) mod L
//! ```
//!
//! The playback head reads the slot the record head wrote `L - 1` samples
//! earlier, so the first `L - 1` outputs carry no echo.

use alloc::vec;
use alloc::vec::Vec;
use libm::{floor, round};

use ddsynth_core::{Sample, SampleRate, ValidationError};

/// Feedback delay with a fixed-length integer ring.
///
/// Parameters are validated once at construction. [`process`](Self::process)
/// starts from a zeroed ring on every call, so one instance can be reused
/// across independent buffers.
///
/// # Example
///
/// ```rust
/// use ddsynth_core::SampleRate;
/// use ddsynth_effects::FeedbackDelay;
///
/// let delay = FeedbackDelay::new(SampleRate::new(44_100).unwrap(), 0.5, 0.0).unwrap();
/// assert_eq!(delay.ring_len(), 22_050);
///
/// let out = delay.process(&[1000; 4]);
/// assert_eq!(out, vec![500; 4]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedbackDelay {
    ring_len: usize,
    feedback: f64,
}

impl FeedbackDelay {
    /// Create a delay of `seconds` with `feedback` in `[0, 1]`.
    pub fn new(
        sample_rate: SampleRate,
        seconds: f64,
        feedback: f64,
    ) -> Result<Self, ValidationError> {
        if !(0.0..=1.0).contains(&feedback) {
            return Err(ValidationError::Feedback(feedback));
        }
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(ValidationError::NonPositive {
                param: "delay time",
                value: seconds,
            });
        }
        let ring_len = round(sample_rate.as_f64() * seconds) as usize;
        if ring_len == 0 {
            return Err(ValidationError::EmptyDelayLine {
                seconds,
                sample_rate: sample_rate.hz(),
            });
        }
        Ok(Self { ring_len, feedback })
    }

    /// Ring capacity in samples.
    pub fn ring_len(&self) -> usize {
        self.ring_len
    }

    /// Feedback amount.
    pub fn feedback(&self) -> f64 {
        self.feedback
    }

    /// Run the recurrence over `input`. The output has the same length.
    pub fn process(&self, input: &[Sample]) -> Vec<Sample> {
        let len = self.ring_len;
        let mut ring = vec![0_i64; len];
        let mut record = 0;
        let mut out = Vec::with_capacity(input.len());

        for &x in input {
            let x = i64::from(x);
            let playback_head = (record + 1) % len;
            let playback = ring[playback_head];
            ring[record] = x + floor(playback as f64 * self.feedback) as i64;
            out.push(saturate((x + playback).div_euclid(2)));
            record = playback_head;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(ring = len, samples = out.len(), "feedback delay processed");

        out
    }
}

/// Keep out-of-range values out of range so the sink's range check sees them.
#[inline]
fn saturate(value: i64) -> Sample {
    value.clamp(i64::from(Sample::MIN), i64::from(Sample::MAX)) as Sample
}

/// Apply a feedback delay in one call.
pub fn delay(
    input: &[Sample],
    sample_rate: SampleRate,
    seconds: f64,
    feedback: f64,
) -> Result<Vec<Sample>, ValidationError> {
    Ok(FeedbackDelay::new(sample_rate, seconds, feedback)?.process(input))
}

//! Error taxonomy shared by every ddsynth crate.
//!
//! Three families exist:
//!
//! - [`ValidationError`] - a parameter rejected at construction time
//! - [`RangeError`] - an integer sample that does not fit the configured bit width
//! - [`Error::UnknownSelector`] - an unrecognised waveform or program name
//!
//! Renders are pure and deterministic, so nothing here is retryable. A failed
//! render produces no output.

use alloc::string::String;
use thiserror::Error;

/// Parameter rejected before any sample is computed.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// Sustain level outside `[0, 1]`.
    #[error("sustain level {0} out of range [0, 1]")]
    SustainLevel(f64),

    /// ADSR time fractions do not add up to exactly 1.
    #[error("ADSR time fractions should add to 1, got {0}")]
    AdsrFractionSum(f64),

    /// A stage duration is negative or not finite.
    #[error("ADSR {stage} duration {value} must be a finite, non-negative number")]
    StageDuration {
        /// Stage name (`attack`, `decay`, `sustain`, `release`).
        stage: &'static str,
        /// The rejected duration.
        value: f64,
    },

    /// Delay feedback outside `[0, 1]`.
    #[error("feedback {0} out of range [0, 1]")]
    Feedback(f64),

    /// A quantity that must be strictly positive was zero, negative or NaN.
    #[error("{param} must be positive, got {value}")]
    NonPositive {
        /// Name of the offending parameter.
        param: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The delay time rounds to a ring of zero samples.
    #[error("delay of {seconds}s at {sample_rate} Hz yields an empty delay line")]
    EmptyDelayLine {
        /// Requested delay time in seconds.
        seconds: f64,
        /// Sample rate in Hz.
        sample_rate: u32,
    },

    /// Two sources combined into one buffer run at different rates.
    #[error("sample rates do not agree: {expected} Hz vs {found} Hz")]
    SampleRateMismatch {
        /// Rate of the first source.
        expected: u32,
        /// Rate of the source that disagreed.
        found: u32,
    },

    /// A render asked for zero output channels.
    #[error("channel count must be at least 1")]
    NoChannels,

    /// Envelope and carrier lengths differ under the strict length policy.
    #[error("envelope has {envelope} samples but carrier has {carrier}")]
    LengthMismatch {
        /// Number of envelope gains.
        envelope: usize,
        /// Number of carrier samples.
        carrier: usize,
    },

    /// Channel buffers differ in length under a strict interleave.
    #[error("channel {channel} has {found} samples, expected {expected}")]
    ChannelLength {
        /// Index of the first channel that disagreed.
        channel: usize,
        /// Length of channel 0.
        expected: usize,
        /// Length of the disagreeing channel.
        found: usize,
    },
}

/// A quantized sample that exceeds the signed range of its bit width.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("{value} is beyond signed {bits} bit range")]
pub struct RangeError {
    /// The offending integer sample.
    pub value: i64,
    /// Configured bit width.
    pub bits: u16,
}

/// Top-level error for synthesis operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Construction-time parameter validation failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A sample did not fit the configured bit width.
    #[error(transparent)]
    Range(#[from] RangeError),

    /// Unrecognised selector name at the configuration boundary.
    #[error("unknown {kind}: '{name}'")]
    UnknownSelector {
        /// What was being selected (`waveform`, `program`).
        kind: &'static str,
        /// The name that did not match.
        name: String,
    },
}

impl Error {
    /// Create an unknown-selector error.
    pub fn unknown(kind: &'static str, name: impl Into<String>) -> Self {
        Error::UnknownSelector {
            kind,
            name: name.into(),
        }
    }
}

/// Convenience result type for synthesis operations.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn range_error_display_names_value_and_width() {
        let err = RangeError {
            value: 40000,
            bits: 16,
        };
        assert_eq!(err.to_string(), "40000 is beyond signed 16 bit range");
    }

    #[test]
    fn validation_converts_into_error() {
        let err: Error = ValidationError::Feedback(1.5).into();
        assert!(matches!(err, Error::Validation(ValidationError::Feedback(f)) if f == 1.5));
        assert!(err.to_string().contains("feedback 1.5"));
    }

    #[test]
    fn unknown_selector_display() {
        let err = Error::unknown("waveform", "cosine");
        assert_eq!(err.to_string(), "unknown waveform: 'cosine'");
    }
}

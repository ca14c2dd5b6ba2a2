//! Sample rate newtype.

use core::fmt;

use crate::error::ValidationError;

/// Positive sample rate in samples per second.
///
/// Every component that contributes to one buffer must share the same rate;
/// [`SampleRate::ensure_matches`] is the check used wherever sources combine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SampleRate(u32);

impl SampleRate {
    /// CD-quality rate, the default for every render.
    pub const CD: SampleRate = SampleRate(44_100);

    /// Create a sample rate, rejecting zero.
    pub fn new(hz: u32) -> Result<Self, ValidationError> {
        if hz == 0 {
            return Err(ValidationError::NonPositive {
                param: "sample rate",
                value: 0.0,
            });
        }
        Ok(Self(hz))
    }

    /// Rate in Hz.
    #[inline]
    pub fn hz(self) -> u32 {
        self.0
    }

    /// Rate in Hz as a float.
    #[inline]
    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }

    /// Number of whole samples in `seconds`, truncating any fraction.
    #[inline]
    pub fn samples_for(self, seconds: f64) -> usize {
        (self.as_f64() * seconds).max(0.0) as usize
    }

    /// Fail unless `other` runs at the same rate.
    pub fn ensure_matches(self, other: SampleRate) -> Result<(), ValidationError> {
        if self == other {
            Ok(())
        } else {
            Err(ValidationError::SampleRateMismatch {
                expected: self.0,
                found: other.0,
            })
        }
    }
}

impl Default for SampleRate {
    fn default() -> Self {
        Self::CD
    }
}

impl fmt::Display for SampleRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Hz", self.0)
    }
}

impl TryFrom<u32> for SampleRate {
    type Error = ValidationError;

    fn try_from(hz: u32) -> Result<Self, Self::Error> {
        Self::new(hz)
    }
}

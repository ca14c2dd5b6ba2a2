//! Fixed-point quantization of float amplitudes.
//!
//! Converts an amplitude in the nominal range `[-1, 1]` to a signed integer
//! sample:
//!
//! ```text
//! sample = round(value · full_scale · amplitude · master)
//! ```
//!
//! where `full_scale = 2^(bits-1) - 1` (32767 for 16-bit). A result outside
//! the signed range of the bit width is a [`RangeError`]. Nothing is clipped:
//! an overflow here means the gain staging upstream is wrong, and the whole
//! render is abandoned.

use alloc::vec::Vec;
use libm::{round, trunc};

use crate::error::RangeError;

/// A quantized sample. Wide enough for any supported bit width plus headroom
/// for intermediate sums before the final range check.
pub type Sample = i32;

/// Supported PCM bit widths.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BitDepth {
    /// 8-bit signed.
    Eight,
    /// 16-bit signed, the only width the WAV writer emits by default.
    #[default]
    Sixteen,
    /// 24-bit signed.
    TwentyFour,
}

impl BitDepth {
    /// Number of bits per sample.
    pub fn bits(self) -> u16 {
        match self {
            BitDepth::Eight => 8,
            BitDepth::Sixteen => 16,
            BitDepth::TwentyFour => 24,
        }
    }

    /// Number of bytes per sample.
    pub fn bytes(self) -> u16 {
        self.bits() / 8
    }

    /// Largest representable value, also the quantizer's full scale.
    pub fn max(self) -> i64 {
        (1_i64 << (self.bits() - 1)) - 1
    }

    /// Smallest representable value.
    pub fn min(self) -> i64 {
        -(1_i64 << (self.bits() - 1))
    }

    /// Bit depth for a sample width in bytes.
    pub fn from_bytes(bytes: u16) -> Option<Self> {
        match bytes {
            1 => Some(BitDepth::Eight),
            2 => Some(BitDepth::Sixteen),
            3 => Some(BitDepth::TwentyFour),
            _ => None,
        }
    }
}

/// Float-to-integer conversion rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Rounding {
    /// Round to nearest, halves away from zero.
    #[default]
    Nearest,
    /// Truncate toward zero.
    Truncate,
}

impl Rounding {
    /// Apply the rule to `value`.
    #[inline]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Rounding::Nearest => round(value),
            Rounding::Truncate => trunc(value),
        }
    }
}

/// Validate an integer sample against `depth`.
#[inline]
pub fn check_sample(value: i64, depth: BitDepth) -> Result<Sample, RangeError> {
    if value < depth.min() || value > depth.max() {
        return Err(RangeError {
            value,
            bits: depth.bits(),
        });
    }
    Ok(value as Sample)
}

/// Float amplitude to signed integer converter.
///
/// # Example
///
/// ```rust
/// use ddsynth_core::{BitDepth, Quantizer, Rounding};
///
/// // Half amplitude, 80% master, as used for faded test tones
/// let q = Quantizer::new(BitDepth::Sixteen)
///     .with_amplitude(0.5)
///     .with_master(0.8);
/// assert_eq!(q.quantize(1.0).unwrap(), 13107);
///
/// let t = Quantizer::new(BitDepth::Sixteen).with_rounding(Rounding::Truncate);
/// assert_eq!(t.quantize(-0.00002).unwrap(), 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quantizer {
    depth: BitDepth,
    amplitude: f64,
    master: f64,
    rounding: Rounding,
}

impl Default for Quantizer {
    fn default() -> Self {
        Self::new(BitDepth::Sixteen)
    }
}

impl Quantizer {
    /// Unity-gain quantizer for `depth`, rounding to nearest.
    pub fn new(depth: BitDepth) -> Self {
        Self {
            depth,
            amplitude: 1.0,
            master: 1.0,
            rounding: Rounding::Nearest,
        }
    }

    /// Set the per-signal amplitude factor.
    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Set the master factor.
    pub fn with_master(mut self, master: f64) -> Self {
        self.master = master;
        self
    }

    /// Set the float-to-integer rule.
    pub fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    /// Configured bit depth.
    pub fn depth(&self) -> BitDepth {
        self.depth
    }

    /// Convert one amplitude.
    #[inline]
    pub fn quantize(&self, value: f64) -> Result<Sample, RangeError> {
        let scaled = value * self.depth.max() as f64 * self.amplitude * self.master;
        if scaled.is_nan() {
            return Err(RangeError {
                value: i64::MAX,
                bits: self.depth.bits(),
            });
        }
        // `as` saturates, so infinities land outside every supported range
        check_sample(self.rounding.apply(scaled) as i64, self.depth)
    }

    /// Convert a whole buffer, stopping at the first out-of-range sample.
    pub fn quantize_all(&self, values: &[f64]) -> Result<Vec<Sample>, RangeError> {
        values.iter().map(|&v| self.quantize(v)).collect()
    }

    /// Validate an already-quantized sample against this quantizer's depth.
    #[inline]
    pub fn check(&self, sample: Sample) -> Result<Sample, RangeError> {
        check_sample(i64::from(sample), self.depth)
    }
}

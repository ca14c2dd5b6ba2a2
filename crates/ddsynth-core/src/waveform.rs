//! Phase-to-amplitude waveform functions.
//!
//! Every function maps an angle in radians to an amplitude nominally in
//! `(-1, 1)`. They are pure and reentrant; [`noise`] ignores its phase and
//! draws from a [`RandomSource`] instead.
//!
//! | Waveform | Formula | Period |
//! |----------|---------|--------|
//! | Sine | `sin(x)` | 2π |
//! | Triangle | `(2/π)·asin(sin(x))` | 2π |
//! | Sawtooth | `(2/π)·atan(tan(x))` | π |
//! | Square | `-1` if `sin(x) < 0`, else `+1` | 2π |
//! | Noise | uniform in `[-1, 1)` | - |
//!
//! The sawtooth ramps twice per oscillator cycle because `tan` has period π.
//! That is the established sound of this synthesizer and is kept as is.

use core::f64::consts::FRAC_2_PI;
use core::fmt;
use core::str::FromStr;

use libm::{asin, atan, sin, tan};

use crate::error::Error;
use crate::random::RandomSource;

/// Sine wave.
#[inline]
pub fn sine(x: f64) -> f64 {
    sin(x)
}

/// Sawtooth as `(2/π)·atan(tan(x))`, a linear ramp of period π.
#[inline]
pub fn sawtooth(x: f64) -> f64 {
    FRAC_2_PI * atan(tan(x))
}

/// Square wave. `sin(x) == 0` maps to `+1`.
#[inline]
pub fn square(x: f64) -> f64 {
    if sin(x) < 0.0 { -1.0 } else { 1.0 }
}

/// Triangle wave as `(2/π)·asin(sin(x))`.
#[inline]
pub fn triangle(x: f64) -> f64 {
    FRAC_2_PI * asin(sin(x))
}

/// White noise in `[-1, 1)`. The phase argument is ignored.
#[inline]
pub fn noise(_x: f64, rng: &mut RandomSource) -> f64 {
    rng.bipolar()
}

/// Waveform selector, resolved once at configuration time.
///
/// Parses from the short names used on the command line (`sin`, `tri`, `saw`,
/// `square`, `noise`) as well as the long forms.
///
/// # Example
///
/// ```rust
/// use ddsynth_core::Waveform;
///
/// let w: Waveform = "tri".parse().unwrap();
/// assert_eq!(w, Waveform::Triangle);
/// assert!("cosine".parse::<Waveform>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Waveform {
    /// Pure fundamental tone.
    #[default]
    Sine,
    /// Odd harmonics, softer than the square.
    Triangle,
    /// Ramp with period π.
    Sawtooth,
    /// Two-level wave, `+1` on the non-negative half of the sine.
    Square,
    /// Uniform white noise.
    Noise,
}

impl Waveform {
    /// All waveforms in listing order.
    pub const ALL: [Waveform; 5] = [
        Waveform::Sine,
        Waveform::Triangle,
        Waveform::Sawtooth,
        Waveform::Square,
        Waveform::Noise,
    ];

    /// Evaluate the waveform at `radians`.
    #[inline]
    pub fn evaluate(self, radians: f64, rng: &mut RandomSource) -> f64 {
        match self {
            Waveform::Sine => sine(radians),
            Waveform::Triangle => triangle(radians),
            Waveform::Sawtooth => sawtooth(radians),
            Waveform::Square => square(radians),
            Waveform::Noise => noise(radians, rng),
        }
    }

    /// Short selector name.
    pub fn name(self) -> &'static str {
        match self {
            Waveform::Sine => "sin",
            Waveform::Triangle => "tri",
            Waveform::Sawtooth => "saw",
            Waveform::Square => "square",
            Waveform::Noise => "noise",
        }
    }

    /// Whether the output depends only on phase.
    pub fn is_deterministic(self) -> bool {
        !matches!(self, Waveform::Noise)
    }
}

impl fmt::Display for Waveform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Waveform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sin" | "sine" => Ok(Waveform::Sine),
            "tri" | "triangle" => Ok(Waveform::Triangle),
            "saw" | "sawtooth" => Ok(Waveform::Sawtooth),
            "square" => Ok(Waveform::Square),
            "noise" => Ok(Waveform::Noise),
            other => Err(Error::unknown("waveform", other)),
        }
    }
}

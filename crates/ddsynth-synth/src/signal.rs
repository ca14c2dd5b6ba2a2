//! Integer test signals that bypass the oscillator path.

use alloc::vec;
use alloc::vec::Vec;

use ddsynth_core::{Sample, ValidationError};

/// `count` copies of `value`.
pub fn constant(value: Sample, count: usize) -> Vec<Sample> {
    vec![value; count]
}

/// Ramp from `start` toward `stop` (exclusive) in roughly `n` equal steps.
///
/// The step is `(stop - start) div n` with floor division, so the ramp can
/// hold one more sample than `n` when the span does not divide evenly.
///
/// ```rust
/// use ddsynth_synth::slope;
///
/// let ramp = slope(-32768, 32767, 10).unwrap();
/// assert_eq!(ramp.len(), 11);
/// assert_eq!(ramp[0], -32768);
/// assert_eq!(ramp[1], -32768 + 6553);
/// ```
pub fn slope(start: Sample, stop: Sample, n: usize) -> Result<Vec<Sample>, ValidationError> {
    if n == 0 {
        return Err(ValidationError::NonPositive {
            param: "slope sample count",
            value: 0.0,
        });
    }
    let span = i64::from(stop) - i64::from(start);
    let step = span.div_euclid(n as i64);
    if step == 0 {
        return Err(ValidationError::NonPositive {
            param: "slope step",
            value: 0.0,
        });
    }

    let mut out = Vec::new();
    let mut value = i64::from(start);
    let stop = i64::from(stop);
    while (step > 0 && value < stop) || (step < 0 && value > stop) {
        out.push(value as Sample);
        value += step;
    }
    Ok(out)
}

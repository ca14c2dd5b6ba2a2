//! Tempo and pitch-interval helpers for note sequencing.

use libm::pow;

/// Length in seconds of one note at `bpm`, with `division` notes per beat.
///
/// # Example
///
/// ```rust
/// use ddsynth_core::beat_seconds;
///
/// // At 120 BPM a quarter note lasts half a second, an eighth a quarter second
/// assert!((beat_seconds(120.0, 1.0) - 0.5).abs() < 1e-12);
/// assert!((beat_seconds(120.0, 2.0) - 0.25).abs() < 1e-12);
/// ```
#[inline]
pub fn beat_seconds(bpm: f64, division: f64) -> f64 {
    60.0 / (bpm * division)
}

/// Equal-tempered frequency ratio for an interval of `semitones`.
///
/// # Example
///
/// ```rust
/// use ddsynth_core::semitone_ratio;
///
/// assert!((semitone_ratio(12) - 2.0).abs() < 1e-12);
/// assert!((semitone_ratio(-12) - 0.5).abs() < 1e-12);
/// ```
#[inline]
pub fn semitone_ratio(semitones: i32) -> f64 {
    pow(2.0, f64::from(semitones) / 12.0)
}

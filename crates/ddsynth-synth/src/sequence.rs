//! Fixed-duration note sequencers.
//!
//! Sequencers never retune an oscillator in place. They take an immutable
//! base configuration and return one derived [`Oscillator`] per note, which
//! an [`EnvelopedVoice`](crate::EnvelopedVoice) renders with
//! [`render_steps`](crate::EnvelopedVoice::render_steps).

use alloc::vec::Vec;

use ddsynth_core::{RandomSource, ValidationError, semitone_ratio};

use crate::oscillator::Oscillator;

/// Number of chromatic steps walked per scale loop.
pub const CHROMATIC_STEPS: usize = 13;

/// Chromatic step indices left out of the ionian scale (the black keys).
pub const IONIAN_SKIP: [usize; 5] = [1, 3, 6, 8, 10];

/// Lowest frequency a random melody may reach before it is reset.
pub const MELODY_FLOOR_HZ: f64 = 55.0;

/// Highest frequency a random melody may reach before it is reset.
pub const MELODY_CEILING_HZ: f64 = 12_000.0;

/// Frequency a random melody restarts from after falling below the floor.
pub const MELODY_LOW_RESET_HZ: f64 = 110.0;

/// Frequency a random melody restarts from after rising above the ceiling.
pub const MELODY_HIGH_RESET_HZ: f64 = 1760.0;

/// Widest random melody jump, in semitones either way.
pub const MELODY_MAX_INTERVAL: i32 = 18;

/// Semitone offsets above the base frequency of each retained scale note.
///
/// The walk raises the pitch before testing the skip set, so the first
/// retained note is one semitone above the base.
///
/// ```rust
/// use ddsynth_synth::scale_intervals;
///
/// let steps: Vec<i32> = scale_intervals().collect();
/// assert_eq!(steps, [1, 3, 5, 6, 8, 10, 12, 13]);
/// ```
pub fn scale_intervals() -> impl Iterator<Item = i32> {
    (0..CHROMATIC_STEPS)
        .filter(|i| !IONIAN_SKIP.contains(i))
        .map(|i| i as i32 + 1)
}

/// Oscillator configs for `loops` passes over the ionian scale.
///
/// Each loop restarts from `base`'s frequency. Frequencies accumulate by
/// repeated multiplication with the semitone ratio.
pub fn ionian_steps(base: &Oscillator, loops: usize) -> Result<Vec<Oscillator>, ValidationError> {
    let ratio = semitone_ratio(1);
    let mut steps = Vec::with_capacity(loops * (CHROMATIC_STEPS - IONIAN_SKIP.len()));
    for _ in 0..loops {
        let mut frequency = base.frequency();
        for i in 0..CHROMATIC_STEPS {
            frequency *= ratio;
            if !IONIAN_SKIP.contains(&i) {
                steps.push(base.with_frequency(frequency)?);
            }
        }
    }
    Ok(steps)
}

/// Oscillator configs for a meandering melody of `loops` notes.
///
/// Every note moves the previous frequency by a uniform random interval in
/// `[-18, 18]` semitones. A note that leaves `[55, 12000]` Hz snaps to a
/// fixed reset frequency instead of being clamped to the bound.
pub fn random_melody_steps(
    base: &Oscillator,
    loops: usize,
    rng: &mut RandomSource,
) -> Result<Vec<Oscillator>, ValidationError> {
    let mut frequency = base.frequency();
    let mut steps = Vec::with_capacity(loops);
    for _ in 0..loops {
        frequency *= semitone_ratio(rng.semitones(MELODY_MAX_INTERVAL));
        frequency = snap_to_range(frequency);
        steps.push(base.with_frequency(frequency)?);
    }
    Ok(steps)
}

fn snap_to_range(frequency: f64) -> f64 {
    if frequency < MELODY_FLOOR_HZ {
        MELODY_LOW_RESET_HZ
    } else if frequency > MELODY_CEILING_HZ {
        MELODY_HIGH_RESET_HZ
    } else {
        frequency
    }
}

//! Pairwise mixing of quantized buffers.

use alloc::vec::Vec;

use ddsynth_core::{RandomSource, Sample, ValidationError, semitone_ratio};
use ddsynth_synth::EnvelopedVoice;

/// Average two buffers sample by sample with floor division.
///
/// The result is as long as the shorter input.
///
/// ```rust
/// use ddsynth_effects::mix_pair;
///
/// assert_eq!(mix_pair(&[4, 3, -3], &[4, 0, 0]), vec![4, 1, -2]);
/// ```
pub fn mix_pair(a: &[Sample], b: &[Sample]) -> Vec<Sample> {
    a.iter()
        .zip(b)
        .map(|(&x, &y)| (i64::from(x) + i64::from(y)).div_euclid(2) as Sample)
        .collect()
}

/// Render `voice` at its own frequency and `interval` semitones away, then
/// mix the two renders.
///
/// Both renders share the voice's envelope, so they have equal length.
pub fn two_tone(
    voice: &EnvelopedVoice,
    interval: i32,
    rng: &mut RandomSource,
) -> Result<Vec<Sample>, ValidationError> {
    let base = voice.oscillator();
    let upper = base.with_frequency(base.frequency() * semitone_ratio(interval))?;

    let first = voice.oscillate(rng);
    let second = voice.render_with(&upper, rng)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(interval, samples = first.len(), "two-tone mix");

    Ok(mix_pair(&first, &second))
}

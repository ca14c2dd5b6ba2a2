//! Frame-major channel interleaving.
//!
//! `C` per-channel buffers become one sequence
//! `ch0[0], ch1[0], .., chC-1[0], ch0[1], ..`. When lengths differ,
//! [`interleave`] stops at the shortest channel and
//! [`interleave_strict`] refuses.

use alloc::vec::Vec;

use ddsynth_core::{Sample, ValidationError};

/// Interleave channels, truncating every channel to the shortest one.
///
/// ```rust
/// use ddsynth_effects::interleave;
///
/// let left = [1, 2, 3];
/// let right = [-1, -2];
/// assert_eq!(interleave(&[&left[..], &right[..]]), vec![1, -1, 2, -2]);
/// ```
pub fn interleave<C: AsRef<[Sample]>>(channels: &[C]) -> Vec<Sample> {
    let frames = channels
        .iter()
        .map(|c| c.as_ref().len())
        .min()
        .unwrap_or(0);
    let mut out = Vec::with_capacity(frames * channels.len());
    for i in 0..frames {
        for channel in channels {
            out.push(channel.as_ref()[i]);
        }
    }
    out
}

/// Interleave channels that must all have the same length.
pub fn interleave_strict<C: AsRef<[Sample]>>(
    channels: &[C],
) -> Result<Vec<Sample>, ValidationError> {
    let Some(first) = channels.first() else {
        return Err(ValidationError::NoChannels);
    };
    let expected = first.as_ref().len();
    for (channel, c) in channels.iter().enumerate().skip(1) {
        let found = c.as_ref().len();
        if found != expected {
            return Err(ValidationError::ChannelLength {
                channel,
                expected,
                found,
            });
        }
    }
    Ok(interleave(channels))
}

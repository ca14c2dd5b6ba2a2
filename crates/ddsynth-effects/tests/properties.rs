//! Property-based tests for ddsynth-effects.
//!
//! Checks delay length preservation and the zero-feedback reduction,
//! mixing symmetry, and interleave ordering under random inputs.

use ddsynth_core::SampleRate;
use ddsynth_effects::{FeedbackDelay, interleave, interleave_strict, mix_pair};
use proptest::prelude::*;

fn pcm16() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-32768i32..=32767, 0..400)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Output length always equals input length.
    #[test]
    fn delay_preserves_length(
        input in pcm16(),
        seconds in 0.001f64..0.05,
        feedback in 0.0f64..=1.0,
    ) {
        let d = FeedbackDelay::new(SampleRate::new(8000).unwrap(), seconds, feedback).unwrap();
        prop_assert_eq!(d.process(&input).len(), input.len());
    }

    /// With no feedback the ring holds raw input, so each output is the
    /// floor-average of the input and the input `L - 1` samples earlier.
    #[test]
    fn zero_feedback_reduces_to_shifted_average(
        input in pcm16(),
        seconds in 0.001f64..0.05,
    ) {
        let d = FeedbackDelay::new(SampleRate::new(8000).unwrap(), seconds, 0.0).unwrap();
        let lag = d.ring_len() - 1;
        let out = d.process(&input);
        for (i, &y) in out.iter().enumerate() {
            let echo = if i >= lag { input[i - lag] } else { 0 };
            let expected = (i64::from(input[i]) + i64::from(echo)).div_euclid(2) as i32;
            prop_assert_eq!(y, expected, "sample {}", i);
        }
    }

    /// Zero-feedback output stays in 16-bit range for 16-bit input.
    #[test]
    fn zero_feedback_never_leaves_pcm16(input in pcm16()) {
        let d = FeedbackDelay::new(SampleRate::new(8000).unwrap(), 0.01, 0.0).unwrap();
        for y in d.process(&input) {
            prop_assert!((-32768..=32767).contains(&y));
        }
    }

    #[test]
    fn mix_is_symmetric(a in pcm16(), b in pcm16()) {
        prop_assert_eq!(mix_pair(&a, &b), mix_pair(&b, &a));
    }

    #[test]
    fn interleave_round_trips_by_stride(left in pcm16(), right in pcm16()) {
        let frames = left.len().min(right.len());
        let out = interleave(&[left.clone(), right.clone()]);
        prop_assert_eq!(out.len(), frames * 2);
        let l: Vec<i32> = out.iter().step_by(2).copied().collect();
        let r: Vec<i32> = out.iter().skip(1).step_by(2).copied().collect();
        prop_assert_eq!(&l[..], &left[..frames]);
        prop_assert_eq!(&r[..], &right[..frames]);
    }

    #[test]
    fn strict_interleave_agrees_on_equal_lengths(a in pcm16()) {
        let b: Vec<i32> = a.iter().map(|x| -(x / 2)).collect();
        prop_assert_eq!(interleave_strict(&[a.clone(), b.clone()]).unwrap(), interleave(&[a, b]));
    }
}

#[test]
fn ring_of_22050_keeps_first_22049_outputs_dry() {
    let sr = SampleRate::new(44_100).unwrap();
    let d = FeedbackDelay::new(sr, 0.5, 0.5).unwrap();
    assert_eq!(d.ring_len(), 22_050);

    let input = vec![2000; 30_000];
    let out = d.process(&input);
    assert!(out[..22_049].iter().all(|&y| y == 1000));
    assert_eq!(out[22_049], 2000);
}

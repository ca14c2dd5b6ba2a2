//! Property-based tests for ddsynth-core primitives.
//!
//! Covers waveform output bounds, the square-wave sign law and quantizer
//! range behaviour using proptest for randomized inputs.

use ddsynth_core::{BitDepth, Quantizer, RandomSource, Rounding, Waveform, square};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Every deterministic waveform stays within [-1, 1] for any finite phase.
    #[test]
    fn waveforms_stay_in_unit_range(x in -1.0e6f64..1.0e6f64) {
        let mut rng = RandomSource::seeded(0);
        for w in Waveform::ALL {
            let v = w.evaluate(x, &mut rng);
            prop_assert!(
                (-1.0..=1.0).contains(&v),
                "{} produced {} at x={}", w, v, x
            );
        }
    }

    /// Noise is strictly below +1 for any seed.
    #[test]
    fn noise_is_half_open(seed in any::<u64>()) {
        let mut rng = RandomSource::seeded(seed);
        for _ in 0..256 {
            let v = Waveform::Noise.evaluate(0.0, &mut rng);
            prop_assert!((-1.0..1.0).contains(&v));
        }
    }

    /// square(x) is +1 exactly when sin(x) >= 0.
    #[test]
    fn square_follows_sine_sign(x in -1.0e4f64..1.0e4f64) {
        let expected = if x.sin() >= 0.0 { 1.0 } else { -1.0 };
        prop_assert_eq!(square(x), expected);
    }

    /// Unit-gain 16-bit quantization of [-1, 1] never leaves [-32767, 32767].
    #[test]
    fn unit_amplitude_quantizes_in_range(a in -1.0f64..=1.0f64, truncate in any::<bool>()) {
        let rounding = if truncate { Rounding::Truncate } else { Rounding::Nearest };
        let q = Quantizer::new(BitDepth::Sixteen).with_rounding(rounding);
        let s = q.quantize(a).unwrap();
        prop_assert!((-32767..=32767).contains(&s));
    }

    /// Gains that push past full scale are always rejected, never clipped.
    #[test]
    fn overdriven_amplitude_is_rejected(a in 1.001f64..4.0f64) {
        let q = Quantizer::new(BitDepth::Sixteen).with_amplitude(a);
        prop_assert!(q.quantize(1.0).is_err());
        prop_assert!(q.quantize(-1.0).is_err());
    }
}

//! Moving-window accumulators against batch computations.

use approx::assert_abs_diff_eq;
use proptest::prelude::*;

use sk_stats::{
    grubbs_critical_value, Alternative, GrubbsOptions, MovingGrubbs, MovingMeanStdev, MovingMinMax,
};

fn batch_mean_var(window: &[f64]) -> (f64, f64) {
    let n = window.len() as f64;
    let mean = window.iter().sum::<f64>() / n;
    if window.len() == 1 {
        return (mean, 0.0);
    }
    let ss: f64 = window.iter().map(|v| (v - mean) * (v - mean)).sum();
    (mean, ss / (n - 1.0))
}

fn trailing(data: &[f64], i: usize, w: usize) -> &[f64] {
    &data[(i + 1).saturating_sub(w)..=i]
}

#[test]
fn mean_stdev_fixture() {
    let mut acc = MovingMeanStdev::new(3).unwrap();
    let out: Vec<_> = [2.0, -5.0, 3.0, 5.0].iter().map(|&x| acc.update(x)).collect();
    let expected = [(2.0, 0.0), (-1.5, 4.9497), (0.0, 4.3589), (1.0, 5.2915)];
    for (v, (mean, stdev)) in out.iter().zip(expected) {
        assert_abs_diff_eq!(v.mean, mean, epsilon = 1e-12);
        assert_abs_diff_eq!(v.stdev, stdev, epsilon = 1e-4);
    }
}

proptest! {
    #[test]
    fn mean_stdev_matches_batch(
        data in prop::collection::vec(-1e3f64..1e3, 1..120),
        w in 1usize..9,
    ) {
        let mut acc = MovingMeanStdev::new(w).unwrap();
        let scale = 1e3;
        for (i, &x) in data.iter().enumerate() {
            let v = acc.update(x);
            let (mean, var) = batch_mean_var(trailing(&data, i, w));
            prop_assert!((v.mean - mean).abs() <= 1e-9 * scale, "mean at {}: {} vs {}", i, v.mean, mean);
            prop_assert!(
                (v.stdev * v.stdev - var).abs() <= 1e-9 * scale * scale,
                "variance at {}: {} vs {}", i, v.stdev * v.stdev, var
            );
        }
    }

    #[test]
    fn isolated_nan_poisons_exactly_one_window(
        data in prop::collection::vec(-1e3f64..1e3, 1..60),
        w in 1usize..8,
        at in any::<prop::sample::Index>(),
    ) {
        let k = at.index(data.len());
        let mut data = data;
        data[k] = f64::NAN;

        let mut acc = MovingMeanStdev::new(w).unwrap();
        for (i, &x) in data.iter().enumerate() {
            let v = acc.update(x);
            let poisoned = i >= k && i < k + w;
            prop_assert_eq!(v.mean.is_nan(), poisoned, "window {}", i);
            // a single-sample window reports zero spread even when poisoned
            prop_assert_eq!(v.stdev.is_nan(), poisoned && w > 1, "window {}", i);
            if !poisoned {
                let (mean, _) = batch_mean_var(trailing(&data, i, w));
                prop_assert!((v.mean - mean).abs() <= 1e-6, "mean at {}: {} vs {}", i, v.mean, mean);
            }
        }
    }

    #[test]
    fn min_max_matches_batch(
        data in prop::collection::vec(
            prop_oneof![
                Just(0.0f64), Just(-0.0), Just(1.0), Just(-1.0), Just(2.5), Just(f64::NAN),
                -10.0f64..10.0,
            ],
            1..80,
        ),
        w in 1usize..7,
    ) {
        let mut acc = MovingMinMax::new(w).unwrap();
        for (i, &x) in data.iter().enumerate() {
            let got = acc.update(x);
            let window = trailing(&data, i, w);
            if window.iter().any(|v| v.is_nan()) {
                prop_assert!(got.min.is_nan() && got.max.is_nan(), "window {}", i);
                continue;
            }
            let min = window
                .iter()
                .copied()
                .fold(f64::INFINITY, |m, v| if v < m || (v == m && v.is_sign_negative()) { v } else { m });
            let max = window
                .iter()
                .copied()
                .fold(f64::NEG_INFINITY, |m, v| if v > m || (v == m && v.is_sign_positive()) { v } else { m });
            prop_assert_eq!(got.min.to_bits(), min.to_bits(), "min at {}", i);
            prop_assert_eq!(got.max.to_bits(), max.to_bits(), "max at {}", i);
        }
    }

    #[test]
    fn grubbs_agrees_with_component_accumulators(
        data in prop::collection::vec(-1e2f64..1e2, 3..80),
        w in 3usize..10,
    ) {
        let mut test = MovingGrubbs::new(w).unwrap();
        let mut ms = MovingMeanStdev::new(w).unwrap();
        let mut mm = MovingMinMax::new(w).unwrap();
        for (i, &x) in data.iter().enumerate() {
            let r = test.update(x);
            let a = ms.update(x);
            let b = mm.update(x);
            if i + 1 < w {
                prop_assert!(r.is_none());
                continue;
            }
            let r = r.unwrap();
            prop_assert_eq!(r.mean.to_bits(), a.mean.to_bits());
            prop_assert_eq!(r.sd.to_bits(), a.stdev.to_bits());
            prop_assert_eq!((r.min, r.max), (b.min, b.max));
            prop_assert_eq!(r.df, w - 2);
            prop_assert_eq!(r.rejected, r.statistic > r.critical_value);
        }
    }

    #[test]
    fn critical_value_orders(w in 3usize..200) {
        let two = grubbs_critical_value(w, 0.05, Alternative::TwoSided).unwrap();
        let one = grubbs_critical_value(w, 0.05, Alternative::Max).unwrap();
        let strict = grubbs_critical_value(w, 0.01, Alternative::TwoSided).unwrap();
        prop_assert!(one < two);
        prop_assert!(two < strict);
        // G can never exceed (W - 1) / sqrt(W)
        let bound = (w as f64 - 1.0) / (w as f64).sqrt();
        prop_assert!(strict < bound);
    }
}

#[test]
fn grubbs_table_values() {
    let g10 = MovingGrubbs::new(10).unwrap().critical_value();
    let g20 = MovingGrubbs::new(20).unwrap().critical_value();
    assert_abs_diff_eq!(g10, 2.290, epsilon = 1e-3);
    assert_abs_diff_eq!(g20, 2.708, epsilon = 1e-3);

    let opts = GrubbsOptions::default().with_alternative(Alternative::Min);
    let g10_one_sided = MovingGrubbs::with_options(10, opts).unwrap().critical_value();
    assert_abs_diff_eq!(g10_one_sided, 2.176, epsilon = 1e-3);
}

//! Property and fixture tests for the strided kernels.

use approx::assert_relative_eq;
use nalgebra::DVector;
use num_complex::Complex64;
use proptest::prelude::*;

use sk_blas::{
    drot, drotg, gfill, gfill_ndarray, grev, grev_ndarray, gswap, rotation_from_z, zfill,
};
use sk_core::{stride2offset, Interleaved, Storage};

/// Single-step reference reversal.
fn naive_rev(n: usize, x: &mut [f64], stride: isize, offset: usize) {
    if n == 0 {
        return;
    }
    let mut ix = offset as isize;
    let mut iy = ix + (n as isize - 1) * stride;
    for _ in 0..n / 2 {
        x.swap(ix as usize, iy as usize);
        ix += stride;
        iy -= stride;
    }
}

fn strided_case() -> impl Strategy<Value = (Vec<f64>, usize, isize)> {
    (0usize..40, prop_oneof![Just(1isize), Just(-1), Just(2), Just(-2), Just(3), Just(-3)])
        .prop_flat_map(|(n, stride)| {
            let len = if n == 0 { 1 } else { (n - 1) * stride.unsigned_abs() + 1 };
            (prop::collection::vec(-1e3f64..1e3, len), Just(n), Just(stride))
        })
}

// ─── Reverse ──────────────────────────────────────────────────────────────────

#[test]
fn reverse_fixture() {
    let mut x = vec![4.0, 2.0, -3.0, 5.0, -1.0, 2.0, -5.0, 6.0];
    let out = grev(8, &mut x, 1).clone();
    assert_eq!(out, vec![6.0, -5.0, 2.0, -1.0, 5.0, -3.0, 2.0, 4.0]);
    assert_eq!(x, out);
}

#[test]
fn reverse_dvector_storage() {
    let mut x = DVector::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    grev(5, &mut x, 1);
    assert_eq!(x.as_slice(), &[5.0, 4.0, 3.0, 2.0, 1.0]);
}

proptest! {
    #[test]
    fn reverse_is_an_involution((x, n, stride) in strided_case()) {
        let mut y = x.clone();
        grev(n, y.as_mut_slice(), stride);
        grev(n, y.as_mut_slice(), stride);
        prop_assert_eq!(y, x);
    }

    #[test]
    fn unrolled_reverse_matches_naive((x, n, stride) in strided_case()) {
        let offset = stride2offset(n, stride);
        let mut fast = x.clone();
        let mut slow = x.clone();
        grev_ndarray(n, fast.as_mut_slice(), stride, offset);
        naive_rev(n, &mut slow, stride, offset);
        let fast_bits: Vec<u64> = fast.iter().map(|v| v.to_bits()).collect();
        let slow_bits: Vec<u64> = slow.iter().map(|v| v.to_bits()).collect();
        prop_assert_eq!(fast_bits, slow_bits);
    }

    #[test]
    fn fill_is_idempotent((x, n, stride) in strided_case(), v in -10.0f64..10.0) {
        let mut y = x.clone();
        gfill(n, v, y.as_mut_slice(), stride);
        let offset = stride2offset(n, stride);
        for i in 0..n {
            prop_assert_eq!(y[(offset as isize + i as isize * stride) as usize], v);
        }
        let once = y.clone();
        gfill(n, v, y.as_mut_slice(), stride);
        prop_assert_eq!(y, once);
    }

    #[test]
    fn fill_leaves_unaddressed_elements((x, n, stride) in strided_case()) {
        prop_assume!(stride.abs() > 1);
        let mut y = x.clone();
        gfill_ndarray(n, f64::NAN, y.as_mut_slice(), stride, stride2offset(n, stride));
        let touched = y.iter().filter(|v| v.is_nan()).count();
        prop_assert_eq!(touched, n);
    }

    #[test]
    fn swap_twice_restores((x, n, stride) in strided_case()) {
        let mut a = x.clone();
        let mut b: Vec<f64> = x.iter().map(|v| v * 2.0 + 1.0).collect();
        let b0 = b.clone();
        gswap(n, a.as_mut_slice(), stride, b.as_mut_slice(), -stride);
        gswap(n, a.as_mut_slice(), stride, b.as_mut_slice(), -stride);
        prop_assert_eq!(a, x);
        prop_assert_eq!(b, b0);
    }
}

// ─── Givens rotation ──────────────────────────────────────────────────────────

#[test]
fn rotation_fixture() {
    let g = drotg(0.3, 0.4).to_array();
    let expected = [0.5, 1.0 / 0.6, 0.6, 0.8];
    for (v, e) in g.iter().zip(expected.iter()) {
        assert!(
            (v - e).abs() <= 1.5 * f64::EPSILON * e.abs(),
            "got {v}, expected {e}"
        );
    }
}

#[test]
fn degenerate_rotation_is_exact() {
    assert_eq!(drotg(0.0, 0.0).to_array(), [0.0, 0.0, 1.0, 0.0]);
}

proptest! {
    #[test]
    fn rotation_reconstructs_inputs(a in -1e6f64..1e6, b in -1e6f64..1e6) {
        prop_assume!(a != 0.0 || b != 0.0);
        let g = drotg(a, b);
        assert_relative_eq!(g.r * g.c, a, epsilon = 1e-300, max_relative = 1.5 * f64::EPSILON);
        assert_relative_eq!(g.r * g.s, b, epsilon = 1e-300, max_relative = 1.5 * f64::EPSILON);
        assert_relative_eq!(g.c * g.c + g.s * g.s, 1.0, max_relative = 16.0 * f64::EPSILON);
    }

    #[test]
    fn rotation_propagates_nan(x in -1e6f64..1e6) {
        for g in [drotg(f64::NAN, x), drotg(x, f64::NAN)] {
            prop_assert!(g.to_array().iter().all(|v| v.is_nan()));
        }
    }

    #[test]
    fn z_reconstructs_rotation(a in -1e3f64..1e3, b in -1e3f64..1e3) {
        prop_assume!(a != 0.0 || b != 0.0);
        let g = drotg(a, b);
        let (c, s) = rotation_from_z(g.z);
        assert_relative_eq!(c, g.c, epsilon = 1e-7, max_relative = 1e-7);
        assert_relative_eq!(s, g.s, epsilon = 1e-7, max_relative = 1e-7);
    }

    #[test]
    fn applying_rotation_zeroes_second_component(a in -1e3f64..1e3, b in -1e3f64..1e3) {
        let g = drotg(a, b);
        let mut x = [a];
        let mut y = [b];
        drot(1, &mut x, 1, &mut y, 1, g.c, g.s);
        let scale = a.abs().max(b.abs()).max(1.0);
        prop_assert!((x[0] - g.r).abs() <= 1e-12 * scale);
        prop_assert!(y[0].abs() <= 1e-12 * scale);
    }
}

// ─── Paired-component storage ─────────────────────────────────────────────────

#[test]
fn interleaved_reverse_and_fill() {
    let mut buf = vec![1.0, 10.0, 2.0, 20.0, 3.0, 30.0, 4.0, 40.0];
    let mut z = Interleaved::new(&mut buf[..]).unwrap();
    grev(4, &mut z, -1);
    assert_eq!(z.get(0), Complex64::new(4.0, 40.0));
    zfill(2, Complex64::new(0.0, -1.0), &mut z, 2);
    assert_eq!(buf, vec![0.0, -1.0, 3.0, 30.0, 0.0, -1.0, 1.0, 10.0]);
}

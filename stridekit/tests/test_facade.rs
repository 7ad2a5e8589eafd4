//! End-to-end use of the re-exported crates.

use approx::assert_relative_eq;
use num_complex::Complex64;

use stridekit::blas::{drot, drotg, zfill, StridedVecMut};
use stridekit::core::{Error, Interleaved, Storage, Strided};
use stridekit::stats::{Alternative, GrubbsOptions, MovingGrubbs};

#[test]
fn qr_style_annihilation_over_strided_rows() {
    // two rows of a 2x3 row-major matrix, the second row's head zeroed by
    // one rotation applied across both rows
    let mut m = vec![3.0, 1.0, 2.0, 4.0, 5.0, 6.0];
    let (a, b) = (m[0], m[3]);
    let g = drotg(a, b);
    let (top, bottom) = m.split_at_mut(3);
    drot(3, top, 1, bottom, 1, g.c, g.s);
    assert_relative_eq!(m[0], 5.0, max_relative = 1e-12);
    assert!(m[3].abs() < 1e-12);
}

#[test]
fn checked_view_reports_bad_layout() {
    let mut x = vec![0.0; 4];
    let err = StridedVecMut::with_layout(&mut x, Strided::new(3, 2, 0)).unwrap_err();
    assert!(matches!(err, Error::IndexOutOfRange { index: 4, size: 4 }));
}

#[test]
fn complex_fill_through_interleaved_storage() {
    let mut buf = vec![0.0; 6];
    let mut z = Interleaved::new(&mut buf[..]).unwrap();
    zfill(3, Complex64::new(1.0, -1.0), &mut z, 1);
    assert_eq!(Storage::get(&z, 2), Complex64::new(1.0, -1.0));
    assert_eq!(buf, vec![1.0, -1.0, 1.0, -1.0, 1.0, -1.0]);
}

#[test]
fn grubbs_from_facade() {
    let opts = GrubbsOptions::default()
        .with_alpha(0.01)
        .with_alternative(Alternative::Max);
    let mut test = MovingGrubbs::with_options(6, opts).unwrap();
    let verdicts: Vec<bool> = [10.0, 11.0, 9.5, 10.5, 10.2, 40.0]
        .iter()
        .filter_map(|&x| test.update(x))
        .map(|r| r.rejected)
        .collect();
    assert_eq!(verdicts, vec![true]);
}

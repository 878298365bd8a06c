// Test intent: verifies the layout of the complex and reordered real tables.

use srfft::twiddle::{fill_complex_twiddles, fill_real_twiddles};
use srfft::{populate_complex_twiddles, populate_real_twiddles, Complex64, Direction, FftError};

fn expected(exponent: usize, n: usize, direction: Direction) -> Complex64 {
    let sign = if direction.is_forward() { -1.0 } else { 1.0 };
    let theta = sign * 2.0 * std::f64::consts::PI * exponent as f64 / n as f64;
    Complex64::new(theta.cos(), theta.sin())
}

#[test]
fn complex_table_is_natural_order() {
    for direction in [Direction::Forward, Direction::Inverse] {
        let n = 64;
        let mut table = vec![Complex64::zero(); n];
        populate_complex_twiddles(n, &mut table, direction).unwrap();
        for (k, w) in table.iter().enumerate() {
            assert!((*w - expected(k, n, direction)).norm() < 1e-12, "k = {k}");
        }
    }
}

#[test]
fn real_table_splits_even_and_odd_exponents() {
    let n = 32;
    let mut table = vec![Complex64::zero(); n];
    populate_real_twiddles(n, &mut table, Direction::Forward).unwrap();
    for k in 0..n / 2 {
        assert!((table[k] - expected(2 * k, n, Direction::Forward)).norm() < 1e-12);
    }
    // Slot N/2 holds exponent N+1, which is exponent 1 modulo N.
    assert!((table[n / 2] - expected(1, n, Direction::Forward)).norm() < 1e-12);
    for k in n / 2..n {
        assert!((table[k] - expected(2 * k + 1, n, Direction::Forward)).norm() < 1e-12);
    }
}

#[test]
fn real_table_first_half_is_half_size_complex_table() {
    let n = 128;
    let mut real = vec![Complex64::zero(); n];
    let mut complex = vec![Complex64::zero(); n / 2];
    fill_real_twiddles(&mut real, Direction::Inverse);
    fill_complex_twiddles(&mut complex, Direction::Inverse);
    for (a, b) in real[..n / 2].iter().zip(complex.iter()) {
        assert!((*a - *b).norm() < 1e-12);
    }
}

#[test]
fn directions_are_conjugates() {
    let n = 16;
    let mut forward = vec![Complex64::zero(); n];
    let mut inverse = vec![Complex64::zero(); n];
    fill_real_twiddles(&mut forward, Direction::Forward);
    fill_real_twiddles(&mut inverse, Direction::Inverse);
    for (f, i) in forward.iter().zip(inverse.iter()) {
        assert!((f.conj() - *i).norm() < 1e-12);
    }
}

#[test]
fn smallest_tables() {
    let mut one = [Complex64::zero(); 1];
    populate_complex_twiddles(1, &mut one, Direction::Forward).unwrap();
    assert_eq!(one[0], Complex64::new(1.0, 0.0));

    let mut two = [Complex64::zero(); 2];
    populate_real_twiddles(2, &mut two, Direction::Inverse).unwrap();
    assert_eq!(two[0], Complex64::new(1.0, 0.0));
    // exponent 3 of 2 is a half turn
    assert!((two[1] - Complex64::new(-1.0, 0.0)).norm() < 1e-12);
}

#[test]
fn rejects_bad_tables() {
    let mut table = vec![Complex64::zero(); 8];
    assert_eq!(
        populate_complex_twiddles(0, &mut table, Direction::Forward),
        Err(FftError::EmptyInput)
    );
    assert_eq!(
        populate_complex_twiddles(16, &mut table, Direction::Forward),
        Err(FftError::MismatchedLengths)
    );
    assert_eq!(
        populate_real_twiddles(7, &mut table[..7], Direction::Forward),
        Err(FftError::OddLength)
    );
    assert_eq!(
        populate_real_twiddles(4, &mut table, Direction::Forward),
        Err(FftError::MismatchedLengths)
    );
}

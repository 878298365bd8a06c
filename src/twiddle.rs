//! Twiddle-factor tables.
//!
//! A table is plain precomputed data owned by the caller. Once filled for a
//! given size and [`Direction`] it is never written again and can be shared by
//! any number of transform calls of that size and direction.

use crate::fft::FftError;
use crate::num::{Complex, Float};
use crate::rotate::Direction;

#[inline(always)]
fn signed_angle<T: Float>(exponent: usize, nfft: usize, direction: Direction) -> T {
    let two = T::one() + T::one();
    let theta = T::from_usize(exponent) * two * T::pi() / T::from_usize(nfft);
    match direction {
        Direction::Forward => -theta,
        Direction::Inverse => theta,
    }
}

/// Fill `table` with `e^(-/+ 2*pi*i*k/N)` for `k in 0..N`, `N = table.len()`.
pub fn fill_complex_twiddles<T: Float>(table: &mut [Complex<T>], direction: Direction) {
    let nfft = table.len();
    for (k, w) in table.iter_mut().enumerate() {
        *w = Complex::expi(signed_angle(k, nfft, direction));
    }
}

/// Fill `table` with the reordered layout used by the real transforms.
///
/// The first half holds the factors for the even exponents `0, 2, 4, ...`,
/// which is exactly the complex table of a transform of size `N/2`. The second
/// half holds the odd exponents: slot `k` in `N/2..N` stores the factor for
/// exponent `2k + 1`, which wraps around to `2(k - N/2) + 1` modulo `N`.
pub fn fill_real_twiddles<T: Float>(table: &mut [Complex<T>], direction: Direction) {
    let nfft = table.len();
    debug_assert!(nfft % 2 == 0);
    let half = nfft / 2;
    let (even, odd) = table.split_at_mut(half);
    for (k, w) in even.iter_mut().enumerate() {
        *w = Complex::expi(signed_angle(2 * k, nfft, direction));
    }
    for (k, w) in odd.iter_mut().enumerate() {
        *w = Complex::expi(signed_angle(2 * (k + half) + 1, nfft, direction));
    }
}

/// Checked variant of [`fill_complex_twiddles`] for a transform of size `nfft`.
pub fn populate_complex_twiddles<T: Float>(
    nfft: usize,
    table: &mut [Complex<T>],
    direction: Direction,
) -> Result<(), FftError> {
    if nfft == 0 {
        return Err(FftError::EmptyInput);
    }
    if table.len() != nfft {
        crate::trace_warn!(
            "complex twiddle table has {} slots, expected {}",
            table.len(),
            nfft
        );
        return Err(FftError::MismatchedLengths);
    }
    fill_complex_twiddles(table, direction);
    Ok(())
}

/// Checked variant of [`fill_real_twiddles`] for a real transform of size `nfft`.
pub fn populate_real_twiddles<T: Float>(
    nfft: usize,
    table: &mut [Complex<T>],
    direction: Direction,
) -> Result<(), FftError> {
    if nfft == 0 {
        return Err(FftError::EmptyInput);
    }
    if nfft % 2 != 0 {
        return Err(FftError::OddLength);
    }
    if table.len() != nfft {
        crate::trace_warn!(
            "real twiddle table has {} slots, expected {}",
            table.len(),
            nfft
        );
        return Err(FftError::MismatchedLengths);
    }
    fill_real_twiddles(table, direction);
    Ok(())
}

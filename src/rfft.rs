//! Real-input FFT built on the half-size complex transform.
//!
//! A real sequence of length `N` is packed into `N/2` complex samples (even
//! samples in the real parts, odd samples in the imaginary parts), transformed
//! with [`crate::fft::transform`], and the packed spectrum is unscrambled into
//! the `N/2 + 1` non-redundant bins of the real spectrum. The inverse runs the
//! same steps backwards and is the only place in the crate that normalizes:
//! the reconstructed samples are divided by `N/2`.
//!
//! All routines expect the reordered table produced by
//! [`fill_real_twiddles`](crate::twiddle::fill_real_twiddles). Its first half
//! doubles as the complex table of the inner `N/2` transform.

use crate::fft::{check_len, transform, FftError};
use crate::num::{Complex, Float};
use crate::rotate::{rotate_quarter, Direction};

/// Number of real samples that make up one packed complex sample.
pub const STRIDE: usize = 2;

/// Smallest supported real transform length.
pub const MIN_LEN: usize = STRIDE;

/// Pack `input` pairwise into `packed[..input.len() / 2]`.
pub fn interleave<T: Float>(input: &[T], packed: &mut [Complex<T>]) {
    for (pair, z) in input.chunks_exact(STRIDE).zip(packed.iter_mut()) {
        *z = Complex::new(pair[0], pair[1]);
    }
}

/// Unpack `packed` into consecutive real samples of `output`.
pub fn deinterleave<T: Float>(packed: &[Complex<T>], output: &mut [T]) {
    for (pair, z) in output.chunks_exact_mut(STRIDE).zip(packed.iter()) {
        pair[0] = z.re;
        pair[1] = z.im;
    }
}

/// Even/odd parts of the packed bin `a` given its mirror bin `b`.
///
/// Forward: `even = (a + b*)/2`, `odd = -i(a - b*)/2`. The inverse flips the
/// sign of the rotation on the odd part.
#[inline(always)]
fn split_bin<T: Float>(
    a: Complex<T>,
    b: Complex<T>,
    direction: Direction,
) -> (Complex<T>, Complex<T>) {
    let half = T::half();
    let even = (a + b.conj()).scale(half);
    let odd = rotate_quarter(a - b.conj(), direction).scale(half);
    (even, odd)
}

/// Twiddles for bin `idx` and its mirror `N/2 - idx`.
///
/// Even bins read the even-exponent half of the table, odd bins the
/// odd-exponent half.
#[inline(always)]
fn pair_twiddles<T: Float>(
    twiddles: &[Complex<T>],
    nfft: usize,
    idx: usize,
) -> (Complex<T>, Complex<T>) {
    let half = nfft / 2;
    let quarter = nfft / 4;
    if idx % 2 == 0 {
        (twiddles[idx / 2], twiddles[quarter - idx / 2])
    } else {
        (
            twiddles[half + idx / 2],
            twiddles[half + quarter - 1 - idx / 2],
        )
    }
}

/// Rewrite bins `1..=N/4` and their mirrors in place.
///
/// The same butterfly serves both directions; only the rotation sign and the
/// direction of the table differ.
fn unscramble<T: Float>(
    spectrum: &mut [Complex<T>],
    twiddles: &[Complex<T>],
    nfft: usize,
    direction: Direction,
) {
    let m = nfft / 2;
    let quarter = nfft / 4;
    for idx in 1..quarter {
        let a = spectrum[idx];
        let b = spectrum[m - idx];
        let (even, odd) = split_bin(a, b, direction);
        let (even_m, odd_m) = split_bin(b, a, direction);
        let (w, w_m) = pair_twiddles(twiddles, nfft, idx);
        spectrum[idx] = even + odd * w;
        spectrum[m - idx] = even_m + odd_m * w_m;
    }
    if quarter == 0 {
        return;
    }
    // The quarter-point bin is its own mirror.
    let x = spectrum[quarter];
    let (even, odd) = split_bin(x, x, direction);
    spectrum[quarter] = if nfft >= 8 {
        even + odd * twiddles[nfft / 8]
    } else {
        // N = 4: W^(N/4) is a quarter turn, which the table cannot address.
        even + rotate_quarter(odd, direction)
    };
}

/// Unchecked forward real FFT.
///
/// `nfft = input.len()` must be a power of two `>= 2`; `scratch` needs
/// `nfft/2` slots and `output` exactly `nfft/2 + 1`. `twiddles` is a forward
/// real table of `nfft` entries.
pub fn rfft_forward_raw<T: Float>(
    input: &[T],
    scratch: &mut [Complex<T>],
    output: &mut [Complex<T>],
    twiddles: &[Complex<T>],
) {
    let nfft = input.len();
    let m = nfft / 2;
    debug_assert!(nfft >= MIN_LEN && nfft.is_power_of_two());
    debug_assert_eq!(output.len(), m + 1);

    interleave(input, &mut scratch[..m]);
    transform(&scratch[..m], &mut output[..m], twiddles, Direction::Forward);

    // DC and Nyquist are both real and share packed bin 0.
    let z = output[0];
    output[0] = Complex::new(z.re + z.im, T::zero());
    output[m] = Complex::new(z.re - z.im, T::zero());

    unscramble(output, twiddles, nfft, Direction::Forward);
}

/// Unchecked inverse real FFT that uses `spectrum` as its packing buffer.
///
/// `spectrum` holds the `nfft/2 + 1` bins and is overwritten. `work` needs
/// `nfft/2` slots; `output.len()` is `nfft`. `twiddles` is an inverse real
/// table. The result is scaled by `1/(nfft/2)`.
pub fn rfft_inverse_raw<T: Float>(
    spectrum: &mut [Complex<T>],
    work: &mut [Complex<T>],
    output: &mut [T],
    twiddles: &[Complex<T>],
) {
    let nfft = output.len();
    let m = nfft / 2;
    debug_assert!(nfft >= MIN_LEN && nfft.is_power_of_two());
    debug_assert!(spectrum.len() > m);

    let half = T::half();
    let dc = spectrum[0].re;
    let nyquist = spectrum[m].re;
    spectrum[0] = Complex::new(half * (dc + nyquist), half * (dc - nyquist));

    // Each pair is read in full before either slot is written, so the
    // rewrite is safe in place.
    unscramble(spectrum, twiddles, nfft, Direction::Inverse);

    transform(&spectrum[..m], &mut work[..m], twiddles, Direction::Inverse);
    deinterleave(&work[..m], output);

    let scale = T::from_usize(m);
    for x in output.iter_mut() {
        *x = *x / scale;
    }
}

pub(crate) fn check_real_size(nfft: usize) -> Result<(), FftError> {
    if nfft == 0 {
        return Err(FftError::EmptyInput);
    }
    if nfft % STRIDE != 0 {
        crate::trace_warn!("real transform size {} is odd", nfft);
        return Err(FftError::OddLength);
    }
    if !nfft.is_power_of_two() {
        crate::trace_warn!("real transform size {} is not a power of two", nfft);
        return Err(FftError::NonPowerOfTwo);
    }
    Ok(())
}

/// Forward real FFT of `nfft` samples into the `nfft/2 + 1` bin half-spectrum.
///
/// Bins 0 and `nfft/2` always have a zero imaginary part. `scratch` must
/// hold `nfft/2 + 1` samples and receives the packed input.
pub fn rfft_forward<T: Float>(
    nfft: usize,
    twiddles: &[Complex<T>],
    input: &[T],
    output: &mut [Complex<T>],
    scratch: &mut [Complex<T>],
) -> Result<(), FftError> {
    check_real_size(nfft)?;
    check_len("real twiddle table", twiddles.len(), nfft)?;
    check_len("input", input.len(), nfft)?;
    check_len("half-spectrum", output.len(), nfft / 2 + 1)?;
    check_len("scratch", scratch.len(), nfft / 2 + 1)?;
    rfft_forward_raw(input, scratch, output, twiddles);
    Ok(())
}

/// Inverse real FFT from an `nfft/2 + 1` bin half-spectrum back to `nfft`
/// samples, normalized so that it undoes [`rfft_forward`].
///
/// `input` is left untouched; it is copied into `scratch0`. Both scratch
/// buffers hold `nfft/2 + 1` samples.
pub fn rfft_inverse<T: Float>(
    nfft: usize,
    twiddles: &[Complex<T>],
    input: &[Complex<T>],
    output: &mut [T],
    scratch0: &mut [Complex<T>],
    scratch1: &mut [Complex<T>],
) -> Result<(), FftError> {
    check_real_size(nfft)?;
    check_len("real twiddle table", twiddles.len(), nfft)?;
    check_len("half-spectrum", input.len(), nfft / 2 + 1)?;
    check_len("output", output.len(), nfft)?;
    check_len("scratch", scratch0.len(), nfft / 2 + 1)?;
    check_len("scratch", scratch1.len(), nfft / 2 + 1)?;
    scratch0.copy_from_slice(input);
    rfft_inverse_raw(scratch0, scratch1, output, twiddles);
    Ok(())
}

/// Same as [`rfft_inverse`] but packs in `input` itself, saving one buffer.
///
/// `input` is overwritten.
pub fn rfft_inverse_with_input_as_scratch<T: Float>(
    nfft: usize,
    twiddles: &[Complex<T>],
    input: &mut [Complex<T>],
    output: &mut [T],
    scratch: &mut [Complex<T>],
) -> Result<(), FftError> {
    check_real_size(nfft)?;
    check_len("real twiddle table", twiddles.len(), nfft)?;
    check_len("half-spectrum", input.len(), nfft / 2 + 1)?;
    check_len("output", output.len(), nfft)?;
    check_len("scratch", scratch.len(), nfft / 2 + 1)?;
    rfft_inverse_raw(input, scratch, output, twiddles);
    Ok(())
}


#[cfg(all(feature = "internal-tests", test))]
mod coverage_tests {
    use super::*;
    use crate::twiddle::fill_real_twiddles;
    use alloc::format;
    use alloc::vec;
    use alloc::vec::Vec;
    use proptest::prop_assert;
    use proptest::proptest;

    proptest! {
        #[test]
        fn prop_raw_roundtrip(shift in 1u32..10, ref signal in proptest::collection::vec(-1000.0f64..1000.0, 512)) {
            let n = 1usize << shift;
            let input: Vec<f64> = signal.iter().take(n).cloned().collect();
            let mut forward = vec![Complex::zero(); n];
            let mut inverse = vec![Complex::zero(); n];
            fill_real_twiddles(&mut forward, Direction::Forward);
            fill_real_twiddles(&mut inverse, Direction::Inverse);

            let mut spectrum = vec![Complex::zero(); n / 2 + 1];
            let mut work = vec![Complex::zero(); n / 2 + 1];
            rfft_forward_raw(&input, &mut work, &mut spectrum, &forward);
            prop_assert!(spectrum[0].im == 0.0 && spectrum[n / 2].im == 0.0);

            let mut output = vec![0.0f64; n];
            rfft_inverse_raw(&mut spectrum, &mut work, &mut output, &inverse);
            for (a, b) in output.iter().zip(input.iter()) {
                prop_assert!(libm::fabs(a - b) < 1e-7);
            }
        }

        #[test]
        fn prop_interleave_inverts_deinterleave(ref signal in proptest::collection::vec(-1.0f32..1.0, 64)) {
            let mut packed = vec![Complex::zero(); 32];
            let mut back = vec![0.0f32; 64];
            interleave(signal, &mut packed);
            deinterleave(&packed, &mut back);
            prop_assert!(back == *signal);
        }
    }
}

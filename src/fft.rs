//! Split-radix complex FFT for power-of-two lengths.
//!
//! The transform reads its input through a circular `(offset + k*stride) & mask`
//! index, so the even and odd-quarter sub-problems of the split-radix
//! decomposition are views of the caller's input rather than copies. Outputs
//! land in disjoint ranges of the output buffer and are merged in place by the
//! split-radix butterfly. Sizes 1, 2, 4 and 8 are fully unrolled.
//!
//! Neither direction applies a `1/N` scale. The [`Direction`] flag must match
//! the direction of the twiddle table; a mismatch is not detected and yields a
//! wrong spectrum.

use crate::num::{Complex, Float};
use crate::rotate::{rotate_eighth, rotate_quarter, rotate_three_eighths, Direction};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Argument errors reported by the checked entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FftError {
    /// The transform size is zero (or too small for a real transform).
    EmptyInput,
    /// The transform size is not a power of two.
    NonPowerOfTwo,
    /// A real transform or real twiddle table was requested for an odd size.
    OddLength,
    /// A buffer or twiddle table does not have the length the size requires.
    MismatchedLengths,
}

impl core::fmt::Display for FftError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            FftError::EmptyInput => "transform size is empty",
            FftError::NonPowerOfTwo => "transform size is not a power of two",
            FftError::OddLength => "real transform size must be even",
            FftError::MismatchedLengths => "buffer length does not match transform size",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}

/// Circular view of the top-level input sequence.
#[derive(Clone, Copy)]
struct Source<'a, T: Float> {
    data: &'a [Complex<T>],
    mask: usize,
}

impl<T: Float> Source<'_, T> {
    #[inline(always)]
    fn at(&self, offset: usize, stride: usize, k: usize) -> Complex<T> {
        self.data[offset.wrapping_add(k * stride) & self.mask]
    }
}

/// Recursive split-radix step writing `out.len()` bins.
///
/// `offset` may have wrapped below zero for the backward odd quarter; the mask
/// folds it back into the top-level sequence.
fn transform_recursion<T: Float>(
    src: Source<'_, T>,
    out: &mut [Complex<T>],
    twiddles: &[Complex<T>],
    offset: usize,
    stride: usize,
    direction: Direction,
) {
    let n = out.len();
    match n {
        1 => out[0] = src.at(offset, stride, 0),
        2 => {
            let y0 = src.at(offset, stride, 0);
            let y1 = src.at(offset, stride, 1);
            out[0] = y0 + y1;
            out[1] = y0 - y1;
        }
        4 => butterfly4(src, out, offset, stride, direction),
        8 => butterfly8(src, out, offset, stride, direction),
        _ => {
            let quarter = n / 4;
            let (even, odd) = out.split_at_mut(n / 2);
            let (odd1, odd3) = odd.split_at_mut(quarter);
            transform_recursion(src, even, twiddles, offset, 2 * stride, direction);
            transform_recursion(
                src,
                odd1,
                twiddles,
                offset.wrapping_add(stride),
                4 * stride,
                direction,
            );
            transform_recursion(
                src,
                odd3,
                twiddles,
                offset.wrapping_sub(stride),
                4 * stride,
                direction,
            );
            let (even_lo, even_hi) = even.split_at_mut(quarter);
            for i in 0..quarter {
                let w = twiddles[i * stride];
                let u1 = even_lo[i];
                let u3 = even_hi[i];
                let z1 = odd1[i] * w;
                let z3 = odd3[i] * w.conj();
                let rot = rotate_quarter(z1 - z3, direction);
                even_lo[i] = u1 + z1 + z3;
                odd1[i] = u1 - z1 - z3;
                even_hi[i] = u3 + rot;
                odd3[i] = u3 - rot;
            }
        }
    }
}

#[inline(always)]
fn butterfly4<T: Float>(
    src: Source<'_, T>,
    out: &mut [Complex<T>],
    offset: usize,
    stride: usize,
    direction: Direction,
) {
    let y0 = src.at(offset, stride, 0);
    let y1 = src.at(offset, stride, 1);
    let y2 = src.at(offset, stride, 2);
    let y3 = src.at(offset, stride, 3);
    let r1 = rotate_quarter(y1, direction);
    let r3 = rotate_quarter(y3, direction);
    out[0] = y0 + y1 + y2 + y3;
    out[1] = y0 + r1 - y2 - r3;
    out[2] = y0 - y1 + y2 - y3;
    out[3] = y0 - r1 - y2 + r3;
}

/// Direct expansion of the 8-point DFT matrix. Powers of `w = e^(-/+ i*pi/4)`
/// reduce modulo 8 to the eighth, quarter and three-eighth rotations.
#[inline(always)]
fn butterfly8<T: Float>(
    src: Source<'_, T>,
    out: &mut [Complex<T>],
    offset: usize,
    stride: usize,
    direction: Direction,
) {
    let y: [Complex<T>; 8] = core::array::from_fn(|k| src.at(offset, stride, k));
    let r45 = |z| rotate_eighth(z, direction);
    let r90 = |z| rotate_quarter(z, direction);
    let r135 = |z| rotate_three_eighths(z, direction);

    out[0] = y[0] + y[1] + y[2] + y[3] + y[4] + y[5] + y[6] + y[7];
    out[1] = y[0] + r45(y[1]) + r90(y[2]) + r135(y[3]) - y[4] - r45(y[5]) - r90(y[6])
        - r135(y[7]);
    out[2] = y[0] + r90(y[1]) - y[2] - r90(y[3]) + y[4] + r90(y[5]) - y[6] - r90(y[7]);
    out[3] = y[0] + r135(y[1]) - r90(y[2]) + r45(y[3]) - y[4] - r135(y[5]) + r90(y[6])
        - r45(y[7]);
    out[4] = y[0] - y[1] + y[2] - y[3] + y[4] - y[5] + y[6] - y[7];
    out[5] = y[0] - r45(y[1]) + r90(y[2]) - r135(y[3]) - y[4] + r45(y[5]) - r90(y[6])
        + r135(y[7]);
    out[6] = y[0] - r90(y[1]) - y[2] + r90(y[3]) + y[4] - r90(y[5]) - y[6] + r90(y[7]);
    out[7] = y[0] - r135(y[1]) - r90(y[2]) - r45(y[3]) - y[4] + r135(y[5]) + r90(y[6])
        + r45(y[7]);
}

/// Unchecked split-radix transform of `input` into `output`.
///
/// `output.len()` is the transform size `N` and must be a power of two;
/// `input` must hold at least `N` samples and `twiddles` at least `N/4`
/// factors of a table built for the same direction.
pub fn transform<T: Float>(
    input: &[Complex<T>],
    output: &mut [Complex<T>],
    twiddles: &[Complex<T>],
    direction: Direction,
) {
    let n = output.len();
    debug_assert!(n.is_power_of_two());
    debug_assert!(input.len() >= n);
    let src = Source {
        data: input,
        mask: n - 1,
    };
    transform_recursion(src, output, twiddles, 0, 1, direction);
}

/// Unchecked forward transform; see [`transform`].
#[inline]
pub fn cfft_forward_raw<T: Float>(
    input: &[Complex<T>],
    output: &mut [Complex<T>],
    twiddles: &[Complex<T>],
) {
    transform(input, output, twiddles, Direction::Forward);
}

/// Unchecked, unnormalized inverse transform; see [`transform`].
#[inline]
pub fn cfft_inverse_raw<T: Float>(
    input: &[Complex<T>],
    output: &mut [Complex<T>],
    twiddles: &[Complex<T>],
) {
    transform(input, output, twiddles, Direction::Inverse);
}

pub(crate) fn check_pow2(nfft: usize) -> Result<(), FftError> {
    if nfft == 0 {
        return Err(FftError::EmptyInput);
    }
    if !nfft.is_power_of_two() {
        crate::trace_warn!("transform size {} is not a power of two", nfft);
        return Err(FftError::NonPowerOfTwo);
    }
    Ok(())
}

pub(crate) fn check_len(what: &str, actual: usize, expected: usize) -> Result<(), FftError> {
    if actual != expected {
        crate::trace_warn!("{} has length {}, expected {}", what, actual, expected);
        return Err(FftError::MismatchedLengths);
    }
    Ok(())
}

fn checked_transform<T: Float>(
    nfft: usize,
    twiddles: &[Complex<T>],
    input: &[Complex<T>],
    output: &mut [Complex<T>],
    direction: Direction,
) -> Result<(), FftError> {
    check_pow2(nfft)?;
    check_len("twiddle table", twiddles.len(), nfft)?;
    check_len("input", input.len(), nfft)?;
    check_len("output", output.len(), nfft)?;
    transform(input, output, twiddles, direction);
    Ok(())
}

/// Forward complex FFT of size `nfft`.
///
/// `twiddles` must come from
/// [`populate_complex_twiddles`](crate::twiddle::populate_complex_twiddles)
/// with [`Direction::Forward`].
pub fn cfft_forward<T: Float>(
    nfft: usize,
    twiddles: &[Complex<T>],
    input: &[Complex<T>],
    output: &mut [Complex<T>],
) -> Result<(), FftError> {
    checked_transform(nfft, twiddles, input, output, Direction::Forward)
}

/// Inverse complex FFT of size `nfft`, without the `1/nfft` scale.
///
/// `twiddles` must be an inverse-direction complex table.
pub fn cfft_inverse<T: Float>(
    nfft: usize,
    twiddles: &[Complex<T>],
    input: &[Complex<T>],
    output: &mut [Complex<T>],
) -> Result<(), FftError> {
    checked_transform(nfft, twiddles, input, output, Direction::Inverse)
}

fn checked_batch<T: Float>(
    nfft: usize,
    twiddles: &[Complex<T>],
    input: &[Complex<T>],
    output: &mut [Complex<T>],
    direction: Direction,
) -> Result<(), FftError> {
    check_pow2(nfft)?;
    check_len("twiddle table", twiddles.len(), nfft)?;
    check_len("output", output.len(), input.len())?;
    if input.len() % nfft != 0 {
        crate::trace_warn!(
            "batch of {} samples is not a multiple of {}",
            input.len(),
            nfft
        );
        return Err(FftError::MismatchedLengths);
    }
    #[cfg(feature = "parallel")]
    {
        input
            .par_chunks(nfft)
            .zip(output.par_chunks_mut(nfft))
            .for_each(|(src, dst)| transform(src, dst, twiddles, direction));
    }
    #[cfg(not(feature = "parallel"))]
    {
        for (src, dst) in input.chunks_exact(nfft).zip(output.chunks_exact_mut(nfft)) {
            transform(src, dst, twiddles, direction);
        }
    }
    Ok(())
}

/// Forward FFT of every consecutive `nfft`-sample frame of `input`.
///
/// All frames share the one twiddle table. With the `parallel` feature the
/// frames are transformed on the rayon thread pool.
pub fn cfft_forward_batch<T: Float>(
    nfft: usize,
    twiddles: &[Complex<T>],
    input: &[Complex<T>],
    output: &mut [Complex<T>],
) -> Result<(), FftError> {
    checked_batch(nfft, twiddles, input, output, Direction::Forward)
}

/// Unnormalized inverse FFT of every consecutive `nfft`-sample frame of `input`.
pub fn cfft_inverse_batch<T: Float>(
    nfft: usize,
    twiddles: &[Complex<T>],
    input: &[Complex<T>],
    output: &mut [Complex<T>],
) -> Result<(), FftError> {
    checked_batch(nfft, twiddles, input, output, Direction::Inverse)
}

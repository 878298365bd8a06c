//! # srfft - split-radix FFT kernels for power-of-two sequences
//!
//! Forward and inverse Discrete Fourier Transforms of complex and real
//! sequences whose length is a power of two, computed with a recursive
//! split-radix decomposition and fully unrolled 1/2/4/8-point kernels.
//!
//! The kernels never allocate: the caller owns the twiddle table, the input,
//! the output and any scratch buffers. A [`FftPlanner`] is provided for
//! callers that would rather let the crate build and cache twiddle tables.
//!
//! ## Layout
//!
//! - [`num`]: `Float` trait and `Complex<T>` (single or double precision)
//! - [`rotate`]: multiplication by the fixed 45/90/135 degree rotations
//! - [`twiddle`]: complex and real (reordered) twiddle tables
//! - [`fft`]: split-radix complex transform and batch variants
//! - [`rfft`]: real-input transform built on the half-size complex transform
//! - [`planner`]: cached tables and allocating convenience transforms
//!
//! ## Normalization
//!
//! The complex transforms are unnormalized in both directions. The real
//! inverse divides by `N/2`, so `rfft_inverse(rfft_forward(x)) == x`.
//!
//! ## Example
//!
//! ```
//! use srfft::{cfft_forward, populate_complex_twiddles, Complex64, Direction};
//!
//! let n = 8;
//! let mut twiddles = vec![Complex64::zero(); n];
//! populate_complex_twiddles(n, &mut twiddles, Direction::Forward).unwrap();
//!
//! let input = vec![Complex64::new(1.0, 0.0); n];
//! let mut output = vec![Complex64::zero(); n];
//! cfft_forward(n, &twiddles, &input, &mut output).unwrap();
//! assert!((output[0].re - 8.0).abs() < 1e-12);
//! ```
//!
//! ## Cargo Features
//!
//! - `std` (default): implements `std::error::Error` for [`FftError`]
//! - `parallel`: rayon-backed batch transforms
//! - `verbose-logging`: `log` output from the planner and argument checks
//! - `internal-tests`: extra property tests inside the library

#![no_std]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

// `log::debug!` when `verbose-logging` is enabled, otherwise nothing.
macro_rules! trace_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "verbose-logging")]
        log::debug!($($arg)*);
        #[cfg(not(feature = "verbose-logging"))]
        let _ = ::core::format_args!($($arg)*);
    }};
}

// `log::warn!` when `verbose-logging` is enabled, otherwise nothing.
macro_rules! trace_warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "verbose-logging")]
        log::warn!($($arg)*);
        #[cfg(not(feature = "verbose-logging"))]
        let _ = ::core::format_args!($($arg)*);
    }};
}

pub(crate) use trace_debug;
pub(crate) use trace_warn;

pub mod num;

/// Fixed unit rotations and the [`Direction`] sign convention.
pub mod rotate;

/// Complex and real twiddle tables.
pub mod twiddle;

/// Split-radix complex FFT.
pub mod fft;

/// Real-input FFT built on the half-size complex FFT.
pub mod rfft;

/// Twiddle-table cache and allocating convenience transforms.
pub mod planner;

pub use fft::{
    cfft_forward, cfft_forward_batch, cfft_inverse, cfft_inverse_batch, FftError,
};
pub use num::{Complex, Complex32, Complex64, Float};
pub use planner::FftPlanner;
pub use rfft::{rfft_forward, rfft_inverse, rfft_inverse_with_input_as_scratch};
pub use rotate::Direction;
pub use twiddle::{populate_complex_twiddles, populate_real_twiddles};

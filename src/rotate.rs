//! Multiplication by the fixed unit rotations used in the unrolled kernels.
//!
//! Each helper replaces a general complex multiply by a component swap,
//! sign flips and at most one scale by `1/sqrt(2)`.

use crate::num::{Complex, Float};

/// Sign convention of a transform.
///
/// `Forward` rotates by negative angles (`e^(-i*theta)`), `Inverse` by
/// positive angles. The same value must be threaded through every rotation of
/// one transform and must match the direction the twiddle table was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Forward,
    Inverse,
}

impl Direction {
    #[inline(always)]
    pub fn is_forward(self) -> bool {
        matches!(self, Direction::Forward)
    }
}

/// `z * e^(-i*pi/2)` for [`Direction::Forward`], `z * e^(+i*pi/2)` otherwise.
#[inline(always)]
pub fn rotate_quarter<T: Float>(z: Complex<T>, direction: Direction) -> Complex<T> {
    match direction {
        Direction::Forward => Complex::new(z.im, -z.re),
        Direction::Inverse => Complex::new(-z.im, z.re),
    }
}

/// `z * e^(-i*pi/4)` for [`Direction::Forward`], `z * e^(+i*pi/4)` otherwise.
#[inline(always)]
pub fn rotate_eighth<T: Float>(z: Complex<T>, direction: Direction) -> Complex<T> {
    let s = T::frac_1_sqrt_2();
    match direction {
        Direction::Forward => Complex::new(z.re + z.im, -z.re + z.im).scale(s),
        Direction::Inverse => Complex::new(z.re - z.im, z.re + z.im).scale(s),
    }
}

/// `z * e^(-3i*pi/4)` for [`Direction::Forward`], `z * e^(+3i*pi/4)` otherwise.
#[inline(always)]
pub fn rotate_three_eighths<T: Float>(z: Complex<T>, direction: Direction) -> Complex<T> {
    let s = T::frac_1_sqrt_2();
    match direction {
        Direction::Forward => Complex::new(-z.re + z.im, -z.re - z.im).scale(s),
        Direction::Inverse => Complex::new(-z.re - z.im, z.re - z.im).scale(s),
    }
}

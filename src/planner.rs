//! Cached twiddle tables and allocating convenience transforms.
//!
//! The kernels in [`crate::fft`] and [`crate::rfft`] only borrow their tables.
//! [`FftPlanner`] builds tables on demand, shares them through [`Arc`], and
//! keys them by size and [`Direction`] so that a table can never be paired
//! with a transform of the opposite direction.

use alloc::collections::VecDeque;
use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::fft::{check_pow2, transform, FftError};
use crate::num::{Complex, Float};
use crate::rfft::{check_real_size, rfft_forward, rfft_inverse};
use crate::rotate::Direction;
use crate::twiddle::{fill_complex_twiddles, fill_real_twiddles};

/// Maximum number of cached twiddle tables to retain in the planner.
pub const MAX_CACHE_ENTRIES: usize = 64;

/// Which layout a cached table uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    /// `e^(-/+ 2*pi*i*k/N)` in natural order.
    Complex,
    /// Even exponents first, odd exponents second.
    Real,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct TableKey {
    kind: TableKind,
    nfft: usize,
    direction: Direction,
}

/// Twiddle-table cache for the split-radix transforms.
///
/// Tables are evicted in least-recently-used order once more than
/// [`MAX_CACHE_ENTRIES`] are retained.
pub struct FftPlanner<T: Float> {
    cache: HashMap<TableKey, Arc<[Complex<T>]>>,
    cache_order: VecDeque<TableKey>,
}

impl<T: Float> Default for FftPlanner<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> FftPlanner<T> {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            cache_order: VecDeque::new(),
        }
    }

    /// Number of tables currently cached.
    pub fn cached_tables(&self) -> usize {
        self.cache.len()
    }

    fn table(&mut self, key: TableKey) -> Arc<[Complex<T>]> {
        if let Some(table) = self.cache.get(&key) {
            let table = Arc::clone(table);
            self.cache_order.retain(|k| *k != key);
            self.cache_order.push_back(key);
            return table;
        }
        crate::trace_debug!(
            "building {:?} twiddle table for n = {} ({:?})",
            key.kind,
            key.nfft,
            key.direction
        );
        let mut data = vec![Complex::zero(); key.nfft];
        match key.kind {
            TableKind::Complex => fill_complex_twiddles(&mut data, key.direction),
            TableKind::Real => fill_real_twiddles(&mut data, key.direction),
        }
        let table: Arc<[Complex<T>]> = Arc::from(data);
        if self.cache.len() == MAX_CACHE_ENTRIES {
            if let Some(old) = self.cache_order.pop_front() {
                crate::trace_debug!("evicting twiddle table {:?}", old);
                self.cache.remove(&old);
            }
        }
        self.cache.insert(key, Arc::clone(&table));
        self.cache_order.push_back(key);
        table
    }

    /// Complex table for a transform of size `nfft` (a power of two).
    pub fn complex_twiddles(
        &mut self,
        nfft: usize,
        direction: Direction,
    ) -> Result<Arc<[Complex<T>]>, FftError> {
        check_pow2(nfft)?;
        Ok(self.table(TableKey {
            kind: TableKind::Complex,
            nfft,
            direction,
        }))
    }

    /// Reordered table for a real transform of size `nfft`.
    pub fn real_twiddles(
        &mut self,
        nfft: usize,
        direction: Direction,
    ) -> Result<Arc<[Complex<T>]>, FftError> {
        check_real_size(nfft)?;
        Ok(self.table(TableKey {
            kind: TableKind::Real,
            nfft,
            direction,
        }))
    }

    fn complex(
        &mut self,
        input: &[Complex<T>],
        direction: Direction,
    ) -> Result<Vec<Complex<T>>, FftError> {
        let twiddles = self.complex_twiddles(input.len(), direction)?;
        let mut output = vec![Complex::zero(); input.len()];
        transform(input, &mut output, &twiddles, direction);
        Ok(output)
    }

    /// Forward complex FFT of `input`; the length must be a power of two.
    pub fn fft(&mut self, input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
        self.complex(input, Direction::Forward)
    }

    /// Unnormalized inverse complex FFT of `input`.
    pub fn ifft(&mut self, input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
        self.complex(input, Direction::Inverse)
    }

    /// Inverse complex FFT scaled by `1/N`, so that it undoes [`Self::fft`].
    pub fn ifft_normalized(&mut self, input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
        let mut output = self.complex(input, Direction::Inverse)?;
        let scale = T::from_usize(input.len());
        for z in output.iter_mut() {
            *z = Complex::new(z.re / scale, z.im / scale);
        }
        Ok(output)
    }

    /// Half-spectrum (`N/2 + 1` bins) of the real sequence `input`.
    pub fn rfft(&mut self, input: &[T]) -> Result<Vec<Complex<T>>, FftError> {
        let nfft = input.len();
        let twiddles = self.real_twiddles(nfft, Direction::Forward)?;
        let mut output = vec![Complex::zero(); nfft / 2 + 1];
        let mut scratch = vec![Complex::zero(); nfft / 2 + 1];
        rfft_forward(nfft, &twiddles, input, &mut output, &mut scratch)?;
        Ok(output)
    }

    /// Real sequence of length `2 * (spectrum.len() - 1)` whose half-spectrum
    /// is `spectrum`. Normalized, so that it undoes [`Self::rfft`].
    pub fn irfft(&mut self, spectrum: &[Complex<T>]) -> Result<Vec<T>, FftError> {
        if spectrum.len() < 2 {
            return Err(FftError::EmptyInput);
        }
        let nfft = 2 * (spectrum.len() - 1);
        let twiddles = self.real_twiddles(nfft, Direction::Inverse)?;
        let mut output = vec![T::zero(); nfft];
        let mut scratch0 = vec![Complex::zero(); nfft / 2 + 1];
        let mut scratch1 = vec![Complex::zero(); nfft / 2 + 1];
        rfft_inverse(
            nfft,
            &twiddles,
            spectrum,
            &mut output,
            &mut scratch0,
            &mut scratch1,
        )?;
        Ok(output)
    }
}

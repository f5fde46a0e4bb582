/*
 * // Copyright (c) Radzivon Bartoshyk 10/2026. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
#![cfg_attr(docsrs, feature(doc_cfg))]
//! Mixed-radix FFT for any length whose prime factors do not exceed [MAX_PRIME_FACTOR].
//!
//! The length is split into radices 10, 8, 5, 4, 3, 2 which have dedicated short kernels,
//! the rest is handled by a generic odd-prime kernel. [good_size_not_smaller] and friends
//! find nearby 5-smooth lengths that only ever use the fast kernels.
//!
//! ```
//! use mixfft::{FftExecutor, MixFft};
//! use num_complex::Complex;
//!
//! let n = mixfft::good_size_not_smaller(1001) as usize;
//! let fft = MixFft::make_forward_fft_f64(n).unwrap();
//! let mut data = vec![Complex::new(0f64, 0f64); n];
//! data[0] = Complex::new(1., 0.);
//! fft.execute(&mut data).unwrap();
//! assert!(data.iter().all(|x| (x.re - 1.).abs() < 1e-12));
//! ```
mod butterflies;
mod err;
mod factorize;
mod good_size;
mod mixed_radix;
mod permute;
mod stages;
mod traits;
mod twiddles;
mod util;

pub use err::MixFftError;
pub use factorize::{MAX_PRIME_FACTOR, factorize};
pub use good_size::{good_size, good_size_not_larger, good_size_not_smaller};
pub use mixed_radix::MixedRadixFft;
pub use stages::{StageDescriptor, plan_stages};
pub use traits::FftSample;
pub use twiddles::TwiddleMode;

use crate::err::try_vec;
use num_complex::Complex;
use num_traits::AsPrimitive;

pub trait FftExecutor<T> {
    /// Transforms every `length()` sized chunk of `in_place`.
    fn execute(&self, in_place: &mut [Complex<T>]) -> Result<(), MixFftError>;
    /// Transforms `src` into `dst`, `src` is left untouched.
    fn execute_out_of_place(
        &self,
        src: &[Complex<T>],
        dst: &mut [Complex<T>],
    ) -> Result<(), MixFftError>;
    fn direction(&self) -> FftDirection;
    fn length(&self) -> usize;
}

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum FftDirection {
    /// `y_k = Σ x_n e^{-2πi k n / N}`
    Forward,
    /// `y_k = Σ x_n e^{2πi k n / N}`, not normalized
    Inverse,
}

impl std::fmt::Display for FftDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FftDirection::Forward => f.write_str("FftDirection::Forward"),
            FftDirection::Inverse => f.write_str("FftDirection::Inverse"),
        }
    }
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct FftOptions {
    pub twiddle_mode: TwiddleMode,
}

pub struct MixFft {}

impl MixFft {
    pub fn make_fft<T: FftSample>(
        n: usize,
        fft_direction: FftDirection,
        options: FftOptions,
    ) -> Result<Box<dyn FftExecutor<T> + Send + Sync>, MixFftError>
    where
        f64: AsPrimitive<T>,
    {
        MixedRadixFft::new(n, fft_direction, options)
            .map(|x| Box::new(x) as Box<dyn FftExecutor<T> + Send + Sync>)
    }

    pub fn make_forward_fft_f32(
        n: usize,
    ) -> Result<Box<dyn FftExecutor<f32> + Send + Sync>, MixFftError> {
        MixFft::make_fft(n, FftDirection::Forward, FftOptions::default())
    }

    pub fn make_forward_fft_f64(
        n: usize,
    ) -> Result<Box<dyn FftExecutor<f64> + Send + Sync>, MixFftError> {
        MixFft::make_fft(n, FftDirection::Forward, FftOptions::default())
    }

    pub fn make_inverse_fft_f32(
        n: usize,
    ) -> Result<Box<dyn FftExecutor<f32> + Send + Sync>, MixFftError> {
        MixFft::make_fft(n, FftDirection::Inverse, FftOptions::default())
    }

    pub fn make_inverse_fft_f64(
        n: usize,
    ) -> Result<Box<dyn FftExecutor<f64> + Send + Sync>, MixFftError> {
        MixFft::make_fft(n, FftDirection::Inverse, FftOptions::default())
    }
}

/// Forward transform of a sequence given as separate real and imaginary parts.
///
/// The length is `x_re.len()`, its largest prime factor must not exceed [MAX_PRIME_FACTOR].
/// Returns the real and imaginary parts of the spectrum in natural order.
pub fn transform<T: FftSample>(x_re: &[T], x_im: &[T]) -> Result<(Vec<T>, Vec<T>), MixFftError>
where
    f64: AsPrimitive<T>,
{
    let mut y_re = try_vec![T::zero(); x_re.len()];
    let mut y_im = try_vec![T::zero(); x_re.len()];
    transform_into(x_re, x_im, &mut y_re, &mut y_im)?;
    Ok((y_re, y_im))
}

/// Same as [transform], writing into caller provided buffers.
pub fn transform_into<T: FftSample>(
    x_re: &[T],
    x_im: &[T],
    y_re: &mut [T],
    y_im: &mut [T],
) -> Result<(), MixFftError>
where
    f64: AsPrimitive<T>,
{
    let n = x_re.len();
    for len in [x_im.len(), y_re.len(), y_im.len()] {
        if len != n {
            return Err(MixFftError::InvalidInputLength(n, len));
        }
    }

    let fft = MixedRadixFft::<T>::new(n, FftDirection::Forward, FftOptions::default())?;

    let mut src = try_vec![Complex::new(T::zero(), T::zero()); n];
    for ((dst, &re), &im) in src.iter_mut().zip(x_re.iter()).zip(x_im.iter()) {
        *dst = Complex::new(re, im);
    }
    let mut dst = try_vec![Complex::new(T::zero(), T::zero()); n];
    fft.execute_out_of_place(&src, &mut dst)?;

    for ((y, re), im) in dst.iter().zip(y_re.iter_mut()).zip(y_im.iter_mut()) {
        *re = y.re;
        *im = y.im;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::{naive_dft, relative_error};

    #[test]
    fn test_transform_12() {
        let x_re = (1..=12).map(|x| x as f64).collect::<Vec<_>>();
        let x_im = vec![0f64; 12];
        let (y_re, y_im) = transform(&x_re, &x_im).unwrap();

        let input = x_re
            .iter()
            .map(|&x| Complex::new(x, 0.))
            .collect::<Vec<_>>();
        let output = y_re
            .iter()
            .zip(y_im.iter())
            .map(|(&re, &im)| Complex::new(re, im))
            .collect::<Vec<_>>();
        assert!(relative_error(&output, &naive_dft(&input)) < 1e-9);
        assert!((y_re[0] - 78.).abs() < 1e-12);
        assert!((y_re[6] + 6.).abs() < 1e-12);
        assert!(y_im[6].abs() < 1e-12);
    }

    #[test]
    fn test_transform_errors() {
        let x = vec![0f64; 41];
        assert_eq!(
            transform(&x, &x).err(),
            Some(MixFftError::UnsupportedLength(41))
        );
        assert_eq!(
            transform(&x[..10], &x[..9]).err(),
            Some(MixFftError::InvalidInputLength(10, 9))
        );
        assert_eq!(
            transform::<f64>(&[], &[]).err(),
            Some(MixFftError::ZeroSizedFft)
        );
    }

    #[test]
    fn test_factory() {
        let forward = MixFft::make_forward_fft_f32(100).unwrap();
        assert_eq!(forward.length(), 100);
        assert_eq!(forward.direction(), FftDirection::Forward);
        let inverse = MixFft::make_inverse_fft_f64(100).unwrap();
        assert_eq!(inverse.direction(), FftDirection::Inverse);
        assert!(MixFft::make_forward_fft_f64(43).is_err());
        let direct = MixFft::make_fft::<f64>(
            1000,
            FftDirection::Forward,
            FftOptions {
                twiddle_mode: TwiddleMode::Direct,
            },
        )
        .unwrap();
        assert_eq!(direct.length(), 1000);
    }
}

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
use num_complex::Complex;
use num_traits::{AsPrimitive, Float};

/// Computes `e^{-2πi * index / fft_len}` in double precision.
pub(crate) fn compute_twiddle<T: Float + 'static>(index: usize, fft_len: usize) -> Complex<T>
where
    f64: AsPrimitive<T>,
{
    let angle = -std::f64::consts::TAU * (index % fft_len) as f64 / fft_len as f64;
    let (v_sin, v_cos) = angle.sin_cos();
    Complex {
        re: v_cos.as_(),
        im: v_sin.as_(),
    }
}

#[cfg(test)]
pub(crate) fn naive_dft<T: Float + 'static>(input: &[Complex<T>]) -> Vec<Complex<f64>>
where
    T: AsPrimitive<f64>,
{
    let n = input.len();
    let mut output = vec![Complex::<f64>::new(0., 0.); n];
    for (k, dst) in output.iter_mut().enumerate() {
        let mut sum = Complex::<f64>::new(0., 0.);
        let mut twiddle_idx = 0usize;
        for src in input.iter() {
            let w = compute_twiddle::<f64>(twiddle_idx, n);
            sum += Complex::new(src.re.as_(), src.im.as_()) * w;
            twiddle_idx += k;
            if twiddle_idx >= n {
                twiddle_idx -= n;
            }
        }
        *dst = sum;
    }
    output
}

/// `||a - b|| / ||b||`, or `||a - b||` when the reference is zero.
#[cfg(test)]
pub(crate) fn relative_error<T: Float + 'static>(a: &[Complex<T>], b: &[Complex<f64>]) -> f64
where
    T: AsPrimitive<f64>,
{
    let mut diff = 0f64;
    let mut norm = 0f64;
    for (x, y) in a.iter().zip(b.iter()) {
        let x = Complex::<f64>::new(x.re.as_(), x.im.as_());
        diff += (x - y).norm_sqr();
        norm += y.norm_sqr();
    }
    if norm == 0. {
        diff.sqrt()
    } else {
        (diff / norm).sqrt()
    }
}

#[cfg(test)]
pub(crate) fn random_signal<T: Float + 'static>(size: usize) -> Vec<Complex<T>>
where
    f64: AsPrimitive<T>,
{
    use rand::Rng;
    let mut input = vec![Complex::<T>::new(T::zero(), T::zero()); size];
    for z in input.iter_mut() {
        *z = Complex {
            re: rand::rng().random_range(-1f64..1f64).as_(),
            im: rand::rng().random_range(-1f64..1f64).as_(),
        };
    }
    input
}

#[cfg(test)]
macro_rules! test_mixed_radix {
    ($method_name: ident, $data_type: ident, $size: expr, $mode: expr, $tol: expr) => {
        #[test]
        fn $method_name() {
            use crate::util::{naive_dft, random_signal, relative_error};
            let size = $size;
            let input = random_signal::<$data_type>(size);
            let reference = naive_dft(&input);
            let fft = crate::MixedRadixFft::<$data_type>::new(
                size,
                crate::FftDirection::Forward,
                crate::FftOptions {
                    twiddle_mode: $mode,
                },
            )
            .unwrap();
            let mut output = vec![num_complex::Complex::<$data_type>::default(); size];
            crate::FftExecutor::execute_out_of_place(&fft, &input, &mut output).unwrap();
            let error = relative_error(&output, &reference);
            assert!(
                error < $tol,
                "relative error {error} exceeds {} for size {size}",
                $tol
            );
        }
    };
}

#[cfg(test)]
pub(crate) use test_mixed_radix;

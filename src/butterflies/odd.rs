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
use crate::twiddles::{TwiddleMode, make_trig_table};
use crate::{FftSample, MAX_PRIME_FACTOR, MixFftError};
use num_complex::Complex;
use num_traits::AsPrimitive;

const MAX_HALF: usize = MAX_PRIME_FACTOR.div_ceil(2);

/// Direct DFT of an odd length that pairs `z[j]` with `z[radix - j]`,
/// which halves the multiplications of a plain O(radix²) evaluation.
pub(crate) struct OddButterfly<T> {
    radix: usize,
    trig: Vec<Complex<T>>,
}

impl<T: FftSample> OddButterfly<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn new(radix: usize, mode: TwiddleMode) -> Result<Self, MixFftError> {
        if radix.is_multiple_of(2) || radix > MAX_PRIME_FACTOR {
            return Err(MixFftError::UnsupportedLength(radix));
        }
        Ok(OddButterfly {
            radix,
            trig: make_trig_table(radix, mode)?,
        })
    }

    pub(crate) fn run(&self, chunk: &mut [Complex<T>]) {
        let n = self.radix;
        let half = n.div_ceil(2);
        let zero = Complex::new(T::zero(), T::zero());

        // v = (re sum, im difference), w = (re difference, im sum)
        let mut v = [zero; MAX_HALF];
        let mut w = [zero; MAX_HALF];
        for j in 1..half {
            let a = chunk[j];
            let b = chunk[n - j];
            v[j] = Complex::new(a.re + b.re, a.im - b.im);
            w[j] = Complex::new(a.re - b.re, a.im + b.im);
        }

        let u0 = chunk[0];
        for j in 1..half {
            let mut lo = u0;
            let mut hi = u0;
            let mut k = j;
            for i in 1..half {
                let t = self.trig[k];
                let rere = t.re * v[i].re;
                let imim = t.im * v[i].im;
                let reim = t.re * w[i].im;
                let imre = t.im * w[i].re;

                lo.re = lo.re + rere - imim;
                lo.im = lo.im + reim + imre;
                hi.re = hi.re + rere + imim;
                hi.im = hi.im + reim - imre;

                k += j;
                if k >= n {
                    k -= n;
                }
            }
            chunk[j] = lo;
            chunk[n - j] = hi;
        }

        let mut dc = u0;
        for j in 1..half {
            dc.re = dc.re + v[j].re;
            dc.im = dc.im + w[j].im;
        }
        chunk[0] = dc;
    }
}

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
use crate::FftSample;
use crate::butterflies::Butterfly4;
use num_complex::Complex;
use num_traits::AsPrimitive;

/// Length 8 DFT from two length 4 DFTs over even and odd samples.
pub(crate) struct Butterfly8<T> {
    // 1/sqrt(2)
    c8: T,
    bf4: Butterfly4<T>,
}

impl<T: FftSample> Butterfly8<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn new() -> Self {
        Butterfly8 {
            c8: std::f64::consts::FRAC_1_SQRT_2.as_(),
            bf4: Butterfly4::new(),
        }
    }

    #[inline(always)]
    pub(crate) fn run(&self, chunk: &mut [Complex<T>]) {
        let mut a = [chunk[0], chunk[2], chunk[4], chunk[6]];
        let mut b = [chunk[1], chunk[3], chunk[5], chunk[7]];

        self.bf4.run(&mut a);
        self.bf4.run(&mut b);

        // odd half rotated by e^{-iπk/4}
        b[1] = Complex {
            re: self.c8 * (b[1].re + b[1].im),
            im: self.c8 * (b[1].im - b[1].re),
        };
        b[2] = Complex {
            re: b[2].im,
            im: -b[2].re,
        };
        b[3] = Complex {
            re: self.c8 * (b[3].im - b[3].re),
            im: -self.c8 * (b[3].re + b[3].im),
        };

        for i in 0..4 {
            chunk[i] = a[i] + b[i];
            chunk[i + 4] = a[i] - b[i];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::butterflies::test_butterfly;

    test_butterfly!(test_butterfly8, Butterfly8, 8);
}

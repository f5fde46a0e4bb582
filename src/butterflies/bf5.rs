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
use num_complex::Complex;
use num_traits::AsPrimitive;

#[inline(always)]
fn mul_i<T: FftSample>(value: Complex<T>) -> Complex<T> {
    Complex {
        re: -value.im,
        im: value.re,
    }
}

/// Length 5 DFT with five real multiplications per component.
pub(crate) struct Butterfly5<T> {
    c5_1: T,
    c5_2: T,
    c5_3: T,
    c5_4: T,
    c5_5: T,
}

impl<T: FftSample> Butterfly5<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn new() -> Self {
        let u5 = std::f64::consts::TAU / 5.;
        let (s1, c1) = u5.sin_cos();
        let (s2, c2) = (2. * u5).sin_cos();
        Butterfly5 {
            c5_1: ((c1 + c2) / 2. - 1.).as_(),
            c5_2: ((c1 - c2) / 2.).as_(),
            c5_3: (-s1).as_(),
            c5_4: (-(s1 + s2)).as_(),
            c5_5: (s1 - s2).as_(),
        }
    }

    #[inline(always)]
    pub(crate) fn run(&self, chunk: &mut [Complex<T>]) {
        let u0 = chunk[0];
        let u1 = chunk[1];
        let u2 = chunk[2];
        let u3 = chunk[3];
        let u4 = chunk[4];

        let t1 = u1 + u4;
        let t2 = u2 + u3;
        let t3 = u1 - u4;
        let t4 = u3 - u2;
        let t5 = t1 + t2;

        let y0 = u0 + t5;
        let m1 = t5 * self.c5_1;
        let m2 = (t1 - t2) * self.c5_2;
        let m3 = mul_i(t3 + t4) * self.c5_3;
        let m4 = mul_i(t4) * self.c5_4;
        let m5 = mul_i(t3) * self.c5_5;

        let s3 = m3 - m4;
        let s5 = m3 + m5;
        let s1 = y0 + m1;
        let s2 = s1 + m2;
        let s4 = s1 - m2;

        chunk[0] = y0;
        chunk[1] = s2 + s3;
        chunk[2] = s4 + s5;
        chunk[3] = s4 - s5;
        chunk[4] = s2 - s3;
    }
}

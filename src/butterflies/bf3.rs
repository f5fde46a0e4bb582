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

pub(crate) struct Butterfly3<T> {
    // cos(2π/3) - 1
    c3_1: T,
    // sin(2π/3)
    c3_2: T,
}

impl<T: FftSample> Butterfly3<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn new() -> Self {
        let u3 = std::f64::consts::TAU / 3.;
        Butterfly3 {
            c3_1: (u3.cos() - 1.).as_(),
            c3_2: u3.sin().as_(),
        }
    }

    #[inline(always)]
    pub(crate) fn run(&self, chunk: &mut [Complex<T>]) {
        let u0 = chunk[0];
        let u1 = chunk[1];
        let u2 = chunk[2];

        let t1 = u1 + u2;
        let y0 = u0 + t1;
        let m1 = t1 * self.c3_1;
        let m2 = Complex {
            re: self.c3_2 * (u1.im - u2.im),
            im: self.c3_2 * (u2.re - u1.re),
        };
        let s1 = y0 + m1;

        chunk[0] = y0;
        chunk[1] = s1 + m2;
        chunk[2] = s1 - m2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::butterflies::test_butterfly;

    test_butterfly!(test_butterfly3, Butterfly3, 3);
}

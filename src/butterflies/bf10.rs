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
use crate::butterflies::Butterfly5;
use num_complex::Complex;
use num_traits::AsPrimitive;

/// Good-Thomas length 10 DFT, two length 5 DFTs joined without twiddles.
pub(crate) struct Butterfly10<T> {
    bf5: Butterfly5<T>,
}

impl<T: FftSample> Butterfly10<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn new() -> Self {
        Butterfly10 {
            bf5: Butterfly5::new(),
        }
    }

    #[inline(always)]
    pub(crate) fn run(&self, chunk: &mut [Complex<T>]) {
        let mut a = [chunk[0], chunk[2], chunk[4], chunk[6], chunk[8]];
        let mut b = [chunk[5], chunk[7], chunk[9], chunk[1], chunk[3]];

        self.bf5.run(&mut a);
        self.bf5.run(&mut b);

        chunk[0] = a[0] + b[0];
        chunk[5] = a[0] - b[0];
        chunk[6] = a[1] + b[1];
        chunk[1] = a[1] - b[1];
        chunk[2] = a[2] + b[2];
        chunk[7] = a[2] - b[2];
        chunk[8] = a[3] + b[3];
        chunk[3] = a[3] - b[3];
        chunk[4] = a[4] + b[4];
        chunk[9] = a[4] - b[4];
    }
}

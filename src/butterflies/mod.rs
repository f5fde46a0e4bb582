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
use crate::twiddles::TwiddleMode;
use crate::{FftSample, MixFftError};
use num_complex::Complex;
use num_traits::AsPrimitive;

mod bf10;
mod bf2;
mod bf3;
mod bf4;
mod bf5;
mod bf8;
mod odd;

pub(crate) use bf2::Butterfly2;
pub(crate) use bf3::Butterfly3;
pub(crate) use bf4::Butterfly4;
pub(crate) use bf5::Butterfly5;
pub(crate) use bf8::Butterfly8;
pub(crate) use bf10::Butterfly10;
pub(crate) use odd::OddButterfly;

/// Short DFT used by one stage, picked once from the stage radix.
pub(crate) enum RadixKernel<T> {
    Identity,
    Radix2(Butterfly2<T>),
    Radix3(Butterfly3<T>),
    Radix4(Butterfly4<T>),
    Radix5(Butterfly5<T>),
    Radix8(Butterfly8<T>),
    Radix10(Butterfly10<T>),
    Odd(OddButterfly<T>),
}

impl<T: FftSample> RadixKernel<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn new(radix: usize, mode: TwiddleMode) -> Result<Self, MixFftError> {
        Ok(match radix {
            1 => RadixKernel::Identity,
            2 => RadixKernel::Radix2(Butterfly2::new()),
            3 => RadixKernel::Radix3(Butterfly3::new()),
            4 => RadixKernel::Radix4(Butterfly4::new()),
            5 => RadixKernel::Radix5(Butterfly5::new()),
            8 => RadixKernel::Radix8(Butterfly8::new()),
            10 => RadixKernel::Radix10(Butterfly10::new()),
            _ => RadixKernel::Odd(OddButterfly::new(radix, mode)?),
        })
    }

    /// Transforms the first `radix` elements of `chunk` in place.
    #[inline]
    pub(crate) fn run(&self, chunk: &mut [Complex<T>]) {
        match self {
            RadixKernel::Identity => {}
            RadixKernel::Radix2(bf) => bf.run(chunk),
            RadixKernel::Radix3(bf) => bf.run(chunk),
            RadixKernel::Radix4(bf) => bf.run(chunk),
            RadixKernel::Radix5(bf) => bf.run(chunk),
            RadixKernel::Radix8(bf) => bf.run(chunk),
            RadixKernel::Radix10(bf) => bf.run(chunk),
            RadixKernel::Odd(bf) => bf.run(chunk),
        }
    }
}

#[cfg(test)]
macro_rules! test_butterfly {
    ($method_name: ident, $bf_name: ident, $size: expr) => {
        #[test]
        fn $method_name() {
            use crate::util::{naive_dft, random_signal, relative_error};
            for _ in 0..8 {
                let input = random_signal::<f64>($size);
                let reference = naive_dft(&input);
                let mut output = input.to_vec();
                $bf_name::<f64>::new().run(&mut output);
                let error = relative_error(&output, &reference);
                assert!(error < 1e-13, "error {error} for size {}", $size);
            }

            let input = random_signal::<f32>($size);
            let reference = naive_dft(&input);
            let mut output = input.to_vec();
            $bf_name::<f32>::new().run(&mut output);
            let error = relative_error(&output, &reference);
            assert!(error < 1e-5, "error {error} for size {} in f32", $size);
        }
    };
}

#[cfg(test)]
pub(crate) use test_butterfly;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::{naive_dft, random_signal, relative_error};

    #[test]
    fn test_kernel_dispatch() {
        for radix in [1usize, 2, 3, 4, 5, 7, 8, 10, 11, 37] {
            let kernel = RadixKernel::<f64>::new(radix, TwiddleMode::Recurrence).unwrap();
            match (radix, &kernel) {
                (1, RadixKernel::Identity)
                | (2, RadixKernel::Radix2(_))
                | (3, RadixKernel::Radix3(_))
                | (4, RadixKernel::Radix4(_))
                | (5, RadixKernel::Radix5(_))
                | (8, RadixKernel::Radix8(_))
                | (10, RadixKernel::Radix10(_))
                | (7 | 11 | 37, RadixKernel::Odd(_)) => {}
                _ => panic!("unexpected kernel for radix {radix}"),
            }
            let input = random_signal::<f64>(radix);
            let mut output = input.to_vec();
            kernel.run(&mut output);
            let error = relative_error(&output, &naive_dft(&input));
            assert!(error < 1e-12, "radix {radix}: error {error}");
        }
    }

    #[test]
    fn test_unsupported_radix() {
        assert!(RadixKernel::<f64>::new(6, TwiddleMode::Recurrence).is_err());
        assert!(RadixKernel::<f64>::new(41, TwiddleMode::Recurrence).is_err());
    }
}

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
use crate::err::try_vec;
use crate::util::compute_twiddle;
use crate::{FftSample, MixFftError};
use num_complex::Complex;
use num_traits::AsPrimitive;

/// How stage twiddles and prime-kernel roots of unity are produced.
#[derive(Debug, Copy, Clone, Default, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum TwiddleMode {
    /// Powers are accumulated by repeated complex multiplication.
    /// Avoids trigonometric calls at the cost of a small drift that grows with the stage length.
    #[default]
    Recurrence,
    /// Every root is computed directly from `sin`/`cos` in double precision.
    Direct,
}

/// Trig table for a prime kernel: `radix` powers of `e^{-2πi/radix}`.
pub(crate) fn make_trig_table<T: FftSample>(
    radix: usize,
    mode: TwiddleMode,
) -> Result<Vec<Complex<T>>, MixFftError>
where
    f64: AsPrimitive<T>,
{
    let mut table = try_vec![Complex::<T>::new(T::zero(), T::zero()); radix];
    if radix == 0 {
        return Ok(table);
    }
    table[0] = Complex::new(T::one(), T::zero());
    match mode {
        TwiddleMode::Recurrence => {
            if radix > 1 {
                let root = compute_twiddle::<T>(1, radix);
                table[1] = root;
                for i in 2..radix {
                    table[i] = root * table[i - 1];
                }
            }
        }
        TwiddleMode::Direct => {
            for (i, dst) in table.iter_mut().enumerate().skip(1) {
                *dst = compute_twiddle(i, radix);
            }
        }
    }
    Ok(table)
}

/// Produces per-`dataNo` twiddles of one stage.
///
/// For `dataNo = d` the table holds `w^0..w^{radix-1}` with `w = e^{-2πi d/(sofar * radix)}`.
/// Calls must come in increasing `dataNo` order, starting at zero.
pub(crate) struct StageTwiddles<T> {
    mode: TwiddleMode,
    radix: usize,
    cycle: usize,
    rotation: Complex<T>,
    current: Complex<T>,
}

impl<T: FftSample> StageTwiddles<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn new(sofar: usize, radix: usize, mode: TwiddleMode) -> Self {
        let cycle = sofar * radix;
        StageTwiddles {
            mode,
            radix,
            cycle,
            rotation: compute_twiddle(1, cycle),
            current: Complex::new(T::one(), T::zero()),
        }
    }

    pub(crate) fn fill(&mut self, data_no: usize, table: &mut [Complex<T>]) {
        let table = &mut table[..self.radix];
        table[0] = Complex::new(T::one(), T::zero());
        match self.mode {
            TwiddleMode::Recurrence => {
                if self.radix > 1 {
                    table[1] = self.current;
                    for i in 2..self.radix {
                        table[i] = self.current * table[i - 1];
                    }
                }
                self.current = self.rotation * self.current;
            }
            TwiddleMode::Direct => {
                for (i, dst) in table.iter_mut().enumerate().skip(1) {
                    *dst = compute_twiddle(data_no * i, self.cycle);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trig_table_modes_agree() {
        for radix in [3usize, 7, 11, 13, 17, 19, 23, 29, 31, 37] {
            let recurrence = make_trig_table::<f64>(radix, TwiddleMode::Recurrence).unwrap();
            let direct = make_trig_table::<f64>(radix, TwiddleMode::Direct).unwrap();
            for (a, b) in recurrence.iter().zip(direct.iter()) {
                assert!((a - b).norm() < 1e-13, "radix {radix}: {a} != {b}");
            }
        }
    }

    #[test]
    fn test_stage_twiddles() {
        let sofar = 25;
        let radix = 4;
        let mut recurrence = StageTwiddles::<f64>::new(sofar, radix, TwiddleMode::Recurrence);
        let mut direct = StageTwiddles::<f64>::new(sofar, radix, TwiddleMode::Direct);
        let mut a = [Complex::new(0f64, 0f64); 4];
        let mut b = [Complex::new(0f64, 0f64); 4];
        for data_no in 0..sofar {
            recurrence.fill(data_no, &mut a);
            direct.fill(data_no, &mut b);
            for i in 0..radix {
                let expected = compute_twiddle::<f64>(data_no * i, sofar * radix);
                assert!((a[i] - expected).norm() < 1e-13);
                assert!((b[i] - expected).norm() < 1e-15);
            }
        }
    }
}

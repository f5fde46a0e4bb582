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
use crate::stages::StageDescriptor;

/// Mixed-radix digit-reversal permutation.
///
/// Writes `src` into `dst` in the order the in-place stages expect, so that after the
/// last stage the spectrum ends up in natural order.
///
/// The source index is driven by an odometer with one digit per stage, digit `s` counting
/// `0..radix[s]`. Incrementing digit `s` moves the source index by `remain[s]`. When digit `s`
/// wraps, the `radix[s] * remain[s]` it has accumulated is taken back and the carry moves
/// the source by `remain[s + 1]` instead. The last element is a fixed point.
pub(crate) fn digit_reversed_permute<T: Copy>(
    stages: &[StageDescriptor],
    src: &[T],
    dst: &mut [T],
) {
    let n = src.len();
    assert_eq!(n, dst.len());
    if n == 0 {
        return;
    }

    let mut digits = vec![0usize; stages.len()];
    let mut source = 0usize;

    for dst in dst.iter_mut().take(n - 1) {
        *dst = src[source];

        let mut digit = 0usize;
        source += stages[digit].remain;
        digits[digit] += 1;
        while digits[digit] >= stages[digit].radix {
            digits[digit] = 0;
            source -= stages[digit].radix * stages[digit].remain;
            digit += 1;
            // never carries out of the last digit before the last element
            source += stages[digit].remain;
            digits[digit] += 1;
        }
    }

    dst[n - 1] = src[n - 1];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factorize::factorize;
    use crate::stages::plan_stages;

    fn permutation(n: usize) -> Vec<usize> {
        let stages = plan_stages(n, &factorize(n).unwrap());
        let src = (0..n).collect::<Vec<_>>();
        let mut dst = vec![0usize; n];
        digit_reversed_permute(&stages, &src, &mut dst);
        dst
    }

    #[test]
    fn test_single_stage_is_identity() {
        assert_eq!(permutation(1), vec![0]);
        assert_eq!(permutation(8), (0..8).collect::<Vec<_>>());
        assert_eq!(permutation(37), (0..37).collect::<Vec<_>>());
    }

    #[test]
    fn test_digit_reversal_6() {
        // stages [2, 3]
        assert_eq!(permutation(6), vec![0, 3, 1, 4, 2, 5]);
    }

    #[test]
    fn test_digit_reversal_12() {
        // stages [3, 4]
        assert_eq!(permutation(12), vec![0, 4, 8, 1, 5, 9, 2, 6, 10, 3, 7, 11]);
    }

    #[test]
    fn test_is_permutation() {
        for n in [16usize, 60, 100, 210, 1000, 1024, 1155, 1369] {
            let mut p = permutation(n);
            assert_eq!(p[n - 1], n - 1);
            p.sort_unstable();
            assert_eq!(p, (0..n).collect::<Vec<_>>(), "not a permutation for {n}");
        }
    }
}

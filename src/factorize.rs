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
use crate::MixFftError;

/// Largest prime factor a transform length may contain.
pub const MAX_PRIME_FACTOR: usize = 37;

/// Radices with dedicated short kernels, in the order they are tried.
const PREFERRED_RADICES: [usize; 6] = [10, 8, 5, 4, 3, 2];

/// Splits `n` into the radices the stages are executed with.
///
/// Preferred radices are divided out first, largest first, a trailing `8 * 2` pair is
/// rebalanced into `4 * 4`, and whatever remains is split by trial division.
/// The returned list is in execution order, which is the reverse of discovery order,
/// so the odd primes found by trial division run first.
///
/// For example: `factorize(1024) -> [4, 4, 8, 8]`, `factorize(14) -> [7, 2]`.
/// Special cases:
///  - n == 0 -> [MixFftError::ZeroSizedFft]
///  - n == 1 -> `[1]`, a single identity stage
///  - a cofactor without prime factors up to [MAX_PRIME_FACTOR] is returned whole in
///    [MixFftError::UnsupportedLength], e.g. `41 * 43 -> UnsupportedLength(1763)`
pub fn factorize(n: usize) -> Result<Vec<usize>, MixFftError> {
    if n == 0 {
        return Err(MixFftError::ZeroSizedFft);
    }
    if n == 1 {
        return Ok(vec![1]);
    }

    let mut factors = Vec::new();
    let mut rem = n;

    let mut radix_idx = 0usize;
    while rem > 1 && radix_idx < PREFERRED_RADICES.len() {
        let radix = PREFERRED_RADICES[radix_idx];
        if rem.is_multiple_of(radix) {
            rem /= radix;
            factors.push(radix);
        } else {
            radix_idx += 1;
        }
    }

    // 8 * 2 is slower than 4 * 4
    if factors.last() == Some(&2) {
        let last = factors.len() - 1;
        if let Some(eight) = factors[..last].iter().rposition(|&f| f == 8) {
            factors[last] = 4;
            factors[eight] = 4;
        }
    }

    // a remainder without prime factors up to MAX_PRIME_FACTOR stays whole
    if rem > 1 {
        let mut k = 2usize;
        while k <= MAX_PRIME_FACTOR && k <= rem / k {
            while rem.is_multiple_of(k) {
                rem /= k;
                factors.push(k);
            }
            k += 1;
        }
        if rem > 1 {
            factors.push(rem);
        }
    }

    factors.reverse();

    if let Some(&factor) = factors.iter().find(|&&f| f > MAX_PRIME_FACTOR) {
        tracing::debug!(n, factor, "fft length is not supported");
        return Err(MixFftError::UnsupportedLength(factor));
    }

    Ok(factors)
}

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

/// Largest value stored in [SMOOTH_NUMBERS].
const SMOOTH_LIMIT: u64 = 10_000_000_000;

const fn count_smooth_numbers(limit: u64) -> usize {
    let mut count = 0usize;
    let mut p2 = 1u64;
    while p2 <= limit {
        let mut p3 = p2;
        while p3 <= limit {
            let mut p5 = p3;
            while p5 <= limit {
                count += 1;
                p5 *= 5;
            }
            p3 *= 3;
        }
        p2 *= 2;
    }
    count
}

/// Ascending 2^a * 3^b * 5^c, merged from three running multiples.
const fn make_smooth_numbers<const N: usize>() -> [u64; N] {
    let mut table = [0u64; N];
    if N == 0 {
        return table;
    }
    table[0] = 1;
    let mut i2 = 0usize;
    let mut i3 = 0usize;
    let mut i5 = 0usize;
    let mut idx = 1usize;
    while idx < N {
        let n2 = table[i2] * 2;
        let n3 = table[i3] * 3;
        let n5 = table[i5] * 5;
        let mut next = n2;
        if n3 < next {
            next = n3;
        }
        if n5 < next {
            next = n5;
        }
        table[idx] = next;
        if next == n2 {
            i2 += 1;
        }
        if next == n3 {
            i3 += 1;
        }
        if next == n5 {
            i5 += 1;
        }
        idx += 1;
    }
    table
}

const SMOOTH_COUNT: usize = count_smooth_numbers(SMOOTH_LIMIT);

/// Every 5-smooth number up to `10^10`, ascending.
pub(crate) static SMOOTH_NUMBERS: [u64; SMOOTH_COUNT] = make_smooth_numbers::<SMOOTH_COUNT>();

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Rounding {
    Nearest,
    NotLarger,
    NotSmaller,
}

fn find_good_size(n: u64, rounding: Rounding) -> u64 {
    if n <= 1 {
        return 1;
    }

    let idx = SMOOTH_NUMBERS.partition_point(|&x| x < n);
    if idx < SMOOTH_NUMBERS.len() {
        let upper = SMOOTH_NUMBERS[idx];
        if upper == n {
            return n;
        }
        // idx > 0 since SMOOTH_NUMBERS[0] == 1 < n
        let lower = SMOOTH_NUMBERS[idx - 1];
        return match rounding {
            Rounding::NotLarger => lower,
            Rounding::NotSmaller => upper,
            Rounding::Nearest => {
                if n - lower < upper - n {
                    lower
                } else {
                    upper
                }
            }
        };
    }

    // beyond the table: keep the 2, 3, 5 part and replace the rest with a power of two
    let mut residual = n;
    for factor in [2u64, 3, 5] {
        while residual.is_multiple_of(factor) {
            residual /= factor;
        }
    }
    if residual == 1 {
        return n;
    }
    let smooth_part = n / residual;

    let (lower, upper) = match residual.checked_next_power_of_two() {
        Some(p2) => ((p2 / 2) * smooth_part, p2.checked_mul(smooth_part)),
        None => (1u64 << 63, None),
    };
    let upper = upper.or_else(|| smallest_smooth_not_below(n));

    match (rounding, upper) {
        (Rounding::NotLarger, _) | (_, None) => lower,
        (Rounding::NotSmaller, Some(upper)) => upper,
        (Rounding::Nearest, Some(upper)) => {
            if n - lower < upper - n {
                lower
            } else {
                upper
            }
        }
    }
}

/// Smallest `2^a * 3^b * 5^c >= n` representable in `u64`, if any.
fn smallest_smooth_not_below(n: u64) -> Option<u64> {
    let mut best: Option<u64> = None;
    let mut p5 = 1u64;
    loop {
        let mut p35 = p5;
        loop {
            let candidate = if p35 >= n {
                Some(p35)
            } else {
                n.div_ceil(p35)
                    .checked_next_power_of_two()
                    .and_then(|p2| p2.checked_mul(p35))
            };
            if let Some(candidate) = candidate {
                best = Some(best.map_or(candidate, |b| b.min(candidate)));
            }
            match p35.checked_mul(3) {
                Some(next) => p35 = next,
                None => break,
            }
        }
        match p5.checked_mul(5) {
            Some(next) => p5 = next,
            None => break,
        }
    }
    best
}

/// Finds a 5-smooth transform length close to `n`, it may be larger or smaller than `n`.
///
/// Ties between the two neighbours resolve to the larger one.
/// Returns `1` for `n <= 1`.
pub fn good_size(n: u64) -> u64 {
    find_good_size(n, Rounding::Nearest)
}

/// Finds the closest 5-smooth transform length that is smaller than or equal to `n`.
pub fn good_size_not_larger(n: u64) -> u64 {
    find_good_size(n, Rounding::NotLarger)
}

/// Finds the closest 5-smooth transform length that is larger than or equal to `n`.
///
/// Beyond `10^10` the candidate is built from the 2, 3, 5 part of `n` times a power of two,
/// which is not always the closest one. If that candidate does not fit in `u64`
/// the smallest 5-smooth `u64` not below `n` is searched for directly.
///
/// # Notes
///
/// No 5-smooth `u64` is `>= n` when `n` exceeds the largest 5-smooth `u64`.
/// Only for such `n` the result is smaller than `n`, and it equals `good_size_not_larger(n)`.
pub fn good_size_not_smaller(n: u64) -> u64 {
    find_good_size(n, Rounding::NotSmaller)
}

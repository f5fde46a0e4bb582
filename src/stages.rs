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

/// Strides of a single stage.
///
/// `sofar` is the product of radices of all earlier stages and `remain` the product of
/// radices of all later stages, so `sofar * radix * remain` is always the transform length.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct StageDescriptor {
    pub sofar: usize,
    pub radix: usize,
    pub remain: usize,
}

/// Builds stage descriptors for `factors` given in execution order.
pub fn plan_stages(n: usize, factors: &[usize]) -> Vec<StageDescriptor> {
    let mut stages = Vec::with_capacity(factors.len());
    let mut sofar = 1usize;
    let mut remain = n;
    for &radix in factors {
        remain /= radix;
        stages.push(StageDescriptor {
            sofar,
            radix,
            remain,
        });
        sofar *= radix;
    }
    stages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factorize::factorize;

    #[test]
    fn test_stages_12() {
        let factors = factorize(12).unwrap();
        let stages = plan_stages(12, &factors);
        assert_eq!(
            stages,
            vec![
                StageDescriptor {
                    sofar: 1,
                    radix: 3,
                    remain: 4
                },
                StageDescriptor {
                    sofar: 3,
                    radix: 4,
                    remain: 1
                },
            ]
        );
    }

    #[test]
    fn test_stage_invariant() {
        for n in [1usize, 2, 7, 16, 60, 100, 1000, 1024, 1155, 13690] {
            let factors = factorize(n).unwrap();
            let stages = plan_stages(n, &factors);
            assert_eq!(stages.len(), factors.len());
            assert_eq!(stages[0].sofar, 1);
            assert_eq!(stages.last().unwrap().remain, 1);
            for (i, stage) in stages.iter().enumerate() {
                assert_eq!(stage.sofar * stage.radix * stage.remain, n, "stage {i} of {n}");
                if i > 0 {
                    assert_eq!(stage.sofar, stages[i - 1].sofar * stages[i - 1].radix);
                }
            }
        }
    }
}

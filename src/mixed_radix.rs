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
use crate::butterflies::RadixKernel;
use crate::err::try_vec;
use crate::factorize::factorize;
use crate::permute::digit_reversed_permute;
use crate::stages::{StageDescriptor, plan_stages};
use crate::twiddles::{StageTwiddles, TwiddleMode};
use crate::{FftDirection, FftExecutor, FftOptions, FftSample, MAX_PRIME_FACTOR, MixFftError};
use num_complex::Complex;
use num_traits::{AsPrimitive, Zero};

/// Mixed-radix FFT planned for a single length.
///
/// Factorization, stage strides and kernels are resolved once in [MixedRadixFft::new];
/// the plan is immutable afterwards and every execution owns its own scratch,
/// so a plan may be shared between threads.
pub struct MixedRadixFft<T> {
    execution_length: usize,
    direction: FftDirection,
    twiddle_mode: TwiddleMode,
    factors: Vec<usize>,
    stages: Vec<StageDescriptor>,
    kernels: Vec<RadixKernel<T>>,
}

impl<T: FftSample> MixedRadixFft<T>
where
    f64: AsPrimitive<T>,
{
    pub fn new(
        size: usize,
        fft_direction: FftDirection,
        options: FftOptions,
    ) -> Result<MixedRadixFft<T>, MixFftError> {
        let factors = factorize(size)?;
        let stages = plan_stages(size, &factors);
        let kernels = stages
            .iter()
            .map(|stage| RadixKernel::new(stage.radix, options.twiddle_mode))
            .collect::<Result<Vec<_>, MixFftError>>()?;

        tracing::debug!(
            size,
            ?factors,
            direction = ?fft_direction,
            twiddle_mode = ?options.twiddle_mode,
            "planned mixed-radix fft"
        );

        Ok(MixedRadixFft {
            execution_length: size,
            direction: fft_direction,
            twiddle_mode: options.twiddle_mode,
            factors,
            stages,
            kernels,
        })
    }

    /// Radices in execution order.
    pub fn factors(&self) -> &[usize] {
        &self.factors
    }

    pub fn stages(&self) -> &[StageDescriptor] {
        &self.stages
    }

    pub fn twiddle_mode(&self) -> TwiddleMode {
        self.twiddle_mode
    }

    fn transform_chunk(&self, src: &[Complex<T>], dst: &mut [Complex<T>]) {
        digit_reversed_permute(&self.stages, src, dst);

        // inverse is the forward transform of the conjugate, conjugated back
        if self.direction == FftDirection::Inverse {
            dst.iter_mut().for_each(|x| *x = x.conj());
        }

        for (stage, kernel) in self.stages.iter().zip(self.kernels.iter()) {
            twiddle_stage(stage, kernel, self.twiddle_mode, dst);
        }

        if self.direction == FftDirection::Inverse {
            dst.iter_mut().for_each(|x| *x = x.conj());
        }
    }
}

/// Runs one stage in place: rotates every block by the stage twiddles and applies the kernel.
///
/// Block `groupNo` of `dataNo` holds the `radix` samples at
/// `dataNo + groupNo * sofar * radix + k * sofar`, `k = 0..radix`.
/// Rotation is skipped when `sofar == 1` or `dataNo == 0` since all twiddles are one there.
fn twiddle_stage<T: FftSample>(
    stage: &StageDescriptor,
    kernel: &RadixKernel<T>,
    mode: TwiddleMode,
    data: &mut [Complex<T>],
) where
    f64: AsPrimitive<T>,
{
    let StageDescriptor {
        sofar,
        radix,
        remain,
    } = *stage;
    if radix < 2 {
        return;
    }

    let mut block = [Complex::<T>::zero(); MAX_PRIME_FACTOR];
    let mut twiddles = [Complex::<T>::zero(); MAX_PRIME_FACTOR];
    let block = &mut block[..radix];

    let mut stage_twiddles = StageTwiddles::<T>::new(sofar, radix, mode);
    let group_stride = sofar * radix;

    for data_no in 0..sofar {
        if sofar > 1 {
            stage_twiddles.fill(data_no, &mut twiddles);
        }
        let rotate = sofar > 1 && data_no > 0;

        let mut base = data_no;
        for _ in 0..remain {
            if rotate {
                block[0] = data[base];
                for (k, dst) in block.iter_mut().enumerate().skip(1) {
                    *dst = data[base + k * sofar] * twiddles[k];
                }
            } else {
                for (k, dst) in block.iter_mut().enumerate() {
                    *dst = data[base + k * sofar];
                }
            }

            kernel.run(block);

            for (k, src) in block.iter().enumerate() {
                data[base + k * sofar] = *src;
            }
            base += group_stride;
        }
    }
}

impl<T: FftSample> FftExecutor<T> for MixedRadixFft<T>
where
    f64: AsPrimitive<T>,
{
    fn execute(&self, in_place: &mut [Complex<T>]) -> Result<(), MixFftError> {
        if !in_place.len().is_multiple_of(self.execution_length) {
            return Err(MixFftError::InvalidSizeMultiplier(
                in_place.len(),
                self.execution_length,
            ));
        }

        tracing::trace!(
            length = self.execution_length,
            batch = in_place.len() / self.execution_length,
            "executing mixed-radix fft"
        );

        let mut scratch = try_vec![Complex::<T>::zero(); self.execution_length];

        for chunk in in_place.chunks_exact_mut(self.execution_length) {
            scratch.copy_from_slice(chunk);
            self.transform_chunk(&scratch, chunk);
        }
        Ok(())
    }

    fn execute_out_of_place(
        &self,
        src: &[Complex<T>],
        dst: &mut [Complex<T>],
    ) -> Result<(), MixFftError> {
        if !src.len().is_multiple_of(self.execution_length) {
            return Err(MixFftError::InvalidSizeMultiplier(
                src.len(),
                self.execution_length,
            ));
        }
        if src.len() != dst.len() {
            return Err(MixFftError::InvalidInputLength(src.len(), dst.len()));
        }

        tracing::trace!(
            length = self.execution_length,
            batch = src.len() / self.execution_length,
            "executing mixed-radix fft out of place"
        );

        for (src, dst) in src
            .chunks_exact(self.execution_length)
            .zip(dst.chunks_exact_mut(self.execution_length))
        {
            self.transform_chunk(src, dst);
        }
        Ok(())
    }

    fn direction(&self) -> FftDirection {
        self.direction
    }

    fn length(&self) -> usize {
        self.execution_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::{naive_dft, random_signal, relative_error, test_mixed_radix};

    test_mixed_radix!(test_size_1, f64, 1, TwiddleMode::Recurrence, 1e-12);
    test_mixed_radix!(test_size_4, f64, 4, TwiddleMode::Recurrence, 1e-9);
    test_mixed_radix!(test_size_5, f64, 5, TwiddleMode::Recurrence, 1e-9);
    test_mixed_radix!(test_size_6, f64, 6, TwiddleMode::Recurrence, 1e-9);
    test_mixed_radix!(test_size_8, f64, 8, TwiddleMode::Recurrence, 1e-9);
    test_mixed_radix!(test_size_10, f64, 10, TwiddleMode::Recurrence, 1e-9);
    test_mixed_radix!(test_size_12, f64, 12, TwiddleMode::Recurrence, 1e-9);
    test_mixed_radix!(test_size_16, f64, 16, TwiddleMode::Recurrence, 1e-9);
    test_mixed_radix!(test_size_60, f64, 60, TwiddleMode::Recurrence, 1e-9);
    test_mixed_radix!(test_size_100, f64, 100, TwiddleMode::Recurrence, 1e-9);
    test_mixed_radix!(test_size_1024, f64, 1024, TwiddleMode::Recurrence, 1e-9);
    test_mixed_radix!(test_size_1000, f64, 1000, TwiddleMode::Recurrence, 1e-9);
    test_mixed_radix!(test_size_2000, f64, 2000, TwiddleMode::Recurrence, 1e-9);
    test_mixed_radix!(test_size_1155, f64, 1155, TwiddleMode::Recurrence, 1e-9);
    test_mixed_radix!(test_size_1369, f64, 1369, TwiddleMode::Recurrence, 1e-9);
    test_mixed_radix!(test_size_74, f64, 74, TwiddleMode::Recurrence, 1e-9);
    test_mixed_radix!(test_size_1024_direct, f64, 1024, TwiddleMode::Direct, 1e-9);
    test_mixed_radix!(test_size_1155_direct, f64, 1155, TwiddleMode::Direct, 1e-9);
    test_mixed_radix!(test_size_1369_direct, f64, 1369, TwiddleMode::Direct, 1e-9);
    test_mixed_radix!(test_size_2000_direct, f64, 2000, TwiddleMode::Direct, 1e-9);
    test_mixed_radix!(test_size_1000_f32, f32, 1000, TwiddleMode::Recurrence, 1e-4);
    test_mixed_radix!(test_size_1386_f32, f32, 1386, TwiddleMode::Direct, 1e-4);

    #[test]
    fn test_all_admissible_small_sizes() {
        for size in 1..=300usize {
            let fft = match MixedRadixFft::<f64>::new(
                size,
                FftDirection::Forward,
                FftOptions::default(),
            ) {
                Ok(fft) => fft,
                Err(MixFftError::UnsupportedLength(_)) => continue,
                Err(err) => panic!("unexpected error {err} for {size}"),
            };
            assert_eq!(fft.factors().iter().product::<usize>(), size);
            let input = random_signal::<f64>(size);
            let mut output = vec![Complex::<f64>::zero(); size];
            fft.execute_out_of_place(&input, &mut output).unwrap();
            let error = relative_error(&output, &naive_dft(&input));
            assert!(error < 1e-9, "relative error {error} for size {size}");
        }
    }

    #[test]
    fn test_impulse() {
        for size in [1usize, 7, 12, 100, 1024] {
            let fft =
                MixedRadixFft::<f64>::new(size, FftDirection::Forward, FftOptions::default())
                    .unwrap();
            let mut data = vec![Complex::<f64>::zero(); size];
            data[0] = Complex::new(1., 0.);
            fft.execute(&mut data).unwrap();
            for (k, y) in data.iter().enumerate() {
                assert!(
                    (y.re - 1.).abs() < 1e-12 && y.im.abs() < 1e-12,
                    "bin {k} of {size} is {y}"
                );
            }
        }
    }

    #[test]
    fn test_energy() {
        for size in [30usize, 128, 210, 1000] {
            let fft =
                MixedRadixFft::<f64>::new(size, FftDirection::Forward, FftOptions::default())
                    .unwrap();
            let input = random_signal::<f64>(size);
            let mut output = vec![Complex::<f64>::zero(); size];
            fft.execute_out_of_place(&input, &mut output).unwrap();
            let time_energy: f64 = input.iter().map(|x| x.norm_sqr()).sum();
            let freq_energy: f64 = output.iter().map(|x| x.norm_sqr()).sum();
            let expected = size as f64 * time_energy;
            assert!(
                ((freq_energy - expected) / expected).abs() < 1e-10,
                "energy {freq_energy} != {expected} for size {size}"
            );
        }
    }

    #[test]
    fn test_inverse_roundtrip() {
        for size in [2usize, 9, 49, 120, 1000, 1369] {
            let forward =
                MixedRadixFft::<f64>::new(size, FftDirection::Forward, FftOptions::default())
                    .unwrap();
            let inverse =
                MixedRadixFft::<f64>::new(size, FftDirection::Inverse, FftOptions::default())
                    .unwrap();
            assert_eq!(inverse.direction(), FftDirection::Inverse);
            let src = random_signal::<f64>(size);
            let mut data = src.to_vec();
            forward.execute(&mut data).unwrap();
            inverse.execute(&mut data).unwrap();
            let scale = 1. / size as f64;
            for (a, b) in data.iter().zip(src.iter()) {
                assert!((*a * scale - *b).norm() < 1e-10, "{a} != {b} for size {size}");
            }
        }
    }

    #[test]
    fn test_matches_rustfft() {
        let mut planner = rustfft::FftPlanner::<f64>::new();
        for size in [36usize, 77, 250, 486, 1210, 1920] {
            for direction in [FftDirection::Forward, FftDirection::Inverse] {
                let input = random_signal::<f64>(size);
                let mut reference = input.to_vec();
                let plan = match direction {
                    FftDirection::Forward => planner.plan_fft_forward(size),
                    FftDirection::Inverse => planner.plan_fft_inverse(size),
                };
                rustfft::Fft::process(plan.as_ref(), &mut reference);

                let fft = MixedRadixFft::<f64>::new(size, direction, FftOptions::default())
                    .unwrap();
                let mut output = input.to_vec();
                fft.execute(&mut output).unwrap();
                let error = relative_error(&output, &reference);
                assert!(error < 1e-10, "error {error} for {size} {direction:?}");
            }
        }
    }

    #[test]
    fn test_batch() {
        let size = 60;
        let fft =
            MixedRadixFft::<f64>::new(size, FftDirection::Forward, FftOptions::default()).unwrap();
        let input = random_signal::<f64>(size * 3);
        let mut output = vec![Complex::<f64>::zero(); size * 3];
        fft.execute_out_of_place(&input, &mut output).unwrap();
        for (src, dst) in input.chunks_exact(size).zip(output.chunks_exact(size)) {
            assert!(relative_error(dst, &naive_dft(src)) < 1e-9);
        }
    }

    #[test]
    fn test_input_is_untouched() {
        let fft =
            MixedRadixFft::<f64>::new(12, FftDirection::Forward, FftOptions::default()).unwrap();
        let input = random_signal::<f64>(12);
        let copy = input.to_vec();
        let mut output = vec![Complex::<f64>::zero(); 12];
        fft.execute_out_of_place(&input, &mut output).unwrap();
        assert_eq!(input, copy);
    }

    #[test]
    fn test_invalid_sizes() {
        assert_eq!(
            MixedRadixFft::<f64>::new(41, FftDirection::Forward, FftOptions::default()).err(),
            Some(MixFftError::UnsupportedLength(41))
        );
        assert_eq!(
            MixedRadixFft::<f64>::new(0, FftDirection::Forward, FftOptions::default()).err(),
            Some(MixFftError::ZeroSizedFft)
        );

        let fft =
            MixedRadixFft::<f64>::new(10, FftDirection::Forward, FftOptions::default()).unwrap();
        let mut data = vec![Complex::<f64>::zero(); 15];
        assert_eq!(
            fft.execute(&mut data),
            Err(MixFftError::InvalidSizeMultiplier(15, 10))
        );
        let src = vec![Complex::<f64>::zero(); 10];
        let mut dst = vec![Complex::<f64>::zero(); 20];
        assert_eq!(
            fft.execute_out_of_place(&src, &mut dst),
            Err(MixFftError::InvalidInputLength(10, 20))
        );
    }

    #[test]
    fn test_shared_between_threads() {
        let fft =
            MixedRadixFft::<f64>::new(840, FftDirection::Forward, FftOptions::default()).unwrap();
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    let input = random_signal::<f64>(840);
                    let mut output = vec![Complex::<f64>::zero(); 840];
                    fft.execute_out_of_place(&input, &mut output).unwrap();
                    assert!(relative_error(&output, &naive_dft(&input)) < 1e-9);
                });
            }
        });
    }
}

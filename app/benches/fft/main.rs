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
use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use mixfft::{FftDirection, FftExecutor, FftOptions, MixFft, MixedRadixFft, TwiddleMode};
use num_complex::Complex;
use rand::Rng;
use rustfft::FftPlanner;

pub fn bench_rustfft_averages(c: &mut Criterion) {
    c.bench_function("rustfft avg smooth", |b| {
        b.iter_batched(
            || {
                (500..=1500)
                    .filter(|&n| mixfft::good_size(n as u64) == n as u64)
                    .map(|n| {
                        let input: Vec<Complex<f64>> =
                            (0..n).map(|i| Complex::new(i as f64, 0.0)).collect();
                        let fft = FftPlanner::<f64>::new().plan_fft_forward(n);
                        (input, fft)
                    })
                    .collect::<Vec<_>>()
            },
            |plans_and_inputs| {
                for (input, fft) in plans_and_inputs.iter() {
                    let mut c = input.to_vec();
                    fft.process(&mut c);
                }
            },
            BatchSize::LargeInput,
        );
    });
}

pub fn bench_mixfft_averages(c: &mut Criterion) {
    c.bench_function("mixfft avg smooth", |b| {
        b.iter_batched(
            || {
                (500..=1500)
                    .filter(|&n| mixfft::good_size(n as u64) == n as u64)
                    .map(|n| {
                        let input: Vec<Complex<f64>> =
                            (0..n).map(|i| Complex::new(i as f64, 0.0)).collect();
                        let fft = MixFft::make_forward_fft_f64(n).unwrap();
                        (input, fft)
                    })
                    .collect::<Vec<_>>()
            },
            |plans_and_inputs| {
                for (i, (input, fft)) in plans_and_inputs.iter().enumerate() {
                    let mut c = input.to_vec();
                    match fft.execute(&mut c) {
                        Ok(_) => {}
                        Err(err) => panic!("err: {err} on {i}"),
                    };
                }
            },
            BatchSize::LargeInput,
        );
    });
}

fn check_size_group(c: &mut Criterion, n: usize, group: String) {
    let mut input = vec![Complex::<f64>::default(); n];
    for z in input.iter_mut() {
        *z = Complex {
            re: rand::rng().random(),
            im: rand::rng().random(),
        };
    }

    c.bench_function(format!("rustfft {group}").as_str(), |b| {
        let plan = FftPlanner::new().plan_fft_forward(input.len());
        let mut working = input.to_vec();
        b.iter(|| {
            plan.process(&mut working);
        })
    });

    c.bench_function(format!("mixfft {group}").as_str(), |b| {
        let plan = MixFft::make_forward_fft_f64(input.len()).unwrap();
        let mut working = input.to_vec();
        b.iter(|| {
            plan.execute(&mut working).unwrap();
        })
    });

    c.bench_function(format!("mixfft direct {group}").as_str(), |b| {
        let plan = MixedRadixFft::<f64>::new(
            input.len(),
            FftDirection::Forward,
            FftOptions {
                twiddle_mode: TwiddleMode::Direct,
            },
        )
        .unwrap();
        let mut working = input.to_vec();
        b.iter(|| {
            plan.execute(&mut working).unwrap();
        })
    });

    c.bench_function(format!("mixfft {group}s").as_str(), |b| {
        let plan = MixFft::make_forward_fft_f32(input.len()).unwrap();
        let mut working = input
            .iter()
            .map(|&x| Complex::new(x.re as f32, x.im as f32))
            .collect::<Vec<_>>();
        b.iter(|| {
            plan.execute(&mut working).unwrap();
        })
    });
}

pub fn bench_sizes(c: &mut Criterion) {
    check_size_group(c, 1000, "decimal 1000".to_string());
    check_size_group(c, 100_000, "decimal 100000".to_string());
    check_size_group(c, 4096, "power 4096".to_string());
    check_size_group(c, 3888, "smooth 3888".to_string());
    check_size_group(c, 37 * 37 * 10, "prime 37".to_string());
    check_size_group(c, 7 * 11 * 13 * 17, "primes 7-17".to_string());
}

pub fn bench_good_size(c: &mut Criterion) {
    c.bench_function("good_size table", |b| {
        b.iter(|| {
            (1..10_000u64).map(mixfft::good_size).sum::<u64>()
        })
    });
    c.bench_function("good_size overflow", |b| {
        b.iter(|| {
            (0..1000u64)
                .map(|x| mixfft::good_size_not_smaller(20_000_000_000 + x * 7919))
                .sum::<u64>()
        })
    });
}

criterion_group!(
    benches,
    bench_sizes,
    bench_good_size,
    bench_mixfft_averages,
    bench_rustfft_averages
);
criterion_main!(benches);

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
use mixfft::{
    FftExecutor, MixFft, factorize, good_size, good_size_not_larger, good_size_not_smaller,
};
use rand::Rng;
use rustfft::FftPlanner;
use rustfft::num_complex::Complex;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn compare_with_rustfft(n: usize) {
    let mut rng = rand::rng();
    let input = (0..n)
        .map(|_| Complex::new(rng.random_range(-1f64..1f64), rng.random_range(-1f64..1f64)))
        .collect::<Vec<_>>();

    let plan = match MixFft::make_forward_fft_f64(n) {
        Ok(plan) => plan,
        Err(err) => {
            tracing::warn!(n, %err, "skipping unsupported length");
            return;
        }
    };
    let mut working = input.to_vec();
    let start = Instant::now();
    plan.execute(&mut working).unwrap();
    let mixfft_time = start.elapsed();

    let reference_plan = FftPlanner::<f64>::new().plan_fft_forward(n);
    let mut reference = input.to_vec();
    let start = Instant::now();
    reference_plan.process(&mut reference);
    let rustfft_time = start.elapsed();

    let max_diff = working
        .iter()
        .zip(reference.iter())
        .map(|(a, b)| (a - b).norm())
        .fold(0f64, f64::max);

    println!(
        "{n}: factors {:?}, mixfft {:?}, rustfft {:?}, max diff {max_diff:e}",
        factorize(n).unwrap_or_default(),
        mixfft_time,
        rustfft_time
    );
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let sizes = std::env::args()
        .skip(1)
        .filter_map(|x| x.parse::<u64>().ok())
        .collect::<Vec<_>>();
    let sizes = if sizes.is_empty() {
        vec![1000, 1001, 4096, 12345, 37 * 37 * 10]
    } else {
        sizes
    };

    tracing::info!(?sizes, "comparing mixfft with rustfft");

    for n in sizes {
        println!(
            "{n}: good {}, not larger {}, not smaller {}",
            good_size(n),
            good_size_not_larger(n),
            good_size_not_smaller(n)
        );
        compare_with_rustfft(n as usize);
    }
}

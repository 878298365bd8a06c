use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use realfft::RealFftPlanner as RustRealFftPlanner;
use srfft::{
    populate_real_twiddles, rfft_forward, rfft_inverse_with_input_as_scratch, Complex32, Direction,
};

fn bench_rfft(c: &mut Criterion) {
    let mut group = c.benchmark_group("rfft_forward");
    for &size in &[1024usize, 2048, 4096] {
        let input: Vec<f32> = (0..size).map(|i| i as f32).collect();
        let mut output = vec![Complex32::zero(); size / 2 + 1];
        let mut scratch = vec![Complex32::zero(); size / 2 + 1];
        let mut twiddles = vec![Complex32::zero(); size];
        populate_real_twiddles(size, &mut twiddles, Direction::Forward).unwrap();
        group.bench_function(BenchmarkId::new("srfft", size), |b| {
            b.iter(|| {
                rfft_forward(size, &twiddles, black_box(&input), &mut output, &mut scratch)
                    .unwrap();
            })
        });

        let mut planner = RustRealFftPlanner::<f32>::new();
        let rfft = planner.plan_fft_forward(size);
        let mut in_data = input.clone();
        let mut out_data = rfft.make_output_vec();
        group.bench_function(BenchmarkId::new("realfft", size), |b| {
            b.iter(|| {
                rfft.process(&mut in_data, &mut out_data).unwrap();
            })
        });
    }
    group.finish();
}

fn bench_irfft(c: &mut Criterion) {
    let mut group = c.benchmark_group("rfft_inverse");
    for &size in &[1024usize, 4096] {
        let mut twiddles = vec![Complex32::zero(); size];
        populate_real_twiddles(size, &mut twiddles, Direction::Inverse).unwrap();
        let spectrum: Vec<Complex32> = (0..size / 2 + 1)
            .map(|k| Complex32::new(1.0 / (k as f32 + 1.0), 0.0))
            .collect();
        let mut packed = spectrum.clone();
        let mut scratch = vec![Complex32::zero(); size / 2 + 1];
        let mut output = vec![0.0f32; size];
        // The aliasing variant overwrites its input, so each run restores it.
        group.bench_function(BenchmarkId::new("srfft", size), |b| {
            b.iter(|| {
                packed.copy_from_slice(&spectrum);
                rfft_inverse_with_input_as_scratch(
                    size,
                    &twiddles,
                    &mut packed,
                    &mut output,
                    &mut scratch,
                )
                .unwrap();
            })
        });

        let mut planner = RustRealFftPlanner::<f32>::new();
        let irfft = planner.plan_fft_inverse(size);
        let mut in_data = irfft.make_input_vec();
        let mut out_data = irfft.make_output_vec();
        group.bench_function(BenchmarkId::new("realfft", size), |b| {
            b.iter(|| {
                in_data[0].re = 1.0;
                let _ = irfft.process(&mut in_data, &mut out_data);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rfft, bench_irfft);
criterion_main!(benches);

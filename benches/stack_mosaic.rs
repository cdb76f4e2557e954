use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ndarray::Array3;

use lf_stack_rs::lf_pipeline::{LfiBuffer, SaiImage};

fn generate_mock_view(size: usize, seed: usize) -> SaiImage {
    let pixels = Array3::from_shape_fn((size, size, 3), |(y, x, c)| {
        ((y + x + c + seed) % 256) as u8
    });
    SaiImage { pixels }
}

fn benchmark_stack_by_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("stack_by_grid");

    let cases = vec![
        (9, 64, "3x3_64px"),
        (49, 64, "7x7_64px"),
        (49, 256, "7x7_256px"),
        (81, 64, "9x9_64px"),
    ];

    for (target_n_sai, img_size, label) in cases {
        let views: Vec<SaiImage> = (0..target_n_sai)
            .map(|offset| generate_mock_view(img_size, offset))
            .collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(label),
            &views,
            |b, views| {
                b.iter(|| {
                    let mut buffer = LfiBuffer::new(target_n_sai, img_size).unwrap();
                    for (offset, view) in views.iter().enumerate() {
                        buffer.place(offset, black_box(view)).unwrap();
                    }
                    buffer.into_mosaic().unwrap()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_stack_by_grid);
criterion_main!(benches);

use batch_resizer::processing::{resample, target_dimensions};
use batch_resizer::FilterType;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{DynamicImage, ImageBuffer, Rgb};

fn create_test_image(width: u32, height: u32) -> DynamicImage {
    let img = ImageBuffer::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    });
    DynamicImage::ImageRgb8(img)
}

fn benchmark_resize(c: &mut Criterion) {
    let image = create_test_image(1024, 768);
    let (width, height) = target_dimensions(image.width(), image.height(), 50);

    let mut group = c.benchmark_group("resample_1024x768_to_50pct");
    for filter in [FilterType::Nearest, FilterType::Triangle, FilterType::Lanczos3] {
        group.bench_function(format!("{:?}", filter), |b| {
            b.iter(|| resample(black_box(&image), width, height, filter))
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_resize);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};
use wmark_core::{embed_dct, embed_lsb};

fn prepare_host() -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_fn(256, 256, |x, y| {
        let v = ((x * 7 + y * 13) % 256) as u8;
        Rgb([v, v.wrapping_add(40), v.wrapping_add(80)])
    }))
}

fn prepare_watermark() -> DynamicImage {
    DynamicImage::ImageLuma8(GrayImage::from_fn(64, 64, |x, y| {
        Luma([((x / 4 + y / 4) % 2 * 255) as u8])
    }))
}

fn embedding(c: &mut Criterion) {
    let host = prepare_host();
    let mark = prepare_watermark();

    c.bench_function("lsb embed 256x256", |b| {
        b.iter(|| embed_lsb(black_box(&host), black_box(&mark)).unwrap())
    });

    c.bench_function("dct embed 256x256", |b| {
        b.iter(|| embed_dct(black_box(&host), black_box(&mark), 0.05).unwrap())
    });
}

criterion_group!(benches, embedding);
criterion_main!(benches);

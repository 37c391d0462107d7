use criterion::{criterion_group, criterion_main, Criterion};
use lsb_core::media::image::lsb_codec::{embed_bits, extract_bits};
use lsb_core::media::{LsbCodecOptions, PixelBuffer};
use lsb_core::{frame, Frame};

pub fn image_extraction(c: &mut Criterion) {
    c.bench_function("Image Extraction", |b| {
        let opts = LsbCodecOptions::default();
        let mut img = PixelBuffer::from(image::RgbImage::new(512, 512));
        let secret = frame::build("txt", &[42; 64 * 1024]).expect("Cannot build frame");
        embed_bits(&mut img, &secret, &opts).expect("Cannot embed secret message");

        b.iter(|| {
            let bits = extract_bits(&img, &opts).expect("Cannot extract frame");
            Frame::from_bit_stream(&bits).expect("Cannot parse frame")
        })
    });
}

criterion_group!(benches, image_extraction);
criterion_main!(benches);

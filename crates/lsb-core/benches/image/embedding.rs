use criterion::{criterion_group, criterion_main, Criterion};
use lsb_core::frame;
use lsb_core::media::image::lsb_codec::embed_bits;
use lsb_core::media::{LsbCodecOptions, PixelBuffer};

fn carrier() -> PixelBuffer {
    let mut rng = fastrand::Rng::with_seed(7);
    PixelBuffer::from(image::RgbImage::from_fn(512, 512, |_, _| {
        image::Rgb([rng.u8(..), rng.u8(..), rng.u8(..)])
    }))
}

pub fn image_embedding(c: &mut Criterion) {
    let secret = frame::build("txt", &[42; 64 * 1024]).expect("Cannot build frame");

    c.bench_function("Image Embedding", |b| {
        let mut plain_image = carrier();
        let opts = LsbCodecOptions::default();

        b.iter(|| {
            embed_bits(&mut plain_image, &secret, &opts).expect("Cannot embed secret message");
        })
    });

    c.bench_function("Image Embedding Seeded", |b| {
        let mut plain_image = carrier();
        let opts = LsbCodecOptions::default().with_seed(Some(1));

        b.iter(|| {
            embed_bits(&mut plain_image, &secret, &opts).expect("Cannot embed secret message");
        })
    });
}

criterion_group!(benches, image_embedding);
criterion_main!(benches);

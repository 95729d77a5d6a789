use criterion::{criterion_group, criterion_main, Criterion};
use mp3stego_core::media::LsbCount;
use mp3stego_core::{engine, CodecOptions};

pub fn mp3_encoding(c: &mut Criterion) {
    let cover = std::fs::read("tests/audio/plain/carrier.mp3").expect("Cannot read carrier");
    let secret_message = b"Hello World!";

    c.bench_function("MP3 Encoding to memory", |b| {
        let options = CodecOptions::default();

        b.iter(|| engine::hide(&cover, &secret_message[..], &options).expect("Cannot hide"))
    });

    c.bench_function("MP3 Encoding to memory, keyed 4 bit", |b| {
        let options = CodecOptions::default()
            .with_lsb_count(LsbCount::MAX)
            .with_random(true)
            .with_key("SuperSecret42");

        b.iter(|| engine::hide(&cover, &secret_message[..], &options).expect("Cannot hide"))
    });
}

criterion_group!(benches, mp3_encoding);
criterion_main!(benches);

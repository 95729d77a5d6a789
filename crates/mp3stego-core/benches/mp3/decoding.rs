use criterion::{criterion_group, criterion_main, Criterion};
use mp3stego_core::media::mp3;
use mp3stego_core::{engine, CodecOptions};

pub fn mp3_decoding(c: &mut Criterion) {
    let cover = std::fs::read("tests/audio/plain/carrier.mp3").expect("Cannot read carrier");
    let options = CodecOptions::default().with_random(true).with_key("SuperSecret42");
    let stego = engine::hide(&cover, b"Hello World!", &options).expect("Cannot hide");

    c.bench_function("MP3 Frame Parsing", |b| {
        b.iter(|| mp3::parse(&stego).expect("Cannot parse"))
    });

    c.bench_function("MP3 Decoding", |b| {
        b.iter(|| engine::unveil(&stego, &options).expect("Cannot unveil"))
    });
}

criterion_group!(benches, mp3_decoding);
criterion_main!(benches);

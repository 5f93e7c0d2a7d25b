//! Performance benchmarks for oxihuff-codec
//!
//! - Tree construction for small and full alphabets
//! - Encode/decode throughput for different data patterns
//! - Full pipeline (count, build, generate, encode, verify)

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use oxihuff_codec::{
    CodecConfig, HuffmanCodec, build_tree, count_frequencies, decode, encode, generate_codes,
};
use std::hint::black_box;

/// Type alias for pattern generator functions
type PatternGenerator = fn(usize) -> Vec<u8>;

/// Generate test data patterns for benchmarking
mod test_data {
    /// Uniform data - one symbol only
    pub fn uniform(size: usize) -> Vec<u8> {
        vec![b'a'; size]
    }

    /// Random data - flat distribution over all bytes
    pub fn random(size: usize) -> Vec<u8> {
        let mut data = Vec::with_capacity(size);
        let mut seed: u64 = 0x123456789ABCDEF0;
        for _ in 0..size {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            data.push((seed >> 32) as u8);
        }
        data
    }

    /// Text-like data - skewed distribution
    pub fn text_like(size: usize) -> Vec<u8> {
        let text = b"The quick brown fox jumps over the lazy dog. \
                     Pack my box with five dozen liquor jugs. ";
        text.iter().copied().cycle().take(size).collect()
    }
}

const PATTERNS: [(&str, PatternGenerator); 3] = [
    ("uniform", test_data::uniform),
    ("random", test_data::random),
    ("text", test_data::text_like),
];

fn bench_build_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_tree");
    for (name, generator) in PATTERNS {
        let freq = count_frequencies(&generator(4096));
        group.bench_with_input(BenchmarkId::from_parameter(name), &freq, |b, freq| {
            b.iter(|| build_tree(black_box(freq)).unwrap());
        });
    }
    group.finish();
}

fn bench_encode_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_decode");
    for size in [256usize, 1024, 16 * 1024] {
        for (name, generator) in PATTERNS {
            let data = generator(size);
            let tree = build_tree(&count_frequencies(&data)).unwrap();
            let codes = generate_codes(&tree);
            let bits = encode(&data, &codes).unwrap();

            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(
                BenchmarkId::new(format!("encode/{}", name), size),
                &data,
                |b, data| b.iter(|| encode(black_box(data), &codes).unwrap()),
            );
            group.bench_with_input(
                BenchmarkId::new(format!("decode/{}", name), size),
                &bits,
                |b, bits| b.iter(|| decode(black_box(bits), &tree).unwrap()),
            );
        }
    }
    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let codec = HuffmanCodec::new(CodecConfig::new(64 * 1024));
    let data = test_data::text_like(1024);
    c.bench_function("pipeline/text_1k", |b| {
        b.iter(|| codec.run(black_box(&data)).unwrap())
    });
}

criterion_group!(benches, bench_build_tree, bench_encode_decode, bench_pipeline);
criterion_main!(benches);

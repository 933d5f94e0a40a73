use bintext_codec::{BinaryText, Codec, CodecError, DigitWidth, ParallelBinaryText};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use std::hint::black_box;

// Baseline: formatter-based encoding with no validation on decode
struct FormatBaseline;
impl Codec for FormatBaseline {
    fn encode(&self, bytes: &[u8]) -> Result<Vec<u8>, CodecError> {
        Ok(bytes
            .iter()
            .map(|b| format!("{b:08b}"))
            .collect::<String>()
            .into_bytes())
    }
    fn decode_values(&self, artifact: &[u8]) -> Result<Vec<u64>, CodecError> {
        Ok(artifact
            .chunks(8)
            .map(|c| c.iter().fold(0u64, |acc, &d| (acc << 1) | u64::from(d - b'0')))
            .collect())
    }
}

fn bench_codecs(c: &mut Criterion) {
    let mut rng = rand::thread_rng();

    let strategies: Vec<(&str, Box<dyn Codec>)> = vec![
        ("FormatBaseline", Box::new(FormatBaseline)),
        ("BinaryText", Box::new(BinaryText::new(DigitWidth::BYTE))),
        (
            "ParallelBinaryText",
            Box::new(ParallelBinaryText::new(DigitWidth::BYTE)),
        ),
    ];

    let sizes = vec![
        ("Small", 1024),
        ("Medium", 64 * 1024),
        ("Large", 1024 * 1024),
        ("Huge", 8 * 1024 * 1024),
    ];

    for (size_name, size) in sizes {
        let input: Vec<u8> = (0..size).map(|_| rng.gen()).collect();

        let mut group_encode = c.benchmark_group(format!("Encode_{size_name}"));
        group_encode.throughput(Throughput::Bytes(size as u64));

        for (strategy_name, strategy) in &strategies {
            group_encode.bench_with_input(
                BenchmarkId::new(*strategy_name, size),
                &input,
                |b, i| b.iter(|| strategy.encode(black_box(i)).unwrap()),
            );
        }
        group_encode.finish();

        let mut group_decode = c.benchmark_group(format!("Decode_{size_name}"));
        group_decode.throughput(Throughput::Bytes(size as u64));

        for (strategy_name, strategy) in &strategies {
            let encoded = strategy.encode(&input).unwrap();
            group_decode.bench_with_input(
                BenchmarkId::new(*strategy_name, size),
                &encoded,
                |b, e| b.iter(|| strategy.decode(black_box(e)).unwrap()),
            );
        }
        group_decode.finish();
    }
}

criterion_group!(benches, bench_codecs);
criterion_main!(benches);

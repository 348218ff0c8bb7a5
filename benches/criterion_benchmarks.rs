use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use oxi58::{decode, encode, fixed};

fn gen_data(size: usize, seed: u64) -> Vec<u8> {
    let mut s = seed;
    let mut out = Vec::with_capacity(size);
    for _ in 0..size {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        out.push((s >> 33) as u8);
    }
    out
}

fn bench_generic_encode(c: &mut Criterion) {
    let mut g = c.benchmark_group("generic_encode");
    for size in [32usize, 64, 256, 1024] {
        let data = gen_data(size, size as u64);
        g.throughput(Throughput::Bytes(size as u64));
        g.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| encode(black_box(data)));
        });
    }
    g.finish();
}

fn bench_generic_decode(c: &mut Criterion) {
    let mut g = c.benchmark_group("generic_decode");
    for size in [32usize, 64, 256, 1024] {
        let encoded = encode(&gen_data(size, size as u64));
        g.throughput(Throughput::Bytes(size as u64));
        g.bench_with_input(BenchmarkId::from_parameter(size), &encoded, |b, encoded| {
            b.iter(|| decode(black_box(encoded)).unwrap());
        });
    }
    g.finish();
}

fn bench_fixed_32(c: &mut Criterion) {
    let data = gen_data(32, 7);
    let bytes: [u8; 32] = data.as_slice().try_into().unwrap();
    let encoded = fixed::encode_32(&bytes);

    let mut g = c.benchmark_group("fixed_32");
    g.throughput(Throughput::Bytes(32));
    g.bench_function("encode", |b| {
        let mut buf = [0u8; fixed::ENCODED_32_MAX_LEN];
        b.iter(|| fixed::encode_32_into(black_box(&bytes), &mut buf));
    });
    g.bench_function("decode", |b| {
        b.iter(|| fixed::decode_32(black_box(&encoded)).unwrap());
    });
    // The generic path on the same input, for comparison.
    g.bench_function("encode_generic", |b| {
        b.iter(|| encode(black_box(&data)));
    });
    g.bench_function("decode_generic", |b| {
        b.iter(|| decode(black_box(&encoded)).unwrap());
    });
    g.finish();
}

fn bench_fixed_64(c: &mut Criterion) {
    let data = gen_data(64, 9);
    let bytes: [u8; 64] = data.as_slice().try_into().unwrap();
    let encoded = fixed::encode_64(&bytes);

    let mut g = c.benchmark_group("fixed_64");
    g.throughput(Throughput::Bytes(64));
    g.bench_function("encode", |b| {
        let mut buf = [0u8; fixed::ENCODED_64_MAX_LEN];
        b.iter(|| fixed::encode_64_into(black_box(&bytes), &mut buf));
    });
    g.bench_function("decode", |b| {
        b.iter(|| fixed::decode_64(black_box(&encoded)).unwrap());
    });
    g.bench_function("encode_generic", |b| {
        b.iter(|| encode(black_box(&data)));
    });
    g.bench_function("decode_generic", |b| {
        b.iter(|| decode(black_box(&encoded)).unwrap());
    });
    g.finish();
}

criterion_group!(
    benches,
    bench_generic_encode,
    bench_generic_decode,
    bench_fixed_32,
    bench_fixed_64
);
criterion_main!(benches);

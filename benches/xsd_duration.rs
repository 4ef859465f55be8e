use criterion::{criterion_group, criterion_main, Criterion};
use xsd_duration::{Codec, Duration};

fn encode(c: &mut Criterion) {
    let codec = Codec::new();

    c.bench_function("encode (zero)", |b| {
        b.iter(|| codec.encode(0));
    });

    let value = Duration::years(2)
        .saturating_add(Duration::months(6))
        .saturating_add(Duration::days(5))
        .saturating_add(Duration::hours(12))
        .saturating_add(Duration::minutes(35))
        .saturating_add(Duration::seconds(30))
        .as_nanos();

    c.bench_function("encode (all components)", |b| {
        b.iter(|| codec.encode(value));
    });

    c.bench_function("encode (fraction)", |b| {
        b.iter(|| codec.encode(-90_500_000_001));
    });
}

fn decode(c: &mut Criterion) {
    let codec = Codec::new();

    c.bench_function("decode (simple)", |b| {
        b.iter(|| codec.decode("PT20M").unwrap());
    });

    c.bench_function("decode (complex)", |b| {
        b.iter(|| codec.decode("-P2Y6M5DT12H35M30.123456789S").unwrap());
    });

    c.bench_function("decode (rejected)", |b| {
        b.iter(|| codec.decode("P2Y6M5DT12H35M30Stest").unwrap_err());
    });
}

fn round_trip(c: &mut Criterion) {
    let codec = Codec::new();

    c.bench_function("round trip", |b| {
        b.iter(|| codec.decode(&codec.encode(i64::MAX)).unwrap());
    });
}

criterion_group!(benches, encode, decode, round_trip);
criterion_main!(benches);

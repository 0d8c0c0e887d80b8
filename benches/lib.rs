use {
    bigdecimal::BigDecimal,
    criterion::{black_box, criterion_group, criterion_main, Criterion},
    num_bigint::BigUint,
    rusteth::ethutil::wei::{Unit, Wei},
    std::str::FromStr,
};

fn bench_from_unit(c: &mut Criterion) {
    let num = BigDecimal::from_str("1234.567890123456789").unwrap();

    c.bench_function("wei_from_unit_ether", |b| {
        b.iter(|| Wei::from_unit(black_box(num.clone()), Unit::Ether))
    });
}

fn bench_to_unit(c: &mut Criterion) {
    let amount = Wei::new(
        BigUint::parse_bytes(b"123456789012345678901234567890", 10).unwrap(),
    );

    c.bench_function("wei_to_unit_ether", |b| {
        b.iter(|| black_box(&amount).to_unit(Unit::Ether))
    });

    c.bench_function("wei_to_unit_rounded_ether", |b| {
        b.iter(|| black_box(&amount).to_unit_rounded(Unit::Ether, 4))
    });
}

fn bench_hex_round_trip(c: &mut Criterion) {
    let amount = Wei::from(1_000_000_000_000_000_000u128);
    let encoded = amount.to_hex();

    c.bench_function("wei_to_hex", |b| b.iter(|| black_box(&amount).to_hex()));

    c.bench_function("wei_from_hex", |b| {
        b.iter(|| Wei::from_hex(black_box(&encoded)))
    });
}

criterion_group!(
    benches,
    bench_from_unit,
    bench_to_unit,
    bench_hex_round_trip
);
criterion_main!(benches);

//! Performance validation for payload assembly and checksum computation
//!
//! The codec sits in the checkout request path of its callers, so assembly
//! should stay comfortably in the microsecond range. The error paths are
//! not benchmarked - they only trigger on malformed input.

use brcode::{crc16, generate_pix_payload, parse_payload, PixData};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn donation() -> PixData {
    PixData {
        key: "victor@example.com".to_string(),
        name: "Victor Monteiro Torres".to_string(),
        city: "Goiania".to_string(),
        amount: Some(25.00),
        description: Some("Doacao Farejei".to_string()),
        txid: Some("FAREJEI123".to_string()),
    }
}

fn bench_payload_generation(c: &mut Criterion) {
    let data = donation();
    c.bench_function("generate_pix_payload", |b| {
        b.iter(|| generate_pix_payload(black_box(&data)))
    });
}

fn bench_checksum(c: &mut Criterion) {
    let payload = generate_pix_payload(&donation()).unwrap();
    let body = &payload[..payload.len() - 4];
    c.bench_function("crc16", |b| b.iter(|| crc16(black_box(body.as_bytes()))));
}

fn bench_parse(c: &mut Criterion) {
    let payload = generate_pix_payload(&donation()).unwrap();
    c.bench_function("parse_payload", |b| {
        b.iter(|| parse_payload(black_box(&payload)))
    });
}

criterion_group!(
    benches,
    bench_payload_generation,
    bench_checksum,
    bench_parse
);
criterion_main!(benches);

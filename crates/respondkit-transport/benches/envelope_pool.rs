//! Envelope Pool Benchmarks
//!
//! Compares encoding a response body through a pooled envelope against
//! allocating a fresh envelope for every response.
//!
//! # Payload Sizes
//!
//! - **Small**: a short string payload
//! - **Medium**: an object with a dozen fields

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use respondkit_transport::{Codec, Envelope, EnvelopePool, JsonCodec};
use serde_json::json;
use std::hint::black_box;

fn payloads() -> Vec<(&'static str, serde_json::Value)> {
    vec![
        ("small", json!("ok")),
        (
            "medium",
            json!({
                "user_id": 12345,
                "username": "jdoe",
                "email": "jdoe@example.com",
                "display_name": "John Doe",
                "roles": ["admin", "editor", "viewer"],
                "active": true,
                "created_at": 1_700_000_000,
                "updated_at": 1_700_000_500,
                "locale": "en-US",
                "timezone": "UTC",
                "score": 98.5,
                "tags": ["a", "b", "c"]
            }),
        ),
    ]
}

fn bench_encode(c: &mut Criterion) {
    let codec = JsonCodec::new();
    let pool = EnvelopePool::default();
    let mut group = c.benchmark_group("envelope_encode");

    for (name, payload) in payloads() {
        group.bench_with_input(BenchmarkId::new("pooled", name), &payload, |b, payload| {
            b.iter(|| {
                let mut envelope = pool.acquire();
                envelope.code = 200_001;
                envelope.set_msg("Success");
                let _ = envelope.set_data(payload);
                black_box(codec.encode(&*envelope))
            })
        });

        group.bench_with_input(BenchmarkId::new("fresh", name), &payload, |b, payload| {
            b.iter(|| {
                let mut envelope = Envelope {
                    code: 200_001,
                    msg: "Success".to_owned(),
                    ..Envelope::default()
                };
                let _ = envelope.set_data(payload);
                black_box(codec.encode(&envelope))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_encode);
criterion_main!(benches);

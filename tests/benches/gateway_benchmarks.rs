//! # FT Gateway Benchmarks
//!
//! | Area | Measured |
//! |------|----------|
//! | shared-identifiers | seeded and random identifier generation |
//! | normalizer | body rewrite for small and large JSON objects |
//! | gateway | full request through the middleware stack |

use axum::body::Body;
use axum::http::Request;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ft_api_gateway::{ApiGatewayService, FieldNormalizer, GatewayConfig};
use shared_identifiers::{derive_identifier, random_identifier, IdentifierKind};
use tower::ServiceExt;

// ============================================================================
// Identifier generation
// ============================================================================

fn bench_identifiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("identifiers");

    for kind in [IdentifierKind::Address, IdentifierKind::TxHash, IdentifierKind::ContentHash] {
        group.bench_with_input(BenchmarkId::new("derive", format!("{:?}", kind)), &kind, |b, &k| {
            b.iter(|| derive_identifier(k, black_box(1_700_000_123)))
        });
        group.bench_with_input(BenchmarkId::new("random", format!("{:?}", kind)), &kind, |b, &k| {
            b.iter(|| random_identifier(k))
        });
    }

    group.finish();
}

// ============================================================================
// Response normalization
// ============================================================================

fn bench_normalizer(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalizer");
    let normalizer = FieldNormalizer::default();

    for files in [1usize, 100, 1000] {
        let list: Vec<_> = (0..files)
            .map(|i| serde_json::json!({"id": i.to_string(), "name": format!("f{}.txt", i)}))
            .collect();
        let body = serde_json::to_vec(&serde_json::json!({
            "success": true,
            "files": list,
            "data": {},
        }))
        .unwrap();

        group.throughput(Throughput::Bytes(body.len() as u64));
        group.bench_with_input(BenchmarkId::new("apply_bytes", files), &body, |b, body| {
            b.iter(|| {
                normalizer
                    .apply_bytes(black_box(body), || "0x0".to_string())
                    .unwrap()
            })
        });
    }

    group.finish();
}

// ============================================================================
// End-to-end request
// ============================================================================

fn bench_gateway(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let service = rt
        .block_on(ApiGatewayService::new(GatewayConfig::default()))
        .unwrap();

    let mut group = c.benchmark_group("gateway");
    group.bench_function("get_health", |b| {
        b.iter(|| {
            rt.block_on(async {
                let req = Request::get("/api/health").body(Body::empty()).unwrap();
                service.app().oneshot(req).await.unwrap()
            })
        })
    });
    group.bench_function("files_sent_authenticated", |b| {
        b.iter(|| {
            rt.block_on(async {
                let req = Request::get("/files/sent")
                    .header("authorization", "auth-token-1")
                    .body(Body::empty())
                    .unwrap();
                service.app().oneshot(req).await.unwrap()
            })
        })
    });
    group.finish();
}

criterion_group!(benches, bench_identifiers, bench_normalizer, bench_gateway);
criterion_main!(benches);

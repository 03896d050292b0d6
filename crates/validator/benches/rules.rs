//! Benchmarks for the hot rule predicates.
//!
//! Patterns are compiled lazily, so every group warms the statics once before
//! measuring.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use inputguard_validator::rules::{self, Rule};

// ============================================================================
// Flat predicates
// ============================================================================

fn bench_predicates(c: &mut Criterion) {
    let cases: &[(&str, fn(&str) -> bool, &str)] = &[
        ("tag", rules::is_tag, "machine-learning"),
        ("email", rules::is_email, "first.last@sub.example.com"),
        ("url", rules::is_url, "https://example.com/a/b?c=d#e"),
        (
            "docker_image",
            rules::is_docker_image,
            "registry/team/app:1.2.3-rc.1",
        ),
        (
            "uuid4_without_hyphens",
            rules::is_uuid4_without_hyphens,
            "0123456789ab4def8123456789abcdef",
        ),
        ("time", rules::is_time, "2024-05-01T12:30:00+02:00"),
        ("password", rules::is_password, "Passw0rd!"),
    ];

    let mut group = c.benchmark_group("predicates");
    for &(name, predicate, input) in cases {
        black_box(predicate(input));
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, input| {
            b.iter(|| black_box(predicate(black_box(input))));
        });
    }
    group.finish();
}

// ============================================================================
// Rejection paths
// ============================================================================

fn bench_rejections(c: &mut Criterion) {
    let long = "a".repeat(4096);

    let mut group = c.benchmark_group("rejections");
    group.bench_function("url_over_length", |b| {
        b.iter(|| black_box(rules::is_url(black_box(&long))));
    });
    group.bench_function("tag_over_length", |b| {
        b.iter(|| black_box(rules::is_tag(black_box(&long))));
    });
    group.bench_function("password_weak", |b| {
        b.iter(|| black_box(rules::is_password(black_box("password"))));
    });
    group.finish();
}

// ============================================================================
// Registry dispatch
// ============================================================================

fn bench_registry(c: &mut Criterion) {
    c.bench_function("registry_parse_and_check", |b| {
        b.iter(|| {
            black_box(rules::check(
                black_box("alphanumeric"),
                black_box("abc-123"),
                &["7"],
            ))
        });
    });

    c.bench_function("registry_direct_check", |b| {
        b.iter(|| black_box(Rule::Alphanumeric.check(black_box("abc-123"), &["7"])));
    });

    let allowed = ["android", "ios", "web", "desktop", "cli"];
    c.bench_function("registry_in_last", |b| {
        b.iter(|| black_box(Rule::In.check(black_box("cli"), &allowed)));
    });
}

criterion_group!(benches, bench_predicates, bench_rejections, bench_registry);
criterion_main!(benches);

//! Classification benchmarks
//!
//! Measures the worklist traversal on the shapes that matter:
//! - Typical messages (a few text nodes, optionally one emoticon)
//! - Wide sequences scanned to the end
//! - Deep nesting up to and past the depth cap
//!
//! Run with: cargo bench -p murmur-core

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use murmur_core::{BubbleProps, ClassifyLimits, ContentNode, LayoutDecision, classify};

fn wrapped(mut node: ContentNode, levels: usize) -> ContentNode {
    for _ in 0..levels {
        node = ContentNode::container(node);
    }
    node
}

// ============================================================================
// Typical Messages
// ============================================================================

fn bench_typical(c: &mut Criterion) {
    let mut group = c.benchmark_group("typical");

    let text = vec![ContentNode::text("hello there"), ContentNode::text("how are you?")];
    group.bench_function("text_only", |b| {
        b.iter(|| classify(black_box(&text), ClassifyLimits::default()))
    });

    let sticker = vec![ContentNode::container(ContentNode::emoticon("wave"))];
    group.bench_function("wrapped_emoticon", |b| {
        b.iter(|| classify(black_box(&sticker), ClassifyLimits::default()))
    });

    let props = BubbleProps::new(ContentNode::sequence([
        ContentNode::text("look"),
        ContentNode::emoticon("cat"),
    ]))
    .with_is_me(false)
    .with_profile_image("a.png");
    group.bench_function("full_layout", |b| {
        b.iter(|| LayoutDecision::for_props(black_box(&props)))
    });

    group.finish();
}

// ============================================================================
// Wide and Deep Trees
// ============================================================================

fn bench_wide(c: &mut Criterion) {
    let mut group = c.benchmark_group("wide_plain");

    for width in [16usize, 256, 4096] {
        let content: Vec<ContentNode> = (0..width).map(|i| ContentNode::text(i.to_string())).collect();
        group.throughput(Throughput::Elements(width as u64));
        group.bench_with_input(BenchmarkId::from_parameter(width), &content, |b, content| {
            b.iter(|| classify(black_box(content), ClassifyLimits::unbounded()))
        });
    }

    group.finish();
}

fn bench_deep(c: &mut Criterion) {
    let mut group = c.benchmark_group("deep");

    for depth in [8usize, 64, 10_000] {
        let content = vec![wrapped(ContentNode::emoticon("bottom"), depth)];
        group.bench_with_input(BenchmarkId::new("default_limits", depth), &content, |b, content| {
            b.iter(|| classify(black_box(content), ClassifyLimits::default()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_typical, bench_wide, bench_deep);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use flowcut::graph::{bisect_farthest, global_min_cut, max_flow, CapacityGraph};

/// Two cliques of `size` nodes joined by three edges.
fn bridged_cliques(size: usize) -> CapacityGraph {
    let mut edges = Vec::new();
    for offset in [0, size] {
        for u in 0..size {
            for v in u + 1..size {
                edges.push((offset + u, offset + v));
            }
        }
    }
    edges.extend([(0, size), (1, size + 1), (2, size + 2)]);
    CapacityGraph::build(2 * size, &edges).unwrap()
}

fn bench_max_flow(c: &mut Criterion) {
    let mut group = c.benchmark_group("max_flow");
    for size in [16, 32, 64] {
        let graph = bridged_cliques(size);
        group.bench_with_input(BenchmarkId::new("bridged_cliques", size), &graph, |b, g| {
            b.iter(|| {
                let mut residual = g.clone();
                max_flow(&mut residual, black_box(3), black_box(size + 3)).unwrap()
            });
        });
    }
    group.finish();
}

fn bench_bisection(c: &mut Criterion) {
    let graph = bridged_cliques(24);
    c.bench_function("bisect_farthest", |b| {
        b.iter(|| bisect_farthest(black_box(&graph)).unwrap())
    });
    c.bench_function("global_min_cut", |b| {
        b.iter(|| global_min_cut(black_box(&graph)).unwrap())
    });
}

criterion_group!(benches, bench_max_flow, bench_bisection);
criterion_main!(benches);

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use hql_builder::{HqlBuilder, params};

/// Build a query with `n` condition lines, each binding one anonymous
/// parameter.
fn build_query(n: usize) -> HqlBuilder {
    let mut q = HqlBuilder::new();
    q.push("SELECT u FROM User u WHERE 1=1").unwrap();
    for i in 0..n {
        q.add(&format!("  AND u.col{i} = :"), params![i as i64])
            .unwrap();
    }
    q
}

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("hql_builder/compose");

    for n in [1, 5, 10, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(build_query(n)));
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("hql_builder/render");

    for n in [1, 5, 10, 50, 100] {
        let q = build_query(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &q, |b, q| {
            b.iter(|| black_box(q.render()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compose, bench_render);
criterion_main!(benches);

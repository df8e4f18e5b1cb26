use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use xcsp3_model::model::{
    constraint::Transition,
    constraints::{mdd::MddConstraint, regular::RegularConstraint},
    variable::VariableElement,
};

/// A deterministic chain automaton with `n` transitions.
fn chain_automaton(n: usize) -> Vec<Transition> {
    (0..n)
        .map(|i| Transition::new(format!("s{}", i), (i % 4) as i64, format!("s{}", i + 1)))
        .collect()
}

/// A layered diagram with `width` nodes per level, `width` values per node
/// and `depth` levels, ending in a single terminal.
fn layered_mdd(depth: usize, width: usize) -> Vec<Transition> {
    let mut transitions = Vec::new();
    for value in 0..width {
        transitions.push(Transition::new("root", value as i64, format!("n1_{}", value)));
    }
    for level in 1..depth {
        for node in 0..width {
            for value in 0..width {
                let to = if level + 1 == depth {
                    "t".to_owned()
                } else {
                    format!("n{}_{}", level + 1, value)
                };
                transitions.push(Transition::new(
                    format!("n{}_{}", level, node),
                    value as i64,
                    to,
                ));
            }
        }
    }
    transitions
}

fn scope(len: usize) -> Vec<VariableElement> {
    (0..len).map(|i| format!("x{}", i).into()).collect()
}

fn bench_regular_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("regular_validation");
    for size in [100usize, 1_000, 10_000] {
        let transitions = chain_automaton(size);
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &transitions,
            |b, transitions| {
                b.iter(|| {
                    RegularConstraint::new(
                        None,
                        scope(8),
                        black_box(transitions.clone()),
                        "s0",
                        vec![format!("s{}", size)],
                    )
                    .unwrap()
                })
            },
        );
    }
    group.finish();
}

fn bench_mdd_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("mdd_validation");
    for width in [2usize, 4, 8] {
        let depth = 10;
        let transitions = layered_mdd(depth, width);
        group.bench_with_input(
            BenchmarkId::from_parameter(width),
            &transitions,
            |b, transitions| {
                b.iter(|| {
                    MddConstraint::new(
                        None,
                        scope(depth),
                        black_box(transitions.clone()),
                        "root",
                        "t",
                    )
                    .unwrap()
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_regular_validation, bench_mdd_validation);
criterion_main!(benches);

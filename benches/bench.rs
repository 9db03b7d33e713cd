use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use walksat::graph_coloring::{self, Graph};
use walksat::sat::cnf::Cnf;
use walksat::sat::solver::{Config, WalkSat};

/// A planted 3-SAT instance: each clause contains at least one literal made
/// true by the all-true assignment, so the formula is satisfiable and every
/// benchmark run terminates.
fn planted_instance(num_vars: i32, num_clauses: usize, seed: u64) -> Cnf {
    let mut rng = fastrand::Rng::with_seed(seed);
    let clauses = (0..num_clauses)
        .map(|_| {
            let mut clause = vec![rng.i32(1..=num_vars)];
            for _ in 0..2 {
                let var = rng.i32(1..=num_vars);
                clause.push(if rng.bool() { var } else { -var });
            }
            clause
        })
        .collect();
    Cnf::new(num_vars as usize, clauses).expect("planted clauses are well formed")
}

fn seeded_config(seed: u64) -> Config {
    Config {
        seed: Some(seed),
        ..Config::default()
    }
}

fn bench_planted_3sat(c: &mut Criterion) {
    let cnf = planted_instance(100, 350, 3);
    c.bench_function("planted 3-sat 100v/350c", |b| {
        b.iter(|| {
            let mut solver = WalkSat::with_config(black_box(cnf.clone()), seeded_config(17));
            solver.solve().expect("planted instance is satisfiable")
        });
    });
}

fn bench_cycle_coloring(c: &mut Criterion) {
    // An even cycle is 2-colourable, so 3 colours always succeed.
    let mut graph = Graph::new(60);
    for node in 0..60 {
        graph.add_edge(node, (node + 1) % 60);
    }
    c.bench_function("colour 60-cycle with 3 colours", |b| {
        b.iter(|| {
            graph_coloring::color(black_box(&graph), 3, seeded_config(23))
                .expect("encoding is well formed")
                .expect("an even cycle is 3-colourable")
        });
    });
}

criterion_group!(benches, bench_planted_3sat, bench_cycle_coloring);
criterion_main!(benches);

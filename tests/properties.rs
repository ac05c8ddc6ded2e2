//! 随机图上的性质测试

use independentset::algorithm::{
    greedy_mis, greedy_mis_by_key, is_independent_set, is_maximal_independent_set,
    max_independent_set, ExactSolver, SolverConfig,
};
use independentset::{Edge, Graph};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_graph(rng: &mut StdRng, n: u32, p: f64) -> Graph<u32> {
    let mut g = Graph::from_parts(0..n, []);
    for u in 0..n {
        for v in (u + 1)..n {
            if rng.gen_bool(p) {
                g.add_edge(u, v);
            }
        }
    }
    g
}

fn samples(seed: u64, count: usize, max_n: u32) -> Vec<Graph<u32>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let n = rng.gen_range(0..=max_n);
            let p = rng.gen_range(0.0..1.0);
            random_graph(&mut rng, n, p)
        })
        .collect()
}

/// 枚举所有子集求最大独立集大小
fn brute_force_mis(g: &Graph<u32>) -> usize {
    let vertices: Vec<u32> = g.vertices().copied().collect();
    let n = vertices.len();
    let mut best = 0;
    for mask in 0u32..(1 << n) {
        let chosen: Vec<u32> = (0..n)
            .filter(|i| mask & (1 << i) != 0)
            .map(|i| vertices[i])
            .collect();
        let independent = chosen
            .iter()
            .enumerate()
            .all(|(i, u)| chosen[i + 1..].iter().all(|v| !g.has_edge(u, v)));
        if independent {
            best = best.max(chosen.len());
        }
    }
    best
}

#[test]
fn union_contains_both_operands() {
    let graphs = samples(1, 40, 12);
    for pair in graphs.chunks(2) {
        let (g, h) = (&pair[0], &pair[1]);
        let u = g.union(h);
        assert!(g.is_subgraph(&u));
        assert!(h.is_subgraph(&u));
        assert!(u.check_invariants());
    }
}

#[test]
fn double_complement_is_identity() {
    for g in samples(2, 30, 12) {
        let c = g.complement();
        assert_eq!(c.size() + g.size(), g.order() * g.order().saturating_sub(1) / 2);
        assert_eq!(c.complement(), g);
    }
}

#[test]
fn join_of_disjoint_graphs_counts() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..20 {
        let g = random_graph(&mut rng, 6, 0.4);
        let h: Graph<u32> = random_graph(&mut rng, 5, 0.5)
            .edges()
            .map(|e| {
                let (u, v) = e.endpoints();
                (u + 100, v + 100)
            })
            .collect::<Graph<u32>>()
            .with_vertices(100..105);

        let j = g.join(&h);
        assert_eq!(j.order(), g.order() + h.order());
        assert_eq!(j.size(), g.size() + h.size() + g.order() * h.order());
        assert!(j.check_invariants());
    }
}

#[test]
fn pop_until_empty_removes_every_vertex() {
    for mut g in samples(4, 20, 15) {
        let order = g.order();
        let mut popped = 0;
        while let Some(v) = g.pop_vertex() {
            assert!(g.edges().all(|e| !e.is_incident(&v)));
            assert!(g.check_invariants());
            g.remove_vertex(&v);
            popped += 1;
        }
        assert_eq!(popped, order);
        assert_eq!(g.size(), 0);
    }
}

#[test]
fn greedy_is_independent_and_maximal() {
    for g in samples(5, 50, 30) {
        let by_insertion = greedy_mis(&g);
        assert!(is_maximal_independent_set(&g, &by_insertion));

        let by_degree = greedy_mis_by_key(&g, |g, v| g.degree(v));
        assert!(is_maximal_independent_set(&g, &by_degree));
    }
}

#[test]
fn exact_matches_brute_force() {
    for g in samples(6, 60, 11) {
        let outcome = ExactSolver::default().solve(&g);
        assert_eq!(outcome.size, brute_force_mis(&g), "graph: {:?}", g);
        assert_eq!(outcome.witness.len(), outcome.size);
        assert!(is_independent_set(&g, &outcome.witness));
        assert!(outcome.complete);
        assert!(outcome.size >= greedy_mis(&g).len());
    }
}

#[test]
fn parallel_matches_sequential() {
    let solver = ExactSolver::new(SolverConfig::default().with_parallel_depth(4));
    for g in samples(7, 10, 16) {
        assert_eq!(solver.solve_parallel(&g).size, max_independent_set(&g));
    }
}

#[test]
fn cutoff_result_is_valid_lower_bound() {
    let solver = ExactSolver::new(SolverConfig::default().with_max_depth(2));
    for g in samples(8, 30, 14) {
        let outcome = solver.solve(&g);
        assert!(outcome.size <= max_independent_set(&g));
        assert!(is_independent_set(&g, &outcome.witness));
        assert_eq!(outcome.complete, outcome.cutoffs == 0);
    }
}

#[test]
fn closure_is_idempotent_supergraph() {
    for g in samples(9, 30, 10) {
        let c = g.closure();
        assert!(g.is_subgraph(&c));
        assert_eq!(c.closure(), c);
        assert_eq!(c.order(), g.order());
    }
}

#[test]
fn line_graph_of_path_is_path() {
    for n in 2..12u32 {
        let path: Graph<u32> = (1..n).map(|i| (i - 1, i)).collect();
        let line = path.line_graph();

        assert_eq!(line.order(), (n - 1) as usize);
        assert_eq!(line.size(), (n - 2) as usize);
        for i in 2..n {
            let a = Edge::new(i - 2, i - 1).unwrap();
            let b = Edge::new(i - 1, i).unwrap();
            assert!(line.has_edge(&a, &b));
        }
    }
}

#[test]
fn induced_subgraph_keeps_exact_edges() {
    let mut rng = StdRng::seed_from_u64(10);
    for g in samples(11, 20, 12) {
        let keep: Vec<u32> = g.vertices().copied().filter(|_| rng.gen_bool(0.5)).collect();
        let sub = g.induced_subgraph(keep.clone()).unwrap();

        assert_eq!(sub.order(), keep.len());
        for u in &keep {
            for v in &keep {
                assert_eq!(sub.has_edge(u, v), g.has_edge(u, v));
            }
        }
    }
}

#[test]
fn random_mutations_preserve_invariants() {
    let mut rng = StdRng::seed_from_u64(12);
    let mut g: Graph<u32> = Graph::new();
    for _ in 0..2000 {
        let u = rng.gen_range(0..20);
        let v = rng.gen_range(0..20);
        match rng.gen_range(0..5) {
            0 => {
                g.add_vertex(u);
            }
            1 | 2 => {
                g.add_edge(u, v);
            }
            3 => {
                g.remove_edge(&u, &v);
            }
            _ => {
                g.remove_vertex(&u);
            }
        }
        assert!(g.check_invariants());
    }
}

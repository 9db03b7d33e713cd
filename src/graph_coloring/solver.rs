//! The colouring-to-CNF reduction and its inverse.
//!
//! One boolean variable per node-colour pair, numbered
//! `node * num_colors + color + 1` so each node owns a contiguous block of
//! colour variables. Per node: one at-least-one clause over the block and
//! pairwise at-most-one clauses within it. Per edge and colour: a binary
//! clause forbidding both endpoints taking that colour.

use crate::sat::assignment::Solutions;
use crate::sat::cnf::Cnf;
use crate::sat::error::SolverError;
use crate::sat::solver::{Config, WalkSat};
use rustc_hash::FxHashSet;

/// An undirected graph over nodes `0..num_nodes`.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    num_nodes: usize,
    edges: Vec<(usize, usize)>,
    seen: FxHashSet<(usize, usize)>,
}

impl Graph {
    /// Creates a graph with `num_nodes` nodes and no edges.
    #[must_use]
    pub fn new(num_nodes: usize) -> Self {
        Self {
            num_nodes,
            edges: Vec::new(),
            seen: FxHashSet::default(),
        }
    }

    /// Adds an undirected edge. Self-loops and repeated edges are ignored;
    /// a self-loop would make every colouring improper, and a repeated edge
    /// would only duplicate clauses.
    pub fn add_edge(&mut self, a: usize, b: usize) {
        assert!(a < self.num_nodes && b < self.num_nodes, "node out of range");
        if a == b {
            return;
        }
        let edge = (a.min(b), a.max(b));
        if self.seen.insert(edge) {
            self.edges.push(edge);
        }
    }

    /// Samples a graph where each node pair is joined independently with
    /// probability `edge_prob`.
    #[must_use]
    pub fn random(num_nodes: usize, edge_prob: f64, rng: &mut fastrand::Rng) -> Self {
        let mut graph = Self::new(num_nodes);
        for a in 0..num_nodes.saturating_sub(1) {
            for b in (a + 1)..num_nodes {
                if rng.f64() < edge_prob {
                    graph.add_edge(a, b);
                }
            }
        }
        graph
    }

    /// Number of nodes.
    #[must_use]
    pub const fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// The edges in insertion order, each with the smaller node first.
    #[must_use]
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }
}

/// A colour per node, colours numbered `0..num_colors`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coloring(Vec<usize>);

impl Coloring {
    /// The colour assigned to `node`.
    #[must_use]
    pub fn color(&self, node: usize) -> usize {
        self.0[node]
    }

    /// The colours in node order.
    #[must_use]
    pub fn colors(&self) -> &[usize] {
        &self.0
    }

    /// `true` if no edge of `graph` joins two nodes of the same colour.
    #[must_use]
    pub fn is_proper(&self, graph: &Graph) -> bool {
        graph.edges().iter().all(|&(a, b)| self.0[a] != self.0[b])
    }
}

/// The variable for "node `node` has colour `color`", in DIMACS numbering.
fn color_var(node: usize, color: usize, num_colors: usize) -> i32 {
    i32::try_from(node * num_colors + color + 1).expect("colouring variable overflowed i32")
}

/// Encodes k-colouring of `graph` as a CNF instance.
///
/// # Errors
///
/// [`SolverError::NonPositiveVariableCount`] if the graph has no nodes or
/// `num_colors` is zero (the encoding then has no variables).
pub fn encode(graph: &Graph, num_colors: usize) -> Result<Cnf, SolverError> {
    let num_vars = graph.num_nodes() * num_colors;
    let mut clauses = Vec::new();

    for node in 0..graph.num_nodes() {
        // At least one colour.
        clauses.push((0..num_colors).map(|c| color_var(node, c, num_colors)).collect());
        // At most one colour, pairwise.
        for c1 in 0..num_colors {
            for c2 in (c1 + 1)..num_colors {
                clauses.push(vec![
                    -color_var(node, c1, num_colors),
                    -color_var(node, c2, num_colors),
                ]);
            }
        }
    }

    for &(a, b) in graph.edges() {
        for c in 0..num_colors {
            clauses.push(vec![
                -color_var(a, c, num_colors),
                -color_var(b, c, num_colors),
            ]);
        }
    }

    Cnf::new(num_vars, clauses)
}

/// Reads a colouring back from a model of the encoded instance by scanning
/// each node's contiguous block of colour variables for the positive
/// literal.
///
/// # Panics
///
/// If some node's block holds no positive literal; the at-least-one clauses
/// make that impossible for any satisfying model.
#[must_use]
pub fn decode(solutions: &Solutions, num_nodes: usize, num_colors: usize) -> Coloring {
    let colors = (0..num_nodes)
        .map(|node| {
            let block = &solutions[node * num_colors..(node + 1) * num_colors];
            block
                .iter()
                .position(|&lit| lit > 0)
                .expect("model assigns no colour to a node")
        })
        .collect();
    Coloring(colors)
}

/// Colours `graph` with `num_colors` colours via the SAT engine.
///
/// Returns `Ok(None)` when the solver's restart ceiling is exhausted;
/// without a ceiling in `config` the call does not return on uncolourable
/// graphs.
///
/// # Errors
///
/// Propagates encoding failures.
pub fn color(
    graph: &Graph,
    num_colors: usize,
    config: Config,
) -> Result<Option<Coloring>, SolverError> {
    let cnf = encode(graph, num_colors)?;
    let mut solver = WalkSat::with_config(cnf, config);
    Ok(solver
        .solve()
        .map(|solutions| decode(&solutions, graph.num_nodes(), num_colors)))
}

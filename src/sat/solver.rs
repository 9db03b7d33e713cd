#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The search driver: restarts, flip budgets, and the solve loop.
//!
//! The engine is incomplete by construction. It can only ever answer
//! "satisfiable" (with a model) or, when a restart ceiling is configured,
//! "unknown"; it never proves unsatisfiability. With the default unbounded
//! restart policy an unsatisfiable formula makes [`WalkSat::solve`] loop
//! forever, which is the documented behaviour, not a bug. Callers needing
//! bounded runtime set [`Config::max_restarts`] and treat `None` as unknown.

use crate::sat::assignment::{Assignment, Solutions};
use crate::sat::cnf::Cnf;
use crate::sat::variable_selection::{DEFAULT_OMEGA, pick_flip};
use log::debug;

/// Per-restart flip budget as a multiple of the variable count.
pub const DEFAULT_MAX_FLIPS_PROPORTION: usize = 4;

/// Tunable parameters of the search.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Probability of a noise move when the best flip still breaks a clause.
    pub omega: f64,
    /// Flips allowed per restart, as a multiple of `num_vars`.
    pub max_flips_proportion: usize,
    /// Restart ceiling. `None` restarts forever; `Some(n)` gives up after
    /// `n` restarts and reports unknown.
    pub max_restarts: Option<u64>,
    /// Seed for the random source. `None` seeds from entropy; identical
    /// seeds on identical formulas reproduce the flip sequence exactly.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            omega: DEFAULT_OMEGA,
            max_flips_proportion: DEFAULT_MAX_FLIPS_PROPORTION,
            max_restarts: None,
            seed: None,
        }
    }
}

/// Counters accumulated over a solve call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Total variable flips across all restarts.
    pub flips: u64,
    /// Completed restarts (initial assignment draw not counted).
    pub restarts: u64,
}

/// Interface between the engine and its callers (CLI, reductions).
pub trait Solver {
    /// Creates a solver over the given formula with default configuration.
    fn from_cnf(cnf: Cnf) -> Self
    where
        Self: Sized;

    /// Runs the search. `Some` holds a satisfying assignment; `None` means
    /// the configured budget was exhausted and the result is unknown, never
    /// that the formula is unsatisfiable.
    fn solve(&mut self) -> Option<Solutions>;
}

/// A WalkSAT-family stochastic local search solver.
#[derive(Debug, Clone)]
pub struct WalkSat {
    cnf: Cnf,
    config: Config,
    rng: fastrand::Rng,
    stats: SearchStats,
}

impl WalkSat {
    /// Creates a solver with the default [`Config`].
    #[must_use]
    pub fn new(cnf: Cnf) -> Self {
        Self::with_config(cnf, Config::default())
    }

    /// Creates a solver with an explicit configuration.
    #[must_use]
    pub fn with_config(cnf: Cnf, config: Config) -> Self {
        let rng = config
            .seed
            .map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed);

        Self {
            cnf,
            config,
            rng,
            stats: SearchStats::default(),
        }
    }

    /// The formula being solved.
    #[must_use]
    pub const fn cnf(&self) -> &Cnf {
        &self.cnf
    }

    /// Counters accumulated so far.
    #[must_use]
    pub const fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Runs the search loop; see [`Solver::solve`] for the return contract.
    pub fn solve(&mut self) -> Option<Solutions> {
        let max_flips = self.cnf.num_vars * self.config.max_flips_proportion;
        let mut unsatisfied: Vec<usize> = Vec::new();
        let mut restarts_this_call: u64 = 0;

        loop {
            let mut assignment = Assignment::random(&self.cnf, &mut self.rng);

            for _ in 0..max_flips {
                unsatisfied.clear();
                unsatisfied.extend(assignment.unsatisfied());

                if unsatisfied.is_empty() {
                    debug!(
                        "solved after {} flips and {} restarts",
                        self.stats.flips, restarts_this_call
                    );
                    return Some(assignment.solutions());
                }

                let clause_idx = unsatisfied[self.rng.usize(..unsatisfied.len())];
                let var = pick_flip(
                    &self.cnf[clause_idx],
                    &self.cnf,
                    &assignment,
                    self.config.omega,
                    &mut self.rng,
                );
                assignment.flip(var, &self.cnf);
                self.stats.flips += 1;
            }

            restarts_this_call += 1;
            self.stats.restarts += 1;
            debug!(
                "restart {restarts_this_call}: {} clauses still unsatisfied",
                unsatisfied.len()
            );

            if let Some(limit) = self.config.max_restarts {
                if restarts_this_call > limit {
                    debug!("restart ceiling {limit} reached, giving up");
                    return None;
                }
            }
        }
    }
}

impl Solver for WalkSat {
    fn from_cnf(cnf: Cnf) -> Self {
        Self::new(cnf)
    }

    fn solve(&mut self) -> Option<Solutions> {
        Self::solve(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sat::cnf::Cnf;

    fn seeded(cnf: Cnf, seed: u64) -> WalkSat {
        WalkSat::with_config(
            cnf,
            Config {
                seed: Some(seed),
                ..Config::default()
            },
        )
    }

    fn assert_model_satisfies(cnf: &Cnf, solutions: &Solutions) {
        assert_eq!(solutions.len(), cnf.num_vars);
        for (idx, clause) in cnf.iter().enumerate() {
            let satisfied = clause
                .literals()
                .iter()
                .any(|&lit| solutions[lit.index()] == lit.to_dimacs());
            assert!(satisfied, "clause {idx} unsatisfied by returned model");
        }
    }

    #[test]
    fn test_single_unit_clause() {
        let cnf = Cnf::new(1, vec![vec![1]]).unwrap();
        let mut solver = seeded(cnf, 0);
        assert_eq!(solver.solve(), Some(vec![1]));
    }

    #[test]
    fn test_two_clause_exclusion() {
        let cnf = Cnf::new(2, vec![vec![1, 2], vec![-1, -2]]).unwrap();
        for seed in 0..10 {
            let mut solver = seeded(cnf.clone(), seed);
            let solutions = solver.solve().expect("satisfiable instance");
            assert_model_satisfies(solver.cnf(), &solutions);
            assert_ne!(solutions, vec![1, 2]);
            assert_ne!(solutions, vec![-1, -2]);
        }
    }

    #[test]
    fn test_unsatisfiable_hits_restart_ceiling() {
        let cnf = Cnf::new(1, vec![vec![1], vec![-1]]).unwrap();
        let mut solver = WalkSat::with_config(
            cnf,
            Config {
                max_restarts: Some(50),
                seed: Some(13),
                ..Config::default()
            },
        );
        assert_eq!(solver.solve(), None);
        assert_eq!(solver.stats().restarts, 51);
    }

    #[test]
    fn test_repeated_literal_clause() {
        let cnf = Cnf::new(1, vec![vec![1, 1]]).unwrap();
        let mut solver = seeded(cnf, 2);
        assert_eq!(solver.solve(), Some(vec![1]));
    }

    #[test]
    fn test_deterministic_under_fixed_seed() {
        let cnf = Cnf::new(
            6,
            vec![
                vec![1, 2, -3],
                vec![-1, 4],
                vec![3, -4, 5],
                vec![-2, -5, 6],
                vec![-6, 1],
            ],
        )
        .unwrap();

        let first = seeded(cnf.clone(), 42).solve();
        let second = seeded(cnf.clone(), 42).solve();
        assert!(first.is_some());
        assert_eq!(first, second);
        assert_model_satisfies(&cnf, &first.unwrap());
    }

    #[test]
    fn test_solved_model_satisfies_every_clause() {
        // A planted instance: every clause is satisfied by the all-true
        // assignment, so the formula is satisfiable by construction.
        let mut rng = fastrand::Rng::with_seed(77);
        let num_vars = 20;
        let clauses: Vec<Vec<i32>> = (0..80)
            .map(|_| {
                let planted = rng.i32(1..=num_vars);
                let mut clause = vec![planted];
                for _ in 0..2 {
                    let var = rng.i32(1..=num_vars);
                    clause.push(if rng.bool() { var } else { -var });
                }
                clause
            })
            .collect();
        let cnf = Cnf::new(num_vars as usize, clauses).unwrap();

        let mut solver = seeded(cnf, 7);
        let solutions = solver.solve().expect("planted instance is satisfiable");
        assert_model_satisfies(solver.cnf(), &solutions);
    }

    #[test]
    fn test_formula_without_clauses_is_trivially_satisfied() {
        let cnf = Cnf::new(3, vec![]).unwrap();
        let mut solver = seeded(cnf, 9);
        let solutions = solver.solve().expect("no clauses to violate");
        assert_eq!(solutions.len(), 3);
    }
}

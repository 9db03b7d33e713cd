//! # walksat
//!
//! A command-line WalkSAT solver. It parses DIMACS CNF from a file or from
//! inline text, runs stochastic local search, and prints the model in the
//! conventional `s` / `v` line form. A `color` subcommand generates a random
//! graph, encodes k-colouring as CNF, and reports the colouring found.
//!
//! The search is incomplete: on an unsatisfiable instance the default
//! configuration runs forever. Pass `--max-restarts` to bound the search and
//! get `s UNKNOWN` instead.
//!
//! ```sh
//! walksat problem.cnf
//! walksat file --path problem.cnf --seed 7 --max-restarts 1000
//! walksat text --input "1 2 0
//! -1 -2 0"
//! walksat color --nodes 20 --edge-prob 0.2 --colors 4
//! ```

use clap::{Args, Parser, Subcommand};
use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Instant;
use walksat::graph_coloring::{self, Graph};
use walksat::sat::cnf::Cnf;
use walksat::sat::dimacs::{parse_dimacs, parse_file, write_solution, write_unknown};
use walksat::sat::error::SolverError;
use walksat::sat::solver::{Config, WalkSat};

#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

/// Command-line interface of the solver.
#[derive(Parser, Debug)]
#[command(name = "walksat", version, about = "A stochastic local search SAT solver")]
struct Cli {
    /// A bare path is treated as a DIMACS .cnf file to solve.
    #[arg(global = true)]
    path: Option<String>,

    #[clap(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    common: CommonOptions,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Solve a CNF file in DIMACS format.
    File {
        /// Path to the DIMACS .cnf file.
        #[arg(short, long)]
        path: String,

        #[command(flatten)]
        common: CommonOptions,
    },

    /// Solve a CNF formula given as inline DIMACS text.
    Text {
        /// DIMACS text including the `p cnf` line.
        #[arg(short, long)]
        input: String,

        #[command(flatten)]
        common: CommonOptions,
    },

    /// Colour a random graph by reduction to SAT.
    Color {
        /// Number of nodes.
        #[arg(short, long)]
        nodes: usize,

        /// Probability of an edge between each node pair.
        #[arg(short, long, default_value_t = 0.5)]
        edge_prob: f64,

        /// Number of colours.
        #[arg(short, long)]
        colors: usize,

        #[command(flatten)]
        common: CommonOptions,
    },
}

/// Search options shared by all subcommands.
#[derive(Args, Debug, Default, Clone)]
struct CommonOptions {
    /// Seed for the random source; identical seeds reproduce identical runs.
    #[arg(long)]
    seed: Option<u64>,

    /// Probability of a noise move when every flip breaks a clause.
    #[arg(long, default_value_t = walksat::sat::variable_selection::DEFAULT_OMEGA)]
    omega: f64,

    /// Flips per restart as a multiple of the variable count.
    #[arg(long, default_value_t = walksat::sat::solver::DEFAULT_MAX_FLIPS_PROPORTION)]
    max_flips_proportion: usize,

    /// Give up (report unknown) after this many restarts. Unbounded if
    /// absent: an unsatisfiable instance then never terminates.
    #[arg(long)]
    max_restarts: Option<u64>,

    /// Print flip/restart counts and timings to stderr.
    #[arg(short, long, default_value_t = false)]
    stats: bool,
}

impl CommonOptions {
    fn to_config(&self) -> Config {
        Config {
            omega: self.omega,
            max_flips_proportion: self.max_flips_proportion,
            max_restarts: self.max_restarts,
            seed: self.seed,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        None => match cli.path {
            Some(path) => solve_path(&path, &cli.common),
            None => {
                eprintln!("error: expected a .cnf path or a subcommand; see --help");
                return ExitCode::FAILURE;
            }
        },
        Some(Commands::File { path, common }) => solve_path(&path, &common),
        Some(Commands::Text { input, common }) => {
            parse_dimacs(input.as_bytes()).and_then(|cnf| solve_and_report(cnf, &common))
        }
        Some(Commands::Color {
            nodes,
            edge_prob,
            colors,
            common,
        }) => color_and_report(nodes, edge_prob, colors, &common),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn solve_path(path: &str, common: &CommonOptions) -> Result<(), SolverError> {
    let parse_start = Instant::now();
    let cnf = parse_file(path)?;
    if common.stats {
        eprintln!("c parsed {path} in {:.2?}", parse_start.elapsed());
    }
    solve_and_report(cnf, common)
}

fn solve_and_report(cnf: Cnf, common: &CommonOptions) -> Result<(), SolverError> {
    let mut solver = WalkSat::with_config(cnf, common.to_config());

    let solve_start = Instant::now();
    let outcome = solver.solve();
    let elapsed = solve_start.elapsed();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match outcome {
        Some(solutions) => write_solution(&mut out, &solutions)?,
        None => write_unknown(&mut out)?,
    }
    out.flush()?;

    if common.stats {
        let stats = solver.stats();
        eprintln!(
            "c solved in {elapsed:.2?}: {} flips, {} restarts",
            stats.flips, stats.restarts
        );
    }
    Ok(())
}

fn color_and_report(
    nodes: usize,
    edge_prob: f64,
    colors: usize,
    common: &CommonOptions,
) -> Result<(), SolverError> {
    let config = common.to_config();
    let mut rng = config
        .seed
        .map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed);
    let graph = Graph::random(nodes, edge_prob, &mut rng);

    let solve_start = Instant::now();
    let outcome = graph_coloring::color(&graph, colors, config)?;
    let elapsed = solve_start.elapsed();

    match outcome {
        Some(coloring) => {
            println!(
                "c coloured {nodes} nodes / {} edges with {colors} colours",
                graph.edges().len()
            );
            for (node, &c) in coloring.colors().iter().enumerate() {
                println!("{node} {c}");
            }
            debug_assert!(coloring.is_proper(&graph));
        }
        None => println!("s UNKNOWN"),
    }

    if common.stats {
        eprintln!("c colouring took {elapsed:.2?}");
    }
    Ok(())
}

//! `bench_local.rs` — quick local timing runner (no Criterion)
//!
//! PURPOSE
//! -------
//! - Fast, ad-hoc timing for one structure/word-list pair on *your* machine.
//! - Loads both files once, then repeats the fill several times and reports
//!   the median (more robust than the mean for small _N_).
//! - Each repeat builds a fresh solver, since solving prunes the domains in place.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release`
//! - Multiple repeats:               `cargo run --bin bench_local --release -- -r 10`
//! - Print the solved grid:          `cargo run --bin bench_local --release -- -p`
//! - See all flags:                  `cargo run --bin bench_local -- --help`
//!
//! NOTES
//! -----
//! - Not Criterion: convenient rather than statistically rigorous.
//! - Only compare numbers from the same machine and `--release` builds.
//! - Loading and printing stay outside the timed section.
//! - One warm-up run is done first (not included in timing).

use clap::Parser;
use std::hint::black_box;
use std::time::Instant;

use crossfill::errors::CrossfillError;
use crossfill::grid::Grid;
use crossfill::render;
use crossfill::solver::Solver;
use crossfill::word_list::WordList;

/// Simple local benchmark runner: load the inputs once, time repeated fills.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the structure file ('_' marks a fillable cell)
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/structure.txt")
    )]
    structure: String,

    /// Path to the word list file (one word per line)
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/words.txt")
    )]
    words: String,

    /// Number of repeats (use >1 to reduce noise; median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 5)]
    num_repeats: usize,

    /// Print the filled grid from the last run (outside timing)
    #[arg(short = 'p', long = "print", default_value_t = false)]
    print_solution: bool,
}

/// Small helper: robust central tendency for small samples.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    // safe: f64 durations are never NaN in this context
    xs.sort_by(|a, b| a.partial_cmp(b)
        .expect("f64 durations should not be NaN"));
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

fn main() -> Result<(), CrossfillError> {
    let cli = Cli::parse();

    // Load both inputs once. This I/O is *not* included in per-run timing.
    eprintln!("Loading structure from: {}", cli.structure);
    eprintln!("Loading word list from: {}", cli.words);
    let t_load = Instant::now();
    let grid = Grid::load_from_path(&cli.structure)?;
    let word_list = WordList::load_from_path(&cli.words)?;
    let load_secs = t_load.elapsed().as_secs_f64();
    eprintln!(
        "Loaded {} slots and {} words in {:.3}s",
        grid.variables().len(),
        word_list.words.len(),
        load_secs
    );

    // One *warm-up* execution to "touch" code paths / caches.
    // We intentionally ignore its timing.
    let _warmup = Solver::new(&grid, &word_list.words).solve();

    // Repeat the timed runs and collect durations.
    let mut times = Vec::with_capacity(cli.num_repeats);
    let mut last_solution = None;

    for rep in 0..cli.num_repeats {
        // Keep only the *core* operation inside the timed region. A fresh
        // solver per run so every run prunes from the full vocabulary.
        let t_solve = Instant::now();
        let solution = Solver::new(black_box(&grid), black_box(&word_list.words)).solve();
        let solve_secs = t_solve.elapsed().as_secs_f64();

        // Prevent the compiler from proving the result unused and eliding work.
        let _keep = black_box(solution.is_some());

        times.push(solve_secs);

        eprintln!(
            "  run {:>2}/{:>2}: {:.3}s ({})",
            rep + 1,
            cli.num_repeats,
            solve_secs,
            if solution.is_some() { "solved" } else { "no solution" }
        );
        last_solution = solution;
    }

    let med = median(times);
    eprintln!("  → median {:.3}s over {} run(s)", med, cli.num_repeats);

    // Optionally print the fill from the *last* run (outside timing).
    if cli.print_solution {
        match &last_solution {
            Some(assignment) => println!("{}", render::to_text(&grid, assignment)),
            None => println!("No solution."),
        }
    }

    Ok(())
}

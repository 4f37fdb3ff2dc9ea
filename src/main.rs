use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use crossfill::errors::CrossfillError;
use crossfill::grid::Grid;
use crossfill::render;
use crossfill::solver::Solver;
use crossfill::word_list::WordList;

/// Crossword filler
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the structure file ('_' marks a fillable cell)
    structure: String,

    /// Path to the word list file (one word per line)
    words: String,

    /// Also save the filled grid to this file as text
    #[arg(short, long)]
    output: Option<String>,

    /// Print load/solve wall times to stderr
    #[arg(long, default_value_t = false)]
    timing: bool,
}

/// Entry point of the crossfill CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    // Set up logging
    let debug_enabled = std::env::var("CROSSFILL_DEBUG").is_ok();
    crossfill::log::init_logger(debug_enabled);

    log::info!("Starting crossfill");

    if let Err(e) = try_main() {
        // Print the error to stderr with its code and help text
        eprintln!("Error: {}", e.display_detailed());
        // Exit explicitly with a nonzero code so scripts can detect failure
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the crossfill CLI.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Load the structure and the word list from disk.
/// 3. Fill the grid.
/// 4. Print the filled grid on stdout, or `No solution.` — an
///    unsatisfiable puzzle is a normal outcome, not an error.
/// 5. Optionally save the rendering and print timings on stderr.
///
/// Returns `Ok(())` on success or a loader/output error which bubbles up
/// to [`main`].
fn try_main() -> Result<(), CrossfillError> {
    // Parse command-line arguments
    let cli = Cli::parse();

    // 1. Load the structure and the vocabulary
    let t_load = Instant::now();
    let grid = Grid::load_from_path(&cli.structure)?;
    let words = WordList::load_from_path(&cli.words)?;
    let load_secs = t_load.elapsed().as_secs_f64();

    // 2. Fill the grid
    let t_solve = Instant::now();
    let mut solver = Solver::new(&grid, &words.words);
    let assignment = solver.solve();
    let solve_secs = t_solve.elapsed().as_secs_f64();

    // 3. Print the result on stdout
    match &assignment {
        Some(assignment) => {
            println!("{}", render::to_text(&grid, assignment));
            if let Some(output) = &cli.output {
                render::save(&grid, assignment, output)?;
            }
        }
        None => println!("No solution."),
    }

    // 4. Print diagnostics (slot/word counts, timings) to stderr
    if cli.timing {
        eprintln!(
            "Loaded {} slots and {} words in {:.3}s; solved in {:.3}s.",
            grid.variables().len(),
            words.words.len(),
            load_secs,
            solve_secs
        );
    }

    Ok(())
}

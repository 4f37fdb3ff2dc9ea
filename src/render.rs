//! `render` — Module to format a (partially) filled grid for output.
//!
//! Rendering is read-only: it combines a [`Grid`] with an [`Assignment`]
//! into a letter matrix and from there into text. One character per cell:
//! a filled cell prints its letter, an unfilled open cell prints the
//! structure-file marker [`OPEN_CELL`], and a blocked cell prints
//! [`BLOCKED_CELL`].
//!
//! The assignment does not have to be complete; the solver only produces
//! complete ones, but a partial assignment renders fine with the open
//! cells it leaves blank.

use std::path::Path;

use crate::assignment::Assignment;
use crate::errors::CrossfillError;
use crate::grid::{Grid, OPEN_CELL};

/// The character printed for a blocked cell.
pub const BLOCKED_CELL: char = '█';

/// The letters the assignment places on the grid, as a height × width
/// matrix. Cells no assigned variable covers are `None`.
///
/// Crossing variables write the same letter at their shared cell whenever
/// the assignment is consistent; for an inconsistent one, the letter
/// written last wins. Letters a variable would place outside the grid are
/// dropped.
#[must_use]
pub fn letter_grid(grid: &Grid, assignment: &Assignment) -> Vec<Vec<Option<char>>> {
    let mut letters = vec![vec![None; grid.width()]; grid.height()];
    for (var, word) in assignment.iter() {
        for (k, ch) in word.chars().enumerate() {
            let (row, col) = var.cell(k);
            if row < grid.height() && col < grid.width() {
                letters[row][col] = Some(ch);
            }
        }
    }
    letters
}

/// Render the grid as text, one line per row, without a trailing newline.
#[must_use]
pub fn to_text(grid: &Grid, assignment: &Assignment) -> String {
    let letters = letter_grid(grid, assignment);

    let mut lines = Vec::with_capacity(grid.height());
    for (row, row_letters) in letters.iter().enumerate() {
        let line: String = row_letters
            .iter()
            .enumerate()
            .map(|(col, letter)| match letter {
                Some(ch) => *ch,
                None if grid.is_open(row, col) => OPEN_CELL,
                None => BLOCKED_CELL,
            })
            .collect();
        lines.push(line);
    }
    lines.join("\n")
}

/// Write the text rendering to a file, newline-terminated.
///
/// # Errors
///
/// Returns `OutputWrite` if the file cannot be created or written.
pub fn save<P: AsRef<Path>>(
    grid: &Grid,
    assignment: &Assignment,
    path: P,
) -> Result<(), CrossfillError> {
    let path_ref = path.as_ref();
    let mut text = to_text(grid, assignment);
    text.push('\n');
    std::fs::write(path_ref, text).map_err(|e| CrossfillError::OutputWrite {
        path: path_ref.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Direction, Variable};
    use std::rc::Rc;

    const CORNER: &str = "___\n##_\n##_";

    fn corner_assignment() -> Assignment {
        let mut assignment = Assignment::default();
        assignment.set(Variable::new(0, 0, Direction::Across, 3), Rc::from("CAR"));
        assignment.set(Variable::new(0, 2, Direction::Down, 3), Rc::from("RAT"));
        assignment
    }

    #[test]
    fn test_letter_grid_places_both_directions() {
        let grid = Grid::parse_from_str(CORNER).unwrap();
        let letters = letter_grid(&grid, &corner_assignment());

        assert_eq!(letters[0], vec![Some('C'), Some('A'), Some('R')]);
        assert_eq!(letters[1], vec![None, None, Some('A')]);
        assert_eq!(letters[2], vec![None, None, Some('T')]);
    }

    #[test]
    fn test_letter_grid_empty_assignment() {
        let grid = Grid::parse_from_str(CORNER).unwrap();
        let letters = letter_grid(&grid, &Assignment::default());

        assert!(letters.iter().flatten().all(Option::is_none));
    }

    #[test]
    fn test_letter_grid_ignores_out_of_range_variable() {
        let grid = Grid::parse_from_str(CORNER).unwrap();
        let mut assignment = Assignment::default();
        assignment.set(Variable::new(2, 2, Direction::Across, 3), Rc::from("CAR"));

        let letters = letter_grid(&grid, &assignment);
        assert_eq!(letters[2][2], Some('C'));
        // The 'A' and 'R' would land past the right edge.
        assert_eq!(letters[2].iter().flatten().count(), 1);
    }

    #[test]
    fn test_to_text_complete_fill() {
        let grid = Grid::parse_from_str(CORNER).unwrap();
        assert_eq!(to_text(&grid, &corner_assignment()), "CAR\n██A\n██T");
    }

    #[test]
    fn test_to_text_partial_fill_leaves_open_cells() {
        let grid = Grid::parse_from_str(CORNER).unwrap();
        let mut assignment = Assignment::default();
        assignment.set(Variable::new(0, 0, Direction::Across, 3), Rc::from("CAR"));

        assert_eq!(to_text(&grid, &assignment), "CAR\n██_\n██_");
    }

    #[test]
    fn test_to_text_empty_assignment_mirrors_structure() {
        let grid = Grid::parse_from_str(CORNER).unwrap();
        assert_eq!(to_text(&grid, &Assignment::default()), "___\n██_\n██_");
    }

    #[test]
    fn test_to_text_pads_ragged_structure() {
        let grid = Grid::parse_from_str("__\n____").unwrap();
        assert_eq!(to_text(&grid, &Assignment::default()), "__██\n____");
    }

    #[test]
    fn test_save_writes_newline_terminated_text() {
        let grid = Grid::parse_from_str(CORNER).unwrap();
        let path = std::env::temp_dir().join("crossfill_render_save_test.txt");

        save(&grid, &corner_assignment(), &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(written, "CAR\n██A\n██T\n");
    }

    #[test]
    fn test_save_to_bad_path_is_an_error() {
        let grid = Grid::parse_from_str(CORNER).unwrap();
        let err = save(&grid, &corner_assignment(), "no/such/dir/out.txt").unwrap_err();
        assert_eq!(err.code(), "E005");
        assert!(err.to_string().contains("no/such/dir/out.txt"));
    }
}

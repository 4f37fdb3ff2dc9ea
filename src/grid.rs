//! `grid` — Module to load a puzzle structure and derive its constraint graph.
//!
//! A structure file is plain UTF-8 text; each line is one row of the grid.
//! The underscore character (`_`) marks an open (fillable) cell and every
//! other character marks a blocked cell. Lines may have unequal lengths:
//! the grid width is the longest line, and shorter lines are padded with
//! blocked cells on the right.
//!
//! From the cell grid we derive:
//! - **Variables**: one per maximal run of open cells (length ≥ 2) in each
//!   direction, scanned row-major with across before down at the same cell.
//!   A lone open cell belongs to no variable.
//! - **Overlaps**: for every ordered pair of crossing variables, the pair of
//!   character indices at their shared cell.
//! - **Neighbors**: for each variable, the variables it crosses, in scan
//!   order.
//!
//! The public API mirrors the word-list loader: `parse_from_str(...)` for
//! in-memory text and `load_from_path(...)` as the file convenience wrapper.

use std::collections::HashMap;
use std::fmt;
use std::fmt::{Display, Formatter};

use crate::errors::CrossfillError;

/// The character that marks a fillable cell in a structure file.
pub const OPEN_CELL: char = '_';

/// Axis of a slot: left-to-right or top-to-bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Across,
    Down,
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Across => write!(f, "across"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// One fillable slot: start cell, axis, and required word length.
///
/// Equality and hashing use all four fields, so the same cell can host both
/// an across and a down variable. Variables are created once during
/// structure parsing and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variable {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    pub length: usize,
}

impl Variable {
    #[must_use]
    pub fn new(row: usize, col: usize, direction: Direction, length: usize) -> Self {
        Self { row, col, direction, length }
    }

    /// The grid cell holding this variable's `k`-th letter.
    #[must_use]
    pub fn cell(self, k: usize) -> (usize, usize) {
        match self.direction {
            Direction::Across => (self.row, self.col + k),
            Direction::Down => (self.row + k, self.col),
        }
    }

    /// All cells of this variable, first letter to last.
    pub fn cells(self) -> impl Iterator<Item = (usize, usize)> {
        (0..self.length).map(move |k| self.cell(k))
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({},{}) {} len {}", self.row, self.col, self.direction, self.length)
    }
}

/// A parsed structure: the cell grid plus the derived constraint graph.
#[derive(Debug, Clone)]
pub struct Grid {
    height: usize,
    width: usize,
    open: Vec<bool>,
    variables: Vec<Variable>,
    overlaps: HashMap<(Variable, Variable), (usize, usize)>,
    neighbors: HashMap<Variable, Vec<Variable>>,
}

impl Grid {
    /// Parse a structure from in-memory text.
    ///
    /// # Errors
    ///
    /// Returns `EmptyStructure` if the text has no lines at all, and
    /// `NoOpenCells` if no cell is marked open.
    pub fn parse_from_str(contents: &str) -> Result<Grid, CrossfillError> {
        let rows: Vec<&str> = contents.lines().collect();
        if rows.is_empty() {
            return Err(CrossfillError::EmptyStructure);
        }

        let height = rows.len();
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);

        let mut open = vec![false; height * width];
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                if ch == OPEN_CELL {
                    open[r * width + c] = true;
                }
            }
        }

        if !open.iter().any(|&cell| cell) {
            return Err(CrossfillError::NoOpenCells);
        }

        let variables = scan_variables(height, width, &open);
        let overlaps = compute_overlaps(&variables);

        let mut neighbors: HashMap<Variable, Vec<Variable>> = HashMap::new();
        for &v in &variables {
            let adjacent: Vec<Variable> = variables
                .iter()
                .copied()
                .filter(|&u| u != v && overlaps.contains_key(&(v, u)))
                .collect();
            neighbors.insert(v, adjacent);
        }

        Ok(Grid { height, width, open, variables, overlaps, neighbors })
    }

    /// Read a structure file and parse it.
    ///
    /// # Errors
    ///
    /// Returns `StructureRead` if the file cannot be read, plus everything
    /// `parse_from_str` can return.
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Grid, CrossfillError> {
        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref).map_err(|e| CrossfillError::StructureRead {
            path: path_ref.display().to_string(),
            source: e,
        })?;
        Self::parse_from_str(&data)
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether the cell at (`row`, `col`) is open. Out-of-range cells are
    /// blocked.
    #[must_use]
    pub fn is_open(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width && self.open[row * self.width + col]
    }

    /// All variables in discovery order (row-major, across before down at
    /// the same cell).
    #[must_use]
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// The shared cell of `x` and `y` as character indices into each word,
    /// or `None` if the variables do not cross.
    #[must_use]
    pub fn overlap(&self, x: Variable, y: Variable) -> Option<(usize, usize)> {
        self.overlaps.get(&(x, y)).copied()
    }

    /// The variables crossing `v`, in scan order. Unknown variables have no
    /// neighbors.
    #[must_use]
    pub fn neighbors(&self, v: Variable) -> &[Variable] {
        self.neighbors.get(&v).map_or(&[][..], Vec::as_slice)
    }
}

/// Collect every maximal open run of length ≥ 2, row-major, across first.
fn scan_variables(height: usize, width: usize, open: &[bool]) -> Vec<Variable> {
    let at = |r: usize, c: usize| open[r * width + c];

    let mut variables = Vec::new();
    for r in 0..height {
        for c in 0..width {
            if !at(r, c) {
                continue;
            }
            // A run starts where the preceding cell on its axis is blocked
            // or off-grid.
            if c == 0 || !at(r, c - 1) {
                let mut len = 1;
                while c + len < width && at(r, c + len) {
                    len += 1;
                }
                if len >= 2 {
                    variables.push(Variable::new(r, c, Direction::Across, len));
                }
            }
            if r == 0 || !at(r - 1, c) {
                let mut len = 1;
                while r + len < height && at(r + len, c) {
                    len += 1;
                }
                if len >= 2 {
                    variables.push(Variable::new(r, c, Direction::Down, len));
                }
            }
        }
    }
    variables
}

/// Map each shared cell to the character indices it has in the crossing
/// variables, recording both orientations of every pair.
fn compute_overlaps(variables: &[Variable]) -> HashMap<(Variable, Variable), (usize, usize)> {
    // cell -> (variable index, char index within that variable)
    let mut occupants: HashMap<(usize, usize), Vec<(usize, usize)>> = HashMap::new();
    for (vi, var) in variables.iter().enumerate() {
        for (k, cell) in var.cells().enumerate() {
            occupants.entry(cell).or_default().push((vi, k));
        }
    }

    let mut overlaps = HashMap::new();
    for entries in occupants.values() {
        for (i, &(ai, ak)) in entries.iter().enumerate() {
            for &(bi, bk) in &entries[i + 1..] {
                overlaps.insert((variables[ai], variables[bi]), (ak, bk));
                overlaps.insert((variables[bi], variables[ai]), (bk, ak));
            }
        }
    }
    overlaps
}

#[cfg(test)]
mod tests {
    use super::*;

    /// "corner" grid: one across slot crossing one down slot at the
    /// across slot's last letter.
    ///
    /// ```text
    /// ___
    /// ##_
    /// ##_
    /// ```
    const CORNER: &str = "___\n##_\n##_";

    fn across(row: usize, col: usize, length: usize) -> Variable {
        Variable::new(row, col, Direction::Across, length)
    }

    fn down(row: usize, col: usize, length: usize) -> Variable {
        Variable::new(row, col, Direction::Down, length)
    }

    mod parsing {
        use super::*;

        #[test]
        fn test_corner_discovers_two_variables() {
            let grid = Grid::parse_from_str(CORNER).unwrap();
            assert_eq!(grid.height(), 3);
            assert_eq!(grid.width(), 3);
            assert_eq!(grid.variables(), &[across(0, 0, 3), down(0, 2, 3)]);
        }

        #[test]
        fn test_full_open_grid() {
            let grid = Grid::parse_from_str("___\n___\n___").unwrap();

            // Three across rows and three down columns.
            assert_eq!(grid.variables().len(), 6);
            for r in 0..3 {
                assert!(grid.variables().contains(&across(r, 0, 3)));
                assert!(grid.variables().contains(&down(0, r, 3)));
            }
        }

        #[test]
        fn test_lone_open_cell_is_no_variable() {
            let grid = Grid::parse_from_str("#_#").unwrap();
            assert!(grid.variables().is_empty());
        }

        #[test]
        fn test_scan_order_is_row_major_across_first() {
            let grid = Grid::parse_from_str("__\n____").unwrap();
            assert_eq!(
                grid.variables(),
                &[across(0, 0, 2), down(0, 0, 2), down(0, 1, 2), across(1, 0, 4)]
            );
        }

        #[test]
        fn test_ragged_rows_pad_as_blocked() {
            let grid = Grid::parse_from_str("__\n____").unwrap();
            assert_eq!(grid.width(), 4);
            assert!(!grid.is_open(0, 2));
            assert!(!grid.is_open(0, 3));
            assert!(grid.is_open(1, 3));
        }

        #[test]
        fn test_any_non_underscore_blocks() {
            let grid = Grid::parse_from_str("x_#\n._*").unwrap();
            assert!(grid.is_open(0, 1));
            assert!(grid.is_open(1, 1));
            assert!(!grid.is_open(0, 0));
            assert!(!grid.is_open(1, 2));
        }

        #[test]
        fn test_empty_input_rejected() {
            let err = Grid::parse_from_str("").unwrap_err();
            assert_eq!(err.code(), "E002");
        }

        #[test]
        fn test_openless_input_rejected() {
            let err = Grid::parse_from_str("###\n###").unwrap_err();
            assert_eq!(err.code(), "E003");
        }

        #[test]
        fn test_is_open_out_of_range_is_blocked() {
            let grid = Grid::parse_from_str(CORNER).unwrap();
            assert!(!grid.is_open(3, 0));
            assert!(!grid.is_open(0, 3));
            assert!(!grid.is_open(99, 99));
        }
    }

    mod geometry {
        use super::*;

        #[test]
        fn test_variable_cells() {
            let v = across(1, 2, 3);
            assert_eq!(v.cells().collect::<Vec<_>>(), vec![(1, 2), (1, 3), (1, 4)]);

            let v = down(1, 2, 3);
            assert_eq!(v.cells().collect::<Vec<_>>(), vec![(1, 2), (2, 2), (3, 2)]);
        }

        #[test]
        fn test_corner_overlap_indices() {
            let grid = Grid::parse_from_str(CORNER).unwrap();
            let a = across(0, 0, 3);
            let d = down(0, 2, 3);

            // Shared cell (0,2) is the across slot's 3rd letter and the
            // down slot's 1st.
            assert_eq!(grid.overlap(a, d), Some((2, 0)));
            assert_eq!(grid.overlap(d, a), Some((0, 2)));
        }

        #[test]
        fn test_overlap_none_for_non_crossing() {
            let grid = Grid::parse_from_str("___\n###\n___").unwrap();
            let top = across(0, 0, 3);
            let bottom = across(2, 0, 3);
            assert_eq!(grid.overlap(top, bottom), None);
            assert_eq!(grid.overlap(top, top), None);
        }

        #[test]
        fn test_full_grid_overlaps() {
            let grid = Grid::parse_from_str("___\n___\n___").unwrap();
            for r in 0..3 {
                for c in 0..3 {
                    // Across row r crosses down column c at (r, c).
                    assert_eq!(grid.overlap(across(r, 0, 3), down(0, c, 3)), Some((c, r)));
                }
            }
        }

        #[test]
        fn test_neighbors() {
            let grid = Grid::parse_from_str(CORNER).unwrap();
            let a = across(0, 0, 3);
            let d = down(0, 2, 3);
            assert_eq!(grid.neighbors(a), &[d]);
            assert_eq!(grid.neighbors(d), &[a]);
        }

        #[test]
        fn test_full_grid_neighbors() {
            let grid = Grid::parse_from_str("___\n___\n___").unwrap();
            for &v in grid.variables() {
                let adjacent = grid.neighbors(v);
                assert_eq!(adjacent.len(), 3);
                // Crossing variables run along the other axis.
                assert!(adjacent.iter().all(|u| u.direction != v.direction));
            }
        }

        #[test]
        fn test_neighbors_of_unknown_variable_empty() {
            let grid = Grid::parse_from_str(CORNER).unwrap();
            assert!(grid.neighbors(across(9, 9, 4)).is_empty());
        }
    }
}

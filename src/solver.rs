//! The constraint-satisfaction core: domain pruning, arc consistency, and
//! heuristic backtracking search.
//!
//! A [`Solver`] owns one candidate-word set (domain) per grid variable.
//! Solving runs three stages:
//!
//! 1. **Node consistency** — drop candidates whose length does not fit.
//! 2. **Arc consistency (AC-3)** — drop candidates with no compatible
//!    partner at a shared cell, propagated to a fixed point.
//! 3. **Backtracking search** — place words one variable at a time,
//!    minimum-remaining-values first, least-constraining-value first,
//!    undoing each placement that leads nowhere.
//!
//! Domains only ever shrink; the search tracks tentative placements in a
//! separate [`Assignment`] rather than by mutating domains.
//!
//! "No solution" is a normal outcome, not an error: [`Solver::solve`]
//! returns `Option<Assignment>` and never panics on an exhausted domain.
//!
//! # Examples
//!
//! ```
//! use crossfill::grid::Grid;
//! use crossfill::solver::Solver;
//! use crossfill::word_list::WordList;
//!
//! let grid = Grid::parse_from_str("___\n##_\n##_")?;
//! let words = WordList::parse_from_str("cat\ncar\nart\nrat");
//!
//! let mut solver = Solver::new(&grid, &words.words);
//! match solver.solve() {
//!     Some(assignment) => println!("{assignment}"),
//!     None => println!("No solution."),
//! }
//! # Ok::<(), crossfill::errors::CrossfillError>(())
//! ```

use std::collections::{HashMap, HashSet, VecDeque};
use std::rc::Rc;

use log::debug;

use crate::assignment::Assignment;
use crate::grid::{Grid, Variable};

/// Constraint-propagation state: one shrinking candidate set per variable.
#[derive(Debug, Clone)]
pub struct Solver<'a> {
    grid: &'a Grid,
    domains: HashMap<Variable, HashSet<Rc<str>>>,
}

impl<'a> Solver<'a> {
    /// Create a solver with every variable's domain set to the full
    /// vocabulary.
    #[must_use]
    pub fn new(grid: &'a Grid, vocabulary: &[Rc<str>]) -> Self {
        let domains = grid
            .variables()
            .iter()
            .map(|&v| (v, vocabulary.iter().map(Rc::clone).collect()))
            .collect();
        Self { grid, domains }
    }

    /// The remaining candidates for `var`, or `None` for a variable the
    /// grid does not know.
    #[must_use]
    pub fn domain(&self, var: Variable) -> Option<&HashSet<Rc<str>>> {
        self.domains.get(&var)
    }

    /// Drop every candidate whose length differs from its variable's
    /// required length. Idempotent.
    pub fn enforce_node_consistency(&mut self) {
        let mut removed = 0usize;
        for (var, domain) in &mut self.domains {
            let before = domain.len();
            domain.retain(|w| w.chars().count() == var.length);
            removed += before - domain.len();
        }
        debug!("node consistency removed {removed} candidate(s)");
    }

    /// Make `x` arc-consistent with `y`: remove every candidate of `x`
    /// with no partner in `y`'s domain agreeing at the shared cell.
    ///
    /// Returns true iff at least one candidate was removed. Variables
    /// without a shared cell are vacuously consistent, so the call changes
    /// nothing and returns false. The result depends only on the two
    /// domains at call time.
    pub fn revise(&mut self, x: Variable, y: Variable) -> bool {
        let Some((xi, yi)) = self.grid.overlap(x, y) else {
            return false;
        };

        // The letters y can still place at the shared cell. One pass over
        // y's domain turns the per-candidate check into a set lookup.
        let available: HashSet<char> = self
            .domains
            .get(&y)
            .map(|domain_y| domain_y.iter().filter_map(|w| w.chars().nth(yi)).collect())
            .unwrap_or_default();

        let Some(domain_x) = self.domains.get_mut(&x) else {
            return false;
        };
        let before = domain_x.len();
        domain_x.retain(|w| w.chars().nth(xi).is_some_and(|ch| available.contains(&ch)));
        before != domain_x.len()
    }

    /// Propagate pairwise constraints to a fixed point (AC-3).
    ///
    /// With no `initial_arcs`, the worklist starts from every ordered pair
    /// of distinct variables; otherwise it starts from exactly the
    /// supplied arcs. Returns false as soon as some domain empties — the
    /// puzzle is unsatisfiable and the domains are left exhausted — and
    /// true once the worklist drains with every domain non-empty.
    pub fn ac3(&mut self, initial_arcs: Option<Vec<(Variable, Variable)>>) -> bool {
        let seed: Vec<(Variable, Variable)> = match initial_arcs {
            Some(arcs) => arcs,
            None => {
                let mut arcs = Vec::new();
                for &x in self.grid.variables() {
                    for &y in self.grid.variables() {
                        if x != y {
                            arcs.push((x, y));
                        }
                    }
                }
                arcs
            }
        };

        // Membership set alongside the queue so an arc is never pending
        // twice, including duplicates in the seed.
        let mut queue: VecDeque<(Variable, Variable)> = VecDeque::with_capacity(seed.len());
        let mut pending: HashSet<(Variable, Variable)> = HashSet::with_capacity(seed.len());
        for arc in seed {
            if pending.insert(arc) {
                queue.push_back(arc);
            }
        }

        let mut processed = 0usize;
        while let Some((x, y)) = queue.pop_front() {
            pending.remove(&(x, y));
            processed += 1;

            if self.revise(x, y) {
                if self.domains.get(&x).map_or(true, HashSet::is_empty) {
                    debug!("arc consistency emptied the domain of {x} after {processed} arc(s)");
                    return false;
                }
                // x shrank, so arcs into x may have lost their support.
                for &z in self.grid.neighbors(x) {
                    if z != y && pending.insert((z, x)) {
                        queue.push_back((z, x));
                    }
                }
            }
        }
        debug!("arc consistency converged after {processed} arc(s)");
        true
    }

    /// Pick the unassigned variable with the fewest remaining candidates,
    /// breaking ties by most neighbors and remaining ties by scan order.
    /// Returns `None` when every variable is assigned.
    #[must_use]
    pub fn select_unassigned(&self, assignment: &Assignment) -> Option<Variable> {
        let mut best: Option<(Variable, usize, usize)> = None;
        for &var in self.grid.variables() {
            if assignment.contains(var) {
                continue;
            }
            let size = self.domains.get(&var).map_or(0, HashSet::len);
            let degree = self.grid.neighbors(var).len();
            let better = match best {
                None => true,
                Some((_, best_size, best_degree)) => {
                    size < best_size || (size == best_size && degree > best_degree)
                }
            };
            if better {
                best = Some((var, size, degree));
            }
        }
        best.map(|(var, _, _)| var)
    }

    /// All candidates for `var`, least constraining first.
    ///
    /// A candidate's cost is the number of neighboring domains that still
    /// contain it — neighbors that already hold a word included, since the
    /// count reads domain membership, not assignment state. Ties break
    /// alphabetically, making the order a pure function of the domains.
    /// The result is a permutation of `var`'s domain.
    #[must_use]
    pub fn order_values(&self, var: Variable, assignment: &Assignment) -> Vec<Rc<str>> {
        debug_assert!(
            !assignment.contains(var),
            "ordering candidates for a variable that already holds a word"
        );

        let Some(domain) = self.domains.get(&var) else {
            return Vec::new();
        };

        let mut scored: Vec<(usize, Rc<str>)> = domain
            .iter()
            .map(|w| {
                let cost = self
                    .grid
                    .neighbors(var)
                    .iter()
                    .filter(|z| self.domains.get(z).is_some_and(|dz| dz.contains(w)))
                    .count();
                (cost, Rc::clone(w))
            })
            .collect();
        scored.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
        scored.into_iter().map(|(_, w)| w).collect()
    }

    /// Whether every variable holds a non-empty word.
    #[must_use]
    pub fn is_complete(&self, assignment: &Assignment) -> bool {
        self.grid
            .variables()
            .iter()
            .all(|&v| assignment.get(v).is_some_and(|w| !w.is_empty()))
    }

    /// Whether the words placed so far respect all constraints: pairwise
    /// distinct, lengths matching their variables, and agreeing letters at
    /// every shared cell. Variables without a word are ignored.
    #[must_use]
    pub fn is_consistent(&self, assignment: &Assignment) -> bool {
        let mut seen: HashSet<&str> = HashSet::new();
        for (var, word) in assignment.iter() {
            if word.chars().count() != var.length {
                return false;
            }
            if !seen.insert(word.as_ref()) {
                return false;
            }
            for &z in self.grid.neighbors(var) {
                if let (Some(other), Some((vi, zi))) =
                    (assignment.get(z), self.grid.overlap(var, z))
                {
                    if word.chars().nth(vi) != other.chars().nth(zi) {
                        return false;
                    }
                }
            }
        }
        true
    }

    /// Depth-first search for a complete consistent assignment.
    ///
    /// Returns true when `assignment` has been extended into a full
    /// solution; the placements then persist. Returns false with
    /// `assignment` exactly as it was on entry: every tentative placement
    /// is undone before the next candidate is tried or the branch is given
    /// up.
    pub fn backtrack(&self, assignment: &mut Assignment) -> bool {
        if self.is_complete(assignment) {
            return true;
        }
        let Some(var) = self.select_unassigned(assignment) else {
            // Every variable holds a word yet one of them is empty; no
            // placement can complete this branch.
            return false;
        };

        for word in self.order_values(var, assignment) {
            assignment.set(var, word);
            if self.is_consistent(assignment) && self.backtrack(assignment) {
                return true;
            }
            assignment.remove(var);
        }
        false
    }

    /// Run the full pipeline: node consistency, arc consistency, then
    /// backtracking search from an empty assignment.
    ///
    /// The arc-consistency outcome is logged but deliberately not used to
    /// short-circuit: emptied domains starve the search on their own, so
    /// an unsatisfiable puzzle still falls out as `None`.
    pub fn solve(&mut self) -> Option<Assignment> {
        self.enforce_node_consistency();

        let arc_consistent = self.ac3(None);
        debug!(
            "arc consistency {} before search",
            if arc_consistent { "held" } else { "failed" }
        );

        let mut assignment = Assignment::default();
        if self.backtrack(&mut assignment) {
            debug!("search found a complete assignment: {assignment}");
            Some(assignment)
        } else {
            debug!("search exhausted all candidates without a solution");
            None
        }
    }

    #[cfg(test)]
    pub(crate) fn set_domain(&mut self, var: Variable, words: &[&str]) {
        self.domains.insert(var, words.iter().map(|w| Rc::from(*w)).collect());
    }
}

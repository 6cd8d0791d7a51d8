#![deny(missing_docs)]

//! Exhaustive backtracking solver for word lattice puzzles.
//!
//! A puzzle is a rectangular grid of cells, each empty or holding a
//! four-letter word, surrounded by a lattice of points with one extra row
//! and column. A solution places one letter on every lattice point so that
//! the four corner letters of every filled cell are exactly the letters of
//! that cell's word, counted as a multiset.
//!
//! ```
//! use word_lattice::{solve, Puzzle};
//!
//! let puzzle = Puzzle::from_rows([["aabb"]]);
//! let solutions = solve(&puzzle);
//!
//! assert_eq!(solutions.len(), 6);
//! assert_eq!(solutions[0].to_string(), "aa\nbb\n");
//! ```
//!
//! Solutions are found in a deterministic discovery order and collection
//! stops once the cap is reached; use [`Solver`] directly to iterate lazily.

pub(crate) mod constraint;
pub(crate) mod lattice;
pub mod puzzle;
pub(crate) mod solver;
pub mod validate;

pub use lattice::Solution;
pub use puzzle::Puzzle;
pub use solver::Solver;

/// The number of solutions [`solve`] collects before stopping the search.
pub const DEFAULT_SOLUTION_CAP: usize = 10;

/// Return the puzzle's solutions in discovery order, at most
/// [`DEFAULT_SOLUTION_CAP`] of them.
///
/// Solving never fails: a degenerate grid, a puzzle without words, or a
/// puzzle whose words cannot be formed all come back as an empty sequence.
pub fn solve(puzzle: &Puzzle) -> Vec<Solution> {
    solve_capped(puzzle, DEFAULT_SOLUTION_CAP)
}

/// Return the puzzle's solutions in discovery order, at most `cap` of them.
///
/// The search stops as soon as `cap` solutions have been found, without
/// trying further candidates at any depth.
pub fn solve_capped(puzzle: &Puzzle, cap: usize) -> Vec<Solution> {
    Solver::new(puzzle).take(cap).collect()
}

//! Backtracking search over lattice point assignments.
//!
//! Lattice points are visited in row-major order. Each point tries the
//! letters of its candidate domain in a fixed order; after every tentative
//! placement the cells touching that point are checked and the branch is
//! pruned immediately on a violation. Completing the last point yields a
//! snapshot of the lattice. The search is exhaustive and deterministic:
//! identical puzzles always produce identical solution sequences.

use crate::{constraint, lattice::Lattice, puzzle::Puzzle, Solution};
use std::collections::VecDeque;

/// Solver that iteratively returns lattice assignments satisfying every
/// filled cell of a puzzle.
///
/// The solver is an [`Iterator`] over [`Solution`]s in discovery order, so
/// capping the number of solutions is a plain [`take`](Iterator::take); once
/// the iterator is no longer pulled, no further candidates are tried at any
/// depth. The recursion is kept on an explicit frame stack whose depth is
/// bounded by the (R + 1) × (C + 1) lattice points.
#[derive(Debug)]
pub struct Solver<'p> {
    puzzle: &'p Puzzle,

    // Values used to track the state of the search
    lattice: Lattice,
    /// Fallback domain for points touching no filled cell: every letter of
    /// every filled cell, in first-seen row-major order.
    alphabet: Vec<char>,
    stack: Vec<Frame>,
}

#[derive(Debug)]
enum FrameState {
    // Before placing the front candidate on this frame's point
    Assign,
    // After checking, before removing the placement again
    Undo,
}

#[derive(Debug)]
struct Frame {
    point: (usize, usize),
    candidates: VecDeque<char>,
    state: FrameState,
}

impl<'p> Solver<'p> {
    /// Create a new `Solver` for the given puzzle.
    pub fn new(puzzle: &'p Puzzle) -> Self {
        let alphabet = Self::alphabet(puzzle);
        let lattice = Lattice::new(puzzle.point_rows(), puzzle.point_columns());

        log::debug!(
            "Searching a {}x{} puzzle, fallback alphabet {:?}",
            puzzle.rows(),
            puzzle.columns(),
            alphabet
        );

        let mut solver = Self {
            puzzle,
            lattice,
            alphabet,
            stack: Vec::new(),
        };

        // A degenerate grid has no lattice points to assign and therefore no
        // solutions; leave the stack empty. Likewise when the first point
        // already has an empty domain (a puzzle with no words at all).
        if solver.puzzle.point_rows() > 0 {
            let candidates = Self::domain(solver.puzzle, &solver.alphabet, (0, 0));
            if !candidates.is_empty() {
                solver.stack.push(Frame {
                    point: (0, 0),
                    candidates,
                    state: FrameState::Assign,
                });
            }
        }

        solver
    }

    /// Reset all search state, so that iteration starts over from the first
    /// solution.
    pub fn reset(&mut self) {
        *self = Self::new(self.puzzle);
    }

    /// Every distinct letter used by a filled cell, collected in first-seen
    /// order over the cells in row-major order.
    fn alphabet(puzzle: &Puzzle) -> Vec<char> {
        let mut letters = Vec::new();
        for (row, column) in puzzle.filled_cells() {
            for &letter in puzzle.distinct_letters(row, column).unwrap_or(&[]) {
                if !letters.contains(&letter) {
                    letters.push(letter);
                }
            }
        }
        letters
    }

    /// The candidate letters for a lattice point: the distinct letters of
    /// each adjacent filled cell, deduplicated at first occurrence in the
    /// fixed [`Puzzle::cells_touching`] scan order.
    ///
    /// A point adjacent to no filled cell falls back to the whole puzzle
    /// alphabet. That is a coarse heuristic (it can both over- and
    /// under-restrict such points) but it is part of the solver's observable
    /// behavior: changing it changes the solution set.
    fn domain(puzzle: &Puzzle, alphabet: &[char], point: (usize, usize)) -> VecDeque<char> {
        let mut candidates = VecDeque::new();
        for (row, column) in puzzle.cells_touching(point.0, point.1) {
            for &letter in puzzle.distinct_letters(row, column).unwrap_or(&[]) {
                if !candidates.contains(&letter) {
                    candidates.push_back(letter);
                }
            }
        }

        if candidates.is_empty() {
            candidates.extend(alphabet.iter().copied());
        }

        candidates
    }

    /// Check every cell whose corner set includes the given point against
    /// the current lattice. Cells with unassigned corners pass; see
    /// [`constraint::word_matches_corners`].
    fn cells_ok(puzzle: &Puzzle, lattice: &Lattice, point: (usize, usize)) -> bool {
        puzzle.cells_touching(point.0, point.1).all(|(row, column)| {
            match puzzle.sorted_letters(row, column) {
                Some(sorted_word) => {
                    let corners = lattice.values(puzzle.corners(row, column));
                    constraint::word_matches_corners(sorted_word, corners)
                }
                // Empty cells impose no constraint.
                None => true,
            }
        })
    }

    /// The lattice point after the given one in row-major order, or `None`
    /// past the bottom-right point.
    fn next_point(puzzle: &Puzzle, point: (usize, usize)) -> Option<(usize, usize)> {
        let (point_row, point_column) = point;
        if point_column + 1 < puzzle.point_columns() {
            Some((point_row, point_column + 1))
        } else if point_row + 1 < puzzle.point_rows() {
            Some((point_row + 1, 0))
        } else {
            None
        }
    }

    /// Return all solutions, in discovery order.
    ///
    /// This exhausts the search; prefer `take(cap)` on the iterator to bound
    /// the number of solutions collected.
    pub fn all_solutions(&mut self) -> Vec<Solution> {
        self.collect()
    }

    /// Compute up to the next solution, returning `None` if there are no
    /// more.
    pub fn next_solution(&mut self) -> Option<Solution> {
        while !self.stack.is_empty() {
            let frame = self.stack.last_mut().unwrap();

            match frame.state {
                // Place this frame's front candidate, check the touched
                // cells, and descend on success.
                FrameState::Assign => {
                    let point = frame.point;
                    let letter = *frame.candidates.front().unwrap();
                    frame.state = FrameState::Undo;

                    self.lattice.assign(point.0, point.1, letter);

                    if Self::cells_ok(self.puzzle, &self.lattice, point) {
                        match Self::next_point(self.puzzle, point) {
                            Some(next) => {
                                let candidates = Self::domain(self.puzzle, &self.alphabet, next);
                                if !candidates.is_empty() {
                                    self.stack.push(Frame {
                                        point: next,
                                        candidates,
                                        state: FrameState::Assign,
                                    });
                                }
                            }
                            // Every lattice point is assigned and every cell
                            // checked out along the way: a solution. The
                            // frame is already primed to undo, so iteration
                            // resumes seamlessly.
                            None => {
                                log::debug!("Found a solution at point {:?}", point);
                                return Some(self.lattice.snapshot());
                            }
                        }
                    }
                }
                // Remove the tentative placement and step to the next
                // candidate, dropping the frame once it runs out.
                FrameState::Undo => {
                    let point = frame.point;
                    self.lattice.clear(point.0, point.1);
                    frame.candidates.pop_front();

                    if frame.candidates.is_empty() {
                        self.stack.pop();
                    } else {
                        frame.state = FrameState::Assign;
                    }
                }
            }
        }

        None
    }
}

impl Iterator for Solver<'_> {
    type Item = Solution;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_solution()
    }
}

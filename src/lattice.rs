//! The lattice of assignable points surrounding the puzzle cells, plus the
//! immutable snapshots taken of it whenever the solver completes a valid
//! assignment.

use std::fmt;

/// The solver's working buffer: an (R + 1) × (C + 1) grid of lattice points,
/// each either unassigned or holding a letter.
///
/// Exactly one `Lattice` exists per solve and it is mutated in place. The
/// solver guarantees that every tentative assignment is undone when a branch
/// is abandoned, so outside of the active search path the buffer always
/// reflects the assignments of the enclosing branches only.
#[derive(Debug, Clone)]
pub(crate) struct Lattice {
    point_rows: usize,
    point_columns: usize,
    points: Vec<Option<char>>,
}

impl Lattice {
    /// Create a lattice with all points unassigned.
    pub(crate) fn new(point_rows: usize, point_columns: usize) -> Self {
        Self {
            point_rows,
            point_columns,
            points: vec![None; point_rows * point_columns],
        }
    }

    fn index(&self, point_row: usize, point_column: usize) -> usize {
        debug_assert!(point_row < self.point_rows && point_column < self.point_columns);
        point_row * self.point_columns + point_column
    }

    /// Tentatively place a letter on a point.
    pub(crate) fn assign(&mut self, point_row: usize, point_column: usize, letter: char) {
        let index = self.index(point_row, point_column);
        self.points[index] = Some(letter);
    }

    /// Undo a tentative placement.
    pub(crate) fn clear(&mut self, point_row: usize, point_column: usize) {
        let index = self.index(point_row, point_column);
        self.points[index] = None;
    }

    /// The current value of a point.
    pub(crate) fn value(&self, point_row: usize, point_column: usize) -> Option<char> {
        self.points[self.index(point_row, point_column)]
    }

    /// The current values of the four given points, typically a cell's
    /// corners.
    pub(crate) fn values(&self, points: [(usize, usize); 4]) -> [Option<char>; 4] {
        points.map(|(point_row, point_column)| self.value(point_row, point_column))
    }

    /// Take an owned snapshot of a fully assigned lattice.
    ///
    /// # Panics
    ///
    /// Panics if any point is still unassigned; the solver only calls this
    /// after placing a letter on the last lattice point.
    pub(crate) fn snapshot(&self) -> Solution {
        let letters = self
            .points
            .iter()
            .map(|point| point.expect("snapshot of a partially assigned lattice"))
            .collect();

        Solution {
            point_rows: self.point_rows,
            point_columns: self.point_columns,
            letters,
        }
    }
}

/// One complete lattice assignment that satisfies every filled cell of the
/// puzzle it was solved from.
///
/// Solutions are produced in discovery order and never mutated after being
/// recorded; they own their letters and outlive the solve that found them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    point_rows: usize,
    point_columns: usize,
    letters: Vec<char>,
}

impl Solution {
    /// The number of lattice point rows (R + 1).
    pub fn point_rows(&self) -> usize {
        self.point_rows
    }

    /// The number of lattice point columns (C + 1).
    pub fn point_columns(&self) -> usize {
        self.point_columns
    }

    /// The letter assigned to the given lattice point.
    pub fn letter(&self, point_row: usize, point_column: usize) -> char {
        self.letters[point_row * self.point_columns + point_column]
    }

    /// Return an iterator over the rows of lattice point letters, top to
    /// bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.letters.chunks(self.point_columns)
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.rows() {
            for letter in row {
                write!(f, "{}", letter)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

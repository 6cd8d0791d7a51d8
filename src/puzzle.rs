//! A word lattice puzzle is an R × C grid of cells surrounded by an
//! (R + 1) × (C + 1) grid of lattice points. Each cell either is empty or
//! holds a four-letter word, and a cell is satisfied when the letters on its
//! four corner points form exactly the letters of its word, counted as a
//! multiset.

/// Instance of a word lattice puzzle.
///
/// The grid is immutable for the duration of a solve. Everything the solver
/// asks per cell (letters in written order, sorted letters for the multiset
/// check, distinct letters for domain seeding) is computed once here.
#[derive(Debug, Clone)]
pub struct Puzzle {
    rows: usize,
    columns: usize,
    /// Row-major cells; `None` is an empty cell.
    cells: Vec<Option<CellWord>>,
}

#[derive(Debug, Clone)]
struct CellWord {
    /// The word's letters in written order.
    letters: Vec<char>,
    /// The same letters sorted, used as the multiset key.
    sorted: Vec<char>,
    /// Distinct letters in first-occurrence order.
    distinct: Vec<char>,
}

impl CellWord {
    fn new(word: &str) -> Self {
        let letters: Vec<char> = word.chars().collect();

        let mut sorted = letters.clone();
        sorted.sort_unstable();

        let mut distinct = Vec::new();
        for &letter in &letters {
            if !distinct.contains(&letter) {
                distinct.push(letter);
            }
        }

        Self {
            letters,
            sorted,
            distinct,
        }
    }
}

impl Puzzle {
    /// Create a puzzle from rows of cell contents.
    ///
    /// A cell whose string is blank (empty or whitespace only) is an empty
    /// cell; any other string is kept verbatim, including words that are not
    /// four letters long. Those are accepted here and simply never
    /// satisfiable, see [`crate::validate`] for the up-front check.
    ///
    /// # Panics
    ///
    /// Panics if the rows do not all have the same number of cells.
    pub fn from_rows<R, C, S>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut num_rows = 0;
        let mut num_columns = 0;
        let mut cells = Vec::new();

        for row in rows {
            let before = cells.len();
            for cell in row {
                let word = cell.as_ref();
                if word.trim().is_empty() {
                    cells.push(None);
                } else {
                    cells.push(Some(CellWord::new(word)));
                }
            }

            let width = cells.len() - before;
            if num_rows == 0 {
                num_columns = width;
            } else {
                assert_eq!(
                    width, num_columns,
                    "All puzzle rows must have the same number of cells"
                );
            }
            num_rows += 1;
        }

        if num_columns == 0 {
            // A grid with no columns has no cells at all, drop the
            // zero-width rows so that dimensions come out as 0 × 0.
            num_rows = 0;
            cells.clear();
        }

        Self {
            rows: num_rows,
            columns: num_columns,
            cells,
        }
    }

    /// The number of cell rows (R).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The number of cell columns (C).
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// The number of lattice point rows (R + 1), or 0 for a degenerate grid.
    pub fn point_rows(&self) -> usize {
        if self.rows == 0 || self.columns == 0 {
            0
        } else {
            self.rows + 1
        }
    }

    /// The number of lattice point columns (C + 1), or 0 for a degenerate
    /// grid.
    pub fn point_columns(&self) -> usize {
        if self.rows == 0 || self.columns == 0 {
            0
        } else {
            self.columns + 1
        }
    }

    fn cell(&self, row: usize, column: usize) -> &Option<CellWord> {
        &self.cells[row * self.columns + column]
    }

    /// The letters of the word at the given cell in written order, or `None`
    /// for an empty cell.
    pub fn letters(&self, row: usize, column: usize) -> Option<&[char]> {
        self.cell(row, column)
            .as_ref()
            .map(|word| word.letters.as_slice())
    }

    /// The sorted letters of the word at the given cell, or `None` for an
    /// empty cell.
    pub(crate) fn sorted_letters(&self, row: usize, column: usize) -> Option<&[char]> {
        self.cell(row, column)
            .as_ref()
            .map(|word| word.sorted.as_slice())
    }

    /// The distinct letters of the word at the given cell in
    /// first-occurrence order, or `None` for an empty cell.
    pub(crate) fn distinct_letters(&self, row: usize, column: usize) -> Option<&[char]> {
        self.cell(row, column)
            .as_ref()
            .map(|word| word.distinct.as_slice())
    }

    /// Return an iterator over the coordinates of all filled cells in
    /// row-major order.
    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_some())
            .map(move |(index, _)| (index / columns, index % columns))
    }

    /// The four lattice points surrounding the given cell, in fixed order
    /// top-left, top-right, bottom-left, bottom-right.
    pub fn corners(&self, row: usize, column: usize) -> [(usize, usize); 4] {
        [
            (row, column),
            (row, column + 1),
            (row + 1, column),
            (row + 1, column + 1),
        ]
    }

    /// The cells whose corner set includes the given lattice point, emitted
    /// in fixed order: the cell above-left, above-right, below-left, and
    /// below-right of the point, skipping whichever are out of range.
    ///
    /// A lattice point touches at most 4 cells, and at least 1 when the grid
    /// is non-degenerate.
    pub fn cells_touching(
        &self,
        point_row: usize,
        point_column: usize,
    ) -> impl Iterator<Item = (usize, usize)> {
        let row_above = point_row.checked_sub(1);
        let column_left = point_column.checked_sub(1);
        let row_below = (point_row < self.rows).then_some(point_row);
        let column_right = (point_column < self.columns).then_some(point_column);

        [
            row_above.zip(column_left),
            row_above.zip(column_right),
            row_below.zip(column_left),
            row_below.zip(column_right),
        ]
        .into_iter()
        .flatten()
    }
}

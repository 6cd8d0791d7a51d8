//! Up-front validation of puzzle input.
//!
//! The solver itself accepts any puzzle shape and quietly returns no
//! solutions for hopeless input, so validation exists to give callers a
//! message per offending cell before they start a search.

use crate::Puzzle;

/// A reason the puzzle input is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A filled cell holds a word that is not exactly four letters long.
    #[error("the word at row {}, column {} must be 4 letters (found {})", row + 1, column + 1, length)]
    WordLength {
        /// The cell's row, 0-based.
        row: usize,
        /// The cell's column, 0-based.
        column: usize,
        /// The number of letters in the offending word.
        length: usize,
    },
    /// No cell of the puzzle holds a word.
    #[error("enter at least one word")]
    NoWords,
}

/// Check that the puzzle has at least one word and that every word is
/// exactly four letters, reporting every violation.
pub fn validate(puzzle: &Puzzle) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut has_any_word = false;

    for (row, column) in puzzle.filled_cells() {
        has_any_word = true;
        let length = puzzle
            .letters(row, column)
            .map(<[char]>::len)
            .unwrap_or_default();
        if length != 4 {
            errors.push(ValidationError::WordLength {
                row,
                column,
                length,
            });
        }
    }

    if !has_any_word {
        errors.push(ValidationError::NoWords);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

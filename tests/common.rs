use word_lattice::{Puzzle, Solution};

/// Assert that the solution satisfies every filled cell of the puzzle: the
/// letters on the cell's four corners, counted as a multiset, must be
/// exactly the letters of the cell's word.
///
/// This recomputes the multiset comparison from scratch instead of reusing
/// any of the solver's machinery.
#[allow(dead_code)]
pub fn assert_solution_satisfies(puzzle: &Puzzle, solution: &Solution) {
    log::debug!("Checking solution:\n{}", solution);

    for (row, column) in puzzle.filled_cells() {
        let mut word: Vec<char> = puzzle
            .letters(row, column)
            .expect("filled cell has a word")
            .to_vec();
        let mut corners: Vec<char> = puzzle
            .corners(row, column)
            .iter()
            .map(|&(point_row, point_column)| solution.letter(point_row, point_column))
            .collect();

        word.sort_unstable();
        corners.sort_unstable();

        assert_eq!(
            word, corners,
            "Cell ({}, {}) is not satisfied by the solution",
            row, column
        );
    }
}

/// Render the solutions as one string per solution, one lattice row per
/// line.
#[allow(dead_code)]
pub fn render(solutions: &[Solution]) -> Vec<String> {
    solutions.iter().map(Solution::to_string).collect()
}

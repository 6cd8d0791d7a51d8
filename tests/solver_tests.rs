mod common;

use common::{assert_solution_satisfies, render};
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use word_lattice::{solve, solve_capped, Puzzle, Solver, DEFAULT_SOLUTION_CAP};

#[test]
fn enumerate_single_cell_solutions_in_order() {
    env_logger::init();

    let puzzle = Puzzle::from_rows([["aabb"]]);
    let solutions = solve(&puzzle);

    assert_eq!(
        render(&solutions),
        vec![
            "aa\nbb\n",
            "ab\nab\n",
            "ab\nba\n",
            "ba\nab\n",
            "ba\nba\n",
            "bb\naa\n",
        ]
    );
    for solution in &solutions {
        assert_solution_satisfies(&puzzle, solution);
    }
}

#[test]
fn cap_truncates_without_reordering() {
    let puzzle = Puzzle::from_rows([["aabb"]]);

    let capped = solve_capped(&puzzle, 3);
    assert_eq!(render(&capped), vec!["aa\nbb\n", "ab\nab\n", "ab\nba\n"]);

    let all = solve_capped(&puzzle, usize::MAX);
    assert_eq!(capped[..], all[..3]);
}

#[test]
fn default_cap_bounds_a_wide_open_puzzle() {
    // A single all-distinct word has 4! = 24 lattice assignments.
    let puzzle = Puzzle::from_rows([["abcd"]]);

    assert_eq!(solve(&puzzle).len(), DEFAULT_SOLUTION_CAP);
    assert_eq!(solve_capped(&puzzle, usize::MAX).len(), 24);
    assert_eq!(solve_capped(&puzzle, 0).len(), 0);
}

#[test]
fn degenerate_grids_have_no_solutions() {
    let rows: [[&str; 0]; 0] = [];
    let no_rows = Puzzle::from_rows(rows);
    assert_eq!(solve(&no_rows).len(), 0);

    let no_columns = Puzzle::from_rows::<_, _, &str>([[], []]);
    assert_eq!(solve(&no_columns).len(), 0);

    let all_empty = Puzzle::from_rows([["", ""], ["", ""]]);
    assert_eq!(solve(&all_empty).len(), 0);
}

#[test]
fn malformed_word_lengths_yield_nothing_without_failing() {
    let too_short = Puzzle::from_rows([["abc"]]);
    assert_eq!(solve(&too_short).len(), 0);

    // The malformed cell poisons every branch, so even though "aabb" on its
    // own has 6 solutions, the combined puzzle has none.
    let mixed = Puzzle::from_rows([["aabb", "abcde"]]);
    assert_eq!(solve(&mixed).len(), 0);
}

#[test]
fn shared_corners_constrain_neighboring_cells() {
    // Both cells force all six points to 'a'.
    let forced = Puzzle::from_rows([["aaaa", "aaaa"]]);
    assert_eq!(render(&solve(&forced)), vec!["aaa\naaa\n"]);

    // The two shared points cannot be 'a' and 'b' at once.
    let conflicted = Puzzle::from_rows([["aaaa", "bbbb"]]);
    assert_eq!(solve(&conflicted).len(), 0);

    // "aaaa" pins its corners, leaving exactly one way to finish "aabb".
    let pinned = Puzzle::from_rows([["aaaa", "aabb"]]);
    assert_eq!(render(&solve(&pinned)), vec!["aab\naab\n"]);
}

#[test]
fn multi_cell_solutions_satisfy_every_cell() {
    let puzzle = Puzzle::from_rows([["aabb", "abab"], ["bbaa", "baba"]]);
    let solutions = solve_capped(&puzzle, usize::MAX);

    assert!(!solutions.is_empty());
    for solution in &solutions {
        assert_solution_satisfies(&puzzle, solution);
    }
}

#[test]
fn discovery_order_is_deterministic() {
    let puzzle = Puzzle::from_rows([["aabb", "abab"], ["bbaa", "baba"]]);
    let baseline = solve_capped(&puzzle, 20);

    assert_eq!(baseline, solve_capped(&puzzle, 20));

    // The same puzzle solved concurrently still produces identical ordered
    // sequences on every thread.
    let runs: Vec<_> = (0..8)
        .into_par_iter()
        .map(|_| solve_capped(&puzzle, 20))
        .collect();
    for run in runs {
        assert_eq!(baseline, run);
    }
}

#[test]
fn letters_are_characters_not_bytes() {
    let puzzle = Puzzle::from_rows([["かかささ"]]);
    let solutions = solve(&puzzle);

    assert_eq!(solutions.len(), 6);
    assert_eq!(solutions[0].to_string(), "かか\nささ\n");
    for solution in &solutions {
        assert_solution_satisfies(&puzzle, solution);
    }
}

#[test]
fn solver_iterates_lazily() {
    let puzzle = Puzzle::from_rows([["abcd"]]);
    let mut solver = Solver::new(&puzzle);

    let first = solver.next_solution();
    assert!(first.is_some());

    // Pulling the rest via the Iterator impl picks up where we left off.
    assert_eq!(solver.count(), 23);
}

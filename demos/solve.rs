//! Solve a word lattice puzzle from the command line.
//! Usage:
//!
//! ```bash
//! cargo run --example solve -- "taco,coat" ","
//! ```
//!
//! Each argument is one row of the puzzle, with the cell words separated by
//! commas; a blank entry is an empty cell.

use word_lattice::{solve, validate::validate, Puzzle, DEFAULT_SOLUTION_CAP};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("puzzle rows needed");
        std::process::exit(1);
    }

    let rows: Vec<Vec<&str>> = args[1..].iter().map(|row| row.split(',').collect()).collect();
    let widths: Vec<usize> = rows.iter().map(Vec::len).collect();
    if widths.iter().any(|width| *width != widths[0]) {
        eprintln!("all rows must have the same number of cells");
        std::process::exit(1);
    }

    let puzzle = Puzzle::from_rows(rows);
    if let Err(errors) = validate(&puzzle) {
        for error in errors {
            eprintln!("{}", error);
        }
        std::process::exit(1);
    }

    let solutions = solve(&puzzle);
    for solution in &solutions {
        println!("{}", solution);
    }

    if solutions.len() >= DEFAULT_SOLUTION_CAP {
        println!("at least {} solutions exist", DEFAULT_SOLUTION_CAP);
    } else {
        println!("{} solution(s)", solutions.len());
    }
}

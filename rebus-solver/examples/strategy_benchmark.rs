//! Benchmark comparing the three search strategies on classic puzzles.
//!
//! Run with: cargo run --example strategy_benchmark --release
//!
//! For every puzzle, each strategy is timed and its evaluation count printed.
//! The solution sets are checked against each other before moving on.

use rebus_solver::{ColumnSearch, NaiveSearch, ParallelSearch, Rebus, Search};
use std::time::Instant;

const PUZZLES: &[&str] = &[
    "КОЗА+КОЗА = СТАДО",
    "AB * C = DE",
    "SEND + MORE = MONEY",
    "трава+корова+доярка = молоко",
];

fn main() {
    println!("Rebus Strategy Benchmark");
    println!("========================\n");

    let strategies: [(&str, Box<dyn Search>); 3] = [
        ("naive", Box::new(NaiveSearch)),
        ("parallel", Box::new(ParallelSearch::new())),
        ("column", Box::new(ColumnSearch)),
    ];

    for puzzle in PUZZLES {
        let rebus = match Rebus::new(puzzle) {
            Ok(rebus) => rebus,
            Err(e) => {
                println!("{puzzle}: {e}\n");
                continue;
            }
        };
        println!("=== {} ({} letters) ===", puzzle, rebus.letters().len());

        let mut baseline = None;
        for (name, search) in &strategies {
            let start = Instant::now();
            let result = rebus.solve_with(search.as_ref());
            let elapsed = start.elapsed();

            println!(
                "{:<9} {:>12?}  evaluations: {:>9}  solutions: {}",
                name,
                elapsed,
                result.report.evaluations,
                result.report.solutions.len()
            );

            match &baseline {
                None => baseline = Some(result.report.solutions),
                Some(expected) => assert_eq!(
                    &result.report.solutions, expected,
                    "{name} disagrees on {puzzle}"
                ),
            }
        }

        if let Some(solutions) = &baseline {
            for solution in solutions.iter().take(3) {
                println!("  {}", rebus.decode(solution));
            }
        }
        println!();
    }
}

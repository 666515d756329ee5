//! Render a solve outcome as text

use std::fmt::Write;

use itertools::Itertools;

use crate::puzzle::{HintSet, Puzzle};
use crate::solve::SolveOutcome;

const FILLED: char = '■';
const EMPTY: char = '∙';

/// Renders the result, some numbers about the solve and the grid with the hints beside it.
///
/// The grid is drawn whatever the result, so an unsolved outcome shows the first remaining
/// permutation of every row.
pub fn render_outcome(puzzle: &Puzzle, outcome: &SolveOutcome) -> String {
    let mut s = String::new();
    write_outcome(&mut s, puzzle, outcome).expect("writing to a String cannot fail");
    s
}

fn write_outcome(s: &mut String, puzzle: &Puzzle, outcome: &SolveOutcome) -> std::fmt::Result {
    let stats = outcome.stats();
    writeln!(s, "Nonogram '{}' Result: {}.", puzzle.name(), outcome.result())?;
    writeln!(
        s,
        "Performance: Time taken: {}ms, Steps: {}, Initial Permutations: {} Row, {} Column, {} Total permutations.",
        outcome.elapsed().as_millis(),
        stats.steps(),
        stats.initial_row_permutations(),
        stats.initial_column_permutations(),
        stats.initial_permutations()
    )?;
    writeln!(s)?;

    let row_gutter = max_run_count(puzzle.row_hints()) * 2;
    for i in 0..max_run_count(puzzle.column_hints()) {
        write!(s, "{:width$}", "", width = row_gutter + 1)?;
        for hints in puzzle.column_hints() {
            match hints.runs().get(i) {
                Some(run) => write!(s, "{:>2} ", run)?,
                None => write!(s, "   ")?,
            }
        }
        writeln!(s)?;
    }

    for (hints, row) in puzzle.row_hints().iter().zip(outcome.grid().rows()) {
        let hints = hints.runs().iter().join(" ");
        write!(s, "{:>width$} ", hints, width = row_gutter)?;
        for &filled in row {
            write!(s, " {} ", if filled { FILLED } else { EMPTY })?;
        }
        writeln!(s)?;
    }
    Ok(())
}

fn max_run_count(hints: &[HintSet]) -> usize {
    hints.iter().map(HintSet::run_count).max().unwrap_or(0)
}

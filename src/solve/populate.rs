//! Generate the initial candidates of every line, one line at a time or in parallel

use std::time::Instant;

use rayon::prelude::*;

use crate::collections::Line;
use crate::error::{InvalidHints, SolveError};
use crate::puzzle::{Axis, HintSet, Puzzle};
use crate::solve::cancel::StopSignal;
use crate::solve::permutation::generate_permutations;
use crate::solve::PermutationSet;

/// The initial candidates of both axes
pub(crate) struct Population {
    pub rows: PermutationSet,
    pub columns: PermutationSet,
    /// The solve was stopped before every line was populated. The sets hold whatever was
    /// generated until then.
    pub stopped: bool,
}

/// Populates the rows, then the columns. The columns are left empty if the solve is
/// stopped while populating the rows.
pub(crate) fn populate(
    puzzle: &Puzzle,
    signal: &StopSignal<'_>,
    parallel: bool,
) -> Result<Population, SolveError> {
    let (rows, stopped) = populate_axis(puzzle, Axis::Row, signal, parallel)?;
    if stopped {
        return Ok(Population {
            rows,
            columns: PermutationSet::new(puzzle.column_count()),
            stopped,
        });
    }
    let (columns, stopped) = populate_axis(puzzle, Axis::Column, signal, parallel)?;
    Ok(Population {
        rows,
        columns,
        stopped,
    })
}

/// Returns the candidates of every line of `axis`, and true if the signal fired first
fn populate_axis(
    puzzle: &Puzzle,
    axis: Axis,
    signal: &StopSignal<'_>,
    parallel: bool,
) -> Result<(PermutationSet, bool), SolveError> {
    let start = Instant::now();
    let length = puzzle.line_length(axis);
    let hints = puzzle.hints(axis);
    let generate = |(index, hints): (usize, &HintSet)| {
        populate_line(hints, length, signal)
            .map_err(|source| SolveError::Hints { axis, index, source })
    };
    let (mut lines, stopped) = if parallel {
        let lines: Vec<(Vec<Line>, bool)> = hints
            .par_iter()
            .enumerate()
            .map(generate)
            .collect::<Result<_, _>>()?;
        let stopped = lines.iter().any(|&(_, stopped)| stopped);
        let lines: Vec<Vec<Line>> = lines.into_iter().map(|(patterns, _)| patterns).collect();
        (lines, stopped)
    } else {
        let mut lines = Vec::with_capacity(hints.len());
        let mut stopped = false;
        for line in hints.iter().enumerate() {
            let (patterns, line_stopped) = generate(line)?;
            lines.push(patterns);
            if line_stopped || signal.should_stop() {
                stopped = true;
                break;
            }
        }
        (lines, stopped)
    };
    lines.resize_with(hints.len(), Vec::new);
    let set = PermutationSet::from_lines(lines);
    if stopped {
        debug!(
            "Stopped after populating {} {} permutations",
            set.total_count(),
            axis
        );
    } else {
        debug!(
            "Populated {} {} permutations in {:?}",
            set.total_count(),
            axis,
            start.elapsed()
        );
    }
    Ok((set, stopped))
}

/// Generates the candidates of one line, checking `signal` after every pattern.
/// Returns the patterns generated so far, and true if the signal fired.
fn populate_line(
    hints: &HintSet,
    length: usize,
    signal: &StopSignal<'_>,
) -> Result<(Vec<Line>, bool), InvalidHints> {
    let mut patterns = Vec::new();
    let flow = generate_permutations(hints, length, |line| {
        patterns.push(line);
        signal.check()
    })?;
    Ok((patterns, flow.is_break()))
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use crate::puzzle::library;
    use crate::solve::cancel::{Deadline, StopSignal};
    use crate::solve::populate::populate;
    use crate::solve::CancellationToken;

    #[test]
    fn sequential_and_parallel_agree() {
        let puzzle = library::by_name("Wikipedia W").unwrap();
        let token = CancellationToken::new();
        let deadline = Deadline::start(None);
        let signal = StopSignal::new(&token, &deadline);
        let sequential = populate(puzzle, &signal, false).unwrap();
        assert!(!sequential.stopped);
        assert_eq!(48358, sequential.rows.total_count());
        assert_eq!(1334, sequential.columns.total_count());
        let parallel = populate(puzzle, &signal, true).unwrap();
        assert!(!parallel.stopped);
        assert_eq!(sequential.rows.counts(), parallel.rows.counts());
        assert_eq!(sequential.columns.counts(), parallel.columns.counts());
        for i in 0..sequential.rows.line_count() {
            assert_eq!(sequential.rows.patterns(i), parallel.rows.patterns(i));
        }
    }

    #[test]
    fn zero_timeout_stops_population() {
        let puzzle = library::by_name("Chair").unwrap();
        // every line that was started keeps the one pattern generated before the check
        for &(parallel, row_permutations) in &[(false, 1), (true, 5)] {
            let token = CancellationToken::new();
            let deadline = Deadline::start(Some(Duration::from_secs(0)));
            let signal = StopSignal::new(&token, &deadline);
            let population = populate(puzzle, &signal, parallel).unwrap();
            assert!(population.stopped);
            assert!(token.is_cancelled());
            assert_eq!(5, population.rows.line_count());
            assert_eq!(row_permutations, population.rows.total_count());
            assert_eq!(5, population.columns.line_count());
            assert_eq!(0, population.columns.total_count());
        }
    }
}

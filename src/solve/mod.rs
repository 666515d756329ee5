//! solve nonogram puzzles

pub use self::cancel::CancellationToken;
pub use self::permutation::{generate_permutations, permutations};
pub use self::permutation_set::{ForcedCells, PermutationSet};

use std::fmt;
use std::fmt::{Display, Formatter};
use std::time::Duration;

use rayon::ThreadPoolBuilder;

use crate::collections::Grid;
use crate::error::SolveError;
use crate::puzzle::Puzzle;

use self::cancel::{Deadline, StopSignal};
use self::propagate::StepResult;

mod cancel;
mod permutation;
mod permutation_set;
mod populate;
mod propagate;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolveResult {
    /// Every row was narrowed down to a single pattern
    Solved,
    /// A line ran out of candidates, or deduction stopped with more than one candidate left
    Unsolvable,
    /// The timeout passed or the cancellation token was cancelled
    Cancelled,
}

impl Display for SolveResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SolveResult::Solved => "Solved",
            SolveResult::Unsolvable => "Unsolvable",
            SolveResult::Cancelled => "Cancelled",
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolveStats {
    steps: usize,
    initial_row_permutations: usize,
    initial_column_permutations: usize,
}

impl SolveStats {
    /// The number of propagation steps taken
    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn initial_row_permutations(&self) -> usize {
        self.initial_row_permutations
    }

    pub fn initial_column_permutations(&self) -> usize {
        self.initial_column_permutations
    }

    pub fn initial_permutations(&self) -> usize {
        self.initial_row_permutations + self.initial_column_permutations
    }
}

#[derive(Clone, Debug)]
pub struct SolveOutcome {
    result: SolveResult,
    grid: Grid<bool>,
    elapsed: Duration,
    stats: SolveStats,
}

impl SolveOutcome {
    pub fn result(&self) -> SolveResult {
        self.result
    }

    pub fn is_solved(&self) -> bool {
        self.result == SolveResult::Solved
    }

    /// The grid built from the first remaining candidate of every row.
    /// Only a solution if the puzzle was solved.
    pub fn grid(&self) -> &Grid<bool> {
        &self.grid
    }

    pub fn solution(&self) -> Option<&Grid<bool>> {
        if self.is_solved() {
            Some(&self.grid)
        } else {
            None
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn stats(&self) -> &SolveStats {
        &self.stats
    }
}

/// Solves a puzzle by generating every permutation of every line and then
/// repeatedly removing the permutations that conflict with the crossing lines.
pub struct Solver<'a> {
    puzzle: &'a Puzzle,
    timeout: Option<Duration>,
    token: Option<CancellationToken>,
    parallel: bool,
    threads: Option<usize>,
}

impl<'a> Solver<'a> {
    pub fn new(puzzle: &'a Puzzle) -> Self {
        Self {
            puzzle,
            timeout: None,
            token: None,
            parallel: true,
            threads: None,
        }
    }

    /// Stop with `Cancelled` once this much time has passed
    pub fn timeout(&mut self, timeout: Duration) -> &mut Self {
        self.timeout = Some(timeout);
        self
    }

    /// Stop with `Cancelled` when `token` is cancelled. The solver cancels the token itself
    /// if the timeout passes.
    pub fn cancellation_token(&mut self, token: CancellationToken) -> &mut Self {
        self.token = Some(token);
        self
    }

    /// Generate the permutations of many lines at once (default true)
    pub fn parallel(&mut self, parallel: bool) -> &mut Self {
        self.parallel = parallel;
        self
    }

    /// Use a dedicated pool of this many threads instead of the global one
    pub fn threads(&mut self, threads: usize) -> &mut Self {
        self.threads = Some(threads);
        self
    }

    pub fn solve(&self) -> Result<SolveOutcome, SolveError> {
        let deadline = Deadline::start(self.timeout);
        let token = self.token.clone().unwrap_or_default();
        let signal = StopSignal::new(&token, &deadline);
        let puzzle = self.puzzle;
        info!(
            "Solving '{}' ({}x{})",
            puzzle.name(),
            puzzle.row_count(),
            puzzle.column_count()
        );
        let populated = match self.threads {
            Some(threads) if self.parallel => {
                let pool = ThreadPoolBuilder::new().num_threads(threads).build()?;
                pool.install(|| populate::populate(puzzle, &signal, true))?
            }
            _ => populate::populate(puzzle, &signal, self.parallel)?,
        };
        let populate::Population {
            mut rows,
            mut columns,
            stopped,
        } = populated;
        let mut stats = SolveStats {
            initial_row_permutations: rows.total_count(),
            initial_column_permutations: columns.total_count(),
            ..SolveStats::default()
        };
        if stopped {
            // rows are only partly populated, so the grid stays empty
            let rows = PermutationSet::new(puzzle.row_count());
            return Ok(self.finish(SolveResult::Cancelled, &rows, &deadline, stats));
        }
        info!(
            "Generated {} row and {} column permutations in {:?}",
            stats.initial_row_permutations,
            stats.initial_column_permutations,
            deadline.elapsed()
        );

        let result = loop {
            let step = propagate::step(&mut rows, &mut columns, &signal);
            stats.steps += 1;
            debug!("Step {}: {:?}", stats.steps, step);
            if step == StepResult::Unsolvable {
                break SolveResult::Unsolvable;
            }
            if step == StepResult::Cancelled || signal.should_stop() {
                break SolveResult::Cancelled;
            }
            if step == StepResult::Finished {
                if rows.is_collapsed() {
                    break SolveResult::Solved;
                }
                debug!("Propagation finished with more than one permutation left");
                break SolveResult::Unsolvable;
            }
        };
        Ok(self.finish(result, &rows, &deadline, stats))
    }

    fn finish(
        &self,
        result: SolveResult,
        rows: &PermutationSet,
        deadline: &Deadline,
        stats: SolveStats,
    ) -> SolveOutcome {
        let mut grid = Grid::with_size(self.puzzle.row_count(), self.puzzle.column_count());
        for (i, row) in grid.rows_mut().enumerate() {
            if let Some(pattern) = rows.first(i) {
                for (cell, filled) in row.iter_mut().zip(pattern.iter()) {
                    *cell = filled;
                }
            }
        }
        if result == SolveResult::Solved {
            debug_assert!(self.puzzle.verify_solution(&grid));
        }
        let elapsed = deadline.elapsed();
        info!(
            "'{}' result: {} after {} steps in {:?}",
            self.puzzle.name(),
            result,
            stats.steps,
            elapsed
        );
        SolveOutcome {
            result,
            grid,
            elapsed,
            stats,
        }
    }
}

use std::fmt;
use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::collections::Line;
use crate::error::InvalidHints;

/// The run lengths of filled cells in one row or column, as written beside the puzzle.
///
/// A line without any filled cells is written as a single `0`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HintSet(Vec<usize>);

impl HintSet {
    /// Creates a hint set. An empty sequence is read as `[0]`.
    /// Zero-length runs are only allowed as the lone `0` of an empty line.
    /// The runs and their gaps must add up to a length that fits in a `usize`.
    pub fn new(runs: Vec<usize>) -> Result<Self, InvalidHints> {
        if runs.is_empty() {
            return Ok(Self::blank());
        }
        let min_length = runs
            .iter()
            .try_fold(runs.len() - 1, |total, &run| total.checked_add(run));
        let hints = Self(runs);
        if hints.0.len() > 1 && hints.0.contains(&0) {
            return Err(InvalidHints::ZeroRun(hints));
        }
        if min_length.is_none() {
            return Err(InvalidHints::TooLarge(hints));
        }
        Ok(hints)
    }

    /// The hint of a line without filled cells
    pub fn blank() -> Self {
        Self(vec![0])
    }

    pub fn runs(&self) -> &[usize] {
        &self.0
    }

    pub fn run_count(&self) -> usize {
        self.0.len()
    }

    /// The total number of filled cells
    pub fn filled_count(&self) -> usize {
        self.0.iter().sum()
    }

    pub fn is_blank(&self) -> bool {
        self.filled_count() == 0
    }

    /// The shortest line that can hold these runs, with one empty cell between each
    pub fn min_length(&self) -> usize {
        self.filled_count() + self.0.len() - 1
    }

    pub fn check_fits(&self, length: usize) -> Result<(), InvalidHints> {
        let required = self.min_length();
        if self.filled_count() > length || required > length {
            return Err(InvalidHints::DoesNotFit {
                hints: self.clone(),
                required,
                length,
            });
        }
        Ok(())
    }

    /// Returns true if the runs of filled cells in `line` are exactly these hints
    pub fn matches(&self, line: &Line) -> bool {
        let runs = line.runs();
        if runs.is_empty() {
            self.is_blank()
        } else {
            runs == self.0
        }
    }
}

impl Display for HintSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().join(","))
    }
}

//! Nonogram puzzles

pub use self::hints::HintSet;
pub use self::parse::parse_hint_line;

pub mod library;

mod hints;
mod parse;

use std::fmt;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::Path;
use std::str::FromStr;

use itertools::Itertools;

use crate::collections::{Grid, Line};
use crate::error::{InvalidPuzzle, ParsePuzzleError, PuzzleFromFileError};

/// The rows or the columns of a puzzle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Row,
    Column,
}

impl Axis {
    pub fn other(self) -> Self {
        match self {
            Axis::Row => Axis::Column,
            Axis::Column => Axis::Row,
        }
    }
}

impl Display for Axis {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::Row => "row",
            Axis::Column => "column",
        })
    }
}

/// An unsolved nonogram: the hints beside every row and above every column
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Puzzle {
    name: String,
    row_hints: Vec<HintSet>,
    column_hints: Vec<HintSet>,
}

impl Puzzle {
    /// Creates a puzzle, checking that there is one hint per row and column
    /// and that every hint fits in its line
    pub fn new(
        row_count: usize,
        column_count: usize,
        row_hints: Vec<HintSet>,
        column_hints: Vec<HintSet>,
    ) -> Result<Self, InvalidPuzzle> {
        if row_count == 0 || column_count == 0 {
            return Err(InvalidPuzzle::Empty);
        }
        for &(axis, expected, hints) in &[
            (Axis::Row, row_count, &row_hints),
            (Axis::Column, column_count, &column_hints),
        ] {
            if hints.len() != expected {
                return Err(InvalidPuzzle::HintCount {
                    axis,
                    expected,
                    actual: hints.len(),
                });
            }
        }
        let puzzle = Self {
            name: String::new(),
            row_hints,
            column_hints,
        };
        for &axis in &[Axis::Row, Axis::Column] {
            let length = puzzle.line_length(axis);
            for (index, hints) in puzzle.hints(axis).iter().enumerate() {
                hints
                    .check_fits(length)
                    .map_err(|source| InvalidPuzzle::Line {
                        axis,
                        index,
                        source,
                    })?;
            }
        }
        Ok(puzzle)
    }

    /// Creates a puzzle from hint strings such as `"3 1,1 0"`,
    /// where lines are separated by spaces and runs by commas
    pub fn from_hint_strings(
        name: &str,
        row_count: usize,
        column_count: usize,
        row_hints: &str,
        column_hints: &str,
    ) -> Result<Self, ParsePuzzleError> {
        let puzzle = Self::new(
            row_count,
            column_count,
            parse_hint_line(row_hints)?,
            parse_hint_line(column_hints)?,
        )?;
        Ok(puzzle.with_name(name))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PuzzleFromFileError> {
        let text = fs::read_to_string(path)?;
        let puzzle = Self::parse(&text)?;
        Ok(puzzle)
    }

    /// Parses the puzzle file format (see `Display`)
    pub fn parse(s: &str) -> Result<Self, ParsePuzzleError> {
        parse::parse_puzzle(s)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn row_count(&self) -> usize {
        self.row_hints.len()
    }

    pub fn column_count(&self) -> usize {
        self.column_hints.len()
    }

    pub fn row_hints(&self) -> &[HintSet] {
        &self.row_hints
    }

    pub fn column_hints(&self) -> &[HintSet] {
        &self.column_hints
    }

    pub fn hints(&self, axis: Axis) -> &[HintSet] {
        match axis {
            Axis::Row => &self.row_hints,
            Axis::Column => &self.column_hints,
        }
    }

    /// The number of cells in each line of `axis`: rows are as long as there are columns
    pub fn line_length(&self, axis: Axis) -> usize {
        self.hints(axis.other()).len()
    }

    /// Checks that every row and column of `grid` matches its hints
    pub fn verify_solution(&self, grid: &Grid<bool>) -> bool {
        if grid.row_count() != self.row_count() || grid.col_count() != self.column_count() {
            return false;
        }
        let rows_match = grid
            .rows()
            .zip(&self.row_hints)
            .all(|(row, hints)| hints.matches(&row.iter().copied().collect::<Line>()));
        rows_match
            && grid
                .cols()
                .zip(&self.column_hints)
                .all(|(col, hints)| hints.matches(&col.copied().collect::<Line>()))
    }
}

impl FromStr for Puzzle {
    type Err = ParsePuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if !self.name.is_empty() {
            writeln!(f, "name {}", self.name)?;
        }
        writeln!(f, "size {} {}", self.row_count(), self.column_count())?;
        writeln!(f, "rows {}", self.row_hints.iter().join(" "))?;
        writeln!(f, "columns {}", self.column_hints.iter().join(" "))
    }
}

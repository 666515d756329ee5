use std::fmt::{Display, Formatter};
use std::{fmt, io};

use thiserror::Error;

use crate::puzzle::{Axis, HintSet};

/// A hint sequence that is malformed or cannot be laid out in its line
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidHints {
    #[error("hint {0} has a run of zero cells")]
    ZeroRun(HintSet),
    #[error("hint {0} is too large for any line")]
    TooLarge(HintSet),
    #[error("hint {hints} needs {required} cells, but the line only has {length}")]
    DoesNotFit {
        hints: HintSet,
        required: usize,
        length: usize,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidPuzzle {
    #[error("invalid puzzle: a puzzle needs at least one row and one column")]
    Empty,
    #[error("invalid puzzle: expected hints for {expected} {axis}s, but got {actual} instead")]
    HintCount {
        axis: Axis,
        expected: usize,
        actual: usize,
    },
    #[error("invalid puzzle: {axis} {index}: {source}")]
    Line {
        axis: Axis,
        index: usize,
        #[source]
        source: InvalidHints,
    },
}

#[derive(Error, Debug)]
pub enum PuzzleFromFileError {
    #[error("error reading puzzle file")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Parse(#[from] ParsePuzzleError),
}

#[derive(Debug, Error)]
pub enum ParsePuzzleError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    InvalidPuzzle(#[from] InvalidPuzzle),
}

#[derive(Debug, Error, Clone)]
#[cfg_attr(test, derive(PartialEq))]
pub struct ParseError {
    error_type: ParsePuzzleErrorType,
    token: Option<String>,
    line: Option<usize>,
}

impl ParseError {
    pub(crate) fn new(error_type: ParsePuzzleErrorType, token: impl Display) -> Self {
        Self {
            error_type,
            token: Some(token.to_string()),
            line: None,
        }
    }

    /// Records the (1-based) line of the puzzle text the error was found on
    pub(crate) fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    pub fn error_type(&self) -> ParsePuzzleErrorType {
        self.error_type
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsePuzzleErrorType {
    DuplicateKey,
    InvalidHint,
    InvalidSize,
    MissingKey,
    UnexpectedToken,
    UnknownKey,
}

impl Display for ParsePuzzleErrorType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            ParsePuzzleErrorType::DuplicateKey => "Duplicate key",
            ParsePuzzleErrorType::InvalidHint => "Invalid hint",
            ParsePuzzleErrorType::InvalidSize => "Invalid puzzle size",
            ParsePuzzleErrorType::MissingKey => "Missing key",
            ParsePuzzleErrorType::UnexpectedToken => "Unexpected token",
            ParsePuzzleErrorType::UnknownKey => "Unknown key",
        };
        write!(f, "{}", s)
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error_type)?;
        if let Some(token) = &self.token {
            write!(f, ": \"{}\"", token)?;
        }
        if let Some(line) = &self.line {
            write!(f, " on line {}", line)?;
        }
        Ok(())
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid cell '{0}'")]
pub struct ParseLineError(pub char);

/// A failure that prevents a solve from producing an outcome at all
#[derive(Error, Debug)]
pub enum SolveError {
    #[error("cannot generate permutations for {axis} {index}: {source}")]
    Hints {
        axis: Axis,
        index: usize,
        #[source]
        source: InvalidHints,
    },
    #[error("failed to start solver threads")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

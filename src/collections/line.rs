use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::iter::FromIterator;
use std::str::FromStr;

use bit_vec::BitVec;

use crate::error::ParseLineError;

/// The filled (`true`) and empty (`false`) cells of a single row or column
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Line(BitVec);

impl Line {
    /// A line of `len` empty cells
    pub fn blank(len: usize) -> Self {
        Self(BitVec::from_elem(len, false))
    }

    /// A line of `len` filled cells
    pub fn full(len: usize) -> Self {
        Self(BitVec::from_elem(len, true))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> bool {
        self.0[index]
    }

    /// Sets `count` cells starting at `start`
    pub fn fill(&mut self, start: usize, count: usize, filled: bool) {
        for i in start..start + count {
            self.0.set(i, filled);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter()
    }

    /// The lengths of the maximal runs of filled cells, in order.
    /// A line without filled cells has no runs.
    pub fn runs(&self) -> Vec<usize> {
        let mut runs = Vec::new();
        let mut current = 0;
        for filled in self.iter() {
            if filled {
                current += 1;
            } else if current > 0 {
                runs.push(current);
                current = 0;
            }
        }
        if current > 0 {
            runs.push(current);
        }
        runs
    }

    /// Keeps only the cells that are also filled in `other`
    pub(crate) fn intersect(&mut self, other: &Line) {
        self.0.and(&other.0);
    }

    /// Adds the filled cells of `other`
    pub(crate) fn union(&mut self, other: &Line) {
        self.0.or(&other.0);
    }
}

impl FromIterator<bool> for Line {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FromStr for Line {
    type Err = ParseLineError;

    /// Parses cells written as `1`/`#`/`■` (filled) and `0`/`.`/`∙` (empty)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|c| match c {
                '1' | '#' | '■' => Ok(true),
                '0' | '.' | '∙' => Ok(false),
                _ => Err(ParseLineError(c)),
            })
            .collect()
    }
}

impl Display for Line {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for filled in self.iter() {
            write!(f, "{}", if filled { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl Debug for Line {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Line({})", self)
    }
}

use crate::collections::Line;

/// The candidate patterns that remain for every line along one axis
#[derive(Clone, Debug, Default)]
pub struct PermutationSet {
    lines: Vec<Vec<Line>>,
}

impl PermutationSet {
    pub fn new(line_count: usize) -> Self {
        Self {
            lines: vec![Vec::new(); line_count],
        }
    }

    pub fn from_lines(lines: Vec<Vec<Line>>) -> Self {
        Self { lines }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// The candidates of one line. Empty if the line was never populated.
    pub fn patterns(&self, index: usize) -> &[Line] {
        self.lines.get(index).map_or(&[][..], Vec::as_slice)
    }

    pub fn first(&self, index: usize) -> Option<&Line> {
        self.patterns(index).first()
    }

    pub fn total_count(&self) -> usize {
        self.lines.iter().map(Vec::len).sum()
    }

    /// The number of candidates of each line
    pub fn counts(&self) -> Vec<usize> {
        self.lines.iter().map(Vec::len).collect()
    }

    /// Keeps the candidates of one line that satisfy `predicate`.
    /// Returns true if any were removed.
    pub fn retain(&mut self, index: usize, predicate: impl FnMut(&Line) -> bool) -> bool {
        let patterns = &mut self.lines[index];
        let before = patterns.len();
        patterns.retain(predicate);
        patterns.len() < before
    }

    /// True when every line has exactly one candidate left
    pub fn is_collapsed(&self) -> bool {
        self.lines.iter().all(|patterns| patterns.len() == 1)
    }

    /// The cells of one line that every remaining candidate agrees on
    pub fn forced_cells(&self, index: usize, length: usize) -> ForcedCells {
        let mut on = Line::full(length);
        let mut any = Line::blank(length);
        for pattern in self.patterns(index) {
            on.intersect(pattern);
            any.union(pattern);
        }
        ForcedCells { on, any }
    }
}

/// What the candidates of one line say about each of its cells
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForcedCells {
    /// filled in every candidate
    on: Line,
    /// filled in at least one candidate
    any: Line,
}

impl ForcedCells {
    pub fn must_be_on(&self, position: usize) -> bool {
        self.on.get(position)
    }

    pub fn must_be_off(&self, position: usize) -> bool {
        !self.any.get(position)
    }

    pub fn is_forced(&self, position: usize) -> bool {
        self.must_be_on(position) || self.must_be_off(position)
    }

    /// Returns true if a crossing line that has `filled` at `position`
    /// contradicts these candidates
    pub fn rejects(&self, position: usize, filled: bool) -> bool {
        (self.must_be_on(position) && !filled) || (self.must_be_off(position) && filled)
    }
}

#[cfg(test)]
mod test {
    use crate::collections::Line;
    use crate::solve::PermutationSet;

    fn lines(lines: &[&str]) -> Vec<Line> {
        lines.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn counts() {
        let set = PermutationSet::from_lines(vec![lines(&["10", "01"]), lines(&["11"])]);
        assert_eq!(2, set.line_count());
        assert_eq!(3, set.total_count());
        assert_eq!(vec![2, 1], set.counts());
        assert!(!set.is_collapsed());
        assert!(PermutationSet::new(3).patterns(1).is_empty());
        assert!(PermutationSet::new(3).patterns(5).is_empty());
    }

    #[test]
    fn retain() {
        let mut set = PermutationSet::from_lines(vec![lines(&["100", "010", "001"])]);
        assert!(!set.retain(0, |_| true));
        assert!(set.retain(0, |line| !line.get(0)));
        assert_eq!(lines(&["010", "001"]), set.patterns(0));
        assert!(set.retain(0, |line| line.get(1)));
        assert!(set.is_collapsed());
        assert_eq!("010", set.first(0).unwrap().to_string());
    }

    #[test]
    fn forced_cells() {
        let set = PermutationSet::from_lines(vec![lines(&["1100", "0110"])]);
        let forced = set.forced_cells(0, 4);
        assert!(!forced.is_forced(0));
        assert!(forced.must_be_on(1));
        assert!(!forced.is_forced(2));
        assert!(forced.must_be_off(3));
        assert!(forced.rejects(1, false));
        assert!(forced.rejects(3, true));
        assert!(!forced.rejects(0, true));
        assert!(!forced.rejects(0, false));
    }

    #[test]
    fn forced_cells_of_empty_line() {
        // nothing left: every cell is both forced on and forced off
        let forced = PermutationSet::new(1).forced_cells(0, 2);
        assert!(forced.rejects(0, true));
        assert!(forced.rejects(0, false));
    }
}

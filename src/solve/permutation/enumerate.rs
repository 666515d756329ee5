use std::ops::ControlFlow;

use crate::collections::Line;

/// Enumerates every placement of `runs` in a line of `length` cells, with at least one
/// empty cell between runs.
///
/// `slack` is the number of empty cells left over once the runs are packed together.
/// Each run chooses how much of the remaining slack goes in the gap before it; whatever
/// the last run leaves is the trailing margin.
pub(super) fn enumerate<F>(runs: &[usize], length: usize, sink: &mut F) -> ControlFlow<()>
where
    F: FnMut(Line) -> ControlFlow<()>,
{
    let min_length = runs.iter().sum::<usize>() + runs.len() - 1;
    debug_assert!(min_length <= length);
    let slack = length - min_length;
    let mut scratch = Line::blank(length);
    place_runs(runs, 0, slack, &mut scratch, sink)
}

fn place_runs<F>(
    runs: &[usize],
    start: usize,
    slack: usize,
    scratch: &mut Line,
    sink: &mut F,
) -> ControlFlow<()>
where
    F: FnMut(Line) -> ControlFlow<()>,
{
    let (&run, rest) = match runs.split_first() {
        Some(split) => split,
        None => return sink(scratch.clone()),
    };
    for gap in 0..=slack {
        let offset = start + gap;
        scratch.fill(offset, run, true);
        let flow = place_runs(rest, offset + run + 1, slack - gap, scratch, sink);
        scratch.fill(offset, run, false);
        if flow.is_break() {
            return flow;
        }
    }
    ControlFlow::Continue(())
}

#[cfg(test)]
mod test {
    use std::ops::ControlFlow;

    use itertools::Itertools;

    use crate::collections::Line;
    use crate::solve::permutation::enumerate::enumerate;

    fn collect(runs: &[usize], length: usize) -> Vec<Line> {
        let mut lines = Vec::new();
        let flow = enumerate(runs, length, &mut |line| {
            lines.push(line);
            ControlFlow::Continue(())
        });
        assert!(flow.is_continue());
        lines
    }

    #[test]
    fn small() {
        let lines: Vec<String> = collect(&[1, 2], 5)
            .iter()
            .map(Line::to_string)
            .sorted()
            .collect();
        assert_eq!(vec!["01011", "10011", "10110"], lines);
    }

    #[test]
    fn no_slack() {
        assert_eq!(vec!["1101".parse::<Line>().unwrap()], collect(&[2, 1], 4));
    }

    #[test]
    fn large_count() {
        // compositions of 21 slack cells into 6 gaps: C(26, 5)
        let mut count = 0;
        let flow = enumerate(&[1, 2, 3, 4, 5], 40, &mut |_| {
            count += 1;
            ControlFlow::Continue(())
        });
        assert!(flow.is_continue());
        assert_eq!(65780, count);
    }

    #[test]
    fn abort_unwinds() {
        let mut count = 0;
        let flow = enumerate(&[1, 1, 1, 1], 20, &mut |_| {
            count += 1;
            if count == 3 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        assert!(flow.is_break());
        assert_eq!(3, count);
    }
}

//! Generate every line pattern that satisfies a hint set

use std::ops::ControlFlow;

use crate::collections::Line;
use crate::error::InvalidHints;
use crate::puzzle::HintSet;

mod enumerate;

/// Generates every line of `length` cells whose runs of filled cells are exactly `hints`,
/// handing each one to `sink`. Generation stops early when `sink` returns `Break`,
/// and the `Break` is returned.
///
/// Cheap cases (an empty line, a full line, runs packed with single gaps, a single run)
/// are produced directly. Everything else goes through the combinatorial enumerator.
pub fn generate_permutations<F>(
    hints: &HintSet,
    length: usize,
    mut sink: F,
) -> Result<ControlFlow<()>, InvalidHints>
where
    F: FnMut(Line) -> ControlFlow<()>,
{
    hints.check_fits(length)?;
    let flow = if hints.is_blank() {
        sink(Line::blank(length))
    } else if hints.filled_count() == length {
        sink(Line::full(length))
    } else if hints.min_length() == length {
        sink(packed(hints.runs(), length))
    } else if let [run] = *hints.runs() {
        shifted(run, length, &mut sink)
    } else {
        enumerate::enumerate(hints.runs(), length, &mut sink)
    };
    Ok(flow)
}

/// Collects every pattern for `hints` into a `Vec`
pub fn permutations(hints: &HintSet, length: usize) -> Result<Vec<Line>, InvalidHints> {
    let mut lines = Vec::new();
    generate_permutations(hints, length, |line| {
        lines.push(line);
        ControlFlow::Continue(())
    })?;
    Ok(lines)
}

/// The only pattern when the runs and their gaps exactly fill the line
fn packed(runs: &[usize], length: usize) -> Line {
    let mut line = Line::blank(length);
    let mut start = 0;
    for &run in runs {
        line.fill(start, run, true);
        start += run + 1;
    }
    line
}

/// Slides a single run across the line
fn shifted<F>(run: usize, length: usize, sink: &mut F) -> ControlFlow<()>
where
    F: FnMut(Line) -> ControlFlow<()>,
{
    for start in 0..=length - run {
        let mut line = Line::blank(length);
        line.fill(start, run, true);
        if sink(line).is_break() {
            return ControlFlow::Break(());
        }
    }
    ControlFlow::Continue(())
}

#[cfg(test)]
mod test {
    use std::ops::ControlFlow;

    use ahash::{AHashMap, AHashSet};
    use itertools::Itertools;

    use crate::collections::Line;
    use crate::error::InvalidHints;
    use crate::puzzle::HintSet;
    use crate::solve::permutation::{generate_permutations, permutations};

    fn hints(runs: &[usize]) -> HintSet {
        HintSet::new(runs.to_vec()).unwrap()
    }

    fn sorted_strings(lines: Vec<Line>) -> Vec<String> {
        lines.iter().map(Line::to_string).sorted().collect()
    }

    /// Groups every possible line of `length` cells by its runs
    fn brute_force(length: usize) -> AHashMap<HintSet, AHashSet<Line>> {
        let mut groups: AHashMap<HintSet, AHashSet<Line>> = AHashMap::default();
        for bits in 0u32..1 << length {
            let line: Line = (0..length).map(|i| bits & (1 << i) != 0).collect();
            let hints = HintSet::new(line.runs()).unwrap();
            groups
                .entry(hints)
                .or_insert_with(AHashSet::default)
                .insert(line);
        }
        groups
    }

    #[test]
    fn matches_brute_force() {
        for length in 1..=12 {
            for (hints, expected) in brute_force(length).iter() {
                let actual = permutations(hints, length).unwrap();
                let unique: AHashSet<&Line> = actual.iter().collect();
                assert_eq!(
                    actual.len(),
                    unique.len(),
                    "duplicate patterns for {} in {}",
                    hints,
                    length
                );
                assert_eq!(
                    expected.len(),
                    actual.len(),
                    "missing patterns for {} in {}",
                    hints,
                    length
                );
                for line in &actual {
                    assert!(expected.contains(line), "{:?} for {}", line, hints);
                    assert!(hints.matches(line));
                }
            }
        }
    }

    #[test]
    fn does_not_fit() {
        assert!(matches!(
            permutations(&hints(&[3]), 2),
            Err(InvalidHints::DoesNotFit { .. })
        ));
        assert!(matches!(
            permutations(&hints(&[1, 1]), 2),
            Err(InvalidHints::DoesNotFit { required: 3, .. })
        ));
    }

    #[test]
    fn cheap_cases() {
        assert_eq!(vec![Line::blank(4)], permutations(&HintSet::blank(), 4).unwrap());
        assert_eq!(vec![Line::full(4)], permutations(&hints(&[4]), 4).unwrap());
        assert_eq!(
            vec!["1011".parse::<Line>().unwrap()],
            permutations(&hints(&[1, 2]), 4).unwrap()
        );
        assert_eq!(
            vec!["0011", "0110", "1100"],
            sorted_strings(permutations(&hints(&[2]), 4).unwrap())
        );
    }

    #[test]
    fn packed_runs() {
        let lines = permutations(&hints(&[4, 5, 3, 2]), 17).unwrap();
        assert_eq!(
            vec!["11110111110111011".parse::<Line>().unwrap()],
            lines
        );
    }

    #[test]
    fn sink_can_stop_early() {
        let mut count = 0;
        let flow = generate_permutations(&hints(&[1, 1, 1]), 10, |_| {
            count += 1;
            if count == 5 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
        .unwrap();
        assert!(flow.is_break());
        assert_eq!(5, count);

        let mut count = 0;
        let flow = generate_permutations(&hints(&[2]), 10, |_| {
            count += 1;
            ControlFlow::Break(())
        })
        .unwrap();
        assert!(flow.is_break());
        assert_eq!(1, count);
    }
}

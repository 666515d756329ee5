//! Narrow the candidates of each axis using what the other axis forces

use crate::puzzle::Axis;
use crate::solve::cancel::StopSignal;
use crate::solve::PermutationSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum StepResult {
    /// Some candidates were removed, so another step may remove more
    KeepGoing,
    /// Nothing was removed; the candidates are at a fixed point
    Finished,
    /// A line has no candidates left
    Unsolvable,
    Cancelled,
}

enum PassResult {
    Pruned { removed: bool },
    Unsolvable,
    Cancelled,
}

/// Prunes rows using the columns, then columns using the rows
pub(crate) fn step(
    rows: &mut PermutationSet,
    columns: &mut PermutationSet,
    signal: &StopSignal<'_>,
) -> StepResult {
    let before = (rows.total_count(), columns.total_count());
    let rows_removed = match prune(columns, rows, Axis::Row, signal) {
        PassResult::Pruned { removed } => removed,
        PassResult::Unsolvable => return StepResult::Unsolvable,
        PassResult::Cancelled => return StepResult::Cancelled,
    };
    if signal.should_stop() {
        return StepResult::Cancelled;
    }
    let columns_removed = match prune(rows, columns, Axis::Column, signal) {
        PassResult::Pruned { removed } => removed,
        PassResult::Unsolvable => return StepResult::Unsolvable,
        PassResult::Cancelled => return StepResult::Cancelled,
    };
    debug!(
        "Removed {} row and {} column permutations",
        before.0 - rows.total_count(),
        before.1 - columns.total_count()
    );
    if rows_removed || columns_removed {
        StepResult::KeepGoing
    } else {
        StepResult::Finished
    }
}

/// Removes every candidate of `target` that disagrees with a cell forced by `input`.
///
/// Line `i` of `input` crosses every line of `target` at position `i`.
fn prune(
    input: &PermutationSet,
    target: &mut PermutationSet,
    target_axis: Axis,
    signal: &StopSignal<'_>,
) -> PassResult {
    let length = target.line_count();
    let mut removed = false;
    for i in 0..input.line_count() {
        let forced = input.forced_cells(i, length);
        for t in 0..length {
            if signal.should_stop() {
                return PassResult::Cancelled;
            }
            if !forced.is_forced(t) {
                continue;
            }
            if target.retain(t, |pattern| !forced.rejects(t, pattern.get(i))) {
                removed = true;
                let remaining = target.patterns(t).len();
                trace!("{} {}: {} permutations left", target_axis, t, remaining);
                if remaining == 0 {
                    debug!("No permutations left for {} {}", target_axis, t);
                    return PassResult::Unsolvable;
                }
            }
        }
    }
    PassResult::Pruned { removed }
}

//! A small corpus of well-known puzzles, built on first use

use once_cell::sync::Lazy;

use crate::puzzle::Puzzle;

const SLOW_ROWS: &str = "3,2 10 11 2,3,3 2,1,2 1,1,2 1,1 1 1 1 1,9 2,13 4,16 6,19 6,21 5,23 \
    7,25 7,26 10,11,14 7,3,12,15 6,2,28 3,28 4,12,15 21,1,1,1,1,1,1,1 20,1,1,1,1,1,1,1 \
    21,1,1,1,1,1,1 34 6,21 2,1,7 16,9,2 2,5,3,6,14 1,4,2,1,1,4 10,17,7 4,7,3,1,7,6";

const SLOW_COLUMNS_START: &str = "1,1 1,1,1 2,1,1 3,1,1 3,1,1 4,1,1 4,1,1 4,2,1 4,1,1 \
    3,1,1 6,1,1 10,2,2 4,6,2,3 5,4,1,3 4,5,4,1 4,4,3,1";

const SLOW_COLUMNS_END: &str = "5,1,1 5,1,1 6,1,1 7,1,1 8,1,2 8,4 9,1,1 10,1,1 11,2,2 \
    12,2,2 14,2,2 15,1,1 15,1,1 16,1,1 2,10,5,1,2 2,17,1,2 2,12,3,2,1 2,8,8,1,2 \
    3,8,4,2,1,1 3,18,2,1 4,13,2,2,1 27,1,2 3,13,3,1,2 3,19,1,2 3,13,3,1,1 3,19,3 \
    4,12,3,1,1 3,18,1,2 2,11,3,1,1 15,2,1 8,2,1,1 6,1,1 4,1,1";

static PUZZLES: Lazy<Vec<Puzzle>> = Lazy::new(|| {
    let slow = |name: &str, column_17: &str| {
        puzzle(
            name,
            34,
            50,
            SLOW_ROWS,
            &format!("{} {} {}", SLOW_COLUMNS_START, column_17, SLOW_COLUMNS_END),
        )
    };
    vec![
        puzzle("Solver Doc Example", 4, 5, "2 1,1 4 1", "2 1,1 1,2 2 0"),
        puzzle("Permutation Test", 1, 4, "1,1", "1 0 0 1"),
        puzzle("Chair", 5, 5, "3 3 5 1,1,1 1,1,1", "5 3 5 1 3"),
        puzzle("One by One", 1, 1, "1", "1"),
        puzzle("One by Two", 1, 2, "1", "0 1"),
        puzzle("One by Two Flipped", 2, 1, "1 0", "1"),
        puzzle("Impossible", 2, 2, "2 1", "1 1"),
        puzzle(
            "Wikipedia W",
            20,
            30,
            "8,7,5,7 5,4,3,3 3,3,2,3 4,3,2,2 3,3,2,2 3,4,2,2 4,5,2 3,5,1 4,3,2 3,4,2 4,4,2 \
             3,6,2 3,2,3,1 4,3,4,2 3,2,3,2 6,5 4,5 3,3 3,3 1,1",
            "1 1 2 4 7 9 2,8 1,8 8 1,9 2,7 3,4 6,4 8,5 1,11 1,7 8 1,4,8 6,8 4,7 2,4 1,4 5 \
             1,4 1,5 7 5 3 1 1",
        ),
        puzzle(
            "Many Gaps",
            15,
            15,
            "7 2,4 1,4 2,1,1,1 1,1,2 6,1,1 5,3 2,2,2 2,2,2 1,5 2,2,2 2,2,2 8 7 5",
            "2 1,1,1 3,1,1 2,1,1,2 1,2,5 1,1,4,4 1,4,2 1,1,3 2,2,4 2,4,2 1,1,2,1 2,2,1,2 \
             2,6 1,7 3",
        ),
        slow("Slow but Solvable", "4,5,2,1"),
        slow("Slow and Unsolvable", "4,5,2,2"),
    ]
});

fn puzzle(name: &str, rows: usize, columns: usize, row_hints: &str, column_hints: &str) -> Puzzle {
    Puzzle::from_hint_strings(name, rows, columns, row_hints, column_hints)
        .unwrap_or_else(|e| panic!("invalid library puzzle '{}': {}", name, e))
}

/// Every puzzle in the library
pub fn all() -> &'static [Puzzle] {
    &PUZZLES
}

/// Finds a library puzzle by name, ignoring case
pub fn by_name(name: &str) -> Option<&'static Puzzle> {
    all().iter().find(|p| p.name().eq_ignore_ascii_case(name))
}

//! Parse hints and puzzles from text

use std::str::FromStr;

use crate::error::{ParseError, ParsePuzzleError, ParsePuzzleErrorType};
use crate::puzzle::{HintSet, Puzzle};

impl FromStr for HintSet {
    type Err = ParseError;

    /// Parses comma-separated run lengths, e.g. `"1,2"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(HintSet::blank());
        }
        let runs = s
            .split(',')
            .map(|run| {
                run.trim()
                    .parse::<usize>()
                    .map_err(|_| ParseError::new(ParsePuzzleErrorType::InvalidHint, s))
            })
            .collect::<Result<Vec<_>, _>>()?;
        HintSet::new(runs).map_err(|_| ParseError::new(ParsePuzzleErrorType::InvalidHint, s))
    }
}

/// Parses the hints of every line along one axis, separated by whitespace, e.g. `"3 1,1 0"`
pub fn parse_hint_line(s: &str) -> Result<Vec<HintSet>, ParseError> {
    s.split_whitespace().map(str::parse).collect()
}

#[derive(Default)]
struct Sections<'a> {
    name: Option<&'a str>,
    size: Option<(usize, usize)>,
    rows: Option<Vec<HintSet>>,
    columns: Option<Vec<HintSet>>,
}

/// parse a `Puzzle` from its file format
pub(crate) fn parse_puzzle(s: &str) -> Result<Puzzle, ParsePuzzleError> {
    let mut sections = Sections::default();
    for (i, line) in s.lines().enumerate() {
        let line_number = i + 1;
        let line = match line.find('#') {
            Some(comment) => &line[..comment],
            None => line,
        }
        .trim();
        let key = match line.split_whitespace().next() {
            Some(key) => key,
            None => continue,
        };
        let value = line[key.len()..].trim();
        read_section(&mut sections, key, value).map_err(|e| e.at_line(line_number))?;
    }
    let rows = sections
        .rows
        .ok_or_else(|| ParseError::new(ParsePuzzleErrorType::MissingKey, "rows"))?;
    let columns = sections
        .columns
        .ok_or_else(|| ParseError::new(ParsePuzzleErrorType::MissingKey, "columns"))?;
    let (row_count, column_count) = sections.size.unwrap_or((rows.len(), columns.len()));
    let puzzle = Puzzle::new(row_count, column_count, rows, columns)?;
    Ok(puzzle.with_name(sections.name.unwrap_or_default()))
}

fn read_section<'a>(
    sections: &mut Sections<'a>,
    key: &str,
    value: &'a str,
) -> Result<(), ParseError> {
    fn set<T>(slot: &mut Option<T>, key: &str, value: T) -> Result<(), ParseError> {
        if slot.is_some() {
            return Err(ParseError::new(ParsePuzzleErrorType::DuplicateKey, key));
        }
        *slot = Some(value);
        Ok(())
    }

    match key {
        "name" => set(&mut sections.name, key, value),
        "size" => set(&mut sections.size, key, parse_size(value)?),
        "rows" => set(&mut sections.rows, key, parse_hint_line(value)?),
        "columns" => set(&mut sections.columns, key, parse_hint_line(value)?),
        _ => Err(ParseError::new(ParsePuzzleErrorType::UnknownKey, key)),
    }
}

fn parse_size(value: &str) -> Result<(usize, usize), ParseError> {
    let invalid = || ParseError::new(ParsePuzzleErrorType::InvalidSize, value);
    let mut numbers = value
        .split_whitespace()
        .map(|n| n.parse::<usize>().map_err(|_| invalid()));
    let rows = numbers.next().ok_or_else(invalid)??;
    let columns = numbers.next().ok_or_else(invalid)??;
    if numbers.next().is_some() {
        return Err(ParseError::new(ParsePuzzleErrorType::UnexpectedToken, value));
    }
    Ok((rows, columns))
}

#[cfg(test)]
mod test {
    use crate::error::{ParsePuzzleError, ParsePuzzleErrorType};
    use crate::puzzle::{parse_hint_line, HintSet, Puzzle};

    fn parse_error_type(s: &str) -> ParsePuzzleErrorType {
        match Puzzle::parse(s) {
            Err(ParsePuzzleError::Parse(e)) => e.error_type(),
            Err(e) => panic!("unexpected error: {}", e),
            Ok(_) => panic!("parsed invalid puzzle"),
        }
    }

    #[test]
    fn hint_set() {
        assert_eq!(
            HintSet::new(vec![1, 2]).unwrap(),
            "1,2".parse::<HintSet>().unwrap()
        );
        assert_eq!(HintSet::blank(), "0".parse::<HintSet>().unwrap());
        assert_eq!(HintSet::blank(), "".parse::<HintSet>().unwrap());
        assert!("1,x".parse::<HintSet>().is_err());
        assert!("1,0".parse::<HintSet>().is_err());
    }

    #[test]
    fn hint_line() {
        let hints = parse_hint_line("3 1,1  0").unwrap();
        assert_eq!(
            vec![
                HintSet::new(vec![3]).unwrap(),
                HintSet::new(vec![1, 1]).unwrap(),
                HintSet::blank(),
            ],
            hints
        );
    }

    #[test]
    fn puzzle() {
        let s = "\
            # a chair\n\
            name Chair\n\
            size 5 5\n\
            rows 3 3 5 1,1,1 1,1,1\n\
            \n\
            columns 5 3 5 1 3  # trailing comment\n";
        let puzzle = Puzzle::parse(s).unwrap();
        assert_eq!("Chair", puzzle.name());
        assert_eq!(5, puzzle.row_count());
        assert_eq!(5, puzzle.column_count());
        assert_eq!(&[1, 1, 1], puzzle.row_hints()[3].runs());
    }

    #[test]
    fn size_is_optional() {
        let puzzle = Puzzle::parse("rows 1,1\ncolumns 1 0 0 1").unwrap();
        assert_eq!(1, puzzle.row_count());
        assert_eq!(4, puzzle.column_count());
        assert_eq!("", puzzle.name());
    }

    #[test]
    fn errors() {
        assert_eq!(ParsePuzzleErrorType::MissingKey, parse_error_type(""));
        assert_eq!(
            ParsePuzzleErrorType::MissingKey,
            parse_error_type("rows 1")
        );
        assert_eq!(
            ParsePuzzleErrorType::DuplicateKey,
            parse_error_type("rows 1\nrows 1\ncolumns 1")
        );
        assert_eq!(
            ParsePuzzleErrorType::UnknownKey,
            parse_error_type("cells 1\nrows 1\ncolumns 1")
        );
        assert_eq!(
            ParsePuzzleErrorType::InvalidSize,
            parse_error_type("size 1 x\nrows 1\ncolumns 1")
        );
        assert_eq!(
            ParsePuzzleErrorType::InvalidHint,
            parse_error_type("rows 1,a\ncolumns 1")
        );
    }

    #[test]
    fn hint_too_large() {
        let s = format!("rows {},2\ncolumns 1 1", usize::MAX);
        assert_eq!(ParsePuzzleErrorType::InvalidHint, parse_error_type(&s));
        assert!(format!("{},1", usize::MAX).parse::<HintSet>().is_err());
    }

    #[test]
    fn error_message_names_line() {
        let error = Puzzle::parse("rows 1\n\ncolumns one").unwrap_err();
        assert_eq!("Invalid hint: \"one\" on line 3", error.to_string());
    }

    #[test]
    fn invalid_shape() {
        assert!(matches!(
            Puzzle::parse("size 2 1\nrows 1\ncolumns 1"),
            Err(ParsePuzzleError::InvalidPuzzle(_))
        ));
    }
}

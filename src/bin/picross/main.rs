#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

use std::borrow::Cow;

use anyhow::{anyhow, Result};
use picross::puzzle::{library, Puzzle};
use picross::render::render_outcome;
use picross::solve::Solver;

use crate::options::{Options, Source};

mod options;

fn main() -> Result<()> {
    env_logger::init();
    let options = Options::from_args()?;
    for puzzle in puzzles(options.source())? {
        solve(&options, &puzzle)?;
    }
    Ok(())
}

fn puzzles(source: &Source) -> Result<Vec<Cow<'static, Puzzle>>> {
    let puzzles = match source {
        Source::Files(paths) => paths
            .iter()
            .map(|path| -> Result<Cow<'static, Puzzle>> {
                println!("Reading puzzle from \"{}\"", path.display());
                let puzzle = Puzzle::from_file(path)?;
                Ok(Cow::Owned(puzzle))
            })
            .collect::<Result<_>>()?,
        Source::Example(name) => {
            let puzzle =
                library::by_name(name).ok_or_else(|| anyhow!("no example named \"{}\"", name))?;
            vec![Cow::Borrowed(puzzle)]
        }
        Source::AllExamples => library::all().iter().map(Cow::Borrowed).collect(),
    };
    Ok(puzzles)
}

fn solve(options: &Options, puzzle: &Puzzle) -> Result<()> {
    let mut solver = Solver::new(puzzle);
    solver
        .timeout(options.timeout())
        .parallel(options.parallel());
    if let Some(threads) = options.threads() {
        solver.threads(threads);
    }
    let outcome = solver.solve()?;
    println!("{}", render_outcome(puzzle, &outcome));
    Ok(())
}

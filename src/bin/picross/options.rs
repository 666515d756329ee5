use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use clap::ArgMatches;

const DEFAULT_TIMEOUT_SECS: &str = "30";

#[derive(Clone)]
pub(crate) struct Options {
    source: Source,
    timeout: Duration,
    parallel: bool,
    threads: Option<usize>,
}

impl Options {
    pub fn from_args() -> Result<Self> {
        Self::from_arg_matches(&clap_app().get_matches())
    }

    fn from_arg_matches(matches: &ArgMatches<'_>) -> Result<Self> {
        let source = if let Some(paths) = matches.values_of("input") {
            Source::Files(paths.map(PathBuf::from).collect())
        } else if let Some(name) = matches.value_of("example") {
            Source::Example(name.to_owned())
        } else if matches.is_present("all_examples") {
            Source::AllExamples
        } else {
            return Err(anyhow!("no puzzle source given"));
        };
        let timeout = matches
            .value_of("timeout")
            .unwrap_or(DEFAULT_TIMEOUT_SECS)
            .parse::<f64>()
            .context("invalid timeout")?;
        if timeout < 0.0 || !timeout.is_finite() {
            return Err(anyhow!("invalid timeout: {}", timeout));
        }
        let threads = match matches.value_of("threads") {
            Some(s) => Some(s.parse::<usize>().context("invalid thread count")?),
            None => None,
        };
        Ok(Self {
            source,
            timeout: Duration::from_secs_f64(timeout),
            parallel: !matches.is_present("sequential"),
            threads,
        })
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn parallel(&self) -> bool {
        self.parallel
    }

    pub fn threads(&self) -> Option<usize> {
        self.threads
    }
}

#[derive(Clone)]
pub(crate) enum Source {
    Files(Vec<PathBuf>),
    Example(String),
    AllExamples,
}

fn clap_app() -> clap::App<'static, 'static> {
    use clap::{App, AppSettings, Arg, ArgGroup};

    App::new("picross")
        .about("Solve nonogram (picross) puzzles")
        .setting(AppSettings::ArgRequiredElseHelp)
        .group(
            ArgGroup::with_name("source")
                .args(&["input", "example", "all_examples"])
                .required(true),
        )
        .arg(
            Arg::with_name("input")
                .short("i")
                .long("input")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .value_name("PATH")
                .help("read a puzzle from a file (may be repeated)")
                .display_order(1),
        )
        .arg(
            Arg::with_name("example")
                .short("e")
                .long("example")
                .takes_value(true)
                .value_name("NAME")
                .help("solve a built-in example puzzle by name")
                .display_order(1),
        )
        .arg(
            Arg::with_name("all_examples")
                .short("a")
                .long("all-examples")
                .help("solve every built-in example puzzle")
                .display_order(1),
        )
        .arg(
            Arg::with_name("timeout")
                .short("t")
                .long("timeout")
                .takes_value(true)
                .value_name("SECS")
                .default_value(DEFAULT_TIMEOUT_SECS)
                .help("give up on a puzzle after this many seconds"),
        )
        .arg(
            Arg::with_name("sequential")
                .long("sequential")
                .help("generate permutations on a single thread"),
        )
        .arg(
            Arg::with_name("threads")
                .long("threads")
                .takes_value(true)
                .value_name("N")
                .conflicts_with("sequential")
                .help("generate permutations on a dedicated pool of N threads"),
        )
}

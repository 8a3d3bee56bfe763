#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod output;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::{
    fmt::Display,
    fs::{self, File},
    io::{self, BufRead, BufReader, Write},
    path::Path,
    time::{Duration, Instant},
};
use tracing::{debug, info};

pub trait Reader: BufRead {}

impl<T> Reader for T where T: BufRead {}

pub type FRead = BufReader<fs::File>;

pub fn file_reader<P: AsRef<Path>>(path: P) -> Result<FRead> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("unable to open {}", path.display()))?;
    let meta = file.metadata()?;

    if meta.is_dir() {
        bail!("{} is a directory", path.display());
    }

    Ok(BufReader::new(file))
}

/// Lines of `r`, read errors passed through.
pub fn read_lines<R: Reader>(r: R) -> impl Iterator<Item = io::Result<String>> {
    r.lines()
}

/// The `n`th line (1-based) that isn't blank, trimmed.
pub fn nth_line<R: Reader>(r: R, n: usize) -> Result<Option<String>> {
    let mut seen = 0;
    for line in read_lines(r) {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        seen += 1;
        if seen == n {
            return Ok(Some(line.to_owned()));
        }
    }
    Ok(None)
}

pub trait Solver {
    type Input;
    type Output: Display;

    fn name(&self) -> &'static str;
    fn parse_input<R: Reader>(&self, r: R) -> Result<Self::Input>;
    fn solve(&self, input: &Self::Input) -> Result<Self::Output>;

    /// Parses `source`, solves, and writes the answer line to `sink`.
    ///
    /// With `report` set, a banner and the solve time go to stderr.
    fn run<R, W>(&self, source: R, mut sink: W, report: bool) -> Result<Self::Output>
    where
        R: Reader,
        W: Write,
    {
        let input = self
            .parse_input(source)
            .with_context(|| format!("{}: unable to parse input", self.name()))?;

        let now = Instant::now();
        let answer = self.solve(&input)?;
        let elapsed = now.elapsed();
        debug!(task = self.name(), ?elapsed, "solved");

        if report {
            output::print_header(self.name());
            output::print_answer(&answer);
            print_time(elapsed);
        }

        writeln!(sink, "{}", answer).context("unable to write answer")?;
        sink.flush()?;
        info!(task = self.name(), %answer, "answer written");

        Ok(answer)
    }
}

fn print_time(d: Duration) {
    eprintln!(
        "- {}.{}{}{:03} {}",
        format!("{:03}", d.as_secs()).bright_red(),
        format!("{:03}", d.subsec_millis()).red(),
        format!("{:03}", d.subsec_micros() % 1_000).yellow(),
        format!("{}", d.subsec_nanos() % 1_000).green(),
        "seconds".bold(),
    );
}

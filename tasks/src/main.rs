use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use common::LengthPolicy;
use std::{
    fs::File,
    io::{self, BufWriter, Cursor, Write},
    path::{Path, PathBuf},
    process,
};
use task::*;
use task_runner::{file_reader, Solver};

mod logging;
mod prelude;
mod task;

fn main() {
    let app: App = App::parse();
    logging::init(app.verbose);

    if let Err(e) = app.run() {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

/// Lock-wheel distances and epoch day numbers
#[derive(Debug, Parser)]
#[clap(version)]
struct App {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[clap(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fewest wheel clicks between two lock codes
    BikeLock {
        /// File holding the two codes, one per line; `-` reads STDIN
        #[clap(short = 'i', long, default_value = bike_lock::DEFAULT_INPUT)]
        input: PathBuf,

        /// File receiving the answer; `-` writes STDOUT
        #[clap(short = 'o', long, default_value = bike_lock::DEFAULT_OUTPUT)]
        output: PathBuf,

        /// Reject codes of different lengths instead of zero-padding
        #[clap(long)]
        strict: bool,
    },

    /// Date of a day number counted from 1 January 1990
    NumberToDate {
        /// Day number; prompts on STDIN when neither this nor --input is given
        #[clap(long, allow_hyphen_values = true)]
        offset: Option<String>,

        /// File whose first line holds the day number
        #[clap(short = 'i', long, conflicts_with = "offset")]
        input: Option<PathBuf>,
    },
}

impl App {
    fn run(&self) -> Result<()> {
        let report = self.verbose > 0;

        match &self.command {
            Command::BikeLock {
                input,
                output,
                strict,
            } => {
                let policy = if *strict {
                    LengthPolicy::Strict
                } else {
                    LengthPolicy::Pad
                };
                let task = bike_lock::Answer::new(policy);
                let sink = open_sink(output)?;

                if is_stdio(input) {
                    task.run(io::stdin().lock(), sink, report)?;
                } else {
                    task.run(file_reader(input)?, sink, report)?;
                }
            },
            Command::NumberToDate { offset, input } => {
                let task = number_to_date::Answer;
                let sink = io::stdout();

                match (offset, input) {
                    (Some(offset), _) => {
                        task.run(Cursor::new(offset.as_bytes()), sink, report)?;
                    },
                    (None, Some(path)) if !is_stdio(path) => {
                        task.run(file_reader(path)?, sink, report)?;
                    },
                    (None, _) => {
                        eprint!("{}", number_to_date::PROMPT);
                        io::stderr().flush()?;
                        task.run(io::stdin().lock(), sink, report)?;
                    },
                }
            },
        };
        Ok(())
    }
}

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn open_sink(path: &Path) -> Result<Box<dyn Write>> {
    if is_stdio(path) {
        return Ok(Box::new(io::stdout()));
    }

    let file = File::create(path)
        .with_context(|| format!("unable to create {}", path.display()))?;
    Ok(Box::new(BufWriter::new(file)))
}

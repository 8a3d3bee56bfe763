use colored::Colorize;
use std::fmt::Display;

pub const NUMBER_DASHES: usize = 80;

pub fn print_header(task: &str) {
    let title = format!("Numeric tasks: {}", task);
    let side = NUMBER_DASHES.saturating_sub(title.len() + 2) / 2;

    eprintln!("{}", "-".repeat(NUMBER_DASHES).green().bold());
    eprintln!(
        "{} {} {}",
        "-".repeat(side).red().bold(),
        title.bold(),
        "-".repeat(NUMBER_DASHES.saturating_sub(side + title.len() + 2))
            .red()
            .bold()
    );
    eprintln!("{}", "-".repeat(NUMBER_DASHES).green().bold());
}

pub fn print_answer<T: Display>(answer: &T) {
    eprintln!("\n{}: {}", "Answer".red().bold(), answer.to_string().red().bold());
}

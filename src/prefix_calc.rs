//! Prefix expression calculator
//!
//! Evaluates an expression such as `- * 2 3 1` given on the command line, or
//! read as one line from standard input when no arguments are given.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use log::LevelFilter;

use file_analyzer::core::prefix;
use file_analyzer::utils::logging;

#[derive(Parser, Debug)]
#[command(
    name = "prefix_calc",
    version,
    about = "Evaluate a prefix arithmetic expression (tokens separated by spaces)"
)]
struct Args {
    /// Expression tokens; read from stdin when omitted
    #[arg(allow_hyphen_values = true)]
    tokens: Vec<String>,

    /// Set logging level; `debug` traces every token (default: WARN)
    #[arg(long = "log-level", default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Err(e) = logging::setup_logging(args.log_level, None) {
        eprintln!("{} {:#}", "Warning:".yellow(), e);
    }

    let expression = if args.tokens.is_empty() {
        read_expression()?
    } else {
        args.tokens.join(" ")
    };

    println!("Expression: {}", expression.trim());

    let evaluation = prefix::evaluate(&expression);
    for ignored in &evaluation.ignored {
        eprintln!("{} {}", "Ignoring".yellow(), ignored);
    }

    println!("Result: {}", evaluation.value);

    Ok(())
}

fn read_expression() -> Result<String> {
    print!("Enter prefix expression (tokens separated by space): ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read expression from stdin")?;

    Ok(line)
}

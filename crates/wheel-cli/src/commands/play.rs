//! Interactive wheel session on stdin.

use std::io::{self, BufRead, Write};
use std::path::Path;

use clap::Parser;
use colored::Colorize;

use crate::Commands;

/// One line of interactive input, parsed with the same grammar as the CLI.
#[derive(Parser)]
#[command(no_binary_name = true)]
struct Line {
    #[command(subcommand)]
    command: Commands,
}

pub fn run(dir: &Path, seed: Option<u64>) -> Result<(), String> {
    let mut session = super::open_session(dir, seed)?;

    println!("  {} Decision Wheel", "Starting".bold());
    println!(
        "  {} options on the wheel. Type 'help' for commands, 'quit' to exit.\n",
        session.options().len()
    );

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if ["quit", "q", "exit"]
            .iter()
            .any(|word| input.eq_ignore_ascii_case(word))
        {
            break;
        }

        let parsed = match Line::try_parse_from(input.split_whitespace()) {
            Ok(parsed) => parsed,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        let before = session.snapshot();
        match super::execute(&mut session, &parsed.command) {
            Ok(()) => {
                if session.snapshot() != before {
                    super::save_session(dir, &session)?;
                }
            }
            Err(e) => println!("  {}", e.yellow()),
        }
        println!();
    }

    Ok(())
}

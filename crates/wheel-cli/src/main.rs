//! CLI frontend for the decision wheel.

mod commands;
mod frontend;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "wheel",
    about = "Decision wheel: let chance pick for you",
    version,
    propagate_version = true
)]
struct Cli {
    /// Directory holding the wheel's session and preference files
    #[arg(short, long, default_value = ".", global = true)]
    dir: PathBuf,

    /// RNG seed for reproducible spins
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the options on the wheel
    List,

    /// Add an option
    Add {
        /// Option label (may contain spaces)
        #[arg(required = true, num_args = 1..)]
        label: Vec<String>,
    },

    /// Remove an option by its number in `list`
    Remove {
        /// 1-based option number
        number: usize,
    },

    /// Remove every option
    Clear,

    /// Recolor an option
    Color {
        /// 1-based option number
        number: usize,

        /// Hex color, e.g. #FF6B6B
        color: String,
    },

    /// Set spin speed: slow, normal, fast
    Speed {
        /// Speed preset or multiplier (0.5, 1, 2)
        speed: String,
    },

    /// Spin the wheel
    Spin,

    /// Show past results, newest first
    History,

    /// List built-in and saved categories
    Categories,

    /// Replace the options with a category
    Load {
        /// Category id (see `categories`)
        id: String,
    },

    /// Save the current options as a category
    SaveCategory {
        /// Category name
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Delete a saved category
    DeleteCategory {
        /// Category id
        id: String,
    },

    /// Turn sound on or off (toggles when omitted)
    Sound {
        /// on, off or toggle
        state: Option<String>,
    },

    /// Toggle simple yes/no mode
    Simple,

    /// Export the session to a JSON file
    Export {
        /// Output file path (default: dated file in the state directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Import a session from a JSON file
    Import {
        /// Path of an exported session
        path: PathBuf,
    },

    /// Share the last result
    Share,

    /// Export the wheel as an image
    Capture,

    /// Start an interactive session
    Play,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Play => commands::play::run(&cli.dir, cli.seed),
        command => commands::run_once(&cli.dir, cli.seed, &command),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

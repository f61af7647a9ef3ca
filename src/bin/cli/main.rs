mod app;
mod commands;
mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use patente_lib::vocabulary::{Category, CategoryFilter};

#[derive(Parser)]
#[command(name = "patente-cli", about = "Driving licence vocabulary trainer", version)]
struct Cli {
    /// Store vocabulary and stats in this directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Start a multiple-choice review session
    Quiz {
        /// Category name (e.g. "road_signs") or "all"
        #[arg(long, default_value = "all")]
        category: CategoryFilter,
        /// Stop after this many answered prompts
        #[arg(long)]
        rounds: Option<usize>,
    },

    /// Add a custom word
    Add {
        /// Italian term
        prompt: String,
        /// Translation
        answer: String,
        #[arg(long, default_value = "general")]
        category: Category,
    },

    /// Show attempt counters and per-category progress
    Stats,

    /// List vocabulary items with their schedule
    List {
        #[arg(long, default_value = "all")]
        category: CategoryFilter,
        /// Only items due now
        #[arg(long)]
        due: bool,
    },

    /// Ask the explanation service about a term
    Explain {
        term: String,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let use_color = !cli.no_color && atty_check();
    let app = app::App::new(cli.data_dir)?;

    match cli.command.unwrap_or(Command::Quiz {
        category: CategoryFilter::All,
        rounds: None,
    }) {
        Command::Quiz { category, rounds } => {
            commands::quiz::run(&app, category, rounds, use_color)?;
        }
        Command::Add {
            prompt,
            answer,
            category,
        } => {
            commands::add::run(&app, &prompt, &answer, category, &cli.format)?;
        }
        Command::Stats => {
            commands::stats::run(&app, &cli.format, use_color)?;
        }
        Command::List { category, due } => {
            commands::list::run(&app, category, due, &cli.format, use_color)?;
        }
        Command::Explain { term } => {
            commands::explain::run(&app, &term, &cli.format)?;
        }
    }

    Ok(())
}

/// Check if stdout is a terminal (for color support)
fn atty_check() -> bool {
    unsafe { libc_isatty(1) != 0 }
}

extern "C" {
    #[link_name = "isatty"]
    fn libc_isatty(fd: i32) -> i32;
}

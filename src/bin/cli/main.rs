mod app;
mod commands;
mod render;
#[cfg(feature = "tui")]
mod tui;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "quiz-cli", about = "Flashcard review for provider terms", version)]
struct Cli {
    /// Config file (default: <config dir>/quizapp/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Terms provider database to read
    #[arg(long, global = true)]
    database: Option<PathBuf>,

    /// Read terms from a JSON array instead of the provider database
    #[arg(long, global = true)]
    terms_json: Option<PathBuf>,

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
    /// Review flashcards interactively
    #[cfg(feature = "tui")]
    Review,

    /// List all terms
    List {
        /// Sort order, e.g. "word ASC"
        #[arg(long)]
        sort: Option<String>,
    },

    /// Show a single term by id
    Show {
        /// Term id
        id: i64,
    },

    /// Print the provider contract (URIs, MIME types, columns)
    Contract,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let use_color = !cli.no_color && std::io::stdout().is_terminal();
    let app = app::App::new(app::Overrides {
        config: cli.config,
        database: cli.database,
        terms_json: cli.terms_json,
    })?;

    match cli.command {
        None => {
            // No subcommand → launch TUI
            #[cfg(feature = "tui")]
            {
                tui::run(app)?;
            }
            #[cfg(not(feature = "tui"))]
            {
                eprintln!("TUI not available (built without 'tui' feature). Use a subcommand.");
                eprintln!("Run with --help for usage.");
                std::process::exit(1);
            }
        }
        #[cfg(feature = "tui")]
        Some(Command::Review) => {
            tui::run(app)?;
        }
        Some(Command::List { sort }) => {
            commands::list::run(&app, sort.as_deref(), &cli.format, use_color)?;
        }
        Some(Command::Show { id }) => {
            commands::show::run(&app, id, &cli.format, use_color)?;
        }
        Some(Command::Contract) => {
            commands::contract::run(&app, &cli.format, use_color)?;
        }
    }

    Ok(())
}

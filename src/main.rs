use clap::{Parser, Subcommand};
use seimei::api::Workbook;
use seimei::config::Config;
use seimei::{HistoryStore, SeimeiResult};
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Name fortune scoring (seimei handan) with a reorderable history", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    config: Config,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a name and add it to the history
    Add(cmd::add::AddArgs),
    /// List the history
    Show,
    /// Remove items from the history
    Remove(cmd::edit::RemoveArgs),
    /// Move one item several places, e.g. `move 4uuu`
    Move(cmd::reorder::MoveArgs),
    /// Move items up one place
    Up(cmd::reorder::ShiftArgs),
    /// Move items down one place
    Down(cmd::reorder::ShiftArgs),
    /// Attach a note to an item
    Note(cmd::edit::NoteArgs),
    /// Print the stroke count of one character
    Strokes(cmd::add::StrokesArgs),
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        error!("❌ {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> SeimeiResult<()> {
    let config = cli.config;

    match cli.command {
        Commands::Add(args) => {
            info!("🚀 Scoring {}", args.family);
            let mut book = Workbook::open(&config)?;
            cmd::add::run(args, &mut book)
        }
        Commands::Strokes(args) => {
            let mut book = Workbook::open(&config)?;
            cmd::add::run_strokes(args, &mut book)
        }
        Commands::Show => cmd::edit::run_show(&HistoryStore::load(&config.storage.history)?),
        Commands::Remove(args) => {
            cmd::edit::run_remove(args, &mut HistoryStore::load(&config.storage.history)?)
        }
        Commands::Note(args) => {
            cmd::edit::run_note(args, &mut HistoryStore::load(&config.storage.history)?)
        }
        Commands::Move(args) => {
            cmd::reorder::run_move(args, &mut HistoryStore::load(&config.storage.history)?)
        }
        Commands::Up(args) => {
            cmd::reorder::run_up(args, &mut HistoryStore::load(&config.storage.history)?)
        }
        Commands::Down(args) => {
            cmd::reorder::run_down(args, &mut HistoryStore::load(&config.storage.history)?)
        }
    }
}

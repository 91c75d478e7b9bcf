use super::to_indices;
use crate::reports;
use clap::Args;
use seimei::{HistoryStore, SeimeiError, SeimeiResult};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct RemoveArgs {
    /// Positions as shown by `show`
    #[arg(required = true, num_args = 1..)]
    pub positions: Vec<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct NoteArgs {
    pub position: usize,

    /// New note; an empty string clears it
    pub text: String,
}

pub fn run_show(history: &HistoryStore) -> SeimeiResult<()> {
    reports::print_history(history);
    Ok(())
}

pub fn run_remove(args: RemoveArgs, history: &mut HistoryStore) -> SeimeiResult<()> {
    let indices = to_indices(&args.positions, history.len())?;
    let removed = history.remove(&indices)?;
    for record in &removed {
        info!("🗑️  Removed {}", record.full_name());
    }
    history.save()?;
    reports::print_history(history);
    Ok(())
}

pub fn run_note(args: NoteArgs, history: &mut HistoryStore) -> SeimeiResult<()> {
    let len = history.len();
    let idx = to_indices(&[args.position], len)?[0];
    let record = history
        .get_mut(idx)
        .ok_or(SeimeiError::IndexOutOfRange { index: idx, len })?;
    record.set_note(args.text);
    info!("📝 Updated note for {}", record.full_name());
    history.save()
}

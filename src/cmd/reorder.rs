use super::to_indices;
use crate::reports;
use clap::Args;
use seimei::{HistoryStore, SeimeiError, SeimeiResult};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct MoveArgs {
    /// `<position><u|d>...`, e.g. `12uuu` moves item 12 up three places
    pub spec: String,
}

#[derive(Args, Debug, Clone)]
pub struct ShiftArgs {
    #[arg(required = true, num_args = 1..)]
    pub positions: Vec<usize>,
}

/// Parses a move spec into a 1-based position and a signed distance.
pub fn parse_move_spec(spec: &str) -> SeimeiResult<(usize, isize)> {
    let spec = spec.trim();
    let digits_end = spec
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(spec.len());
    let (number, moves) = spec.split_at(digits_end);

    let position: usize = number
        .parse()
        .map_err(|_| SeimeiError::Config(format!("'{}' does not start with a position", spec)))?;

    let direction = match moves.chars().next() {
        Some('u') => -1,
        Some('d') => 1,
        Some(other) => {
            return Err(SeimeiError::Config(format!(
                "direction must be 'u' or 'd', found '{}'",
                other
            )))
        }
        None => return Err(SeimeiError::Config("missing direction (u or d)".to_string())),
    };

    let first = if direction < 0 { 'u' } else { 'd' };
    if !moves.chars().all(|c| c == first) {
        return Err(SeimeiError::Config(format!(
            "'{}' mixes directions; repeat one letter per step",
            moves
        )));
    }

    Ok((position, direction * moves.chars().count() as isize))
}

pub fn run_move(args: MoveArgs, history: &mut HistoryStore) -> SeimeiResult<()> {
    let (position, delta) = parse_move_spec(&args.spec)?;
    let idx = to_indices(&[position], history.len())?[0];

    info!(
        "↕️  Moving item {} {} place(s) {}",
        position,
        delta.unsigned_abs(),
        if delta < 0 { "up" } else { "down" }
    );
    history.move_by(idx, delta)?;
    history.save()?;
    reports::print_history(history);
    Ok(())
}

pub fn run_up(args: ShiftArgs, history: &mut HistoryStore) -> SeimeiResult<()> {
    let indices = to_indices(&args.positions, history.len())?;
    if history.move_up(&indices)? {
        history.save()?;
    } else {
        info!("Already at the top, nothing moved");
    }
    reports::print_history(history);
    Ok(())
}

pub fn run_down(args: ShiftArgs, history: &mut HistoryStore) -> SeimeiResult<()> {
    let indices = to_indices(&args.positions, history.len())?;
    if history.move_down(&indices)? {
        history.save()?;
    } else {
        info!("Already at the bottom, nothing moved");
    }
    reports::print_history(history);
    Ok(())
}

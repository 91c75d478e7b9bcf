use crate::reports;
use clap::Args;
use seimei::api::Workbook;
use seimei::scorer::split_full_name;
use seimei::strokes::loader::single_char;
use seimei::{SeimeiError, SeimeiResult};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    /// Family name, or "family given" in one argument
    pub family: String,

    /// Given name
    pub given: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct StrokesArgs {
    /// A single character
    pub character: String,
}

pub fn run(args: AddArgs, book: &mut Workbook) -> SeimeiResult<()> {
    let (family, given) = split_full_name(&args.family, args.given.as_deref());

    let before = book.history.len();
    let record = book.register(family, given)?;
    reports::print_record(record);

    if book.history.len() == before {
        info!("'{} {}' is already in the history", family, given);
    }
    book.save()
}

pub fn run_strokes(args: StrokesArgs, book: &mut Workbook) -> SeimeiResult<()> {
    let ch = single_char(args.character.trim()).ok_or_else(|| {
        SeimeiError::Config(format!("'{}' is not a single character", args.character))
    })?;

    let n = book.stroke_count(ch)?;
    println!("{}: {}", ch, n);
    book.save_strokes()
}

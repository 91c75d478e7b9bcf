pub mod api;
pub mod config;
pub mod error;
pub mod history;
pub mod record;
pub mod scorer;
pub mod strokes;

pub use error::{NamePart, SeimeiError, SeimeiResult};
pub use history::HistoryStore;
pub use record::NameRecord;
pub use strokes::{StrokeLookup, StrokeSource, StrokeTable};

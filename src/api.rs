use crate::config::Config;
use crate::error::SeimeiResult;
use crate::history::HistoryStore;
use crate::record::NameRecord;
use crate::scorer;
use crate::strokes::kana::load_kana_table;
use crate::strokes::loader::{load_cache, save_cache};
use crate::strokes::{MojikibanLookup, NoLookup, StrokeLookup, StrokeTable};
use std::path::PathBuf;

/// Everything a front end needs: the stroke table with its remote
/// fallback, and the history, wired from one `Config`.
pub struct Workbook {
    pub strokes: StrokeTable,
    pub history: HistoryStore,
    lookup: Box<dyn StrokeLookup>,
    strokes_path: PathBuf,
}

impl Workbook {
    /// Loads the stroke cache (with the kana table merged over it) and the
    /// history named in `config`.
    pub fn open(config: &Config) -> SeimeiResult<Self> {
        let lookup: Box<dyn StrokeLookup> = if config.lookup.offline {
            Box::new(NoLookup)
        } else {
            Box::new(MojikibanLookup::new(&config.lookup))
        };
        Self::open_with_lookup(config, lookup)
    }

    pub fn open_with_lookup(config: &Config, lookup: Box<dyn StrokeLookup>) -> SeimeiResult<Self> {
        let storage = &config.storage;

        let mut strokes = load_cache(&storage.strokes)?;
        if let Some(kana) = &storage.kana {
            strokes.merge(load_kana_table(kana)?);
        }

        Ok(Self {
            strokes,
            history: HistoryStore::load(&storage.history)?,
            lookup,
            strokes_path: storage.strokes.clone(),
        })
    }

    /// Resolves one character, caching a remote answer.
    pub fn stroke_count(&mut self, ch: char) -> SeimeiResult<u32> {
        self.strokes.resolve(ch, self.lookup.as_ref())
    }

    pub fn compute(&mut self, family: &str, given: &str) -> SeimeiResult<NameRecord> {
        let mut source = self.strokes.with_lookup(self.lookup.as_ref());
        scorer::compute(family, given, &mut source)
    }

    /// Scores the name and appends it to the history. The returned record
    /// is the one held by the history, which is the earlier entry if the
    /// name was already present.
    pub fn register(&mut self, family: &str, given: &str) -> SeimeiResult<&NameRecord> {
        let record = self.compute(family, given)?;
        let (family, given) = (record.family().to_string(), record.given().to_string());
        self.history.add(record);

        let idx = self.history.position(&family, &given).unwrap_or(self.history.len() - 1);
        Ok(&self.history.records()[idx])
    }

    pub fn save_strokes(&self) -> SeimeiResult<()> {
        save_cache(&self.strokes, &self.strokes_path)
    }

    pub fn save(&self) -> SeimeiResult<()> {
        self.history.save()?;
        self.save_strokes()
    }
}

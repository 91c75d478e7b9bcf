pub mod codec;

pub use self::codec::{CsvCodec, RecordCodec};
use crate::error::{SeimeiError, SeimeiResult};
use crate::record::NameRecord;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Ordered list of scored names.
///
/// Positions are plain indices into the current order. They shift on every
/// removal or move, so callers re-read them before each operation. No two
/// records share a (family, given) pair as long as records only enter
/// through `add`.
#[derive(Debug, Default, Clone)]
pub struct HistoryStore {
    records: Vec<NameRecord>,
    path: Option<PathBuf>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `path` with the CSV format; a missing file is an empty store.
    /// The store remembers `path` for `save`.
    pub fn load(path: impl AsRef<Path>) -> SeimeiResult<Self> {
        Self::load_with(path, &CsvCodec)
    }

    pub fn load_with<C: RecordCodec + ?Sized>(path: impl AsRef<Path>, codec: &C) -> SeimeiResult<Self> {
        let path = path.as_ref();
        let mut store = Self {
            records: Vec::new(),
            path: Some(path.to_path_buf()),
        };

        if !path.exists() {
            info!("📂 No history at {}, starting empty", path.display());
            return Ok(store);
        }

        for record in codec.decode(&fs::read(path)?)? {
            store.add(record);
        }
        info!("📂 Loaded {} names from {}", store.len(), path.display());
        Ok(store)
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Writes to the path the store was loaded from.
    pub fn save(&self) -> SeimeiResult<()> {
        let path = self
            .path
            .as_deref()
            .ok_or_else(|| SeimeiError::Config("history has no file path".to_string()))?;
        self.save_to(path)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> SeimeiResult<()> {
        self.save_with(path, &CsvCodec)
    }

    pub fn save_with<C: RecordCodec + ?Sized>(&self, path: impl AsRef<Path>, codec: &C) -> SeimeiResult<()> {
        let path = path.as_ref();
        fs::write(path, codec.encode(&self.records)?)?;
        info!("💾 Saved {} names to {}", self.len(), path.display());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NameRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[NameRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&NameRecord> {
        self.records.get(index)
    }

    /// Mutable access, for editing the note.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut NameRecord> {
        self.records.get_mut(index)
    }

    pub fn position(&self, family: &str, given: &str) -> Option<usize> {
        self.records.iter().position(|r| r.same_name(family, given))
    }

    /// Appends `record` unless its name is already present. The first
    /// record for a name wins; returns whether anything was added.
    pub fn add(&mut self, record: NameRecord) -> bool {
        if self.position(record.family(), record.given()).is_some() {
            return false;
        }
        self.records.push(record);
        true
    }

    /// Removes every listed position in one batch. All positions are
    /// checked before anything is removed.
    pub fn remove(&mut self, indices: &[usize]) -> SeimeiResult<Vec<NameRecord>> {
        let sorted = self.checked_sorted(indices)?;

        // highest first so the remaining indices stay valid
        let mut removed: Vec<NameRecord> = sorted
            .iter()
            .rev()
            .map(|&idx| self.records.remove(idx))
            .collect();
        removed.reverse();
        Ok(removed)
    }

    /// Moves one record `delta` places (negative is towards the front) by
    /// swapping it with its neighbour one step at a time. The destination is
    /// clamped to the ends of the list.
    pub fn move_by(&mut self, index: usize, delta: isize) -> SeimeiResult<()> {
        self.check(index)?;
        if delta == 0 {
            return Ok(());
        }

        let last = self.len() - 1;
        let dest = index.saturating_add_signed(delta).min(last);

        if dest > index {
            for i in index..dest {
                self.records.swap(i, i + 1);
            }
        } else {
            for i in (dest + 1..=index).rev() {
                self.records.swap(i, i - 1);
            }
        }
        Ok(())
    }

    /// Moves every listed record one place up, front-most first. Returns
    /// `false` without moving anything when the batch already touches the
    /// top.
    pub fn move_up(&mut self, indices: &[usize]) -> SeimeiResult<bool> {
        let sorted = self.checked_sorted(indices)?;
        match sorted.first() {
            None | Some(0) => return Ok(false),
            Some(_) => {}
        }

        for &idx in &sorted {
            self.move_by(idx, -1)?;
        }
        Ok(true)
    }

    /// Moves every listed record one place down, back-most first. Returns
    /// `false` without moving anything when the batch already touches the
    /// bottom.
    pub fn move_down(&mut self, indices: &[usize]) -> SeimeiResult<bool> {
        let sorted = self.checked_sorted(indices)?;
        match sorted.last() {
            None => return Ok(false),
            Some(&idx) if idx == self.len() - 1 => return Ok(false),
            Some(_) => {}
        }

        for &idx in sorted.iter().rev() {
            self.move_by(idx, 1)?;
        }
        Ok(true)
    }

    fn check(&self, index: usize) -> SeimeiResult<()> {
        if index >= self.len() {
            return Err(SeimeiError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        Ok(())
    }

    fn checked_sorted(&self, indices: &[usize]) -> SeimeiResult<Vec<usize>> {
        for &idx in indices {
            self.check(idx)?;
        }
        let mut sorted = indices.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        Ok(sorted)
    }
}

impl<'a> IntoIterator for &'a HistoryStore {
    type Item = &'a NameRecord;
    type IntoIter = std::slice::Iter<'a, NameRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

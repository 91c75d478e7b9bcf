pub mod kana;
pub mod loader;
pub mod remote;

use crate::error::{SeimeiError, SeimeiResult};
use std::collections::BTreeMap;
use tracing::debug;

pub use self::remote::{MojikibanLookup, NoLookup};

/// Resolves one character to its stroke count. This is the capability the
/// scorer consumes; it knows nothing about where the numbers come from.
pub trait StrokeSource {
    fn strokes(&mut self, ch: char) -> SeimeiResult<u32>;
}

/// An external authority asked when a character is not in the local table.
///
/// Implementations return `UnsupportedCharacter` when the authority answered
/// but had no usable count, and `LookupUnavailable` when it could not be
/// reached at all.
pub trait StrokeLookup {
    fn lookup(&self, ch: char) -> SeimeiResult<u32>;
}

/// Character to stroke count mapping. Entries are only ever added or
/// overwritten, never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StrokeTable {
    entries: BTreeMap<char, u32>,
}

impl StrokeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, ch: char) -> Option<u32> {
        self.entries.get(&ch).copied()
    }

    pub fn set(&mut self, ch: char, strokes: u32) {
        self.entries.insert(ch, strokes);
    }

    pub fn contains(&self, ch: char) -> bool {
        self.entries.contains_key(&ch)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in code point order.
    pub fn iter(&self) -> impl Iterator<Item = (char, u32)> + '_ {
        self.entries.iter().map(|(&ch, &n)| (ch, n))
    }

    pub fn merge(&mut self, other: StrokeTable) {
        self.entries.extend(other.entries);
    }

    /// Looks `ch` up locally, falling back to `lookup` on a miss. A
    /// successful remote answer is cached in the table.
    pub fn resolve<L: StrokeLookup + ?Sized>(&mut self, ch: char, lookup: &L) -> SeimeiResult<u32> {
        if let Some(n) = self.get(ch) {
            return Ok(n);
        }

        let n = lookup.lookup(ch)?;
        debug!("Cached stroke count for '{}' (U+{:04X}): {}", ch, ch as u32, n);
        self.set(ch, n);
        Ok(n)
    }

    /// Borrows the table together with a lookup as a `StrokeSource`.
    pub fn with_lookup<'a, L: StrokeLookup + ?Sized>(
        &'a mut self,
        lookup: &'a L,
    ) -> CachingResolver<'a, L> {
        CachingResolver {
            table: self,
            lookup,
        }
    }
}

impl FromIterator<(char, u32)> for StrokeTable {
    fn from_iter<I: IntoIterator<Item = (char, u32)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Local-only resolution: a miss is an unsupported character.
impl StrokeSource for StrokeTable {
    fn strokes(&mut self, ch: char) -> SeimeiResult<u32> {
        self.get(ch).ok_or(SeimeiError::UnsupportedCharacter(ch))
    }
}

pub struct CachingResolver<'a, L: ?Sized> {
    table: &'a mut StrokeTable,
    lookup: &'a L,
}

impl<L: StrokeLookup + ?Sized> StrokeSource for CachingResolver<'_, L> {
    fn strokes(&mut self, ch: char) -> SeimeiResult<u32> {
        self.table.resolve(ch, self.lookup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct CountingLookup {
        calls: Cell<usize>,
        answer: SeimeiResult<u32>,
    }

    impl StrokeLookup for CountingLookup {
        fn lookup(&self, ch: char) -> SeimeiResult<u32> {
            self.calls.set(self.calls.get() + 1);
            match &self.answer {
                Ok(n) => Ok(*n),
                Err(_) => Err(SeimeiError::UnsupportedCharacter(ch)),
            }
        }
    }

    #[test]
    fn test_resolve_caches_remote_answer() {
        let mut table = StrokeTable::new();
        let lookup = CountingLookup {
            calls: Cell::new(0),
            answer: Ok(5),
        };

        assert_eq!(table.resolve('田', &lookup).unwrap(), 5);
        assert_eq!(table.resolve('田', &lookup).unwrap(), 5);
        assert_eq!(lookup.calls.get(), 1);
        assert_eq!(table.get('田'), Some(5));
    }

    #[test]
    fn test_resolve_failure_leaves_table_untouched() {
        let mut table = StrokeTable::new();
        let lookup = CountingLookup {
            calls: Cell::new(0),
            answer: Err(SeimeiError::UnsupportedCharacter('?')),
        };

        let err = table.resolve('鬱', &lookup).unwrap_err();
        assert!(matches!(err, SeimeiError::UnsupportedCharacter('鬱')));
        assert!(table.is_empty());
    }

    #[test]
    fn test_local_source_never_calls_out() {
        let mut table: StrokeTable = [('一', 1)].into_iter().collect();
        assert_eq!(table.strokes('一').unwrap(), 1);
        assert!(matches!(
            table.strokes('二'),
            Err(SeimeiError::UnsupportedCharacter('二'))
        ));
    }
}

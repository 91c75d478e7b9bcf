use crate::scorer::{ElementSet, ScoreSet};
use serde::Serialize;

/// A scored name. Everything except the note is fixed at construction.
///
/// Stroke counts are kept positionally, one per character of `family` and
/// then `given`, so repeated characters (佐々木, 菜々子) keep their own
/// entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameRecord {
    family: String,
    given: String,
    family_strokes: Vec<u32>,
    given_strokes: Vec<u32>,
    scores: ScoreSet,
    elements: ElementSet,
    note: String,
}

impl NameRecord {
    /// Callers guarantee one stroke count per character of each half.
    pub(crate) fn new(
        family: String,
        given: String,
        family_strokes: Vec<u32>,
        given_strokes: Vec<u32>,
        scores: ScoreSet,
        elements: ElementSet,
    ) -> Self {
        debug_assert_eq!(family.chars().count(), family_strokes.len());
        debug_assert_eq!(given.chars().count(), given_strokes.len());
        Self {
            family,
            given,
            family_strokes,
            given_strokes,
            scores,
            elements,
            note: String::new(),
        }
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn given(&self) -> &str {
        &self.given
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.family, self.given)
    }

    pub fn family_strokes(&self) -> &[u32] {
        &self.family_strokes
    }

    pub fn given_strokes(&self) -> &[u32] {
        &self.given_strokes
    }

    /// `(character, strokes)` for every character, family first.
    pub fn strokes(&self) -> impl Iterator<Item = (char, u32)> + '_ {
        let family = self.family.chars().zip(self.family_strokes.iter().copied());
        let given = self.given.chars().zip(self.given_strokes.iter().copied());
        family.chain(given)
    }

    pub fn stroke_of(&self, ch: char) -> Option<u32> {
        self.strokes().find(|&(c, _)| c == ch).map(|(_, n)| n)
    }

    pub fn scores(&self) -> &ScoreSet {
        &self.scores
    }

    pub fn elements(&self) -> &ElementSet {
        &self.elements
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn set_note(&mut self, note: impl Into<String>) {
        self.note = note.into();
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.set_note(note);
        self
    }

    /// Same (family, given) pair.
    pub fn same_name(&self, family: &str, given: &str) -> bool {
        self.given == given && self.family == family
    }
}

pub mod engine;
pub mod fortune;
pub mod types;

pub use self::types::{Element, ElementSet, Fortune, ScoreSet};
use crate::error::{NamePart, SeimeiError, SeimeiResult};
use crate::record::NameRecord;
use crate::strokes::StrokeSource;

/// Scores a name. Every character is resolved through `source` exactly
/// once, family first, in order; the first failure aborts the computation.
pub fn compute<S: StrokeSource + ?Sized>(
    family: &str,
    given: &str,
    source: &mut S,
) -> SeimeiResult<NameRecord> {
    let family = family.trim();
    let given = given.trim();

    if family.is_empty() {
        return Err(SeimeiError::EmptyNameComponent(NamePart::Family));
    }
    if given.is_empty() {
        return Err(SeimeiError::EmptyNameComponent(NamePart::Given));
    }

    let family_strokes = resolve_all(family, source)?;
    let given_strokes = resolve_all(given, source)?;

    let scores = engine::score_set(&family_strokes, &given_strokes);
    let elements = fortune::classify(&scores);

    Ok(NameRecord::new(
        family.to_string(),
        given.to_string(),
        family_strokes,
        given_strokes,
        scores,
        elements,
    ))
}

/// Splits `"姓 名"` into its halves when the given name was not supplied
/// separately.
pub fn split_full_name<'a>(family: &'a str, given: Option<&'a str>) -> (&'a str, &'a str) {
    match given {
        Some(g) => (family, g),
        None => family
            .trim()
            .split_once(char::is_whitespace)
            .map(|(f, g)| (f, g.trim()))
            .unwrap_or((family, "")),
    }
}

fn resolve_all<S: StrokeSource + ?Sized>(part: &str, source: &mut S) -> SeimeiResult<Vec<u32>> {
    part.chars().map(|ch| source.strokes(ch)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_full_name() {
        assert_eq!(split_full_name("田中 一郎", None), ("田中", "一郎"));
        assert_eq!(split_full_name("田中　一郎", None), ("田中", "一郎"));
        assert_eq!(split_full_name("田中", Some("一郎")), ("田中", "一郎"));
        assert_eq!(split_full_name("田中", None), ("田中", ""));
    }
}

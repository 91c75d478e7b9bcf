//! The five scores are all sums over per-character stroke counts. When the
//! two halves of a name differ in length, the shorter side is padded with
//! "phantom" strokes (one per missing character) so single-character names
//! are not penalised.

use super::types::ScoreSet;

fn sum(strokes: &[u32]) -> u32 {
    strokes.iter().sum()
}

fn phantom(longer: &[u32], shorter: &[u32]) -> u32 {
    longer.len().saturating_sub(shorter.len()) as u32
}

pub fn celestial(family: &[u32], given: &[u32]) -> u32 {
    sum(family) + phantom(given, family)
}

/// The two counts adjacent to the family/given boundary. Both halves must
/// be non-empty; the scorer checks this before calling in.
pub fn personal(family: &[u32], given: &[u32]) -> u32 {
    match (family.last(), given.first()) {
        (Some(f), Some(g)) => f + g,
        _ => 0,
    }
}

pub fn earthly(family: &[u32], given: &[u32]) -> u32 {
    sum(given) + phantom(family, given)
}

pub fn external(family: &[u32], given: &[u32]) -> u32 {
    let family_outer = sum(&family[..family.len().saturating_sub(1)]);
    let given_outer = given.get(1..).map(sum).unwrap_or(0);
    family_outer + given_outer + family.len().abs_diff(given.len()) as u32
}

pub fn total(family: &[u32], given: &[u32]) -> u32 {
    sum(family) + sum(given)
}

pub fn score_set(family: &[u32], given: &[u32]) -> ScoreSet {
    ScoreSet {
        celestial: celestial(family, given),
        personal: personal(family, given),
        earthly: earthly(family, given),
        external: external(family, given),
        total: total(family, given),
    }
}

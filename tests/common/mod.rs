#![allow(dead_code)]

use seimei::scorer;
use seimei::{NameRecord, StrokeTable};

pub const SAMPLE_STROKES: &[(char, u32)] = &[
    ('田', 5),
    ('中', 4),
    ('一', 1),
    ('郎', 9),
    ('佐', 7),
    ('々', 3),
    ('木', 4),
    ('守', 6),
    ('林', 8),
    ('美', 9),
    ('智', 12),
    ('子', 3),
    ('山', 3),
    ('花', 7),
    ('川', 3),
];

pub fn sample_table() -> StrokeTable {
    SAMPLE_STROKES.iter().copied().collect()
}

/// Scores a name against the sample table.
pub fn record(family: &str, given: &str) -> NameRecord {
    scorer::compute(family, given, &mut sample_table()).unwrap()
}

pub fn names(history: &seimei::HistoryStore) -> Vec<String> {
    history.iter().map(|r| r.full_name()).collect()
}

/// Five distinct names: "山 一", "山 子", "山 花", "川 一", "川 子".
pub fn five_records() -> Vec<NameRecord> {
    vec![
        record("山", "一"),
        record("山", "子"),
        record("山", "花"),
        record("川", "一"),
        record("川", "子"),
    ]
}

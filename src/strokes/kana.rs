//! Kana stroke counts are shipped as three lines of digits rather than as
//! `char,count` pairs. Voiced, semi-voiced and small kana are not listed;
//! they are derived from their base kana.

use super::StrokeTable;
use crate::error::{SeimeiError, SeimeiResult};
use std::fs;
use std::path::Path;
use tracing::info;

const HIRAGANA: &str = "あいうえおかきくけこさしすせそたちつてとなにぬねのはひふへほまみむめもやゆよらりるれろわゐゑをん";
const KATAKANA: &str = "アイウエオカキクケコサシスセソタチツテトナニヌネノハヒフヘホマミムメモヤユヨラリルレロワヰヱヲン";
const MARKS: &str = "ーゝゞ々";

const VOICED_BASE_H: &str = "かきくけこさしすせそたちつてとはひふへほ";
const VOICED_H: &str = "がぎぐげござじずぜぞだぢづでどばびぶべぼ";
const VOICED_BASE_K: &str = "カキクケコサシスセソタチツテトハヒフヘホ";
const VOICED_K: &str = "ガギグゲゴザジズゼゾダヂヅデドバビブベボ";

const SEMI_VOICED_BASE_H: &str = "はひふへほ";
const SEMI_VOICED_H: &str = "ぱぴぷぺぽ";
const SEMI_VOICED_BASE_K: &str = "ハヒフヘホ";
const SEMI_VOICED_K: &str = "パピプペポ";

const LARGE_H: &str = "あいうえおやゆよわ";
const SMALL_H: &str = "ぁぃぅぇぉゃゅょゎ";
const LARGE_K: &str = "アイウエオヤユヨワケ";
const SMALL_K: &str = "ァィゥェォャュョヮヶ";

/// Dakuten adds two strokes, handakuten one.
const VOICED_EXTRA: u32 = 2;
const SEMI_VOICED_EXTRA: u32 = 1;

pub fn parse_kana_table(text: &str) -> SeimeiResult<StrokeTable> {
    let mut table = StrokeTable::new();
    let mut lines = text.lines();

    for (line_no, chars) in (1u64..).zip([HIRAGANA, KATAKANA, MARKS]) {
        let Some(line) = lines.next() else { break };
        for (ch, digit) in chars.chars().zip(line.trim().chars()) {
            let n = match digit.to_digit(10) {
                Some(n) if n > 0 => n,
                _ => {
                    return Err(SeimeiError::malformed(
                        line_no,
                        format!("'{}' is not a stroke digit", digit),
                    ))
                }
            };
            table.set(ch, n);
        }
    }

    derive(&mut table, VOICED_H, VOICED_BASE_H, VOICED_EXTRA);
    derive(&mut table, VOICED_K, VOICED_BASE_K, VOICED_EXTRA);
    derive(&mut table, SEMI_VOICED_H, SEMI_VOICED_BASE_H, SEMI_VOICED_EXTRA);
    derive(&mut table, SEMI_VOICED_K, SEMI_VOICED_BASE_K, SEMI_VOICED_EXTRA);
    derive(&mut table, SMALL_H, LARGE_H, 0);
    derive(&mut table, SMALL_K, LARGE_K, 0);

    Ok(table)
}

/// Loads the kana table. A missing file contributes nothing.
pub fn load_kana_table(path: &Path) -> SeimeiResult<StrokeTable> {
    if !path.exists() {
        info!("📂 No kana table at {}, skipping", path.display());
        return Ok(StrokeTable::new());
    }

    let table = parse_kana_table(&fs::read_to_string(path)?)?;
    info!("📂 Loaded {} kana stroke counts from {}", table.len(), path.display());
    Ok(table)
}

fn derive(table: &mut StrokeTable, derived: &str, base: &str, extra: u32) {
    for (d, b) in derived.chars().zip(base.chars()) {
        if let Some(n) = table.get(b) {
            table.set(d, n + extra);
        }
    }
}

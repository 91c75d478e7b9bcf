use super::StrokeTable;
use crate::error::{SeimeiError, SeimeiResult};
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::info;

/// Reader settings shared by every line-oriented file in the crate:
/// no header row, `#` comments, ragged rows allowed so the caller can report
/// the exact problem. Fields are left untrimmed; callers trim the columns
/// that need it.
pub(crate) fn line_reader<R: Read>(reader: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .from_reader(reader)
}

/// A line holding nothing but whitespace.
pub(crate) fn is_blank(rec: &StringRecord) -> bool {
    rec.iter().all(|field| field.trim().is_empty())
}

pub(crate) fn line_of(rec: &StringRecord) -> u64 {
    rec.position().map(|p| p.line()).unwrap_or(0)
}

/// Parses `char,count` lines into a table.
pub fn read_cache<R: Read>(reader: R) -> SeimeiResult<StrokeTable> {
    let mut rdr = line_reader(reader);
    let mut table = StrokeTable::new();

    for result in rdr.records() {
        let rec = result?;
        if is_blank(&rec) {
            continue;
        }
        let line = line_of(&rec);

        if rec.len() != 2 {
            return Err(SeimeiError::malformed(
                line,
                format!("expected `char,count`, found {} fields", rec.len()),
            ));
        }

        let (key, value) = (rec[0].trim(), rec[1].trim());
        let ch = single_char(key)
            .ok_or_else(|| SeimeiError::malformed(line, format!("'{}' is not one character", key)))?;

        let count: u32 = match value.parse() {
            Ok(n) if n > 0 => n,
            _ => {
                return Err(SeimeiError::malformed(
                    line,
                    format!("invalid stroke count '{}'", value),
                ))
            }
        };

        table.set(ch, count);
    }

    Ok(table)
}

pub fn write_cache<W: Write>(table: &StrokeTable, writer: W) -> SeimeiResult<()> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);
    for (ch, count) in table.iter() {
        wtr.write_record([ch.to_string(), count.to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Loads the cache file. A missing file is an empty table.
pub fn load_cache(path: &Path) -> SeimeiResult<StrokeTable> {
    if !path.exists() {
        info!("📂 No stroke cache at {}, starting empty", path.display());
        return Ok(StrokeTable::new());
    }

    let table = read_cache(File::open(path)?)?;
    info!("📂 Loaded {} stroke counts from {}", table.len(), path.display());
    Ok(table)
}

pub fn save_cache(table: &StrokeTable, path: &Path) -> SeimeiResult<()> {
    write_cache(table, File::create(path)?)?;
    info!("💾 Saved {} stroke counts to {}", table.len(), path.display());
    Ok(())
}

pub fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

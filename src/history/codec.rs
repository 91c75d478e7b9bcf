use crate::error::{SeimeiError, SeimeiResult};
use crate::record::NameRecord;
use crate::scorer::{fortune, Element, ElementSet, Fortune, ScoreSet};
use crate::strokes::loader::{is_blank, line_of, line_reader};
use csv::{StringRecord, WriterBuilder};
use std::str::FromStr;

/// Serialises a record list to bytes and back.
pub trait RecordCodec {
    fn encode(&self, records: &[NameRecord]) -> SeimeiResult<Vec<u8>>;
    fn decode(&self, bytes: &[u8]) -> SeimeiResult<Vec<NameRecord>>;
}

const HEADER: &str = "# family,given,celestial,personal,earthly,external,total,\
elem_celestial,elem_personal,elem_earthly,fortune,strokes...[,note]\n";

/// Columns before the per-character stroke counts.
const FIXED_COLUMNS: usize = 11;

/// One record per line:
/// `family,given,<5 scores>,<3 elements>,fortune,<strokes...>[,note]`.
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvCodec;

impl RecordCodec for CsvCodec {
    fn encode(&self, records: &[NameRecord]) -> SeimeiResult<Vec<u8>> {
        let mut out = HEADER.as_bytes().to_vec();
        {
            let mut wtr = WriterBuilder::new()
                .has_headers(false)
                .flexible(true)
                .from_writer(&mut out);
            for record in records {
                wtr.write_record(&to_row(record))?;
            }
            wtr.flush()?;
        }
        Ok(out)
    }

    fn decode(&self, bytes: &[u8]) -> SeimeiResult<Vec<NameRecord>> {
        let mut rdr = line_reader(bytes);
        let mut records = Vec::new();
        for result in rdr.records() {
            let rec = result?;
            if !is_blank(&rec) {
                records.push(from_row(&rec)?);
            }
        }
        Ok(records)
    }
}

fn to_row(record: &NameRecord) -> Vec<String> {
    let s = record.scores();
    let e = record.elements();
    let mut row = vec![
        record.family().to_string(),
        record.given().to_string(),
        s.celestial.to_string(),
        s.personal.to_string(),
        s.earthly.to_string(),
        s.external.to_string(),
        s.total.to_string(),
        e.celestial.to_string(),
        e.personal.to_string(),
        e.earthly.to_string(),
        e.fortune.to_string(),
    ];
    row.extend(record.strokes().map(|(_, n)| n.to_string()));
    if !record.note().is_empty() {
        row.push(escape_note(record.note()));
    }
    row
}

fn from_row(rec: &StringRecord) -> SeimeiResult<NameRecord> {
    let line = line_of(rec);

    if rec.len() < FIXED_COLUMNS {
        return Err(SeimeiError::malformed(
            line,
            format!("expected at least {} fields, found {}", FIXED_COLUMNS, rec.len()),
        ));
    }

    let family = rec[0].trim().to_string();
    let given = rec[1].trim().to_string();
    if family.is_empty() || given.is_empty() {
        return Err(SeimeiError::malformed(line, "empty name component"));
    }

    let scores = ScoreSet {
        celestial: parse_field(rec, 2, line)?,
        personal: parse_field(rec, 3, line)?,
        earthly: parse_field(rec, 4, line)?,
        external: parse_field(rec, 5, line)?,
        total: parse_field(rec, 6, line)?,
    };

    let celestial: Element = parse_field(rec, 7, line)?;
    let personal: Element = parse_field(rec, 8, line)?;
    let earthly: Element = parse_field(rec, 9, line)?;
    let stored_fortune: Fortune = parse_field(rec, 10, line)?;
    if stored_fortune != fortune::fortune(celestial, personal, earthly) {
        return Err(SeimeiError::malformed(
            line,
            format!("fortune '{}' contradicts elements", &rec[10]),
        ));
    }
    let elements = ElementSet {
        celestial,
        personal,
        earthly,
        fortune: stored_fortune,
    };

    let n_family = family.chars().count();
    let n_given = given.chars().count();
    let n_strokes = n_family + n_given;
    let trailing = rec.len() - FIXED_COLUMNS;

    let note = match trailing.checked_sub(n_strokes) {
        Some(0) => String::new(),
        // The note is free text and keeps its surrounding whitespace.
        Some(1) => unescape_note(&rec[FIXED_COLUMNS + n_strokes]),
        _ => {
            return Err(SeimeiError::malformed(
                line,
                format!(
                    "'{} {}' needs {} stroke counts, found {} trailing fields",
                    family, given, n_strokes, trailing
                ),
            ))
        }
    };

    let strokes = (FIXED_COLUMNS..FIXED_COLUMNS + n_strokes)
        .map(|i| parse_field::<u32>(rec, i, line))
        .collect::<SeimeiResult<Vec<_>>>()?;
    let (family_strokes, given_strokes) = strokes.split_at(n_family);

    Ok(NameRecord::new(
        family,
        given,
        family_strokes.to_vec(),
        given_strokes.to_vec(),
        scores,
        elements,
    )
    .with_note(note))
}

fn parse_field<T: FromStr>(rec: &StringRecord, idx: usize, line: u64) -> SeimeiResult<T> {
    let raw = rec[idx].trim();
    raw.parse().map_err(|_| {
        SeimeiError::malformed(line, format!("field {} has invalid value '{}'", idx + 1, raw))
    })
}

fn escape_note(note: &str) -> String {
    note.replace('\\', "\\\\").replace('\n', "\\n")
}

fn unescape_note(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const TANAKA: &str = "田中,一郎,9,5,10,14,19,water,earth,water,inauspicious,5,4,1,9\n";

    #[test]
    fn test_decode_skips_comments_and_blank_lines() {
        let data = format!("# header\n\n{}\n", TANAKA);
        let records = CsvCodec.decode(data.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].family_strokes(), &[5, 4]);
        assert_eq!(records[0].given_strokes(), &[1, 9]);
        assert_eq!(records[0].note(), "");
    }

    #[test]
    fn test_decode_skips_whitespace_only_lines() {
        let data = format!("{}   \n\t\n", TANAKA);
        let records = CsvCodec.decode(data.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].family(), "田中");
    }

    #[test]
    fn test_decode_trims_fixed_columns_but_not_note() {
        let data = " 田中 , 一郎 , 9,5,10,14,19, water,earth,water,inauspicious,5,4,1, 9 ,  kept  \n";
        let records = CsvCodec.decode(data.as_bytes()).unwrap();
        assert_eq!(records[0].family(), "田中");
        assert_eq!(records[0].given(), "一郎");
        assert_eq!(records[0].given_strokes(), &[1, 9]);
        assert_eq!(records[0].note(), "  kept  ");
    }

    #[test]
    fn test_decode_rejects_missing_stroke() {
        let data = "田中,一郎,9,5,10,14,19,water,earth,water,inauspicious,5,4,1\n";
        let err = CsvCodec.decode(data.as_bytes()).unwrap_err();
        assert!(matches!(err, SeimeiError::MalformedRecord { line: 1, .. }));
    }

    #[test]
    fn test_decode_rejects_two_extra_fields() {
        let data = "田中,一郎,9,5,10,14,19,water,earth,water,inauspicious,5,4,1,9,a,b\n";
        assert!(CsvCodec.decode(data.as_bytes()).is_err());
    }

    #[test]
    fn test_decode_rejects_unknown_element() {
        let data = "田中,一郎,9,5,10,14,19,air,earth,water,inauspicious,5,4,1,9\n";
        assert!(matches!(
            CsvCodec.decode(data.as_bytes()),
            Err(SeimeiError::MalformedRecord { .. })
        ));
    }

    #[test]
    fn test_note_escaping_round_trips() {
        let raw = "line one\nback\\slash";
        assert_eq!(unescape_note(&escape_note(raw)), raw);
        assert_eq!(escape_note("a\nb"), "a\\nb");
    }

    #[test]
    fn test_encode_writes_header_first() {
        let out = CsvCodec.encode(&[]).unwrap();
        assert!(String::from_utf8(out).unwrap().starts_with("# family,given"));
    }
}

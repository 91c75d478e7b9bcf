mod common;

use common::{five_records, names, record};
use seimei::history::{CsvCodec, RecordCodec};
use seimei::{HistoryStore, SeimeiError};
use std::fs;
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};

#[test]
fn test_save_then_load_is_identical() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("name.csv");

    let mut history = HistoryStore::load(&path).unwrap();
    assert!(history.is_empty());
    for r in five_records() {
        history.add(r);
    }
    history.add(record("佐々木", "守"));
    history.add(record("林", "美智子"));
    history.move_by(6, -4).unwrap();
    history.save().unwrap();

    let reloaded = HistoryStore::load(&path).unwrap();
    assert_eq!(reloaded.records(), history.records());
    assert_eq!(names(&reloaded)[2], "林 美智子");
}

#[test]
fn test_notes_survive_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("name.csv");

    let mut history = HistoryStore::new();
    history.add(record("田中", "一郎").with_note("grandfather's name,\nsecond line"));
    history.add(record("山", "花"));
    history.save_to(&path).unwrap();

    let reloaded = HistoryStore::load(&path).unwrap();
    assert_eq!(reloaded.get(0).unwrap().note(), "grandfather's name,\nsecond line");
    assert_eq!(reloaded.get(1).unwrap().note(), "");
}

#[test]
fn test_padded_notes_keep_their_whitespace() {
    let mut history = HistoryStore::new();
    history.add(record("田中", "一郎").with_note("  indented note  "));
    history.add(record("山", "花").with_note("   "));

    let bytes = CsvCodec.encode(history.records()).unwrap();
    let decoded = CsvCodec.decode(&bytes).unwrap();

    assert_eq!(decoded[0].note(), "  indented note  ");
    assert_eq!(decoded[1].note(), "   ");
    assert_eq!(decoded, history.records());
}

#[test]
fn test_saved_line_layout() {
    let bytes = CsvCodec.encode(&[record("田中", "一郎")]).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    let data: Vec<&str> = text.lines().filter(|l| !l.starts_with('#')).collect();
    assert_eq!(
        data,
        vec!["田中,一郎,9,5,10,14,19,water,earth,water,inauspicious,5,4,1,9"]
    );
}

#[test]
fn test_load_keeps_first_of_duplicate_lines() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "# family,given,...").unwrap();
    writeln!(file, "田中,一郎,9,5,10,14,19,water,earth,water,inauspicious,5,4,1,9,kept").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "田中,一郎,9,5,10,14,19,water,earth,water,inauspicious,5,4,1,9,dropped").unwrap();

    let history = HistoryStore::load(file.path()).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history.get(0).unwrap().note(), "kept");
}

#[test]
fn test_load_fails_on_malformed_line() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "山,一,3,4,1,0,4,fire,fire,wood,great,3,1").unwrap();
    writeln!(file, "田中,一郎,9,5,10,14,19,water,earth,water,inauspicious,5,4").unwrap();

    let err = HistoryStore::load(file.path()).unwrap_err();
    assert!(matches!(err, SeimeiError::MalformedRecord { line: 2, .. }));
}

#[test]
fn test_load_fails_on_non_numeric_score() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "山,一,three,4,1,0,4,fire,fire,wood,great,3,1").unwrap();
    assert!(matches!(
        HistoryStore::load(file.path()),
        Err(SeimeiError::MalformedRecord { .. })
    ));
}

#[test]
fn test_missing_file_is_empty_and_save_creates_it() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("fresh.csv");

    let mut history = HistoryStore::load(&path).unwrap();
    assert!(history.is_empty());
    assert_eq!(history.path(), Some(path.as_path()));

    history.add(record("山", "一"));
    history.save().unwrap();
    assert!(fs::read_to_string(&path).unwrap().contains("山,一,"));
}

#[test]
fn test_save_without_path_is_error() {
    let history = HistoryStore::new();
    assert!(matches!(history.save(), Err(SeimeiError::Config(_))));
}

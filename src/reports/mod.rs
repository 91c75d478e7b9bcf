use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use seimei::scorer::Fortune;
use seimei::{HistoryStore, NameRecord};

fn fortune_cell(fortune: Fortune) -> Cell {
    let cell = Cell::new(format!("{} ({})", fortune.label(), fortune));
    match fortune {
        Fortune::Great => cell.fg(Color::Green),
        Fortune::Fair => cell.fg(Color::Yellow),
        Fortune::Inauspicious => cell.fg(Color::Red),
    }
}

pub fn print_record(record: &NameRecord) {
    println!("\nName: {}", record.full_name());

    let mut strokes = Table::new();
    strokes.load_preset(ASCII_FULL);
    strokes.set_header(vec![
        Cell::new("Char").add_attribute(Attribute::Bold),
        Cell::new("Strokes"),
    ]);
    for (ch, n) in record.strokes() {
        strokes.add_row(vec![
            Cell::new(ch).set_alignment(CellAlignment::Center),
            Cell::new(n).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{}", strokes);

    let s = record.scores();
    let e = record.elements();
    let mut scores = Table::new();
    scores.load_preset(ASCII_FULL);
    scores.set_header(vec![
        Cell::new("Score").add_attribute(Attribute::Bold),
        Cell::new("Value"),
        Cell::new("Element"),
    ]);
    let rows = [
        ("天格 celestial", s.celestial, Some(e.celestial)),
        ("人格 personal", s.personal, Some(e.personal)),
        ("地格 earthly", s.earthly, Some(e.earthly)),
        ("外格 external", s.external, None),
        ("総格 total", s.total, None),
    ];
    for (label, value, element) in rows {
        scores.add_row(vec![
            Cell::new(label),
            Cell::new(value).set_alignment(CellAlignment::Right),
            Cell::new(
                element
                    .map(|el| format!("{} {}", el.kanji(), el))
                    .unwrap_or_default(),
            ),
        ]);
    }
    println!("{}", scores);

    let mut fortune = Table::new();
    fortune.load_preset(ASCII_FULL);
    fortune.add_row(vec![
        Cell::new("三才 fortune").add_attribute(Attribute::Bold),
        fortune_cell(e.fortune),
    ]);
    println!("{}", fortune);

    if !record.note().is_empty() {
        println!("Note: {}", record.note());
    }
}

pub fn print_history(history: &HistoryStore) {
    if history.is_empty() {
        println!("(history is empty)");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Name").add_attribute(Attribute::Bold),
        Cell::new("天").fg(Color::Cyan),
        Cell::new("人").fg(Color::Cyan),
        Cell::new("地").fg(Color::Cyan),
        Cell::new("外"),
        Cell::new("総"),
        Cell::new("五行"),
        Cell::new("Fortune"),
        Cell::new("Strokes"),
        Cell::new("Note"),
    ]);

    for i in 0..=6 {
        if let Some(col) = table.column_mut(i) {
            if i != 1 {
                col.set_cell_alignment(CellAlignment::Right);
            }
        }
    }

    for (i, record) in history.iter().enumerate() {
        let s = record.scores();
        let e = record.elements();
        let strokes = record
            .strokes()
            .map(|(ch, n)| format!("{}:{}", ch, n))
            .collect::<Vec<_>>()
            .join(" ");

        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(record.full_name()),
            Cell::new(s.celestial),
            Cell::new(s.personal),
            Cell::new(s.earthly),
            Cell::new(s.external),
            Cell::new(s.total),
            Cell::new(format!(
                "{}{}{}",
                e.celestial.kanji(),
                e.personal.kanji(),
                e.earthly.kanji()
            )),
            fortune_cell(e.fortune),
            Cell::new(strokes),
            Cell::new(record.note().lines().next().unwrap_or("")),
        ]);
    }
    println!("{}", table);
}

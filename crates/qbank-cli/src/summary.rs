use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::{ParsedFile, ScanResult};

pub fn print_scan_summary(result: &ScanResult) {
    println!("Folder: {}", result.import_folder.display());
    println!("Files: {}", result.filenames.len());

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Course group"),
        header_cell("Files"),
        header_cell("Year"),
        header_cell("Rotation"),
        header_cell("RATT"),
        header_cell("Catalog match"),
        header_cell("Score"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    align_column(&mut table, 4, CellAlignment::Center);
    align_column(&mut table, 6, CellAlignment::Right);

    let mut matched = 0usize;
    for suggestion in &result.suggestions {
        let metadata = &suggestion.metadata;
        let (match_cell, score_cell) = match &suggestion.course {
            Some(course_match) => {
                matched += 1;
                (
                    Cell::new(format!(
                        "{} (#{})",
                        course_match.course.name, course_match.course.id
                    ))
                    .fg(Color::Green),
                    Cell::new(format!(
                        "{:.2} ({})",
                        course_match.score,
                        course_match.rule.describe()
                    )),
                )
            }
            None => (Cell::new("-").fg(Color::DarkGrey), Cell::new("-")),
        };
        table.add_row(vec![
            Cell::new(&suggestion.group.display_name),
            Cell::new(suggestion.group.file_indices.len()),
            optional_cell(metadata.exam_year.map(|y| y.to_string())),
            optional_cell(metadata.rotation.map(|r| r.as_str().to_string())),
            Cell::new(if metadata.is_ratt { "yes" } else { "no" }),
            match_cell,
            score_cell,
        ]);
    }
    println!("{table}");
    println!(
        "{matched} of {} groups matched a catalog course",
        result.suggestions.len()
    );
}

pub fn print_parse_summary(parsed: &[ParsedFile]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Filename"),
        header_cell("Course"),
        header_cell("Year"),
        header_cell("Rotation"),
        header_cell("RATT"),
        header_cell("Source"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    align_column(&mut table, 4, CellAlignment::Center);
    align_column(&mut table, 5, CellAlignment::Right);

    for file in parsed {
        let metadata = &file.metadata;
        table.add_row(vec![
            Cell::new(&file.filename),
            optional_cell(metadata.course.clone()),
            optional_cell(metadata.exam_year.map(|y| y.to_string())),
            optional_cell(metadata.rotation.map(|r| r.as_str().to_string())),
            Cell::new(if metadata.is_ratt { "yes" } else { "no" }),
            optional_cell(metadata.source_id.map(|id| id.to_string())),
        ]);
    }
    println!("{table}");
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn optional_cell(value: Option<String>) -> Cell {
    match value {
        Some(text) => Cell::new(text),
        None => Cell::new("-").fg(Color::DarkGrey),
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

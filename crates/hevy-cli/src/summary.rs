//! Terminal tables for mapping results and the lookup table.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use hevy_map::LookupTable;
use hevy_model::{Confidence, MappingReport};

/// Table of mapping decisions with a totals row.
pub fn mapping_table(report: &MappingReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Exercise"),
        header_cell("Template"),
        header_cell("Title"),
        header_cell("Confidence"),
        header_cell("Sets"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Center);
    align_column(&mut table, 5, CellAlignment::Right);

    let mut total_sets = 0usize;
    for (index, exercise) in report.exercises().iter().enumerate() {
        let sets = exercise.exercise().sets.len();
        total_sets += sets;
        table.add_row(vec![
            dim_cell(index),
            Cell::new(exercise.exercise_name()),
            match exercise.canonical_id() {
                Some(id) => Cell::new(id).fg(Color::Blue),
                None => dim_cell("-"),
            },
            Cell::new(exercise.canonical_title()),
            confidence_cell(exercise.confidence()),
            Cell::new(sets),
        ]);
    }

    let stats = report.stats();
    table.add_row(vec![
        dim_cell("-"),
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{}/{} mapped", stats.mapped, stats.total)).add_attribute(Attribute::Bold),
        dim_cell("-"),
        unmapped_count_cell(stats.unmapped),
        Cell::new(total_sets).add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn print_mapping_summary(report: &MappingReport) {
    println!("{}", mapping_table(report));
    if !report.unmapped().is_empty() {
        eprintln!("Unmapped exercises:");
        for name in report.unmapped() {
            eprintln!("- {name}");
        }
    }
}

/// Listing of lookup entries in match-priority order.
pub fn lookup_listing(lookup: &LookupTable) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Priority"),
        header_cell("Key"),
        header_cell("Template"),
        header_cell("Title"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (priority, entry) in lookup.iter().enumerate() {
        table.add_row(vec![
            dim_cell(priority + 1),
            Cell::new(&entry.key),
            Cell::new(&entry.id).fg(Color::Blue),
            Cell::new(&entry.title),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn confidence_cell(confidence: Confidence) -> Cell {
    let cell = Cell::new(confidence.as_str());
    match confidence {
        Confidence::Exact => cell.fg(Color::Green),
        Confidence::Partial => cell.fg(Color::Yellow),
        Confidence::Unmapped => cell.fg(Color::Red).add_attribute(Attribute::Bold),
    }
}

fn unmapped_count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(format!("{count} unmapped"))
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("0 unmapped")
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

use anyhow::Result;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use stockrec_model::ReconciliationSummary;

pub fn print_summary(
    summary: &ReconciliationSummary,
    json: bool,
    show_parsed: bool,
) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
        return Ok(());
    }

    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![header_cell("Metric"), header_cell("Count")]);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Files processed"), Cell::new(summary.files_processed)]);
    table.add_row(vec![
        Cell::new("Records extracted"),
        Cell::new(summary.records_processed),
    ]);
    table.add_row(vec![Cell::new("Matched"), Cell::new(summary.matched)]);
    table.add_row(vec![Cell::new("Updated"), Cell::new(summary.updated)]);
    table.add_row(vec![
        Cell::new("Not found"),
        count_cell(summary.not_found.len(), Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Errors"),
        count_cell(summary.errors.len(), Color::Red),
    ]);
    println!("{table}");

    if !summary.not_found.is_empty() {
        println!("Not found:");
        for entry in &summary.not_found {
            println!("- {entry}");
        }
    }

    if show_parsed && !summary.parsed.is_empty() {
        let mut parsed = Table::new();
        apply_table_style(&mut parsed);
        parsed.set_header(vec![
            header_cell("Code"),
            header_cell("Qty"),
            header_cell("Size"),
            header_cell("Category"),
            header_cell("Page"),
        ]);
        align_column(&mut parsed, 1, CellAlignment::Right);
        align_column(&mut parsed, 4, CellAlignment::Right);
        for record in &summary.parsed {
            parsed.add_row(vec![
                Cell::new(&record.raw_code),
                Cell::new(record.quantity),
                Cell::new(record.size.as_deref().unwrap_or("-")),
                Cell::new(
                    record
                        .category
                        .map(stockrec_model::Category::as_str)
                        .unwrap_or("-"),
                ),
                Cell::new(record.page),
            ]);
        }
        println!("{parsed}");
    }

    if !summary.errors.is_empty() {
        eprintln!("Errors:");
        for error in &summary.errors {
            eprintln!("- {error}");
        }
    }
    Ok(())
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count == 0 {
        Cell::new(count)
    } else {
        Cell::new(count).fg(color)
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

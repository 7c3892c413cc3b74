use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use rips_model::{Classification, FieldValue, Record, RecordSchema, ValidationResponse};

/// Print the outcome table of a single response.
pub fn print_response(response: &ValidationResponse) {
    println!("Record: {} {}", response.record_type, response.key);
    println!("Status: {}", status_label(response.valid));
    if let Some(location) = &response.export_location {
        println!("Exported: {location}");
    }
    print_outcome_table(std::slice::from_ref(response));
}

/// Print one summary row per response followed by the combined outcome table.
pub fn print_batch(responses: &[ValidationResponse]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Type"),
        header_cell("Key"),
        header_cell("Status"),
        header_cell("Rejections"),
        header_cell("Notifications"),
        header_cell("Export"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);

    let mut accepted = 0usize;
    let mut total_rejections = 0usize;
    let mut total_notifications = 0usize;
    for response in responses {
        let rejections = response.rejection_count();
        let notifications = response.notification_count();
        if response.valid {
            accepted += 1;
        }
        total_rejections += rejections;
        total_notifications += notifications;
        table.add_row(vec![
            type_cell(&response.record_type),
            Cell::new(&response.key),
            status_cell(response.valid),
            count_cell(rejections, Color::Red),
            count_cell(notifications, Color::Yellow),
            export_cell(response.export_location.as_deref()),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} records", responses.len()))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{accepted} accepted")).add_attribute(Attribute::Bold),
        count_cell(total_rejections, Color::Red).add_attribute(Attribute::Bold),
        count_cell(total_notifications, Color::Yellow).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");
    print_outcome_table(responses);
}

fn print_outcome_table(responses: &[ValidationResponse]) {
    let outcomes: Vec<_> = responses
        .iter()
        .flat_map(|response| {
            response
                .validation_results
                .iter()
                .map(move |outcome| (response, outcome))
        })
        .collect();
    if outcomes.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Type"),
        header_cell("Key"),
        header_cell("Class"),
        header_cell("Code"),
        header_cell("Field"),
        header_cell("Description"),
    ]);
    apply_outcome_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    for (response, outcome) in outcomes {
        table.add_row(vec![
            type_cell(&response.record_type),
            Cell::new(&response.key),
            classification_cell(outcome.classification()),
            Cell::new(outcome.code()),
            outcome.field().map_or_else(|| dim_cell("-"), Cell::new),
            Cell::new(outcome.description()),
        ]);
    }
    println!();
    println!("Outcomes:");
    println!("{table}");
}

/// Table of records in schema column order.
pub fn record_table(schema: &RecordSchema, rows: &[Record]) -> Table {
    let mut table = Table::new();
    table.set_header(schema.columns.iter().map(|column| header_cell(column)));
    apply_table_style(&mut table);
    for row in rows {
        table.add_row(schema.columns.iter().map(|column| value_cell(row.get(column))));
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
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(120);
}

fn apply_outcome_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    if table.column_count() >= 6 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(6)),
            ColumnConstraint::UpperBoundary(Width::Fixed(20)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::LowerBoundary(Width::Fixed(12)),
            ColumnConstraint::UpperBoundary(Width::Fixed(32)),
            ColumnConstraint::UpperBoundary(Width::Percentage(50)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn status_label(valid: bool) -> &'static str {
    if valid { "ACCEPTED" } else { "REJECTED" }
}

fn status_cell(valid: bool) -> Cell {
    let color = if valid { Color::Green } else { Color::Red };
    Cell::new(status_label(valid))
        .fg(color)
        .add_attribute(Attribute::Bold)
}

fn classification_cell(classification: Classification) -> Cell {
    match classification {
        Classification::Rejection => Cell::new("REJECT")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        Classification::Notification => Cell::new("NOTIFY").fg(Color::Yellow),
    }
}

fn export_cell(location: Option<&str>) -> Cell {
    match location {
        Some(_) => Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        None => dim_cell("-"),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn value_cell(value: &FieldValue) -> Cell {
    match value.as_text() {
        Some(text) => Cell::new(text),
        None => dim_cell("NULL"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn type_cell(code: &str) -> Cell {
    Cell::new(code)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

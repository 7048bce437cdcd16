//! Rendering of classification results and the rule cascade.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use mrc_classify::{CASCADE, CascadeStep};
use mrc_model::{Classification, ClassificationKey};
use mrc_rules::Category;
use serde::Serialize;

/// A label together with its classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelResult {
    pub label: String,
    pub classification: Classification,
}

pub fn render_json(results: &[LabelResult]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(results)
}

/// One column per classification key.
pub fn classification_table(results: &[LabelResult]) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("Label")];
    header.extend(ClassificationKey::ALL.iter().map(|key| header_cell(key.as_str())));
    table.set_header(header);
    apply_table_style(&mut table);

    for result in results {
        let mut row = vec![Cell::new(&result.label)];
        if result.classification.is_empty() {
            row.push(dim_cell("unknown"));
            row.extend(ClassificationKey::ALL[1..].iter().map(|_| dim_cell("-")));
        } else {
            row.extend(
                ClassificationKey::ALL
                    .iter()
                    .map(|key| tags_cell(&result.classification, *key)),
            );
        }
        table.add_row(row);
    }
    table
}

/// The built-in cascade, highest priority first.
pub fn cascade_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Category"),
        header_cell("Classification"),
        header_cell("Patterns"),
    ]);
    apply_summary_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);

    for (index, step) in CASCADE.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            category_cell(step.category),
            Cell::new(step_classification(step)),
            Cell::new(step.category.specs().len()),
        ]);
    }
    table
}

fn step_classification(step: &CascadeStep) -> String {
    step.assignment.to_classification().to_string()
}

fn tags_cell(classification: &Classification, key: ClassificationKey) -> Cell {
    match classification.get(key) {
        Some(tags) => Cell::new(tags.join(", ")),
        None => dim_cell("-"),
    }
}

fn category_cell(category: Category) -> Cell {
    Cell::new(category.as_str())
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).add_attribute(Attribute::Dim)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn apply_summary_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

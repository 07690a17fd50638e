use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use archlink_cli::report::RecommendationReport;

pub fn print_report(report: &RecommendationReport) {
    if let Some(document) = &report.document {
        println!("Document: {document}");
    }
    print_instances(report);
    print_relations(report);
}

fn print_instances(report: &RecommendationReport) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Name"),
        header_cell("Type"),
        header_cell("Probability"),
        header_cell("Names"),
        header_cell("Types"),
        header_cell("Claimants"),
    ]);
    apply_table_style(&mut table);
    for index in [3, 4, 5] {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for row in &report.instances {
        table.add_row(vec![
            dim_cell(row.id),
            Cell::new(&row.name).add_attribute(Attribute::Bold),
            Cell::new(&row.type_name),
            probability_cell(row.probability),
            Cell::new(row.name_mappings),
            Cell::new(row.type_mappings),
            Cell::new(row.claimants.join(", ")),
        ]);
    }
    println!("Recommended instances: {}", report.instances.len());
    println!("{table}");
}

fn print_relations(report: &RecommendationReport) {
    if report.relations.is_empty() {
        println!("No relations inferred.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Kind"),
        header_cell("Participants"),
        header_cell("Probability"),
        header_cell("Evidence"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for row in &report.relations {
        table.add_row(vec![
            Cell::new(&row.kind).fg(Color::Cyan),
            Cell::new(row.participants.join(" - ")),
            probability_cell(row.probability),
            dim_cell(row.evidence.join(" ")),
        ]);
    }
    println!("Recommended relations: {}", report.relations.len());
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn probability_cell(probability: f64) -> Cell {
    let color = if probability >= 0.75 {
        Color::Green
    } else if probability >= 0.4 {
        Color::Yellow
    } else {
        Color::Red
    };
    Cell::new(format!("{probability:.3}")).fg(color)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).add_attribute(Attribute::Dim)
}

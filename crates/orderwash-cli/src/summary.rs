//! Run summary printing.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use orderwash_model::RejectReason;

use crate::commands::RunResult;

pub fn print_summary(result: &RunResult) {
    let summary = &result.output.summary;
    println!("Input: {} ({} records)", result.input.display(), summary.input_records);
    match &result.paths {
        Some(paths) => {
            println!(
                "Clean set: {} ({} records)",
                paths.clean_csv.display(),
                summary.output_records
            );
            println!(
                "Ledger: {} ({} records)",
                paths.ledger_csv.display(),
                summary.rejected_records()
            );
            println!("Reconciliation: {}", paths.reconciliation_json.display());
        }
        None => {
            println!(
                "Dry run: {} clean, {} rejected",
                summary.output_records,
                summary.rejected_records()
            );
        }
    }

    if summary.rejected_records() > 0 {
        println!();
        println!("Rejections:");
        println!("{}", rejection_table(result));
    }

    if !summary.balances() {
        eprintln!(
            "warning: ledger does not balance: {} input != {} output + {} rejected",
            summary.input_records,
            summary.output_records,
            summary.rejected_records()
        );
    }
}

fn rejection_table(result: &RunResult) -> Table {
    let summary = &result.output.summary;
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        header_cell("Reason"),
        header_cell("Stage"),
        header_cell("Count"),
    ]);
    if let Some(column) = table.column_mut(2) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    for reason in RejectReason::all() {
        let Some(&count) = summary.rejections.get(&reason) else {
            continue;
        };
        table.add_row(vec![
            Cell::new(reason.as_str()),
            Cell::new(reason.stage().as_str()).fg(Color::DarkGrey),
            Cell::new(count).fg(Color::Yellow),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(summary.rejected_records())
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    ]);
    table
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

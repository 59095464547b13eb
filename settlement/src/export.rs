//! Spreadsheet-compatible CSV export
//!
//! Writes computed results in the same sections the web app's
//! workbook export uses: a trip summary, the expense table, and the
//! balance table with settlement suggestions. One CSV per section;
//! person IDs are resolved to display names, with an "Unknown"
//! fallback for dangling references.

use crate::{report::SettlementReport, Result};
use std::io::Write;
use std::path::Path;
use trip_core::{PersonId, Trip};

fn display_name<'a>(trip: &'a Trip, id: &PersonId) -> &'a str {
    trip.person_name(id).unwrap_or("Unknown")
}

fn csv_writer<W: Write>(writer: W) -> csv::Writer<W> {
    // Sections mix record widths, so the writer must be flexible
    csv::WriterBuilder::new().flexible(true).from_writer(writer)
}

/// Write the trip summary section
pub fn write_summary_csv<W: Write>(trip: &Trip, writer: W) -> Result<()> {
    let mut out = csv_writer(writer);

    let created = trip.created_at.format("%Y-%m-%d").to_string();
    let people = trip.people.len().to_string();
    let expenses = trip.expenses.len().to_string();
    let total = format!("{:.2}", trip.total_spent());

    out.write_record(["Trip Name", trip.name.as_str()])?;
    out.write_record(["Created Date", created.as_str()])?;
    out.write_record(["Number of People", people.as_str()])?;
    out.write_record(["Total Expenses", expenses.as_str()])?;
    out.write_record(["Total Amount", total.as_str()])?;

    out.write_record(["Participants:"])?;
    for person in &trip.people {
        out.write_record(["", person.name.as_str()])?;
    }

    out.flush()?;
    Ok(())
}

/// Write the expense table
pub fn write_expenses_csv<W: Write>(trip: &Trip, writer: W) -> Result<()> {
    let mut out = csv_writer(writer);

    out.write_record(["Date", "Title", "Amount", "Paid By", "Split Among", "Split Type"])?;
    for expense in &trip.expenses {
        let date = expense.date.format("%Y-%m-%d").to_string();
        let amount = format!("{:.2}", expense.amount);
        let split_among = expense
            .split_among
            .iter()
            .map(|id| display_name(trip, id))
            .collect::<Vec<_>>()
            .join(", ");
        let split_type = if expense.is_custom_split() { "Custom" } else { "Equal" };

        out.write_record([
            date.as_str(),
            expense.title.as_str(),
            amount.as_str(),
            display_name(trip, &expense.paid_by),
            split_among.as_str(),
            split_type,
        ])?;
    }

    out.flush()?;
    Ok(())
}

/// Write the balance table followed by settlement suggestions
pub fn write_balances_csv<W: Write>(trip: &Trip, writer: W) -> Result<()> {
    let report = SettlementReport::build(trip)?;
    let mut out = csv_writer(writer);

    out.write_record(["Person", "Balance", "Status"])?;
    for row in &report.balances {
        let amount = format!("{:.2}", row.amount);
        out.write_record([
            display_name(trip, &row.person_id),
            amount.as_str(),
            row.status.label(),
        ])?;
    }

    out.write_record(["Settlement Suggestions:"])?;
    out.write_record(["From", "To", "Amount"])?;
    for settlement in &report.settlements {
        let amount = format!("{:.2}", settlement.amount);
        out.write_record([
            display_name(trip, &settlement.from),
            display_name(trip, &settlement.to),
            amount.as_str(),
        ])?;
    }

    out.flush()?;
    Ok(())
}

/// Write all three sections as files under `output_dir`
///
/// File names derive from the trip name with non-alphanumeric
/// characters replaced, the same scheme the web app's exports use.
/// Returns the generated file names.
pub fn export_trip_files(trip: &Trip, output_dir: impl AsRef<Path>) -> Result<Vec<String>> {
    let output_dir = output_dir.as_ref();
    std::fs::create_dir_all(output_dir)?;

    let stem: String = trip
        .name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();

    let sections: [(&str, fn(&Trip, std::fs::File) -> Result<()>); 3] = [
        ("summary", write_summary_csv),
        ("expenses", write_expenses_csv),
        ("balances", write_balances_csv),
    ];

    let mut files = Vec::new();
    for (section, write) in sections {
        let filename = format!("{}_{}.csv", stem, section);
        let file = std::fs::File::create(output_dir.join(&filename))?;
        write(trip, file)?;

        tracing::info!("Exported {}", filename);
        files.push(filename);
    }

    Ok(files)
}

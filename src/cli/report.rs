use std::path::Path;

use chrono::{Datelike, Local};
use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::error::Result;
use crate::fmt::money;
use crate::models::Expense;
use crate::reports;
use crate::settings::load_settings;
use crate::store::Store;

fn open_store(data_dir: &Path) -> Store {
    Store::new(load_settings().ledger_path(data_dir))
}

fn expense_table(records: &[Expense]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Date", "Category", "Amount", "Description"]);
    for e in records {
        table.add_row(vec![
            Cell::new(e.date),
            Cell::new(&e.category),
            Cell::new(money(e.amount)),
            Cell::new(&e.description),
        ]);
    }
    table
}

fn warn_skipped(skipped: usize) {
    if skipped > 0 {
        eprintln!("Warning: skipped {skipped} unparseable ledger line(s).");
    }
}

pub fn view(data_dir: &Path, month: Option<u32>, year: Option<i32>) -> Result<()> {
    let now = Local::now();
    let month = month.unwrap_or_else(|| now.month());
    let year = year.unwrap_or_else(|| now.year());
    let report = reports::monthly(&open_store(data_dir), month, year)?;

    if report.records.is_empty() {
        println!("No expenses recorded for {:04}-{:02}.", report.year, report.month);
    } else {
        println!(
            "Expenses for {:04}-{:02}\n{}",
            report.year,
            report.month,
            expense_table(&report.records)
        );
    }
    println!("Total: {}", money(report.total).bold());
    warn_skipped(report.skipped);
    Ok(())
}

pub fn list(data_dir: &Path) -> Result<()> {
    let listing = reports::all(&open_store(data_dir))?;

    if listing.records.is_empty() {
        println!("No expenses recorded.");
    } else {
        println!(
            "All Expenses ({})\n{}",
            listing.records.len(),
            expense_table(&listing.records)
        );
    }
    println!("Total: {}", money(listing.total).bold());
    warn_skipped(listing.skipped);
    Ok(())
}

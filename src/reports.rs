use chrono::Datelike;

use crate::error::{Result, SpendlogError};
use crate::models::Expense;
use crate::store::Store;

/// One month's expenses: matching records in file order, their sum, and the
/// number of ledger lines that failed to parse during the scan.
pub struct MonthlyReport {
    pub month: u32,
    pub year: i32,
    pub records: Vec<Expense>,
    pub total: f64,
    pub skipped: usize,
}

/// Every recorded expense with a grand total.
pub struct Listing {
    pub records: Vec<Expense>,
    pub total: f64,
    pub skipped: usize,
}

/// Sum of amounts. Zero for an empty slice.
pub fn total(records: &[Expense]) -> f64 {
    records.iter().map(|e| e.amount).sum()
}

pub fn monthly(store: &Store, month: u32, year: i32) -> Result<MonthlyReport> {
    if !(1..=12).contains(&month) {
        return Err(SpendlogError::InvalidMonth(month));
    }
    let scan = store.read_matching(|e| e.date.month() == month && e.date.year() == year)?;
    Ok(MonthlyReport {
        month,
        year,
        total: total(&scan.records),
        skipped: scan.skipped.len(),
        records: scan.records,
    })
}

pub fn all(store: &Store) -> Result<Listing> {
    let scan = store.read_matching(|_| true)?;
    Ok(Listing {
        total: total(&scan.records),
        skipped: scan.skipped.len(),
        records: scan.records,
    })
}

use std::path::Path;

use chrono::{Local, NaiveDate};

use crate::error::{Result, SpendlogError};
use crate::fmt::money;
use crate::models::{resolve_category, Expense};
use crate::settings::load_settings;
use crate::store::Store;

pub fn run(
    data_dir: &Path,
    amount: f64,
    category: &str,
    description: &str,
    date: Option<NaiveDate>,
) -> Result<()> {
    if !amount.is_finite() {
        return Err(SpendlogError::InvalidAmount(format!(
            "{amount} is not a finite number"
        )));
    }
    if amount < 0.0 {
        return Err(SpendlogError::InvalidAmount(format!(
            "{amount} is negative"
        )));
    }
    let category = resolve_category(category)?;

    let expense = Expense {
        date: date.unwrap_or_else(|| Local::now().date_naive()),
        category,
        amount,
        description: description.trim().to_string(),
    };

    std::fs::create_dir_all(data_dir)?;
    let store = Store::new(load_settings().ledger_path(data_dir));
    store.append(&expense)?;

    println!(
        "Added expense: {} {} on {}",
        money(expense.amount),
        expense.category,
        expense.date
    );
    Ok(())
}

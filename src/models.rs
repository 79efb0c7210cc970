use chrono::NaiveDate;
use thiserror::Error;

use crate::error::{Result, SpendlogError};

/// Field separator in the ledger file. Nothing is escaped; a description
/// containing this sequence makes that one line unparseable.
pub const DELIMITER: &str = " | ";

/// The closed category list offered to the user.
pub const CATEGORIES: &[&str] = &[
    "Food",
    "Travel",
    "Bills",
    "Shopping",
    "Entertainment",
    "Education",
    "Healthcare",
    "Rent",
    "Savings",
    "Others",
];

/// One recorded transaction. Immutable once appended to the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub date: NaiveDate,
    pub category: String,
    pub amount: f64,
    pub description: String,
}

/// Why a ledger line could not be parsed into an [`Expense`].
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LineError {
    #[error("expected 4 fields, found {0}")]
    FieldCount(usize),

    #[error("unparseable date: {0}")]
    BadDate(String),

    #[error("unparseable amount: {0}")]
    BadAmount(String),
}

impl Expense {
    /// Render the ledger line form: `date | category | amount | description`.
    pub fn to_line(&self) -> String {
        format!(
            "{}{DELIMITER}{}{DELIMITER}{}{DELIMITER}{}",
            self.date.format("%Y-%m-%d"),
            self.category,
            self.amount,
            self.description
        )
    }

    /// Parse one ledger line. The field count must be exactly four and the
    /// date and amount fields must parse; anything else is a [`LineError`].
    pub fn parse_line(line: &str) -> std::result::Result<Self, LineError> {
        let fields: Vec<&str> = line.split(DELIMITER).collect();
        if fields.len() != 4 {
            return Err(LineError::FieldCount(fields.len()));
        }
        let date = NaiveDate::parse_from_str(fields[0].trim(), "%Y-%m-%d")
            .map_err(|_| LineError::BadDate(fields[0].trim().to_string()))?;
        let amount: f64 = fields[2]
            .trim()
            .parse()
            .map_err(|_| LineError::BadAmount(fields[2].trim().to_string()))?;
        Ok(Expense {
            date,
            category: fields[1].trim().to_string(),
            amount,
            description: fields[3].trim().to_string(),
        })
    }
}

/// Resolve user input against the closed category list, case-insensitively,
/// returning the canonical spelling.
pub fn resolve_category(input: &str) -> Result<String> {
    CATEGORIES
        .iter()
        .find(|c| c.eq_ignore_ascii_case(input.trim()))
        .map(|c| c.to_string())
        .ok_or_else(|| SpendlogError::UnknownCategory(input.trim().to_string()))
}

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::{Expense, LineError};

/// Append-only flat-file ledger. The file is opened and closed per
/// operation; no handle or lock is held across calls, and exclusive
/// single-process access is assumed.
pub struct Store {
    path: PathBuf,
}

/// One unparseable ledger line, collected during a scan instead of aborting
/// the whole read.
#[derive(Debug)]
pub struct SkippedLine {
    pub line_no: usize,
    pub reason: LineError,
}

/// Result of a ledger scan: matching records in file order, plus the lines
/// that failed to parse.
#[derive(Debug, Default)]
pub struct Scan {
    pub records: Vec<Expense>,
    pub skipped: Vec<SkippedLine>,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record as a new line, creating the file if needed.
    /// Existing lines are never rewritten.
    pub fn append(&self, expense: &Expense) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", expense.to_line())?;
        Ok(())
    }

    /// Scan the ledger and return the records matching `predicate`, in file
    /// order. Unparseable lines (wrong field count, bad date, bad amount)
    /// are skipped and collected; blank lines are ignored. A missing file is
    /// an empty ledger, not an error.
    pub fn read_matching<F>(&self, predicate: F) -> Result<Scan>
    where
        F: Fn(&Expense) -> bool,
    {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Scan::default()),
            Err(e) => return Err(e.into()),
        };

        let mut scan = Scan::default();
        for (idx, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match Expense::parse_line(&line) {
                Ok(expense) => {
                    if predicate(&expense) {
                        scan.records.push(expense);
                    }
                }
                Err(reason) => scan.skipped.push(SkippedLine {
                    line_no: idx + 1,
                    reason,
                }),
            }
        }
        Ok(scan)
    }
}

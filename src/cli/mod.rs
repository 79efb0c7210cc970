pub mod add;
pub mod categories;
pub mod init;
pub mod report;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "spendlog", about = "Flat-file personal expense tracker.")]
pub struct Cli {
    /// Override the configured data directory.
    #[arg(long = "data-dir", global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up spendlog: persist the data directory and create it.
    Init,
    /// Record an expense dated today.
    Add {
        /// Amount spent
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        /// Category from the closed list (see `spendlog categories`)
        #[arg(long)]
        category: String,
        /// Free-form description
        #[arg(long, default_value = "")]
        description: String,
        /// Record date override: YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Show one month's expenses with a total.
    View {
        /// Month 1-12 (default: current month)
        #[arg(long)]
        month: Option<u32>,
        /// Year (default: current year)
        #[arg(long)]
        year: Option<i32>,
    },
    /// List every recorded expense with a grand total.
    List,
    /// Print the closed category list.
    Categories,
}

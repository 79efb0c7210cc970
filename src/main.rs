mod cli;
mod error;
mod fmt;
mod models;
mod reports;
mod settings;
mod store;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let dir_flag = cli.data_dir;
    let data_dir = dir_flag.clone().unwrap_or_else(settings::get_data_dir);

    let result = match cli.command {
        Commands::Init => cli::init::run(dir_flag),
        Commands::Add {
            amount,
            category,
            description,
            date,
        } => cli::add::run(&data_dir, amount, &category, &description, date),
        Commands::View { month, year } => cli::report::view(&data_dir, month, year),
        Commands::List => cli::report::list(&data_dir),
        Commands::Categories => cli::categories::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

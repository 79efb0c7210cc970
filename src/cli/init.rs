use std::path::PathBuf;

use crate::error::Result;
use crate::settings::{load_settings, save_settings};

pub fn run(data_dir: Option<PathBuf>) -> Result<()> {
    let mut settings = load_settings();

    if let Some(dir) = data_dir {
        settings.data_dir = expand_home(&dir.to_string_lossy());
    } else {
        // First run without a flag: prompt for the data directory.
        let default = settings.data_dir.clone();
        println!("Data directory [{default}]: ");
        let mut input = String::new();
        std::io::stdin().read_line(&mut input).ok();
        let chosen = input.trim();
        if !chosen.is_empty() {
            settings.data_dir = expand_home(chosen);
        }
    }

    save_settings(&settings)?;

    let resolved = PathBuf::from(&settings.data_dir);
    std::fs::create_dir_all(&resolved)?;

    println!("Initialized spendlog at {}", resolved.display());
    Ok(())
}

fn expand_home(path: &str) -> String {
    if path.starts_with('~') {
        if let Some(home) = dirs::home_dir() {
            return path.replacen('~', &home.to_string_lossy(), 1);
        }
    }
    path.to_string()
}

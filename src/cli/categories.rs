use crate::error::Result;
use crate::models::CATEGORIES;

pub fn run() -> Result<()> {
    println!("Categories:");
    for name in CATEGORIES {
        println!("  {name}");
    }
    Ok(())
}

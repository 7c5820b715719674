use std::path::Path;

use anyhow::{bail, Result};

use promodeck_core::Deck;

/// Write the built-in sample deck as a starting template
pub fn run(file: &Path) -> Result<()> {
    if file.exists() {
        bail!("{} already exists, not overwriting", file.display());
    }

    let content = toml::to_string_pretty(&Deck::sample())?;
    std::fs::write(file, content)?;

    println!("Wrote sample deck to {}", file.display());
    println!("\nPresent it with:");
    println!("  promodeck run --deck {}", file.display());
    Ok(())
}

use std::path::Path;

use anyhow::Result;

use promodeck_core::{Block, Deck, Stat, StatFormat};

/// Parse and validate a deck file, reporting its structure and how every
/// statistic label will animate
pub fn run(file: &Path) -> Result<()> {
    let deck = Deck::load(file)?;

    println!("Deck \"{}\" is valid.\n", deck.title);
    println!("Sections ({}):", deck.sections.len());

    for section in &deck.sections {
        println!("  #{} - {}", section.id, section.title);
        for block in &section.blocks {
            match block {
                Block::Stats { items } => {
                    println!("    stats:");
                    for stat in items {
                        print_stat(stat);
                    }
                }
                Block::Cards { items } => {
                    println!("    cards: {}", items.len());
                }
                Block::Timeline { entries } => {
                    println!("    timeline: {} entries", entries.len());
                }
                Block::Roi { metrics, result } => {
                    println!("    roi metrics:");
                    for stat in metrics {
                        print_stat(stat);
                    }
                    if let Some(result) = result {
                        println!("    roi result:");
                        print_stat(result);
                    }
                }
                Block::Text { .. } => {
                    println!("    text");
                }
            }
        }
    }

    let dangling = deck.dangling_targets();
    if dangling.is_empty() {
        println!("\nAll nav targets resolve.");
    } else {
        println!("\nWarning: dangling nav targets (following them does nothing):");
        for link in dangling {
            println!("  {} -> {}", link.label, link.target);
        }
    }

    Ok(())
}

fn print_stat(stat: &Stat) {
    let format = StatFormat::parse(&stat.value);
    let kind = match &format {
        StatFormat::Literal(_) => "literal, not animated",
        StatFormat::Multiplier(_) => "multiplier",
        StatFormat::PlusPercent(_) => "plus-percent",
        StatFormat::Percent(_) => "percent",
        StatFormat::Count(_) => "count",
    };
    let tooltip = if stat.tooltip.is_some() {
        ", tooltip"
    } else {
        ""
    };
    println!("      {:10} {} ({}{})", stat.value, stat.caption, kind, tooltip);
}

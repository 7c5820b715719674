//! Deck document model
//!
//! A deck is a single scrollable promo page: a title, a row of anchor
//! navigation links and a list of sections, each section holding typed
//! content blocks. Decks are authored as TOML files; `Deck::sample()`
//! returns the built-in demo deck.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    /// Page title, shown in the nav bar
    pub title: String,
    /// Optional tagline under the hero heading
    #[serde(default)]
    pub tagline: Option<String>,
    /// Anchor navigation links
    #[serde(default)]
    pub nav: Vec<NavLink>,
    /// Page sections in display order
    pub sections: Vec<Section>,
}

/// An in-page anchor link; `target` is a `#section-id` fragment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub target: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Anchor identifier, unique within the deck
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A horizontal row of headline statistics with animated counters
    Stats { items: Vec<Stat> },
    /// Content cards revealed with a fade-in when scrolled into view
    Cards { items: Vec<Card> },
    /// Timeline entries revealed sequentially with a staggered delay
    Timeline { entries: Vec<TimelineEntry> },
    /// ROI metrics row plus an optional result line with a longer count-up
    Roi {
        metrics: Vec<Stat>,
        #[serde(default)]
        result: Option<Stat>,
    },
    /// Plain prose paragraph
    Text { body: String },
}

/// A formatted statistic such as `"55%"`, `"+25%"`, `"4x"` or `"24/7"`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    /// Display value; its shape decides how the counter animates
    pub value: String,
    pub caption: String,
    /// Optional tooltip text; a stat without one gets no info icon
    #[serde(default)]
    pub tooltip: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Period label, e.g. "Month 1"
    pub period: String,
    pub title: String,
    pub body: String,
}

impl Deck {
    /// Load and validate a deck from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let deck = Self::from_toml_str(&content)?;
        info!(
            sections = deck.sections.len(),
            "loaded deck from {}",
            path.display()
        );
        Ok(deck)
    }

    /// Parse and validate a deck from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let deck: Deck =
            toml::from_str(content).map_err(|e| Error::DeckParse(e.to_string()))?;
        deck.validate()?;
        Ok(deck)
    }

    /// Structural validation: section ids must be unique and non-empty,
    /// nav targets must be `#fragment`-shaped. Dangling targets are allowed;
    /// following one is a silent no-op.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for section in &self.sections {
            if section.id.is_empty() {
                return Err(Error::InvalidDeck(format!(
                    "section \"{}\" has an empty id",
                    section.title
                )));
            }
            if !seen.insert(section.id.as_str()) {
                return Err(Error::InvalidDeck(format!(
                    "duplicate section id \"{}\"",
                    section.id
                )));
            }
        }
        for link in &self.nav {
            if !link.target.starts_with('#') {
                return Err(Error::InvalidDeck(format!(
                    "nav link \"{}\" target \"{}\" is not a #fragment",
                    link.label, link.target
                )));
            }
        }
        Ok(())
    }

    /// Resolve a `#fragment` to a section index; `None` when no section
    /// carries that id
    pub fn section_index(&self, fragment: &str) -> Option<usize> {
        let id = fragment.strip_prefix('#')?;
        if id.is_empty() {
            return None;
        }
        self.sections.iter().position(|s| s.id == id)
    }

    /// Nav targets that do not resolve to any section
    pub fn dangling_targets(&self) -> Vec<&NavLink> {
        self.nav
            .iter()
            .filter(|link| self.section_index(&link.target).is_none())
            .collect()
    }

    /// The built-in demo deck, mirroring a typical product promo page
    pub fn sample() -> Self {
        Self {
            title: "Atlas Ops".to_string(),
            tagline: Some("Automation that pays for itself".to_string()),
            nav: vec![
                NavLink {
                    label: "Problem".to_string(),
                    target: "#problem".to_string(),
                },
                NavLink {
                    label: "Solution".to_string(),
                    target: "#solution".to_string(),
                },
                NavLink {
                    label: "Rollout".to_string(),
                    target: "#rollout".to_string(),
                },
                NavLink {
                    label: "ROI".to_string(),
                    target: "#roi".to_string(),
                },
            ],
            sections: vec![
                Section {
                    id: "hero".to_string(),
                    title: "Atlas Ops".to_string(),
                    blocks: vec![Block::Stats {
                        items: vec![
                            Stat {
                                value: "55%".to_string(),
                                caption: "less manual triage".to_string(),
                                tooltip: Some(
                                    "Measured across pilot teams over one quarter".to_string(),
                                ),
                            },
                            Stat {
                                value: "4x".to_string(),
                                caption: "faster incident response".to_string(),
                                tooltip: None,
                            },
                            Stat {
                                value: "24/7".to_string(),
                                caption: "unattended operation".to_string(),
                                tooltip: None,
                            },
                        ],
                    }],
                },
                Section {
                    id: "problem".to_string(),
                    title: "The Problem".to_string(),
                    blocks: vec![Block::Cards {
                        items: vec![
                            Card {
                                title: "Alert fatigue".to_string(),
                                body: "On-call engineers wade through hundreds of duplicate \
                                       alerts per week, and the real incidents drown in the \
                                       noise."
                                    .to_string(),
                            },
                            Card {
                                title: "Slow handovers".to_string(),
                                body: "Context lives in chat scrollback. Every shift change \
                                       restarts the investigation from zero."
                                    .to_string(),
                            },
                            Card {
                                title: "Runbook drift".to_string(),
                                body: "Procedures age faster than anyone updates them, so \
                                       the documented fix rarely matches production."
                                    .to_string(),
                            },
                        ],
                    }],
                },
                Section {
                    id: "solution".to_string(),
                    title: "The Solution".to_string(),
                    blocks: vec![
                        Block::Text {
                            body: "Atlas Ops sits between your alerting pipeline and your \
                                   on-call rotation. It groups related alerts, attaches the \
                                   matching runbook step, and executes the safe remediations \
                                   on its own."
                                .to_string(),
                        },
                        Block::Cards {
                            items: vec![
                                Card {
                                    title: "Correlate".to_string(),
                                    body: "Duplicate and downstream alerts collapse into a \
                                           single incident with a causal chain."
                                        .to_string(),
                                },
                                Card {
                                    title: "Remediate".to_string(),
                                    body: "Approved runbook actions run automatically; \
                                           anything unusual pages a human with full context."
                                        .to_string(),
                                },
                            ],
                        },
                    ],
                },
                Section {
                    id: "rollout".to_string(),
                    title: "Rollout Plan".to_string(),
                    blocks: vec![Block::Timeline {
                        entries: vec![
                            TimelineEntry {
                                period: "Month 1".to_string(),
                                title: "Shadow mode".to_string(),
                                body: "Atlas observes your alert stream and proposes \
                                       groupings without acting."
                                    .to_string(),
                            },
                            TimelineEntry {
                                period: "Month 2".to_string(),
                                title: "Assisted triage".to_string(),
                                body: "On-call engineers accept or reject suggested \
                                       remediations with one keystroke."
                                    .to_string(),
                            },
                            TimelineEntry {
                                period: "Month 3".to_string(),
                                title: "Guarded autonomy".to_string(),
                                body: "Low-risk remediations run unattended inside \
                                       agreed guardrails."
                                    .to_string(),
                            },
                            TimelineEntry {
                                period: "Month 4".to_string(),
                                title: "Full rollout".to_string(),
                                body: "All services onboarded; the rotation shrinks to a \
                                       single escalation contact."
                                    .to_string(),
                            },
                        ],
                    }],
                },
                Section {
                    id: "roi".to_string(),
                    title: "Return on Investment".to_string(),
                    blocks: vec![Block::Roi {
                        metrics: vec![
                            Stat {
                                value: "65%".to_string(),
                                caption: "fewer pages".to_string(),
                                tooltip: None,
                            },
                            Stat {
                                value: "70%".to_string(),
                                caption: "auto-resolved incidents".to_string(),
                                tooltip: Some(
                                    "Share of incidents closed without human action".to_string(),
                                ),
                            },
                            Stat {
                                value: "+25%".to_string(),
                                caption: "engineer focus time".to_string(),
                                tooltip: None,
                            },
                            Stat {
                                value: "+15%".to_string(),
                                caption: "deploy frequency".to_string(),
                                tooltip: None,
                            },
                        ],
                        result: Some(Stat {
                            value: "65%".to_string(),
                            caption: "lower total cost of on-call in year one".to_string(),
                            tooltip: None,
                        }),
                    }],
                },
                Section {
                    id: "risks".to_string(),
                    title: "Risks".to_string(),
                    blocks: vec![Block::Cards {
                        items: vec![Card {
                            title: "Main risk".to_string(),
                            body: "Automation acting on a stale runbook. Mitigated by \
                                   shadow mode, per-action guardrails and a one-key kill \
                                   switch for the whole remediation engine."
                                .to_string(),
                        }],
                    }],
                },
            ],
        }
    }
}

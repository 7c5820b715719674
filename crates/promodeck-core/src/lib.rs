pub mod config;
pub mod counter;
pub mod deck;
pub mod error;
pub mod reveal;
pub mod stat;
pub mod tooltip;

pub use config::{AppConfig, CounterConfig, EasingType, RevealConfig, ScrollConfig, UiConfig};
pub use counter::Counter;
pub use deck::{Block, Card, Deck, NavLink, Section, Stat, TimelineEntry};
pub use error::{Error, Result};
pub use reveal::{ObservedSpan, RevealObserver, RevealState, RowSpan, Viewport};
pub use stat::StatFormat;
pub use tooltip::{TooltipController, TooltipId};

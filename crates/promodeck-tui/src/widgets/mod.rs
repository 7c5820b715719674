mod cards;
mod nav_bar;
mod page;
mod stats;
mod status_bar;
mod timeline;
mod tooltip;

pub use nav_bar::NavBarWidget;
pub use page::PageWidget;
pub use status_bar::StatusBarWidget;
pub use tooltip::TooltipWidget;

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use tracing::info;

use promodeck_core::{AppConfig, Deck};
use promodeck_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::{handle_key_event, Action},
    widgets::{NavBarWidget, PageWidget, StatusBarWidget, TooltipWidget},
    Theme,
};

pub fn run(config: Arc<AppConfig>, deck_path: Option<PathBuf>) -> Result<()> {
    // Command line beats config; with neither, present the built-in sample
    let deck = match deck_path.or_else(|| config.general.deck_path.clone()) {
        Some(path) => Deck::load(&path)?,
        None => {
            info!("no deck file given, presenting the built-in sample");
            Deck::sample()
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("Promodeck"))?;
    if config.ui.mouse {
        execute!(stdout, EnableMouseCapture)?;
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let size = terminal.size()?;
    let mut app = App::new(deck, config.clone(), Theme::default(), size.width);

    let events = EventHandler::with_animation_fps(
        config.ui.tick_rate_ms,
        config.ui.scroll.animation_fps,
    );

    let result = run_loop(&mut terminal, &mut app, &events);

    // Restore terminal
    disable_raw_mode()?;
    if config.ui.mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| draw(frame, app))?;

        if app.should_quit {
            return Ok(());
        }

        match events.next(app.animating(Instant::now()))? {
            Some(AppEvent::Key(key)) => {
                let action = handle_key_event(key, app);
                handle_action(action, app);
            }
            Some(AppEvent::Mouse(mouse)) => app.on_mouse(mouse, Instant::now()),
            Some(AppEvent::Resize(width, _)) => app.relayout(width),
            Some(AppEvent::Tick) | None => {}
        }

        app.on_tick(Instant::now());
    }
}

fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Nav bar
            Constraint::Min(0),    // Page
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    NavBarWidget::render(frame, chunks[0], app);
    PageWidget::render(frame, chunks[1], app);
    StatusBarWidget::render(frame, chunks[2], app);

    // Overlay, drawn last
    TooltipWidget::render(frame, app);
}

fn handle_action(action: Action, app: &mut App) {
    let now = Instant::now();
    let max_scroll = app.max_scroll();
    let viewport_height = app.content_area.height;

    if action != Action::PendingG {
        app.clear_pending_key();
    }

    match action {
        Action::Quit => app.should_quit = true,
        Action::ScrollDown => app.scroll.scroll_down(max_scroll),
        Action::ScrollUp => app.scroll.scroll_up(max_scroll),
        Action::HalfPageDown => app.scroll.half_page_down(viewport_height, max_scroll),
        Action::HalfPageUp => app.scroll.half_page_up(viewport_height, max_scroll),
        Action::PageDown => app.scroll.page_down(viewport_height, max_scroll),
        Action::PageUp => app.scroll.page_up(viewport_height, max_scroll),
        Action::JumpToTop => app.jump_to_top(now),
        Action::JumpToBottom => app.jump_to_bottom(now),
        Action::PendingG => app.pending_key = Some('g'),
        Action::NextLink => app.next_link(),
        Action::PrevLink => app.prev_link(),
        Action::FollowLink => app.follow_link(app.selected_link, now),
        Action::CloseTooltips => app.tooltips.close_all(),
        Action::None => {}
    }
}

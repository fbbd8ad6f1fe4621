pub mod app;
pub mod event;
pub mod keys;
pub mod theme;
pub mod ui;

use std::io;
use std::sync::Arc;

use anyhow::Result;
use chiplist_core::ItemSource;
use crossterm::ExecutableCommand;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::runtime::Handle;
use tracing::info;

use app::{App, HitMap, LoadStatus};
use event::{AppEvent, EventHandler};

/// Run the chip picker until the user quits. The item list is fetched once,
/// in the background, from `source`.
pub fn run_tui(app: &mut App, source: Arc<dyn ItemSource>, runtime: &Handle) -> Result<()> {
    // Install panic hook
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = io::stdout().execute(DisableMouseCapture);
        let _ = disable_raw_mode();
        let _ = io::stdout().execute(LeaveAlternateScreen);
        original_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    io::stdout().execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut event_handler = EventHandler::new(app.config.tick_rate());
    app::fetch::spawn_item_fetch(runtime, event_handler.sender(), source);

    let outcome = event_loop(&mut terminal, &mut event_handler, app);

    // Restore terminal
    io::stdout().execute(DisableMouseCapture)?;
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    info!(selected = app.chips().len(), "picker closed");
    outcome
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    events: &mut EventHandler,
    app: &mut App,
) -> Result<()> {
    loop {
        let mut hits = HitMap::default();
        terminal.draw(|frame| hits = ui::render(frame, app))?;
        app.hits = hits;

        match events.next(app.load_status == LoadStatus::Loading)? {
            AppEvent::Key(key) => keys::handle_key(app, key.code, key.modifiers),
            AppEvent::Mouse(mouse) => keys::handle_mouse(app, mouse),
            AppEvent::ItemsLoaded(result) => app.on_items_loaded(result),
            AppEvent::Resize(_, _) => {}
            AppEvent::Tick => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

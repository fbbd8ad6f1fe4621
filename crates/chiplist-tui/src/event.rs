use std::time::Duration;

use anyhow::Result;
use chiplist_core::Item;
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind, MouseEvent};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Events that the TUI can handle.
#[derive(Debug)]
pub enum AppEvent {
    /// A key press event.
    Key(KeyEvent),
    /// A mouse button or movement event.
    Mouse(MouseEvent),
    /// Terminal was resized.
    Resize(u16, u16),
    /// Periodic tick; nothing happened.
    Tick,
    /// The background item fetch finished.
    ItemsLoaded(std::result::Result<Vec<Item>, String>),
}

/// Terminal poll timeout while a background result is still expected.
const POSTED_POLL: Duration = Duration::from_millis(25);

/// Polls for terminal events with a configurable tick rate and drains
/// results posted by background tasks.
pub struct EventHandler {
    tick_rate: Duration,
    tx: UnboundedSender<AppEvent>,
    rx: UnboundedReceiver<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { tick_rate, tx, rx }
    }

    /// Handle for background tasks to post events into the loop.
    pub fn sender(&self) -> UnboundedSender<AppEvent> {
        self.tx.clone()
    }

    /// Take a pending background event, if any, without blocking.
    pub fn try_next_posted(&mut self) -> Option<AppEvent> {
        self.rx.try_recv().ok()
    }

    /// How long one terminal poll may block. Shortened while `awaiting_posted`
    /// so a background result is picked up without waiting out a full tick.
    pub fn poll_timeout(&self, awaiting_posted: bool) -> Duration {
        if awaiting_posted {
            self.tick_rate.min(POSTED_POLL)
        } else {
            self.tick_rate
        }
    }

    /// Block until the next event (posted result, key, mouse, resize, or poll timeout).
    pub fn next(&mut self, awaiting_posted: bool) -> Result<AppEvent> {
        if let Some(posted) = self.try_next_posted() {
            return Ok(posted);
        }
        if event::poll(self.poll_timeout(awaiting_posted))? {
            match event::read()? {
                CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Ok(AppEvent::Key(key)),
                CrosstermEvent::Mouse(mouse) => Ok(AppEvent::Mouse(mouse)),
                CrosstermEvent::Resize(w, h) => Ok(AppEvent::Resize(w, h)),
                _ => Ok(AppEvent::Tick),
            }
        } else {
            Ok(AppEvent::Tick)
        }
    }
}

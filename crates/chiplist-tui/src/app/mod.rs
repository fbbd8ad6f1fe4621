pub mod fetch;

use chiplist_core::{AppConfig, Command, Effect, Item, SelectionState};
use ratatui::layout::{Position, Rect};
use tracing::info;

use crate::theme::NordTheme;

/// Progress of the one-shot item fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Loaded,
    /// The fetch failed. The picker stays empty; the error is only logged.
    Failed,
}

/// Clickable regions recorded by the last render.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    pub input: Rect,
    /// Whole dropdown box, borders included. Empty when hidden.
    pub dropdown: Rect,
    pub chip_closes: Vec<(Rect, Item)>,
    pub dropdown_rows: Vec<(Rect, Item)>,
}

/// What a click landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitTarget {
    Suggestion(Item),
    ChipClose(Item),
    Input,
    Outside,
}

impl HitMap {
    pub fn target_at(&self, column: u16, row: u16) -> HitTarget {
        let pos = Position::new(column, row);
        // The dropdown is drawn last, on top of everything else.
        if let Some((_, item)) = self.dropdown_rows.iter().find(|(r, _)| r.contains(pos)) {
            return HitTarget::Suggestion(item.clone());
        }
        if let Some((_, item)) = self.chip_closes.iter().find(|(r, _)| r.contains(pos)) {
            return HitTarget::ChipClose(item.clone());
        }
        if self.input.contains(pos) {
            return HitTarget::Input;
        }
        HitTarget::Outside
    }
}

/// Main application state.
pub struct App {
    pub should_quit: bool,
    pub state: SelectionState,
    pub input_focused: bool,
    pub load_status: LoadStatus,
    pub hits: HitMap,
    /// Index of the first suggestion drawn in the dropdown.
    pub dropdown_offset: usize,
    pub config: AppConfig,
    pub theme: NordTheme,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        Self {
            should_quit: false,
            state: SelectionState::new(),
            input_focused: true,
            load_status: LoadStatus::Loading,
            hits: HitMap::default(),
            dropdown_offset: 0,
            config,
            theme: NordTheme::default(),
        }
    }

    /// Replace the state snapshot with the result of `command`.
    pub fn dispatch(&mut self, command: Command) {
        // A new suggestion list always starts from its first row. Removing a
        // chip only appends, so the scroll position survives it.
        if matches!(
            command,
            Command::Initialize(_) | Command::SetQuery(_) | Command::Select(_)
        ) {
            self.dropdown_offset = 0;
        }
        let transition = self.state.apply(command);
        self.state = transition.state;
        if transition.effect == Effect::FocusInput {
            self.input_focused = true;
        }
    }

    pub fn on_items_loaded(&mut self, result: Result<Vec<Item>, String>) {
        match result {
            Ok(items) => {
                info!(count = items.len(), "items loaded");
                self.load_status = LoadStatus::Loaded;
                self.dispatch(Command::Initialize(items));
            }
            Err(_) => {
                // Already logged by the fetch task.
                self.load_status = LoadStatus::Failed;
            }
        }
    }

    /// Text shown in the input field. The field always mirrors the query.
    pub fn input_text(&self) -> &str {
        self.state.query()
    }

    pub fn chips(&self) -> &[Item] {
        self.state.chips()
    }

    // ─── Input controller ──────────────────────────────────

    pub fn type_char(&mut self, c: char) {
        if !self.input_focused {
            return;
        }
        let mut text = self.input_text().to_string();
        text.push(c);
        self.dispatch(Command::SetQuery(text.to_lowercase()));
    }

    pub fn backspace(&mut self) {
        if !self.input_focused {
            return;
        }
        let mut text = self.input_text().to_string();
        if text.pop().is_none() {
            return;
        }
        self.dispatch(Command::SetQuery(text));
    }

    /// Move the dropdown window by `delta` rows, keeping the last page full.
    pub fn scroll_dropdown(&mut self, delta: isize) {
        if !self.state.dropdown_visible() {
            return;
        }
        let visible = self.hits.dropdown_rows.len().max(1);
        let max_offset = self.state.display().len().saturating_sub(visible);
        self.dropdown_offset = self
            .dropdown_offset
            .saturating_add_signed(delta)
            .min(max_offset);
    }

    pub fn click(&mut self, column: u16, row: u16) {
        match self.hits.target_at(column, row) {
            HitTarget::Suggestion(item) => self.dispatch(Command::Select(item)),
            HitTarget::ChipClose(chip) => self.dispatch(Command::RemoveChip(chip)),
            HitTarget::Input => self.input_focused = true,
            HitTarget::Outside => {
                if self.input_focused {
                    self.input_focused = false;
                    self.dispatch(Command::Blur);
                }
            }
        }
    }
}

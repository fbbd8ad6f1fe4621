//! Selection state: available items, suggestions, chips and the query.
//!
//! A [`SelectionState`] is an immutable snapshot. Every user gesture becomes a
//! [`Command`], and [`SelectionState::apply`] returns a fresh snapshot instead of
//! editing the current one. That keeps the three lists consistent: a snapshot is
//! either fully before or fully after an operation.

use std::collections::HashSet;

use tracing::debug;

use crate::filter::filter_items;
use crate::models::Item;

/// One state-changing request from the input controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Populate from a freshly fetched item list.
    Initialize(Vec<Item>),
    /// The text field changed.
    SetQuery(String),
    /// A suggestion was picked.
    Select(Item),
    /// A chip's remove control was used.
    RemoveChip(Item),
    /// The text field lost focus. Leaves the dropdown open.
    Blur,
}

/// Side effect the view should perform after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Effect {
    #[default]
    None,
    /// Give keyboard focus back to the text field.
    FocusInput,
}

/// Result of applying a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: SelectionState,
    pub effect: Effect,
}

impl Transition {
    fn unchanged(state: &SelectionState) -> Self {
        Self {
            state: state.clone(),
            effect: Effect::None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    available: Vec<Item>,
    display: Vec<Item>,
    chips: Vec<Item>,
    query: String,
    dropdown_visible: bool,
}

impl SelectionState {
    /// Empty state, before any items have been fetched.
    pub fn new() -> Self {
        Self::default()
    }

    /// State right after a successful fetch.
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            display: items.clone(),
            available: items,
            chips: Vec::new(),
            query: String::new(),
            dropdown_visible: false,
        }
    }

    // ─── Accessors ─────────────────────────────────────────

    /// Items not selected as chips, in current order.
    pub fn available(&self) -> &[Item] {
        &self.available
    }

    /// Suggestions: `available` filtered by `query`.
    pub fn display(&self) -> &[Item] {
        &self.display
    }

    /// Selected items, in selection order.
    pub fn chips(&self) -> &[Item] {
        &self.chips
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn dropdown_visible(&self) -> bool {
        self.dropdown_visible
    }

    pub fn is_available(&self, id: i64) -> bool {
        self.available.iter().any(|i| i.id == id)
    }

    pub fn is_chip(&self, id: i64) -> bool {
        self.chips.iter().any(|i| i.id == id)
    }

    // ─── Transitions ───────────────────────────────────────

    pub fn apply(&self, command: Command) -> Transition {
        debug!(?command, "apply");
        match command {
            Command::Initialize(items) => Transition {
                state: Self::with_items(items),
                effect: Effect::None,
            },
            Command::SetQuery(query) => self.set_query(query),
            Command::Select(item) => self.select(&item),
            Command::RemoveChip(chip) => self.remove_chip(&chip),
            Command::Blur => Transition::unchanged(self),
        }
    }

    fn set_query(&self, query: String) -> Transition {
        Transition {
            state: Self {
                display: filter_items(&self.available, &query),
                available: self.available.clone(),
                chips: self.chips.clone(),
                query,
                dropdown_visible: true,
            },
            effect: Effect::None,
        }
    }

    fn select(&self, item: &Item) -> Transition {
        // The stored item wins over the caller's copy; only the id identifies it.
        let Some(picked) = self.available.iter().find(|i| i.id == item.id).cloned() else {
            debug!(id = item.id, "select ignored: not available");
            return Transition::unchanged(self);
        };

        let available: Vec<Item> = self
            .available
            .iter()
            .filter(|i| i.id != picked.id)
            .cloned()
            .collect();
        let mut chips = self.chips.clone();
        chips.push(picked);

        let query = String::new();
        Transition {
            state: Self {
                display: filter_items(&available, &query),
                available,
                chips,
                query,
                dropdown_visible: false,
            },
            effect: Effect::FocusInput,
        }
    }

    fn remove_chip(&self, chip: &Item) -> Transition {
        let Some(removed) = self.chips.iter().find(|c| c.id == chip.id).cloned() else {
            debug!(id = chip.id, "remove ignored: not a chip");
            return Transition::unchanged(self);
        };

        let chips: Vec<Item> = self
            .chips
            .iter()
            .filter(|c| c.id != removed.id)
            .cloned()
            .collect();
        let mut available = self.available.clone();
        available.push(removed);

        Transition {
            state: Self {
                display: filter_items(&available, &self.query),
                available,
                chips,
                query: self.query.clone(),
                dropdown_visible: self.dropdown_visible,
            },
            effect: Effect::None,
        }
    }

    /// Check that `available` and `chips` are disjoint and together hold exactly
    /// the ids of `original`.
    pub fn ids_partition_ok(&self, original: &[Item]) -> bool {
        let available: HashSet<i64> = self.available.iter().map(|i| i.id).collect();
        let chips: HashSet<i64> = self.chips.iter().map(|i| i.id).collect();
        if !available.is_disjoint(&chips) {
            return false;
        }
        let expected: HashSet<i64> = original.iter().map(|i| i.id).collect();
        let union: HashSet<i64> = available.union(&chips).copied().collect();
        union == expected
    }
}

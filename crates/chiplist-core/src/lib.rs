pub mod config;
pub mod error;
pub mod filter;
pub mod logging;
pub mod models;
pub mod source;
pub mod state;

pub use config::AppConfig;
pub use error::{ChiplistError, Result};
pub use filter::{filter_items, matches};
pub use models::Item;
pub use source::{FileItemSource, HttpItemSource, ItemSource, StaticItemSource};
pub use state::{Command, Effect, SelectionState, Transition};

use std::fmt;

use serde::{Deserialize, Serialize};

/// A selectable record as served by the item endpoint.
///
/// `id` is the identity used everywhere in the selection state; two items with
/// the same id are the same item regardless of `name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
}

impl Item {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

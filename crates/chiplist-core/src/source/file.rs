use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::info;

use crate::error::Result;
use crate::models::Item;
use crate::source::ItemSource;

/// Reads the item list from a JSON file shaped like the HTTP response.
pub struct FileItemSource {
    path: PathBuf,
}

impl FileItemSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl ItemSource for FileItemSource {
    fn name(&self) -> &str {
        "file"
    }

    async fn fetch_items(&self) -> Result<Vec<Item>> {
        info!(path = %self.path.display(), "reading items");
        let data = tokio::fs::read(&self.path).await?;
        Ok(serde_json::from_slice(&data)?)
    }
}

//! Item sources: where the selectable items come from.

pub mod file;
pub mod http;

use async_trait::async_trait;

use crate::config::AppConfig;
use crate::error::Result;
use crate::models::Item;

pub use file::FileItemSource;
pub use http::HttpItemSource;

/// Provider of the full, ordered item list. Fetched once per session.
#[async_trait]
pub trait ItemSource: Send + Sync {
    fn name(&self) -> &str;

    async fn fetch_items(&self) -> Result<Vec<Item>>;
}

/// Fixed in-memory list.
#[derive(Debug, Clone, Default)]
pub struct StaticItemSource {
    items: Vec<Item>,
}

impl StaticItemSource {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }
}

#[async_trait]
impl ItemSource for StaticItemSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_items(&self) -> Result<Vec<Item>> {
        Ok(self.items.clone())
    }
}

/// Pick the source described by `config`: a local file if `source.items_file`
/// is set, otherwise the HTTP endpoint.
pub fn from_config(config: &AppConfig) -> Result<Box<dyn ItemSource>> {
    if let Some(path) = &config.source.items_file {
        return Ok(Box::new(FileItemSource::new(path)));
    }
    let source = HttpItemSource::new(&config.endpoint_url(), config.request_timeout())?;
    Ok(Box::new(source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_source_returns_items_in_order() {
        let items = vec![Item::new(2, "Banana"), Item::new(1, "Apple")];
        let source = StaticItemSource::new(items.clone());
        assert_eq!(source.fetch_items().await.unwrap(), items);
        assert_eq!(source.name(), "static");
    }

    #[test]
    fn test_from_config_prefers_items_file() {
        let mut cfg = AppConfig::default();
        cfg.source.items_file = Some("/tmp/items.json".to_string());
        let source = from_config(&cfg).unwrap();
        assert_eq!(source.name(), "file");
    }

    #[test]
    fn test_from_config_defaults_to_http() {
        let source = from_config(&AppConfig::default()).unwrap();
        assert_eq!(source.name(), "http");
    }
}

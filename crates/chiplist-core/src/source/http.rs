use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use tracing::{debug, info};

use crate::error::{ChiplistError, Result};
use crate::models::Item;
use crate::source::ItemSource;

const USER_AGENT: &str = concat!("chiplist/", env!("CARGO_PKG_VERSION"));

/// Fetches the item list with a single `GET` against a JSON endpoint.
///
/// No retries: a failed request is reported once and left to the caller.
pub struct HttpItemSource {
    client: reqwest::Client,
    url: Url,
}

impl HttpItemSource {
    pub fn new(url: &str, timeout: Option<Duration>) -> Result<Self> {
        let url = Url::parse(url).map_err(|e| ChiplistError::InvalidUrl(format!("{url}: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ChiplistError::InvalidUrl(url.to_string()));
        }

        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT).gzip(true);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl ItemSource for HttpItemSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_items(&self) -> Result<Vec<Item>> {
        info!(url = %self.url, "fetching items");
        let resp = self.client.get(self.url.clone()).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ChiplistError::Api(
                self.url.to_string(),
                format!("HTTP {}: {body}", status.as_u16()),
            ));
        }

        let text = resp.text().await?;
        let items: Vec<Item> = serde_json::from_str(&text)?;
        debug!(count = items.len(), "items decoded");
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn test_fetch_items_ok() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/items")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"id":1,"name":"Apple"},{"id":2,"name":"Banana"},{"id":3,"name":"Grape"}]"#)
            .create_async()
            .await;

        let source = HttpItemSource::new(&format!("{}/items", server.url()), None).unwrap();
        let items = source.fetch_items().await.unwrap();
        assert_eq!(
            items,
            vec![
                Item::new(1, "Apple"),
                Item::new(2, "Banana"),
                Item::new(3, "Grape"),
            ]
        );
    }

    #[tokio::test]
    async fn test_fetch_items_server_error() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/items")
            .with_status(503)
            .with_body("down")
            .create_async()
            .await;

        let source = HttpItemSource::new(&format!("{}/items", server.url()), None).unwrap();
        let err = source.fetch_items().await.unwrap_err();
        match err {
            ChiplistError::Api(_, msg) => assert_eq!(msg, "HTTP 503: down"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_items_bad_json() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/items")
            .with_status(200)
            .with_body(r#"{"items":[]}"#)
            .create_async()
            .await;

        let source = HttpItemSource::new(&format!("{}/items", server.url()), None).unwrap();
        assert!(matches!(
            source.fetch_items().await,
            Err(ChiplistError::Json(_))
        ));
    }

    #[test]
    fn test_rejects_non_http_url() {
        assert!(matches!(
            HttpItemSource::new("ftp://example.com/items", None),
            Err(ChiplistError::InvalidUrl(_))
        ));
        assert!(matches!(
            HttpItemSource::new("not a url", None),
            Err(ChiplistError::InvalidUrl(_))
        ));
    }
}

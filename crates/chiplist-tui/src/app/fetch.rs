use std::sync::Arc;

use chiplist_core::ItemSource;
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{info, warn};

use crate::event::AppEvent;

/// Fetch the item list once in the background and post the outcome to the
/// event loop. If the loop is already gone the result is dropped.
pub fn spawn_item_fetch(
    handle: &Handle,
    tx: UnboundedSender<AppEvent>,
    source: Arc<dyn ItemSource>,
) {
    handle.spawn(async move {
        info!(source = source.name(), "item fetch started");
        let result = source.fetch_items().await.map_err(|e| e.to_string());
        if let Err(ref e) = result {
            warn!(source = source.name(), error = %e, "item fetch failed");
        }
        let _ = tx.send(AppEvent::ItemsLoaded(result));
    });
}

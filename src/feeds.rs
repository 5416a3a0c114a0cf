//! Feed sources usable without a media-center host.
//!
//! Fetching and parsing the tagesschau podcast feeds is the host's job. For
//! the command line, items can come from a JSON dump instead.

use crate::error::{AppError, Result};
use crate::navigator::FeedSource;
use crate::types::FeedItem;
use log::debug;
use std::fs;
use std::path::Path;

/// Serves the same pre-fetched items for every feed URL.
#[derive(Debug, Clone, Default)]
pub struct ItemDump {
    items: Vec<FeedItem>,
}

impl ItemDump {
    pub fn new(items: Vec<FeedItem>) -> Self {
        Self { items }
    }

    /// Load a JSON array of items from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let items: Vec<FeedItem> = serde_json::from_str(&content)?;
        debug!("Loaded {} items from {}", items.len(), path.display());
        Ok(Self::new(items))
    }
}

impl FeedSource for ItemDump {
    fn items(&mut self, feed_url: &str) -> Result<Vec<FeedItem>> {
        debug!("Serving {} dumped items for {}", self.items.len(), feed_url);
        Ok(self.items.clone())
    }
}

/// A source that has no feeds at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFeeds;

impl FeedSource for NoFeeds {
    fn items(&mut self, feed_url: &str) -> Result<Vec<FeedItem>> {
        Err(AppError::Feed(format!(
            "no feed source available for {} (pass --items)",
            feed_url
        )))
    }
}

//! Type definitions shared between the navigator and its collaborators.

use crate::tree::{MediaKind, NavNode, NodeParams};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One media item of a feed, as delivered by a [`FeedSource`](crate::navigator::FeedSource).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeedItem {
    /// Title of the item.
    pub name: String,

    /// Publication date, if the feed carries one.
    #[serde(default)]
    pub date: Option<DateTime<FixedOffset>>,

    /// Media URL before quality substitution.
    pub stream_url: String,

    /// Item description, used as the base plot.
    #[serde(default)]
    pub description: Option<String>,

    /// Length in seconds.
    #[serde(default)]
    pub duration: Option<u64>,
}

impl FeedItem {
    pub fn new(name: impl Into<String>, stream_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            date: None,
            stream_url: stream_url.into(),
            description: None,
            duration: None,
        }
    }
}

/// A broadcast entry of a listing.
///
/// In latest-only mode every broadcast shares the address `/latest`, so the
/// entry keeps the node's feed parameters to tell the broadcasts apart.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeEntry {
    pub name: String,
    pub icon: String,
    pub media_kind: MediaKind,
    /// Address to navigate to when the entry is selected.
    pub url: String,
    /// Whether selecting the entry plays media instead of opening a listing.
    pub playable: bool,
    /// Feed action and date format of the node, `None` for the root.
    pub params: Option<NodeParams>,
}

impl NodeEntry {
    /// Entry for `node`, reached at `url`.
    pub fn from_node(node: &NavNode, url: String) -> Self {
        Self {
            name: node.name.clone(),
            icon: node.icon.clone(),
            media_kind: node.media_kind,
            url,
            playable: node.is_leaf(),
            params: node.params.clone(),
        }
    }

    pub fn date_format(&self) -> &str {
        self.params.as_ref().map(|p| p.date_format.as_str()).unwrap_or("")
    }
}

/// A playable feed item, ready for the host.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemEntry {
    pub label: String,
    pub plot: String,
    /// Media URL after quality substitution.
    pub stream_url: String,
    pub icon: String,
    pub media_kind: MediaKind,
    pub duration: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_item_deserialization() {
        let json = r#"{
            "name": "tagesschau 20:00 Uhr",
            "date": "2024-03-01T20:00:00+01:00",
            "stream_url": "https://example.com/ts.webxl.h264.mp4"
        }"#;

        let item: FeedItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.name, "tagesschau 20:00 Uhr");
        assert!(item.date.is_some());
        assert!(item.description.is_none());
        assert!(item.duration.is_none());
    }

    #[test]
    fn test_node_entry_keeps_params() {
        use crate::quality::QualityTier;
        use crate::registry::{BroadcastDescriptor, Registry};
        use crate::tree::{FeedAction, TreeBuilder};

        let registry = Registry::new(vec![
            BroadcastDescriptor::new("News", "n.jpg")
                .with_audio("a.xml")
                .with_date_format("%Y"),
        ]);
        let root = TreeBuilder::new(registry).build(QualityTier(0), false);
        let entry = NodeEntry::from_node(&root.children()[0], "/latest".to_string());

        assert!(entry.playable);
        assert_eq!(entry.date_format(), "%Y");
        assert_eq!(
            entry.params.map(|p| p.action),
            Some(FeedAction::PlayLatest("a.xml".to_string()))
        );
    }

    #[test]
    fn test_feed_item_without_date() {
        let item: FeedItem =
            serde_json::from_str(r#"{"name": "Old", "stream_url": "x.mp4"}"#).unwrap();
        assert_eq!(item, FeedItem::new("Old", "x.mp4"));
    }
}

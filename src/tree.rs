//! Navigation tree construction.
//!
//! The tree is two levels deep: a root and one node per broadcast that has
//! a usable feed. It is rebuilt on every navigation request from the
//! registry and the two driving settings.

use crate::quality::QualityTier;
use crate::registry::{BroadcastDescriptor, Registry};
use log::debug;

/// Path segment addressing the newest item of a broadcast.
pub const LATEST: &str = "latest";

/// Which host rendering hints an entry gets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Video,
    Audio,
}

/// The feed action attached to a node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeedAction {
    /// List every item of the feed.
    Rss(String),
    /// Play the newest item of the feed.
    PlayLatest(String),
}

impl FeedAction {
    pub fn url(&self) -> &str {
        match self {
            FeedAction::Rss(url) | FeedAction::PlayLatest(url) => url,
        }
    }
}

/// Parameters carried by a broadcast node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeParams {
    pub action: FeedAction,
    pub date_format: String,
}

/// A node of the navigation tree.
#[derive(Clone, Debug, PartialEq)]
pub struct NavNode {
    /// Segment addressing this node among its siblings.
    pub path: String,
    pub name: String,
    pub icon: String,
    pub media_kind: MediaKind,
    /// `None` on the root.
    pub params: Option<NodeParams>,
    /// `Some` on the root and on branches, `None` on leaves.
    pub children: Option<Vec<NavNode>>,
}

impl NavNode {
    fn root(children: Vec<NavNode>) -> Self {
        Self {
            path: String::new(),
            name: String::new(),
            icon: String::new(),
            media_kind: MediaKind::Video,
            params: None,
            children: Some(children),
        }
    }

    fn broadcast(
        index: usize,
        broadcast: &BroadcastDescriptor,
        media_kind: MediaKind,
        url: &str,
        latest_only: bool,
    ) -> Self {
        let (path, action, children) = if latest_only {
            (LATEST.to_string(), FeedAction::PlayLatest(url.to_string()), None)
        } else {
            (index.to_string(), FeedAction::Rss(url.to_string()), Some(Vec::new()))
        };

        Self {
            path,
            name: broadcast.name.clone(),
            icon: broadcast.icon.clone(),
            media_kind,
            params: Some(NodeParams {
                action,
                date_format: broadcast.date_format.clone(),
            }),
            children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    pub fn children(&self) -> &[NavNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// The first child whose path equals `segment`.
    pub fn child(&self, segment: &str) -> Option<&NavNode> {
        self.children().iter().find(|n| n.path == segment)
    }

    pub fn date_format(&self) -> &str {
        self.params.as_ref().map(|p| p.date_format.as_str()).unwrap_or("")
    }
}

/// Builds navigation trees from a registry.
#[derive(Clone, Debug)]
pub struct TreeBuilder {
    registry: Registry,
}

impl TreeBuilder {
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Build the tree for the given settings.
    ///
    /// Branch paths are registry positions, so a skipped broadcast still
    /// consumes its index and addresses stay stable across settings.
    pub fn build(&self, quality: QualityTier, archive_mode: bool) -> NavNode {
        let mut nodes = Vec::with_capacity(self.registry.len());

        for (index, broadcast) in self.registry.broadcasts().iter().enumerate() {
            let selected = match (&broadcast.video_url, &broadcast.audio_url) {
                (Some(video), _) if !quality.is_audio_only() => Some((MediaKind::Video, video)),
                (_, Some(audio)) => Some((MediaKind::Audio, audio)),
                _ => None,
            };

            match selected {
                Some((kind, url)) => {
                    nodes.push(NavNode::broadcast(index, broadcast, kind, url, !archive_mode))
                }
                None => debug!("Skipping '{}': no feed for tier {}", broadcast.name, quality),
            }
        }

        NavNode::root(nodes)
    }
}

//! Request handling: consent, tree, path, listing.
//!
//! A [`Navigator`] owns the registry and the host collaborators. Every call
//! reads the settings again and builds a fresh tree, so nothing from one
//! request leaks into the next.

use crate::browse::{child_url, resolve};
use crate::consent::{ConsentGate, Prompt};
use crate::error::Result;
use crate::label::{base_plot, label, plot};
use crate::quality::{QualityTier, rewrite};
use crate::registry::Registry;
use crate::settings::{BrowseSettings, SettingsStore};
use crate::tree::{FeedAction, NavNode, TreeBuilder};
use crate::types::{FeedItem, ItemEntry, NodeEntry};
use log::{debug, info};

/// Delivers the items of a syndication feed, newest first.
pub trait FeedSource {
    fn items(&mut self, feed_url: &str) -> Result<Vec<FeedItem>>;
}

/// Receives the entries of one listing.
pub trait ListRenderer {
    fn add_node(&mut self, entry: &NodeEntry);
    fn add_item(&mut self, entry: &ItemEntry);
    /// `update_listing` replaces the current listing instead of pushing a new one.
    fn end_of_listing(&mut self, update_listing: bool);
}

/// Summary of a rendered listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Listing {
    pub entries: usize,
    /// False when the path stopped at an ancestor.
    pub complete: bool,
}

/// What [`Navigator::open`] did with a path.
#[derive(Debug, Clone, PartialEq)]
pub enum Opened {
    Listing(Listing),
    /// The newest item of a broadcast, `None` for an empty feed.
    Play(Option<ItemEntry>),
}

pub struct Navigator<S, F, R> {
    builder: TreeBuilder,
    pub settings: S,
    pub feeds: F,
    pub renderer: R,
}

impl<S, F, R> Navigator<S, F, R>
where
    S: SettingsStore,
    F: FeedSource,
    R: ListRenderer,
{
    pub fn new(registry: Registry, settings: S, feeds: F, renderer: R) -> Self {
        Self {
            builder: TreeBuilder::new(registry),
            settings,
            feeds,
            renderer,
        }
    }

    /// Run the disclaimer gate. Navigation should stop on `false`.
    pub fn check_consent(&mut self, prompt: &mut dyn Prompt) -> bool {
        ConsentGate::new(&mut self.settings, prompt).check()
    }

    /// Build the tree for the current settings.
    pub fn tree(&self) -> (NavNode, BrowseSettings) {
        let settings = BrowseSettings::read(&self.settings);
        debug!(
            "Building tree: quality {}, archive {}",
            settings.quality, settings.archive
        );
        (self.builder.build(settings.quality, settings.archive), settings)
    }

    /// The entries listed below `path`, without rendering them.
    pub fn entries(&self, path: &str) -> (Vec<NodeEntry>, bool) {
        let (root, _) = self.tree();
        let resolution = resolve(&root, path);
        let entries = resolution
            .node
            .children()
            .iter()
            .map(|child| NodeEntry::from_node(child, child_url(path, &child.path)))
            .collect();
        (entries, resolution.is_complete())
    }

    /// List the children of the node addressed by `path`.
    pub fn route(&mut self, path: &str) -> Listing {
        self.route_with(path, false)
    }

    pub fn route_with(&mut self, path: &str, update_listing: bool) -> Listing {
        let listing = self.list_children(path);
        self.renderer.end_of_listing(update_listing);
        listing
    }

    /// Resolve `path` and act on the node: list broadcasts, list a feed,
    /// or fetch the newest item to play.
    ///
    /// Leaves all share the address `/latest`; use [`Navigator::open_entry`]
    /// with a listed entry to reach a specific broadcast.
    pub fn open(&mut self, path: &str) -> Result<Opened> {
        let (root, _) = self.tree();
        let resolution = resolve(&root, path);
        let entry = NodeEntry::from_node(resolution.node, path.to_string());

        let mut opened = self.open_entry(&entry)?;
        if let Opened::Listing(listing) = &mut opened {
            listing.complete &= resolution.is_complete();
        }
        Ok(opened)
    }

    /// Act on a listed entry using the feed parameters it carries.
    pub fn open_entry(&mut self, entry: &NodeEntry) -> Result<Opened> {
        let quality = BrowseSettings::read(&self.settings).quality;

        match entry.params.as_ref().map(|p| &p.action) {
            Some(FeedAction::PlayLatest(_)) => {
                Ok(Opened::Play(self.play_latest(entry, quality)?))
            }
            Some(FeedAction::Rss(_)) => Ok(Opened::Listing(self.list_feed(entry, quality)?)),
            None => Ok(Opened::Listing(self.route(&entry.url))),
        }
    }

    /// Render every item of the entry's feed.
    pub fn list_feed(&mut self, entry: &NodeEntry, quality: QualityTier) -> Result<Listing> {
        let Some(params) = &entry.params else {
            return Ok(Listing {
                entries: 0,
                complete: true,
            });
        };

        let items = self.feeds.items(params.action.url())?;
        info!("Listing {} items of '{}'", items.len(), entry.name);

        for item in &items {
            self.renderer.add_item(&item_entry(item, entry, quality));
        }
        self.renderer.end_of_listing(false);

        Ok(Listing {
            entries: items.len(),
            complete: true,
        })
    }

    /// The newest item of the entry's feed, ready to play.
    pub fn play_latest(
        &mut self,
        entry: &NodeEntry,
        quality: QualityTier,
    ) -> Result<Option<ItemEntry>> {
        let Some(params) = &entry.params else {
            return Ok(None);
        };

        let items = self.feeds.items(params.action.url())?;
        let item = items.first().map(|item| item_entry(item, entry, quality));
        match &item {
            Some(e) => info!("Playing {}", e.stream_url),
            None => info!("Feed of '{}' is empty", entry.name),
        }
        Ok(item)
    }

    fn list_children(&mut self, path: &str) -> Listing {
        let (entries, complete) = self.entries(path);
        for entry in &entries {
            self.renderer.add_node(entry);
        }

        Listing {
            entries: entries.len(),
            complete,
        }
    }
}

/// A feed item decorated for the entry it was listed under.
pub fn item_entry(item: &FeedItem, entry: &NodeEntry, quality: QualityTier) -> ItemEntry {
    let date_format = entry.date_format();
    ItemEntry {
        label: label(item, date_format),
        plot: plot(item, date_format, base_plot(item)),
        stream_url: rewrite(&item.stream_url, quality),
        icon: entry.icon.clone(),
        media_kind: entry.media_kind,
        duration: item.duration,
    }
}

//! A catalog navigator for the ARD tagesschau podcast feeds.
//!
//! ard-aktuell turns a static broadcast registry into a two-level menu,
//! resolves menu positions from slash-delimited paths, and rewrites media
//! URLs to the variant matching the selected quality tier.
//!
//! # Features
//!
//! - Latest-item or full-archive browsing per broadcast
//! - Video quality tiers (`webxl` down to `webs`) or audio only
//! - Date-decorated labels and descriptions
//! - One-time disclaimer agreement
//!
//! The host (settings, feed fetching, dialogs, list rendering) is reached
//! through small traits, so the core does no I/O of its own.
//!
//! # Usage
//!
//! ```bash
//! # List the broadcasts
//! cargo run
//!
//! # Browse the archive of the Tagesthemen in audio quality
//! cargo run -- --archive true --quality 4 --items items.json /3
//!
//! # Play the latest item of the third listed broadcast, ignoring a stored
//! # archive setting
//! cargo run -- --archive false --items items.json --entry 2 /
//! ```

pub mod browse;
pub mod config;
pub mod consent;
pub mod error;
pub mod feeds;
pub mod label;
pub mod navigator;
pub mod quality;
pub mod registry;
pub mod settings;
pub mod tree;
pub mod types;
pub mod ui;

//! Labels and descriptions for feed items.
//!
//! Both are built in two steps: the undecorated text, then an optional date
//! decoration applied only when the node has a date format and the item has
//! a date.

use crate::types::FeedItem;
use chrono::format::{Item, StrftimeItems};
use log::warn;

/// Display label of an item: `"{name} ({date})"` or just the name.
pub fn label(item: &FeedItem, date_format: &str) -> String {
    match formatted_date(item, date_format) {
        Some(date) => format!("{} ({})", item.name, date),
        None => item.name.clone(),
    }
}

/// Description of an item: `base_plot` followed by the date on its own paragraph.
pub fn plot(item: &FeedItem, date_format: &str, base_plot: &str) -> String {
    match formatted_date(item, date_format) {
        Some(date) => format!("{}\n\n{}", base_plot, date),
        None => base_plot.to_string(),
    }
}

/// The base plot of an item, before any decoration.
pub fn base_plot(item: &FeedItem) -> &str {
    item.description.as_deref().unwrap_or("")
}

/// The item date rendered with `date_format`, if both are present.
///
/// Patterns chrono cannot parse count as empty.
pub fn formatted_date(item: &FeedItem, date_format: &str) -> Option<String> {
    if date_format.is_empty() {
        return None;
    }
    let date = item.date?;

    if StrftimeItems::new(date_format).any(|i| matches!(i, Item::Error)) {
        warn!("Ignoring invalid date format '{}'", date_format);
        return None;
    }

    Some(date.format(date_format).to_string())
}

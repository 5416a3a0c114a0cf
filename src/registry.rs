//! The broadcast registry.
//!
//! A registry is an immutable, ordered list of broadcasts. It is handed to
//! the tree builder as a value, so independent navigators (and tests) can
//! each carry their own.

use serde::{Deserialize, Serialize};

const TAGESSCHAU_ICON: &str = "https://images.tagesschau.de/image/eb0b0d74-03ac-45ec-9300-0851fd6823d3/AAABiE1u1f0/AAABg8tMMaM/1x1-1400/sendungslogo-tagesschau-100.jpg";

/// A named recurring program and its syndication feeds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BroadcastDescriptor {
    /// Display name of the broadcast.
    pub name: String,

    /// URL of the broadcast logo.
    pub icon: String,

    /// Feed URL of the video variant.
    #[serde(default)]
    pub video_url: Option<String>,

    /// Feed URL of the audio variant.
    #[serde(default)]
    pub audio_url: Option<String>,

    /// strftime pattern for item dates. Empty disables the date suffix.
    #[serde(default)]
    pub date_format: String,
}

impl BroadcastDescriptor {
    /// Create a descriptor without feeds and without a date format.
    pub fn new(name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            video_url: None,
            audio_url: None,
            date_format: String::new(),
        }
    }

    pub fn with_video(mut self, url: impl Into<String>) -> Self {
        self.video_url = Some(url.into());
        self
    }

    pub fn with_audio(mut self, url: impl Into<String>) -> Self {
        self.audio_url = Some(url.into());
        self
    }

    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }
}

/// Ordered, read-only list of broadcasts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Registry {
    broadcasts: Vec<BroadcastDescriptor>,
}

impl Registry {
    pub fn new(broadcasts: Vec<BroadcastDescriptor>) -> Self {
        Self { broadcasts }
    }

    /// The ARD news broadcasts shipped with the application.
    pub fn builtin() -> Self {
        Self::new(vec![
            BroadcastDescriptor::new("ARD Tagesschau um 20 Uhr", TAGESSCHAU_ICON)
                .with_video("https://www.tagesschau.de/multimedia/sendung/tagesschau_20_uhr/podcast-ts2000-video-100~podcast.xml")
                .with_audio("https://www.tagesschau.de/multimedia/sendung/tagesschau_20_uhr/podcast-ts2000-audio-100~podcast.xml")
                .with_date_format("%d.%m.%Y"),
            BroadcastDescriptor::new(
                "ARD Tagesschau um 20 Uhr mit Gebärdensprache",
                TAGESSCHAU_ICON,
            )
            .with_video("https://www.tagesschau.de/multimedia/sendung/tagesschau_mit_gebaerdensprache/podcast-tsg-100~podcast.xml")
            .with_date_format("%d.%m.%Y"),
            BroadcastDescriptor::new(
                "ARD Tagesschau in 100 Sekunden",
                "https://images.tagesschau.de/image/559ce6ba-91f3-495c-b36d-77115c440dd0/AAABiE1fSSM/AAABg8tMMaM/1x1-1400/sendungslogo-tsh-100.jpg",
            )
            .with_video("https://www.tagesschau.de/multimedia/sendung/tagesschau_in_100_sekunden/podcast-ts100-video-100~podcast.xml")
            .with_audio("https://www.tagesschau.de/multimedia/sendung/tagesschau_in_100_sekunden/podcast-ts100-audio-100~podcast.xml")
            .with_date_format("%d.%m.%Y %H:%M"),
            BroadcastDescriptor::new(
                "ARD Tagesthemen",
                "https://images.tagesschau.de/image/6b0ab906-0dcf-432f-807c-1d10f8a0a73a/AAABiE1uG-U/AAABg8tMMaM/1x1-1400/sendungslogo-tagesthemen-100.jpg",
            )
            .with_video("https://www.tagesschau.de/multimedia/sendung/tagesthemen/podcast-tt-video-100~podcast.xml")
            .with_audio("https://www.tagesschau.de/multimedia/sendung/tagesthemen/podcast-tt-audio-100~podcast.xml")
            .with_date_format("%d.%m.%Y"),
            BroadcastDescriptor::new(
                "15 Minuten. Der tagesschau-Podcast am Morgen",
                "https://images.tagesschau.de/image/5eb354fe-6af8-421f-8fa7-9d3672600d2e/AAABj4DbyB8/AAABjwnlOg4/1x1-1400/podcast-15-minuten-cover-100.jpg?overlay=542c7aa9-161c-48e8-a1cc-e49f9c91d757&overlayModificationDate=AAABgSP-H5A",
            )
            .with_audio("https://www.tagesschau.de/multimedia/podcast/15-minuten/index~podcast.xml")
            .with_date_format("%d.%m.%Y"),
            // No reliable air date on this feed, so no date suffix.
            BroadcastDescriptor::new(
                "ARD Tagesschau vor 20 Jahren",
                "https://images.tagesschau.de/image/2a6f7e91-d939-4fde-98b8-9d7fb54be721/AAABiB8Zoe4/AAABg8tMMaM/1x1-1400/tagesschau-logo-105.jpg",
            )
            .with_video("https://www.tagesschau.de/multimedia/sendung/tagesschau_vor_20_jahren/podcast-tsv20-video-100~podcast.xml")
            .with_audio("https://www.tagesschau.de/multimedia/sendung/tagesschau_vor_20_jahren/podcast-tsv20-audio-100~podcast.xml"),
            BroadcastDescriptor::new(
                "ARD Mal angenommen...",
                "https://images.tagesschau.de/image/d5f4c036-3eca-4b59-9a11-1acd53814639/AAABiB7_Ajo/AAABg8tMMaM/1x1-1400/podcast-mal-angenommen-102.jpg",
            )
            .with_audio("https://www.tagesschau.de/multimedia/podcast/malangenommen/mal-angenommen-feed-101~podcast.xml")
            .with_date_format("%d.%m.%Y"),
            BroadcastDescriptor::new(
                "Ideenimport",
                "https://images.tagesschau.de/image/ab2459a5-283e-41be-ad3f-5e323ffb7c5a/AAABiGJ5xhQ/AAABg8tMMaM/1x1-1400/podcast-ideenimport-104.jpg",
            )
            .with_audio("https://www.tagesschau.de/multimedia/podcast/ideenimport/ideenimport-feed-105~podcast.xml")
            .with_date_format("%d.%m.%Y"),
        ])
    }

    pub fn broadcasts(&self) -> &[BroadcastDescriptor] {
        &self.broadcasts
    }

    pub fn len(&self) -> usize {
        self.broadcasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.broadcasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry_has_every_broadcast() {
        let registry = Registry::builtin();
        assert_eq!(registry.len(), 8);
        assert_eq!(registry.broadcasts()[0].name, "ARD Tagesschau um 20 Uhr");
        assert_eq!(registry.broadcasts()[7].name, "Ideenimport");
    }

    #[test]
    fn test_builtin_descriptors_have_a_feed() {
        for broadcast in Registry::builtin().broadcasts() {
            assert!(
                broadcast.video_url.is_some() || broadcast.audio_url.is_some(),
                "{} has no feed",
                broadcast.name
            );
        }
    }

    #[test]
    fn test_twenty_years_ago_has_no_date_format() {
        let registry = Registry::builtin();
        let old = &registry.broadcasts()[5];
        assert!(old.name.contains("vor 20 Jahren"));
        assert!(old.date_format.is_empty());
    }

    #[test]
    fn test_builder_sets_fields() {
        let broadcast = BroadcastDescriptor::new("News", "icon.jpg")
            .with_audio("a.xml")
            .with_date_format("%Y");
        assert_eq!(broadcast.video_url, None);
        assert_eq!(broadcast.audio_url.as_deref(), Some("a.xml"));
        assert_eq!(broadcast.date_format, "%Y");
    }

    #[test]
    fn test_descriptor_deserialization_defaults() {
        let broadcast: BroadcastDescriptor =
            toml::from_str("name = \"News\"\nicon = \"i.jpg\"\naudio_url = \"a.xml\"").unwrap();
        assert!(broadcast.video_url.is_none());
        assert!(broadcast.date_format.is_empty());
    }
}

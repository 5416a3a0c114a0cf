//! Quality tier selection for media URLs.
//!
//! The ARD feeds publish one URL per item, but every quality variant lives
//! next to it under the same name with a different token right before the
//! extension (`...-100.webxl.mp4`, `...-100.webm.mp4`). Rewriting the token
//! picks the variant without asking the server for it.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Video quality tokens, indexed by tier.
pub const QUALITY_TOKENS: [&str; 4] = ["webxl", "webl", "webm", "webs"];

/// First tier that means "audio only".
pub const AUDIO_ONLY_TIER: u32 = 4;

static QUALITY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+\.)(webxl|webl|webm|webs)(\..+)$").expect("quality pattern is valid")
});

/// A user-selected quality tier.
///
/// Tiers 0 to 3 are video in descending resolution; 4 and above is audio.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct QualityTier(pub u32);

impl QualityTier {
    pub const AUDIO: QualityTier = QualityTier(AUDIO_ONLY_TIER);

    pub fn is_audio_only(self) -> bool {
        self.0 >= AUDIO_ONLY_TIER
    }

    /// The filename token for this tier, `None` for audio tiers.
    ///
    /// ```
    /// use ard_aktuell::quality::QualityTier;
    ///
    /// assert_eq!(QualityTier(0).token(), Some("webxl"));
    /// assert_eq!(QualityTier(3).token(), Some("webs"));
    /// assert_eq!(QualityTier(4).token(), None);
    /// ```
    pub fn token(self) -> Option<&'static str> {
        QUALITY_TOKENS.get(self.0 as usize).copied()
    }

    /// Parse a stored setting value. Malformed values fall back to tier 0.
    pub fn from_setting(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(raw) => raw.parse().map(QualityTier).unwrap_or_else(|_| {
                log::warn!("Invalid quality setting '{}', using tier 0", raw);
                QualityTier::default()
            }),
            None => QualityTier::default(),
        }
    }
}

impl fmt::Display for QualityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.token() {
            Some(token) => write!(f, "{} ({})", self.0, token),
            None => write!(f, "{} (audio)", self.0),
        }
    }
}

/// Rewrite `stream_url` to the variant for `tier`.
///
/// URLs without a quality token, and every audio tier, pass through.
///
/// ```
/// use ard_aktuell::quality::{rewrite, QualityTier};
///
/// let url = "https://media.example/ts2000-video-100.webxl.mp4";
/// assert_eq!(
///     rewrite(url, QualityTier(2)),
///     "https://media.example/ts2000-video-100.webm.mp4"
/// );
/// assert_eq!(rewrite(url, QualityTier::AUDIO), url);
/// ```
pub fn rewrite(stream_url: &str, tier: QualityTier) -> String {
    let Some(token) = tier.token() else {
        return stream_url.to_string();
    };

    match QUALITY_PATTERN.captures(stream_url) {
        Some(caps) => format!("{}{}{}", &caps[1], token, &caps[3]),
        None => stream_url.to_string(),
    }
}

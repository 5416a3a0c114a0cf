//! The one-time disclaimer gate.

use crate::settings::{AGREEMENT, SettingsStore};
use log::{info, warn};

/// Heading of the disclaimer dialog.
pub const DISCLAIMER_HEADING: &str = "Disclaimer";

/// Body of the disclaimer dialog.
pub const DISCLAIMER_BODY: &str = "This add-on is not an official product of ARD or tagesschau.de. \
It only plays the public podcast feeds published at tagesschau.de. Do you agree?";

/// A yes/no question put to the user.
pub trait Prompt {
    fn confirm(&mut self, heading: &str, body: &str) -> bool;
}

/// Agreement state as persisted in the settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsentState {
    Unknown,
    Agreed,
}

impl ConsentState {
    pub fn read(settings: &dyn SettingsStore) -> Self {
        if settings.get(AGREEMENT).as_deref() == Some("1") {
            ConsentState::Agreed
        } else {
            ConsentState::Unknown
        }
    }
}

/// Asks for the disclaimer agreement until the user accepts it once.
pub struct ConsentGate<'a> {
    settings: &'a mut dyn SettingsStore,
    prompt: &'a mut dyn Prompt,
}

impl<'a> ConsentGate<'a> {
    pub fn new(settings: &'a mut dyn SettingsStore, prompt: &'a mut dyn Prompt) -> Self {
        Self { settings, prompt }
    }

    /// Whether navigation may proceed.
    ///
    /// A decline persists nothing, so the question comes back next time.
    pub fn check(&mut self) -> bool {
        if ConsentState::read(&*self.settings) == ConsentState::Agreed {
            return true;
        }

        if !self.prompt.confirm(DISCLAIMER_HEADING, DISCLAIMER_BODY) {
            info!("Disclaimer declined");
            return false;
        }

        if let Err(e) = self.settings.set(AGREEMENT, "1") {
            warn!("Failed to store disclaimer agreement: {}", e);
        }
        true
    }
}

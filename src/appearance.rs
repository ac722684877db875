//! Host appearance change detection.
//!
//! The host reports its light/dark preference as a polled value (egui exposes
//! it through raw input every frame). [`AppearanceWatcher`] turns that value
//! into change notifications: it reports a new [`ThemeMode`] only when the
//! host preference differs from the last one seen, and only while subscribed.

use crate::theme::ThemeMode;

#[derive(Debug, Clone, Default)]
pub struct AppearanceWatcher {
    subscribed: bool,
    last_seen: Option<ThemeMode>,
}

impl AppearanceWatcher {
    /// Creates a watcher subscribed to host changes.
    ///
    /// `initial` is the host preference at startup; it is the baseline and is
    /// not reported as a change.
    pub fn subscribe(initial: Option<ThemeMode>) -> Self {
        Self {
            subscribed: true,
            last_seen: initial,
        }
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    /// Stops delivering notifications.
    pub fn unsubscribe(&mut self) {
        self.subscribed = false;
    }

    /// Feeds the current host preference and returns it if it changed.
    ///
    /// A host that stops reporting a preference (`None`) is not a change.
    pub fn observe(&mut self, host: Option<ThemeMode>) -> Option<ThemeMode> {
        if !self.subscribed {
            return None;
        }
        let mode = host?;
        if self.last_seen == Some(mode) {
            return None;
        }
        self.last_seen = Some(mode);
        Some(mode)
    }
}

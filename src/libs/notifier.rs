//! Desktop notification capability.
//!
//! Notifications are best-effort: a missing notification daemon or an
//! unsupported platform must never fail a focus session. The engine driver
//! depends on the `Notifier` trait so tests can substitute a double that
//! records calls instead of touching the platform facility.

use crate::libs::messages::Message;
use crate::msg_debug;
use notify_rust::Notification;

pub trait Notifier {
    /// Fire-and-forget notification. Implementations swallow failures.
    fn notify(&self, title: &str, body: &str);
}

/// Platform notifier backed by the desktop notification facility.
pub struct DesktopNotifier;

impl Notifier for DesktopNotifier {
    fn notify(&self, title: &str, body: &str) {
        if let Err(e) = Notification::new().summary(title).body(body).appname("tempo").show() {
            msg_debug!(Message::NotificationFailed(e.to_string()));
        }
    }
}

/// Notifier that does nothing, used when notifications are disabled.
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&self, _title: &str, _body: &str) {}
}

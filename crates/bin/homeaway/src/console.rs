//! Plain console sink — one line per notification on stdout.

use homeaway_app::ports::NotificationSink;
use homeaway_domain::notification::Notification;

#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl NotificationSink for ConsoleSink {
    fn notify(&self, notification: Notification) {
        println!("{notification}");
    }
}

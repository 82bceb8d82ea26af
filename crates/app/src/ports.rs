//! Port definitions — the boundary notifications leave the core through.

use std::rc::Rc;

use homeaway_domain::notification::Notification;

/// Receives notifications in the order they are produced.
pub trait NotificationSink {
    /// Deliver a single notification.
    fn notify(&self, notification: Notification);

    /// Deliver a notification if there is one.
    fn notify_opt(&self, notification: Option<Notification>) {
        if let Some(notification) = notification {
            self.notify(notification);
        }
    }
}

impl<T: NotificationSink + ?Sized> NotificationSink for &T {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification);
    }
}

impl<T: NotificationSink + ?Sized> NotificationSink for Rc<T> {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification);
    }
}

impl<T: NotificationSink + ?Sized> NotificationSink for Box<T> {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification);
    }
}

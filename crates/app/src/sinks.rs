//! In-process notification sinks.

use std::cell::RefCell;

use homeaway_domain::notification::Notification;
use homeaway_domain::time::{Timestamp, now};

use crate::ports::NotificationSink;

/// Emits each notification as an `info` tracing event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, notification: Notification) {
        tracing::info!(
            device_id = %notification.device_id,
            device_name = %notification.device_name,
            "{notification}"
        );
    }
}

/// A notification together with the moment it was delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recorded {
    pub at: Timestamp,
    pub notification: Notification,
}

/// Keeps every notification in memory, in delivery order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    entries: RefCell<Vec<Recorded>>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    #[cfg(test)]
    pub(crate) fn entries(&self) -> Vec<Recorded> {
        self.entries.borrow().clone()
    }

    /// Rendered lines, oldest first.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .map(|entry| entry.notification.to_string())
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, notification: Notification) {
        self.entries.borrow_mut().push(Recorded {
            at: now(),
            notification,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    use homeaway_domain::device::PowerState;
    use homeaway_domain::id::DeviceId;
    use homeaway_domain::notification::NotificationKind;

    fn state_notice(name: &str, state: PowerState) -> Notification {
        Notification::new(
            DeviceId::from_raw(0),
            name,
            NotificationKind::StateChanged { state },
        )
    }

    #[test]
    fn should_record_in_delivery_order() {
        let sink = RecordingSink::new();
        sink.notify(state_notice("A", PowerState::On));
        sink.notify(state_notice("B", PowerState::Off));

        assert_eq!(
            sink.lines(),
            ["A state changed to on.", "B state changed to off."]
        );
    }

    #[test]
    fn should_stamp_entries_in_non_decreasing_order() {
        let sink = RecordingSink::new();
        sink.notify(state_notice("A", PowerState::On));
        sink.notify(state_notice("A", PowerState::Off));

        let entries = sink.entries();
        assert!(entries[0].at <= entries[1].at);
    }

    #[test]
    fn should_skip_missing_notification() {
        let sink = RecordingSink::new();
        sink.notify_opt(None);
        assert!(sink.is_empty());

        sink.notify_opt(Some(state_notice("A", PowerState::On)));
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn should_deliver_through_borrowed_sink() {
        let sink = RecordingSink::new();
        let borrowed: &dyn NotificationSink = &sink;
        borrowed.notify(state_notice("A", PowerState::On));
        assert_eq!(sink.len(), 1);
    }

    #[derive(Clone, Default)]
    struct CapturedOutput(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedOutput {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn should_log_notification_with_device_fields() {
        let output = CapturedOutput::default();
        let writer = output.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .without_time()
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let notice = Notification::new(
                DeviceId::from_raw(4),
                "Porch",
                NotificationKind::StateChanged {
                    state: PowerState::On,
                },
            );
            TracingSink.notify(notice);
        });

        let logged = String::from_utf8(output.0.lock().unwrap().clone()).unwrap();
        assert!(logged.contains("INFO"));
        assert!(logged.contains("Porch state changed to on."));
        assert!(logged.contains("device_id=4"));
        assert!(logged.contains("device_name=Porch"));
    }
}

//! Notification — the one-line record produced by every device mutation.
//!
//! The rendered form (`Display`) is the externally visible contract:
//!
//! | Kind | Line |
//! |------|------|
//! | state | `<name> state changed to <on\|off>.` |
//! | brightness | `<name> brightness set to <value>.` |
//! | lift level | `<name> blinds lift level set to <value>.` |
//! | mode | `<name> mode changed to <mode>.` |
//! | alarm | `Alarm activated in <name>!` |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::device::PowerState;
use crate::id::DeviceId;

/// What changed on the device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NotificationKind {
    StateChanged { state: PowerState },
    BrightnessChanged { brightness: i64 },
    LiftLevelChanged { lift_level: i64 },
    ModeChanged { mode: String },
    AlarmActivated,
}

/// A single mutation notice emitted by a device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub device_id: DeviceId,
    pub device_name: String,
    #[serde(flatten)]
    pub kind: NotificationKind,
}

impl Notification {
    #[must_use]
    pub fn new(device_id: DeviceId, device_name: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            device_id,
            device_name: device_name.into(),
            kind,
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = &self.device_name;
        match &self.kind {
            NotificationKind::StateChanged { state } => {
                write!(f, "{name} state changed to {state}.")
            }
            NotificationKind::BrightnessChanged { brightness } => {
                write!(f, "{name} brightness set to {brightness}.")
            }
            NotificationKind::LiftLevelChanged { lift_level } => {
                write!(f, "{name} blinds lift level set to {lift_level}.")
            }
            NotificationKind::ModeChanged { mode } => write!(f, "{name} mode changed to {mode}."),
            NotificationKind::AlarmActivated => write!(f, "Alarm activated in {name}!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notice(kind: NotificationKind) -> Notification {
        Notification::new(DeviceId::from_raw(1), "Hall", kind)
    }

    #[test]
    fn should_render_state_change() {
        let n = notice(NotificationKind::StateChanged {
            state: PowerState::On,
        });
        assert_eq!(n.to_string(), "Hall state changed to on.");
    }

    #[test]
    fn should_render_brightness_change() {
        let n = notice(NotificationKind::BrightnessChanged { brightness: 75 });
        assert_eq!(n.to_string(), "Hall brightness set to 75.");
    }

    #[test]
    fn should_render_lift_level_change() {
        let n = notice(NotificationKind::LiftLevelChanged { lift_level: 0 });
        assert_eq!(n.to_string(), "Hall blinds lift level set to 0.");
    }

    #[test]
    fn should_render_mode_change() {
        let n = notice(NotificationKind::ModeChanged {
            mode: "Armed".to_string(),
        });
        assert_eq!(n.to_string(), "Hall mode changed to Armed.");
    }

    #[test]
    fn should_render_alarm_activation() {
        let n = notice(NotificationKind::AlarmActivated);
        assert_eq!(n.to_string(), "Alarm activated in Hall!");
    }

    #[test]
    fn should_serialize_with_flattened_kind_tag() {
        let n = notice(NotificationKind::BrightnessChanged { brightness: 10 });
        let json = serde_json::to_value(&n).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "device_id": 1,
                "device_name": "Hall",
                "kind": "brightness_changed",
                "brightness": 10
            })
        );
    }
}

//! Alarm system — a device with a named mode.
//!
//! Modes form an open set. Only [`AlarmMode::ARMED`] has behaviour attached:
//! an armed system raises an alarm when triggered. Matching is exact and
//! case-sensitive, so `"armed"` is just another inert mode.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::device::{Device, DeviceCore, PowerState};
use crate::id::DeviceId;
use crate::notification::{Notification, NotificationKind};

/// Free-form alarm mode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlarmMode(String);

impl AlarmMode {
    pub const ARMED: &'static str = "Armed";
    pub const OFF: &'static str = "Off";

    #[must_use]
    pub fn new(mode: impl Into<String>) -> Self {
        Self(mode.into())
    }

    #[must_use]
    pub fn armed() -> Self {
        Self::new(Self::ARMED)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.0 == Self::ARMED
    }
}

impl Default for AlarmMode {
    fn default() -> Self {
        Self::new(Self::OFF)
    }
}

impl From<&str> for AlarmMode {
    fn from(mode: &str) -> Self {
        Self::new(mode)
    }
}

impl From<String> for AlarmMode {
    fn from(mode: String) -> Self {
        Self(mode)
    }
}

impl fmt::Display for AlarmMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An intrusion alarm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmSystem {
    #[serde(flatten)]
    core: DeviceCore,
    mode: AlarmMode,
}

impl AlarmSystem {
    /// Create a builder for an alarm system carrying `id`.
    #[must_use]
    pub fn builder(id: DeviceId) -> AlarmSystemBuilder {
        AlarmSystemBuilder {
            id,
            name: String::new(),
            state: PowerState::default(),
            mode: AlarmMode::default(),
        }
    }

    #[must_use]
    pub fn mode(&self) -> &AlarmMode {
        &self.mode
    }

    /// Overwrite the mode silently.
    pub fn set_mode(&mut self, mode: impl Into<AlarmMode>) {
        self.mode = mode.into();
    }

    #[must_use = "the notification describes the change and should reach a sink"]
    pub fn change_mode(&mut self, mode: impl Into<AlarmMode>) -> Notification {
        self.set_mode(mode);
        self.core.notify(NotificationKind::ModeChanged {
            mode: self.mode.to_string(),
        })
    }

    /// Raise the alarm if the system is armed.
    ///
    /// Returns `None`, without error, when the system is in any other mode.
    #[must_use = "the activation notice should reach a sink"]
    pub fn trigger_alarm(&self) -> Option<Notification> {
        self.mode
            .is_armed()
            .then(|| self.core.notify(NotificationKind::AlarmActivated))
    }
}

impl Device for AlarmSystem {
    fn core(&self) -> &DeviceCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut DeviceCore {
        &mut self.core
    }
}

/// Step-by-step builder for [`AlarmSystem`].
#[derive(Debug)]
pub struct AlarmSystemBuilder {
    id: DeviceId,
    name: String,
    state: PowerState,
    mode: AlarmMode,
}

impl AlarmSystemBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn state(mut self, state: impl Into<PowerState>) -> Self {
        self.state = state.into();
        self
    }

    #[must_use]
    pub fn mode(mut self, mode: impl Into<AlarmMode>) -> Self {
        self.mode = mode.into();
        self
    }

    #[must_use]
    pub fn build(self) -> AlarmSystem {
        AlarmSystem {
            core: DeviceCore::new(self.id, self.name, self.state),
            mode: self.mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alarm() -> AlarmSystem {
        AlarmSystem::builder(DeviceId::from_raw(6))
            .name("Security Alarm")
            .build()
    }

    #[test]
    fn should_default_to_off_mode() {
        assert_eq!(alarm().mode().as_str(), "Off");
        assert!(!alarm().mode().is_armed());
    }

    #[test]
    fn should_report_mode_change() {
        let mut alarm = alarm();
        let n = alarm.change_mode("Armed");
        assert!(alarm.mode().is_armed());
        assert_eq!(n.to_string(), "Security Alarm mode changed to Armed.");
    }

    #[test]
    fn should_activate_when_armed() {
        let mut alarm = alarm();
        let _ = alarm.change_mode(AlarmMode::armed());
        let n = alarm.trigger_alarm().unwrap();
        assert_eq!(n.to_string(), "Alarm activated in Security Alarm!");
    }

    #[test]
    fn should_stay_silent_when_not_armed() {
        assert!(alarm().trigger_alarm().is_none());
    }

    #[test]
    fn should_match_armed_case_sensitively() {
        let mut alarm = alarm();
        let _ = alarm.change_mode("armed");
        assert!(alarm.trigger_alarm().is_none());
    }

    #[test]
    fn should_store_arbitrary_modes() {
        let mut alarm = alarm();
        let _ = alarm.change_mode("Night");
        assert_eq!(alarm.mode().to_string(), "Night");
    }

    #[test]
    fn should_set_mode_without_notification() {
        let mut alarm = alarm();
        alarm.set_mode("Armed");
        assert!(alarm.trigger_alarm().is_some());
    }

    #[test]
    fn should_build_with_initial_mode() {
        let alarm = AlarmSystem::builder(DeviceId::from_raw(1))
            .name("Garage")
            .mode("Armed")
            .state(true)
            .build();
        assert!(alarm.mode().is_armed());
        assert!(alarm.is_on());
    }
}

//! Device — the capability every controllable unit shares.
//!
//! Concrete devices embed a [`DeviceCore`] (identity, name, power state) and
//! implement [`Device`] by exposing it; the on/off operations are provided
//! by the trait so every variant behaves identically.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::id::DeviceId;
use crate::notification::{Notification, NotificationKind};

/// Binary on/off state of a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerState {
    On,
    #[default]
    Off,
}

impl PowerState {
    #[must_use]
    pub fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

impl From<bool> for PowerState {
    fn from(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }
}

impl From<PowerState> for bool {
    fn from(state: PowerState) -> Self {
        state.is_on()
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::On => f.write_str("on"),
            Self::Off => f.write_str("off"),
        }
    }
}

/// Fields common to every device. Identity and name never change after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceCore {
    id: DeviceId,
    name: String,
    state: PowerState,
}

impl DeviceCore {
    #[must_use]
    pub fn new(id: DeviceId, name: impl Into<String>, state: PowerState) -> Self {
        Self {
            id,
            name: name.into(),
            state,
        }
    }

    #[must_use]
    pub fn id(&self) -> DeviceId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn state(&self) -> PowerState {
        self.state
    }

    pub(crate) fn set_state(&mut self, state: PowerState) {
        self.state = state;
    }

    /// Build a notification attributed to this device.
    #[must_use]
    pub fn notify(&self, kind: NotificationKind) -> Notification {
        Notification::new(self.id, self.name.clone(), kind)
    }
}

/// Shared capability set: identity, name, and on/off control.
///
/// Every state-changing call returns its [`Notification`], even when the
/// state did not actually change.
pub trait Device {
    fn core(&self) -> &DeviceCore;

    fn core_mut(&mut self) -> &mut DeviceCore;

    fn id(&self) -> DeviceId {
        self.core().id()
    }

    fn name(&self) -> &str {
        self.core().name()
    }

    fn state(&self) -> PowerState {
        self.core().state()
    }

    fn is_on(&self) -> bool {
        self.state().is_on()
    }

    /// Set the power state unconditionally.
    #[must_use = "the notification describes the change and should reach a sink"]
    fn change_state(&mut self, state: impl Into<PowerState>) -> Notification
    where
        Self: Sized,
    {
        let state = state.into();
        self.core_mut().set_state(state);
        self.core().notify(NotificationKind::StateChanged { state })
    }

    #[must_use = "the notification describes the change and should reach a sink"]
    fn turn_on(&mut self) -> Notification
    where
        Self: Sized,
    {
        self.change_state(PowerState::On)
    }

    #[must_use = "the notification describes the change and should reach a sink"]
    fn turn_off(&mut self) -> Notification
    where
        Self: Sized,
    {
        self.change_state(PowerState::Off)
    }
}

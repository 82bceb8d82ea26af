//! Blind — a window covering with a lift level.
//!
//! `0` is fully lowered and `100` fully lifted. By default any integer is
//! accepted; a blind built with [`BlindBuilder::strict_lift_range`] rejects
//! values outside `0..=100`.

use serde::{Deserialize, Serialize};

use crate::device::{Device, DeviceCore, PowerState};
use crate::error::{OutOfRangeError, SmartHomeError};
use crate::id::DeviceId;
use crate::notification::{Notification, NotificationKind};

pub const LOWERED: i64 = 0;
pub const LIFTED: i64 = 100;

/// A motorised blind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blind {
    #[serde(flatten)]
    core: DeviceCore,
    lift_level: i64,
    #[serde(default)]
    strict: bool,
}

impl Blind {
    /// Create a builder for a blind carrying `id`.
    #[must_use]
    pub fn builder(id: DeviceId) -> BlindBuilder {
        BlindBuilder {
            id,
            name: String::new(),
            state: PowerState::default(),
            lift_level: LOWERED,
            strict: false,
        }
    }

    #[must_use]
    pub fn lift_level(&self) -> i64 {
        self.lift_level
    }

    #[must_use = "the notification describes the change and should reach a sink"]
    pub fn lift(&mut self) -> Notification {
        self.store_lift_level(LIFTED)
    }

    #[must_use = "the notification describes the change and should reach a sink"]
    pub fn lower(&mut self) -> Notification {
        self.store_lift_level(LOWERED)
    }

    /// Move the blind to `value` and report it.
    ///
    /// # Errors
    ///
    /// Only a strict blind fails: [`SmartHomeError::OutOfRange`] when
    /// `value` is outside `0..=100`, keeping the previous level.
    pub fn change_lift_level(&mut self, value: i64) -> Result<Notification, SmartHomeError> {
        if self.strict {
            OutOfRangeError::check("Lift level", value, LOWERED, LIFTED)?;
        }
        Ok(self.store_lift_level(value))
    }

    fn store_lift_level(&mut self, value: i64) -> Notification {
        self.lift_level = value;
        self.core
            .notify(NotificationKind::LiftLevelChanged { lift_level: value })
    }
}

impl Device for Blind {
    fn core(&self) -> &DeviceCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut DeviceCore {
        &mut self.core
    }
}

/// Step-by-step builder for [`Blind`].
#[derive(Debug)]
pub struct BlindBuilder {
    id: DeviceId,
    name: String,
    state: PowerState,
    lift_level: i64,
    strict: bool,
}

impl BlindBuilder {
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
    pub fn lift_level(mut self, lift_level: i64) -> Self {
        self.lift_level = lift_level;
        self
    }

    #[must_use]
    pub fn strict_lift_range(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Consume the builder and return a [`Blind`].
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::OutOfRange`] only for a strict blind whose
    /// initial lift level is outside `0..=100`.
    pub fn build(self) -> Result<Blind, SmartHomeError> {
        if self.strict {
            OutOfRangeError::check("Lift level", self.lift_level, LOWERED, LIFTED)?;
        }
        Ok(Blind {
            core: DeviceCore::new(self.id, self.name, self.state),
            lift_level: self.lift_level,
            strict: self.strict,
        })
    }
}

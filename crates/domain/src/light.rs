//! Light — a dimmable device with a brightness in `0..=100`.

use serde::{Deserialize, Serialize};

use crate::device::{Device, DeviceCore, PowerState};
use crate::error::{OutOfRangeError, SmartHomeError};
use crate::id::DeviceId;
use crate::notification::{Notification, NotificationKind};

pub const MIN_BRIGHTNESS: i64 = 0;
pub const MAX_BRIGHTNESS: i64 = 100;

/// A dimmable light.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Light {
    #[serde(flatten)]
    core: DeviceCore,
    brightness: i64,
}

impl Light {
    /// Create a builder for a light carrying `id`.
    #[must_use]
    pub fn builder(id: DeviceId) -> LightBuilder {
        LightBuilder {
            id,
            name: String::new(),
            state: PowerState::default(),
            brightness: MIN_BRIGHTNESS,
        }
    }

    #[must_use]
    pub fn brightness(&self) -> i64 {
        self.brightness
    }

    /// Store a brightness without emitting a notification.
    ///
    /// Prefer [`change_brightness`](Self::change_brightness); this is the
    /// silent primitive behind it.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::OutOfRange`] when `value` is outside
    /// `0..=100`; the previous brightness is kept.
    pub fn set_brightness(&mut self, value: i64) -> Result<(), SmartHomeError> {
        OutOfRangeError::check("Brightness", value, MIN_BRIGHTNESS, MAX_BRIGHTNESS)?;
        self.brightness = value;
        Ok(())
    }

    /// Set the brightness and report it.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::OutOfRange`] when `value` is outside
    /// `0..=100`; nothing is emitted and the previous brightness is kept.
    pub fn change_brightness(&mut self, value: i64) -> Result<Notification, SmartHomeError> {
        self.set_brightness(value)?;
        Ok(self
            .core
            .notify(NotificationKind::BrightnessChanged { brightness: value }))
    }
}

impl Device for Light {
    fn core(&self) -> &DeviceCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut DeviceCore {
        &mut self.core
    }
}

/// Step-by-step builder for [`Light`].
#[derive(Debug)]
pub struct LightBuilder {
    id: DeviceId,
    name: String,
    state: PowerState,
    brightness: i64,
}

impl LightBuilder {
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
    pub fn brightness(mut self, brightness: i64) -> Self {
        self.brightness = brightness;
        self
    }

    /// Consume the builder and return a [`Light`].
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::OutOfRange`] if the initial brightness is
    /// outside `0..=100`.
    pub fn build(self) -> Result<Light, SmartHomeError> {
        let mut light = Light {
            core: DeviceCore::new(self.id, self.name, self.state),
            brightness: MIN_BRIGHTNESS,
        };
        light.set_brightness(self.brightness)?;
        Ok(light)
    }
}

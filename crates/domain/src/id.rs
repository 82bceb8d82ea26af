//! Device identifiers and the allocator that hands them out.
//!
//! Identifiers are plain integers drawn from a single [`IdAllocator`] shared
//! by every device kind, so a light and a blind never carry the same id.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SmartHomeError;

/// Unique identifier for a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(u64);

impl DeviceId {
    /// Wrap a raw integer.
    ///
    /// Use [`IdAllocator::allocate`] for new devices; this is for lookups
    /// such as deleting by a known id.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Access the inner integer.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for DeviceId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// Monotonic source of [`DeviceId`]s.
///
/// The counter only moves forward: an id stays taken even after the device
/// holding it is dropped. Once `u64::MAX` has been handed out the allocator
/// is exhausted and every further call fails.
#[derive(Debug)]
pub struct IdAllocator {
    next: Option<u64>,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::starting_at(0)
    }
}

impl IdAllocator {
    /// Allocator whose first id is `0`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocator whose first id is `first`.
    #[must_use]
    pub fn starting_at(first: u64) -> Self {
        Self { next: Some(first) }
    }

    /// Take the next id.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::IdSpaceExhausted`] once every `u64` has been
    /// handed out.
    pub fn allocate(&mut self) -> Result<DeviceId, SmartHomeError> {
        let current = self.next.ok_or(SmartHomeError::IdSpaceExhausted)?;
        self.next = current.checked_add(1);
        Ok(DeviceId(current))
    }
}

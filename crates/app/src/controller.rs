//! Home-away controller — the "leave home" routine.
//!
//! Holds three ordered collections of shared device handles and, on
//! [`execute`](HomeAwayController::execute), sweeps them in a fixed order:
//!
//! 1. lights that are on are turned off,
//! 2. blinds above `0` are lowered,
//! 3. alarm systems not in `"Armed"` mode are armed.
//!
//! Devices already in their away posture are left alone and produce no
//! notification. The controller never creates devices; removing one from a
//! collection does not affect other holders of the handle.

use homeaway_domain::alarm::{AlarmMode, AlarmSystem};
use homeaway_domain::blind::Blind;
use homeaway_domain::device::Device;
use homeaway_domain::id::DeviceId;
use homeaway_domain::light::Light;

use crate::ports::NotificationSink;
use crate::shared::Shared;

/// What a single sweep changed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AwaySummary {
    pub lights_turned_off: usize,
    pub blinds_lowered: usize,
    pub alarms_armed: usize,
}

impl AwaySummary {
    /// Total number of devices touched.
    #[must_use]
    pub fn total(&self) -> usize {
        self.lights_turned_off + self.blinds_lowered + self.alarms_armed
    }
}

/// Applies the away policy to the devices it references.
pub struct HomeAwayController<N> {
    lights: Vec<Shared<Light>>,
    blinds: Vec<Shared<Blind>>,
    alarm_systems: Vec<Shared<AlarmSystem>>,
    sink: N,
}

impl<N: NotificationSink> HomeAwayController<N> {
    /// Create a controller over the given collections, reporting to `sink`.
    pub fn new(
        lights: Vec<Shared<Light>>,
        blinds: Vec<Shared<Blind>>,
        alarm_systems: Vec<Shared<AlarmSystem>>,
        sink: N,
    ) -> Self {
        Self {
            lights,
            blinds,
            alarm_systems,
            sink,
        }
    }

    /// Create a controller with no devices.
    pub fn empty(sink: N) -> Self {
        Self::new(Vec::new(), Vec::new(), Vec::new(), sink)
    }

    #[must_use]
    pub fn lights(&self) -> &[Shared<Light>] {
        &self.lights
    }

    #[must_use]
    pub fn blinds(&self) -> &[Shared<Blind>] {
        &self.blinds
    }

    #[must_use]
    pub fn alarm_systems(&self) -> &[Shared<AlarmSystem>] {
        &self.alarm_systems
    }

    #[must_use]
    pub fn sink(&self) -> &N {
        &self.sink
    }

    /// Append a light; it is swept after those already present.
    #[tracing::instrument(skip(self, light), fields(device_id = %light.borrow().id()))]
    pub fn add_light(&mut self, light: Shared<Light>) {
        tracing::debug!("adding light");
        self.lights.push(light);
    }

    /// Append a blind; it is swept after those already present.
    #[tracing::instrument(skip(self, blind), fields(device_id = %blind.borrow().id()))]
    pub fn add_blind(&mut self, blind: Shared<Blind>) {
        tracing::debug!("adding blind");
        self.blinds.push(blind);
    }

    /// Append a alarm system; it is swept after those already present.
    #[tracing::instrument(skip(self, alarm), fields(device_id = %alarm.borrow().id()))]
    pub fn add_alarm_system(&mut self, alarm: Shared<AlarmSystem>) {
        tracing::debug!("adding alarm system");
        self.alarm_systems.push(alarm);
    }

    /// Drop every light whose id is `id`, keeping the others in order.
    ///
    /// Returns how many entries were removed; an unknown id removes nothing.
    #[tracing::instrument(skip(self))]
    pub fn delete_lights_by_id(&mut self, id: DeviceId) -> usize {
        remove_by_id(&mut self.lights, id)
    }

    /// Drop every blind whose id is `id`, keeping the others in order.
    ///
    /// Returns how many entries were removed; an unknown id removes nothing.
    #[tracing::instrument(skip(self))]
    pub fn delete_blinds_by_id(&mut self, id: DeviceId) -> usize {
        remove_by_id(&mut self.blinds, id)
    }

    /// Drop every alarm system whose id is `id`, keeping the others in order.
    #[tracing::instrument(skip(self))]
    pub fn delete_alarm_systems_by_id(&mut self, id: DeviceId) -> usize {
        remove_by_id(&mut self.alarm_systems, id)
    }

    /// Run one away sweep: lights, then blinds, then alarm systems.
    ///
    /// # Panics
    ///
    /// Panics if a caller still holds a borrow of one of the devices.
    #[tracing::instrument(skip_all)]
    pub fn execute(&self) -> AwaySummary {
        let mut summary = AwaySummary::default();

        for light in &self.lights {
            let mut light = light.borrow_mut();
            if light.is_on() {
                self.sink.notify(light.turn_off());
                summary.lights_turned_off += 1;
            }
        }

        for blind in &self.blinds {
            let mut blind = blind.borrow_mut();
            if blind.lift_level() > 0 {
                self.sink.notify(blind.lower());
                summary.blinds_lowered += 1;
            }
        }

        for alarm in &self.alarm_systems {
            let mut alarm = alarm.borrow_mut();
            if !alarm.mode().is_armed() {
                self.sink.notify(alarm.change_mode(AlarmMode::armed()));
                summary.alarms_armed += 1;
            }
        }

        tracing::info!(
            lights_turned_off = summary.lights_turned_off,
            blinds_lowered = summary.blinds_lowered,
            alarms_armed = summary.alarms_armed,
            "away sweep complete"
        );
        summary
    }
}

fn remove_by_id<D: Device>(devices: &mut Vec<Shared<D>>, id: DeviceId) -> usize {
    let before = devices.len();
    devices.retain(|device| device.borrow().id() != id);
    let removed = before - devices.len();
    tracing::debug!(removed, "removed devices");
    removed
}

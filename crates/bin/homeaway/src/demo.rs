//! The leave-home walkthrough.
//!
//! Builds a handful of devices, pokes at them, hands some to a
//! [`HomeAwayController`], runs the away sweep, prunes two devices and lists
//! what the controller still references.

use std::io::Write;
use std::rc::Rc;

use homeaway_app::controller::{AwaySummary, HomeAwayController};
use homeaway_app::ports::NotificationSink;
use homeaway_app::shared::{Shared, shared};
use homeaway_domain::alarm::{AlarmMode, AlarmSystem};
use homeaway_domain::blind::Blind;
use homeaway_domain::device::Device;
use homeaway_domain::id::{DeviceId, IdAllocator};
use homeaway_domain::light::Light;

use crate::config::DevicesConfig;

/// Number of ids the walkthrough allocates, replaced devices included.
pub const WALKTHROUGH_DEVICES: u64 = 6;

/// Outcome of a walkthrough run.
#[derive(Debug)]
pub struct DemoReport {
    pub summary: AwaySummary,
    pub remaining_lights: Vec<DeviceId>,
    pub remaining_blinds: Vec<DeviceId>,
}

/// Run the walkthrough, sending notifications to `sink` and the final
/// listing to `out`.
///
/// # Errors
///
/// Returns an error if the id space runs out before every device is built,
/// a device rejects a value, or `out` cannot be written.
pub fn run(
    settings: &DevicesConfig,
    sink: &dyn NotificationSink,
    out: &mut impl Write,
) -> anyhow::Result<DemoReport> {
    let mut ids = IdAllocator::starting_at(settings.first_id);

    // The first living room light and bedroom blind are replaced right away;
    // their ids stay consumed.
    let _ = light(&mut ids, "Living Room Light")?;
    let living_room_light = shared(light(&mut ids, "Living Room Light")?);
    let _ = blind(&mut ids, settings, "Bedroom Blind")?;
    let bedroom_blind = shared(blind(&mut ids, settings, "Bedroom Blind")?);
    let bedroom_light = shared(light(&mut ids, "Bed Room Light")?);
    let security_alarm: Shared<AlarmSystem> = shared(
        AlarmSystem::builder(ids.allocate()?)
            .name("Security Alarm")
            .build(),
    );

    {
        let mut light = living_room_light.borrow_mut();
        sink.notify(light.turn_on());
        sink.notify(light.change_brightness(75)?);
    }
    {
        let mut blind = bedroom_blind.borrow_mut();
        sink.notify(blind.lift());
        sink.notify(blind.change_lift_level(50)?);
    }
    sink.notify(bedroom_light.borrow_mut().turn_off());
    {
        let mut alarm = security_alarm.borrow_mut();
        sink.notify(alarm.change_mode(AlarmMode::armed()));
        sink.notify_opt(alarm.trigger_alarm());
        sink.notify(alarm.change_mode(AlarmMode::OFF));
    }

    let mut controller = HomeAwayController::new(
        vec![Rc::clone(&living_room_light)],
        vec![Rc::clone(&bedroom_blind)],
        vec![Rc::clone(&security_alarm)],
        sink,
    );
    let summary = controller.execute();

    let blind_id = bedroom_blind.borrow().id();
    controller.delete_blinds_by_id(blind_id);
    writeln!(out, "Blind with ID {blind_id} deleted.")?;

    let light_id = living_room_light.borrow().id();
    controller.delete_lights_by_id(light_id);
    writeln!(out, "Light with ID {light_id} deleted.")?;

    writeln!(out, "Remaining Blinds:")?;
    for blind in controller.blinds() {
        let blind = blind.borrow();
        writeln!(out, "Blind ID: {}, Name: {}", blind.id(), blind.name())?;
    }
    writeln!(out, "Remaining Lights:")?;
    for light in controller.lights() {
        let light = light.borrow();
        writeln!(out, "Light ID: {}, Name: {}", light.id(), light.name())?;
    }

    Ok(DemoReport {
        summary,
        remaining_lights: controller.lights().iter().map(|l| l.borrow().id()).collect(),
        remaining_blinds: controller.blinds().iter().map(|b| b.borrow().id()).collect(),
    })
}

fn light(ids: &mut IdAllocator, name: &str) -> anyhow::Result<Light> {
    Ok(Light::builder(ids.allocate()?).name(name).build()?)
}

fn blind(ids: &mut IdAllocator, settings: &DevicesConfig, name: &str) -> anyhow::Result<Blind> {
    Ok(Blind::builder(ids.allocate()?)
        .name(name)
        .strict_lift_range(settings.strict_lift_range)
        .build()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use homeaway_app::sinks::RecordingSink;
    use homeaway_domain::error::SmartHomeError;

    fn run_default() -> (DemoReport, Vec<String>, String) {
        let sink = RecordingSink::new();
        let mut out = Vec::new();
        let report = run(&DevicesConfig::default(), &sink, &mut out).unwrap();
        (report, sink.lines(), String::from_utf8(out).unwrap())
    }

    #[test]
    fn should_emit_full_notification_stream() {
        let (_, lines, _) = run_default();
        assert_eq!(
            lines,
            [
                "Living Room Light state changed to on.",
                "Living Room Light brightness set to 75.",
                "Bedroom Blind blinds lift level set to 100.",
                "Bedroom Blind blinds lift level set to 50.",
                "Bed Room Light state changed to off.",
                "Security Alarm mode changed to Armed.",
                "Alarm activated in Security Alarm!",
                "Security Alarm mode changed to Off.",
                "Living Room Light state changed to off.",
                "Bedroom Blind blinds lift level set to 0.",
                "Security Alarm mode changed to Armed.",
            ]
        );
    }

    #[test]
    fn should_touch_one_device_per_collection() {
        let (report, _, _) = run_default();
        assert_eq!(report.summary.total(), 3);
    }

    #[test]
    fn should_delete_both_referenced_devices() {
        let (report, _, out) = run_default();
        assert!(report.remaining_blinds.is_empty());
        assert!(report.remaining_lights.is_empty());
        assert_eq!(
            out,
            "Blind with ID 3 deleted.\n\
             Light with ID 1 deleted.\n\
             Remaining Blinds:\n\
             Remaining Lights:\n"
        );
    }

    #[test]
    fn should_offset_ids_by_first_id() {
        let sink = RecordingSink::new();
        let mut out = Vec::new();
        let settings = DevicesConfig {
            first_id: 10,
            ..DevicesConfig::default()
        };
        run(&settings, &sink, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("Blind with ID 13 deleted.\nLight with ID 11 deleted.\n"));
    }

    #[test]
    fn should_run_with_strict_blinds() {
        let sink = RecordingSink::new();
        let settings = DevicesConfig {
            strict_lift_range: true,
            ..DevicesConfig::default()
        };
        let report = run(&settings, &sink, &mut std::io::sink()).unwrap();
        assert_eq!(report.summary.blinds_lowered, 1);
    }

    #[test]
    fn should_fit_walkthrough_into_last_ids() {
        let sink = RecordingSink::new();
        let settings = DevicesConfig {
            first_id: u64::MAX - (WALKTHROUGH_DEVICES - 1),
            ..DevicesConfig::default()
        };
        let report = run(&settings, &sink, &mut std::io::sink()).unwrap();
        assert_eq!(report.summary.total(), 3);
    }

    #[test]
    fn should_fail_without_panicking_when_ids_run_out() {
        let sink = RecordingSink::new();
        let settings = DevicesConfig {
            first_id: u64::MAX - 2,
            ..DevicesConfig::default()
        };
        let err = run(&settings, &sink, &mut std::io::sink()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<SmartHomeError>(),
            Some(&SmartHomeError::IdSpaceExhausted)
        );
        assert!(sink.is_empty());
    }
}

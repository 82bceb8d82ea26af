//! # homeaway — leave-home demo
//!
//! Composition root that wires a notification sink to the device model and
//! runs the walkthrough.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize logging
//! - Pick the notification sink (plain console lines or `tracing` events)
//! - Run the walkthrough and print the remaining-device listing
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no device logic belongs here.

mod config;
mod console;
mod demo;

use homeaway_app::ports::NotificationSink;
use homeaway_app::sinks::TracingSink;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, SinkKind};
use crate::console::ConsoleSink;

fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .with_writer(std::io::stderr)
        .init();

    let sink: Box<dyn NotificationSink> = match config.notifications.sink {
        SinkKind::Console => Box::new(ConsoleSink),
        SinkKind::Log => Box::new(TracingSink),
    };
    tracing::debug!(sink = ?config.notifications.sink, "starting walkthrough");

    let report = demo::run(&config.devices, sink.as_ref(), &mut std::io::stdout())?;
    tracing::info!(
        devices_changed = report.summary.total(),
        remaining_lights = report.remaining_lights.len(),
        remaining_blinds = report.remaining_blinds.len(),
        "walkthrough finished"
    );

    Ok(())
}

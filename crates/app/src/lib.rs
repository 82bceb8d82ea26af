//! # homeaway-app
//!
//! Application layer: the away sweep and the **port** notifications flow
//! through.
//!
//! ## Responsibilities
//! - Define the [`NotificationSink`](ports::NotificationSink) port that
//!   receives every notification a device produces
//! - Provide in-process sinks that need no IO beyond logging
//!   ([`TracingSink`](sinks::TracingSink), [`RecordingSink`](sinks::RecordingSink))
//! - Provide the [`Shared`](shared::Shared) handle through which devices
//!   created elsewhere are referenced, not copied
//! - Implement [`HomeAwayController`](controller::HomeAwayController),
//!   which normalizes lights, blinds and alarm systems to an away posture
//!
//! ## Dependency rule
//! Depends on `homeaway-domain` only (plus `tracing`).
//! Everything is single-threaded and synchronous.

pub mod controller;
pub mod ports;
pub mod shared;
pub mod sinks;

//! # homeaway-domain
//!
//! Pure device model for the homeaway smart-home toolkit.
//!
//! ## Responsibilities
//! - Foundational types: device identifiers and their allocator, error
//!   conventions, timestamps
//! - Define the shared **Device** capability (identity, name, on/off state)
//! - Define the concrete devices: **Light**, **Blind**, **`AlarmSystem`**
//! - Define **Notifications**, the one-line record every mutation produces
//! - Contain all invariant enforcement (brightness range, optional lift range)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! Mutators return the [`Notification`](notification::Notification) they
//! produce; delivering it somewhere is the job of the `app` crate.

pub mod error;
pub mod id;
pub mod time;

pub mod alarm;
pub mod blind;
pub mod device;
pub mod light;
pub mod notification;

//! picker-rs: configuration reconciliation and event bridging for an
//! embeddable color-picker widget.
//!
//! The interactive engine (color math, rendering, input handling) stays
//! behind the [`engine::PickerEngine`] trait. This crate assembles the
//! engine's configuration, owns its lifecycle, keeps the host-visible value
//! in sync and forwards engine events to host callbacks.

pub mod api;
pub mod core;
pub mod engine;
pub mod error;
pub mod telemetry;

pub use api::{ColorPickerWidget, WidgetCallbacks, WidgetConfig};
pub use error::{PickerError, PickerResult};

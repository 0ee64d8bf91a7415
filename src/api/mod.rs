//! Host-facing widget surface.
//!
//! [`assemble`] turns caller configuration into engine options;
//! [`ColorPickerWidget`] owns the engine and bridges values and events.

mod assembler;
mod callbacks;
mod event_bridge;
mod widget;
mod widget_config;

pub use assembler::assemble;
pub use callbacks::WidgetCallbacks;
pub use event_bridge::{EVENT_BINDINGS, EventBinding, EventRoute, binding_for, route_event};
pub use widget::{ColorPickerWidget, Lifecycle};
pub use widget_config::WidgetConfig;

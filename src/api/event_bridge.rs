use crate::core::{NativeColor, OutputFormat, PickerValue, format_native};
use crate::engine::{EngineEvent, EventKind};

/// How one engine event is forwarded to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventBinding {
    pub kind: EventKind,
    /// Name of the host hook the event is forwarded to.
    pub hook: &'static str,
    /// Whether the event also replaces the widget's current value.
    pub syncs_value: bool,
}

/// Every engine event the bridge subscribes to, each exactly once per engine.
pub const EVENT_BINDINGS: [EventBinding; 9] = [
    EventBinding {
        kind: EventKind::Init,
        hook: "onInit",
        syncs_value: true,
    },
    EventBinding {
        kind: EventKind::Show,
        hook: "onShow",
        syncs_value: false,
    },
    EventBinding {
        kind: EventKind::Hide,
        hook: "onHide",
        syncs_value: false,
    },
    EventBinding {
        kind: EventKind::Save,
        hook: "onSave",
        syncs_value: true,
    },
    EventBinding {
        kind: EventKind::Clear,
        hook: "onClear",
        syncs_value: false,
    },
    EventBinding {
        kind: EventKind::Change,
        hook: "onChange",
        syncs_value: false,
    },
    EventBinding {
        kind: EventKind::ChangeStop,
        hook: "onChangeStop",
        syncs_value: false,
    },
    EventBinding {
        kind: EventKind::Cancel,
        hook: "onCancel",
        syncs_value: false,
    },
    EventBinding {
        kind: EventKind::SwatchSelect,
        hook: "onSwatchSelect",
        syncs_value: false,
    },
];

#[must_use]
pub fn binding_for(kind: EventKind) -> &'static EventBinding {
    // EVENT_BINDINGS is ordered like EventKind::ALL.
    &EVENT_BINDINGS[kind as usize]
}

/// Outcome of routing one engine event.
#[derive(Debug, Clone, PartialEq)]
pub struct EventRoute<C> {
    pub binding: &'static EventBinding,
    /// Replacement for the current value; `None` leaves it untouched.
    pub value_update: Option<Option<PickerValue<C>>>,
}

/// Decides what an engine event does to the bridge, without side effects.
#[must_use]
pub fn route_event<C: NativeColor>(
    event: &EngineEvent<C>,
    format: Option<OutputFormat>,
) -> EventRoute<C> {
    let binding = binding_for(event.kind());
    let value_update = binding
        .syncs_value
        .then(|| format_native(event.color(), format));
    EventRoute {
        binding,
        value_update,
    }
}

//! Seam between the widget bridge and the interactive picker engine.
//!
//! The engine owns color math, rendering and direct user input. The bridge
//! only constructs it, listens to its events, pushes host values into it and
//! tears it down.

mod headless;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{NativeColor, PickerOptions};
use crate::error::{PickerError, PickerResult};

pub use headless::{HeadlessColor, HeadlessEngine, HeadlessFactory, HeadlessHandle};

/// Reference to the host UI element the engine attaches to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Anchor(String);

impl Anchor {
    #[must_use]
    pub fn new(target: impl Into<String>) -> Self {
        Self(target.into())
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.0
    }

    /// An anchor with an empty target points at nothing.
    #[must_use]
    pub fn is_resolvable(&self) -> bool {
        !self.0.trim().is_empty()
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which sub-control produced a `change`/`changestop`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeSource {
    Input,
    Slider,
    Swatch,
}

/// Engine event names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Init,
    Show,
    Hide,
    Save,
    Clear,
    Change,
    ChangeStop,
    Cancel,
    SwatchSelect,
}

impl EventKind {
    pub const ALL: [Self; 9] = [
        Self::Init,
        Self::Show,
        Self::Hide,
        Self::Save,
        Self::Clear,
        Self::Change,
        Self::ChangeStop,
        Self::Cancel,
        Self::SwatchSelect,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Show => "show",
            Self::Hide => "hide",
            Self::Save => "save",
            Self::Clear => "clear",
            Self::Change => "change",
            Self::ChangeStop => "changestop",
            Self::Cancel => "cancel",
            Self::SwatchSelect => "swatchselect",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EventKind {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| PickerError::InvalidData(format!("unknown engine event `{s}`")))
    }
}

/// Event emitted by the engine, carrying its native arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent<C> {
    /// Engine finished construction; carries its initial color.
    Init { color: Option<C> },
    Show { color: Option<C> },
    Hide,
    /// Color applied by the user or by a non-silent `set_color`; `None` after clearing.
    Save { color: Option<C> },
    Clear,
    Change { color: C, source: ChangeSource },
    ChangeStop { source: ChangeSource },
    Cancel,
    SwatchSelect { color: C },
}

impl<C> EngineEvent<C> {
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Init { .. } => EventKind::Init,
            Self::Show { .. } => EventKind::Show,
            Self::Hide => EventKind::Hide,
            Self::Save { .. } => EventKind::Save,
            Self::Clear => EventKind::Clear,
            Self::Change { .. } => EventKind::Change,
            Self::ChangeStop { .. } => EventKind::ChangeStop,
            Self::Cancel => EventKind::Cancel,
            Self::SwatchSelect { .. } => EventKind::SwatchSelect,
        }
    }

    #[must_use]
    pub fn color(&self) -> Option<&C> {
        match self {
            Self::Init { color } | Self::Show { color } | Self::Save { color } => color.as_ref(),
            Self::Change { color, .. } | Self::SwatchSelect { color } => Some(color),
            Self::Hide | Self::Clear | Self::ChangeStop { .. } | Self::Cancel => None,
        }
    }
}

pub type EventListener<C> = Box<dyn FnMut(&EngineEvent<C>)>;

/// Live engine instance bound to one anchor.
pub trait PickerEngine {
    type Color: NativeColor + 'static;

    /// Currently selected color, `None` when cleared.
    fn color(&self) -> Option<Self::Color>;

    /// Applies a serialized color (or clears with `None`).
    ///
    /// Returns `false` when the engine cannot interpret `value`.
    fn set_color(&mut self, value: Option<&str>) -> bool;

    /// Subscribes `listener` to `kind`.
    fn on(&mut self, kind: EventKind, listener: EventListener<Self::Color>);

    fn show(&mut self);

    fn hide(&mut self);

    fn set_disabled(&mut self, disabled: bool);

    /// Releases every interactive resource and detaches from the anchor.
    fn destroy_and_remove(&mut self) -> PickerResult<()>;
}

/// Constructs engines from assembled options.
pub trait EngineFactory {
    type Engine: PickerEngine;

    fn create(&mut self, options: &PickerOptions, anchor: &Anchor) -> PickerResult<Self::Engine>;
}

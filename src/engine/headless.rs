use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::core::{NativeColor, PickerOptions};
use crate::error::{PickerError, PickerResult};

use super::{
    Anchor, ChangeSource, EngineEvent, EngineFactory, EventKind, EventListener, PickerEngine,
};

/// Pre-serialized color known to the headless engine.
///
/// The headless engine does no color math: every color it can hold carries
/// all of its representations up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessColor {
    hsva: String,
    hsla: String,
    rgba: String,
    hexa: String,
    cmyk: String,
}

impl HeadlessColor {
    #[must_use]
    pub fn new(
        hsva: impl Into<String>,
        hsla: impl Into<String>,
        rgba: impl Into<String>,
        hexa: impl Into<String>,
        cmyk: impl Into<String>,
    ) -> Self {
        Self {
            hsva: hsva.into(),
            hsla: hsla.into(),
            rgba: rgba.into(),
            hexa: hexa.into(),
            cmyk: cmyk.into(),
        }
    }

    /// True when `input` spells any representation of this color.
    #[must_use]
    pub fn matches(&self, input: &str) -> bool {
        let input = input.trim();
        [&self.hsva, &self.hsla, &self.rgba, &self.hexa, &self.cmyk]
            .into_iter()
            .any(|repr| repr.eq_ignore_ascii_case(input))
    }

    /// Colors every headless engine understands out of the box.
    #[must_use]
    pub fn builtin_palette() -> Vec<Self> {
        vec![
            Self::new(
                "hsva(235, 27%, 35%, 1)",
                "hsla(235, 15%, 31%, 1)",
                "rgba(66, 68, 90, 1)",
                "#42445A",
                "cmyk(27%, 24%, 0%, 65%)",
            ),
            Self::new(
                "hsva(0, 100%, 100%, 1)",
                "hsla(0, 100%, 50%, 1)",
                "rgba(255, 0, 0, 1)",
                "#FF0000",
                "cmyk(0%, 100%, 100%, 0%)",
            ),
            Self::new(
                "hsva(120, 100%, 100%, 1)",
                "hsla(120, 100%, 50%, 1)",
                "rgba(0, 255, 0, 1)",
                "#00FF00",
                "cmyk(100%, 0%, 100%, 0%)",
            ),
            Self::new(
                "hsva(240, 100%, 100%, 1)",
                "hsla(240, 100%, 50%, 1)",
                "rgba(0, 0, 255, 1)",
                "#0000FF",
                "cmyk(100%, 100%, 0%, 0%)",
            ),
            Self::new(
                "hsva(0, 0%, 100%, 1)",
                "hsla(0, 0%, 100%, 1)",
                "rgba(255, 255, 255, 1)",
                "#FFFFFF",
                "cmyk(0%, 0%, 0%, 0%)",
            ),
            Self::new(
                "hsva(0, 0%, 0%, 1)",
                "hsla(0, 0%, 0%, 1)",
                "rgba(0, 0, 0, 1)",
                "#000000",
                "cmyk(0%, 0%, 0%, 100%)",
            ),
        ]
    }
}

impl NativeColor for HeadlessColor {
    fn to_hsva(&self) -> String {
        self.hsva.clone()
    }

    fn to_hsla(&self) -> String {
        self.hsla.clone()
    }

    fn to_rgba(&self) -> String {
        self.rgba.clone()
    }

    fn to_hexa(&self) -> String {
        self.hexa.clone()
    }

    fn to_cmyk(&self) -> String {
        self.cmyk.clone()
    }
}

struct HeadlessState {
    options: PickerOptions,
    anchor: Anchor,
    palette: Rc<[HeadlessColor]>,
    color: Option<HeadlessColor>,
    last_saved: Option<HeadlessColor>,
    listeners: IndexMap<EventKind, Vec<EventListener<HeadlessColor>>>,
    registrations: IndexMap<EventKind, usize>,
    set_color_calls: Vec<Option<String>>,
    visible: bool,
    disabled: bool,
    destroyed: bool,
}

impl HeadlessState {
    fn lookup(&self, input: &str) -> Option<HeadlessColor> {
        self.palette.iter().find(|color| color.matches(input)).cloned()
    }
}

fn emit(state: &Rc<RefCell<HeadlessState>>, event: EngineEvent<HeadlessColor>) {
    let kind = event.kind();
    let mut listeners = {
        let mut state = state.borrow_mut();
        if state.destroyed {
            return;
        }
        state
            .listeners
            .get_mut(&kind)
            .map(std::mem::take)
            .unwrap_or_default()
    };

    // Listeners run without a borrow held so they may call back into the engine.
    for listener in &mut listeners {
        listener(&event);
    }

    let mut state = state.borrow_mut();
    if state.destroyed {
        return;
    }
    let slot = state.listeners.entry(kind).or_default();
    listeners.append(slot);
    *slot = listeners;
}

/// In-process engine for tests and headless hosts.
///
/// Colors resolve against a fixed palette; user interaction is simulated
/// through a [`HeadlessHandle`].
pub struct HeadlessEngine {
    state: Rc<RefCell<HeadlessState>>,
}

impl HeadlessEngine {
    pub fn new(
        options: &PickerOptions,
        anchor: &Anchor,
        palette: Rc<[HeadlessColor]>,
    ) -> PickerResult<Self> {
        let color = palette
            .iter()
            .find(|color| color.matches(&options.default))
            .cloned()
            .ok_or_else(|| {
                PickerError::engine_init(format!(
                    "default color `{}` is not understood by the headless engine",
                    options.default
                ))
            })?;

        let state = HeadlessState {
            options: options.clone(),
            anchor: anchor.clone(),
            palette,
            last_saved: Some(color.clone()),
            color: Some(color),
            listeners: IndexMap::new(),
            registrations: IndexMap::new(),
            set_color_calls: Vec::new(),
            visible: options.show_always || options.inline,
            disabled: options.disabled,
            destroyed: false,
        };
        Ok(Self {
            state: Rc::new(RefCell::new(state)),
        })
    }

    #[must_use]
    pub fn handle(&self) -> HeadlessHandle {
        HeadlessHandle {
            state: Rc::clone(&self.state),
        }
    }
}

impl PickerEngine for HeadlessEngine {
    type Color = HeadlessColor;

    fn color(&self) -> Option<HeadlessColor> {
        self.state.borrow().color.clone()
    }

    fn set_color(&mut self, value: Option<&str>) -> bool {
        let resolved = {
            let mut state = self.state.borrow_mut();
            if state.destroyed {
                return false;
            }
            state.set_color_calls.push(value.map(str::to_owned));
            match value {
                None => None,
                Some(input) => match state.lookup(input) {
                    Some(color) => Some(color),
                    None => {
                        warn!(input, "headless engine rejected unknown color");
                        return false;
                    }
                },
            }
        };

        {
            let mut state = self.state.borrow_mut();
            state.color = resolved.clone();
            state.last_saved = resolved.clone();
        }
        emit(&self.state, EngineEvent::Save { color: resolved });
        true
    }

    fn on(&mut self, kind: EventKind, listener: EventListener<HeadlessColor>) {
        let mut state = self.state.borrow_mut();
        *state.registrations.entry(kind).or_insert(0) += 1;
        state.listeners.entry(kind).or_default().push(listener);
    }

    fn show(&mut self) {
        let color = {
            let mut state = self.state.borrow_mut();
            if state.visible || state.disabled {
                return;
            }
            state.visible = true;
            state.color.clone()
        };
        emit(&self.state, EngineEvent::Show { color });
    }

    fn hide(&mut self) {
        {
            let mut state = self.state.borrow_mut();
            if !state.visible || state.options.show_always {
                return;
            }
            state.visible = false;
        }
        emit(&self.state, EngineEvent::Hide);
    }

    fn set_disabled(&mut self, disabled: bool) {
        let mut state = self.state.borrow_mut();
        state.disabled = disabled;
        if disabled && !state.options.show_always {
            state.visible = false;
        }
    }

    fn destroy_and_remove(&mut self) -> PickerResult<()> {
        let mut state = self.state.borrow_mut();
        if state.destroyed {
            return Ok(());
        }
        state.destroyed = true;
        state.visible = false;
        state.listeners.clear();
        debug!(anchor = %state.anchor, "headless engine destroyed");
        Ok(())
    }
}

/// Shared view of a headless engine used to drive and inspect it.
#[derive(Clone)]
pub struct HeadlessHandle {
    state: Rc<RefCell<HeadlessState>>,
}

impl HeadlessHandle {
    /// Emits an arbitrary event to the registered listeners.
    pub fn emit(&self, event: EngineEvent<HeadlessColor>) {
        emit(&self.state, event);
    }

    /// Signals that construction finished.
    pub fn complete_init(&self) {
        let color = self.state.borrow().color.clone();
        self.emit(EngineEvent::Init { color });
    }

    /// Moves the selection to `input` as `source` would, without saving.
    pub fn pick(&self, input: &str, source: ChangeSource) -> bool {
        let color = {
            let mut state = self.state.borrow_mut();
            if state.destroyed || state.disabled {
                return false;
            }
            let Some(color) = state.lookup(input) else {
                return false;
            };
            state.color = Some(color.clone());
            color
        };
        self.emit(EngineEvent::Change { color, source });
        self.emit(EngineEvent::ChangeStop { source });
        true
    }

    /// Clicks a swatch.
    pub fn select_swatch(&self, input: &str) -> bool {
        let color = {
            let mut state = self.state.borrow_mut();
            if state.destroyed || state.disabled {
                return false;
            }
            let Some(color) = state.lookup(input) else {
                return false;
            };
            state.color = Some(color.clone());
            color
        };
        self.emit(EngineEvent::Change {
            color: color.clone(),
            source: ChangeSource::Swatch,
        });
        self.emit(EngineEvent::SwatchSelect { color });
        true
    }

    /// Presses the save button.
    pub fn save(&self) {
        let color = {
            let mut state = self.state.borrow_mut();
            state.last_saved = state.color.clone();
            state.color.clone()
        };
        self.emit(EngineEvent::Save { color });
    }

    /// Presses the clear button: saves "no color", then announces the clear.
    pub fn clear(&self) {
        {
            let mut state = self.state.borrow_mut();
            state.color = None;
            state.last_saved = None;
        }
        self.emit(EngineEvent::Save { color: None });
        self.emit(EngineEvent::Clear);
    }

    /// Presses the cancel button, reverting to the last saved color.
    pub fn cancel(&self) {
        {
            let mut state = self.state.borrow_mut();
            state.color = state.last_saved.clone();
        }
        self.emit(EngineEvent::Cancel);
    }

    #[must_use]
    pub fn current(&self) -> Option<HeadlessColor> {
        self.state.borrow().color.clone()
    }

    #[must_use]
    pub fn options(&self) -> PickerOptions {
        self.state.borrow().options.clone()
    }

    #[must_use]
    pub fn anchor(&self) -> Anchor {
        self.state.borrow().anchor.clone()
    }

    #[must_use]
    pub fn set_color_calls(&self) -> Vec<Option<String>> {
        self.state.borrow().set_color_calls.clone()
    }

    /// Number of times `kind` was subscribed over the engine's lifetime.
    #[must_use]
    pub fn registration_count(&self, kind: EventKind) -> usize {
        self.state
            .borrow()
            .registrations
            .get(&kind)
            .copied()
            .unwrap_or(0)
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.state.borrow().visible
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.state.borrow().disabled
    }

    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.state.borrow().destroyed
    }
}

/// Factory producing [`HeadlessEngine`]s and keeping a handle to each.
pub struct HeadlessFactory {
    palette: Rc<[HeadlessColor]>,
    failure: Option<String>,
    created: Vec<HeadlessHandle>,
}

impl Default for HeadlessFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessFactory {
    #[must_use]
    pub fn new() -> Self {
        Self::with_palette(HeadlessColor::builtin_palette())
    }

    #[must_use]
    pub fn with_palette(palette: Vec<HeadlessColor>) -> Self {
        Self {
            palette: palette.into(),
            failure: None,
            created: Vec::new(),
        }
    }

    /// Factory whose every construction attempt fails with `reason`.
    #[must_use]
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            failure: Some(reason.into()),
            ..Self::new()
        }
    }

    #[must_use]
    pub fn created_count(&self) -> usize {
        self.created.len()
    }

    #[must_use]
    pub fn last_handle(&self) -> Option<HeadlessHandle> {
        self.created.last().cloned()
    }
}

impl EngineFactory for HeadlessFactory {
    type Engine = HeadlessEngine;

    fn create(&mut self, options: &PickerOptions, anchor: &Anchor) -> PickerResult<HeadlessEngine> {
        if let Some(reason) = &self.failure {
            return Err(PickerError::engine_init(reason.clone()));
        }
        let engine = HeadlessEngine::new(options, anchor, Rc::clone(&self.palette))?;
        self.created.push(engine.handle());
        Ok(engine)
    }
}

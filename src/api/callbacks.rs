use std::cell::RefCell;
use std::fmt;

use crate::engine::{ChangeSource, EngineEvent};

type ColorHook<C> = Box<dyn FnMut(&C)>;
type OptionalColorHook<C> = Box<dyn FnMut(Option<&C>)>;
type SourceHook = Box<dyn FnMut(ChangeSource)>;
type ChangeHook<C> = Box<dyn FnMut(&C, ChangeSource)>;
type PlainHook = Box<dyn FnMut()>;

// Runs the hook in `$slot` with no borrow of the set held. The slot stays
// empty meanwhile, so a re-entrant event of the same kind skips the hook.
macro_rules! detached {
    ($cell:expr, $slot:ident, |$hook:ident| $call:expr) => {{
        let taken = $cell.borrow_mut().$slot.take();
        match taken {
            Some(mut $hook) => {
                $call;
                $cell.borrow_mut().$slot = Some($hook);
                true
            }
            None => false,
        }
    }};
}

/// Optional host hooks, one per engine event.
///
/// Hooks receive the engine's native arguments. A missing hook is a no-op.
pub struct WidgetCallbacks<C> {
    on_init: Option<OptionalColorHook<C>>,
    on_show: Option<OptionalColorHook<C>>,
    on_hide: Option<PlainHook>,
    on_save: Option<OptionalColorHook<C>>,
    on_clear: Option<PlainHook>,
    on_change: Option<ChangeHook<C>>,
    on_change_stop: Option<SourceHook>,
    on_cancel: Option<PlainHook>,
    on_swatch_select: Option<ColorHook<C>>,
}

impl<C> Default for WidgetCallbacks<C> {
    fn default() -> Self {
        Self {
            on_init: None,
            on_show: None,
            on_hide: None,
            on_save: None,
            on_clear: None,
            on_change: None,
            on_change_stop: None,
            on_cancel: None,
            on_swatch_select: None,
        }
    }
}

impl<C> fmt::Debug for WidgetCallbacks<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetCallbacks")
            .field("on_init", &self.on_init.is_some())
            .field("on_show", &self.on_show.is_some())
            .field("on_hide", &self.on_hide.is_some())
            .field("on_save", &self.on_save.is_some())
            .field("on_clear", &self.on_clear.is_some())
            .field("on_change", &self.on_change.is_some())
            .field("on_change_stop", &self.on_change_stop.is_some())
            .field("on_cancel", &self.on_cancel.is_some())
            .field("on_swatch_select", &self.on_swatch_select.is_some())
            .finish()
    }
}

impl<C> WidgetCallbacks<C> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn on_init(mut self, hook: impl FnMut(Option<&C>) + 'static) -> Self {
        self.on_init = Some(Box::new(hook));
        self
    }

    #[must_use]
    pub fn on_show(mut self, hook: impl FnMut(Option<&C>) + 'static) -> Self {
        self.on_show = Some(Box::new(hook));
        self
    }

    #[must_use]
    pub fn on_hide(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_hide = Some(Box::new(hook));
        self
    }

    #[must_use]
    pub fn on_save(mut self, hook: impl FnMut(Option<&C>) + 'static) -> Self {
        self.on_save = Some(Box::new(hook));
        self
    }

    /// The clear hook carries no color: a cleared picker has none.
    #[must_use]
    pub fn on_clear(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_clear = Some(Box::new(hook));
        self
    }

    #[must_use]
    pub fn on_change(mut self, hook: impl FnMut(&C, ChangeSource) + 'static) -> Self {
        self.on_change = Some(Box::new(hook));
        self
    }

    #[must_use]
    pub fn on_change_stop(mut self, hook: impl FnMut(ChangeSource) + 'static) -> Self {
        self.on_change_stop = Some(Box::new(hook));
        self
    }

    #[must_use]
    pub fn on_cancel(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_cancel = Some(Box::new(hook));
        self
    }

    #[must_use]
    pub fn on_swatch_select(mut self, hook: impl FnMut(&C) + 'static) -> Self {
        self.on_swatch_select = Some(Box::new(hook));
        self
    }

    /// Invokes the hook bound to `event`, if any.
    ///
    /// The hook is taken out of `cell` while it runs, so it may drive the
    /// engine into emitting further events that dispatch through the same
    /// set. Returns whether a hook ran.
    pub fn dispatch(cell: &RefCell<Self>, event: &EngineEvent<C>) -> bool {
        match event {
            EngineEvent::Init { color } => detached!(cell, on_init, |hook| hook(color.as_ref())),
            EngineEvent::Show { color } => detached!(cell, on_show, |hook| hook(color.as_ref())),
            EngineEvent::Hide => detached!(cell, on_hide, |hook| hook()),
            EngineEvent::Save { color } => detached!(cell, on_save, |hook| hook(color.as_ref())),
            EngineEvent::Clear => detached!(cell, on_clear, |hook| hook()),
            EngineEvent::Change { color, source } => {
                detached!(cell, on_change, |hook| hook(color, *source))
            }
            EngineEvent::ChangeStop { source } => {
                detached!(cell, on_change_stop, |hook| hook(*source))
            }
            EngineEvent::Cancel => detached!(cell, on_cancel, |hook| hook()),
            EngineEvent::SwatchSelect { color } => {
                detached!(cell, on_swatch_select, |hook| hook(color))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::{Rc, Weak};

    use super::*;
    use crate::engine::HeadlessColor;

    type SharedCallbacks = Rc<RefCell<WidgetCallbacks<HeadlessColor>>>;

    #[test]
    fn missing_hook_is_reported_as_not_run() {
        let cell = RefCell::new(WidgetCallbacks::<HeadlessColor>::new());
        assert!(!WidgetCallbacks::dispatch(&cell, &EngineEvent::Clear));
    }

    #[test]
    fn reentrant_dispatch_of_the_running_hook_is_skipped() {
        let back: Rc<RefCell<Weak<RefCell<WidgetCallbacks<HeadlessColor>>>>> =
            Rc::new(RefCell::new(Weak::new()));
        let hits = Rc::new(Cell::new(0usize));
        let hook_back = Rc::clone(&back);
        let hook_hits = Rc::clone(&hits);
        let cell: SharedCallbacks = Rc::new(RefCell::new(WidgetCallbacks::new().on_hide(
            move || {
                hook_hits.set(hook_hits.get() + 1);
                if let Some(cell) = hook_back.borrow().upgrade() {
                    assert!(!WidgetCallbacks::dispatch(&cell, &EngineEvent::Hide));
                }
            },
        )));
        *back.borrow_mut() = Rc::downgrade(&cell);

        assert!(WidgetCallbacks::dispatch(&cell, &EngineEvent::Hide));
        assert!(WidgetCallbacks::dispatch(&cell, &EngineEvent::Hide));
        assert_eq!(hits.get(), 2);
    }
}

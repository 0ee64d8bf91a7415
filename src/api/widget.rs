use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::{
    NativeColor, OutputFormat, PartialOptions, PickerOptions, PickerValue, format_native,
};
use crate::engine::{Anchor, EngineEvent, EngineFactory, EventListener, PickerEngine};
use crate::error::{PickerError, PickerResult};

use super::{EVENT_BINDINGS, WidgetCallbacks, WidgetConfig, assemble, route_event};

/// Attachment phase of a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lifecycle {
    Unmounted,
    Mounting,
    Active,
    Unmounting,
}

type SharedValue<C> = Rc<RefCell<Option<PickerValue<C>>>>;
type SharedCallbacks<C> = Rc<RefCell<WidgetCallbacks<C>>>;

/// Embeddable color-picker widget bridging a host to one engine instance.
///
/// The widget owns its engine exclusively: it builds the engine on
/// [`mount`](Self::mount), forwards engine events to the host callbacks,
/// keeps the current value in sync in both directions and destroys the
/// engine on [`unmount`](Self::unmount). A widget mounts at most once per
/// lifetime; remounting after teardown needs a new widget.
pub struct ColorPickerWidget<E: PickerEngine> {
    config: WidgetConfig,
    builtin_defaults: PartialOptions,
    format: Option<OutputFormat>,
    options: Option<PickerOptions>,
    anchor: Option<Anchor>,
    engine: Option<E>,
    lifecycle: Lifecycle,
    torn_down: bool,
    value: SharedValue<E::Color>,
    callbacks: SharedCallbacks<E::Color>,
}

impl<E: PickerEngine> ColorPickerWidget<E> {
    /// Creates an unmounted widget.
    ///
    /// Fails with [`PickerError::UnsupportedFormat`] when the configured
    /// format is not recognized, before any engine is touched.
    pub fn new(config: WidgetConfig, callbacks: WidgetCallbacks<E::Color>) -> PickerResult<Self> {
        let format = config.output_format()?;
        Ok(Self {
            config,
            builtin_defaults: PartialOptions::default(),
            format,
            options: None,
            anchor: None,
            engine: None,
            lifecycle: Lifecycle::Unmounted,
            torn_down: false,
            value: Rc::new(RefCell::new(None)),
            callbacks: Rc::new(RefCell::new(callbacks)),
        })
    }

    /// Sets the widget-level defaults layered between caller options and the
    /// engine fallbacks.
    #[must_use]
    pub fn with_builtin_defaults(mut self, defaults: PartialOptions) -> Self {
        self.builtin_defaults = defaults;
        self
    }

    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    #[must_use]
    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    #[must_use]
    pub fn format(&self) -> Option<OutputFormat> {
        self.format
    }

    /// Options the current engine was constructed with.
    #[must_use]
    pub fn options(&self) -> Option<&PickerOptions> {
        self.options.as_ref()
    }

    #[must_use]
    pub fn anchor(&self) -> Option<&Anchor> {
        self.anchor.as_ref()
    }

    /// Builds the engine on `anchor` and wires every event listener.
    pub fn mount<F>(&mut self, factory: &mut F, anchor: Option<Anchor>) -> PickerResult<()>
    where
        F: EngineFactory<Engine = E>,
    {
        if self.torn_down {
            return Err(PickerError::engine_init(
                "widget was torn down; mount a new widget instead",
            ));
        }
        if self.lifecycle != Lifecycle::Unmounted {
            return Err(PickerError::engine_init("widget is already mounted"));
        }
        let Some(anchor) = anchor.filter(Anchor::is_resolvable) else {
            return Err(PickerError::engine_init("mount target anchor is missing"));
        };

        self.lifecycle = Lifecycle::Mounting;
        let current = self.value_seed();
        let options = assemble(
            &self.config.options,
            &self.config.components,
            &self.config.labels,
            current.as_deref(),
            &self.builtin_defaults,
        );

        let mut engine = match factory.create(&options, &anchor) {
            Ok(engine) => engine,
            Err(err) => {
                self.lifecycle = Lifecycle::Unmounted;
                warn!(anchor = %anchor, error = %err, "picker engine construction failed");
                return Err(match err {
                    err @ PickerError::EngineInit { .. } => err,
                    other => PickerError::engine_init(other.to_string()),
                });
            }
        };

        for binding in &EVENT_BINDINGS {
            trace!(event = %binding.kind, hook = binding.hook, "registering engine listener");
            engine.on(binding.kind, self.listener());
        }

        debug!(
            anchor = %anchor,
            theme = options.theme.name(),
            format = ?self.format,
            "picker widget mounted"
        );
        self.engine = Some(engine);
        self.options = Some(options);
        self.anchor = Some(anchor);
        self.lifecycle = Lifecycle::Active;
        Ok(())
    }

    fn listener(&self) -> EventListener<E::Color> {
        let value = Rc::clone(&self.value);
        let callbacks = Rc::clone(&self.callbacks);
        let format = self.format;
        Box::new(move |event: &EngineEvent<E::Color>| {
            let route = route_event(event, format);
            trace!(event = %route.binding.kind, hook = route.binding.hook, "routing engine event");
            if let Some(update) = route.value_update {
                *value.borrow_mut() = update;
            }
            WidgetCallbacks::dispatch(&callbacks, event);
        })
    }

    fn value_seed(&self) -> Option<String> {
        match self.value.borrow().as_ref()? {
            PickerValue::Text(text) => Some(text.clone()),
            PickerValue::Native(color) => Some(color.to_hexa()),
        }
    }

    /// Current value as last set by the host or reported by `init`/`save`.
    #[must_use]
    pub fn value(&self) -> Option<PickerValue<E::Color>> {
        self.value.borrow().clone()
    }

    /// Sets the current value from the host.
    ///
    /// The engine is only updated when `value` differs from the engine's own
    /// formatted color; this guard stops the engine's `save` echo from
    /// bouncing back into another update. Returns whether the engine accepted
    /// an update.
    pub fn set_value(&mut self, value: Option<&str>) -> bool {
        *self.value.borrow_mut() = value.map(|text| PickerValue::Text(text.to_owned()));

        let Some(engine) = self.engine.as_mut() else {
            return false;
        };
        let current = format_native(engine.color().as_ref(), self.format);
        let unchanged = match (&current, value) {
            (None, None) => true,
            (Some(PickerValue::Text(current)), Some(incoming)) => current == incoming,
            _ => false,
        };
        if unchanged {
            trace!(?value, "host value matches engine color; skipping update");
            return false;
        }

        trace!(?value, "pushing host value into engine");
        let accepted = engine.set_color(value);
        if !accepted {
            warn!(?value, "picker engine rejected host value");
        }
        accepted
    }

    /// Rebuilds the engine with `config` on the same anchor.
    ///
    /// An unmounted widget only stores the new config for its next mount.
    pub fn reconfigure<F>(&mut self, factory: &mut F, config: WidgetConfig) -> PickerResult<()>
    where
        F: EngineFactory<Engine = E>,
    {
        let format = config.output_format()?;
        if self.torn_down {
            return Err(PickerError::engine_init(
                "widget was torn down; mount a new widget instead",
            ));
        }
        self.config = config;
        self.format = format;

        if self.lifecycle != Lifecycle::Active {
            return Ok(());
        }
        let anchor = self.anchor.clone();
        self.release_engine()?;
        self.mount(factory, anchor)
    }

    pub fn show(&mut self) {
        if let Some(engine) = self.engine.as_mut() {
            engine.show();
        }
    }

    pub fn hide(&mut self) {
        if let Some(engine) = self.engine.as_mut() {
            engine.hide();
        }
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        if let Some(engine) = self.engine.as_mut() {
            engine.set_disabled(disabled);
        }
    }

    fn release_engine(&mut self) -> PickerResult<()> {
        let Some(mut engine) = self.engine.take() else {
            self.lifecycle = Lifecycle::Unmounted;
            return Ok(());
        };
        self.lifecycle = Lifecycle::Unmounting;
        let result = engine.destroy_and_remove();
        self.options = None;
        self.lifecycle = Lifecycle::Unmounted;
        result
    }

    /// Destroys the engine and clears the current value.
    ///
    /// Safe to call repeatedly; a widget without an engine has nothing to
    /// release.
    pub fn unmount(&mut self) -> PickerResult<()> {
        self.torn_down = true;
        if self.engine.is_none() {
            debug!("picker widget has no engine to tear down");
        }
        let result = self.release_engine();
        *self.value.borrow_mut() = None;
        self.anchor = None;
        debug!("picker widget unmounted");
        result
    }
}

impl<E: PickerEngine> Drop for ColorPickerWidget<E> {
    fn drop(&mut self) {
        if self.engine.is_none() {
            return;
        }
        if let Err(err) = self.release_engine() {
            warn!(error = %err, "picker engine teardown failed during drop");
        }
    }
}

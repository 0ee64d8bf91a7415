use crate::core::{
    ButtonLabels, ComponentOverrides, FALLBACK_DEFAULT_COLOR, LabelOverrides, PartialOptions,
    PickerOptions, merge_components,
};

/// Builds the complete engine configuration.
///
/// Each recognized option resolves as caller value, then `builtin_defaults`,
/// then the engine-level fallback. The default color prefers
/// `current_value` over every configured default. Pure: never fails.
#[must_use]
pub fn assemble(
    caller_options: &PartialOptions,
    caller_components: &ComponentOverrides,
    caller_labels: &LabelOverrides,
    current_value: Option<&str>,
    builtin_defaults: &PartialOptions,
) -> PickerOptions {
    let fallback = PickerOptions::default();
    let caller = caller_options;
    let builtin = builtin_defaults;

    macro_rules! pick {
        ($field:ident) => {
            caller
                .$field
                .as_ref()
                .or(builtin.$field.as_ref())
                .cloned()
                .unwrap_or(fallback.$field)
        };
    }

    let default = current_value
        .filter(|value| !value.trim().is_empty())
        .map(str::to_owned)
        .or_else(|| caller.default.clone())
        .or_else(|| builtin.default.clone())
        .unwrap_or_else(|| FALLBACK_DEFAULT_COLOR.to_owned());

    PickerOptions {
        theme: pick!(theme),
        close_on_scroll: pick!(close_on_scroll),
        app_class: caller
            .app_class
            .clone()
            .or_else(|| builtin.app_class.clone()),
        use_as_button: pick!(use_as_button),
        inline: pick!(inline),
        auto_reposition: pick!(auto_reposition),
        sliders: caller.sliders.or(builtin.sliders),
        disabled: pick!(disabled),
        lock_opacity: pick!(lock_opacity),
        output_precision: pick!(output_precision),
        comparison: pick!(comparison),
        default,
        swatches: pick!(swatches),
        default_representation: pick!(default_representation),
        show_always: pick!(show_always),
        close_with_key: pick!(close_with_key),
        position: pick!(position),
        adjustable_numbers: pick!(adjustable_numbers),
        i18n: resolve_labels(caller_labels),
        components: merge_components(caller_components),
    }
}

fn resolve_labels(labels: &LabelOverrides) -> ButtonLabels {
    let fallback = ButtonLabels::default();
    ButtonLabels {
        save: labels.save.clone().unwrap_or(fallback.save),
        clear: labels.clear.clone().unwrap_or(fallback.clear),
        cancel: labels.cancel.clone().unwrap_or(fallback.cancel),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Position, Theme};

    fn assemble_plain(caller: &PartialOptions, current: Option<&str>) -> PickerOptions {
        assemble(
            caller,
            &ComponentOverrides::default(),
            &LabelOverrides::default(),
            current,
            &PartialOptions::default(),
        )
    }

    #[test]
    fn empty_input_yields_engine_fallbacks() {
        let options = assemble_plain(&PartialOptions::default(), None);
        assert_eq!(options, PickerOptions::default());
        assert_eq!(options.default, FALLBACK_DEFAULT_COLOR);
    }

    #[test]
    fn caller_beats_builtin_and_builtin_beats_fallback() {
        let caller = PartialOptions {
            theme: Some(Theme::Nano),
            ..PartialOptions::default()
        };
        let builtin = PartialOptions {
            theme: Some(Theme::Monolith),
            position: Some(Position::TopEnd),
            ..PartialOptions::default()
        };
        let options = assemble(
            &caller,
            &ComponentOverrides::default(),
            &LabelOverrides::default(),
            None,
            &builtin,
        );
        assert_eq!(options.theme, Theme::Nano);
        assert_eq!(options.position, Position::TopEnd);
        assert!(options.auto_reposition);
    }

    #[test]
    fn default_color_resolution_order() {
        let caller = PartialOptions {
            default: Some("#FF0000".to_owned()),
            ..PartialOptions::default()
        };
        assert_eq!(assemble_plain(&caller, None).default, "#FF0000");
        assert_eq!(assemble_plain(&caller, Some("#0000FF")).default, "#0000FF");
        assert_eq!(assemble_plain(&caller, Some("  ")).default, "#FF0000");
    }

    #[test]
    fn labels_fall_back_per_button() {
        let labels = LabelOverrides {
            save: Some("Speichern".to_owned()),
            ..LabelOverrides::default()
        };
        let options = assemble(
            &PartialOptions::default(),
            &ComponentOverrides::default(),
            &labels,
            None,
            &PartialOptions::default(),
        );
        assert_eq!(options.i18n.save, "Speichern");
        assert_eq!(options.i18n.clear, "Clear");
        assert_eq!(options.i18n.cancel, "Cancel");
    }
}

use picker_rs::core::{
    ComponentOverrides, ComponentToggles, InteractionOverrides, ToggleMerge, merge_components,
};
use proptest::prelude::*;

fn interaction_overrides() -> impl Strategy<Value = InteractionOverrides> {
    (
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
    )
        .prop_map(
            |(hex, rgba, hsla, hsva, cmyk, input, cancel, clear, save)| InteractionOverrides {
                hex,
                rgba,
                hsla,
                hsva,
                cmyk,
                input,
                cancel,
                clear,
                save,
            },
        )
}

fn component_overrides() -> impl Strategy<Value = ComponentOverrides> {
    (
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
        interaction_overrides(),
    )
        .prop_map(
            |(palette, preview, opacity, hue, interaction)| ComponentOverrides {
                palette,
                preview,
                opacity,
                hue,
                interaction,
            },
        )
}

fn expect(partial: Option<bool>, default: bool) -> bool {
    partial.unwrap_or(default)
}

proptest! {
    #[test]
    fn merge_keeps_every_unspecified_default_at_every_depth(overrides in component_overrides()) {
        let defaults = ComponentToggles::default();
        let merged = merge_components(&overrides);

        prop_assert_eq!(merged.palette, expect(overrides.palette, defaults.palette));
        prop_assert_eq!(merged.preview, expect(overrides.preview, defaults.preview));
        prop_assert_eq!(merged.opacity, expect(overrides.opacity, defaults.opacity));
        prop_assert_eq!(merged.hue, expect(overrides.hue, defaults.hue));

        let partial = overrides.interaction;
        let base = defaults.interaction;
        let merged = merged.interaction;
        prop_assert_eq!(merged.hex, expect(partial.hex, base.hex));
        prop_assert_eq!(merged.rgba, expect(partial.rgba, base.rgba));
        prop_assert_eq!(merged.hsla, expect(partial.hsla, base.hsla));
        prop_assert_eq!(merged.hsva, expect(partial.hsva, base.hsva));
        prop_assert_eq!(merged.cmyk, expect(partial.cmyk, base.cmyk));
        prop_assert_eq!(merged.input, expect(partial.input, base.input));
        prop_assert_eq!(merged.cancel, expect(partial.cancel, base.cancel));
        prop_assert_eq!(merged.clear, expect(partial.clear, base.clear));
        prop_assert_eq!(merged.save, expect(partial.save, base.save));
    }

    #[test]
    fn merge_is_idempotent(overrides in component_overrides()) {
        let once = merge_components(&overrides);
        let twice = once.merge(&overrides);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn json_partial_tree_matches_typed_merge(overrides in component_overrides()) {
        let json = serde_json::to_string(&overrides).expect("serialize overrides");
        let parsed: ComponentOverrides = serde_json::from_str(&json).expect("parse overrides");
        prop_assert_eq!(merge_components(&parsed), merge_components(&overrides));
    }
}

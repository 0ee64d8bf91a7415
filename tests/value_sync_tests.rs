use picker_rs::PickerError;
use picker_rs::api::{ColorPickerWidget, WidgetCallbacks, WidgetConfig};
use picker_rs::core::{NativeColor, OutputFormat, PickerValue};
use picker_rs::engine::{Anchor, ChangeSource, HeadlessEngine, HeadlessFactory, HeadlessHandle};

fn mounted(config: WidgetConfig) -> (ColorPickerWidget<HeadlessEngine>, HeadlessHandle) {
    let mut factory = HeadlessFactory::new();
    let mut widget = ColorPickerWidget::<HeadlessEngine>::new(config, WidgetCallbacks::new())
        .expect("widget init");
    widget
        .mount(&mut factory, Some(Anchor::new("#picker")))
        .expect("mount");
    let handle = factory.last_handle().expect("engine handle");
    (widget, handle)
}

fn text(value: &str) -> Option<PickerValue<picker_rs::engine::HeadlessColor>> {
    Some(PickerValue::Text(value.to_owned()))
}

#[test]
fn equal_value_does_not_reach_engine() {
    let (mut widget, handle) = mounted(WidgetConfig::new().with_format("HEXA"));
    handle.complete_init();

    assert!(!widget.set_value(Some("#42445A")));
    assert!(handle.set_color_calls().is_empty());
}

#[test]
fn different_value_reaches_engine_exactly_once() {
    let (mut widget, handle) = mounted(WidgetConfig::new().with_format("HEXA"));
    handle.complete_init();

    assert!(widget.set_value(Some("#FF0000")));
    assert_eq!(handle.set_color_calls(), vec![Some("#FF0000".to_owned())]);

    // The engine echoes a save; feeding that value back is a no-op.
    let echoed = widget.value().expect("value after save");
    assert_eq!(echoed, PickerValue::Text("#FF0000".to_owned()));
    assert!(!widget.set_value(echoed.as_text()));
    assert_eq!(handle.set_color_calls().len(), 1);
}

#[test]
fn host_value_is_normalized_by_engine_save_echo() {
    let (mut widget, handle) = mounted(WidgetConfig::new().with_format("HEXA"));

    assert!(widget.set_value(Some("rgba(0, 0, 255, 1)")));
    assert_eq!(widget.value(), text("#0000FF"));
    assert_eq!(handle.current().map(|c| c.to_hexa()), Some("#0000FF".to_owned()));
}

#[test]
fn formatted_value_survives_a_full_engine_cycle() {
    for format in OutputFormat::ALL {
        let (mut widget, handle) = mounted(WidgetConfig::new().with_format(format.name()));
        handle.complete_init();
        let initial = widget.value().expect("init value");

        assert!(handle.pick("#FFFFFF", ChangeSource::Slider));
        handle.save();
        assert_ne!(widget.value().as_ref(), Some(&initial), "format {format}");

        assert!(widget.set_value(initial.as_text()), "format {format}");
        let engine_color = handle.current().expect("engine color");
        assert_eq!(
            Some(engine_color.to_format(format).as_str()),
            initial.as_text(),
            "format {format}"
        );
        assert_eq!(widget.value(), Some(initial), "format {format}");
    }
}

#[test]
fn legacy_hex_behaves_like_hexa() {
    let (mut hex_widget, hex_handle) = mounted(WidgetConfig::new().with_format("HEX"));
    let (mut hexa_widget, hexa_handle) = mounted(WidgetConfig::new().with_format("HEXA"));
    assert_eq!(hex_widget.format(), Some(OutputFormat::Hexa));

    hex_handle.complete_init();
    hexa_handle.complete_init();
    assert_eq!(hex_widget.value(), hexa_widget.value());

    assert!(hex_widget.set_value(Some("#00FF00")));
    assert!(hexa_widget.set_value(Some("#00FF00")));
    assert_eq!(hex_widget.value(), hexa_widget.value());
    assert_eq!(hex_handle.set_color_calls(), hexa_handle.set_color_calls());
}

#[test]
fn unsupported_format_fails_before_engine_construction() {
    let factory = HeadlessFactory::new();
    let err = ColorPickerWidget::<HeadlessEngine>::new(
        WidgetConfig::new().with_format("XYZ"),
        WidgetCallbacks::new(),
    )
    .err()
    .expect("XYZ must be rejected");

    assert!(matches!(err, PickerError::UnsupportedFormat { ref format } if format == "XYZ"));
    assert_eq!(factory.created_count(), 0);
}

#[test]
fn clearing_from_host_only_reaches_engine_when_it_holds_a_color() {
    let (mut widget, handle) = mounted(WidgetConfig::new().with_format("CMYK"));

    assert!(widget.set_value(None));
    assert_eq!(handle.set_color_calls(), vec![None]);
    assert_eq!(handle.current(), None);
    assert_eq!(widget.value(), None);

    assert!(!widget.set_value(None));
    assert_eq!(handle.set_color_calls().len(), 1);
}

#[test]
fn unformatted_mode_always_forwards_host_strings() {
    let (mut widget, handle) = mounted(WidgetConfig::new());
    handle.complete_init();

    assert!(widget.set_value(Some("#42445A")));
    assert_eq!(handle.set_color_calls(), vec![Some("#42445A".to_owned())]);
    assert!(widget.value().and_then(|v| v.as_native().cloned()).is_some());
}

#[test]
fn rejected_value_is_kept_as_host_text() {
    let (mut widget, handle) = mounted(WidgetConfig::new().with_format("HEXA"));

    assert!(!widget.set_value(Some("not-a-color")));
    assert_eq!(handle.set_color_calls().len(), 1);
    assert_eq!(widget.value(), text("not-a-color"));
    assert_eq!(handle.current().map(|c| c.to_hexa()), Some("#42445A".to_owned()));
}

#[test]
fn value_set_before_mount_seeds_engine_default() {
    let mut factory = HeadlessFactory::new();
    let mut widget = ColorPickerWidget::<HeadlessEngine>::new(
        WidgetConfig::new()
            .with_format("HEXA")
            .with_default_color("#FFFFFF"),
        WidgetCallbacks::new(),
    )
    .expect("widget init");

    assert!(!widget.set_value(Some("#000000")));
    widget
        .mount(&mut factory, Some(Anchor::new("#picker")))
        .expect("mount");
    let handle = factory.last_handle().expect("engine handle");

    assert_eq!(handle.options().default, "#000000");
    assert!(handle.set_color_calls().is_empty());
}

use serde_json::json;
use stats_printer::rules::{DEFAULT_RULES_ID, DefaultRules};
use stats_printer::{
    HookCategory, HookRegistry, PrinterError, PrinterResult, RenderOptions, StatsPrinter,
    StatsPrinterPlugin,
};

struct UppercaseAssets {
    id: String,
}

impl StatsPrinterPlugin for UppercaseAssets {
    fn id(&self) -> &str {
        &self.id
    }

    fn apply(&self, hooks: &mut HookRegistry) -> PrinterResult<()> {
        hooks.tap_print("asset.name", |value, _| {
            value.as_str().map(str::to_uppercase)
        })
    }
}

struct BrokenPlugin;

impl StatsPrinterPlugin for BrokenPlugin {
    fn id(&self) -> &str {
        "broken"
    }

    fn apply(&self, hooks: &mut HookRegistry) -> PrinterResult<()> {
        hooks.tap_print("asset..name", |_, _| None)
    }
}

#[test]
fn default_rules_register_once() {
    let mut printer = StatsPrinter::with_default_rules().expect("default rules");
    assert!(printer.has_plugin(DEFAULT_RULES_ID));
    assert_eq!(printer.plugin_count(), 1);

    let err = printer
        .register_plugin(&DefaultRules)
        .expect_err("duplicate plugin");
    match err {
        PrinterError::InvalidPlugin(message) => assert_eq!(
            message,
            "plugin with id `default-stats-printer` is already registered"
        ),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(printer.plugin_count(), 1);
}

#[test]
fn empty_plugin_ids_are_rejected() {
    let mut printer = StatsPrinter::new();
    let err = printer
        .register_plugin(&UppercaseAssets { id: String::new() })
        .expect_err("empty id");
    assert!(matches!(err, PrinterError::InvalidPlugin(_)));
    assert!(printer.hooks().is_empty());
}

#[test]
fn plugins_propagate_tap_errors() {
    let mut printer = StatsPrinter::new();
    let err = printer.register_plugin(&BrokenPlugin).expect_err("bad key");
    assert!(matches!(err, PrinterError::InvalidSelector { .. }));
    assert!(!printer.has_plugin("broken"));
}

#[test]
fn plugin_registered_first_overrides_defaults() {
    let mut printer = StatsPrinter::new();
    printer
        .register_plugin(&UppercaseAssets {
            id: "uppercase".to_owned(),
        })
        .expect("register uppercase");
    printer
        .register_plugin(&DefaultRules)
        .expect("register defaults");
    assert_eq!(
        printer.hooks().handler_count(HookCategory::Print, "asset.name"),
        2
    );

    let output = printer.render(
        &json!({"assets": [{"name": "bundle.js", "size": 1200, "emitted": true}]}),
        &RenderOptions::default(),
    );
    assert_eq!(output, "BUNDLE.JS 1.17 KiB [emitted]");
}

#[test]
fn plugin_registered_after_defaults_only_fills_gaps() {
    let mut printer = StatsPrinter::with_default_rules().expect("default rules");
    printer
        .register_plugin(&UppercaseAssets {
            id: "uppercase".to_owned(),
        })
        .expect("register uppercase");

    let output = printer.render(
        &json!({"assets": [{"name": "bundle.js", "size": 1200}]}),
        &RenderOptions::default(),
    );
    assert_eq!(output, "bundle.js 1.17 KiB");
}

#[test]
fn default_rules_cover_every_category() {
    let printer = StatsPrinter::with_default_rules().expect("default rules");
    for category in HookCategory::ALL {
        assert!(
            printer.hooks().category_len(category) > 0,
            "no handlers for {category}"
        );
    }
}

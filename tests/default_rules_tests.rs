use serde_json::{Value, json};
use stats_printer::stats::{Asset, Compilation, StatsError};
use stats_printer::{RenderOptions, StatsPrinter};

fn render(stats: Value) -> String {
    render_with(stats, &RenderOptions::default())
}

fn render_with(stats: Value, options: &RenderOptions) -> String {
    StatsPrinter::with_default_rules()
        .expect("default rules")
        .render(&stats, options)
}

#[test]
fn clean_build_reports_success() {
    assert_eq!(
        render(json!({"errorsCount": 0, "warningsCount": 0})),
        "Rspack compiled successfully"
    );
}

#[test]
fn summary_carries_version_time_and_hash() {
    let output = render(json!({
        "hash": "abc123",
        "rspackVersion": "1.0.0",
        "time": 123,
        "errorsCount": 0,
        "warningsCount": 0
    }));
    assert_eq!(output, "Rspack 1.0.0 compiled successfully in 123 ms (abc123)");
}

#[test]
fn named_compilation_puts_version_in_parentheses() {
    let output = render(json!({
        "name": "client",
        "rspackVersion": "1.0.0",
        "errorsCount": 0,
        "warningsCount": 0
    }));
    assert_eq!(output, "client (Rspack 1.0.0) compiled successfully");
}

#[test]
fn summary_without_counts_is_plain_compiled() {
    assert_eq!(render(json!({"hash": "abc"})), "Rspack compiled (abc)");
}

#[test]
fn tool_name_is_configurable() {
    let options = RenderOptions::default().with_tool_name("Webpack");
    let output = render_with(
        json!({"rspackVersion": "5.0.0", "errorsCount": 0, "warningsCount": 0}),
        &options,
    );
    assert_eq!(output, "Webpack 5.0.0 compiled successfully");
}

#[test]
fn emitted_asset_line() {
    let output = render(json!({
        "assets": [{"name": "bundle.js", "size": 1200, "emitted": true}]
    }));
    assert_eq!(output, "bundle.js 1.17 KiB [emitted]");
}

#[test]
fn emitted_flag_is_green() {
    let options = RenderOptions::default().with_colors(true);
    let output = render_with(
        json!({"assets": [{"name": "bundle.js", "size": 1200, "emitted": true}]}),
        &options,
    );
    assert!(
        output.contains("\u{1b}[1m\u{1b}[32m[emitted]\u{1b}[39m\u{1b}[22m"),
        "{output:?}"
    );
}

#[test]
fn asset_chunk_names_and_filtered_assets() {
    let output = render(json!({
        "assets": [
            {"name": "main.js", "size": 10, "chunkNames": ["main"], "chunks": [0]}
        ],
        "filteredAssets": 3
    }));
    assert_eq!(output, "main.js 10 bytes {0} (name: main)\n+ 3 assets");
}

#[test]
fn oversized_assets_are_flagged() {
    let output = render(json!({
        "assets": [{"name": "vendor.js", "size": 512000, "isOverSizeLimit": true}]
    }));
    assert_eq!(output, "vendor.js 500 KiB [big]");
}

#[test]
fn typed_compilation_renders_like_json() {
    let compilation = Compilation {
        assets: Some(vec![Asset::new("bundle.js", 1200.0).emitted()]),
        ..Compilation::default()
    };
    let printer = StatsPrinter::with_default_rules().expect("default rules");
    let output = printer
        .render_compilation(&compilation, &RenderOptions::default())
        .expect("render typed stats");
    assert_eq!(output, "bundle.js 1.17 KiB [emitted]");
}

#[test]
fn module_line_with_flags() {
    let output = render(json!({
        "modules": [{
            "id": 1,
            "name": "./src/index.js",
            "sizes": {"javascript": 120},
            "built": true,
            "codeGenerated": true
        }]
    }));
    assert_eq!(output, "./src/index.js [1] 120 bytes [built] [code generated]");
}

#[test]
fn module_id_equal_to_name_is_printed_once() {
    let output = render(json!({
        "modules": [{"id": "./src/a.js", "name": "./src/a.js"}]
    }));
    assert_eq!(output, "./src/a.js");
}

#[test]
fn nested_modules_hang_off_a_gutter() {
    let output = render(json!({
        "modules": [{
            "name": "./src/index.js + 2 modules",
            "modules": [{"name": "./a.js"}, {"name": "./b.js"}]
        }]
    }));
    assert_eq!(output, "./src/index.js + 2 modules\n  | ./a.js\n  | ./b.js");
}

#[test]
fn module_exports_are_put_on_their_own_line() {
    let output = render(json!({
        "modules": [{
            "name": "./src/lib.js",
            "providedExports": ["a", "b"],
            "usedExports": ["a"]
        }]
    }));
    assert_eq!(
        output,
        "./src/lib.js\n  [exports: a, b]\n  [only some exports used: a]"
    );
}

#[test]
fn chunk_line_drops_initial_next_to_entry() {
    let output = render(json!({
        "chunks": [{
            "id": 0,
            "files": ["main.js"],
            "names": ["main"],
            "sizes": {"javascript": 1200},
            "entry": true,
            "initial": true,
            "rendered": true
        }]
    }));
    assert_eq!(output, "chunk {0} main.js (main) 1.17 KiB [entry] [rendered]");
}

#[test]
fn chunk_relations_use_directional_brackets() {
    let output = render(json!({
        "chunks": [{"id": 1, "parents": [0], "children": [2, 3]}]
    }));
    assert_eq!(output, "chunk {1} <{0}> >{2}< >{3}<");
}

#[test]
fn entrypoint_line() {
    let output = render(json!({
        "entrypoints": {
            "main": {
                "name": "main",
                "assets": [{"name": "main.js", "size": 100}],
                "assetsSize": 100
            }
        }
    }));
    assert_eq!(output, "Entrypoint main 100 bytes = main.js");
}

#[test]
fn named_chunk_groups_skip_entrypoints() {
    let output = render(json!({
        "entrypoints": {
            "main": {"name": "main", "assets": [{"name": "main.js"}]}
        },
        "namedChunkGroups": {
            "main": {"name": "main", "assets": [{"name": "main.js"}]},
            "lazy": {"name": "lazy", "assets": [{"name": "lazy.js"}]}
        }
    }));
    assert_eq!(
        output,
        "Entrypoint main = main.js\nChunk Group lazy = lazy.js"
    );
}

#[test]
fn errors_and_warnings_are_spaced_out() {
    let output = render(json!({
        "warnings": [{"message": "first"}, {"message": "second"}],
        "warningsCount": 2,
        "errors": [{"message": "Module not found"}],
        "errorsCount": 1
    }));
    assert_eq!(
        output,
        "WARNING in first\n\nWARNING in second\n\nERROR in Module not found\n\nRspack compiled with 1 error and 2 warnings"
    );
}

#[test]
fn error_location_precedes_message() {
    let output = render(json!({
        "errors": [{
            "moduleName": "./src/index.js",
            "loc": "1:0-20",
            "message": "Unexpected token"
        }],
        "errorsCount": 1
    }));
    assert!(
        output.starts_with("ERROR in ./src/index.js 1:0-20\nUnexpected token"),
        "{output}"
    );
}

#[test]
fn typed_diagnostics_count_themselves() {
    let compilation =
        Compilation::default().with_diagnostics(vec![StatsError::new("boom")], Vec::new());
    let printer = StatsPrinter::with_default_rules().expect("default rules");
    let output = printer
        .render_compilation(&compilation, &RenderOptions::default())
        .expect("render typed stats");
    assert_eq!(output, "ERROR in boom\n\nRspack compiled with 1 error");
}

#[test]
fn hidden_child_warnings_are_counted() {
    let output = render(json!({"warnings": [], "warningsCount": 2}));
    assert!(
        output.contains(
            "2 WARNINGS in child compilations (Use 'stats.children: true' resp. '--stats-children' for more details)"
        ),
        "{output}"
    );
    assert!(output.ends_with("Rspack compiled with 2 warnings"), "{output}");
}

#[test]
fn child_warning_hint_counts_only_unlisted_warnings() {
    let output = render(json!({
        "warnings": [{"message": "w1"}, {"message": "w2"}, {"message": "w3"}],
        "warningsCount": 5
    }));
    assert_eq!(
        output.matches("2 WARNINGS in child compilations").count(),
        1,
        "{output}"
    );
    assert!(output.ends_with("Rspack compiled with 5 warnings"), "{output}");
}

#[test]
fn shown_children_suppress_the_hint() {
    let output = render(json!({
        "warnings": [],
        "warningsCount": 1,
        "children": [{"name": "child", "errorsCount": 0, "warningsCount": 0}]
    }));
    assert!(!output.contains("child compilations"), "{output}");
    assert!(output.contains("  Child child compiled successfully"), "{output}");
}

#[test]
fn logging_entries_carry_level_markers() {
    let output = render(json!({
        "logging": {
            "MyPlugin": {
                "entries": [
                    {"type": "warn", "message": "x"},
                    {"type": "info", "message": "y"}
                ],
                "filteredEntries": 0,
                "debug": false
            }
        }
    }));
    assert_eq!(output, "LOG from MyPlugin\n<w> x\n<i> y\n");
}

#[test]
fn logging_groups_without_entries_are_silent() {
    let output = render(json!({
        "logging": {"Quiet": {"entries": [], "filteredEntries": 0, "debug": false}}
    }));
    assert_eq!(output.trim(), "");
}

#[test]
fn unknown_logging_types_fall_back_to_plain_entries() {
    let output = render(json!({
        "logging": {
            "MyPlugin": {
                "entries": [
                    {"type": "bogus", "message": "z"},
                    {"type": "warn", "message": "x"}
                ],
                "filteredEntries": 0,
                "debug": false
            }
        }
    }));
    assert!(output.starts_with("LOG from MyPlugin\n"), "{output}");
    assert!(output.contains("<w> x"), "{output}");
    assert!(!output.contains('z'), "{output}");
}

#[test]
fn logging_hidden_lines_are_counted() {
    let output = render(json!({
        "logging": {
            "MyPlugin": {
                "entries": [{"type": "log", "message": "z"}],
                "filteredEntries": 4,
                "debug": false
            }
        }
    }));
    assert!(output.contains("+ 4 hidden lines"), "{output}");
    assert!(output.contains("    z"), "{output}");
}

#[test]
fn non_string_color_overrides_keep_the_default() {
    let options =
        RenderOptions::from_json_str(r#"{"colors": {"green": true}}"#).expect("options");
    let output = render_with(json!({"errorsCount": 0, "warningsCount": 0}), &options);
    assert!(
        output.contains("\u{1b}[1m\u{1b}[32msuccessfully\u{1b}[39m\u{1b}[22m"),
        "{output:?}"
    );
}

#[test]
fn colors_wrap_the_success_message() {
    let options = RenderOptions::default().with_colors(true);
    let output = render_with(json!({"errorsCount": 0, "warningsCount": 0}), &options);
    assert!(
        output.contains("\u{1b}[1m\u{1b}[32msuccessfully\u{1b}[39m\u{1b}[22m"),
        "{output:?}"
    );
}

#[test]
fn color_overrides_replace_start_sequences() {
    let options = RenderOptions::default().with_color_overrides([("green", "<g>")]);
    let output = render_with(json!({"errorsCount": 0, "warningsCount": 0}), &options);
    assert!(output.contains("<g>successfully"), "{output:?}");
}

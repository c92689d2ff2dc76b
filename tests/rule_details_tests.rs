use serde_json::{Value, json};
use stats_printer::{RenderOptions, StatsPrinter};

fn render(stats: Value) -> String {
    StatsPrinter::with_default_rules()
        .expect("default rules")
        .render(&stats, &RenderOptions::default())
}

#[test]
fn module_reasons_follow_the_module() {
    let output = render(json!({
        "modules": [{
            "name": "./b.js",
            "reasons": [{
                "type": "harmony import",
                "userRequest": "./b",
                "moduleId": 1,
                "module": "./a.js",
                "resolvedModule": "./a.js",
                "loc": "1:0-20"
            }]
        }]
    }));
    assert_eq!(output, "./b.js\n  harmony import ./b [1] ./a.js 1:0-20");
}

#[test]
fn inactive_reasons_are_flagged() {
    let output = render(json!({
        "modules": [{
            "name": "./b.js",
            "reasons": [{"active": false, "type": "cjs require", "module": "./a.js"}]
        }]
    }));
    assert_eq!(output, "./b.js\n  [inactive] cjs require ./a.js");
}

#[test]
fn zero_filtered_counts_print_nothing() {
    let cases = [
        (json!({"modules": [{"name": "a"}], "filteredModules": 0}), "a"),
        (
            json!({"assets": [{"name": "a.js", "size": 10}], "filteredAssets": 0}),
            "a.js 10 bytes",
        ),
        (
            json!({"assets": [{"name": "a.js", "size": 10, "filteredChildren": 0}]}),
            "a.js 10 bytes",
        ),
        (
            json!({"modules": [{
                "name": "./b.js",
                "reasons": [{"type": "cjs require", "module": "./a.js"}],
                "filteredReasons": 0
            }]}),
            "./b.js\n  cjs require ./a.js",
        ),
        (
            json!({"modules": [{"name": "./b.js", "filteredChildren": 0}]}),
            "./b.js",
        ),
    ];
    for (stats, expected) in cases {
        assert_eq!(render(stats), expected);
    }
}

#[test]
fn module_profile_groups_phases_in_brackets() {
    let output = render(json!({
        "modules": [{
            "name": "./a.js",
            "profile": {"total": 10, "resolving": 2, "building": 8}
        }]
    }));
    assert_eq!(output, "./a.js\n  10 ms (resolving: 2 ms, building: 8 ms)");
}

#[test]
fn module_diagnostics_and_cacheability() {
    let output = render(json!({
        "modules": [{
            "name": "./a.js",
            "cacheable": false,
            "warnings": 2,
            "errors": 1
        }]
    }));
    assert_eq!(output, "./a.js [not cacheable] [2 warnings] [1 error]");
}

#[test]
fn module_layers_and_loader_prefixes() {
    let output = render(json!({
        "modules": [{"name": "css-loader!./src/app.css", "layer": "styles"}]
    }));
    assert_eq!(output, "css-loader!./src/app.css (in styles)");
}

#[test]
fn chunk_origins_print_below_the_chunk() {
    let output = render(json!({
        "chunks": [{
            "id": 0,
            "origins": [{
                "request": "./src/index.js",
                "moduleId": 1,
                "moduleName": "./src/app.js",
                "loc": "main"
            }]
        }]
    }));
    assert_eq!(output, "chunk {0}\n  > ./src/index.js [1] ./src/app.js main");
}

#[test]
fn chunk_children_by_order_are_sorted_by_relation() {
    let output = render(json!({
        "chunks": [{"id": 0, "childrenByOrder": {"prefetch": [2], "preload": [1]}}]
    }));
    assert_eq!(output, "chunk {0} (prefetch: {2}) (preload: {1})");
}

#[test]
fn chunk_group_children_are_listed_per_relation() {
    let output = render(json!({
        "entrypoints": {
            "main": {
                "name": "main",
                "assets": [{"name": "main.js"}],
                "children": {
                    "prefetch": [{"name": "lazy", "assets": [{"name": "lazy.js"}], "chunks": [1]}]
                }
            }
        }
    }));
    assert_eq!(
        output,
        "Entrypoint main = main.js\n  prefetch: lazy.js {1} (name: lazy)"
    );
}

#[test]
fn chunk_group_asset_sizes_show_with_several_assets() {
    let output = render(json!({
        "entrypoints": {
            "main": {
                "name": "main",
                "assets": [{"name": "runtime.js", "size": 100}, {"name": "main.js", "size": 2048}],
                "assetsSize": 2148
            }
        }
    }));
    assert_eq!(
        output,
        "Entrypoint main 2.1 KiB = runtime.js 100 bytes main.js 2 KiB"
    );
}

#[test]
fn related_assets_are_indented() {
    let output = render(json!({
        "assets": [{
            "name": "main.js",
            "size": 10,
            "related": [{"name": "main.js.map", "size": 20, "type": "sourceMap"}]
        }]
    }));
    assert_eq!(output, "main.js 10 bytes\n  sourceMap main.js.map 20 bytes");
}

#[test]
fn asset_info_flags() {
    let output = render(json!({
        "assets": [{
            "name": "logo.png",
            "size": 10,
            "info": {"immutable": true, "sourceFilename": "src/logo.png"}
        }]
    }));
    assert_eq!(output, "logo.png 10 bytes [immutable] [from: src/logo.png]");
}

#[test]
fn module_trace_follows_the_error() {
    let output = render(json!({
        "errors": [{
            "message": "boom",
            "moduleName": "./b.js",
            "moduleTrace": [{"originName": "./a.js", "dependencies": [{"loc": "1:0-10"}]}]
        }],
        "errorsCount": 1
    }));
    assert!(
        output.starts_with("ERROR in ./b.js\nboom\n @ ./a.js 1:0-10"),
        "{output}"
    );
}

#[test]
fn loader_chains_are_split_in_error_module_names() {
    let output = render(json!({
        "errors": [{"message": "boom", "moduleName": "babel-loader!./src/a.js"}],
        "errorsCount": 1
    }));
    assert!(
        output.starts_with("ERROR in ./src/a.js (babel-loader!./src/a.js)\nboom"),
        "{output}"
    );
}

#[test]
fn filtered_warning_details_are_explained() {
    let output = render(json!({
        "warnings": [{"message": "w"}],
        "warningsCount": 1,
        "filteredWarningDetailsCount": 2
    }));
    assert!(
        output.contains(
            "2 warnings have detailed information that is not shown.\nUse 'stats.errorDetails: true' resp. '--stats-error-details' to show it."
        ),
        "{output}"
    );
}

#[test]
fn environment_and_public_path() {
    let output = render(json!({"env": {"production": true}, "publicPath": ""}));
    assert_eq!(
        output,
        "Environment (--env): {\n  \"production\": true\n}\nPublicPath: (none)"
    );
}

#[test]
fn logging_groups_indent_their_children() {
    let output = render(json!({
        "logging": {
            "MyPlugin": {
                "entries": [{
                    "type": "group",
                    "message": "outer",
                    "children": [{"type": "log", "message": "inner"}]
                }],
                "filteredEntries": 0,
                "debug": false
            }
        }
    }));
    assert_eq!(output, "LOG from MyPlugin\n<-> outer\n      inner\n");
}

#[test]
fn collapsed_groups_hide_their_children() {
    let output = render(json!({
        "logging": {
            "MyPlugin": {
                "entries": [{
                    "type": "groupCollapsed",
                    "message": "outer",
                    "children": [{"type": "log", "message": "inner"}]
                }],
                "filteredEntries": 0,
                "debug": false
            }
        }
    }));
    assert_eq!(output, "LOG from MyPlugin\n<+> outer\n");
}

#[test]
fn logging_traces_and_clear_markers() {
    let output = render(json!({
        "logging": {
            "MyPlugin": {
                "entries": [
                    {"type": "trace", "message": "t", "trace": ["at foo", "at bar"]},
                    {"type": "clear"}
                ],
                "filteredEntries": 0,
                "debug": true
            }
        }
    }));
    assert!(output.starts_with("DEBUG LOG from MyPlugin\n"), "{output}");
    assert!(output.contains("    t\n| at foo\n| at bar"), "{output}");
    assert!(output.contains("    -------"), "{output}");
}

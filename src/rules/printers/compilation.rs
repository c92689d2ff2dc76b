use serde_json::{Map, Value};

use crate::format::{as_number, display_number, is_truthy, plural};
use crate::printer::PrintContext;
use crate::rules::PrintRule;

const CHILDREN_HINT: &str = " (Use 'stats.children: true' resp. '--stats-children' for more details)";
const ERROR_DETAILS_HINT: &str =
    "detailed information that is not shown.\nUse 'stats.errorDetails: true' resp. '--stats-error-details' to show it.";

pub(in crate::rules) const PRINTERS: &[(&str, PrintRule)] = &[
    ("compilation.summary!", summary),
    (
        "compilation.filteredWarningDetailsCount",
        filtered_warning_details,
    ),
    ("compilation.filteredErrorDetailsCount", filtered_error_details),
    ("compilation.env", env),
    ("compilation.publicPath", public_path),
    ("compilation.entrypoints", entrypoints),
    ("compilation.namedChunkGroups", named_chunk_groups),
    ("compilation.assetsByChunkName", assets_by_chunk_name),
    ("compilation.logging", logging),
    ("compilation.warningsInChildren!", warnings_in_children),
    ("compilation.errorsInChildren!", errors_in_children),
];

fn summary(_: &Value, ctx: &PrintContext<'_>) -> Option<String> {
    let compilation = ctx.get("compilation")?;
    let colors = ctx.colors();
    let root = ctx.type_path().as_str() == "compilation.summary!";
    let field = |name: &str| compilation.get(name).filter(|value| is_truthy(value));
    let errors_count = compilation.get("errorsCount").and_then(as_number);
    let warnings_count = compilation.get("warningsCount").and_then(as_number);

    let warnings_message = match warnings_count {
        Some(count) if count > 0.0 => colors.yellow(&format!(
            "{} {}",
            display_number(count),
            plural(count, "warning", "warnings")
        )),
        _ => String::new(),
    };
    let errors_message = match errors_count {
        Some(count) if count > 0.0 => colors.red(&format!(
            "{} {}",
            display_number(count),
            plural(count, "error", "errors")
        )),
        _ => String::new(),
    };
    let time_message = match field("time").and_then(as_number) {
        Some(time) if root => format!(" in {}", ctx.format_time(time)),
        _ => String::new(),
    };
    let hash_message = field("hash")
        .map(|hash| format!(" ({})", crate::format::display_value(hash)))
        .unwrap_or_default();
    let built_at_message = match field("builtAt").and_then(as_number) {
        Some(built_at) if root => format!("{}: ", ctx.format_date_time(built_at)),
        _ => String::new(),
    };
    let tool_name = ctx.options().tool_name.as_str();
    let version_message = match field("rspackVersion") {
        Some(version) if root => format!("{tool_name} {}", crate::format::display_value(version)),
        _ => String::new(),
    };
    let name = field("name").map(crate::format::display_value);
    let name_message = match (&name, root) {
        (Some(name), true) => colors.bold(name),
        (Some(name), false) => format!("Child {}", colors.bold(name)),
        (None, true) => String::new(),
        (None, false) => "Child".to_owned(),
    };
    let subject_message = if !name_message.is_empty() && !version_message.is_empty() {
        format!("{name_message} ({version_message})")
    } else if !version_message.is_empty() {
        version_message.clone()
    } else if !name_message.is_empty() {
        name_message
    } else {
        tool_name.to_owned()
    };

    let clean = errors_count == Some(0.0) && warnings_count == Some(0.0);
    let status_message = match (errors_message.is_empty(), warnings_message.is_empty()) {
        (false, false) => format!("compiled with {errors_message} and {warnings_message}"),
        (false, true) => format!("compiled with {errors_message}"),
        (true, false) => format!("compiled with {warnings_message}"),
        (true, true) if clean => format!("compiled {}", colors.green("successfully")),
        (true, true) => "compiled".to_owned(),
    };

    let has_content = !built_at_message.is_empty()
        || !version_message.is_empty()
        || !errors_message.is_empty()
        || !warnings_message.is_empty()
        || clean
        || !time_message.is_empty()
        || !hash_message.is_empty();
    has_content.then(|| {
        format!("{built_at_message}{subject_message} {status_message}{time_message}{hash_message}")
    })
}

fn details_count(value: &Value, one: &str, many: &str) -> Option<String> {
    let count = value.as_f64().filter(|count| *count != 0.0)?;
    Some(format!(
        "{} {} {ERROR_DETAILS_HINT}",
        display_number(count),
        plural(count, one, many)
    ))
}

fn filtered_warning_details(value: &Value, _: &PrintContext<'_>) -> Option<String> {
    details_count(value, "warning has", "warnings have")
}

fn filtered_error_details(value: &Value, ctx: &PrintContext<'_>) -> Option<String> {
    details_count(value, "error has", "errors have").map(|text| ctx.colors().yellow(&text))
}

fn env(value: &Value, ctx: &PrintContext<'_>) -> Option<String> {
    if !is_truthy(value) {
        return None;
    }
    let pretty = serde_json::to_string_pretty(value).ok()?;
    Some(format!("Environment (--env): {}", ctx.colors().bold(&pretty)))
}

fn public_path(value: &Value, ctx: &PrintContext<'_>) -> Option<String> {
    let path = value
        .as_str()
        .filter(|path| !path.is_empty())
        .unwrap_or("(none)");
    Some(format!("PublicPath: {}", ctx.colors().bold(path)))
}

fn entrypoints(value: &Value, ctx: &PrintContext<'_>) -> Option<String> {
    let groups = value.as_object()?;
    let groups = Value::Array(groups.values().cloned().collect());
    let ctx = ctx.with_annotation("chunkGroupKind", "Entrypoint");
    ctx.printer().print_in(ctx.type_path(), &groups, &ctx)
}

fn named_chunk_groups(value: &Value, ctx: &PrintContext<'_>) -> Option<String> {
    let groups = value.as_object()?;
    let entrypoints = ctx
        .lookup("compilation", "entrypoints")
        .filter(|entrypoints| is_truthy(entrypoints))
        .and_then(Value::as_object);
    let is_entrypoint = |group: &Value| -> bool {
        let (Some(entrypoints), Some(name)) = (entrypoints, group.get("name").and_then(Value::as_str))
        else {
            return false;
        };
        entrypoints.contains_key(name)
    };
    let groups = Value::Array(
        groups
            .values()
            .filter(|group| !is_entrypoint(group))
            .cloned()
            .collect(),
    );
    let ctx = ctx.with_annotation("chunkGroupKind", "Chunk Group");
    ctx.printer().print_in(ctx.type_path(), &groups, &ctx)
}

fn assets_by_chunk_name(_: &Value, _: &PrintContext<'_>) -> Option<String> {
    Some(String::new())
}

/// Logging arrives as a map of origin name to group; each group is printed
/// with its origin under `name`.
fn logging(value: &Value, ctx: &PrintContext<'_>) -> Option<String> {
    let origins = value.as_object()?;
    let groups = origins
        .iter()
        .map(|(name, group)| {
            let mut group = match group {
                Value::Object(fields) => fields.clone(),
                _ => Map::new(),
            };
            group.insert("name".to_owned(), Value::String(name.clone()));
            Value::Object(group)
        })
        .collect();
    ctx.printer()
        .print_in(ctx.type_path(), &Value::Array(groups), ctx)
}

/// Diagnostics counted on the compilation but missing from its own list
/// were raised by child compilations that are not shown.
fn in_children(ctx: &PrintContext<'_>, list: &str, count: &str) -> Option<f64> {
    let compilation = ctx.get("compilation")?;
    if compilation.get("children").is_some_and(is_truthy) {
        return None;
    }
    let total = compilation.get(count).and_then(as_number).filter(|n| *n > 0.0)?;
    let shown = compilation.get(list).filter(|list| is_truthy(list))?;
    let shown = shown.as_array().map_or(0, Vec::len) as f64;
    Some(total - shown).filter(|hidden| *hidden > 0.0)
}

fn warnings_in_children(_: &Value, ctx: &PrintContext<'_>) -> Option<String> {
    let hidden = in_children(ctx, "warnings", "warningsCount")?;
    Some(ctx.colors().yellow(&format!(
        "{} {} in child compilations{CHILDREN_HINT}",
        display_number(hidden),
        plural(hidden, "WARNING", "WARNINGS")
    )))
}

fn errors_in_children(_: &Value, ctx: &PrintContext<'_>) -> Option<String> {
    let hidden = in_children(ctx, "errors", "errorsCount")?;
    Some(ctx.colors().red(&format!(
        "{} {} in child compilations{CHILDREN_HINT}",
        display_number(hidden),
        plural(hidden, "ERROR", "ERRORS")
    )))
}

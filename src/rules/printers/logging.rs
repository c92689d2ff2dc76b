use serde_json::Value;

use crate::error::PrinterResult;
use crate::format::{ColorName, display_number, is_truthy, map_lines};
use crate::hooks::HookRegistry;
use crate::printer::PrintContext;
use crate::rules::{PrintRule, paint, positive};
use crate::selector::variant_type;

pub(in crate::rules) const PRINTERS: &[(&str, PrintRule)] = &[
    ("loggingEntry(clear).loggingEntry", clear),
    ("loggingEntry(groupCollapsed).loggingEntry.children", collapsed_children),
    ("loggingEntry.trace[]", trace_line),
    ("loggingGroup", empty_group),
    ("loggingGroup.debug", debug_marker),
    ("loggingGroup.name", group_name),
    ("loggingGroup.filteredEntries", hidden_lines),
];

/// Line prefix and color of a message per logging level.
const LEVEL_MARKERS: &[(&str, &str, Option<ColorName>)] = &[
    ("error", "<e> ", Some(ColorName::Red)),
    ("warn", "<w> ", Some(ColorName::Yellow)),
    ("info", "<i> ", Some(ColorName::Green)),
    ("log", "    ", Some(ColorName::Bold)),
    ("debug", "    ", None),
    ("trace", "    ", None),
    ("status", "<s> ", Some(ColorName::Magenta)),
    ("profile", "<p> ", Some(ColorName::Magenta)),
    ("profileEnd", "</p> ", Some(ColorName::Magenta)),
    ("time", "<t> ", Some(ColorName::Magenta)),
    ("cache", "<c> ", Some(ColorName::Magenta)),
    ("group", "<-> ", Some(ColorName::Cyan)),
    ("groupCollapsed", "<+> ", Some(ColorName::Cyan)),
];

pub(super) fn install_level_markers(hooks: &mut HookRegistry) -> PrinterResult<()> {
    for (level, marker, color) in LEVEL_MARKERS {
        let (marker, color) = (*marker, *color);
        let key = format!("{}.message", variant_type("loggingEntry", level));
        hooks.tap_print(&key, move |value, ctx| {
            let message = value.as_str()?;
            Some(map_lines(message, |line| {
                format!("{marker}{}", paint(ctx, color, line))
            }))
        })?;
    }
    Ok(())
}

fn clear(_: &Value, _: &PrintContext<'_>) -> Option<String> {
    Some("    -------".to_owned())
}

fn collapsed_children(_: &Value, _: &PrintContext<'_>) -> Option<String> {
    Some(String::new())
}

fn trace_line(value: &Value, _: &PrintContext<'_>) -> Option<String> {
    let trace = value.as_str().filter(|trace| !trace.is_empty())?;
    Some(map_lines(trace, |line| format!("| {line}")))
}

/// Groups without entries print nothing, not even their header.
fn empty_group(value: &Value, _: &PrintContext<'_>) -> Option<String> {
    let entries = value.get("entries").and_then(Value::as_array);
    entries
        .is_some_and(|entries| entries.is_empty())
        .then(String::new)
}

fn debug_marker(value: &Value, ctx: &PrintContext<'_>) -> Option<String> {
    is_truthy(value).then(|| ctx.colors().red("DEBUG"))
}

fn group_name(value: &Value, ctx: &PrintContext<'_>) -> Option<String> {
    let name = crate::format::display_value(value);
    Some(ctx.colors().bold(&format!("LOG from {name}")))
}

fn hidden_lines(value: &Value, _: &PrintContext<'_>) -> Option<String> {
    let count = positive(value)?;
    Some(format!("+ {} hidden lines", display_number(count)))
}

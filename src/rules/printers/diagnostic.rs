use serde_json::Value;

use crate::printer::PrintContext;
use crate::rules::{PrintRule, scalar_text};

pub(in crate::rules) const PRINTERS: &[(&str, PrintRule)] = &[
    ("error.file", file),
    ("error.moduleName", module_name),
    ("error.loc", loc),
    ("error.message", message),
    ("error.details", details),
];

fn file(value: &Value, ctx: &PrintContext<'_>) -> Option<String> {
    Some(ctx.colors().bold(&scalar_text(value)?))
}

/// Loader chains are stripped from the bold part; the full request follows
/// in parentheses.
fn module_name(value: &Value, ctx: &PrintContext<'_>) -> Option<String> {
    let name = value.as_str()?;
    match name.rfind('!') {
        Some(split) => Some(format!(
            "{} ({name})",
            ctx.colors().bold(&name[split + 1..])
        )),
        None => Some(ctx.colors().bold(name)),
    }
}

fn loc(value: &Value, ctx: &PrintContext<'_>) -> Option<String> {
    Some(ctx.colors().green(&scalar_text(value)?))
}

fn message(value: &Value, ctx: &PrintContext<'_>) -> Option<String> {
    let message = value.as_str()?;
    if message.contains("\u{1b}[") {
        Some(message.to_owned())
    } else {
        Some(ctx.colors().bold(&ctx.format_error(message)))
    }
}

fn details(value: &Value, ctx: &PrintContext<'_>) -> Option<String> {
    Some(ctx.format_error(value.as_str()?))
}

use serde_json::Value;

use crate::printer::PrintContext;
use crate::rules::{PrintRule, flag_of};

pub(in crate::rules) const PRINTERS: &[(&str, PrintRule)] = &[
    ("asset.name", name),
    ("asset.size", size),
    ("asset.info.sourceFilename", source_filename),
    ("assetChunk", chunk_id),
];

fn name(value: &Value, ctx: &PrintContext<'_>) -> Option<String> {
    let name = value.as_str()?;
    Some(ctx.format_filename(name, flag_of(ctx, "asset", "isOverSizeLimit")))
}

fn size(value: &Value, ctx: &PrintContext<'_>) -> Option<String> {
    let size = ctx.format_size(value.as_f64()?);
    if flag_of(ctx, "asset", "isOverSizeLimit") {
        Some(ctx.colors().yellow(&size))
    } else {
        Some(size)
    }
}

fn source_filename(value: &Value, ctx: &PrintContext<'_>) -> Option<String> {
    match value {
        Value::Bool(true) => Some(ctx.format_flag("from source file")),
        Value::String(file) if !file.is_empty() => Some(ctx.format_flag(&format!("from: {file}"))),
        _ => None,
    }
}

fn chunk_id(value: &Value, ctx: &PrintContext<'_>) -> Option<String> {
    Some(ctx.format_chunk_id(value, None))
}

use serde_json::{Map, Value};

use crate::format::{ChunkIdDirection, is_truthy, is_valid_id};
use crate::printer::PrintContext;
use crate::rules::{PrintRule, scalar_text};

use super::print_sizes;

pub(in crate::rules) const PRINTERS: &[(&str, PrintRule)] = &[
    ("chunk.id", chunk_id),
    ("chunk.files[]", file),
    ("chunk.sizes", print_sizes),
    ("chunk.parents[]", parent),
    ("chunk.siblings[]", sibling),
    ("chunk.children[]", child),
    ("chunk.childrenByOrder", children_by_order),
    ("chunk.childrenByOrder[].type", relation),
    ("chunk.childrenByOrder[].children[]", ordered_child),
    ("chunk.reason", reason),
    ("chunkOrigin.moduleId", origin_module_id),
    ("chunkOrigin.moduleName", origin_module_name),
];

fn chunk_id(value: &Value, ctx: &PrintContext<'_>) -> Option<String> {
    Some(ctx.format_chunk_id(value, None))
}

fn file(value: &Value, ctx: &PrintContext<'_>) -> Option<String> {
    Some(ctx.format_filename(&scalar_text(value)?, false))
}

fn parent(value: &Value, ctx: &PrintContext<'_>) -> Option<String> {
    Some(ctx.format_chunk_id(value, Some(ChunkIdDirection::Parent)))
}

fn sibling(value: &Value, ctx: &PrintContext<'_>) -> Option<String> {
    Some(ctx.format_chunk_id(value, Some(ChunkIdDirection::Sibling)))
}

fn child(value: &Value, ctx: &PrintContext<'_>) -> Option<String> {
    Some(ctx.format_chunk_id(value, Some(ChunkIdDirection::Child)))
}

/// Relations are sorted by name so the output does not depend on the order
/// the producer emitted them in.
fn children_by_order(value: &Value, ctx: &PrintContext<'_>) -> Option<String> {
    let relations = value.as_object()?;
    let mut sorted: Vec<(&String, &Value)> = relations.iter().collect();
    sorted.sort_by(|(a, _), (b, _)| a.cmp(b));
    let groups = sorted
        .into_iter()
        .map(|(relation, children)| {
            let mut group = Map::new();
            group.insert("type".to_owned(), Value::String(relation.clone()));
            group.insert("children".to_owned(), children.clone());
            Value::Object(group)
        })
        .collect();
    ctx.printer()
        .print_in(ctx.type_path(), &Value::Array(groups), ctx)
}

fn relation(value: &Value, _: &PrintContext<'_>) -> Option<String> {
    Some(format!("{}:", scalar_text(value)?))
}

fn ordered_child(value: &Value, ctx: &PrintContext<'_>) -> Option<String> {
    is_valid_id(value).then(|| ctx.format_chunk_id(value, None))
}

fn reason(value: &Value, ctx: &PrintContext<'_>) -> Option<String> {
    if !is_truthy(value) {
        return None;
    }
    Some(ctx.colors().yellow(&scalar_text(value)?))
}

fn origin_module_id(value: &Value, ctx: &PrintContext<'_>) -> Option<String> {
    is_valid_id(value).then(|| ctx.format_module_id(value))
}

fn origin_module_name(value: &Value, ctx: &PrintContext<'_>) -> Option<String> {
    Some(ctx.colors().bold(&scalar_text(value)?))
}

use serde_json::{Map, Value};

use crate::format::{is_non_empty_array, is_truthy};
use crate::printer::PrintContext;
use crate::rules::{PrintRule, scalar_text};

pub(in crate::rules) const PRINTERS: &[(&str, PrintRule)] = &[
    ("chunkGroup.kind!", kind),
    ("chunkGroup.name", name),
    ("chunkGroup.assetsSize", assets_size),
    ("chunkGroup.auxiliaryAssetsSize", auxiliary_assets_size),
    ("chunkGroup.is!", is),
    ("chunkGroupAsset.name", asset_name),
    ("chunkGroupAsset.size", asset_size),
    ("chunkGroup.children", children),
    ("chunkGroupChildGroup.type", child_group_type),
    ("chunkGroupChild.chunks[]", child_chunk_id),
    ("chunkGroupChild.name", child_name),
];

fn kind(_: &Value, ctx: &PrintContext<'_>) -> Option<String> {
    ctx.annotation("chunkGroupKind").map(str::to_owned)
}

fn name(value: &Value, ctx: &PrintContext<'_>) -> Option<String> {
    Some(ctx.colors().bold(&scalar_text(value)?))
}

fn assets_size(value: &Value, ctx: &PrintContext<'_>) -> Option<String> {
    let size = value.as_f64().filter(|size| *size != 0.0)?;
    Some(ctx.format_size(size))
}

fn auxiliary_assets_size(value: &Value, ctx: &PrintContext<'_>) -> Option<String> {
    let size = value.as_f64().filter(|size| *size != 0.0)?;
    Some(format!("({})", ctx.format_size(size)))
}

fn is(_: &Value, _: &PrintContext<'_>) -> Option<String> {
    Some("=".to_owned())
}

fn asset_name(value: &Value, ctx: &PrintContext<'_>) -> Option<String> {
    Some(ctx.colors().green(&scalar_text(value)?))
}

/// Sizes are only shown when the group lists more than one file.
fn asset_size(value: &Value, ctx: &PrintContext<'_>) -> Option<String> {
    let several_assets = ctx
        .lookup("chunkGroup", "assets")
        .and_then(Value::as_array)
        .is_some_and(|assets| assets.len() > 1);
    let has_auxiliary = is_non_empty_array(ctx.lookup("chunkGroup", "auxiliaryAssets"));
    if !(several_assets || has_auxiliary) {
        return None;
    }
    Some(ctx.format_size(value.as_f64()?))
}

/// Children arrive keyed by relation (`preload`, `prefetch`, ...); each
/// relation prints as one `chunkGroupChildGroup`.
fn children(value: &Value, ctx: &PrintContext<'_>) -> Option<String> {
    let relations = value.as_object()?;
    let groups = relations
        .iter()
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

fn child_group_type(value: &Value, _: &PrintContext<'_>) -> Option<String> {
    Some(format!("{}:", scalar_text(value)?))
}

fn child_chunk_id(value: &Value, ctx: &PrintContext<'_>) -> Option<String> {
    Some(ctx.format_chunk_id(value, None))
}

fn child_name(value: &Value, _: &PrintContext<'_>) -> Option<String> {
    is_truthy(value).then(|| format!("(name: {})", crate::format::display_value(value)))
}

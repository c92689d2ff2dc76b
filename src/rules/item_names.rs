use serde_json::Value;

use crate::error::PrinterResult;
use crate::hooks::HookRegistry;
use crate::selector::variant_type;

/// Array selector -> type name of its items.
const ITEM_NAMES: &[(&str, &str)] = &[
    ("compilation.assets[]", "asset"),
    ("compilation.modules[]", "module"),
    ("compilation.chunks[]", "chunk"),
    ("compilation.entrypoints[]", "chunkGroup"),
    ("compilation.namedChunkGroups[]", "chunkGroup"),
    ("compilation.errors[]", "error"),
    ("compilation.warnings[]", "error"),
    ("compilation.logging[]", "loggingGroup"),
    ("compilation.children[]", "compilation"),
    ("asset.related[]", "asset"),
    ("asset.children[]", "asset"),
    ("asset.chunks[]", "assetChunk"),
    ("asset.auxiliaryChunks[]", "assetChunk"),
    ("asset.chunkNames[]", "assetChunkName"),
    ("asset.chunkIdHints[]", "assetChunkIdHint"),
    ("asset.auxiliaryChunkNames[]", "assetChunkName"),
    ("asset.auxiliaryChunkIdHints[]", "assetChunkIdHint"),
    ("chunkGroup.assets[]", "chunkGroupAsset"),
    ("chunkGroup.auxiliaryAssets[]", "chunkGroupAsset"),
    ("chunkGroupChild.assets[]", "chunkGroupAsset"),
    ("chunkGroupChild.auxiliaryAssets[]", "chunkGroupAsset"),
    ("chunkGroup.children[]", "chunkGroupChildGroup"),
    ("chunkGroupChildGroup.children[]", "chunkGroupChild"),
    ("module.modules[]", "module"),
    ("module.children[]", "module"),
    ("module.reasons[]", "moduleReason"),
    ("moduleReason.children[]", "moduleReason"),
    ("module.issuerPath[]", "moduleIssuer"),
    ("chunk.origins[]", "chunkOrigin"),
    ("chunk.modules[]", "module"),
    ("error.moduleTrace[]", "moduleTraceItem"),
    ("moduleTraceItem.dependencies[]", "moduleTraceDependency"),
];

/// Arrays of logging entries, whose item type depends on the entry kind.
const LOGGING_ENTRY_LISTS: &[&str] = &["loggingGroup.entries[]", "loggingEntry.children[]"];

/// `loggingEntry(<type>).loggingEntry`, or plain `loggingEntry` when the
/// entry has no type.
#[must_use]
pub(super) fn logging_entry_type(entry: &Value) -> String {
    match entry.get("type").and_then(Value::as_str) {
        Some(kind) if !kind.is_empty() => variant_type("loggingEntry", kind),
        _ => "loggingEntry".to_owned(),
    }
}

pub(super) fn install(hooks: &mut HookRegistry) -> PrinterResult<()> {
    for (key, item_name) in ITEM_NAMES {
        let item_name: &'static str = item_name;
        hooks.tap_item_name(key, move |_, _| Some(item_name.to_owned()))?;
    }
    for key in LOGGING_ENTRY_LISTS {
        hooks.tap_item_name(key, |entry, _| Some(logging_entry_type(entry)))?;
    }
    Ok(())
}

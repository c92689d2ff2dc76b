use std::collections::HashSet;

use crate::error::PrinterResult;
use crate::hooks::HookRegistry;

const ERROR_ORDER: &[&str] = &[
    "compilerPath",
    "chunkId",
    "chunkEntry",
    "chunkInitial",
    "file",
    "separator!",
    "moduleName",
    "loc",
    "separator!",
    "message",
    "separator!",
    "details",
    "separator!",
    "stack",
    "separator!",
    "missing",
    "separator!",
    "moduleTrace",
];

const PREFERRED_ORDERS: &[(&str, &[&str])] = &[
    (
        "compilation",
        &[
            "name",
            "hash",
            "rspackVersion",
            "time",
            "builtAt",
            "env",
            "publicPath",
            "assets",
            "filteredAssets",
            "entrypoints",
            "namedChunkGroups",
            "chunks",
            "modules",
            "filteredModules",
            "children",
            "logging",
            "warnings",
            "warningsInChildren!",
            "filteredWarningDetailsCount",
            "errors",
            "errorsInChildren!",
            "filteredErrorDetailsCount",
            "summary!",
            "needAdditionalPass",
        ],
    ),
    (
        "asset",
        &[
            "type",
            "name",
            "size",
            "chunks",
            "auxiliaryChunks",
            "emitted",
            "comparedForEmit",
            "cached",
            "info",
            "isOverSizeLimit",
            "chunkNames",
            "auxiliaryChunkNames",
            "chunkIdHints",
            "auxiliaryChunkIdHints",
            "related",
            "filteredRelated",
            "children",
            "filteredChildren",
        ],
    ),
    (
        "asset.info",
        &[
            "immutable",
            "sourceFilename",
            "copied",
            "javascriptModule",
            "development",
            "hotModuleReplacement",
        ],
    ),
    (
        "chunkGroup",
        &[
            "kind!",
            "name",
            "isOverSizeLimit",
            "assetsSize",
            "auxiliaryAssetsSize",
            "is!",
            "assets",
            "filteredAssets",
            "auxiliaryAssets",
            "filteredAuxiliaryAssets",
            "separator!",
            "children",
        ],
    ),
    ("chunkGroupAsset", &["name", "size"]),
    ("chunkGroupChildGroup", &["type", "children"]),
    ("chunkGroupChild", &["assets", "chunks", "name"]),
    (
        "module",
        &[
            "type",
            "name",
            "identifier",
            "id",
            "layer",
            "sizes",
            "chunks",
            "depth",
            "cacheable",
            "orphan",
            "runtime",
            "optional",
            "dependent",
            "built",
            "codeGenerated",
            "cached",
            "assets",
            "failed",
            "warnings",
            "errors",
            "children",
            "filteredChildren",
            "providedExports",
            "usedExports",
            "optimizationBailout",
            "reasons",
            "filteredReasons",
            "issuerPath",
            "profile",
            "modules",
            "filteredModules",
        ],
    ),
    (
        "moduleReason",
        &[
            "active",
            "type",
            "userRequest",
            "moduleId",
            "module",
            "resolvedModule",
            "loc",
            "explanation",
            "children",
            "filteredChildren",
        ],
    ),
    (
        "module.profile",
        &[
            "total",
            "separator!",
            "resolving",
            "restoring",
            "integration",
            "building",
            "storing",
            "additionalResolving",
            "additionalIntegration",
        ],
    ),
    (
        "chunk",
        &[
            "id",
            "runtime",
            "files",
            "names",
            "idHints",
            "sizes",
            "parents",
            "siblings",
            "children",
            "childrenByOrder",
            "entry",
            "initial",
            "rendered",
            "recorded",
            "reason",
            "separator!",
            "origins",
            "separator!",
            "modules",
            "separator!",
            "filteredModules",
        ],
    ),
    ("chunkOrigin", &["request", "moduleId", "moduleName", "loc"]),
    ("error", ERROR_ORDER),
    ("warning", ERROR_ORDER),
    ("chunk.childrenByOrder[]", &["type", "children"]),
    (
        "loggingGroup",
        &[
            "debug",
            "name",
            "separator!",
            "entries",
            "separator!",
            "filteredEntries",
        ],
    ),
    ("loggingEntry", &["message", "trace", "children"]),
];

/// Preferred element order registered for `key`, if any.
#[must_use]
pub fn preferred_order(key: &str) -> Option<&'static [&'static str]> {
    PREFERRED_ORDERS
        .iter()
        .find(|(order_key, _)| *order_key == key)
        .map(|(_, order)| *order)
}

/// Reorders `elements` so the entries of `preferred` come first, in that
/// order, followed by the remaining elements in their original order.
///
/// Preferred entries are kept only when present in `elements` and appear once,
/// except synthetic (`!`-suffixed) entries, which are always inserted and may
/// repeat.
pub fn apply_preferred_order(elements: &mut Vec<String>, preferred: &[&str]) {
    let original = std::mem::take(elements);
    let present: HashSet<&str> = original.iter().map(String::as_str).collect();
    let mut used: HashSet<&str> = HashSet::with_capacity(preferred.len());
    for &element in preferred {
        let synthetic = element.ends_with('!');
        if synthetic || (present.contains(element) && !used.contains(element)) {
            elements.push(element.to_owned());
            used.insert(element);
        }
    }
    elements.extend(
        original
            .iter()
            .filter(|element| !used.contains(element.as_str()))
            .cloned(),
    );
}

pub(super) fn install(hooks: &mut HookRegistry) -> PrinterResult<()> {
    for (key, order) in PREFERRED_ORDERS {
        let order: &'static [&'static str] = order;
        hooks.tap_sort_elements(key, move |elements, _| {
            apply_preferred_order(elements, order);
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(keys: &[&str]) -> Vec<String> {
        keys.iter().map(|key| (*key).to_owned()).collect()
    }

    #[test]
    fn preferred_entries_lead_and_rest_keep_order() {
        let mut elements = owned(&["zeta", "size", "alpha", "name"]);
        apply_preferred_order(&mut elements, &["name", "size", "missing"]);
        assert_eq!(elements, owned(&["name", "size", "zeta", "alpha"]));
    }

    #[test]
    fn synthetic_entries_are_always_inserted() {
        let mut elements = owned(&["stack", "message"]);
        apply_preferred_order(
            &mut elements,
            &["message", "separator!", "stack", "separator!"],
        );
        assert_eq!(
            elements,
            owned(&["message", "separator!", "stack", "separator!"])
        );
    }

    #[test]
    fn error_and_warning_share_an_order() {
        assert_eq!(preferred_order("error"), preferred_order("warning"));
        assert!(preferred_order("unknown").is_none());
    }
}

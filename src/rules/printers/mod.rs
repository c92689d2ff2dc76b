//! Field printers of the default rule set, grouped by entity.

mod asset;
mod chunk;
mod chunk_group;
mod compilation;
mod diagnostic;
mod logging;
mod module;

use serde_json::Value;

use crate::error::PrinterResult;
use crate::format::{ColorName, more_count, plural};
use crate::hooks::HookRegistry;
use crate::printer::PrintContext;

use super::{PrintRule, paint, positive};

/// `key -> [label]` when the value is truthy.
struct FlagRule {
    key: &'static str,
    label: &'static str,
    color: Option<ColorName>,
}

const fn flag(key: &'static str, label: &'static str, color: Option<ColorName>) -> FlagRule {
    FlagRule { key, label, color }
}

const FLAGS: &[FlagRule] = &[
    flag("asset.emitted", "emitted", Some(ColorName::Green)),
    flag(
        "asset.comparedForEmit",
        "compared for emit",
        Some(ColorName::Yellow),
    ),
    flag("asset.cached", "cached", Some(ColorName::Green)),
    flag("asset.isOverSizeLimit", "big", Some(ColorName::Yellow)),
    flag("asset.info.immutable", "immutable", Some(ColorName::Green)),
    flag("asset.info.javascriptModule", "javascript module", None),
    flag("asset.info.copied", "copied", Some(ColorName::Green)),
    flag("asset.info.development", "dev", Some(ColorName::Green)),
    flag("asset.info.hotModuleReplacement", "hmr", Some(ColorName::Green)),
    flag("module.orphan", "orphan", Some(ColorName::Yellow)),
    flag("module.runtime", "runtime", Some(ColorName::Yellow)),
    flag("module.optional", "optional", Some(ColorName::Yellow)),
    flag("module.dependent", "dependent", Some(ColorName::Cyan)),
    flag("module.built", "built", Some(ColorName::Yellow)),
    flag("module.codeGenerated", "code generated", Some(ColorName::Yellow)),
    flag(
        "module.buildTimeExecuted",
        "build time executed",
        Some(ColorName::Green),
    ),
    flag("module.cached", "cached", Some(ColorName::Green)),
    flag("chunkGroup.isOverSizeLimit", "big", Some(ColorName::Yellow)),
    flag("chunk.entry", "entry", Some(ColorName::Yellow)),
    flag("chunk.initial", "initial", Some(ColorName::Yellow)),
    flag("chunk.rendered", "rendered", Some(ColorName::Green)),
    flag("chunk.recorded", "recorded", Some(ColorName::Green)),
];

/// `N <noun>` (or `+ N <noun>` when part of the list is shown) for a positive
/// count of entries hidden from `owner.list`.
struct FilteredRule {
    key: &'static str,
    owner: &'static str,
    list: &'static str,
    qualifier: &'static str,
    one: &'static str,
    many: &'static str,
}

const fn filtered(
    key: &'static str,
    owner: &'static str,
    list: &'static str,
    qualifier: &'static str,
    (one, many): (&'static str, &'static str),
) -> FilteredRule {
    FilteredRule {
        key,
        owner,
        list,
        qualifier,
        one,
        many,
    }
}

const MODULES: (&str, &str) = ("module", "modules");
const ASSETS: (&str, &str) = ("asset", "assets");
const REASONS: (&str, &str) = ("reason", "reasons");

const FILTERED_COUNTS: &[FilteredRule] = &[
    filtered("compilation.filteredModules", "compilation", "modules", "", MODULES),
    filtered("compilation.filteredAssets", "compilation", "assets", "", ASSETS),
    filtered("asset.filteredRelated", "asset", "related", "related ", ASSETS),
    filtered("asset.filteredChildren", "asset", "children", "", ASSETS),
    filtered("module.filteredModules", "module", "modules", "nested ", MODULES),
    filtered("module.filteredReasons", "module", "reasons", "", REASONS),
    filtered("module.filteredChildren", "module", "children", "", MODULES),
    filtered(
        "moduleReason.filteredChildren",
        "moduleReason",
        "children",
        "",
        REASONS,
    ),
    filtered("chunkGroup.filteredAssets", "chunkGroup", "assets", "", ASSETS),
    filtered(
        "chunkGroup.filteredAuxiliaryAssets",
        "chunkGroup",
        "auxiliaryAssets",
        "auxiliary ",
        ASSETS,
    ),
    filtered("chunk.filteredModules", "chunk", "modules", "chunk ", MODULES),
];

/// Keys whose value prints as-is.
const VERBATIM: &[&str] = &[
    "asset.type",
    "assetChunkName",
    "assetChunkIdHint",
    "moduleReason.type",
    "moduleReason.loc",
    "chunk.names[]",
    "chunk.idHints[]",
    "chunk.runtime[]",
    "chunkOrigin.request",
    "chunkOrigin.loc",
    "error.stack",
    "moduleTraceItem.originName",
    "moduleTraceDependency.loc",
];

/// Synthetic separator positions; element joiners turn them into breaks.
const SEPARATORS: &[&str] = &[
    "asset.separator!",
    "module.separator!",
    "chunkGroup.separator!",
    "chunk.separator!",
    "error.separator!",
    "loggingGroup.separator!",
];

pub(super) fn install(hooks: &mut HookRegistry) -> PrinterResult<()> {
    for rule in FLAGS {
        let (label, color) = (rule.label, rule.color);
        hooks.tap_print(rule.key, move |value, ctx| {
            crate::format::is_truthy(value).then(|| paint(ctx, color, &ctx.format_flag(label)))
        })?;
    }
    for rule in FILTERED_COUNTS {
        let FilteredRule {
            owner,
            list,
            qualifier,
            one,
            many,
            ..
        } = *rule;
        hooks.tap_print(rule.key, move |value, ctx| {
            let count = positive(value)?;
            Some(format!(
                "{} {qualifier}{}",
                more_count(ctx.lookup(owner, list), count),
                plural(count, one, many)
            ))
        })?;
    }
    for key in VERBATIM {
        hooks.tap_print(key, |value, _| super::scalar_text(value))?;
    }
    for key in SEPARATORS {
        hooks.tap_print(key, |_, _| Some("\n".to_owned()))?;
    }

    let tables: [&[(&str, PrintRule)]; 7] = [
        compilation::PRINTERS,
        asset::PRINTERS,
        module::PRINTERS,
        chunk_group::PRINTERS,
        chunk::PRINTERS,
        diagnostic::PRINTERS,
        logging::PRINTERS,
    ];
    for (key, rule) in tables.into_iter().flatten() {
        hooks.tap_print(key, *rule)?;
    }
    module::install_profile_phases(hooks)?;
    logging::install_level_markers(hooks)
}

/// `sizes` map as `<size> (<kind>)` pairs, or a single size when only one
/// kind exists.
fn print_sizes(sizes: &Value, ctx: &PrintContext<'_>) -> Option<String> {
    let sizes = sizes.as_object()?;
    match sizes.len() {
        0 => None,
        1 => sizes
            .values()
            .next()
            .and_then(Value::as_f64)
            .map(|size| ctx.format_size(size)),
        _ => Some(
            sizes
                .iter()
                .map(|(kind, size)| {
                    format!("{} ({kind})", ctx.format_size(size.as_f64().unwrap_or(f64::NAN)))
                })
                .collect::<Vec<_>>()
                .join(" "),
        ),
    }
}

use serde_json::Value;

use crate::format::{display_value, is_truthy, is_valid_id, module_name, plural, resource_name};
use crate::printer::PrintContext;
use crate::rules::{PrintRule, scalar_text};

use super::print_sizes;

pub(in crate::rules) const PRINTERS: &[(&str, PrintRule)] = &[
    ("module.type", kind),
    ("module.id", module_id),
    ("module.name", name),
    ("module.layer", layer),
    ("module.sizes", print_sizes),
    ("module.chunks[]", chunk_id),
    ("module.depth", depth),
    ("module.cacheable", cacheable),
    ("module.assets", assets),
    ("module.warnings", warnings),
    ("module.errors", errors),
    ("module.providedExports", provided_exports),
    ("module.usedExports", used_exports),
    ("module.optimizationBailout[]", optimization_bailout),
    ("module.issuerPath", issuer_path),
    ("moduleIssuer.id", issuer_id),
    ("moduleIssuer.profile.total", profile_time),
    ("moduleReason.userRequest", reason_user_request),
    ("moduleReason.moduleId", module_id),
    ("moduleReason.module", reason_module),
    ("moduleReason.resolvedModule", reason_module),
    ("moduleReason.explanation", reason_explanation),
    ("moduleReason.active", reason_active),
    ("module.profile.total", profile_time),
];

/// `module.profile.<phase>` printed as `<label>: <time>`.
const PROFILE_PHASES: &[(&str, &str)] = &[
    ("resolving", "resolving"),
    ("restoring", "restoring"),
    ("integration", "integration"),
    ("building", "building"),
    ("storing", "storing"),
];

/// Phases printed only when they took any time.
const OPTIONAL_PROFILE_PHASES: &[(&str, &str)] = &[
    ("additionalResolving", "additional resolving"),
    ("additionalIntegration", "additional integration"),
];

pub(super) fn install_profile_phases(
    hooks: &mut crate::hooks::HookRegistry,
) -> crate::error::PrinterResult<()> {
    for (phase, label) in PROFILE_PHASES {
        hooks.tap_print(&format!("module.profile.{phase}"), move |value, ctx| {
            let time = value.as_f64()?;
            Some(format!("{label}: {}", ctx.format_time(time)))
        })?;
    }
    for (phase, label) in OPTIONAL_PROFILE_PHASES {
        hooks.tap_print(&format!("module.profile.{phase}"), move |value, ctx| {
            let time = value.as_f64().filter(|time| *time != 0.0)?;
            Some(format!("{label}: {}", ctx.format_time(time)))
        })?;
    }
    Ok(())
}

fn kind(value: &Value, _: &PrintContext<'_>) -> Option<String> {
    value
        .as_str()
        .filter(|kind| *kind != "module")
        .map(str::to_owned)
}

fn module_id(value: &Value, ctx: &PrintContext<'_>) -> Option<String> {
    is_valid_id(value).then(|| ctx.format_module_id(value))
}

fn name(value: &Value, ctx: &PrintContext<'_>) -> Option<String> {
    let (prefix, resource) = module_name(value.as_str()?);
    Some(format!("{prefix}{}", ctx.colors().bold(&resource)))
}

fn layer(value: &Value, ctx: &PrintContext<'_>) -> Option<String> {
    if !is_truthy(value) {
        return None;
    }
    Some(ctx.format_layer(&display_value(value)))
}

fn chunk_id(value: &Value, ctx: &PrintContext<'_>) -> Option<String> {
    Some(ctx.format_chunk_id(value, None))
}

fn depth(value: &Value, ctx: &PrintContext<'_>) -> Option<String> {
    if value.is_null() {
        return None;
    }
    Some(ctx.format_flag(&format!("depth {}", display_value(value))))
}

fn cacheable(value: &Value, ctx: &PrintContext<'_>) -> Option<String> {
    (value == &Value::Bool(false)).then(|| ctx.colors().red(&ctx.format_flag("not cacheable")))
}

fn assets(value: &Value, ctx: &PrintContext<'_>) -> Option<String> {
    let count = value.as_array().map_or(0, Vec::len);
    if count == 0 {
        return None;
    }
    Some(ctx.colors().magenta(&ctx.format_flag(&format!(
        "{count} {}",
        plural(count as f64, "asset", "assets")
    ))))
}

/// `true` or a count of diagnostics raised while building the module.
fn diagnostics_flag(value: &Value, one: &str, many: &str) -> Option<String> {
    match value {
        Value::Bool(true) => Some(many.to_owned()),
        Value::Number(count) => {
            let count = count.as_f64().filter(|count| *count != 0.0)?;
            Some(format!("{} {}", display_value(value), plural(count, one, many)))
        }
        _ => None,
    }
}

fn warnings(value: &Value, ctx: &PrintContext<'_>) -> Option<String> {
    let label = diagnostics_flag(value, "warning", "warnings")?;
    Some(ctx.colors().yellow(&ctx.format_flag(&label)))
}

fn errors(value: &Value, ctx: &PrintContext<'_>) -> Option<String> {
    let label = diagnostics_flag(value, "error", "errors")?;
    Some(ctx.colors().red(&ctx.format_flag(&label)))
}

fn export_names(names: &[Value]) -> String {
    names.iter().map(display_value).collect::<Vec<_>>().join(", ")
}

fn provided_exports(value: &Value, ctx: &PrintContext<'_>) -> Option<String> {
    let exports = value.as_array()?;
    let label = if exports.is_empty() {
        "no exports".to_owned()
    } else {
        format!("exports: {}", export_names(exports))
    };
    Some(ctx.colors().cyan(&ctx.format_flag(&label)))
}

fn used_exports(value: &Value, ctx: &PrintContext<'_>) -> Option<String> {
    let label = match value {
        Value::Null => "used exports unknown".to_owned(),
        Value::Bool(false) => "module unused".to_owned(),
        Value::Array(used) if used.is_empty() => "no exports used".to_owned(),
        Value::Array(used) => {
            let provided = ctx
                .lookup("module", "providedExports")
                .and_then(Value::as_array)
                .map(Vec::len);
            if provided == Some(used.len()) {
                "all exports used".to_owned()
            } else {
                format!("only some exports used: {}", export_names(used))
            }
        }
        _ => return None,
    };
    Some(ctx.colors().cyan(&ctx.format_flag(&label)))
}

fn optimization_bailout(value: &Value, ctx: &PrintContext<'_>) -> Option<String> {
    Some(ctx.colors().yellow(&scalar_text(value)?))
}

/// Issuer chains are only worth printing next to profile timings.
fn issuer_path(_: &Value, ctx: &PrintContext<'_>) -> Option<String> {
    if ctx.lookup("module", "profile").is_some_and(is_truthy) {
        None
    } else {
        Some(String::new())
    }
}

fn issuer_id(value: &Value, ctx: &PrintContext<'_>) -> Option<String> {
    Some(ctx.format_module_id(value))
}

fn profile_time(value: &Value, ctx: &PrintContext<'_>) -> Option<String> {
    Some(ctx.format_time(value.as_f64()?))
}

fn reason_user_request(value: &Value, ctx: &PrintContext<'_>) -> Option<String> {
    Some(ctx.colors().cyan(&resource_name(value.as_str()?)))
}

fn reason_module(value: &Value, ctx: &PrintContext<'_>) -> Option<String> {
    Some(ctx.colors().magenta(&scalar_text(value)?))
}

fn reason_explanation(value: &Value, ctx: &PrintContext<'_>) -> Option<String> {
    Some(ctx.colors().cyan(&scalar_text(value)?))
}

fn reason_active(value: &Value, ctx: &PrintContext<'_>) -> Option<String> {
    (!is_truthy(value)).then(|| ctx.format_flag("inactive"))
}

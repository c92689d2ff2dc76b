//! Default rule set reproducing the canonical stats report.
//!
//! Rules are plain tables of selector keys and handlers, installed into a
//! [`HookRegistry`] by [`install`] (or through the [`DefaultRules`] plugin).
//! Callers can tap their own handlers before or after to override or extend
//! any position.

mod item_names;
mod joiners;
mod orders;
mod printers;
mod results;

use serde_json::Value;

use crate::error::PrinterResult;
use crate::format::{ColorName, is_truthy};
use crate::hooks::HookRegistry;
use crate::printer::{PrintContext, StatsPrinterPlugin};

pub use joiners::{join_explicit_new_line, join_in_brackets, join_one_line};
pub use orders::{apply_preferred_order, preferred_order};

/// Plugin id of the default rule set.
pub const DEFAULT_RULES_ID: &str = "default-stats-printer";

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRules;

impl StatsPrinterPlugin for DefaultRules {
    fn id(&self) -> &str {
        DEFAULT_RULES_ID
    }

    fn apply(&self, hooks: &mut HookRegistry) -> PrinterResult<()> {
        install(hooks)
    }
}

/// Taps every default handler into `hooks`.
pub fn install(hooks: &mut HookRegistry) -> PrinterResult<()> {
    printers::install(hooks)?;
    orders::install(hooks)?;
    item_names::install(hooks)?;
    joiners::install(hooks)?;
    results::install(hooks)?;
    Ok(())
}

type PrintRule = fn(&Value, &PrintContext<'_>) -> Option<String>;

fn paint(ctx: &PrintContext<'_>, color: Option<ColorName>, text: &str) -> String {
    match color {
        Some(color) => ctx.colors().paint(color, text),
        None => text.to_owned(),
    }
}

/// Positive numeric value, as used by the filtered-count rules.
fn positive(value: &Value) -> Option<f64> {
    value.as_f64().filter(|n| *n > 0.0)
}

/// Text of a scalar; `null` and non-scalars yield nothing.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(_) | Value::Bool(_) => Some(crate::format::display_value(value)),
        _ => None,
    }
}

fn flag_of(ctx: &PrintContext<'_>, owner: &str, field: &str) -> bool {
    ctx.lookup(owner, field).is_some_and(is_truthy)
}

//! Rendering engine.
//!
//! [`StatsPrinter`] turns a statistics tree into text by consulting its
//! [`HookRegistry`] at every position. Without handlers it still walks
//! arrays and objects and joins whatever their children produce, one
//! fragment per line; scalars print only through `print` handlers.

mod context;
mod engine;
mod plugin;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::PrinterResult;
use crate::format::{Colors, as_number};
use crate::hooks::HookRegistry;
use crate::options::RenderOptions;
use crate::selector::SelectorKey;
use crate::stats::Compilation;

pub use context::PrintContext;
pub use plugin::StatsPrinterPlugin;

/// Type name of the top-level value passed to [`StatsPrinter::render`].
pub const ROOT_TYPE: &str = "compilation";

/// One rendered field of an object, handed to `printElements` handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    /// Field name or synthetic key (`summary!`, `separator!`).
    pub element: String,
    pub content: Option<String>,
}

impl Element {
    /// Content when present and not empty.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.content.as_deref().filter(|content| !content.is_empty())
    }
}

#[derive(Debug, Default)]
pub struct StatsPrinter {
    hooks: HookRegistry,
    plugins: Vec<String>,
}

impl StatsPrinter {
    /// Printer without handlers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Printer with the canonical report rules installed.
    pub fn with_default_rules() -> PrinterResult<Self> {
        let mut printer = Self::new();
        printer.register_plugin(&crate::rules::DefaultRules)?;
        Ok(printer)
    }

    #[must_use]
    pub fn hooks(&self) -> &HookRegistry {
        &self.hooks
    }

    pub fn hooks_mut(&mut self) -> &mut HookRegistry {
        &mut self.hooks
    }

    /// Renders a top-level compilation tree.
    #[must_use]
    pub fn render(&self, stats: &Value, options: &RenderOptions) -> String {
        let time_reference = stats.get("time").and_then(as_number);
        debug!(
            root = ROOT_TYPE,
            colors = ?options.colors,
            time_reference = ?time_reference,
            "render stats"
        );
        let output = self
            .print_with_reference(ROOT_TYPE, stats, options, time_reference)
            .unwrap_or_default();
        debug!(len = output.len(), "rendered stats");
        output
    }

    /// Typed convenience over [`StatsPrinter::render`].
    pub fn render_compilation(
        &self,
        compilation: &Compilation,
        options: &RenderOptions,
    ) -> PrinterResult<String> {
        let tree = compilation.to_value()?;
        Ok(self.render(&tree, options))
    }

    /// Renders `value` as a root of type `type_name`. The time reference is
    /// taken from the value's `time` field when it is a compilation.
    pub fn print(
        &self,
        type_name: &str,
        value: &Value,
        options: &RenderOptions,
    ) -> PrinterResult<Option<String>> {
        let type_path = SelectorKey::parse(type_name)?;
        let time_reference = if type_name == ROOT_TYPE {
            value.get("time").and_then(as_number)
        } else {
            None
        };
        Ok(self.print_with_reference(type_path.as_str(), value, options, time_reference))
    }

    /// Prints `value` at `type_path` below `ctx`. Handlers use this to
    /// re-enter the printer with a reshaped value.
    pub fn print_in(
        &self,
        type_path: &SelectorKey,
        value: &Value,
        ctx: &PrintContext<'_>,
    ) -> Option<String> {
        let name = std::borrow::Cow::Owned(type_path.as_str().to_owned());
        let frame = ctx.child(type_path.clone(), Some((name, value)), None);
        self.print_frame(value, &frame)
    }

    fn print_with_reference(
        &self,
        type_name: &str,
        value: &Value,
        options: &RenderOptions,
        time_reference: Option<f64>,
    ) -> Option<String> {
        let colors = Colors::from_option(&options.colors);
        let ctx = PrintContext::root(
            self,
            options,
            &colors,
            time_reference,
            SelectorKey::root(type_name),
            value,
        );
        self.print_frame(value, &ctx)
    }
}

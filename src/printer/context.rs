use std::borrow::Cow;

use serde_json::Value;

use crate::format::{self, ChunkIdDirection, Colors};
use crate::options::RenderOptions;
use crate::selector::SelectorKey;

use super::StatsPrinter;

/// State visible to handlers at one position of the tree.
///
/// Contexts form a chain of frames from the current position up to the root.
/// Each frame may bind one name (the root type, an item name or an element
/// key) to the value it introduced; [`PrintContext::get`] resolves names
/// innermost first, so nested bindings shadow outer ones.
#[derive(Debug, Clone)]
pub struct PrintContext<'a> {
    printer: &'a StatsPrinter,
    options: &'a RenderOptions,
    colors: &'a Colors,
    time_reference: Option<f64>,
    type_path: SelectorKey,
    binding: Option<(Cow<'a, str>, &'a Value)>,
    annotation: Option<(&'a str, &'a str)>,
    index: Option<usize>,
    parent: Option<&'a PrintContext<'a>>,
}

impl<'a> PrintContext<'a> {
    pub(super) fn root(
        printer: &'a StatsPrinter,
        options: &'a RenderOptions,
        colors: &'a Colors,
        time_reference: Option<f64>,
        type_path: SelectorKey,
        value: &'a Value,
    ) -> Self {
        let name = Cow::Owned(type_path.as_str().to_owned());
        Self {
            printer,
            options,
            colors,
            time_reference,
            type_path,
            binding: Some((name, value)),
            annotation: None,
            index: None,
            parent: None,
        }
    }

    /// Frame one level below `self`.
    pub(super) fn child(
        &'a self,
        type_path: SelectorKey,
        binding: Option<(Cow<'a, str>, &'a Value)>,
        index: Option<usize>,
    ) -> PrintContext<'a> {
        PrintContext {
            printer: self.printer,
            options: self.options,
            colors: self.colors,
            time_reference: self.time_reference,
            type_path,
            binding,
            annotation: None,
            index: index.or(self.index),
            parent: Some(self),
        }
    }

    /// Same position with an extra named annotation, e.g.
    /// `chunkGroupKind = "Entrypoint"`.
    #[must_use]
    pub fn with_annotation(&'a self, key: &'a str, value: &'a str) -> PrintContext<'a> {
        PrintContext {
            annotation: Some((key, value)),
            ..self.child(self.type_path.clone(), None, None)
        }
    }

    #[must_use]
    pub fn printer(&self) -> &'a StatsPrinter {
        self.printer
    }

    #[must_use]
    pub fn options(&self) -> &'a RenderOptions {
        self.options
    }

    #[must_use]
    pub fn colors(&self) -> &'a Colors {
        self.colors
    }

    #[must_use]
    pub fn time_reference(&self) -> Option<f64> {
        self.time_reference
    }

    #[must_use]
    pub fn type_path(&self) -> &SelectorKey {
        &self.type_path
    }

    /// Index of the innermost array item being printed.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Value bound to `name` by this frame or an ancestor.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'a Value> {
        let mut frame: &PrintContext<'a> = self;
        loop {
            if let Some((bound, value)) = &frame.binding {
                if bound == name {
                    return Some(*value);
                }
            }
            frame = frame.parent?;
        }
    }

    /// Field `field` of the value bound to `owner`, if present and not null.
    #[must_use]
    pub fn lookup(&self, owner: &str, field: &str) -> Option<&'a Value> {
        self.get(owner)
            .and_then(|value| value.get(field))
            .filter(|value| !value.is_null())
    }

    #[must_use]
    pub fn annotation(&self, key: &str) -> Option<&'a str> {
        let mut frame: &PrintContext<'a> = self;
        loop {
            if let Some((annotated, value)) = frame.annotation {
                if annotated == key {
                    return Some(value);
                }
            }
            frame = frame.parent?;
        }
    }

    #[must_use]
    pub fn format_time(&self, time: f64) -> String {
        format::format_time(time, self.time_reference, false, self.colors)
    }

    #[must_use]
    pub fn format_time_bold(&self, time: f64) -> String {
        format::format_time(time, self.time_reference, true, self.colors)
    }

    #[must_use]
    pub fn format_size(&self, size: f64) -> String {
        format::format_size(size)
    }

    #[must_use]
    pub fn format_date_time(&self, timestamp_millis: f64) -> String {
        format::format_date_time(timestamp_millis, self.colors)
    }

    #[must_use]
    pub fn format_flag(&self, flag: &str) -> String {
        format::format_flag(flag)
    }

    #[must_use]
    pub fn format_layer(&self, layer: &str) -> String {
        format::format_layer(layer)
    }

    #[must_use]
    pub fn format_module_id(&self, id: &Value) -> String {
        format::format_module_id(id)
    }

    #[must_use]
    pub fn format_chunk_id(&self, id: &Value, direction: Option<ChunkIdDirection>) -> String {
        format::format_chunk_id(id, direction, self.colors)
    }

    #[must_use]
    pub fn format_filename(&self, filename: &str, oversize: bool) -> String {
        format::format_filename(filename, oversize, self.colors)
    }

    #[must_use]
    pub fn format_error(&self, message: &str) -> String {
        format::format_error(message, self.colors)
    }
}

use std::borrow::Cow;

use serde_json::{Map, Value};
use tracing::trace;

use super::{Element, PrintContext, StatsPrinter};

static NULL: Value = Value::Null;

impl StatsPrinter {
    pub(super) fn print_frame(&self, value: &Value, ctx: &PrintContext<'_>) -> Option<String> {
        let type_path = ctx.type_path();
        let printed = match self.hooks.call_print(type_path, value, ctx) {
            Some(printed) => Some(printed),
            None => match value {
                Value::Array(items) => self.print_array(items, ctx),
                Value::Object(fields) => self.print_object(fields, ctx),
                _ => {
                    trace!(type_path = %type_path, "no print handler for scalar");
                    None
                }
            },
        };
        printed.map(|output| self.hooks.call_result(type_path, output, ctx))
    }

    fn print_array(&self, items: &[Value], ctx: &PrintContext<'_>) -> Option<String> {
        let type_path = ctx.type_path();
        let item_key = type_path.items();
        let printed: Vec<Option<String>> = items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let naming = ctx.child(item_key.clone(), None, Some(index));
                match self.hooks.call_item_name(&item_key, item, &naming) {
                    Some(item_name) => {
                        let item_path = type_path.item(&item_name);
                        let frame = ctx.child(item_path, Some((Cow::Owned(item_name), item)), Some(index));
                        self.print_frame(item, &frame)
                    }
                    None => self.print_frame(item, &naming),
                }
            })
            .collect();

        self.hooks
            .call_print_items(type_path, &printed, ctx)
            .or_else(|| join_lines(printed.iter().map(Option::as_deref)))
    }

    fn print_object(&self, fields: &Map<String, Value>, ctx: &PrintContext<'_>) -> Option<String> {
        let type_path = ctx.type_path();
        let mut keys: Vec<String> = fields.keys().cloned().collect();
        self.hooks.call_sort_elements(type_path, &mut keys, ctx);

        let elements: Vec<Element> = keys
            .into_iter()
            .map(|key| {
                let value = fields.get(&key).unwrap_or(&NULL);
                let content = {
                    let frame = ctx.child(
                        type_path.field(&key),
                        Some((Cow::Borrowed(key.as_str()), value)),
                        None,
                    );
                    self.print_frame(value, &frame)
                };
                Element {
                    element: key,
                    content,
                }
            })
            .collect();

        self.hooks
            .call_print_elements(type_path, &elements, ctx)
            .or_else(|| join_lines(elements.iter().map(Element::text)))
    }
}

fn join_lines<'s>(fragments: impl Iterator<Item = Option<&'s str>>) -> Option<String> {
    let kept: Vec<&str> = fragments
        .flatten()
        .filter(|fragment| !fragment.is_empty())
        .collect();
    if kept.is_empty() {
        None
    } else {
        Some(kept.join("\n"))
    }
}

//! Selector-keyed handler chains consulted by the printer.
//!
//! Every category maps selector keys to handlers in tap order. Dispatch walks
//! the levels of the current type path (see [`SelectorKey::levels`]), so a
//! handler tapped on `module.name` also serves
//! `compilation.chunks[].chunk.modules[].module.name`.
//!
//! `print`, `getItemName`, `printItems` and `printElements` stop at the first
//! handler that returns `Some`. `sortElements` and `result` run every
//! matching handler: the former mutate the element list in place, the latter
//! thread the output through as a pipeline.

mod map;

use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::error::PrinterResult;
use crate::printer::{Element, PrintContext};
use crate::selector::SelectorKey;

use map::HookMap;

pub type PrintFn = Arc<dyn Fn(&Value, &PrintContext<'_>) -> Option<String> + Send + Sync + 'static>;
pub type SortElementsFn = Arc<dyn Fn(&mut Vec<String>, &PrintContext<'_>) + Send + Sync + 'static>;
pub type ItemNameFn =
    Arc<dyn Fn(&Value, &PrintContext<'_>) -> Option<String> + Send + Sync + 'static>;
pub type PrintItemsFn =
    Arc<dyn Fn(&[Option<String>], &PrintContext<'_>) -> Option<String> + Send + Sync + 'static>;
pub type PrintElementsFn =
    Arc<dyn Fn(&[Element], &PrintContext<'_>) -> Option<String> + Send + Sync + 'static>;
pub type ResultFn = Arc<dyn Fn(String, &PrintContext<'_>) -> String + Send + Sync + 'static>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookCategory {
    Print,
    SortElements,
    GetItemName,
    PrintItems,
    PrintElements,
    Result,
}

impl HookCategory {
    pub const ALL: [HookCategory; 6] = [
        HookCategory::Print,
        HookCategory::SortElements,
        HookCategory::GetItemName,
        HookCategory::PrintItems,
        HookCategory::PrintElements,
        HookCategory::Result,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            HookCategory::Print => "print",
            HookCategory::SortElements => "sortElements",
            HookCategory::GetItemName => "getItemName",
            HookCategory::PrintItems => "printItems",
            HookCategory::PrintElements => "printElements",
            HookCategory::Result => "result",
        }
    }
}

impl fmt::Display for HookCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The six handler categories of a printer.
#[derive(Default, Clone)]
pub struct HookRegistry {
    print: HookMap<PrintFn>,
    sort_elements: HookMap<SortElementsFn>,
    item_name: HookMap<ItemNameFn>,
    print_items: HookMap<PrintItemsFn>,
    print_elements: HookMap<PrintElementsFn>,
    result: HookMap<ResultFn>,
}

impl HookRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tap_print<F>(&mut self, key: &str, handler: F) -> PrinterResult<()>
    where
        F: Fn(&Value, &PrintContext<'_>) -> Option<String> + Send + Sync + 'static,
    {
        let key = SelectorKey::parse(key)?;
        let depth = self.print.push(key.clone(), Arc::new(handler));
        log_tap(HookCategory::Print, &key, depth);
        Ok(())
    }

    pub fn tap_sort_elements<F>(&mut self, key: &str, handler: F) -> PrinterResult<()>
    where
        F: Fn(&mut Vec<String>, &PrintContext<'_>) + Send + Sync + 'static,
    {
        let key = SelectorKey::parse(key)?;
        let depth = self.sort_elements.push(key.clone(), Arc::new(handler));
        log_tap(HookCategory::SortElements, &key, depth);
        Ok(())
    }

    pub fn tap_item_name<F>(&mut self, key: &str, handler: F) -> PrinterResult<()>
    where
        F: Fn(&Value, &PrintContext<'_>) -> Option<String> + Send + Sync + 'static,
    {
        let key = SelectorKey::parse(key)?;
        let depth = self.item_name.push(key.clone(), Arc::new(handler));
        log_tap(HookCategory::GetItemName, &key, depth);
        Ok(())
    }

    pub fn tap_print_items<F>(&mut self, key: &str, handler: F) -> PrinterResult<()>
    where
        F: Fn(&[Option<String>], &PrintContext<'_>) -> Option<String> + Send + Sync + 'static,
    {
        let key = SelectorKey::parse(key)?;
        let depth = self.print_items.push(key.clone(), Arc::new(handler));
        log_tap(HookCategory::PrintItems, &key, depth);
        Ok(())
    }

    pub fn tap_print_elements<F>(&mut self, key: &str, handler: F) -> PrinterResult<()>
    where
        F: Fn(&[Element], &PrintContext<'_>) -> Option<String> + Send + Sync + 'static,
    {
        let key = SelectorKey::parse(key)?;
        let depth = self.print_elements.push(key.clone(), Arc::new(handler));
        log_tap(HookCategory::PrintElements, &key, depth);
        Ok(())
    }

    pub fn tap_result<F>(&mut self, key: &str, handler: F) -> PrinterResult<()>
    where
        F: Fn(String, &PrintContext<'_>) -> String + Send + Sync + 'static,
    {
        let key = SelectorKey::parse(key)?;
        let depth = self.result.push(key.clone(), Arc::new(handler));
        log_tap(HookCategory::Result, &key, depth);
        Ok(())
    }

    pub fn call_print(
        &self,
        type_path: &SelectorKey,
        value: &Value,
        ctx: &PrintContext<'_>,
    ) -> Option<String> {
        self.print
            .first_some(type_path, |handler| handler(value, ctx))
    }

    /// Runs every matching sort handler; later handlers see the order left by
    /// earlier ones.
    pub fn call_sort_elements(
        &self,
        type_path: &SelectorKey,
        elements: &mut Vec<String>,
        ctx: &PrintContext<'_>,
    ) {
        for handler in self.sort_elements.matching(type_path) {
            handler(elements, ctx);
        }
    }

    pub fn call_item_name(
        &self,
        type_path: &SelectorKey,
        item: &Value,
        ctx: &PrintContext<'_>,
    ) -> Option<String> {
        self.item_name
            .first_some(type_path, |handler| handler(item, ctx))
            .filter(|name| !name.is_empty())
    }

    pub fn call_print_items(
        &self,
        type_path: &SelectorKey,
        items: &[Option<String>],
        ctx: &PrintContext<'_>,
    ) -> Option<String> {
        self.print_items
            .first_some(type_path, |handler| handler(items, ctx))
    }

    pub fn call_print_elements(
        &self,
        type_path: &SelectorKey,
        elements: &[Element],
        ctx: &PrintContext<'_>,
    ) -> Option<String> {
        self.print_elements
            .first_some(type_path, |handler| handler(elements, ctx))
    }

    pub fn call_result(&self, type_path: &SelectorKey, output: String, ctx: &PrintContext<'_>) -> String {
        self.result
            .matching(type_path)
            .fold(output, |output, handler| handler(output, ctx))
    }

    /// Number of handlers tapped on exactly `key` (no level matching).
    #[must_use]
    pub fn handler_count(&self, category: HookCategory, key: &str) -> usize {
        match category {
            HookCategory::Print => self.print.chain(key).len(),
            HookCategory::SortElements => self.sort_elements.chain(key).len(),
            HookCategory::GetItemName => self.item_name.chain(key).len(),
            HookCategory::PrintItems => self.print_items.chain(key).len(),
            HookCategory::PrintElements => self.print_elements.chain(key).len(),
            HookCategory::Result => self.result.chain(key).len(),
        }
    }

    /// Total number of handlers across all keys of `category`.
    #[must_use]
    pub fn category_len(&self, category: HookCategory) -> usize {
        match category {
            HookCategory::Print => self.print.handler_total(),
            HookCategory::SortElements => self.sort_elements.handler_total(),
            HookCategory::GetItemName => self.item_name.handler_total(),
            HookCategory::PrintItems => self.print_items.handler_total(),
            HookCategory::PrintElements => self.print_elements.handler_total(),
            HookCategory::Result => self.result.handler_total(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        HookCategory::ALL
            .into_iter()
            .all(|category| self.category_len(category) == 0)
    }
}

impl fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookRegistry")
            .field("print_keys", &self.print.key_count())
            .field("sort_elements_keys", &self.sort_elements.key_count())
            .field("item_name_keys", &self.item_name.key_count())
            .field("print_items_keys", &self.print_items.key_count())
            .field("print_elements_keys", &self.print_elements.key_count())
            .field("result_keys", &self.result.key_count())
            .finish()
    }
}

fn log_tap(category: HookCategory, key: &SelectorKey, depth: usize) {
    debug!(category = %category, key = %key, depth, "tap hook");
}

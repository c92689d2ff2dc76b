use std::collections::HashMap;

use smallvec::SmallVec;

use crate::selector::SelectorKey;

/// Most keys carry a single handler.
type Chain<H> = SmallVec<[H; 2]>;

/// Handlers of one category, keyed by selector and kept in tap order.
pub(super) struct HookMap<H> {
    chains: HashMap<String, Chain<H>>,
}

impl<H> Default for HookMap<H> {
    fn default() -> Self {
        Self {
            chains: HashMap::new(),
        }
    }
}

impl<H: Clone> Clone for HookMap<H> {
    fn clone(&self) -> Self {
        Self {
            chains: self.chains.clone(),
        }
    }
}

impl<H> HookMap<H> {
    pub(super) fn push(&mut self, key: SelectorKey, handler: H) -> usize {
        let chain = self.chains.entry(key.as_str().to_owned()).or_default();
        chain.push(handler);
        chain.len()
    }

    pub(super) fn chain(&self, key: &str) -> &[H] {
        self.chains.get(key).map_or(&[][..], |chain| chain.as_slice())
    }

    pub(super) fn key_count(&self) -> usize {
        self.chains.len()
    }

    pub(super) fn handler_total(&self) -> usize {
        self.chains.values().map(|chain| chain.len()).sum()
    }

    /// Handlers matching `type_path`, most specific level first.
    pub(super) fn matching<'m>(&'m self, type_path: &'m SelectorKey) -> impl Iterator<Item = &'m H> + 'm {
        type_path.levels().flat_map(move |level| self.chain(level).iter())
    }

    /// First `Some` produced by a matching handler.
    pub(super) fn first_some<T>(
        &self,
        type_path: &SelectorKey,
        mut call: impl FnMut(&H) -> Option<T>,
    ) -> Option<T> {
        if self.chains.is_empty() {
            return None;
        }
        self.matching(type_path).find_map(|handler| call(handler))
    }
}

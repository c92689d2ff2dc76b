//! Selector keys: dotted addresses of renderable positions.
//!
//! Grammar of one segment:
//!
//! * `name`: an object field (or a bare type name such as `chunk`),
//! * `name[]`: each item of an array-valued field,
//! * `name!`: a synthetic position with no backing data,
//! * `name(tag)`: a polymorphic variant of type `name`.
//!
//! During a render the printer builds full type paths such as
//! `compilation.chunks[].chunk.origins[].chunkOrigin.loc`. Handlers are
//! registered against shorter keys and matched against every dot-suffix of
//! the path, longest first (see [`SelectorKey::levels`]).

use std::fmt;

use crate::error::{PrinterError, PrinterResult};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SelectorKey(String);

/// One parsed segment of a selector key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'k> {
    Field(&'k str),
    Items(&'k str),
    Synthetic(&'k str),
    Variant { name: &'k str, tag: &'k str },
}

impl SelectorKey {
    /// Validates `key` against the segment grammar.
    pub fn parse(key: &str) -> PrinterResult<Self> {
        let invalid = |reason| PrinterError::InvalidSelector {
            key: key.to_owned(),
            reason,
        };
        if key.is_empty() {
            return Err(invalid("key is empty"));
        }
        for segment in key.split('.') {
            parse_segment(segment).map_err(invalid)?;
        }
        Ok(Self(key.to_owned()))
    }

    /// Key of a root type without validation; used for paths the printer
    /// derives itself.
    #[must_use]
    pub fn root(type_name: &str) -> Self {
        Self(type_name.to_owned())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `self.<field>`
    #[must_use]
    pub fn field(&self, field: &str) -> Self {
        Self(format!("{}.{field}", self.0))
    }

    /// `self[]`
    #[must_use]
    pub fn items(&self) -> Self {
        Self(format!("{}[]", self.0))
    }

    /// `self[].<item_name>`
    #[must_use]
    pub fn item(&self, item_name: &str) -> Self {
        Self(format!("{}[].{item_name}", self.0))
    }

    /// Last segment of the path.
    #[must_use]
    pub fn leaf(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }

    #[must_use]
    pub fn is_synthetic(&self) -> bool {
        self.leaf().ends_with('!')
    }

    /// Every dot-suffix of the path, most specific first.
    pub fn levels(&self) -> impl Iterator<Item = &str> + '_ {
        std::iter::once(self.0.as_str()).chain(
            self.0
                .match_indices('.')
                .map(move |(index, _)| &self.0[index + 1..]),
        )
    }

    /// Parsed segments; segments that do not follow the grammar are reported
    /// as plain fields.
    pub fn segments(&self) -> impl Iterator<Item = Segment<'_>> + '_ {
        self.0
            .split('.')
            .map(|segment| parse_segment(segment).unwrap_or(Segment::Field(segment)))
    }
}

/// Type name `base(tag).base`, the variant-specific item name for `base`.
#[must_use]
pub fn variant_type(base: &str, tag: &str) -> String {
    format!("{base}({tag}).{base}")
}

fn parse_segment(segment: &str) -> Result<Segment<'_>, &'static str> {
    if segment.is_empty() {
        return Err("empty segment");
    }
    if let Some(name) = segment.strip_suffix("[]") {
        check_name(name)?;
        return Ok(Segment::Items(name));
    }
    if let Some(name) = segment.strip_suffix('!') {
        check_name(name)?;
        return Ok(Segment::Synthetic(name));
    }
    if let Some(open) = segment.find('(') {
        let Some(tag) = segment[open + 1..].strip_suffix(')') else {
            return Err("unbalanced parentheses");
        };
        let name = &segment[..open];
        check_name(name)?;
        check_name(tag)?;
        return Ok(Segment::Variant { name, tag });
    }
    check_name(segment)?;
    Ok(Segment::Field(segment))
}

fn check_name(name: &str) -> Result<(), &'static str> {
    if name.is_empty() {
        return Err("empty name");
    }
    if name.contains(['(', ')', '[', ']', '!']) {
        return Err("misplaced suffix");
    }
    Ok(())
}

impl fmt::Display for SelectorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SelectorKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

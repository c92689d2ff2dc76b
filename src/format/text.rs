use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use super::colors::Colors;
use super::value::{display_number, display_value, is_non_empty_array};

/// Number of payload characters kept from a `data:` resource name.
const DATA_URI_CONTENT_LENGTH: usize = 16;

static DATA_URI_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new("^data:[^,]+,").expect("data uri pattern is valid"));

static MATCH_RESOURCE_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new("^[^!]+!=!").expect("match resource pattern is valid"));

/// Relation of a chunk id to the chunk being printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkIdDirection {
    Parent,
    Sibling,
    Child,
}

#[must_use]
pub fn plural<'s>(count: f64, one: &'s str, many: &'s str) -> &'s str {
    if count == 1.0 { one } else { many }
}

/// `+ N` when some items of the list are already shown, plain `N` otherwise.
#[must_use]
pub fn more_count(list: Option<&Value>, count: f64) -> String {
    if is_non_empty_array(list) {
        format!("+ {}", display_number(count))
    } else {
        display_number(count)
    }
}

#[must_use]
pub fn format_flag(flag: &str) -> String {
    format!("[{flag}]")
}

#[must_use]
pub fn format_layer(layer: &str) -> String {
    format!("(in {layer})")
}

#[must_use]
pub fn format_module_id(id: &Value) -> String {
    format!("[{}]", display_value(id))
}

#[must_use]
pub fn format_chunk_id(id: &Value, direction: Option<ChunkIdDirection>, colors: &Colors) -> String {
    let id = colors.yellow(&display_value(id));
    match direction {
        Some(ChunkIdDirection::Parent) => format!("<{{{id}}}>"),
        Some(ChunkIdDirection::Sibling) => format!("={{{id}}}="),
        Some(ChunkIdDirection::Child) => format!(">{{{id}}}<"),
        None => format!("{{{id}}}"),
    }
}

#[must_use]
pub fn format_filename(filename: &str, oversize: bool, colors: &Colors) -> String {
    if oversize {
        colors.yellow(filename)
    } else {
        colors.green(filename)
    }
}

/// Prefixes every line of `text` that has content. The first line is
/// prefixed too unless `skip_first_line` is set or the text starts with a
/// newline; blank lines are left empty.
#[must_use]
pub fn indent(text: &str, prefix: &str, skip_first_line: bool) -> String {
    if text.is_empty() {
        return String::new();
    }
    let mut out = String::with_capacity(text.len() + prefix.len() * 4);
    if !skip_first_line && !text.starts_with('\n') {
        out.push_str(prefix);
    }
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        out.push(ch);
        if ch == '\n' && chars.peek().is_some_and(|next| *next != '\n') {
            out.push_str(prefix);
        }
    }
    out
}

#[must_use]
pub fn map_lines(text: &str, mut line: impl FnMut(&str) -> String) -> String {
    text.split('\n').map(&mut line).collect::<Vec<_>>().join("\n")
}

/// Shortens `data:` URIs to their header plus a few payload characters.
#[must_use]
pub fn resource_name(resource: &str) -> String {
    let Some(header) = DATA_URI_PREFIX.find(resource) else {
        return resource.to_owned();
    };
    let total = resource.chars().count();
    let keep = header.as_str().chars().count() + DATA_URI_CONTENT_LENGTH;
    if total < keep {
        return resource.to_owned();
    }
    let cut = keep.min(total.saturating_sub(2));
    let mut short: String = resource.chars().take(cut).collect();
    short.push_str("..");
    short
}

/// Splits a module name into its loader prefix (up to the last `!`) and the
/// shortened resource.
#[must_use]
pub fn module_name(name: &str) -> (String, String) {
    let normalized = match MATCH_RESOURCE_PREFIX.find(name) {
        Some(matched) => format!(
            "{}{}",
            matched.as_str(),
            resource_name(&name[matched.end()..])
        ),
        None => name.to_owned(),
    };
    match normalized.rfind('!') {
        Some(split) => (
            normalized[..=split].to_owned(),
            resource_name(&normalized[split + 1..]),
        ),
        None => (String::new(), resource_name(&normalized)),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn chunk_ids_use_directional_brackets() {
        let colors = Colors::disabled();
        assert_eq!(format_chunk_id(&json!(1), None, &colors), "{1}");
        assert_eq!(
            format_chunk_id(&json!("main"), Some(ChunkIdDirection::Parent), &colors),
            "<{main}>"
        );
        assert_eq!(
            format_chunk_id(&json!(2), Some(ChunkIdDirection::Sibling), &colors),
            "={2}="
        );
        assert_eq!(
            format_chunk_id(&json!(3), Some(ChunkIdDirection::Child), &colors),
            ">{3}<"
        );
    }

    #[test]
    fn indent_skips_blank_lines() {
        assert_eq!(indent("a\nb\n\nc", "  ", false), "  a\n  b\n\n  c");
        assert_eq!(indent("a\nb", "| ", true), "a\n| b");
        assert_eq!(indent("\na", "  ", false), "\n  a");
        assert_eq!(indent("", "  ", false), "");
    }

    #[test]
    fn more_count_depends_on_visible_items() {
        assert_eq!(more_count(Some(&json!(["a"])), 3.0), "+ 3");
        assert_eq!(more_count(Some(&json!([])), 3.0), "3");
        assert_eq!(more_count(None, 1.0), "1");
    }

    #[test]
    fn data_uris_are_truncated() {
        let uri = "data:text/plain;base64,SGVsbG8gV29ybGQgZnJvbSBhIGxvbmcgc3RyaW5n";
        assert_eq!(resource_name(uri), "data:text/plain;base64,SGVsbG8gV29ybGQg..");
        assert_eq!(resource_name("data:a,short"), "data:a,short");
        assert_eq!(resource_name("./src/index.js"), "./src/index.js");
    }

    #[test]
    fn module_names_split_loader_prefix() {
        assert_eq!(
            module_name("css-loader!./src/app.css"),
            ("css-loader!".to_owned(), "./src/app.css".to_owned())
        );
        assert_eq!(
            module_name("./src/index.js"),
            (String::new(), "./src/index.js".to_owned())
        );
    }

    #[test]
    fn map_lines_applies_to_each_line() {
        assert_eq!(map_lines("a\nb", |line| format!("<w> {line}")), "<w> a\n<w> b");
    }
}

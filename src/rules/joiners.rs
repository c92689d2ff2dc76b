//! Item joiners (`printItems`) and element joiners (`printElements`).

use std::borrow::Cow;

use crate::error::PrinterResult;
use crate::format::indent;
use crate::hooks::HookRegistry;
use crate::printer::{Element, PrintContext};

/// How the rendered items of an array are combined.
#[derive(Debug, Clone, Copy)]
enum ItemsJoin {
    /// `a b c`
    OneLine,
    /// `(a b c)`, or nothing for an empty list.
    OneLineBrackets,
    /// Items separated by a blank line.
    MoreSpacing,
    /// `a, b, c`
    Comma,
    /// `(a, b, c)`, or nothing for an empty list.
    CommaBrackets,
    /// `(<name>: a, b, c)`, or nothing for an empty list.
    CommaBracketsWithName(&'static str),
    /// `a -> b ->`
    Arrows,
    /// Items separated by a blank line, indented by two spaces.
    IndentedMoreSpacing,
    /// One item per line, indented by two spaces.
    IndentedLines,
}

const ITEMS_JOINERS: &[(&str, ItemsJoin)] = &[
    ("chunk.parents", ItemsJoin::OneLine),
    ("chunk.siblings", ItemsJoin::OneLine),
    ("chunk.children", ItemsJoin::OneLine),
    ("chunk.names", ItemsJoin::CommaBrackets),
    ("chunk.idHints", ItemsJoin::CommaBracketsWithName("id hint")),
    ("chunk.runtime", ItemsJoin::CommaBracketsWithName("runtime")),
    ("chunk.files", ItemsJoin::Comma),
    ("chunk.childrenByOrder", ItemsJoin::OneLine),
    ("chunk.childrenByOrder[].children", ItemsJoin::OneLine),
    ("chunkGroup.assets", ItemsJoin::OneLine),
    ("chunkGroup.auxiliaryAssets", ItemsJoin::OneLineBrackets),
    ("chunkGroupChildGroup.children", ItemsJoin::Comma),
    ("chunkGroupChild.assets", ItemsJoin::OneLine),
    ("chunkGroupChild.auxiliaryAssets", ItemsJoin::OneLineBrackets),
    ("asset.chunks", ItemsJoin::Comma),
    ("asset.auxiliaryChunks", ItemsJoin::CommaBrackets),
    ("asset.chunkNames", ItemsJoin::CommaBracketsWithName("name")),
    (
        "asset.auxiliaryChunkNames",
        ItemsJoin::CommaBracketsWithName("auxiliary name"),
    ),
    ("asset.chunkIdHints", ItemsJoin::CommaBracketsWithName("id hint")),
    (
        "asset.auxiliaryChunkIdHints",
        ItemsJoin::CommaBracketsWithName("auxiliary id hint"),
    ),
    ("module.chunks", ItemsJoin::OneLine),
    ("module.issuerPath", ItemsJoin::Arrows),
    ("compilation.errors", ItemsJoin::MoreSpacing),
    ("compilation.warnings", ItemsJoin::MoreSpacing),
    ("compilation.logging", ItemsJoin::MoreSpacing),
    ("compilation.children", ItemsJoin::IndentedMoreSpacing),
    ("moduleTraceItem.dependencies", ItemsJoin::OneLine),
    ("loggingEntry.children", ItemsJoin::IndentedLines),
];

impl ItemsJoin {
    fn join(self, items: &[Option<String>]) -> Option<String> {
        let kept = || {
            items
                .iter()
                .filter_map(|item| item.as_deref())
                .filter(|item| !item.is_empty())
        };
        let joined = |separator: &str| kept().collect::<Vec<_>>().join(separator);
        let bracketed = |text: String| (!items.is_empty()).then(|| format!("({text})"));
        match self {
            ItemsJoin::OneLine => Some(joined(" ")),
            ItemsJoin::OneLineBrackets => bracketed(joined(" ")),
            ItemsJoin::MoreSpacing => Some(joined("\n\n")),
            ItemsJoin::Comma => Some(joined(", ")),
            ItemsJoin::CommaBrackets => bracketed(joined(", ")),
            ItemsJoin::CommaBracketsWithName(name) => {
                bracketed(format!("{name}: {}", joined(", ")))
            }
            ItemsJoin::Arrows => Some(
                kept()
                    .map(|item| format!("{item} ->"))
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
            ItemsJoin::IndentedMoreSpacing => Some(indent(&joined("\n\n"), "  ", false)),
            ItemsJoin::IndentedLines => Some(indent(&joined("\n"), "  ", false)),
        }
    }
}

type ElementsRule = fn(&[Element], &PrintContext<'_>) -> Option<String>;

const ELEMENT_JOINERS: &[(&str, ElementsRule)] = &[
    ("compilation", join_compilation),
    ("asset", join_asset),
    ("asset.info", one_line),
    ("module", join_module),
    ("chunk", join_chunk),
    ("chunk.childrenByOrder[]", join_children_by_order),
    ("chunkGroup", join_chunk_group),
    ("chunkGroupAsset", one_line),
    ("chunkGroupChildGroup", one_line),
    ("chunkGroupChild", one_line),
    ("moduleReason", join_module_reason),
    ("module.profile", in_brackets),
    ("moduleIssuer", one_line),
    ("chunkOrigin", join_chunk_origin),
    ("errors[].error", join_error),
    ("warnings[].error", join_warning),
    ("loggingGroup", join_logging_group),
    ("moduleTraceItem", join_module_trace_item),
    ("moduleTraceDependency", one_line),
];

pub(super) fn install(hooks: &mut HookRegistry) -> PrinterResult<()> {
    for (key, join) in ITEMS_JOINERS {
        let join = *join;
        hooks.tap_print_items(key, move |items, _| join.join(items))?;
    }
    for (key, rule) in ELEMENT_JOINERS {
        hooks.tap_print_elements(key, *rule)?;
    }
    Ok(())
}

/// Non-empty contents joined by single spaces.
#[must_use]
pub fn join_one_line(elements: &[Element]) -> String {
    elements
        .iter()
        .filter_map(Element::text)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Contents before the first `separator!` are joined by spaces; everything
/// after it goes into one parenthesized, comma-separated group. Further
/// separators close the group and open a new one.
#[must_use]
pub fn join_in_brackets(elements: &[Element]) -> String {
    #[derive(Clone, Copy, PartialEq)]
    enum Mode {
        Start,
        Inline,
        OpenPending,
        ReopenPending,
        InGroup,
    }

    let mut out = String::new();
    let mut mode = Mode::Start;
    for element in elements {
        if element.element == "separator!" {
            mode = match mode {
                Mode::Start => Mode::OpenPending,
                Mode::Inline => Mode::ReopenPending,
                Mode::InGroup => {
                    out.push(')');
                    Mode::ReopenPending
                }
                pending => pending,
            };
        }
        let Some(content) = element.text() else {
            continue;
        };
        mode = match mode {
            Mode::Start => Mode::Inline,
            Mode::Inline => {
                out.push(' ');
                Mode::Inline
            }
            Mode::OpenPending => {
                out.push('(');
                Mode::InGroup
            }
            Mode::ReopenPending => {
                out.push_str(" (");
                Mode::InGroup
            }
            Mode::InGroup => {
                out.push_str(", ");
                Mode::InGroup
            }
        };
        out.push_str(content);
    }
    if mode == Mode::InGroup {
        out.push(')');
    }
    out
}

/// Joins fragments with spaces, honoring explicit newlines: a fragment that
/// starts with `\n` opens a new line, one that ends with `\n` closes it.
/// Continuation lines are indented with `indenter`.
#[must_use]
pub fn join_explicit_new_line<'s, I>(fragments: I, indenter: &str) -> String
where
    I: IntoIterator<Item = Option<Cow<'s, str>>>,
{
    let mut out = String::new();
    let mut first_in_line = true;
    let mut first = true;
    for fragment in fragments {
        let Some(fragment) = fragment.filter(|fragment| !fragment.is_empty()) else {
            continue;
        };
        let mut content = indent(&fragment, if first { "" } else { indenter }, !first_in_line);
        if first_in_line {
            content = content.trim_start_matches('\n').to_owned();
        }
        if content.is_empty() {
            continue;
        }
        first = false;
        let no_joiner = first_in_line || content.starts_with('\n');
        first_in_line = content.ends_with('\n');
        if !no_joiner {
            out.push(' ');
        }
        out.push_str(&content);
    }
    out.trim().to_owned()
}

fn fragments(elements: &[Element]) -> impl Iterator<Item = Option<Cow<'_, str>>> {
    elements.iter().map(|element| element.text().map(Cow::Borrowed))
}

/// `\n<content>\n`: puts a nested block on lines of its own.
fn block(content: &str) -> Option<Cow<'_, str>> {
    Some(Cow::Owned(format!("\n{content}\n")))
}

fn one_line(elements: &[Element], _: &PrintContext<'_>) -> Option<String> {
    Some(join_one_line(elements))
}

fn in_brackets(elements: &[Element], _: &PrintContext<'_>) -> Option<String> {
    Some(join_in_brackets(elements))
}

/// Top-level sections; diagnostics and logging get a blank line around them.
fn join_compilation(elements: &[Element], _: &PrintContext<'_>) -> Option<String> {
    const SPACIOUS: &[&str] = &[
        "warnings",
        "filteredWarningDetailsCount",
        "errors",
        "filteredErrorDetailsCount",
        "logging",
    ];
    let mut out = String::new();
    let mut last_spacious = false;
    for element in elements {
        let Some(content) = element.text() else {
            continue;
        };
        let spacious = SPACIOUS.contains(&element.element.as_str());
        if !out.is_empty() {
            out.push_str(if spacious || last_spacious { "\n\n" } else { "\n" });
        }
        out.push_str(content);
        last_spacious = spacious;
    }
    if last_spacious {
        out.push('\n');
    }
    Some(out)
}

fn join_asset(elements: &[Element], _: &PrintContext<'_>) -> Option<String> {
    let fragments = elements.iter().map(|element| match element.text() {
        Some(content) if matches!(element.element.as_str(), "related" | "children") => {
            block(content)
        }
        other => other.map(Cow::Borrowed),
    });
    Some(join_explicit_new_line(fragments, "  "))
}

/// Prints the id or the name of a module, not both when they are equal.
fn join_module(elements: &[Element], ctx: &PrintContext<'_>) -> Option<String> {
    let module = ctx.get("module");
    let id_is_name = module.is_some_and(|module| module.get("id") == module.get("name"));
    let mut has_name = false;
    let fragments = elements.iter().map(|element| {
        let content = element.text();
        match element.element.as_str() {
            "id" if id_is_name => {
                if has_name {
                    return None;
                }
                has_name |= content.is_some();
            }
            "name" => {
                if has_name {
                    return None;
                }
                has_name |= content.is_some();
            }
            "providedExports" | "usedExports" | "optimizationBailout" | "reasons"
            | "issuerPath" | "profile" | "children" | "modules" => {
                if let Some(content) = content {
                    return block(content);
                }
            }
            _ => {}
        }
        content.map(Cow::Borrowed)
    });
    Some(join_explicit_new_line(fragments, "  "))
}

/// `chunk ...`; the `[initial]` flag is implied by `[entry]`.
fn join_chunk(elements: &[Element], _: &PrintContext<'_>) -> Option<String> {
    let mut has_entry = false;
    let fragments = elements.iter().map(|element| {
        match element.element.as_str() {
            "entry" => has_entry |= element.text().is_some(),
            "initial" if has_entry => return None,
            _ => {}
        }
        element.text().map(Cow::Borrowed)
    });
    Some(format!("chunk {}", join_explicit_new_line(fragments, "  ")))
}

fn join_children_by_order(elements: &[Element], _: &PrintContext<'_>) -> Option<String> {
    Some(format!("({})", join_one_line(elements)))
}

fn join_chunk_group(elements: &[Element], _: &PrintContext<'_>) -> Option<String> {
    Some(join_explicit_new_line(fragments(elements), "  "))
}

fn join_module_reason(elements: &[Element], ctx: &PrintContext<'_>) -> Option<String> {
    let reason = ctx.get("moduleReason");
    let field = |name: &str| reason.and_then(|reason| reason.get(name));
    let id_is_module = field("moduleId") == field("module");
    let resolved_is_module = field("module") == field("resolvedModule");
    let mut has_name = false;
    let fragments = elements.iter().map(|element| {
        let content = element.text();
        match element.element.as_str() {
            "moduleId" => {
                if reason.is_some() && id_is_module && content.is_some() {
                    has_name = true;
                }
            }
            "module" if has_name => return None,
            "resolvedModule" if reason.is_some() && resolved_is_module => return None,
            "children" => {
                if let Some(content) = content {
                    return block(content);
                }
            }
            _ => {}
        }
        content.map(Cow::Borrowed)
    });
    Some(join_explicit_new_line(fragments, "  "))
}

fn join_chunk_origin(elements: &[Element], _: &PrintContext<'_>) -> Option<String> {
    Some(format!("> {}", join_one_line(elements)))
}

fn join_diagnostic(label: String, elements: &[Element]) -> String {
    format!("{label} in {}", join_explicit_new_line(fragments(elements), ""))
}

fn join_error(elements: &[Element], ctx: &PrintContext<'_>) -> Option<String> {
    Some(join_diagnostic(ctx.colors().red("ERROR"), elements))
}

fn join_warning(elements: &[Element], ctx: &PrintContext<'_>) -> Option<String> {
    Some(join_diagnostic(ctx.colors().yellow("WARNING"), elements))
}

fn join_logging_group(elements: &[Element], _: &PrintContext<'_>) -> Option<String> {
    Some(
        join_explicit_new_line(fragments(elements), "")
            .trim_end()
            .to_owned(),
    )
}

fn join_module_trace_item(elements: &[Element], _: &PrintContext<'_>) -> Option<String> {
    Some(format!(" @ {}", join_one_line(elements)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(element: &str, content: Option<&str>) -> Element {
        Element {
            element: element.to_owned(),
            content: content.map(str::to_owned),
        }
    }

    fn lines(fragments: &[Option<&'static str>]) -> Vec<Option<Cow<'static, str>>> {
        fragments
            .iter()
            .map(|fragment| fragment.map(Cow::Borrowed))
            .collect()
    }

    #[test]
    fn explicit_new_lines_break_and_indent() {
        let joined = join_explicit_new_line(
            lines(&[Some("a"), Some("b"), Some("\nnested\nblock\n"), Some("c")]),
            "  ",
        );
        assert_eq!(joined, "a b\n  nested\n  block\n  c");
    }

    #[test]
    fn explicit_new_lines_skip_empty_fragments() {
        let joined = join_explicit_new_line(lines(&[None, Some(""), Some("x"), None]), "  ");
        assert_eq!(joined, "x");
    }

    #[test]
    fn brackets_group_after_separator() {
        let elements = [
            element("total", Some("10 ms")),
            element("separator!", None),
            element("resolving", Some("resolving: 1 ms")),
            element("building", Some("building: 2 ms")),
        ];
        assert_eq!(
            join_in_brackets(&elements),
            "10 ms (resolving: 1 ms, building: 2 ms)"
        );
    }

    #[test]
    fn brackets_without_leading_content() {
        let elements = [
            element("separator!", None),
            element("resolving", Some("resolving: 1 ms")),
        ];
        assert_eq!(join_in_brackets(&elements), "(resolving: 1 ms)");
    }

    #[test]
    fn items_joiners_respect_empty_lists() {
        assert_eq!(ItemsJoin::CommaBrackets.join(&[]), None);
        assert_eq!(
            ItemsJoin::CommaBracketsWithName("name").join(&[Some("main".to_owned()), None]),
            Some("(name: main)".to_owned())
        );
        assert_eq!(
            ItemsJoin::Arrows.join(&[Some("[1]".to_owned()), Some("[2]".to_owned())]),
            Some("[1] -> [2] ->".to_owned())
        );
        assert_eq!(ItemsJoin::OneLine.join(&[None]), Some(String::new()));
    }
}

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::colors::{ColorName, Colors};

struct HighlightRule {
    pattern: Regex,
    color: ColorName,
}

fn rule(pattern: &str, color: ColorName) -> HighlightRule {
    HighlightRule {
        pattern: Regex::new(pattern).expect("highlight pattern is valid"),
        color,
    }
}

// Applied in order; the first capture group of each match is colored.
static HIGHLIGHT_RULES: Lazy<Vec<HighlightRule>> = Lazy::new(|| {
    vec![
        rule(r"(Did you mean .+)", ColorName::Green),
        rule(
            r"(Set 'mode' option to 'development' or 'production')",
            ColorName::Green,
        ),
        rule(r"(\(module has no exports\))", ColorName::Red),
        rule(r"\(possible exports: (.+)\)", ColorName::Green),
        rule(r"(?:^|\n)(.* doesn't exist)", ColorName::Red),
        rule(r"('\w+' option has not been set)", ColorName::Red),
        rule(
            r"(Emitted value instead of an instance of Error)",
            ColorName::Yellow,
        ),
        rule(r"(?i)(Used? .+ instead)", ColorName::Yellow),
        rule(r"\b(deprecated|must|required)\b", ColorName::Yellow),
        rule(r"(?i)\b(BREAKING CHANGE)\b", ColorName::Red),
        rule(
            r"(?i)\b(error|failed|unexpected|invalid|not found|not supported|not available|not possible|not implemented|doesn't support|conflict|conflicting|not existing|duplicate)\b",
            ColorName::Red,
        ),
    ]
});

/// Highlights well-known phrases of an error message.
///
/// Messages that already carry escape sequences are returned untouched.
#[must_use]
pub fn format_error(message: &str, colors: &Colors) -> String {
    if message.contains("\u{1b}[") {
        return message.to_owned();
    }
    let mut highlighted = message.to_owned();
    for HighlightRule { pattern, color } in HIGHLIGHT_RULES.iter() {
        highlighted = pattern
            .replace_all(&highlighted, |caps: &Captures<'_>| {
                let whole = &caps[0];
                match caps.get(1) {
                    Some(content) => {
                        whole.replacen(content.as_str(), &colors.paint(*color, content.as_str()), 1)
                    }
                    None => whole.to_owned(),
                }
            })
            .into_owned();
    }
    highlighted
}

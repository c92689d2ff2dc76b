use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::trace;

use crate::options::ColorsOption;

const CLOSE: &str = "\u{1b}[39m\u{1b}[22m";

static RESET_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new("((\u{1b}\\[39m|\u{1b}\\[22m|\u{1b}\\[0m)+)").expect("reset pattern is valid")
});

/// Named colors available to field printers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorName {
    Bold,
    Yellow,
    Red,
    Green,
    Cyan,
    Magenta,
}

impl ColorName {
    pub const ALL: [ColorName; 6] = [
        ColorName::Bold,
        ColorName::Yellow,
        ColorName::Red,
        ColorName::Green,
        ColorName::Cyan,
        ColorName::Magenta,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ColorName::Bold => "bold",
            ColorName::Yellow => "yellow",
            ColorName::Red => "red",
            ColorName::Green => "green",
            ColorName::Cyan => "cyan",
            ColorName::Magenta => "magenta",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|color| color.as_str() == name)
    }

    /// ANSI start sequence used when colors are enabled without overrides.
    #[must_use]
    pub fn default_start(self) -> &'static str {
        match self {
            ColorName::Bold => "\u{1b}[1m",
            ColorName::Yellow => "\u{1b}[1m\u{1b}[33m",
            ColorName::Red => "\u{1b}[1m\u{1b}[31m",
            ColorName::Green => "\u{1b}[1m\u{1b}[32m",
            ColorName::Cyan => "\u{1b}[1m\u{1b}[36m",
            ColorName::Magenta => "\u{1b}[1m\u{1b}[35m",
        }
    }

    fn slot(self) -> usize {
        match self {
            ColorName::Bold => 0,
            ColorName::Yellow => 1,
            ColorName::Red => 2,
            ColorName::Green => 3,
            ColorName::Cyan => 4,
            ColorName::Magenta => 5,
        }
    }
}

/// Color palette resolved for one render pass.
///
/// A color without a start sequence is the identity function.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Colors {
    starts: [Option<String>; 6],
}

impl Colors {
    /// Palette that leaves every string untouched.
    #[must_use]
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Palette using the built-in ANSI sequences for every color.
    #[must_use]
    pub fn enabled() -> Self {
        let mut colors = Self::default();
        for color in ColorName::ALL {
            colors.starts[color.slot()] = Some(color.default_start().to_owned());
        }
        colors
    }

    #[must_use]
    pub fn from_option(option: &ColorsOption) -> Self {
        match option {
            ColorsOption::Enabled(false) => Self::disabled(),
            ColorsOption::Enabled(true) => Self::enabled(),
            ColorsOption::Custom(overrides) => {
                let mut colors = Self::enabled();
                for (name, start) in overrides {
                    match ColorName::from_name(name) {
                        Some(color) => colors.starts[color.slot()] = Some(start.clone()),
                        None => trace!(color = %name, "ignoring unknown color override"),
                    }
                }
                colors
            }
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.starts.iter().any(Option::is_some)
    }

    #[must_use]
    pub fn start(&self, color: ColorName) -> Option<&str> {
        self.starts[color.slot()].as_deref()
    }

    /// Wraps `text` in `color`, re-opening the color after every embedded
    /// reset so nested spans do not end the outer one early.
    #[must_use]
    pub fn paint(&self, color: ColorName, text: &str) -> String {
        let Some(start) = self.start(color) else {
            return text.to_owned();
        };
        let reopened = RESET_RUN.replace_all(text, |caps: &Captures<'_>| {
            format!("{}{}", &caps[1], start)
        });
        let mut painted = String::with_capacity(start.len() + reopened.len() + CLOSE.len());
        painted.push_str(start);
        painted.push_str(&reopened);
        painted.push_str(CLOSE);
        painted
    }

    #[must_use]
    pub fn bold(&self, text: &str) -> String {
        self.paint(ColorName::Bold, text)
    }

    #[must_use]
    pub fn yellow(&self, text: &str) -> String {
        self.paint(ColorName::Yellow, text)
    }

    #[must_use]
    pub fn red(&self, text: &str) -> String {
        self.paint(ColorName::Red, text)
    }

    #[must_use]
    pub fn green(&self, text: &str) -> String {
        self.paint(ColorName::Green, text)
    }

    #[must_use]
    pub fn cyan(&self, text: &str) -> String {
        self.paint(ColorName::Cyan, text)
    }

    #[must_use]
    pub fn magenta(&self, text: &str) -> String {
        self.paint(ColorName::Magenta, text)
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use super::*;

    #[test]
    fn disabled_palette_is_identity() {
        let colors = Colors::disabled();
        assert_eq!(colors.green("ok"), "ok");
        assert!(!colors.is_enabled());
    }

    #[test]
    fn enabled_palette_wraps_and_closes() {
        let colors = Colors::enabled();
        assert_eq!(colors.bold("x"), "\u{1b}[1mx\u{1b}[39m\u{1b}[22m");
        assert_eq!(
            colors.green("ok"),
            "\u{1b}[1m\u{1b}[32mok\u{1b}[39m\u{1b}[22m"
        );
    }

    #[test]
    fn nested_spans_reopen_outer_color() {
        let colors = Colors::enabled();
        let inner = colors.green("in");
        let outer = colors.yellow(&format!("a {inner} b"));
        assert_eq!(
            outer,
            "\u{1b}[1m\u{1b}[33ma \u{1b}[1m\u{1b}[32min\u{1b}[39m\u{1b}[22m\u{1b}[1m\u{1b}[33m b\u{1b}[39m\u{1b}[22m"
        );
    }

    #[test]
    fn custom_overrides_replace_single_colors() {
        let mut overrides = IndexMap::new();
        overrides.insert("green".to_owned(), "<g>".to_owned());
        overrides.insert("sparkle".to_owned(), "<?>".to_owned());
        let colors = Colors::from_option(&ColorsOption::Custom(overrides));
        assert_eq!(colors.start(ColorName::Green), Some("<g>"));
        assert_eq!(colors.start(ColorName::Red), Some(ColorName::Red.default_start()));
    }
}

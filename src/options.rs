use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{PrinterError, PrinterResult};

/// Color switch of a render: on/off, or on with per-color ANSI start
/// sequences (`bold`, `yellow`, `red`, `green`, `cyan`, `magenta`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorsOption {
    Enabled(bool),
    Custom(#[serde(deserialize_with = "string_overrides")] IndexMap<String, String>),
}

/// Non-string override values keep the default start sequence.
fn string_overrides<'de, D>(deserializer: D) -> Result<IndexMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = IndexMap::<String, Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|(name, start)| match start {
            Value::String(start) => Some((name, start)),
            _ => None,
        })
        .collect())
}

impl Default for ColorsOption {
    fn default() -> Self {
        ColorsOption::Enabled(false)
    }
}

/// Options of one render call.
///
/// Serializable so tools can keep printer settings next to their stats
/// configuration instead of inventing an ad-hoc format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderOptions {
    #[serde(default)]
    pub colors: ColorsOption,
    /// Product name used in the summary line, e.g. `Rspack 1.0.0`.
    #[serde(default = "default_tool_name")]
    pub tool_name: String,
}

fn default_tool_name() -> String {
    "Rspack".to_owned()
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            colors: ColorsOption::default(),
            tool_name: default_tool_name(),
        }
    }
}

impl RenderOptions {
    #[must_use]
    pub fn with_colors(mut self, enabled: bool) -> Self {
        self.colors = ColorsOption::Enabled(enabled);
        self
    }

    #[must_use]
    pub fn with_color_overrides<I, K, V>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.colors = ColorsOption::Custom(
            overrides
                .into_iter()
                .map(|(name, start)| (name.into(), start.into()))
                .collect(),
        );
        self
    }

    #[must_use]
    pub fn with_tool_name(mut self, tool_name: impl Into<String>) -> Self {
        self.tool_name = tool_name.into();
        self
    }

    pub fn from_json_str(input: &str) -> PrinterResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            PrinterError::InvalidOptions(format!("failed to parse render options json: {e}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_plain_text() {
        let options = RenderOptions::from_json_str("{}").expect("empty options");
        assert_eq!(options, RenderOptions::default());
        assert_eq!(options.colors, ColorsOption::Enabled(false));
        assert_eq!(options.tool_name, "Rspack");
    }

    #[test]
    fn colors_accept_bool_or_map() {
        let enabled = RenderOptions::from_json_str(r#"{"colors": true}"#).expect("bool colors");
        assert_eq!(enabled.colors, ColorsOption::Enabled(true));

        let custom = RenderOptions::from_json_str(r#"{"colors": {"green": "\u001b[32m"}}"#)
            .expect("map colors");
        match custom.colors {
            ColorsOption::Custom(map) => assert_eq!(map["green"], "\u{1b}[32m"),
            other => panic!("unexpected colors option: {other:?}"),
        }
    }

    #[test]
    fn non_string_overrides_are_skipped() {
        let custom = RenderOptions::from_json_str(
            r#"{"colors": {"green": true, "red": "<r>", "cyan": null}}"#,
        )
        .expect("mixed color overrides");
        match custom.colors {
            ColorsOption::Custom(map) => {
                assert_eq!(map.len(), 1);
                assert_eq!(map["red"], "<r>");
            }
            other => panic!("unexpected colors option: {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_json() {
        let err = RenderOptions::from_json_str(r#"{"colors": 3}"#).expect_err("invalid colors");
        assert!(matches!(err, PrinterError::InvalidOptions(_)));
    }
}

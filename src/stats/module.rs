use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::StatsId;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<StatsId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<IndexMap<String, f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunks: Option<Vec<StatsId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cacheable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orphan: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optional: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependent: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub built: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_generated: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_time_executed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cached: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warnings: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provided_exports: Option<Vec<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_used_exports"
    )]
    pub used_exports: Option<UsedExports>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimization_bailout: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasons: Option<Vec<ModuleReason>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filtered_reasons: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer_path: Option<Vec<ModuleIssuer>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<ModuleProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modules: Option<Vec<Module>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filtered_modules: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Module>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filtered_children: Option<u64>,
}

impl Module {
    #[must_use]
    pub fn new(id: impl Into<StatsId>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// Export usage of a module: everything (`true`), nothing (`false`),
/// unknown (`null`) or the listed names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsedExports {
    All,
    Unused,
    Unknown,
    Names(Vec<String>),
}

impl Serialize for UsedExports {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            UsedExports::All => serializer.serialize_bool(true),
            UsedExports::Unused => serializer.serialize_bool(false),
            UsedExports::Unknown => serializer.serialize_unit(),
            UsedExports::Names(names) => names.serialize(serializer),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawUsedExports {
    Flag(bool),
    Names(Vec<String>),
}

// A present `null` means "unknown"; only a missing field maps to `None`.
fn deserialize_used_exports<'de, D>(deserializer: D) -> Result<Option<UsedExports>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawUsedExports>::deserialize(deserializer)?;
    Ok(Some(match raw {
        None => UsedExports::Unknown,
        Some(RawUsedExports::Flag(true)) => UsedExports::All,
        Some(RawUsedExports::Flag(false)) => UsedExports::Unused,
        Some(RawUsedExports::Names(names)) => UsedExports::Names(names),
    }))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleReason {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_request: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_id: Option<StatsId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_module: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ModuleReason>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filtered_children: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleIssuer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<StatsId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<ModuleProfile>,
}

/// Per-phase timings of a module build, in milliseconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolving: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restoring: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storing: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_resolving: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_integration: Option<f64>,
}

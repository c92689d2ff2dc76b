use serde::{Deserialize, Serialize};

use super::StatsId;

/// An error or warning of a compilation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compiler_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk_id: Option<StatsId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk_entry: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk_initial: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_id: Option<StatsId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_trace: Option<Vec<ModuleTraceItem>>,
}

impl StatsError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }
}

/// One hop of the import chain that led to a diagnostic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleTraceItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_id: Option<StatsId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_id: Option<StatsId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<ModuleTraceDependency>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleTraceDependency {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<String>,
}

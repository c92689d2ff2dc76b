use serde::{Deserialize, Serialize};

use super::StatsId;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub name: String,
    pub size: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emitted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compared_for_emit: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cached: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<AssetInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunks: Option<Vec<StatsId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auxiliary_chunks: Option<Vec<StatsId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk_names: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auxiliary_chunk_names: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk_id_hints: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auxiliary_chunk_id_hints: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related: Option<Vec<Asset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filtered_related: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Asset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filtered_children: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_over_size_limit: Option<bool>,
}

impl Asset {
    #[must_use]
    pub fn new(name: impl Into<String>, size: f64) -> Self {
        Self {
            name: name.into(),
            size,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn emitted(mut self) -> Self {
        self.emitted = Some(true);
        self
    }
}

/// `true` for "from source file", or the originating file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SourceFilename {
    Flag(bool),
    Path(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub immutable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_filename: Option<SourceFilename>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copied: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub javascript_module: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub development: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hot_module_replacement: Option<bool>,
}

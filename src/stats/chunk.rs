use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{Module, StatsId};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chunk {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<StatsId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub names: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_hints: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<IndexMap<String, f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parents: Option<Vec<StatsId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub siblings: Option<Vec<StatsId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<StatsId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children_by_order: Option<IndexMap<String, Vec<StatsId>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rendered: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recorded: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origins: Option<Vec<ChunkOrigin>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modules: Option<Vec<Module>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filtered_modules: Option<u64>,
}

impl Chunk {
    #[must_use]
    pub fn new(id: impl Into<StatsId>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }
}

/// Why a chunk exists: the request and the module location that created it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkOrigin {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_id: Option<StatsId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<String>,
}

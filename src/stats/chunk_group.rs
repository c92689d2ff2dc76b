use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::StatsId;

/// An entrypoint or named chunk group. Whether it prints as "Entrypoint" or
/// "Chunk Group" depends on where it appears in the compilation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunks: Option<Vec<StatsId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets: Option<Vec<ChunkGroupAsset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filtered_assets: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auxiliary_assets: Option<Vec<ChunkGroupAsset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filtered_auxiliary_assets: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auxiliary_assets_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<IndexMap<String, Vec<ChunkGroupChild>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_over_size_limit: Option<bool>,
}

impl ChunkGroup {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkGroupAsset {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
}

impl ChunkGroupAsset {
    #[must_use]
    pub fn new(name: impl Into<String>, size: f64) -> Self {
        Self {
            name: name.into(),
            size: Some(size),
        }
    }
}

/// A chunk group reachable from another one (preload, prefetch, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkGroupChild {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets: Option<Vec<ChunkGroupAsset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunks: Option<Vec<StatsId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

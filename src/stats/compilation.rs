use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{PrinterError, PrinterResult};

use super::{Asset, Chunk, ChunkGroup, LoggingGroup, Module, StatsError};

/// Top-level statistics of one compilation (or a child compilation).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Compilation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    /// Webpack-compatible version string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Version shown in the summary line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rspack_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub built_at: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets_by_chunk_name: Option<IndexMap<String, Vec<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets: Option<Vec<Asset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filtered_assets: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entrypoints: Option<IndexMap<String, ChunkGroup>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub named_chunk_groups: Option<IndexMap<String, ChunkGroup>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunks: Option<Vec<Chunk>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modules: Option<Vec<Module>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filtered_modules: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Compilation>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logging: Option<IndexMap<String, LoggingGroup>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<StatsError>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warnings_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filtered_warning_details_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<StatsError>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filtered_error_details_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub need_additional_pass: Option<bool>,
}

impl Compilation {
    pub fn from_json_str(input: &str) -> PrinterResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            PrinterError::InvalidStats(format!("failed to parse stats json: {e}"))
        })
    }

    /// Dynamic tree consumed by the printer. Absent fields are omitted, so
    /// they never reach a handler.
    pub fn to_value(&self) -> PrinterResult<Value> {
        serde_json::to_value(self).map_err(|e| {
            PrinterError::InvalidStats(format!("failed to serialize stats: {e}"))
        })
    }

    /// Sets `errors`/`warnings` together with matching counts.
    #[must_use]
    pub fn with_diagnostics(mut self, errors: Vec<StatsError>, warnings: Vec<StatsError>) -> Self {
        self.errors_count = Some(errors.len() as u64);
        self.warnings_count = Some(warnings.len() as u64);
        self.errors = Some(errors);
        self.warnings = Some(warnings);
        self
    }
}

//! Typed model of the statistics tree.
//!
//! Field names follow the bundler's stats JSON (camelCase). Optional data is
//! skipped on serialization, so a tree produced by
//! [`Compilation::to_value`] only carries what the producer decided to
//! include.

mod asset;
mod chunk;
mod chunk_group;
mod compilation;
mod diagnostic;
mod id;
mod logging;
mod module;

pub use asset::{Asset, AssetInfo, SourceFilename};
pub use chunk::{Chunk, ChunkOrigin};
pub use chunk_group::{ChunkGroup, ChunkGroupAsset, ChunkGroupChild};
pub use compilation::Compilation;
pub use diagnostic::{ModuleTraceDependency, ModuleTraceItem, StatsError};
pub use id::StatsId;
pub use logging::{LogType, LoggingEntry, LoggingGroup};
pub use module::{Module, ModuleIssuer, ModuleProfile, ModuleReason, UsedExports};

//! stats-printer: hook-driven rendering of bundler compilation statistics.
//!
//! A [`StatsPrinter`] walks a statistics tree (JSON-shaped, see [`stats`])
//! and asks its [`HookRegistry`] how to print every position it visits.
//! Positions are addressed by selector keys such as `module.name` or
//! `compilation.assets[]`. [`rules`] installs the handlers that reproduce
//! the canonical text report, and callers can tap additional handlers on
//! any key to customize it.

pub mod error;
pub mod format;
pub mod hooks;
pub mod options;
pub mod printer;
pub mod rules;
pub mod selector;
pub mod stats;
pub mod telemetry;

pub use error::{PrinterError, PrinterResult};
pub use hooks::{HookCategory, HookRegistry};
pub use options::{ColorsOption, RenderOptions};
pub use printer::{Element, PrintContext, StatsPrinter, StatsPrinterPlugin};
pub use selector::SelectorKey;
pub use stats::Compilation;

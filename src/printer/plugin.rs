use tracing::debug;

use crate::error::{PrinterError, PrinterResult};
use crate::hooks::HookRegistry;

use super::StatsPrinter;

/// A named bundle of handlers applied to a printer in one step.
pub trait StatsPrinterPlugin {
    fn id(&self) -> &str;
    fn apply(&self, hooks: &mut HookRegistry) -> PrinterResult<()>;
}

impl StatsPrinter {
    /// Applies `plugin` to this printer's hooks. Ids must be non-empty and
    /// unique per printer.
    pub fn register_plugin(&mut self, plugin: &dyn StatsPrinterPlugin) -> PrinterResult<()> {
        let plugin_id = plugin.id();
        if plugin_id.is_empty() {
            return Err(PrinterError::InvalidPlugin(
                "plugin id must not be empty".to_owned(),
            ));
        }
        if self.has_plugin(plugin_id) {
            return Err(PrinterError::InvalidPlugin(format!(
                "plugin with id `{plugin_id}` is already registered"
            )));
        }
        plugin.apply(&mut self.hooks)?;
        self.plugins.push(plugin_id.to_owned());
        debug!(plugin = plugin_id, "registered printer plugin");
        Ok(())
    }

    #[must_use]
    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.plugins.iter().any(|id| id == plugin_id)
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }
}

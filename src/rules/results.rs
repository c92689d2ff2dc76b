use crate::error::PrinterResult;
use crate::format::indent;
use crate::hooks::HookRegistry;

pub(super) fn install(hooks: &mut HookRegistry) -> PrinterResult<()> {
    // Nested modules of a concatenated module hang off a `| ` gutter.
    hooks.tap_result("module.modules", |output, _| indent(&output, "| ", false))?;
    Ok(())
}

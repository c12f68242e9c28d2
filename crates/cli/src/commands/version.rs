use anyhow::Result;
use spruce_loom_core::{ToolRuntime, constants::TOOL_NAME};

pub fn version_command() -> Result<()> {
    let runtime = ToolRuntime::new();
    println!("{TOOL_NAME} {}", runtime.resolve_version());
    Ok(())
}

use anyhow::Result;
use spruce_loom_core::ToolRuntime;

use crate::cli::ProjectArgs;
use crate::commands::configure_project;
use crate::display::render_summary;

pub fn configure_command(args: &ProjectArgs, json: bool) -> Result<()> {
    let runtime = ToolRuntime::new();
    let context = configure_project(&runtime, args, json)?;

    if json {
        println!("{}", context.snapshot().to_json()?);
    } else {
        println!();
        print!("{}", render_summary(&context));
    }
    Ok(())
}

use anyhow::Result;
use spruce_loom_core::ToolRuntime;

use crate::cli::ProjectArgs;
use crate::commands::configure_project;
use crate::display::render_task_groups;

pub fn tasks_command(args: &ProjectArgs, all: bool) -> Result<()> {
    let runtime = ToolRuntime::new();
    let context = configure_project(&runtime, args, false)?;

    print!("{}", render_task_groups(&context.tasks().grouped(all)));
    Ok(())
}

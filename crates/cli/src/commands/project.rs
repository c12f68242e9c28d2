use anyhow::{Context, Result};
use spruce_loom_core::{
    BuildContext, ConsoleSink, LogSink, LoomPlugin, ProjectSettings, PropertyBag, StderrSink,
    ToolRuntime, constants::PROPERTIES_FILE,
};
use std::{
    env,
    path::{Path, PathBuf},
    sync::Arc,
};
use tracing::debug;

use crate::cli::ProjectArgs;

fn project_dir(args: &ProjectArgs) -> Result<PathBuf> {
    let dir = match &args.project_dir {
        Some(dir) => dir.clone(),
        None => env::current_dir().context("Failed to get current directory")?,
    };
    dir.canonicalize()
        .with_context(|| format!("Project directory {} does not exist", dir.display()))
}

/// Properties from `spruce.properties`, then `-P` overrides
fn load_properties(dir: &Path, overrides: &[String]) -> Result<PropertyBag> {
    let path = dir.join(PROPERTIES_FILE);
    let mut properties = if path.exists() {
        debug!("Loading properties from {}", path.display());
        PropertyBag::load_from_file(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    } else {
        PropertyBag::new()
    };

    let overrides = overrides
        .iter()
        .map(|assignment| {
            PropertyBag::parse_assignment(assignment)
                .with_context(|| format!("Invalid property '{assignment}'"))
        })
        .collect::<Result<PropertyBag>>()?;
    properties.merge(overrides);
    Ok(properties)
}

/// Build an unconfigured context for the project `args` point at.
///
/// With `quiet` the lifecycle log goes to stderr instead of stdout.
pub fn load_project(args: &ProjectArgs, quiet: bool) -> Result<BuildContext> {
    let dir = project_dir(args)?;
    let settings = ProjectSettings::load_for_project(&dir)
        .with_context(|| format!("Failed to load settings for {}", dir.display()))?;
    let properties = load_properties(&dir, &args.properties)?;

    let context = BuildContext::from_settings(dir, settings).with_properties(properties);
    let logger: Arc<dyn LogSink> = if quiet {
        Arc::new(StderrSink)
    } else {
        Arc::new(ConsoleSink)
    };
    Ok(context.with_logger(logger))
}

/// Load the project and run the plugin over it
pub fn configure_project(
    runtime: &ToolRuntime,
    args: &ProjectArgs,
    quiet: bool,
) -> Result<BuildContext> {
    let mut context = load_project(args, quiet)?;
    let plugin = LoomPlugin::new(runtime)?;

    let result = plugin.apply(&mut context);
    plugin.finish();
    result.with_context(|| format!("Failed to configure project '{}'", context.name()))?;
    Ok(context)
}

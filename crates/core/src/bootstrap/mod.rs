//! Plugin entry point
//!
//! [`LoomPlugin`] is what the host invokes once per build target. Every
//! plugin-aware target gets the default repositories; project targets then
//! get the lifecycle banner, library diagnostics and the configuration
//! sequence.

pub mod diagnostics;
pub mod repositories;

pub use diagnostics::{LibraryVersion, collect_library_versions, log_library_versions};
pub use repositories::RepositoryPlugin;

use std::path::{Path, PathBuf};
use tracing::info;

use crate::{
    config::PropertyBag,
    constants::{PLUGIN_ID, TOOL_NAME},
    context::{BuildContext, RepositoryHandler},
    error::{Error, Result},
    runtime::ToolRuntime,
    sequencer::ConfigurationSequencer,
};

/// A host target the plugin can be applied to
pub trait PluginAware {
    fn repositories_mut(&mut self) -> &mut RepositoryHandler;

    /// The project behind this target, if it is one
    fn as_project_mut(&mut self) -> Option<&mut BuildContext> {
        None
    }
}

impl PluginAware for BuildContext {
    fn repositories_mut(&mut self) -> &mut RepositoryHandler {
        BuildContext::repositories_mut(self)
    }

    fn as_project_mut(&mut self) -> Option<&mut BuildContext> {
        Some(self)
    }
}

/// The settings phase of a host build: repositories only, no project model
#[derive(Debug, Clone)]
pub struct SettingsContext {
    name: String,
    root_dir: PathBuf,
    properties: PropertyBag,
    repositories: RepositoryHandler,
}

impl SettingsContext {
    pub fn new(name: impl Into<String>, root_dir: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            root_dir: root_dir.into(),
            properties: PropertyBag::new(),
            repositories: RepositoryHandler::new(),
        }
    }

    pub fn with_properties(mut self, properties: PropertyBag) -> Self {
        self.properties = properties;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    pub fn properties(&self) -> &PropertyBag {
        &self.properties
    }

    pub fn repositories(&self) -> &RepositoryHandler {
        &self.repositories
    }
}

impl PluginAware for SettingsContext {
    fn repositories_mut(&mut self) -> &mut RepositoryHandler {
        &mut self.repositories
    }
}

/// Bootstrap coordinator, borrowed against one process-wide [`ToolRuntime`]
pub struct LoomPlugin<'rt> {
    runtime: &'rt ToolRuntime,
    sequencer: ConfigurationSequencer,
}

impl<'rt> LoomPlugin<'rt> {
    /// Coordinator running the standard nine-step sequence
    pub fn new(runtime: &'rt ToolRuntime) -> Result<Self> {
        Ok(Self::with_sequencer(runtime, ConfigurationSequencer::standard()?))
    }

    pub fn with_sequencer(runtime: &'rt ToolRuntime, sequencer: ConfigurationSequencer) -> Self {
        Self { runtime, sequencer }
    }

    pub fn runtime(&self) -> &'rt ToolRuntime {
        self.runtime
    }

    /// Apply to any plugin-aware target
    pub fn apply<T: PluginAware + ?Sized>(&self, target: &mut T) -> Result<()> {
        RepositoryPlugin.apply(target);
        match target.as_project_mut() {
            Some(project) => self.apply_project(project),
            None => Ok(()),
        }
    }

    /// Bind the runtime to `context`, emit the banner, then run the sequence.
    ///
    /// The context stays bound afterwards, failed or not, until
    /// [`LoomPlugin::finish`].
    pub fn apply_project(&self, context: &mut BuildContext) -> Result<()> {
        if context.is_configured() {
            return Err(Error::AlreadyApplied(context.name().to_string()));
        }
        self.runtime.bind_context(context);

        let version = self.runtime.resolve_version();
        self.runtime.log(&format!("{TOOL_NAME}: {version}"));
        info!(context = context.name(), plugin = PLUGIN_ID, %version, "Applying {TOOL_NAME}");
        log_library_versions(self.runtime, context);

        self.sequencer.apply(context)
    }

    /// Detach the runtime at build end
    pub fn finish(&self) {
        self.runtime.unbind_context();
    }
}

impl std::fmt::Debug for LoomPlugin<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoomPlugin")
            .field("sequencer", &self.sequencer)
            .finish_non_exhaustive()
    }
}

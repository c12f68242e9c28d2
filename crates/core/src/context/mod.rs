//! In-process model of one host build invocation
//!
//! A [`BuildContext`] carries everything the host build system hands to the
//! bootstrap: the property bag, the logger sink and the plugin catalog. It
//! also holds the state configuration steps write: applied plugins,
//! extensions, configurations, tasks, publications and IDE metadata.

pub mod compile;
pub mod configurations;
pub mod extensions;
pub mod ide;
pub mod plugins;
pub mod publications;
pub mod repositories;
pub mod snapshot;
pub mod tasks;

pub use compile::CompileSettings;
pub use configurations::{Configuration, ConfigurationContainer};
pub use extensions::ExtensionContainer;
pub use ide::{EclipseClasspath, IdeModel, IdeRunConfiguration, IdeaModule};
pub use plugins::{PluginCatalog, PluginSpec};
pub use publications::{PomDependencyScope, PomScope, Publication, PublicationContainer};
pub use repositories::{Repository, RepositoryHandler};
pub use snapshot::ContextSnapshot;
pub use tasks::{Task, TaskContainer};

use std::any::Any;
use std::cell::OnceCell;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

use crate::{
    config::{ProjectSettings, PropertyBag},
    error::{Error, Result},
    runtime::{LogSink, TracingSink},
    steps::StepId,
};

/// How far the configuration sequence got on a context
#[derive(Debug, Clone, Default)]
struct SequenceProgress {
    started: bool,
    completed: Vec<StepId>,
    failed: Option<StepId>,
}

pub struct BuildContext {
    name: String,
    project_dir: PathBuf,
    user_home: PathBuf,
    settings: ProjectSettings,
    properties: PropertyBag,
    logger: Arc<dyn LogSink>,
    catalog: PluginCatalog,
    plugins: Vec<String>,
    extensions: ExtensionContainer,
    configurations: ConfigurationContainer,
    tasks: TaskContainer,
    publications: PublicationContainer,
    ide: IdeModel,
    repositories: RepositoryHandler,
    compile: Option<CompileSettings>,
    debug: OnceCell<bool>,
    progress: SequenceProgress,
}

impl BuildContext {
    pub fn new(name: impl Into<String>, project_dir: impl Into<PathBuf>) -> Self {
        let name = name.into();
        let project_dir = project_dir.into();
        Self {
            user_home: default_user_home(&project_dir),
            logger: Arc::new(TracingSink::new(name.clone())),
            name,
            project_dir,
            settings: ProjectSettings::default(),
            properties: PropertyBag::new(),
            catalog: PluginCatalog::standard(),
            plugins: Vec::new(),
            extensions: ExtensionContainer::new(),
            configurations: ConfigurationContainer::new(),
            tasks: TaskContainer::new(),
            publications: PublicationContainer::default(),
            ide: IdeModel::default(),
            repositories: RepositoryHandler::new(),
            compile: None,
            debug: OnceCell::new(),
            progress: SequenceProgress::default(),
        }
    }

    /// Context named after `settings.name`, or the project directory
    pub fn from_settings(project_dir: impl Into<PathBuf>, settings: ProjectSettings) -> Self {
        let project_dir = project_dir.into();
        let name = settings.name.clone().unwrap_or_else(|| {
            project_dir
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| "project".to_string())
        });
        Self::new(name, project_dir).with_settings(settings)
    }

    /// Use `settings`; an explicit `user_home` in them replaces the default
    pub fn with_settings(mut self, settings: ProjectSettings) -> Self {
        if let Some(user_home) = &settings.user_home {
            self.user_home = self.project_dir.join(user_home);
        }
        self.settings = settings;
        self
    }

    pub fn with_properties(mut self, properties: PropertyBag) -> Self {
        self.properties = properties;
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key, value);
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn LogSink>) -> Self {
        self.logger = logger;
        self
    }

    pub fn with_catalog(mut self, catalog: PluginCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_user_home(mut self, user_home: impl Into<PathBuf>) -> Self {
        self.user_home = user_home.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    pub fn user_home(&self) -> &Path {
        &self.user_home
    }

    pub fn settings(&self) -> &ProjectSettings {
        &self.settings
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key)
    }

    pub fn properties(&self) -> &PropertyBag {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut PropertyBag {
        &mut self.properties
    }

    pub fn logger(&self) -> Arc<dyn LogSink> {
        Arc::clone(&self.logger)
    }

    pub(crate) fn debug_cell(&self) -> &OnceCell<bool> {
        &self.debug
    }

    // Plugins

    pub fn plugins(&self) -> &[String] {
        &self.plugins
    }

    pub fn has_plugin(&self, id: &str) -> bool {
        self.plugins.iter().any(|applied| applied == id)
    }

    /// Apply a host plugin and the plugins it implies. Applying twice is a no-op.
    pub fn apply_plugin(&mut self, id: &str) -> Result<()> {
        plugins::validate_plugin_id(id)?;
        if self.has_plugin(id) {
            return Ok(());
        }
        let spec = self
            .catalog
            .get(id)
            .cloned()
            .ok_or_else(|| Error::UnknownPlugin(id.to_string()))?;
        if let Some(reason) = spec.unavailable {
            return Err(Error::PluginApplication {
                plugin: id.to_string(),
                reason,
            });
        }

        debug!(context = %self.name, plugin = id, "Applying plugin");
        // Recorded before the implied plugins so a cyclic catalog terminates
        self.plugins.push(id.to_string());
        for implied in &spec.implies {
            self.apply_plugin(implied)?;
        }
        plugins::apply_conventions(self, id)
    }

    // Extensions

    pub fn extensions(&self) -> &ExtensionContainer {
        &self.extensions
    }

    pub fn register_extension<T: Any>(&mut self, name: &str, value: T) -> Result<()> {
        debug!(context = %self.name, extension = name, "Registering extension");
        self.extensions.register(name, value)
    }

    pub fn extension<T: Any>(&self) -> Option<&T> {
        self.extensions.get::<T>()
    }

    pub fn extension_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.extensions.get_mut::<T>()
    }

    pub fn require_extension<T: Any>(&self, name: &'static str) -> Result<&T> {
        self.extension::<T>().ok_or(Error::MissingExtension(name))
    }

    pub fn require_extension_mut<T: Any>(&mut self, name: &'static str) -> Result<&mut T> {
        self.extension_mut::<T>().ok_or(Error::MissingExtension(name))
    }

    // Model

    pub fn configurations(&self) -> &ConfigurationContainer {
        &self.configurations
    }

    pub fn configurations_mut(&mut self) -> &mut ConfigurationContainer {
        &mut self.configurations
    }

    pub fn tasks(&self) -> &TaskContainer {
        &self.tasks
    }

    pub fn tasks_mut(&mut self) -> &mut TaskContainer {
        &mut self.tasks
    }

    pub fn publications(&self) -> &PublicationContainer {
        &self.publications
    }

    pub fn publications_mut(&mut self) -> &mut PublicationContainer {
        &mut self.publications
    }

    pub fn ide(&self) -> &IdeModel {
        &self.ide
    }

    pub fn ide_mut(&mut self) -> &mut IdeModel {
        &mut self.ide
    }

    pub fn repositories(&self) -> &RepositoryHandler {
        &self.repositories
    }

    pub fn repositories_mut(&mut self) -> &mut RepositoryHandler {
        &mut self.repositories
    }

    pub fn compile(&self) -> Option<&CompileSettings> {
        self.compile.as_ref()
    }

    pub fn set_compile(&mut self, settings: CompileSettings) {
        self.compile = Some(settings);
    }

    pub fn snapshot(&self) -> ContextSnapshot {
        ContextSnapshot::capture(self)
    }

    // Sequence progress

    /// Whether the configuration sequence has been started on this context
    pub fn is_configured(&self) -> bool {
        self.progress.started
    }

    pub fn completed_steps(&self) -> &[StepId] {
        &self.progress.completed
    }

    pub fn failed_step(&self) -> Option<StepId> {
        self.progress.failed
    }

    pub(crate) fn mark_started(&mut self) {
        self.progress.started = true;
    }

    pub(crate) fn record_completed(&mut self, step: StepId) {
        self.progress.completed.push(step);
    }

    pub(crate) fn record_failure(&mut self, step: StepId) {
        self.progress.failed = Some(step);
    }
}

impl std::fmt::Debug for BuildContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuildContext")
            .field("name", &self.name)
            .field("project_dir", &self.project_dir)
            .field("plugins", &self.plugins)
            .field("extensions", &self.extensions)
            .field("progress", &self.progress)
            .finish_non_exhaustive()
    }
}

fn default_user_home(project_dir: &Path) -> PathBuf {
    std::env::var_os("SPRUCE_USER_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".spruce")))
        .unwrap_or_else(|| project_dir.join(".spruce"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{configurations as cfg, plugins as ids};

    fn context() -> BuildContext {
        BuildContext::new("example", "/work/example").with_user_home("/home/dev/.spruce")
    }

    #[test]
    fn test_apply_plugin_applies_implied_plugins() {
        let mut context = context();
        context.apply_plugin(ids::JAVA_LIBRARY).unwrap();

        assert_eq!(context.plugins(), &["java-library".to_string(), "java".to_string()]);
        assert!(context.configurations().contains(cfg::API));
        assert_eq!(
            context.configurations().resolution_order(cfg::COMPILE_CLASSPATH),
            vec!["compileClasspath", "compileOnly", "implementation", "api"]
        );
        assert!(context.tasks().contains("jar"));
    }

    #[test]
    fn test_apply_plugin_twice_is_noop() {
        let mut context = context();
        context.apply_plugin(ids::IDEA).unwrap();
        context.apply_plugin(ids::IDEA).unwrap();

        assert_eq!(context.plugins(), &["idea".to_string()]);
        assert!(context.ide().idea.is_some());
    }

    #[test]
    fn test_apply_unknown_plugin() {
        let mut context = context();
        assert!(matches!(
            context.apply_plugin("kotlin"),
            Err(Error::UnknownPlugin(id)) if id == "kotlin"
        ));
        assert!(matches!(
            context.apply_plugin("not a plugin"),
            Err(Error::InvalidPluginId(_))
        ));
        assert!(context.plugins().is_empty());
    }

    #[test]
    fn test_apply_unavailable_plugin() {
        let catalog =
            PluginCatalog::standard().mark_unavailable(ids::ECLIPSE, "no eclipse support");
        let mut context = context().with_catalog(catalog);

        let err = context.apply_plugin(ids::ECLIPSE).unwrap_err();
        assert!(matches!(err, Error::PluginApplication { ref plugin, .. } if plugin == "eclipse"));
        assert_eq!(
            err.to_string(),
            "Failed to apply plugin 'eclipse': no eclipse support"
        );
    }

    #[test]
    fn test_settings_user_home_is_relative_to_project() {
        let settings = ProjectSettings {
            user_home: Some(PathBuf::from(".home")),
            ..Default::default()
        };
        let context = BuildContext::new("example", "/work/example").with_settings(settings);

        assert_eq!(context.user_home(), Path::new("/work/example/.home"));
    }

    #[test]
    fn test_from_settings_names_context() {
        let named = ProjectSettings {
            name: Some("example-mod".to_string()),
            ..Default::default()
        };
        assert_eq!(BuildContext::from_settings("/work/dir", named).name(), "example-mod");
        assert_eq!(
            BuildContext::from_settings("/work/dir", ProjectSettings::default()).name(),
            "dir"
        );
    }

    #[test]
    fn test_require_extension() {
        let mut context = context();
        assert!(matches!(
            context.require_extension::<String>("text"),
            Err(Error::MissingExtension("text"))
        ));

        context.register_extension("text", String::from("value")).unwrap();
        assert_eq!(context.require_extension::<String>("text").unwrap(), "value");
        context.require_extension_mut::<String>("text").unwrap().push('!');
        assert_eq!(context.extension::<String>().unwrap(), "value!");
    }
}

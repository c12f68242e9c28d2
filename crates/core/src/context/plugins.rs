//! Host plugin catalog and the conventions each host plugin installs

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use super::{BuildContext, tasks::Task};
use crate::{
    constants::{configurations as cfg, groups, plugins, tasks as names},
    context::ide::{EclipseClasspath, IdeaModule},
    error::{Error, Result},
};

static PLUGIN_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$").expect("valid regex"));

pub fn validate_plugin_id(id: &str) -> Result<()> {
    if PLUGIN_ID.is_match(id) {
        Ok(())
    } else {
        Err(Error::InvalidPluginId(id.to_string()))
    }
}

/// How the host applies one plugin
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluginSpec {
    /// Applied first
    pub implies: Vec<String>,
    /// Set when the host knows the plugin but cannot apply it
    pub unavailable: Option<String>,
}

impl PluginSpec {
    pub fn implying(ids: &[&str]) -> Self {
        Self {
            implies: ids.iter().map(|id| id.to_string()).collect(),
            unavailable: None,
        }
    }
}

/// Plugins the host can apply, by id
#[derive(Debug, Clone)]
pub struct PluginCatalog {
    plugins: BTreeMap<String, PluginSpec>,
}

impl PluginCatalog {
    pub fn empty() -> Self {
        Self {
            plugins: BTreeMap::new(),
        }
    }

    /// The host plugins a JVM build normally ships with
    pub fn standard() -> Self {
        let mut catalog = Self::empty();
        catalog.register(plugins::JAVA, PluginSpec::default());
        catalog.register(plugins::JAVA_LIBRARY, PluginSpec::implying(&[plugins::JAVA]));
        catalog.register(plugins::ECLIPSE, PluginSpec::default());
        catalog.register(plugins::IDEA, PluginSpec::default());
        catalog.register(plugins::MAVEN_PUBLISH, PluginSpec::default());
        catalog
    }

    pub fn register(&mut self, id: impl Into<String>, spec: PluginSpec) {
        self.plugins.insert(id.into(), spec);
    }

    pub fn without(mut self, id: &str) -> Self {
        self.plugins.remove(id);
        self
    }

    pub fn mark_unavailable(mut self, id: &str, reason: impl Into<String>) -> Self {
        self.plugins.entry(id.to_string()).or_default().unavailable = Some(reason.into());
        self
    }

    pub fn get(&self, id: &str) -> Option<&PluginSpec> {
        self.plugins.get(id)
    }
}

impl Default for PluginCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

pub(super) fn apply_conventions(context: &mut BuildContext, id: &str) -> Result<()> {
    match id {
        plugins::JAVA => {
            let configurations = context.configurations_mut();
            for name in [cfg::IMPLEMENTATION, cfg::COMPILE_ONLY, cfg::RUNTIME_ONLY] {
                configurations.maybe_create(name);
            }
            configurations.maybe_create(cfg::COMPILE_CLASSPATH).can_be_resolved = true;
            configurations.maybe_create(cfg::RUNTIME_CLASSPATH).can_be_resolved = true;
            configurations.extend(cfg::COMPILE_CLASSPATH, cfg::COMPILE_ONLY)?;
            configurations.extend(cfg::COMPILE_CLASSPATH, cfg::IMPLEMENTATION)?;
            configurations.extend(cfg::RUNTIME_CLASSPATH, cfg::RUNTIME_ONLY)?;
            configurations.extend(cfg::RUNTIME_CLASSPATH, cfg::IMPLEMENTATION)?;

            let tasks = context.tasks_mut();
            tasks.register(
                Task::new(names::COMPILE_JAVA).description("Compiles main Java source."),
            )?;
            tasks.register(
                Task::new(names::JAR)
                    .group(groups::BUILD)
                    .description("Assembles a jar archive containing the main classes.")
                    .depends_on(names::COMPILE_JAVA),
            )?;
            tasks.register(
                Task::new(names::SOURCES_JAR)
                    .group(groups::BUILD)
                    .description("Assembles a jar archive containing the main sources."),
            )?;
            tasks.register(
                Task::new(names::BUILD)
                    .group(groups::BUILD)
                    .description("Assembles and tests this project.")
                    .depends_on(names::JAR),
            )?;
        }
        plugins::JAVA_LIBRARY => {
            let configurations = context.configurations_mut();
            configurations.maybe_create(cfg::API);
            configurations.extend(cfg::IMPLEMENTATION, cfg::API)?;
        }
        plugins::ECLIPSE => {
            context.ide_mut().eclipse = Some(EclipseClasspath::default());
            context.tasks_mut().register(
                Task::new(names::ECLIPSE)
                    .group(groups::IDE)
                    .description("Generates all Eclipse files."),
            )?;
        }
        plugins::IDEA => {
            context.ide_mut().idea = Some(IdeaModule::default());
            context.tasks_mut().register(
                Task::new(names::IDEA)
                    .group(groups::IDE)
                    .description("Generates IDEA project files (IML, IPR, IWS)"),
            )?;
        }
        plugins::MAVEN_PUBLISH => {
            context.tasks_mut().register(
                Task::new(names::PUBLISH)
                    .group("publishing")
                    .description("Publishes all publications produced by this project."),
            )?;
        }
        _ => {}
    }
    Ok(())
}

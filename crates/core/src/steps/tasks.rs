use super::{ConfigurationStep, Facet, StepId, capitalize};
use crate::{
    constants::{groups, plugins, tasks as names},
    context::{BuildContext, Task},
    error::Result,
    extension::{LoomExtension, RunEnvironment},
};

/// Register the tasks users invoke. Run tasks come from the extension's run configs.
pub fn register_tasks(context: &mut BuildContext) -> Result<()> {
    let loom = LoomExtension::get(context)?;
    let remap_archives = loom.remap_archives;
    let run_configs: Vec<(String, RunEnvironment)> = loom
        .run_configs
        .iter()
        .map(|(name, config)| (name.clone(), config.environment))
        .collect();
    let has_idea = context.has_plugin(plugins::IDEA);
    let has_eclipse = context.has_plugin(plugins::ECLIPSE);
    let has_publish = context.has_plugin(plugins::MAVEN_PUBLISH);

    let tasks = context.tasks_mut();
    tasks.register(
        Task::new(names::REMAP_JAR)
            .group(groups::FABRIC)
            .description("Remaps the built project jar to intermediary mappings.")
            .depends_on(names::JAR),
    )?;
    tasks.register(
        Task::new(names::REMAP_SOURCES_JAR)
            .group(groups::FABRIC)
            .description("Remaps the project sources jar to intermediary mappings.")
            .depends_on(names::SOURCES_JAR),
    )?;
    tasks.register(
        Task::new(names::DOWNLOAD_ASSETS)
            .group(groups::FABRIC)
            .description("Downloads client assets."),
    )?;
    tasks.register(
        Task::new(names::MIGRATE_MAPPINGS)
            .group(groups::FABRIC)
            .description("Migrates mappings to a new version."),
    )?;
    tasks.register(
        Task::new(names::VALIDATE_ACCESS_WIDENER)
            .group(groups::FABRIC)
            .description("Validates the access widener file."),
    )?;
    tasks.register(
        Task::new(names::CLEAN_LOOM_BINARIES)
            .group(groups::FABRIC)
            .description("Removes binary jars created by the plugin."),
    )?;
    tasks.register(
        Task::new(names::CLEAN_LOOM_MAPPINGS)
            .group(groups::FABRIC)
            .description("Removes mappings downloaded by the plugin."),
    )?;
    tasks.register(
        Task::new(names::CLEAN_LOOM)
            .group(groups::FABRIC)
            .description("Removes all caches created by the plugin.")
            .depends_on(names::CLEAN_LOOM_BINARIES)
            .depends_on(names::CLEAN_LOOM_MAPPINGS),
    )?;

    for (name, environment) in &run_configs {
        let side = match environment {
            RunEnvironment::Client => "client",
            RunEnvironment::Server => "server",
        };
        tasks.register(
            Task::new(format!("run{}", capitalize(name)))
                .group(groups::FABRIC)
                .description(format!("Starts a development version of the Minecraft {side}."))
                .depends_on(names::DOWNLOAD_ASSETS),
        )?;
    }

    if has_idea {
        tasks.register(
            Task::new(names::GEN_IDEA_WORKSPACE)
                .group(groups::IDE)
                .description("Generates an IntelliJ IDEA workspace from this project.")
                .depends_on(names::IDEA)
                .depends_on(names::DOWNLOAD_ASSETS),
        )?;
    }
    if has_eclipse {
        tasks.register(
            Task::new(names::GEN_ECLIPSE_RUNS)
                .group(groups::IDE)
                .description("Generates Eclipse run configurations for this project.")
                .depends_on(names::DOWNLOAD_ASSETS),
        )?;
    }
    tasks.register(
        Task::new(names::VSCODE)
            .group(groups::IDE)
            .description("Generates VSCode launch configurations.")
            .depends_on(names::DOWNLOAD_ASSETS),
    )?;

    if remap_archives {
        tasks.depend(names::BUILD, names::REMAP_JAR)?;
        if has_publish {
            tasks.depend(names::PUBLISH, names::REMAP_JAR)?;
            tasks.depend(names::PUBLISH, names::REMAP_SOURCES_JAR)?;
        }
    }
    Ok(())
}

pub struct RegisterTasks;

impl ConfigurationStep for RegisterTasks {
    fn id(&self) -> StepId {
        StepId::RegisterTasks
    }

    fn requires(&self) -> &'static [Facet] {
        &[
            Facet::JavaConventions,
            Facet::Extension,
            Facet::IdeMetadata,
            Facet::CompileFinalized,
            Facet::Publications,
        ]
    }

    fn provides(&self) -> &'static [Facet] {
        &[Facet::Tasks]
    }

    fn apply(&self, context: &mut BuildContext) -> Result<()> {
        register_tasks(context)
    }
}

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

use super::{ConfigurationStep, Facet, StepId};
use crate::{
    constants::{EXTENSION_NAME, configurations as cfg},
    context::{BuildContext, IdeRunConfiguration},
    error::{Error, Result},
    extension::{LoomExtension, RunConfigSettings},
};

static RUN_CONFIG_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$").expect("valid regex"));

const BASE_EXCLUDES: [&str; 3] = [".gradle", "build", "out"];

/// General IDE metadata shared by IDEA and Eclipse
pub fn setup(context: &mut BuildContext) -> Result<()> {
    let mut run_configs = LoomExtension::get(context)?.run_configs.clone();
    if let Some(name) = run_configs.keys().find(|name| !RUN_CONFIG_NAME.is_match(name)) {
        return Err(Error::step(
            StepId::IdeSetup,
            format!("invalid run configuration name '{name}'"),
        ));
    }
    context.configurations().require(cfg::COMPILE_CLASSPATH)?;
    context.configurations().require(cfg::RUNTIME_CLASSPATH)?;

    if run_configs.is_empty() {
        run_configs.insert("client".to_string(), RunConfigSettings::client());
        run_configs.insert("server".to_string(), RunConfigSettings::server());
        context
            .require_extension_mut::<LoomExtension>(EXTENSION_NAME)?
            .run_configs = run_configs.clone();
    }

    let mut excludes: BTreeSet<String> = BASE_EXCLUDES.iter().map(|s| s.to_string()).collect();
    excludes.extend(run_configs.values().map(|config| config.run_dir.clone()));

    let ide = context.ide_mut();
    if let Some(idea) = ide.idea.as_mut() {
        idea.excludes.extend(excludes.iter().cloned());
        idea.inherit_output_dirs = false;
    }
    if let Some(eclipse) = ide.eclipse.as_mut() {
        eclipse.excludes.extend(excludes.iter().cloned());
        eclipse.plus_configurations = vec![
            cfg::COMPILE_CLASSPATH.to_string(),
            cfg::RUNTIME_CLASSPATH.to_string(),
        ];
    }
    ide.run_configurations = run_configs
        .iter()
        .filter(|(_, config)| config.ide_config_generated)
        .map(|(name, config)| IdeRunConfiguration {
            name: name.clone(),
            environment: config.environment,
            main_class: config.main_class.clone(),
            run_dir: config.run_dir.clone(),
            vm_args: config.vm_args.clone(),
            program_args: config.program_args.clone(),
        })
        .collect();
    Ok(())
}

pub struct IdeSetup;

impl ConfigurationStep for IdeSetup {
    fn id(&self) -> StepId {
        StepId::IdeSetup
    }

    fn requires(&self) -> &'static [Facet] {
        &[Facet::IdePlugins, Facet::Extension, Facet::Configurations]
    }

    fn provides(&self) -> &'static [Facet] {
        &[Facet::IdeMetadata]
    }

    fn apply(&self, context: &mut BuildContext) -> Result<()> {
        setup(context)
    }
}

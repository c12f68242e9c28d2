//! Compile-time dependency wiring
//!
//! Split in two steps: [`SetupConfigurations`] creates the configurations
//! right after the extension exists, [`ConfigureCompile`] finalizes the
//! compile settings once IDE metadata has been written.

use tracing::debug;

use super::{ConfigurationStep, Facet, StepId};
use crate::{
    constants::{EXTENSION_NAME, INTERMEDIARY_COORDINATES, configurations as cfg},
    context::{BuildContext, CompileSettings, PomScope},
    error::{Error, Result},
    extension::LoomExtension,
};

/// A configuration holding mods that get remapped before reaching a Java configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModConfiguration {
    pub source: &'static str,
    pub mapped: &'static str,
    pub target: &'static str,
    /// POM scope when published; `None` keeps it out of publications
    pub publish_scope: Option<PomScope>,
}

pub const MOD_CONFIGURATIONS: [ModConfiguration; 5] = [
    ModConfiguration {
        source: cfg::MOD_API,
        mapped: "modApiMapped",
        target: cfg::API,
        publish_scope: Some(PomScope::Compile),
    },
    ModConfiguration {
        source: cfg::MOD_IMPLEMENTATION,
        mapped: "modImplementationMapped",
        target: cfg::IMPLEMENTATION,
        publish_scope: Some(PomScope::Runtime),
    },
    ModConfiguration {
        source: cfg::MOD_COMPILE_ONLY,
        mapped: "modCompileOnlyMapped",
        target: cfg::COMPILE_ONLY,
        publish_scope: None,
    },
    ModConfiguration {
        source: cfg::MOD_RUNTIME_ONLY,
        mapped: "modRuntimeOnlyMapped",
        target: cfg::RUNTIME_ONLY,
        publish_scope: Some(PomScope::Runtime),
    },
    ModConfiguration {
        source: cfg::MOD_LOCAL_RUNTIME,
        mapped: "modLocalRuntimeMapped",
        target: cfg::RUNTIME_ONLY,
        publish_scope: None,
    },
];

const COMPILE_ENCODING: &str = "UTF-8";

/// Create the loom configurations and hook them into the Java classpaths
pub fn setup_configurations(context: &mut BuildContext) -> Result<()> {
    LoomExtension::get(context)?;

    let configurations = context.configurations_mut();
    for name in [
        cfg::MINECRAFT,
        cfg::MINECRAFT_NAMED,
        cfg::MAPPINGS,
        cfg::MAPPINGS_FINAL,
        cfg::LOADER_LIBRARIES,
    ] {
        configurations.maybe_create(name);
    }
    configurations.maybe_create(cfg::INCLUDE).transitive = false;
    configurations.extend(cfg::MINECRAFT_NAMED, cfg::MINECRAFT)?;
    configurations.extend(cfg::MAPPINGS_FINAL, cfg::MAPPINGS)?;

    for entry in MOD_CONFIGURATIONS {
        configurations.maybe_create(entry.source);
        configurations.maybe_create(entry.mapped).description =
            Some(format!("Remapped artifacts of {}", entry.source));
        configurations.extend(entry.target, entry.mapped)?;
    }

    for classpath in [cfg::COMPILE_CLASSPATH, cfg::RUNTIME_CLASSPATH] {
        configurations.extend(classpath, cfg::MINECRAFT_NAMED)?;
        configurations.extend(classpath, cfg::LOADER_LIBRARIES)?;
    }
    Ok(())
}

/// Finalize compile settings. Reads the IDE metadata written before it.
pub fn configure_compile(context: &mut BuildContext) -> Result<()> {
    let loom = LoomExtension::get(context)?;
    let release = loom.java_release;
    let mappings = loom.mappings.clone();
    let minecraft_version = loom.minecraft_version.clone().ok_or_else(|| {
        Error::step(StepId::ConfigureCompile, "minecraft_version is not set")
    })?;

    let mappings = mappings
        .unwrap_or_else(|| format!("{INTERMEDIARY_COORDINATES}:{minecraft_version}:v2"));
    context
        .require_extension_mut::<LoomExtension>(EXTENSION_NAME)?
        .mappings = Some(mappings.clone());

    let mut ide_output_dirs = Vec::new();
    if context.ide().idea.is_some() {
        ide_output_dirs.push("out".to_string());
    }
    if context.ide().eclipse.is_some() {
        ide_output_dirs.push("bin".to_string());
    }

    let configurations = context.configurations();
    let settings = CompileSettings {
        encoding: COMPILE_ENCODING.to_string(),
        release,
        minecraft_version,
        mappings,
        compile_classpath: configurations.resolution_order(cfg::COMPILE_CLASSPATH),
        runtime_classpath: configurations.resolution_order(cfg::RUNTIME_CLASSPATH),
        ide_output_dirs,
    };
    debug!(
        release = settings.release,
        mappings = %settings.mappings,
        "Finalized compile settings"
    );
    context.set_compile(settings);
    Ok(())
}

pub struct SetupConfigurations;

impl ConfigurationStep for SetupConfigurations {
    fn id(&self) -> StepId {
        StepId::SetupConfigurations
    }

    fn requires(&self) -> &'static [Facet] {
        &[Facet::JavaConventions, Facet::Extension]
    }

    fn provides(&self) -> &'static [Facet] {
        &[Facet::Configurations]
    }

    fn apply(&self, context: &mut BuildContext) -> Result<()> {
        setup_configurations(context)
    }
}

pub struct ConfigureCompile;

impl ConfigurationStep for ConfigureCompile {
    fn id(&self) -> StepId {
        StepId::ConfigureCompile
    }

    fn requires(&self) -> &'static [Facet] {
        &[Facet::Configurations, Facet::IdeMetadata]
    }

    fn provides(&self) -> &'static [Facet] {
        &[Facet::CompileFinalized]
    }

    fn apply(&self, context: &mut BuildContext) -> Result<()> {
        configure_compile(context)
    }
}

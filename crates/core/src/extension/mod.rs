//! The `loom` extension: the configuration surface later steps and users mutate

mod files;

pub use files::LoomFiles;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{
    config::ProjectSettings,
    constants::EXTENSION_NAME,
    context::BuildContext,
    error::Result,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunEnvironment {
    Client,
    Server,
}

/// A launchable run configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RunConfigSettings {
    pub environment: RunEnvironment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_class: Option<String>,
    #[serde(default = "default_run_dir")]
    pub run_dir: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vm_args: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub program_args: Vec<String>,
    #[serde(default = "default_ide_config_generated")]
    pub ide_config_generated: bool,
}

fn default_run_dir() -> String {
    "run".to_string()
}

fn default_ide_config_generated() -> bool {
    true
}

impl RunConfigSettings {
    pub fn client() -> Self {
        Self {
            environment: RunEnvironment::Client,
            main_class: Some("net.fabricmc.loader.impl.launch.knot.KnotClient".to_string()),
            run_dir: default_run_dir(),
            vm_args: Vec::new(),
            program_args: Vec::new(),
            ide_config_generated: true,
        }
    }

    pub fn server() -> Self {
        Self {
            environment: RunEnvironment::Server,
            main_class: Some("net.fabricmc.loader.impl.launch.knot.KnotServer".to_string()),
            program_args: vec!["nogui".to_string()],
            ..Self::client()
        }
    }
}

/// A decompiler the `genSources` family of tasks can use
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecompilerOptions {
    pub name: String,
    pub class_name: String,
    pub memory_mb: u64,
    pub max_threads: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoomExtension {
    pub files: LoomFiles,
    pub minecraft_version: Option<String>,
    pub mappings: Option<String>,
    pub remap_archives: bool,
    pub java_release: u32,
    pub default_decompiler: String,
    /// Filled by the decompiler step
    pub decompilers: BTreeMap<String, DecompilerOptions>,
    pub run_configs: BTreeMap<String, RunConfigSettings>,
    pub publications: Vec<String>,
    /// Set when the host reports an IDEA project sync
    pub ide_sync: bool,
}

impl LoomExtension {
    pub fn from_settings(settings: &ProjectSettings, files: LoomFiles) -> Self {
        Self {
            files,
            minecraft_version: settings.minecraft_version.clone(),
            mappings: settings.mappings.clone(),
            remap_archives: settings.remap_archives,
            java_release: settings.java_release,
            default_decompiler: settings.decompiler.clone(),
            decompilers: BTreeMap::new(),
            run_configs: settings.run_configs.clone(),
            publications: settings.publications.clone(),
            ide_sync: false,
        }
    }

    /// The extension registered on `context`
    pub fn get(context: &BuildContext) -> Result<&Self> {
        context.require_extension::<Self>(EXTENSION_NAME)
    }
}

use crate::{
    constants::{DEFAULT_DECOMPILER, DEFAULT_JAVA_RELEASE, SETTINGS_FILE},
    error::{Error, Result},
    extension::RunConfigSettings,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// User-facing project settings, read from `spruce.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProjectSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minecraft_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mappings: Option<String>,
    #[serde(default = "default_remap_archives")]
    pub remap_archives: bool,
    #[serde(default = "default_java_release")]
    pub java_release: u32,
    #[serde(default = "default_decompiler")]
    pub decompiler: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub run_configs: BTreeMap<String, RunConfigSettings>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub publications: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_home: Option<PathBuf>,
}

fn default_remap_archives() -> bool {
    true
}

fn default_java_release() -> u32 {
    DEFAULT_JAVA_RELEASE
}

fn default_decompiler() -> String {
    DEFAULT_DECOMPILER.to_string()
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            name: None,
            minecraft_version: None,
            mappings: None,
            remap_archives: default_remap_archives(),
            java_release: default_java_release(),
            decompiler: default_decompiler(),
            run_configs: BTreeMap::new(),
            publications: Vec::new(),
            user_home: None,
        }
    }
}

impl ProjectSettings {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let settings = serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse {}: {e}", path.display())))?;
        Ok(settings)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize settings: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Walk up from `start_path` looking for `spruce.json`
    pub fn find_settings_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            let settings_path = current.join(SETTINGS_FILE);
            if settings_path.exists() {
                return Some(settings_path);
            }

            current = current.parent()?;
        }
    }

    /// Load the nearest settings file, or defaults when there is none
    pub fn load_for_project(project_dir: &Path) -> Result<Self> {
        match Self::find_settings_file(project_dir) {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Settings written by `spruce init`
    pub fn template() -> Self {
        Self {
            minecraft_version: Some("1.20.1".to_string()),
            publications: vec!["mavenJava".to_string()],
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_when_fields_missing() {
        let settings: ProjectSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, ProjectSettings::default());
        assert!(settings.remap_archives);
        assert_eq!(settings.java_release, 17);
        assert_eq!(settings.decompiler, "vineflower");
    }

    #[test]
    fn test_settings_serialization() {
        let mut settings = ProjectSettings::template();
        settings.run_configs.insert(
            "client".to_string(),
            RunConfigSettings::client(),
        );

        let json = serde_json::to_string_pretty(&settings).unwrap();
        let parsed: ProjectSettings = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, settings);
        assert!(!json.contains("user_home"));
    }

    #[test]
    fn test_find_settings_file_walks_up() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("sub").join("module");
        std::fs::create_dir_all(&nested).unwrap();
        ProjectSettings::template()
            .save_to_file(&temp_dir.path().join(SETTINGS_FILE))
            .unwrap();

        let found = ProjectSettings::find_settings_file(&nested).unwrap();
        assert_eq!(found, temp_dir.path().join(SETTINGS_FILE));

        let loaded = ProjectSettings::load_for_project(&nested).unwrap();
        assert_eq!(loaded.minecraft_version.as_deref(), Some("1.20.1"));
    }

    #[test]
    fn test_malformed_settings_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, "{ not json").unwrap();

        let err = ProjectSettings::load_from_file(&path).unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
    }
}

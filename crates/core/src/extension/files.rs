use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::context::BuildContext;

/// Directories the extension reads from and writes to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoomFiles {
    pub project_dir: PathBuf,
    pub build_dir: PathBuf,
    /// Survives `clean`; shared by every module of the root project
    pub root_project_persistent_cache: PathBuf,
    /// Shared across projects of the same user
    pub user_cache: PathBuf,
    pub remapped_mods: PathBuf,
    pub decompile_cache: PathBuf,
}

impl LoomFiles {
    pub fn new(project_dir: &Path, user_home: &Path) -> Self {
        let build_dir = project_dir.join("build");
        let root_project_persistent_cache = project_dir.join(".gradle").join("loom-cache");
        let user_cache = user_home.join("caches").join("spruce-loom");

        Self {
            project_dir: project_dir.to_path_buf(),
            remapped_mods: root_project_persistent_cache.join("remapped_mods"),
            decompile_cache: user_cache.join("decompile"),
            build_dir,
            root_project_persistent_cache,
            user_cache,
        }
    }

    pub fn create(context: &BuildContext) -> Self {
        Self::new(context.project_dir(), context.user_home())
    }
}

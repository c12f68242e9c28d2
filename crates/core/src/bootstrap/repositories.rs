use tracing::debug;

use super::PluginAware;
use crate::constants::repositories as repos;

/// Default artifact repositories, in lookup order
pub const DEFAULT_REPOSITORIES: [(&str, &str); 3] = [
    (repos::FABRIC_NAME, repos::FABRIC_URL),
    (repos::MOJANG_NAME, repos::MOJANG_URL),
    (repos::MAVEN_CENTRAL_NAME, repos::MAVEN_CENTRAL_URL),
];

/// Installs the default repositories on any plugin-aware target
#[derive(Debug, Default, Clone, Copy)]
pub struct RepositoryPlugin;

impl RepositoryPlugin {
    pub fn apply<T: PluginAware + ?Sized>(&self, target: &mut T) {
        let repositories = target.repositories_mut();
        for (name, url) in DEFAULT_REPOSITORIES {
            if repositories.maybe_add(name, url) {
                debug!(repository = name, url, "Added repository");
            }
        }
    }
}

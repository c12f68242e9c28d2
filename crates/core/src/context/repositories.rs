use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Repository {
    pub name: String,
    pub url: String,
}

/// Artifact repositories, in lookup order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RepositoryHandler {
    repositories: Vec<Repository>,
}

impl RepositoryHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append unless a repository with the same URL is already present.
    /// Returns whether it was added.
    pub fn maybe_add(&mut self, name: &str, url: &str) -> bool {
        if self.contains_url(url) {
            return false;
        }
        self.repositories.push(Repository {
            name: name.to_string(),
            url: url.to_string(),
        });
        true
    }

    pub fn contains_url(&self, url: &str) -> bool {
        self.repositories.iter().any(|repo| repo.url == url)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Repository> {
        self.repositories.iter()
    }

    pub fn len(&self) -> usize {
        self.repositories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repositories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maybe_add_dedupes_by_url() {
        let mut repositories = RepositoryHandler::new();

        assert!(repositories.maybe_add("Fabric", "https://maven.fabricmc.net/"));
        assert!(!repositories.maybe_add("FabricAgain", "https://maven.fabricmc.net/"));
        assert!(repositories.maybe_add("Mojang", "https://libraries.minecraft.net/"));

        let names: Vec<_> = repositories.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Fabric", "Mojang"]);
    }
}

use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PomScope {
    Compile,
    Runtime,
}

/// Which POM scope the dependencies of one configuration are published under
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PomDependencyScope {
    pub configuration: String,
    pub scope: PomScope,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Publication {
    pub name: String,
    pub artifact_id: String,
    pub scopes: Vec<PomDependencyScope>,
}

#[derive(Debug, Clone, Default)]
pub struct PublicationContainer {
    publications: BTreeMap<String, Publication>,
}

impl PublicationContainer {
    pub fn add(&mut self, publication: Publication) -> Result<()> {
        if self.publications.contains_key(&publication.name) {
            return Err(Error::DuplicatePublication(publication.name));
        }
        self.publications.insert(publication.name.clone(), publication);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Publication> {
        self.publications.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Publication> {
        self.publications.values()
    }

    pub fn len(&self) -> usize {
        self.publications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.publications.is_empty()
    }
}

use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

use crate::error::{Error, Result};

/// A named bucket of dependencies
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Configuration {
    pub name: String,
    /// Parents, in declaration order
    pub extends_from: Vec<String>,
    pub transitive: bool,
    pub can_be_resolved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Configuration {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            extends_from: Vec::new(),
            transitive: true,
            can_be_resolved: false,
            description: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConfigurationContainer {
    configurations: BTreeMap<String, Configuration>,
}

impl ConfigurationContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the configuration, creating it first when missing
    pub fn maybe_create(&mut self, name: &str) -> &mut Configuration {
        self.configurations
            .entry(name.to_string())
            .or_insert_with(|| Configuration::new(name))
    }

    pub fn get(&self, name: &str) -> Option<&Configuration> {
        self.configurations.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.configurations.contains_key(name)
    }

    pub fn require(&self, name: &str) -> Result<&Configuration> {
        self.get(name)
            .ok_or_else(|| Error::UnknownConfiguration(name.to_string()))
    }

    /// Make `child` inherit the dependencies of `parent`
    pub fn extend(&mut self, child: &str, parent: &str) -> Result<()> {
        self.require(parent)?;
        let child = self
            .configurations
            .get_mut(child)
            .ok_or_else(|| Error::UnknownConfiguration(child.to_string()))?;
        if !child.extends_from.iter().any(|p| p == parent) {
            child.extends_from.push(parent.to_string());
        }
        Ok(())
    }

    /// `name` followed by every configuration it inherits from, depth first,
    /// each listed once.
    pub fn resolution_order(&self, name: &str) -> Vec<String> {
        let mut order = Vec::new();
        let mut seen = HashSet::new();
        self.visit(name, &mut seen, &mut order);
        order
    }

    fn visit(&self, name: &str, seen: &mut HashSet<String>, order: &mut Vec<String>) {
        let Some(configuration) = self.configurations.get(name) else {
            return;
        };
        if !seen.insert(name.to_string()) {
            return;
        }
        order.push(name.to_string());
        for parent in &configuration.extends_from {
            self.visit(parent, seen, order);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Configuration> {
        self.configurations.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.configurations.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.configurations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configurations.is_empty()
    }
}

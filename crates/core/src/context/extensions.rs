use std::any::{Any, TypeId};
use std::collections::{BTreeMap, HashMap};

use crate::error::{Error, Result};

/// Capability objects installed into a build context, retrievable by type
#[derive(Default)]
pub struct ExtensionContainer {
    entries: BTreeMap<String, Box<dyn Any>>,
    names_by_type: HashMap<TypeId, String>,
}

impl ExtensionContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `value` under `name`. Both the name and the type must be unused.
    pub fn register<T: Any>(&mut self, name: &str, value: T) -> Result<()> {
        let type_id = TypeId::of::<T>();
        if self.entries.contains_key(name) || self.names_by_type.contains_key(&type_id) {
            return Err(Error::ExtensionAlreadyRegistered(name.to_string()));
        }
        self.entries.insert(name.to_string(), Box::new(value));
        self.names_by_type.insert(type_id, name.to_string());
        Ok(())
    }

    pub fn get<T: Any>(&self) -> Option<&T> {
        let name = self.names_by_type.get(&TypeId::of::<T>())?;
        self.entries.get(name)?.downcast_ref()
    }

    pub fn get_mut<T: Any>(&mut self) -> Option<&mut T> {
        let name = self.names_by_type.get(&TypeId::of::<T>())?;
        self.entries.get_mut(name)?.downcast_mut()
    }

    pub fn by_name(&self, name: &str) -> Option<&dyn Any> {
        self.entries.get(name).map(|entry| entry.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl std::fmt::Debug for ExtensionContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtensionContainer")
            .field("extensions", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

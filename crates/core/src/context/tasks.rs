use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::error::{Error, Result};

/// Group under which ungrouped tasks are listed
pub const OTHER_GROUP: &str = "other";

/// An externally invokable action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub depends_on: BTreeSet<String>,
}

impl Task {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            group: None,
            description: None,
            depends_on: BTreeSet::new(),
        }
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn depends_on(mut self, task: impl Into<String>) -> Self {
        self.depends_on.insert(task.into());
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct TaskContainer {
    tasks: BTreeMap<String, Task>,
}

impl TaskContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a task. Its name must be new and its dependencies must exist.
    pub fn register(&mut self, task: Task) -> Result<()> {
        if self.tasks.contains_key(&task.name) {
            return Err(Error::DuplicateTask(task.name));
        }
        if let Some(missing) = task.depends_on.iter().find(|dep| !self.tasks.contains_key(*dep)) {
            return Err(Error::UnknownTask(missing.clone()));
        }
        self.tasks.insert(task.name.clone(), task);
        Ok(())
    }

    pub fn depend(&mut self, task: &str, on: &str) -> Result<()> {
        if !self.tasks.contains_key(on) {
            return Err(Error::UnknownTask(on.to_string()));
        }
        let entry = self
            .tasks
            .get_mut(task)
            .ok_or_else(|| Error::UnknownTask(task.to_string()))?;
        entry.depends_on.insert(on.to_string());
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Task> {
        self.tasks.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tasks.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tasks.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Tasks by group name. Ungrouped tasks are only listed, under
    /// [`OTHER_GROUP`], when `include_ungrouped` is set.
    pub fn grouped(&self, include_ungrouped: bool) -> BTreeMap<&str, Vec<&Task>> {
        let mut groups: BTreeMap<&str, Vec<&Task>> = BTreeMap::new();
        for task in self.tasks.values() {
            match task.group.as_deref() {
                Some(group) => groups.entry(group).or_default().push(task),
                None if include_ungrouped => groups.entry(OTHER_GROUP).or_default().push(task),
                None => {}
            }
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_rejects_duplicates() {
        let mut tasks = TaskContainer::new();
        tasks.register(Task::new("jar")).unwrap();

        assert!(matches!(
            tasks.register(Task::new("jar")),
            Err(Error::DuplicateTask(name)) if name == "jar"
        ));
    }

    #[test]
    fn test_register_requires_dependencies() {
        let mut tasks = TaskContainer::new();

        assert!(matches!(
            tasks.register(Task::new("remapJar").depends_on("jar")),
            Err(Error::UnknownTask(name)) if name == "jar"
        ));
        tasks.register(Task::new("jar")).unwrap();
        tasks.register(Task::new("remapJar").depends_on("jar")).unwrap();
        assert!(tasks.get("remapJar").unwrap().depends_on.contains("jar"));
    }

    #[test]
    fn test_depend() {
        let mut tasks = TaskContainer::new();
        tasks.register(Task::new("build")).unwrap();
        tasks.register(Task::new("remapJar")).unwrap();

        tasks.depend("build", "remapJar").unwrap();
        assert!(tasks.get("build").unwrap().depends_on.contains("remapJar"));
        assert!(tasks.depend("build", "missing").is_err());
        assert!(tasks.depend("missing", "build").is_err());
    }

    #[test]
    fn test_grouped() {
        let mut tasks = TaskContainer::new();
        tasks.register(Task::new("remapJar").group("fabric")).unwrap();
        tasks.register(Task::new("genSources").group("fabric")).unwrap();
        tasks.register(Task::new("compileJava")).unwrap();

        let grouped = tasks.grouped(false);
        assert_eq!(grouped.len(), 1);
        let fabric: Vec<_> = grouped["fabric"].iter().map(|t| t.name.as_str()).collect();
        assert_eq!(fabric, vec!["genSources", "remapJar"]);

        let all = tasks.grouped(true);
        assert_eq!(all[OTHER_GROUP][0].name, "compileJava");
    }
}

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// External configuration flags of one build, as `key=value` strings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyBag {
    values: BTreeMap<String, String>,
}

impl PropertyBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Overlay `other` on top of this bag; keys in `other` win
    pub fn merge(&mut self, other: PropertyBag) {
        self.values.extend(other.values);
    }

    /// Parse properties-file text.
    ///
    /// Blank lines and lines starting with `#` or `!` are skipped. The key ends
    /// at the first `=` or `:`; a line without a separator is a key with an
    /// empty value.
    pub fn parse(contents: &str) -> Self {
        let mut bag = Self::new();
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }
            match line.find(['=', ':']) {
                Some(idx) => bag.insert(line[..idx].trim_end(), line[idx + 1..].trim_start()),
                None => bag.insert(line, ""),
            }
        }
        bag
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(Self::parse(&contents))
    }

    /// Parse a single `key=value` assignment as given on the command line
    pub fn parse_assignment(assignment: &str) -> Result<(String, String)> {
        let (key, value) = assignment.split_once('=').ok_or_else(|| {
            Error::ConfigError(format!("Expected key=value, got '{assignment}'"))
        })?;
        let key = key.trim();
        if key.is_empty() {
            return Err(Error::ConfigError(format!(
                "Missing property name in '{assignment}'"
            )));
        }
        Ok((key.to_string(), value.to_string()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PropertyBag {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bag = Self::new();
        for (key, value) in iter {
            bag.insert(key, value);
        }
        bag
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_properties_file() {
        let bag = PropertyBag::parse(
            "# comment\n\
             ! also a comment\n\
             \n\
             spruce.loom.debug = true\n\
             host.version:8.5\n\
             org.gradle.jvmargs=-Xmx2G -Dfile.encoding=UTF-8\n\
             flag\n",
        );

        assert_eq!(bag.len(), 4);
        assert_eq!(bag.get("spruce.loom.debug"), Some("true"));
        assert_eq!(bag.get("host.version"), Some("8.5"));
        assert_eq!(
            bag.get("org.gradle.jvmargs"),
            Some("-Xmx2G -Dfile.encoding=UTF-8")
        );
        assert_eq!(bag.get("flag"), Some(""));
        assert!(!bag.contains("comment"));
    }

    #[test]
    fn test_merge_prefers_overlay() {
        let mut base: PropertyBag = [("a", "1"), ("b", "2")].into_iter().collect();
        let overlay: PropertyBag = [("b", "3"), ("c", "4")].into_iter().collect();

        base.merge(overlay);

        assert_eq!(base.get("a"), Some("1"));
        assert_eq!(base.get("b"), Some("3"));
        assert_eq!(base.get("c"), Some("4"));
    }

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            PropertyBag::parse_assignment("idea.sync.active=true").unwrap(),
            ("idea.sync.active".to_string(), "true".to_string())
        );
        assert_eq!(
            PropertyBag::parse_assignment("empty=").unwrap(),
            ("empty".to_string(), String::new())
        );
        assert!(PropertyBag::parse_assignment("novalue").is_err());
        assert!(PropertyBag::parse_assignment("=value").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("spruce.properties");
        std::fs::write(&path, "host.version=8.5\n").unwrap();

        let bag = PropertyBag::load_from_file(&path).unwrap();
        assert_eq!(bag.get("host.version"), Some("8.5"));

        assert!(PropertyBag::load_from_file(&temp_dir.path().join("missing")).is_err());
    }
}

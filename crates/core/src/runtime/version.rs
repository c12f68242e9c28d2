//! Tool version resolution, cached once per runtime

use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;
use tracing::debug;

/// Substituted when no implementation version is embedded
pub const UNKNOWN_VERSION: &str = "Unknown";

/// The tool's own version. Never changes once resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ToolVersion(String);

impl ToolVersion {
    pub fn unknown() -> Self {
        Self(UNKNOWN_VERSION.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_unknown(&self) -> bool {
        self.0 == UNKNOWN_VERSION
    }
}

impl fmt::Display for ToolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source of the embedded implementation version
pub trait MetadataSource: Send + Sync {
    fn implementation_version(&self) -> Option<String>;
}

/// Build metadata captured at compile time
#[derive(Debug, Clone, Default)]
pub struct BuildMetadata {
    implementation_version: Option<String>,
}

impl BuildMetadata {
    /// Metadata embedded by cargo when this crate was compiled
    pub fn embedded() -> Self {
        Self {
            implementation_version: option_env!("CARGO_PKG_VERSION").map(str::to_string),
        }
    }

    /// Metadata with no implementation version, as in an unpackaged build
    pub fn absent() -> Self {
        Self::default()
    }

    pub fn with_version(version: impl Into<String>) -> Self {
        Self {
            implementation_version: Some(version.into()),
        }
    }
}

impl MetadataSource for BuildMetadata {
    fn implementation_version(&self) -> Option<String> {
        self.implementation_version.clone()
    }
}

/// Resolves the tool version on first use and serves the cached value after
pub struct VersionResolver {
    source: Box<dyn MetadataSource>,
    resolved: OnceLock<ToolVersion>,
}

impl VersionResolver {
    pub fn new(source: Box<dyn MetadataSource>) -> Self {
        Self {
            source,
            resolved: OnceLock::new(),
        }
    }

    pub fn resolve(&self) -> ToolVersion {
        self.resolved
            .get_or_init(|| match self.source.implementation_version() {
                Some(version) if !version.trim().is_empty() => ToolVersion(version),
                _ => {
                    debug!("No implementation version embedded, using '{UNKNOWN_VERSION}'");
                    ToolVersion::unknown()
                }
            })
            .clone()
    }

    /// The cached version, if it has been resolved already
    pub fn get(&self) -> Option<&ToolVersion> {
        self.resolved.get()
    }
}

impl fmt::Debug for VersionResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VersionResolver")
            .field("resolved", &self.resolved.get())
            .finish()
    }
}

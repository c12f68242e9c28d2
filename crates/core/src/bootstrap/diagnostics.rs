use serde::Serialize;
use tracing::debug;

use crate::{
    constants::{HOST_VERSION_PROPERTY, TOOL_NAME},
    context::BuildContext,
    runtime::{ToolRuntime, UNKNOWN_VERSION},
};

const LIBRARY_PREFIX: &str = "library.";
const LIBRARY_SUFFIX: &str = ".version";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryVersion {
    pub name: String,
    pub version: String,
}

impl LibraryVersion {
    fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

/// The tool, the host, then every `library.<name>.version` property
pub fn collect_library_versions(
    runtime: &ToolRuntime,
    context: &BuildContext,
) -> Vec<LibraryVersion> {
    let mut versions = vec![
        LibraryVersion::new(TOOL_NAME, runtime.resolve_version().as_str()),
        LibraryVersion::new(
            "host",
            context.property(HOST_VERSION_PROPERTY).unwrap_or(UNKNOWN_VERSION),
        ),
    ];
    versions.extend(context.properties().iter().filter_map(|(key, value)| {
        let name = key.strip_prefix(LIBRARY_PREFIX)?.strip_suffix(LIBRARY_SUFFIX)?;
        (!name.is_empty()).then(|| LibraryVersion::new(name, value))
    }));
    versions
}

/// Log library versions at debug level, and through the lifecycle logger
/// when the bound context has debug on
pub fn log_library_versions(runtime: &ToolRuntime, context: &BuildContext) {
    let verbose = runtime.is_debug();
    for library in collect_library_versions(runtime, context) {
        debug!(library = %library.name, version = %library.version, "Library version");
        if verbose {
            runtime.log(&format!("{} version: {}", library.name, library.version));
        }
    }
}

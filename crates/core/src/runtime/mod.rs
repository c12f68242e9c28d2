//! Process-wide runtime state
//!
//! A [`ToolRuntime`] is constructed once at process start and passed by
//! reference to every [`crate::LoomPlugin`]. It owns:
//! - the tool version, resolved at most once behind a `OnceLock`
//! - the lifecycle logger passthrough, bound to the active build context
//! - a mirror of the bound context's debug flag

pub mod debug;
pub mod logger;
pub mod version;

pub use debug::{parse_lenient_bool, resolve_debug};
pub use logger::{ConsoleSink, LogSink, MemorySink, ProcessLogger, StderrSink, TracingSink};
pub use version::{BuildMetadata, MetadataSource, ToolVersion, UNKNOWN_VERSION, VersionResolver};

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

use crate::context::BuildContext;

#[derive(Debug)]
pub struct ToolRuntime {
    version: VersionResolver,
    logger: ProcessLogger,
    debug: AtomicBool,
}

impl ToolRuntime {
    /// Runtime reading the embedded crate version and falling back to stdout
    pub fn new() -> Self {
        Self::with_parts(Box::new(BuildMetadata::embedded()), Arc::new(ConsoleSink))
    }

    pub fn with_parts(metadata: Box<dyn MetadataSource>, fallback: Arc<dyn LogSink>) -> Self {
        Self {
            version: VersionResolver::new(metadata),
            logger: ProcessLogger::new(fallback),
            debug: AtomicBool::new(false),
        }
    }

    pub fn with_metadata(self, metadata: Box<dyn MetadataSource>) -> Self {
        Self {
            version: VersionResolver::new(metadata),
            ..self
        }
    }

    pub fn with_fallback_sink(self, fallback: Arc<dyn LogSink>) -> Self {
        Self {
            logger: ProcessLogger::new(fallback),
            ..self
        }
    }

    pub fn resolve_version(&self) -> ToolVersion {
        self.version.resolve()
    }

    /// Log at lifecycle level to the bound context, or the fallback sink
    pub fn log(&self, message: &str) {
        self.logger.log(message);
    }

    pub fn logger(&self) -> &ProcessLogger {
        &self.logger
    }

    /// Debug flag of the currently bound context; false when none is bound
    pub fn is_debug(&self) -> bool {
        self.debug.load(Ordering::Acquire)
    }

    /// Make `context` the target of [`ToolRuntime::log`] and mirror its debug flag
    pub fn bind_context(&self, context: &BuildContext) {
        let enabled = resolve_debug(context);
        debug!(context = context.name(), debug = enabled, "Binding build context");
        self.logger.bind(context.logger());
        self.debug.store(enabled, Ordering::Release);
    }

    /// Detach the bound context at build end
    pub fn unbind_context(&self) {
        self.logger.unbind();
        self.debug.store(false, Ordering::Release);
    }
}

impl Default for ToolRuntime {
    fn default() -> Self {
        Self::new()
    }
}

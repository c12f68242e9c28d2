//! Lifecycle logging sinks and the process-wide logger passthrough

use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use tracing::info;

/// Receives lifecycle-level messages: always visible in default build output
pub trait LogSink: Send + Sync {
    fn lifecycle(&self, message: &str);
}

/// Writes straight to stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn lifecycle(&self, message: &str) {
        let mut out = std::io::stdout().lock();
        let _ = writeln!(out, "{message}");
    }
}

/// Writes straight to stderr, keeping stdout free for machine-readable output
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl LogSink for StderrSink {
    fn lifecycle(&self, message: &str) {
        let mut out = std::io::stderr().lock();
        let _ = writeln!(out, "{message}");
    }
}

/// Forwards to `tracing` at info level under the `spruce::lifecycle` target
#[derive(Debug, Clone)]
pub struct TracingSink {
    context: String,
}

impl TracingSink {
    pub fn new(context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
        }
    }
}

impl LogSink for TracingSink {
    fn lifecycle(&self, message: &str) {
        info!(target: "spruce::lifecycle", context = %self.context, "{message}");
    }
}

/// Keeps every message in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_empty(&self) -> bool {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

impl LogSink for MemorySink {
    fn lifecycle(&self, message: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}

/// Routes messages to the bound context's sink, or to the fallback sink when
/// no context is bound.
pub struct ProcessLogger {
    fallback: Arc<dyn LogSink>,
    bound: RwLock<Option<Arc<dyn LogSink>>>,
}

impl ProcessLogger {
    pub fn new(fallback: Arc<dyn LogSink>) -> Self {
        Self {
            fallback,
            bound: RwLock::new(None),
        }
    }

    pub fn bind(&self, sink: Arc<dyn LogSink>) {
        *self.bound.write().unwrap_or_else(PoisonError::into_inner) = Some(sink);
    }

    pub fn unbind(&self) {
        *self.bound.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn is_bound(&self) -> bool {
        self.bound
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    pub fn log(&self, message: &str) {
        // Clone out of the lock so a sink may log re-entrantly
        let bound = self
            .bound
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        match bound {
            Some(sink) => sink.lifecycle(message),
            None => self.fallback.lifecycle(message),
        }
    }
}

impl Default for ProcessLogger {
    fn default() -> Self {
        Self::new(Arc::new(ConsoleSink))
    }
}

impl std::fmt::Debug for ProcessLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessLogger")
            .field("bound", &self.is_bound())
            .finish()
    }
}

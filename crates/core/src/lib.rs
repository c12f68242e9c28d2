//! spruce-loom-core - Bootstrap coordinator for the SpruceLoom build-tool extension
//!
//! This crate provides:
//! - A process-wide [`ToolRuntime`] holding the cached tool version, the debug
//!   mirror and the lifecycle logger passthrough
//! - An in-process [`BuildContext`] modelling one host build invocation
//! - The fixed, precondition-checked [`ConfigurationSequencer`] and the
//!   collaborator steps it drives
//! - The [`LoomPlugin`] coordinator tying the pieces together
pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod context;
pub mod error;
pub mod extension;
pub mod runtime;
pub mod sequencer;
pub mod steps;

// Re-export commonly used types and traits
pub use error::{Error, Result};

pub use bootstrap::{LoomPlugin, PluginAware, RepositoryPlugin, SettingsContext};
pub use config::{ProjectSettings, PropertyBag};
pub use context::{BuildContext, ContextSnapshot};
pub use extension::{LoomExtension, LoomFiles, RunConfigSettings};
pub use runtime::{
    BuildMetadata, ConsoleSink, LogSink, MemorySink, MetadataSource, ProcessLogger, StderrSink,
    ToolRuntime, ToolVersion,
};
pub use sequencer::ConfigurationSequencer;
pub use steps::{ConfigurationStep, Facet, StepId};

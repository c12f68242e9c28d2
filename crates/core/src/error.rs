use std::io;

use crate::steps::{Facet, StepId};

/// Errors that can occur while bootstrapping and configuring a build
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to apply plugin '{plugin}': {reason}")]
    PluginApplication { plugin: String, reason: String },

    #[error("Plugin with id '{0}' not found")]
    UnknownPlugin(String),

    #[error("Invalid plugin id '{0}'")]
    InvalidPluginId(String),

    #[error("Extension '{0}' is already registered")]
    ExtensionAlreadyRegistered(String),

    #[error("Extension '{0}' is not registered")]
    MissingExtension(&'static str),

    #[error("Configuration with name '{0}' not found")]
    UnknownConfiguration(String),

    #[error("Task with name '{0}' already exists")]
    DuplicateTask(String),

    #[error("Task with name '{0}' not found")]
    UnknownTask(String),

    #[error("Publication with name '{0}' already exists")]
    DuplicatePublication(String),

    #[error("{step} failed: {message}")]
    Configuration { step: StepId, message: String },

    #[error("{step} requires {facet}, which no earlier step provides")]
    UnsatisfiedPrecondition { step: StepId, facet: Facet },

    #[error("{step} cannot run after {after}")]
    StepOutOfOrder { step: StepId, after: StepId },

    #[error("Plugin already applied to build context '{0}'")]
    AlreadyApplied(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Shorthand for a failure raised by a configuration step
    pub fn step(step: StepId, message: impl Into<String>) -> Self {
        Error::Configuration {
            step,
            message: message.into(),
        }
    }
}

/// Result type alias for spruce-loom operations
pub type Result<T> = std::result::Result<T, Error>;

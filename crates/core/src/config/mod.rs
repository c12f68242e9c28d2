//! Configuration management for spruce-loom

mod properties;
mod settings;

// Re-export main types
pub use properties::PropertyBag;
pub use settings::ProjectSettings;

//! Configuration steps run by the [`crate::ConfigurationSequencer`]
//!
//! Each step configures one facet of a [`BuildContext`]. Steps declare the
//! facets they need and the facets they produce, so the sequencer can check
//! that an ordering is self-consistent before running anything.

pub mod baseline;
pub mod compile;
pub mod decompiler;
pub mod extension;
pub mod ide;
pub mod idea;
pub mod publication;
pub mod tasks;

use serde::Serialize;
use std::fmt;

use crate::{context::BuildContext, error::Result};

/// Identity and position of a step in the fixed sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepId {
    BaselinePlugins,
    RegisterExtension,
    SetupConfigurations,
    IdeSetup,
    ConfigureCompile,
    Publication,
    RegisterTasks,
    Decompilers,
    IdeaRefinement,
}

impl StepId {
    /// Every step, in execution order
    pub const ORDER: [StepId; 9] = [
        StepId::BaselinePlugins,
        StepId::RegisterExtension,
        StepId::SetupConfigurations,
        StepId::IdeSetup,
        StepId::ConfigureCompile,
        StepId::Publication,
        StepId::RegisterTasks,
        StepId::Decompilers,
        StepId::IdeaRefinement,
    ];

    /// 1-based position in [`StepId::ORDER`]
    pub fn position(self) -> usize {
        self as usize + 1
    }

    pub fn name(self) -> &'static str {
        match self {
            StepId::BaselinePlugins => "baseline plugins",
            StepId::RegisterExtension => "extension registration",
            StepId::SetupConfigurations => "configuration setup",
            StepId::IdeSetup => "IDE setup",
            StepId::ConfigureCompile => "compile configuration",
            StepId::Publication => "publication setup",
            StepId::RegisterTasks => "task registration",
            StepId::Decompilers => "decompiler setup",
            StepId::IdeaRefinement => "IDEA refinement",
        }
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {} ({})", self.position(), self.name())
    }
}

/// A piece of context state a step writes and later steps read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Facet {
    JavaConventions,
    IdePlugins,
    Extension,
    Configurations,
    IdeMetadata,
    CompileFinalized,
    Publications,
    Tasks,
    Decompilers,
    IdeaModel,
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Facet::JavaConventions => "java conventions",
            Facet::IdePlugins => "IDE plugins",
            Facet::Extension => "the loom extension",
            Facet::Configurations => "dependency configurations",
            Facet::IdeMetadata => "IDE metadata",
            Facet::CompileFinalized => "finalized compile settings",
            Facet::Publications => "publications",
            Facet::Tasks => "registered tasks",
            Facet::Decompilers => "decompilers",
            Facet::IdeaModel => "the refined IDEA model",
        };
        f.write_str(name)
    }
}

/// A unit of work that configures one facet of a build context
pub trait ConfigurationStep {
    fn id(&self) -> StepId;

    /// Facets earlier steps must have provided
    fn requires(&self) -> &'static [Facet] {
        &[]
    }

    /// Facets available to later steps once this one succeeds
    fn provides(&self) -> &'static [Facet] {
        &[]
    }

    fn apply(&self, context: &mut BuildContext) -> Result<()>;
}

/// The nine steps of a full project configuration, in order
pub fn standard_steps() -> Vec<Box<dyn ConfigurationStep>> {
    vec![
        Box::new(baseline::BaselinePlugins),
        Box::new(extension::RegisterExtension),
        Box::new(compile::SetupConfigurations),
        Box::new(ide::IdeSetup),
        Box::new(compile::ConfigureCompile),
        Box::new(publication::MavenPublication),
        Box::new(tasks::RegisterTasks),
        Box::new(decompiler::DecompilerSetup),
        Box::new(idea::IdeaRefinement),
    ]
}

/// `runClient` for `client`
pub(crate) fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

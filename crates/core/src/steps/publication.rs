use tracing::debug;

use super::{ConfigurationStep, Facet, StepId, compile::MOD_CONFIGURATIONS};
use crate::{
    constants::plugins,
    context::{BuildContext, PomDependencyScope, Publication},
    error::Result,
    extension::LoomExtension,
};

/// Record the publications the extension asks for, with mod dependencies
/// mapped onto POM scopes.
pub fn configure(context: &mut BuildContext) -> Result<()> {
    let requested = LoomExtension::get(context)?.publications.clone();
    if requested.is_empty() {
        debug!("No publications requested");
        return Ok(());
    }

    context.apply_plugin(plugins::MAVEN_PUBLISH)?;

    let artifact_id = context
        .settings()
        .name
        .clone()
        .unwrap_or_else(|| context.name().to_string());
    let scopes: Vec<PomDependencyScope> = MOD_CONFIGURATIONS
        .iter()
        .filter_map(|entry| {
            entry.publish_scope.map(|scope| PomDependencyScope {
                configuration: entry.source.to_string(),
                scope,
            })
        })
        .collect();

    for name in requested {
        context.publications_mut().add(Publication {
            name,
            artifact_id: artifact_id.clone(),
            scopes: scopes.clone(),
        })?;
    }
    Ok(())
}

pub struct MavenPublication;

impl ConfigurationStep for MavenPublication {
    fn id(&self) -> StepId {
        StepId::Publication
    }

    fn requires(&self) -> &'static [Facet] {
        &[Facet::Extension, Facet::CompileFinalized]
    }

    fn provides(&self) -> &'static [Facet] {
        &[Facet::Publications]
    }

    fn apply(&self, context: &mut BuildContext) -> Result<()> {
        configure(context)
    }
}

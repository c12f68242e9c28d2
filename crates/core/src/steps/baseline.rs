use super::{ConfigurationStep, Facet, StepId};
use crate::{constants::plugins, context::BuildContext, error::Result};

/// Host plugins every later step builds on
pub const BASELINE_PLUGINS: [&str; 3] = [plugins::JAVA_LIBRARY, plugins::ECLIPSE, plugins::IDEA];

pub struct BaselinePlugins;

impl ConfigurationStep for BaselinePlugins {
    fn id(&self) -> StepId {
        StepId::BaselinePlugins
    }

    fn provides(&self) -> &'static [Facet] {
        &[Facet::JavaConventions, Facet::IdePlugins]
    }

    fn apply(&self, context: &mut BuildContext) -> Result<()> {
        for id in BASELINE_PLUGINS {
            context.apply_plugin(id)?;
        }
        Ok(())
    }
}

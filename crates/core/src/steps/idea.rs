use tracing::debug;

use super::{ConfigurationStep, Facet, StepId};
use crate::{
    constants::{IDEA_SYNC_PROPERTY, groups, tasks as names},
    context::{BuildContext, Task},
    error::Result,
    extension::LoomExtension,
    runtime::parse_lenient_bool,
};

/// Whether the host reports an active IDEA project sync
pub fn is_idea_sync(context: &BuildContext) -> bool {
    context.property(IDEA_SYNC_PROPERTY).is_some_and(parse_lenient_bool)
}

/// Last touches on the IDEA module, plus the sync hook when IDEA is importing
pub fn setup(context: &mut BuildContext) -> Result<()> {
    let sync = LoomExtension::get(context)?.ide_sync;
    let Some(idea) = context.ide_mut().idea.as_mut() else {
        debug!("IDEA plugin not applied, nothing to refine");
        return Ok(());
    };
    idea.download_sources = true;
    idea.download_javadoc = true;
    idea.inherit_output_dirs = true;

    if sync {
        debug!("IDEA sync active, registering {}", names::IDEA_SYNC);
        context.tasks_mut().register(
            Task::new(names::IDEA_SYNC)
                .group(groups::IDE)
                .description("Prepares the workspace for an IntelliJ IDEA sync.")
                .depends_on(names::GEN_IDEA_WORKSPACE)
                .depends_on(names::DOWNLOAD_ASSETS),
        )?;
    }
    Ok(())
}

pub struct IdeaRefinement;

impl ConfigurationStep for IdeaRefinement {
    fn id(&self) -> StepId {
        StepId::IdeaRefinement
    }

    fn requires(&self) -> &'static [Facet] {
        &[Facet::Extension, Facet::IdeMetadata, Facet::Tasks]
    }

    fn provides(&self) -> &'static [Facet] {
        &[Facet::IdeaModel]
    }

    fn apply(&self, context: &mut BuildContext) -> Result<()> {
        setup(context)
    }
}

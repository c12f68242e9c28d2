//! Fixed-order driver for the configuration steps
//!
//! The sequencer checks a step list once, at construction: ids must be
//! strictly increasing in [`StepId::ORDER`] and every required [`Facet`]
//! must be provided by an earlier step. Running stops at the first failing
//! step; no later step sees the partially configured context.

use std::collections::HashSet;
use tracing::{debug, error, info};

use crate::{
    context::BuildContext,
    error::{Error, Result},
    steps::{ConfigurationStep, Facet, StepId, standard_steps},
};

pub struct ConfigurationSequencer {
    steps: Vec<Box<dyn ConfigurationStep>>,
}

impl ConfigurationSequencer {
    /// Build a sequencer over `steps`, rejecting inconsistent orderings
    pub fn new(steps: Vec<Box<dyn ConfigurationStep>>) -> Result<Self> {
        validate(&steps)?;
        Ok(Self { steps })
    }

    /// The nine standard steps
    pub fn standard() -> Result<Self> {
        Self::new(standard_steps())
    }

    pub fn step_ids(&self) -> Vec<StepId> {
        self.steps.iter().map(|step| step.id()).collect()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Run every step against `context` in order.
    ///
    /// A context is configured at most once. On failure the step is recorded
    /// on the context and its error is returned as is.
    pub fn apply(&self, context: &mut BuildContext) -> Result<()> {
        if context.is_configured() {
            return Err(Error::AlreadyApplied(context.name().to_string()));
        }
        context.mark_started();

        for step in &self.steps {
            let id = step.id();
            debug!(context = context.name(), step = %id, "Running configuration step");
            if let Err(err) = step.apply(context) {
                error!(context = context.name(), step = %id, "Configuration failed: {err}");
                context.record_failure(id);
                return Err(err);
            }
            context.record_completed(id);
        }

        info!(context = context.name(), steps = self.steps.len(), "Configuration complete");
        Ok(())
    }
}

impl std::fmt::Debug for ConfigurationSequencer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigurationSequencer")
            .field("steps", &self.step_ids())
            .finish()
    }
}

fn validate(steps: &[Box<dyn ConfigurationStep>]) -> Result<()> {
    let mut provided: HashSet<Facet> = HashSet::new();
    let mut previous: Option<StepId> = None;

    for step in steps {
        let id = step.id();
        if let Some(after) = previous.filter(|after| id <= *after) {
            return Err(Error::StepOutOfOrder { step: id, after });
        }
        if let Some(&facet) = step.requires().iter().find(|facet| !provided.contains(*facet)) {
            return Err(Error::UnsatisfiedPrecondition { step: id, facet });
        }
        provided.extend(step.provides().iter().copied());
        previous = Some(id);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records its id when run, failing on demand
    struct Recording {
        id: StepId,
        requires: &'static [Facet],
        provides: &'static [Facet],
        fail: bool,
        log: StepLog,
    }

    impl ConfigurationStep for Recording {
        fn id(&self) -> StepId {
            self.id
        }

        fn requires(&self) -> &'static [Facet] {
            self.requires
        }

        fn provides(&self) -> &'static [Facet] {
            self.provides
        }

        fn apply(&self, _context: &mut BuildContext) -> Result<()> {
            self.log.borrow_mut().push(self.id);
            if self.fail {
                return Err(Error::step(self.id, "boom"));
            }
            Ok(())
        }
    }

    type StepLog = Rc<RefCell<Vec<StepId>>>;

    fn recording(
        ids: &[StepId],
        fail_at: Option<StepId>,
    ) -> (Vec<Box<dyn ConfigurationStep>>, StepLog) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let steps = ids
            .iter()
            .map(|&id| {
                Box::new(Recording {
                    id,
                    requires: &[],
                    provides: &[],
                    fail: fail_at == Some(id),
                    log: Rc::clone(&log),
                }) as Box<dyn ConfigurationStep>
            })
            .collect();
        (steps, log)
    }

    #[test]
    fn test_standard_sequence_is_consistent() {
        let sequencer = ConfigurationSequencer::standard().unwrap();
        assert_eq!(sequencer.step_ids(), StepId::ORDER.to_vec());
    }

    #[test]
    fn test_swapped_standard_steps_miss_precondition() {
        let mut steps = standard_steps();
        steps.swap(3, 4);

        let err = ConfigurationSequencer::new(steps).unwrap_err();
        assert!(matches!(
            err,
            Error::UnsatisfiedPrecondition {
                step: StepId::ConfigureCompile,
                facet: Facet::IdeMetadata
            }
        ));
    }

    #[test]
    fn test_rejects_descending_step_ids() {
        let (steps, log) = recording(&[StepId::IdeSetup, StepId::SetupConfigurations], None);

        let err = ConfigurationSequencer::new(steps).unwrap_err();
        assert!(matches!(
            err,
            Error::StepOutOfOrder {
                step: StepId::SetupConfigurations,
                after: StepId::IdeSetup
            }
        ));
        assert_eq!(
            err.to_string(),
            "step 3 (configuration setup) cannot run after step 4 (IDE setup)"
        );
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_rejects_repeated_step_id() {
        let (steps, _) = recording(&[StepId::BaselinePlugins, StepId::BaselinePlugins], None);

        assert!(matches!(
            ConfigurationSequencer::new(steps),
            Err(Error::StepOutOfOrder { step: StepId::BaselinePlugins, .. })
        ));
    }

    #[test]
    fn test_rejects_missing_provider() {
        let mut steps = standard_steps();
        steps.remove(3);

        let err = ConfigurationSequencer::new(steps).unwrap_err();
        assert!(matches!(
            err,
            Error::UnsatisfiedPrecondition {
                step: StepId::ConfigureCompile,
                facet: Facet::IdeMetadata
            }
        ));
        assert_eq!(
            err.to_string(),
            "step 5 (compile configuration) requires IDE metadata, which no earlier step provides"
        );
    }

    #[test]
    fn test_failure_stops_later_steps() {
        let (steps, log) = recording(&StepId::ORDER, Some(StepId::IdeSetup));
        let sequencer = ConfigurationSequencer::new(steps).unwrap();
        let mut context = BuildContext::new("failing", "/work/failing");

        let err = sequencer.apply(&mut context).unwrap_err();

        assert!(matches!(err, Error::Configuration { step: StepId::IdeSetup, .. }));
        assert_eq!(
            *log.borrow(),
            vec![
                StepId::BaselinePlugins,
                StepId::RegisterExtension,
                StepId::SetupConfigurations,
                StepId::IdeSetup,
            ]
        );
        assert_eq!(context.completed_steps().len(), 3);
        assert_eq!(context.failed_step(), Some(StepId::IdeSetup));
    }

    #[test]
    fn test_second_apply_is_rejected() {
        let (steps, log) = recording(&[StepId::BaselinePlugins], None);
        let sequencer = ConfigurationSequencer::new(steps).unwrap();
        let mut context = BuildContext::new("twice", "/work/twice");

        sequencer.apply(&mut context).unwrap();
        assert!(matches!(
            sequencer.apply(&mut context),
            Err(Error::AlreadyApplied(name)) if name == "twice"
        ));
        assert_eq!(log.borrow().len(), 1);
    }
}

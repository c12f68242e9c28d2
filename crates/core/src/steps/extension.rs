use super::{ConfigurationStep, Facet, StepId};
use crate::{
    constants::EXTENSION_NAME,
    context::BuildContext,
    error::Result,
    extension::{LoomExtension, LoomFiles},
    steps::idea::is_idea_sync,
};

/// Installs the `loom` extension built from the project settings
pub struct RegisterExtension;

impl ConfigurationStep for RegisterExtension {
    fn id(&self) -> StepId {
        StepId::RegisterExtension
    }

    fn requires(&self) -> &'static [Facet] {
        &[Facet::JavaConventions]
    }

    fn provides(&self) -> &'static [Facet] {
        &[Facet::Extension]
    }

    fn apply(&self, context: &mut BuildContext) -> Result<()> {
        let files = LoomFiles::create(context);
        let mut extension = LoomExtension::from_settings(context.settings(), files);
        extension.ide_sync = is_idea_sync(context);
        context.register_extension(EXTENSION_NAME, extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_registers_loom_extension() {
        let mut context = BuildContext::new("ext", "/work/ext").with_user_home("/home/dev");
        RegisterExtension.apply(&mut context).unwrap();

        let loom = LoomExtension::get(&context).unwrap();
        assert_eq!(loom.files.build_dir, std::path::PathBuf::from("/work/ext/build"));
        assert!(context.extensions().contains("loom"));
        assert!(!loom.ide_sync);
    }

    #[test]
    fn test_reads_idea_sync_property() {
        let mut context =
            BuildContext::new("ext", "/work/ext").with_property("idea.sync.active", "TRUE");
        RegisterExtension.apply(&mut context).unwrap();

        assert!(LoomExtension::get(&context).unwrap().ide_sync);
    }

    #[test]
    fn test_second_registration_fails() {
        let mut context = BuildContext::new("ext", "/work/ext");
        RegisterExtension.apply(&mut context).unwrap();

        assert!(matches!(
            RegisterExtension.apply(&mut context),
            Err(Error::ExtensionAlreadyRegistered(name)) if name == "loom"
        ));
    }
}

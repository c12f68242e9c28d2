use serde::Serialize;

use super::{
    BuildContext, compile::CompileSettings, configurations::Configuration, ide::IdeModel,
    publications::Publication, repositories::RepositoryHandler, tasks::Task,
};
use crate::{error::Result, extension::LoomExtension, steps::StepId};

/// Ordered, comparable view of the configuration state of a context
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContextSnapshot {
    pub plugins: Vec<String>,
    pub extensions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loom: Option<LoomExtension>,
    pub repositories: RepositoryHandler,
    pub configurations: Vec<Configuration>,
    pub tasks: Vec<Task>,
    pub publications: Vec<Publication>,
    pub ide: IdeModel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compile: Option<CompileSettings>,
    pub completed_steps: Vec<StepId>,
}

impl ContextSnapshot {
    pub fn capture(context: &BuildContext) -> Self {
        Self {
            plugins: context.plugins().to_vec(),
            extensions: context.extensions().names().map(str::to_string).collect(),
            loom: context.extension::<LoomExtension>().cloned(),
            repositories: context.repositories().clone(),
            configurations: context.configurations().iter().cloned().collect(),
            tasks: context.tasks().iter().cloned().collect(),
            publications: context.publications().iter().cloned().collect(),
            ide: context.ide().clone(),
            compile: context.compile().cloned(),
            completed_steps: context.completed_steps().to_vec(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// MD5 of the compact JSON form
    pub fn fingerprint(&self) -> Result<String> {
        let json = serde_json::to_string(self)?;
        Ok(format!("{:x}", md5::compute(json.as_bytes())))
    }
}

//! IDE metadata recorded by the `idea`/`eclipse` host plugins and refined by the IDE steps

use serde::Serialize;
use std::collections::BTreeSet;

use crate::extension::RunEnvironment;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IdeaModule {
    pub excludes: BTreeSet<String>,
    pub download_sources: bool,
    pub download_javadoc: bool,
    pub inherit_output_dirs: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EclipseClasspath {
    pub excludes: BTreeSet<String>,
    pub plus_configurations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdeRunConfiguration {
    pub name: String,
    pub environment: RunEnvironment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_class: Option<String>,
    pub run_dir: String,
    pub vm_args: Vec<String>,
    pub program_args: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IdeModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idea: Option<IdeaModule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eclipse: Option<EclipseClasspath>,
    pub run_configurations: Vec<IdeRunConfiguration>,
}

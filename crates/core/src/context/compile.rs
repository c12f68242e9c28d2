use serde::Serialize;

/// Finalized Java compile settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompileSettings {
    pub encoding: String,
    pub release: u32,
    pub minecraft_version: String,
    pub mappings: String,
    /// Configurations making up the compile classpath, in resolution order
    pub compile_classpath: Vec<String>,
    pub runtime_classpath: Vec<String>,
    /// Output directories IDEs compile into; kept off the classpath
    pub ide_output_dirs: Vec<String>,
}

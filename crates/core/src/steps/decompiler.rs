use std::collections::BTreeMap;
use std::num::NonZeroUsize;
use std::thread;
use tracing::debug;

use super::{ConfigurationStep, Facet, StepId, capitalize};
use crate::{
    constants::{EXTENSION_NAME, groups, tasks as names},
    context::{BuildContext, Task},
    error::{Error, Result},
    extension::{DecompilerOptions, LoomExtension},
};

const DECOMPILER_MEMORY_MB: u64 = 4096;

const BUILTIN_DECOMPILERS: [(&str, &str); 3] = [
    ("cfr", "net.fabricmc.loom.decompilers.cfr.LoomCFRDecompiler"),
    ("fernflower", "net.fabricmc.loom.decompilers.fernflower.FabricFernFlowerDecompiler"),
    ("vineflower", "net.fabricmc.loom.decompilers.vineflower.VineflowerDecompiler"),
];

fn builtin_decompilers() -> BTreeMap<String, DecompilerOptions> {
    let max_threads = thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1);
    BUILTIN_DECOMPILERS
        .iter()
        .map(|(name, class_name)| {
            let options = DecompilerOptions {
                name: name.to_string(),
                class_name: class_name.to_string(),
                memory_mb: DECOMPILER_MEMORY_MB,
                max_threads,
            };
            (name.to_string(), options)
        })
        .collect()
}

/// `genSourcesWithVineflower` for `vineflower`
pub fn gen_sources_task(decompiler: &str) -> String {
    format!("genSourcesWith{}", capitalize(decompiler))
}

/// Register the decompilers and one `genSourcesWith*` task per decompiler.
/// `genSources` runs the extension's default decompiler.
pub fn setup(context: &mut BuildContext) -> Result<()> {
    let default = LoomExtension::get(context)?.default_decompiler.clone();
    let decompilers = builtin_decompilers();
    if !decompilers.contains_key(&default) {
        return Err(Error::step(
            StepId::Decompilers,
            format!(
                "unknown decompiler '{default}', expected one of: {}",
                decompilers.keys().cloned().collect::<Vec<_>>().join(", ")
            ),
        ));
    }

    let tasks = context.tasks_mut();
    for options in decompilers.values() {
        tasks.register(
            Task::new(gen_sources_task(&options.name))
                .group(groups::FABRIC)
                .description(format!("Decompile minecraft using {}.", options.name)),
        )?;
    }
    tasks.register(
        Task::new(names::GEN_SOURCES)
            .group(groups::FABRIC)
            .description("Decompile minecraft using the default decompiler.")
            .depends_on(gen_sources_task(&default)),
    )?;

    debug!(default = %default, count = decompilers.len(), "Registered decompilers");
    context
        .require_extension_mut::<LoomExtension>(EXTENSION_NAME)?
        .decompilers = decompilers;
    Ok(())
}

pub struct DecompilerSetup;

impl ConfigurationStep for DecompilerSetup {
    fn id(&self) -> StepId {
        StepId::Decompilers
    }

    fn requires(&self) -> &'static [Facet] {
        &[Facet::Extension, Facet::Tasks]
    }

    fn provides(&self) -> &'static [Facet] {
        &[Facet::Decompilers]
    }

    fn apply(&self, context: &mut BuildContext) -> Result<()> {
        setup(context)
    }
}

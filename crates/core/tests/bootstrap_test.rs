//! Integration tests for the plugin bootstrap sequence

use spruce_loom_core::{
    BuildContext, BuildMetadata, ConfigurationSequencer, Error, LoomExtension, LoomPlugin,
    MemorySink, ProjectSettings, RunConfigSettings, SettingsContext, StepId, ToolRuntime,
};
use std::sync::Arc;

fn runtime(version: Option<&str>) -> (ToolRuntime, Arc<MemorySink>) {
    let fallback = Arc::new(MemorySink::new());
    let metadata = match version {
        Some(version) => BuildMetadata::with_version(version),
        None => BuildMetadata::absent(),
    };
    let runtime = ToolRuntime::with_parts(Box::new(metadata), fallback.clone());
    (runtime, fallback)
}

fn settings() -> ProjectSettings {
    ProjectSettings {
        name: Some("example-mod".to_string()),
        minecraft_version: Some("1.20.1".to_string()),
        publications: vec!["mavenJava".to_string()],
        ..Default::default()
    }
}

fn project(settings: ProjectSettings, sink: &Arc<MemorySink>) -> BuildContext {
    BuildContext::new("example-mod", "/work/example-mod")
        .with_settings(settings)
        .with_user_home("/home/dev/.spruce")
        .with_logger(sink.clone())
}

#[test]
fn test_full_sequence() {
    let (runtime, _) = runtime(Some("1.0.0"));
    let plugin = LoomPlugin::new(&runtime).unwrap();
    let sink = Arc::new(MemorySink::new());
    let mut context = project(settings(), &sink);

    plugin.apply(&mut context).unwrap();

    assert_eq!(context.completed_steps(), StepId::ORDER.as_slice());
    assert_eq!(context.failed_step(), None);
    assert_eq!(
        context.plugins(),
        &["java-library", "java", "eclipse", "idea", "maven-publish"]
    );

    let loom = LoomExtension::get(&context).unwrap();
    assert_eq!(loom.run_configs.len(), 2);
    assert_eq!(loom.decompilers.len(), 3);
    assert_eq!(loom.mappings.as_deref(), Some("net.fabricmc:intermediary:1.20.1:v2"));

    let tasks = context.tasks();
    assert!(tasks.get("build").unwrap().depends_on.contains("remapJar"));
    assert!(tasks.get("publish").unwrap().depends_on.contains("remapJar"));
    assert!(tasks.get("genSources").unwrap().depends_on.contains("genSourcesWithVineflower"));
    assert!(!tasks.contains("ideaSyncTask"));

    let idea = context.ide().idea.as_ref().unwrap();
    assert!(idea.inherit_output_dirs);
    assert!(idea.download_sources);
    assert_eq!(context.publications().get("mavenJava").unwrap().artifact_id, "example-mod");
}

#[test]
fn test_fabric_task_listing() {
    let (runtime, _) = runtime(Some("1.0.0"));
    let plugin = LoomPlugin::new(&runtime).unwrap();
    let sink = Arc::new(MemorySink::new());
    let mut context = project(settings(), &sink);

    plugin.apply(&mut context).unwrap();

    let grouped = context.tasks().grouped(false);
    let rendered = grouped["fabric"]
        .iter()
        .map(|task| task.name.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    insta::assert_snapshot!(rendered, @r"
    cleanLoom
    cleanLoomBinaries
    cleanLoomMappings
    downloadAssets
    genSources
    genSourcesWithCfr
    genSourcesWithFernflower
    genSourcesWithVineflower
    migrateMappings
    remapJar
    remapSourcesJar
    runClient
    runServer
    validateAccessWidener
    ");
}

#[test]
fn test_banner_emitted_once_before_steps() {
    let (runtime, fallback) = runtime(Some("1.0.0"));
    let plugin = LoomPlugin::new(&runtime).unwrap();
    let sink = Arc::new(MemorySink::new());
    let mut context = project(settings(), &sink);

    plugin.apply(&mut context).unwrap();

    assert_eq!(sink.lines(), vec!["SpruceLoom: 1.0.0".to_string()]);
    assert!(fallback.is_empty());
}

#[test]
fn test_banner_uses_sentinel_without_metadata() {
    let (runtime, _) = runtime(None);
    let plugin = LoomPlugin::new(&runtime).unwrap();
    let sink = Arc::new(MemorySink::new());
    let mut context = project(settings(), &sink);

    plugin.apply(&mut context).unwrap();

    assert_eq!(sink.lines(), vec!["SpruceLoom: Unknown".to_string()]);
}

#[test]
fn test_debug_property_adds_diagnostics() {
    let (runtime, _) = runtime(Some("1.0.0"));
    let plugin = LoomPlugin::new(&runtime).unwrap();
    let sink = Arc::new(MemorySink::new());
    let mut context = project(settings(), &sink)
        .with_property("spruce.loom.debug", "TRUE")
        .with_property("host.version", "8.5")
        .with_property("library.asm.version", "9.6");

    plugin.apply(&mut context).unwrap();

    assert!(runtime.is_debug());
    assert_eq!(
        sink.lines(),
        vec![
            "SpruceLoom: 1.0.0".to_string(),
            "SpruceLoom version: 1.0.0".to_string(),
            "host version: 8.5".to_string(),
            "asm version: 9.6".to_string(),
        ]
    );
}

#[test]
fn test_numeric_debug_value_stays_off() {
    let (runtime, _) = runtime(Some("1.0.0"));
    let plugin = LoomPlugin::new(&runtime).unwrap();
    let sink = Arc::new(MemorySink::new());
    let mut context = project(settings(), &sink).with_property("spruce.loom.debug", "1");

    plugin.apply(&mut context).unwrap();

    assert!(!runtime.is_debug());
    assert_eq!(sink.lines().len(), 1);
}

#[test]
fn test_logger_fallback_then_bound_context() {
    let (runtime, fallback) = runtime(Some("1.0.0"));
    runtime.log("hello");
    assert_eq!(fallback.lines(), vec!["hello".to_string()]);

    let plugin = LoomPlugin::new(&runtime).unwrap();
    let sink = Arc::new(MemorySink::new());
    let mut context = project(settings(), &sink);
    plugin.apply(&mut context).unwrap();

    runtime.log("hello");
    assert_eq!(sink.lines().last().map(String::as_str), Some("hello"));
    assert_eq!(fallback.lines().len(), 1);

    plugin.finish();
    runtime.log("after");
    assert_eq!(fallback.lines().last().map(String::as_str), Some("after"));
}

#[test]
fn test_step_four_failure_stops_sequence() {
    let (runtime, _) = runtime(Some("1.0.0"));
    let plugin = LoomPlugin::new(&runtime).unwrap();
    let sink = Arc::new(MemorySink::new());
    let mut settings = settings();
    settings
        .run_configs
        .insert("my client".to_string(), RunConfigSettings::client());
    let mut context = project(settings, &sink);

    let err = plugin.apply(&mut context).unwrap_err();

    assert!(matches!(err, Error::Configuration { step: StepId::IdeSetup, .. }));
    assert_eq!(
        err.to_string(),
        "step 4 (IDE setup) failed: invalid run configuration name 'my client'"
    );
    assert_eq!(context.failed_step(), Some(StepId::IdeSetup));
    assert_eq!(context.completed_steps().len(), 3);

    // Nothing from steps 5 to 9 reached the context
    assert!(context.compile().is_none());
    assert!(context.publications().is_empty());
    assert!(!context.tasks().contains("remapJar"));
    assert!(LoomExtension::get(&context).unwrap().decompilers.is_empty());
    assert!(!context.ide().idea.as_ref().unwrap().download_sources);

    // The banner still went out before the failure
    assert_eq!(sink.lines(), vec!["SpruceLoom: 1.0.0".to_string()]);
}

#[test]
fn test_double_apply_is_rejected() {
    let (runtime, _) = runtime(Some("1.0.0"));
    let plugin = LoomPlugin::new(&runtime).unwrap();
    let sink = Arc::new(MemorySink::new());
    let mut context = project(settings(), &sink);

    plugin.apply(&mut context).unwrap();
    let before = context.snapshot();

    assert!(matches!(
        plugin.apply(&mut context),
        Err(Error::AlreadyApplied(name)) if name == "example-mod"
    ));
    assert_eq!(context.snapshot(), before);
}

#[test]
fn test_configuration_is_deterministic() {
    let (runtime, _) = runtime(Some("1.0.0"));
    let plugin = LoomPlugin::new(&runtime).unwrap();

    let snapshots: Vec<_> = (0..2)
        .map(|_| {
            let sink = Arc::new(MemorySink::new());
            let mut context = project(settings(), &sink);
            plugin.apply(&mut context).unwrap();
            plugin.finish();
            context.snapshot()
        })
        .collect();

    assert_eq!(snapshots[0], snapshots[1]);
    assert_eq!(
        snapshots[0].fingerprint().unwrap(),
        snapshots[1].fingerprint().unwrap()
    );
    assert_eq!(snapshots[0].to_json().unwrap(), snapshots[1].to_json().unwrap());
}

#[test]
fn test_settings_target_gets_repositories_only() {
    let (runtime, fallback) = runtime(Some("1.0.0"));
    let plugin = LoomPlugin::new(&runtime).unwrap();
    let mut settings = SettingsContext::new("root", "/work/root");

    plugin.apply(&mut settings).unwrap();
    plugin.apply(&mut settings).unwrap();

    assert_eq!(settings.repositories().len(), 3);
    assert!(fallback.is_empty());
}

#[test]
fn test_custom_sequence_runs_prefix() {
    let (runtime, _) = runtime(Some("1.0.0"));
    let steps: Vec<_> = spruce_loom_core::steps::standard_steps().into_iter().take(3).collect();
    let plugin = LoomPlugin::with_sequencer(&runtime, ConfigurationSequencer::new(steps).unwrap());
    let sink = Arc::new(MemorySink::new());
    let mut context = project(settings(), &sink);

    plugin.apply(&mut context).unwrap();

    assert_eq!(
        context.completed_steps(),
        &[
            StepId::BaselinePlugins,
            StepId::RegisterExtension,
            StepId::SetupConfigurations
        ]
    );
    assert!(context.configurations().contains("modImplementationMapped"));
    assert!(context.tasks().get("remapJar").is_none());
}

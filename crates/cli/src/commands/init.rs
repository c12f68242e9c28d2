use anyhow::{Context, Result};
use spruce_loom_core::{ProjectSettings, constants::SETTINGS_FILE};
use std::{env, path::Path};
use tracing::info;

pub fn init_command(cwd: Option<&Path>, force: bool) -> Result<()> {
    let project_root = match cwd {
        Some(cwd) => cwd.to_path_buf(),
        None => env::current_dir().context("Failed to get current directory")?,
    };
    let project_root = project_root
        .canonicalize()
        .context("Failed to canonicalize project root")?;

    let settings_path = project_root.join(SETTINGS_FILE);
    if settings_path.exists() && !force {
        println!("❌ Settings already exist at: {}", settings_path.display());
        println!("   Use --force to overwrite");
        return Ok(());
    }

    let mut settings = ProjectSettings::template();
    settings.name = project_root
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());

    settings
        .save_to_file(&settings_path)
        .with_context(|| format!("Failed to write settings to {}", settings_path.display()))?;
    info!("Wrote {}", settings_path.display());

    println!("✅ Created settings: {}", settings_path.display());
    println!("\n📌 Next steps:");
    println!("   spruce configure    apply the plugin and review the configuration");
    println!("   spruce tasks        list the registered tasks");
    Ok(())
}

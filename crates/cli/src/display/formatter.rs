use spruce_loom_core::{BuildContext, LoomExtension, context::Task};
use std::collections::BTreeMap;
use std::fmt::Write;

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", "-".repeat(title.chars().count()));
}

fn group_title(group: &str) -> String {
    let mut chars = group.chars();
    match chars.next() {
        Some(first) => format!("{}{} tasks", first.to_uppercase(), chars.as_str()),
        None => "Tasks".to_string(),
    }
}

/// Render tasks per group, the way `gradle tasks` lists them
pub fn render_task_groups(groups: &BTreeMap<&str, Vec<&Task>>) -> String {
    let mut out = String::new();
    for (index, (group, tasks)) in groups.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        heading(&mut out, &group_title(group));
        for task in tasks {
            match &task.description {
                Some(description) => {
                    let _ = writeln!(out, "{} - {}", task.name, description);
                }
                None => {
                    let _ = writeln!(out, "{}", task.name);
                }
            }
        }
    }
    out
}

/// Human-readable overview of a configured context
pub fn render_summary(context: &BuildContext) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "🔧 Project: {}", context.name());
    let _ = writeln!(out, "   Plugins: {}", context.plugins().join(", "));

    if let Ok(loom) = LoomExtension::get(context) {
        if let Some(version) = &loom.minecraft_version {
            let _ = writeln!(out, "   Minecraft: {version}");
        }
        if let Some(mappings) = &loom.mappings {
            let _ = writeln!(out, "   Mappings: {mappings}");
        }
        let _ = writeln!(out, "   Decompiler: {}", loom.default_decompiler);
    }

    out.push('\n');
    heading(&mut out, "Repositories");
    for repository in context.repositories().iter() {
        let _ = writeln!(out, "{} ({})", repository.name, repository.url);
    }

    out.push('\n');
    heading(&mut out, "Configurations");
    for configuration in context.configurations().iter() {
        if configuration.extends_from.is_empty() {
            let _ = writeln!(out, "{}", configuration.name);
        } else {
            let _ = writeln!(
                out,
                "{} <- {}",
                configuration.name,
                configuration.extends_from.join(", ")
            );
        }
    }

    if !context.publications().is_empty() {
        out.push('\n');
        heading(&mut out, "Publications");
        for publication in context.publications().iter() {
            let _ = writeln!(out, "{} ({})", publication.name, publication.artifact_id);
        }
    }

    let _ = writeln!(out, "\n✅ {} tasks registered", context.tasks().len());
    out
}

use anyhow::{Context, Result};
use console::style;
use promptcraft_core::PromptcraftConfig;
use promptcraft_core::config::constants::files;
use std::path::{Path, PathBuf};

/// Handle the init command
pub fn handle_init_command(workspace: &Path, output: Option<PathBuf>, force: bool) -> Result<()> {
    let target = output.unwrap_or_else(|| workspace.join(files::CONFIG_FILE_NAME));

    let written = PromptcraftConfig::create_sample_config(&target, force)
        .with_context(|| "failed to initialize configuration file")?;

    if written {
        eprintln!(
            "{} {}",
            style("Created").green().bold(),
            style(target.display()).dim()
        );
    } else {
        eprintln!(
            "{} {} already exists; pass --force to overwrite",
            style("Skipped").yellow().bold(),
            target.display()
        );
    }
    Ok(())
}

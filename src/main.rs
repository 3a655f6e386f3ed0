use anyhow::{Context, Result};
use clap::Parser;
use promptcraft::cli::{
    Cli, Commands, ConsoleNotifier, InputSource, handle_generate_command, handle_init_command,
    handle_options_command, handle_remote_command,
};
use promptcraft_core::ConfigManager;
use promptcraft_core::generation::{Notifier, TracingNotifier};
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(explicit: Option<&Path>, workspace: &Path) -> Result<ConfigManager> {
    let manager = ConfigManager::load_with_override(explicit, workspace)?;
    if let Some(path) = manager.config_path() {
        tracing::debug!(path = %path.display(), "loaded configuration");
    }
    Ok(manager)
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let args = Cli::parse();

    let workspace = match args.workspace {
        Some(path) => path,
        None => std::env::current_dir().context("cannot determine current dir")?,
    };
    let explicit_config = args.config.as_deref();
    // --quiet routes notices to the log, visible with RUST_LOG=info
    let notifier: &dyn Notifier = if args.quiet {
        &TracingNotifier
    } else {
        &ConsoleNotifier
    };

    match args.command {
        Commands::Generate {
            platform,
            option,
            quick_action,
            text,
        } => {
            let manager = load_config(explicit_config, &workspace)?;
            handle_generate_command(
                notifier,
                &manager.config().defaults,
                platform,
                option,
                InputSource::from_args(text, quick_action),
            )
        }
        Commands::Remote {
            prompt_type,
            endpoint,
            text,
        } => {
            let manager = load_config(explicit_config, &workspace)?;
            handle_remote_command(notifier, &manager.config().remote, prompt_type, endpoint, text)
                .await
        }
        Commands::Options { platform } => {
            let manager = load_config(explicit_config, &workspace)?;
            handle_options_command(&manager.config().defaults, platform);
            Ok(())
        }
        Commands::Init { force, output } => handle_init_command(&workspace, output, force),
    }
}

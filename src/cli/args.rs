//! CLI argument parsing

use clap::{Parser, Subcommand, ValueHint};
use promptcraft_core::Platform;
use std::path::PathBuf;

/// Main CLI structure for promptcraft
#[derive(Parser, Debug)]
#[command(
    name = "promptcraft",
    version,
    about = "Draft platform-tuned AI prompts\n\nPlatforms: general, chatgpt, midjourney, stable-diffusion, claude\n\nQuick Start:\n  promptcraft generate midjourney --option vertical \"a lighthouse at dusk\"\n  echo \"Convert Spanish into Japanese\" | promptcraft generate claude -o xml"
)]
pub struct Cli {
    /// Explicit configuration file (skips the promptcraft.toml search)
    #[arg(long, global = true, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Workspace searched for promptcraft.toml; defaults to the current directory
    #[arg(long, global = true, value_name = "PATH", value_hint = ValueHint::DirPath)]
    pub workspace: Option<PathBuf>,

    /// Suppress success and validation notices on stderr
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Format text for a platform
    ///
    /// Text comes from the arguments, a quick action, or stdin when neither is given.
    Generate {
        /// Target platform
        #[arg(value_enum)]
        platform: Platform,

        /// Platform option (prompt type, orientation, style or structure)
        #[arg(long, short)]
        option: Option<String>,

        /// Seed the text from a numbered quick action (see `promptcraft options general`)
        #[arg(long, value_name = "N", conflicts_with = "text")]
        quick_action: Option<usize>,

        /// Raw text to transform
        text: Vec<String>,
    },

    /// Ask the remote structured-prompt endpoint to expand an idea
    Remote {
        /// Prompt type sent to the endpoint (standard, reasoning, race)
        #[arg(long)]
        prompt_type: Option<String>,

        /// Endpoint URL, overriding promptcraft.toml
        #[arg(long, value_hint = ValueHint::Url)]
        endpoint: Option<String>,

        /// Idea to expand
        text: Vec<String>,
    },

    /// List options, sample inputs and quick actions
    Options {
        /// Only show this platform
        #[arg(value_enum)]
        platform: Option<Platform>,
    },

    /// Write a sample promptcraft.toml
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,

        /// Destination; defaults to <workspace>/promptcraft.toml
        #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,
    },
}

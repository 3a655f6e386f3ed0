//! Command-line interface module
//!
//! Argument parsing plus one handler per subcommand. Handlers print the
//! generated prompt on stdout; notices and logs go to stderr.

pub mod args;
pub mod generate;
pub mod init;
pub mod notifier;
pub mod options;
pub mod remote;

pub use args::*;
pub use generate::{InputSource, handle_generate_command};
pub use init::handle_init_command;
pub use notifier::ConsoleNotifier;
pub use options::handle_options_command;
pub use remote::handle_remote_command;

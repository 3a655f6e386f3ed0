//! # promptcraft
//!
//! Command-line front end for [`promptcraft_core`]. It collects raw text and a
//! platform option, runs the generation facade and prints the formatted prompt
//! so it can be piped or copied:
//!
//! ```bash
//! promptcraft generate midjourney --option vertical "a lighthouse at dusk"
//! # a lighthouse at dusk --ar 9:16 --v 6
//!
//! promptcraft generate chatgpt --quick-action 4 --option race
//! # Enhanced race prompt: I want a prompt that will write marketing copy
//!
//! promptcraft remote --prompt-type reasoning "plan a product launch"
//! ```
//!
//! Defaults live in `promptcraft.toml` (see `promptcraft init`).

pub mod cli;

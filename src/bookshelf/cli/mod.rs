//! Terminal client: argument parsing, the interactive shell, rendering and
//! logging setup. See `commands.rs` for the flow.

mod commands;
mod logging;
mod render;
mod setup;
mod shell;

pub use commands::run;

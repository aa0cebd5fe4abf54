//! Toolkit browser CLI
//!
//! Library half of the `toolkit` binary: configuration, the runtime
//! [`App`](app::App) context, and the command implementations.

pub mod app;
pub mod commands;
pub mod config;
pub mod output;

pub use app::App;
pub use commands::{run, Cli, Command, CommandError, ThemeCommand};
pub use config::{OutputFormat, ToolkitConfig};

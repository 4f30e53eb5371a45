//! Presentation layer for jcl-optimizer
//!
//! This crate contains the web form, CLI definitions, output formatters
//! and progress reporters.

pub mod cli;
pub mod output;
pub mod progress;
pub mod web;

// Re-export commonly used types
pub use cli::commands::{AnalyzeArgs, CheckModelsCli, Cli, Commands, ServeArgs};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{SimpleProgress, SpinnerProgress};
pub use web::{AppState, create_router, run_server};

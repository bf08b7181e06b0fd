//! Terminal client for the vocab library.
//!
//! - `setup`: clap definitions for process arguments and session lines
//! - `line`: splitting a typed line into words
//! - `commands`: the session loop and per-command handlers
//! - `render`, `styles`, `templates`: minijinja output with a console theme

mod commands;
mod line;
mod render;
mod setup;
mod styles;
mod templates;

pub use commands::run;

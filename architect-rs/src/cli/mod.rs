//! CLI command implementations.

pub mod args;
pub mod output;

pub mod dashboard;
pub mod local_map;
pub mod settings;

pub use args::{Cli, Commands};
pub use output::Output;

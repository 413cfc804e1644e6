// CLI module - Command line interface
pub mod args;
pub mod commands;
pub mod output;

pub use args::Args;
pub use commands::{execute, wait_for_interrupt};
pub use output::{select_renderer, PlainRenderer, TableRenderer};

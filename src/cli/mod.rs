//! Command-line interface module.

mod args;
pub mod export;
pub mod init;
pub mod validate;

pub use args::{Cli, Commands, ExportArgs, ExportFormat, ValidateArgs};

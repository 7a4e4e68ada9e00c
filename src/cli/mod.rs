//! CLI module for librepo
//!
//! Provides a small command-line front end for:
//! - version: print the library version
//! - pathconcat: join path chunks
//! - url-host: strip the path from a URL
//! - mirrorlist: list the URLs of a mirrorlist file
//! - checksum: compute a file digest

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{execute, run};
pub use errors::{CliError, CliErrorCode, CliResult};

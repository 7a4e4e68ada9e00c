//! CLI command implementations
//!
//! Commands are thin wrappers over the library: each one initializes
//! librepo, calls a single operation and prints the result as JSON.

use std::path::Path;

use serde_json::{json, Value};

use crate::checksum::{compute_file_checksum, ChecksumType};
use crate::config::Config;
use crate::init::global_init_with;
use crate::mirrorlist::Mirrorlist;
use crate::util::{pathconcat, url_without_path};
use crate::version::{Version, VERSION};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::{write_error, write_response};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    let config = match cli.config {
        Some(ref path) => Config::load(path)?,
        None => Config::from_env(),
    };
    global_init_with(&config);

    match execute(cli.command) {
        Ok(data) => write_response(data),
        Err(e) => {
            write_error(e.code().code(), e.message())?;
            Err(e)
        }
    }
}

/// Run a command and return its JSON payload
pub fn execute(cmd: Command) -> CliResult<Value> {
    match cmd {
        Command::Version => Ok(version()),
        Command::Pathconcat { chunks } => concat(&chunks),
        Command::UrlHost { url } => Ok(json!({ "host": url_without_path(&url) })),
        Command::Mirrorlist { path } => mirrorlist(&path),
        Command::Checksum {
            checksum_type,
            path,
        } => checksum(&checksum_type, &path),
    }
}

fn version() -> Value {
    let current = Version::CURRENT;
    json!({
        "version": VERSION,
        "major": current.major,
        "minor": current.minor,
        "patch": current.patch,
    })
}

fn concat(chunks: &[String]) -> CliResult<Value> {
    let chunks: Vec<&str> = chunks.iter().map(String::as_str).collect();
    let path = pathconcat(&chunks)
        .ok_or_else(|| CliError::invalid_argument("at least one path chunk is required"))?;
    Ok(json!({ "path": path }))
}

fn mirrorlist(path: &Path) -> CliResult<Value> {
    let mirrorlist = Mirrorlist::parse_file(path)?;
    Ok(json!({ "urls": mirrorlist.urls }))
}

fn checksum(name: &str, path: &Path) -> CliResult<Value> {
    let checksum_type = ChecksumType::from_name(name);
    if checksum_type == ChecksumType::Unknown {
        return Err(CliError::invalid_argument(format!(
            "unknown checksum type '{}'",
            name
        )));
    }

    let digest = compute_file_checksum(path, checksum_type)?;
    Ok(json!({
        "type": checksum_type.as_str(),
        "checksum": digest,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_version_command() {
        let data = execute(Command::Version).unwrap();
        assert_eq!(data["version"], VERSION);
        assert_eq!(data["major"], Version::CURRENT.major);
    }

    #[test]
    fn test_pathconcat_command() {
        let data = execute(Command::Pathconcat {
            chunks: vec!["/srv/".into(), "/repo".into(), "".into()],
        })
        .unwrap();
        assert_eq!(data["path"], "/srv/repo/");
    }

    #[test]
    fn test_url_host_command() {
        let data = execute(Command::UrlHost {
            url: "https://mirror.example.org/pub/fedora/".into(),
        })
        .unwrap();
        assert_eq!(data["host"], "https://mirror.example.org");
    }

    #[test]
    fn test_mirrorlist_command() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("mirrorlist");
        fs::write(&path, "# comment\nhttp://a.example/repo/\n").unwrap();

        let data = execute(Command::Mirrorlist { path }).unwrap();
        assert_eq!(data["urls"], json!(["http://a.example/repo/"]));
    }

    #[test]
    fn test_checksum_command_rejects_unknown_type() {
        let err = execute(Command::Checksum {
            checksum_type: "crc32".into(),
            path: "/nonexistent".into(),
        })
        .unwrap_err();
        assert_eq!(err.code().code(), "LRE_CLI_INVALID_ARGUMENT");
    }

    #[test]
    fn test_checksum_command() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("data");
        fs::write(&path, b"").unwrap();

        let data = execute(Command::Checksum {
            checksum_type: "MD5".into(),
            path,
        })
        .unwrap();
        assert_eq!(data["type"], "md5");
        assert_eq!(data["checksum"], "d41d8cd98f00b204e9800998ecf8427e");
    }
}

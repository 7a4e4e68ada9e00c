//! CLI argument definitions using clap
//!
//! Commands:
//! - librepo version
//! - librepo pathconcat <chunks>...
//! - librepo url-host <url>
//! - librepo mirrorlist <file>
//! - librepo checksum --type <type> <file>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// librepo - repository download helpers
#[derive(Parser, Debug)]
#[command(name = "librepo")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a JSON configuration file (default: environment)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the library version
    Version,

    /// Join path chunks with '/'
    Pathconcat {
        /// Chunks to join, in order
        #[arg(required = true, allow_hyphen_values = true)]
        chunks: Vec<String>,
    },

    /// Print the scheme and host part of a URL
    UrlHost {
        url: String,
    },

    /// Parse a mirrorlist file and print its URLs
    Mirrorlist {
        path: PathBuf,
    },

    /// Compute the checksum of a file
    Checksum {
        /// Checksum type (md5, sha1, sha224, sha256, sha384, sha512)
        #[arg(long = "type", default_value = "sha256")]
        checksum_type: String,

        path: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pathconcat() {
        let cli = Cli::try_parse_from(["librepo", "pathconcat", "/tmp", "repo", ""]).unwrap();
        match cli.command {
            Command::Pathconcat { chunks } => assert_eq!(chunks, vec!["/tmp", "repo", ""]),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_checksum_default_type() {
        let cli = Cli::try_parse_from(["librepo", "checksum", "repomd.xml"]).unwrap();
        match cli.command {
            Command::Checksum { checksum_type, path } => {
                assert_eq!(checksum_type, "sha256");
                assert_eq!(path, PathBuf::from("repomd.xml"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from(["librepo", "version", "--config", "/etc/librepo.json"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/etc/librepo.json")));
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

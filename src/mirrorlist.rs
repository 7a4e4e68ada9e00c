//! Mirrorlist parsing
//!
//! A mirrorlist is a text file with one mirror URL per line. Blank lines
//! and lines starting with `#` are ignored, and so is anything that is not
//! a URL.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Read};
use std::path::Path;

use crate::errors::{LibrepoError, LibrepoResult};
use crate::observability::{log_trace, Event};
use crate::util::has_url_protocol;

/// Parsed mirrorlist
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mirrorlist {
    /// Mirror URLs in file order
    pub urls: Vec<String>,
}

impl Mirrorlist {
    /// Create an empty mirrorlist
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a mirrorlist from a reader
    pub fn parse<R: Read>(reader: R) -> LibrepoResult<Self> {
        let mut mirrorlist = Self::new();

        for (index, line) in BufReader::new(reader).lines().enumerate() {
            let line = line.map_err(|e| match e.kind() {
                ErrorKind::InvalidData => {
                    LibrepoError::MirrorlistParse(format!("line {} is not valid UTF-8", index + 1))
                }
                _ => LibrepoError::Io(e),
            })?;

            let url = line.trim();
            if url.is_empty() || url.starts_with('#') {
                continue;
            }

            if !has_url_protocol(url) {
                let line_no = (index + 1).to_string();
                log_trace(Event::MirrorlistLineSkipped, &[("line", &line_no), ("content", url)]);
                continue;
            }

            mirrorlist.urls.push(url.to_string());
        }

        Ok(mirrorlist)
    }

    /// Parse a mirrorlist file
    pub fn parse_file(path: &Path) -> LibrepoResult<Self> {
        let mirrorlist = Self::parse(File::open(path)?)?;
        log_trace(
            Event::MirrorlistParsed,
            &[
                ("path", &path.to_string_lossy()),
                ("urls", &mirrorlist.urls.len().to_string()),
            ],
        );
        Ok(mirrorlist)
    }

    /// Number of mirrors
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    /// Returns true if no mirror was found
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

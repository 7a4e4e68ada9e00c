//! Observable events emitted by librepo
//!
//! Events are explicit and typed; the logger only ever sees their
//! `SCREAMING_SNAKE_CASE` names.

use std::fmt;

/// Observable events in librepo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// One-time global initialization finished
    LibrepoInit,

    // Filesystem
    /// Temporary file or directory could not be created
    TmpCreateFailed,
    /// An entry could not be removed during recursive removal
    RemoveFailed,
    /// A relative path could not be resolved to an absolute one
    RealpathFailed,

    // Mirrorlist
    /// A mirrorlist line was not a URL and was skipped
    MirrorlistLineSkipped,
    /// A mirrorlist was parsed
    MirrorlistParsed,

    // Checksum
    /// A file checksum did not match the expected value
    ChecksumMismatch,
}

impl Event {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::LibrepoInit => "LIBREPO_INIT",
            Event::TmpCreateFailed => "TMP_CREATE_FAILED",
            Event::RemoveFailed => "REMOVE_FAILED",
            Event::RealpathFailed => "REALPATH_FAILED",
            Event::MirrorlistLineSkipped => "MIRRORLIST_LINE_SKIPPED",
            Event::MirrorlistParsed => "MIRRORLIST_PARSED",
            Event::ChecksumMismatch => "CHECKSUM_MISMATCH",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

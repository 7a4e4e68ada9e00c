//! # Librepo Errors
//!
//! Every error carries a stable `LRE_*` code so callers can match on the
//! category without parsing messages.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for librepo operations
pub type LibrepoResult<T> = Result<T, LibrepoError>;

/// Librepo errors
#[derive(Debug, Error)]
pub enum LibrepoError {
    // Version errors
    #[error("Malformed version string: {0:?}")]
    MalformedVersionString(String),

    // Argument errors
    #[error("Bad function argument: {0}")]
    BadFunctionArgument(String),

    #[error("Bad configuration: {0}")]
    BadConfig(String),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Cannot create temporary file or directory in {}: {source}", .dir.display())]
    CannotCreateTmp {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    // Mirrorlist errors
    #[error("Malformed mirrorlist: {0}")]
    MirrorlistParse(String),

    // Checksum errors
    #[error("Unknown or unsupported checksum type: {0}")]
    UnknownChecksum(String),

    #[error("Checksum mismatch: expected {expected}, calculated {actual}")]
    ChecksumMismatch { expected: String, actual: String },
}

impl LibrepoError {
    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            LibrepoError::MalformedVersionString(_) => "LRE_BADVERSION",
            LibrepoError::BadFunctionArgument(_) => "LRE_BADFUNCARG",
            LibrepoError::BadConfig(_) => "LRE_BADOPTARG",
            LibrepoError::Io(_) => "LRE_IO",
            LibrepoError::CannotCreateTmp { .. } => "LRE_CANNOTCREATETMP",
            LibrepoError::MirrorlistParse(_) => "LRE_MLBAD",
            LibrepoError::UnknownChecksum(_) => "LRE_UNKNOWNCHECKSUM",
            LibrepoError::ChecksumMismatch { .. } => "LRE_BADCHECKSUM",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            LibrepoError::MalformedVersionString("1.2".into()).code(),
            "LRE_BADVERSION"
        );
        assert_eq!(
            LibrepoError::Io(io::Error::new(io::ErrorKind::Other, "x")).code(),
            "LRE_IO"
        );
        assert_eq!(LibrepoError::MirrorlistParse("x".into()).code(), "LRE_MLBAD");
    }

    #[test]
    fn test_display_includes_context() {
        let err = LibrepoError::ChecksumMismatch {
            expected: "abc".into(),
            actual: "def".into(),
        };
        let display = err.to_string();
        assert!(display.contains("abc"));
        assert!(display.contains("def"));

        let err = LibrepoError::CannotCreateTmp {
            dir: PathBuf::from("/no/such/dir"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("/no/such/dir"));
    }

    #[test]
    fn test_io_error_conversion() {
        let err: LibrepoError = io::Error::new(io::ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(err, LibrepoError::Io(_)));
    }
}

//! Checksum types, best-checksum selection and file digests
//!
//! Digests are rendered as lowercase hex.

use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use sha1::Sha1;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};

use crate::errors::{LibrepoError, LibrepoResult};
use crate::observability::{log_warn, Event};

/// Supported checksum algorithms, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChecksumType {
    Unknown,
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl ChecksumType {
    /// Map a checksum name (`md5`, `sha`, `sha1`, `sha256`, ...) to its type.
    ///
    /// Matching ignores ASCII case. Unrecognised names map to `Unknown`.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "md5" => ChecksumType::Md5,
            "sha" | "sha1" => ChecksumType::Sha1,
            "sha224" => ChecksumType::Sha224,
            "sha256" => ChecksumType::Sha256,
            "sha384" => ChecksumType::Sha384,
            "sha512" => ChecksumType::Sha512,
            _ => ChecksumType::Unknown,
        }
    }

    /// Returns the canonical name
    pub fn as_str(&self) -> &'static str {
        match self {
            ChecksumType::Unknown => "unknown",
            ChecksumType::Md5 => "md5",
            ChecksumType::Sha1 => "sha1",
            ChecksumType::Sha224 => "sha224",
            ChecksumType::Sha256 => "sha256",
            ChecksumType::Sha384 => "sha384",
            ChecksumType::Sha512 => "sha512",
        }
    }
}

impl fmt::Display for ChecksumType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A checksum advertised for a file, e.g. by a metalink.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetalinkHash {
    pub hash_type: Option<String>,
    pub value: Option<String>,
}

impl MetalinkHash {
    /// Create a hash entry with both type and value set
    pub fn new(hash_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            hash_type: Some(hash_type.into()),
            value: Some(value.into()),
        }
    }
}

/// Pick the strongest known checksum from `hashes`.
///
/// Entries missing a type or value and entries of unknown type are ignored.
/// On ties the earliest entry wins. Returns `None` if nothing usable is left.
pub fn best_checksum(hashes: &[MetalinkHash]) -> Option<(ChecksumType, &str)> {
    let mut best: Option<(ChecksumType, &str)> = None;

    for hash in hashes {
        let (Some(hash_type), Some(value)) = (hash.hash_type.as_deref(), hash.value.as_deref()) else {
            continue;
        };

        let checksum_type = ChecksumType::from_name(hash_type);
        if checksum_type == ChecksumType::Unknown {
            continue;
        }

        match best {
            Some((best_type, _)) if best_type >= checksum_type => {}
            _ => best = Some((checksum_type, value)),
        }
    }

    best
}

/// Compute the hex digest of a file.
///
/// # Errors
///
/// Returns `LibrepoError::UnknownChecksum` for `Unknown`, and
/// `LibrepoError::Io` if the file cannot be read.
pub fn compute_file_checksum(path: &Path, checksum_type: ChecksumType) -> LibrepoResult<String> {
    match checksum_type {
        ChecksumType::Md5 => {
            let mut context = md5::Context::new();
            read_chunks(path, |chunk| context.consume(chunk))?;
            Ok(format!("{:x}", context.compute()))
        }
        ChecksumType::Sha1 => digest_file::<Sha1>(path),
        ChecksumType::Sha224 => digest_file::<Sha224>(path),
        ChecksumType::Sha256 => digest_file::<Sha256>(path),
        ChecksumType::Sha384 => digest_file::<Sha384>(path),
        ChecksumType::Sha512 => digest_file::<Sha512>(path),
        ChecksumType::Unknown => Err(LibrepoError::UnknownChecksum(checksum_type.to_string())),
    }
}

/// Compute the digest of a file and compare it with `expected`.
///
/// The comparison ignores ASCII case.
pub fn verify_file_checksum(
    path: &Path,
    checksum_type: ChecksumType,
    expected: &str,
) -> LibrepoResult<()> {
    let actual = compute_file_checksum(path, checksum_type)?;
    if actual.eq_ignore_ascii_case(expected) {
        return Ok(());
    }

    log_warn(
        Event::ChecksumMismatch,
        &[
            ("actual", &actual),
            ("expected", expected),
            ("path", &path.to_string_lossy()),
            ("type", checksum_type.as_str()),
        ],
    );
    Err(LibrepoError::ChecksumMismatch {
        expected: expected.to_string(),
        actual,
    })
}

fn digest_file<D: Digest>(path: &Path) -> LibrepoResult<String> {
    let mut hasher = D::new();
    read_chunks(path, |chunk| hasher.update(chunk))?;
    Ok(to_hex(&hasher.finalize()))
}

fn read_chunks(path: &Path, mut consume: impl FnMut(&[u8])) -> LibrepoResult<()> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut buffer = [0u8; 8192];

    loop {
        let bytes_read = reader.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        consume(&buffer[..bytes_read]);
    }

    Ok(())
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

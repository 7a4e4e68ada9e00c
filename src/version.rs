//! Library version information
//!
//! The version is fixed at build time from `Cargo.toml` and rendered as
//! `MAJOR.MINOR.PATCH`. A malformed package version is rejected while
//! compiling this module, so the accessors below can never fail.

use std::fmt;
use std::str::FromStr;

use crate::errors::{LibrepoError, LibrepoResult};

/// Librepo version as a `MAJOR.MINOR.PATCH` string.
///
/// Populated at compile time from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Major component of [`VERSION`]
pub const VERSION_MAJOR: u64 = Version::CURRENT.major;
/// Minor component of [`VERSION`]
pub const VERSION_MINOR: u64 = Version::CURRENT.minor;
/// Patch component of [`VERSION`]
pub const VERSION_PATCH: u64 = Version::CURRENT.patch;

/// Shortest well-formed version string, e.g. `1.2.3`
const MIN_VERSION_LEN: usize = 5;

/// Returns the library version string.
///
/// The returned value is the same `&'static str` for every call.
pub fn version() -> &'static str {
    VERSION
}

/// Returns true if `s` is a well-formed `MAJOR.MINOR.PATCH` version string.
pub fn is_well_formed(s: &str) -> bool {
    Version::parse_segments(s).is_some()
}

/// A parsed `MAJOR.MINOR.PATCH` version.
///
/// Ordering compares major, then minor, then patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// The version of this build of the library.
    pub const CURRENT: Version = match Version::parse_segments(VERSION) {
        Some(version) => version,
        None => panic!("package version is not a MAJOR.MINOR.PATCH version"),
    };

    /// Create a version from its components
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse a `MAJOR.MINOR.PATCH` string.
    ///
    /// # Errors
    ///
    /// Returns `LibrepoError::MalformedVersionString` when the string is
    /// shorter than five characters, does not contain exactly two `.`
    /// delimiters, has an empty segment, contains anything other than ASCII
    /// digits in a segment, or a segment overflows `u64`.
    pub fn parse(s: &str) -> LibrepoResult<Self> {
        Self::parse_segments(s).ok_or_else(|| LibrepoError::MalformedVersionString(s.to_string()))
    }

    /// Returns true if this version is at least `major.minor.patch`.
    pub fn is_at_least(&self, major: u64, minor: u64, patch: u64) -> bool {
        *self >= Version::new(major, minor, patch)
    }

    // const: also evaluated for CURRENT at compile time
    const fn parse_segments(s: &str) -> Option<Version> {
        let bytes = s.as_bytes();
        if bytes.len() < MIN_VERSION_LEN {
            return None;
        }

        let mut segments = [0u64; 3];
        let mut index = 0;
        let mut segment_len = 0;
        let mut i = 0;

        while i < bytes.len() {
            let b = bytes[i];
            if b == b'.' {
                if segment_len == 0 || index == 2 {
                    return None;
                }
                index += 1;
                segment_len = 0;
            } else if b.is_ascii_digit() {
                let shifted = match segments[index].checked_mul(10) {
                    Some(v) => v,
                    None => return None,
                };
                segments[index] = match shifted.checked_add((b - b'0') as u64) {
                    Some(v) => v,
                    None => return None,
                };
                segment_len += 1;
            } else {
                return None;
            }
            i += 1;
        }

        if index != 2 || segment_len == 0 {
            return None;
        }

        Some(Version::new(segments[0], segments[1], segments[2]))
    }
}

impl FromStr for Version {
    type Err = LibrepoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_shape() {
        assert!(VERSION.len() >= 5);
        assert_eq!(VERSION.matches('.').count(), 2);
    }

    #[test]
    fn test_version_is_stable() {
        assert_eq!(version(), version());
        assert!(std::ptr::eq(version(), version()));
    }

    #[test]
    fn test_current_matches_string() {
        assert_eq!(Version::CURRENT.to_string(), VERSION);
        assert_eq!(VERSION_MAJOR, Version::CURRENT.major);
        assert_eq!(VERSION_MINOR, Version::CURRENT.minor);
        assert_eq!(VERSION_PATCH, Version::CURRENT.patch);
    }

    #[test]
    fn test_parse_boundary() {
        let v = Version::parse("1.2.3").unwrap();
        assert_eq!(v, Version::new(1, 2, 3));
        assert_eq!("1.2.3".len(), 5);
    }

    #[test]
    fn test_parse_multi_digit() {
        let v: Version = "10.14.2".parse().unwrap();
        assert_eq!(v, Version::new(10, 14, 2));
        assert_eq!(v.to_string(), "10.14.2");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "1.2", "1.2.3.4", "1..23", ".1.23", "12.3.", "v1.2.3", "+1.2.3", "1.2.3-rc1", "1. 2.3"] {
            let err = Version::parse(bad).unwrap_err();
            assert!(
                matches!(err, LibrepoError::MalformedVersionString(ref s) if s == bad),
                "accepted {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_parse_rejects_overflow() {
        assert!(Version::parse("18446744073709551616.0.0").is_err());
        assert!(Version::parse("18446744073709551615.0.0").is_ok());
    }

    #[test]
    fn test_is_well_formed() {
        assert!(is_well_formed(VERSION));
        assert!(is_well_formed("0.0.0"));
        assert!(!is_well_formed("1.2"));
    }

    #[test]
    fn test_ordering_and_version_check() {
        let v = Version::new(1, 14, 5);
        assert!(v.is_at_least(1, 14, 5));
        assert!(v.is_at_least(1, 9, 99));
        assert!(v.is_at_least(0, 99, 99));
        assert!(!v.is_at_least(1, 14, 6));
        assert!(!v.is_at_least(2, 0, 0));
        assert!(Version::new(1, 2, 10) > Version::new(1, 2, 9));
    }
}

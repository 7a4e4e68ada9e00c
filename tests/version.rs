//! Version contract tests
//!
//! The library version is a `MAJOR.MINOR.PATCH` string of at least five
//! characters with exactly two `.` delimiters, stable for the whole process.

use std::thread;

use librepo::{version, LibrepoError, Version, VERSION};

#[test]
fn test_version_length_and_delimiters() {
    assert!(VERSION.len() >= 5);
    assert_eq!(VERSION.matches('.').count(), 2);
}

#[test]
fn test_version_segments_are_numeric() {
    for segment in VERSION.split('.') {
        assert!(!segment.is_empty());
        assert!(segment.chars().all(|c| c.is_ascii_digit()), "segment {:?}", segment);
    }
}

#[test]
fn test_version_is_idempotent() {
    let first = version();
    for _ in 0..100 {
        assert_eq!(version(), first);
    }
}

#[test]
fn test_version_same_across_threads() {
    let handles: Vec<_> = (0..4).map(|_| thread::spawn(version)).collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), VERSION);
    }
}

#[test]
fn test_version_matches_parsed_form() {
    let parsed = Version::parse(version()).unwrap();
    assert_eq!(parsed, Version::CURRENT);
    assert_eq!(parsed.to_string(), VERSION);
    assert!(parsed.is_at_least(librepo::VERSION_MAJOR, librepo::VERSION_MINOR, librepo::VERSION_PATCH));
}

#[test]
fn test_boundary_and_negative_scenarios() {
    assert_eq!(Version::parse("1.2.3").unwrap(), Version::new(1, 2, 3));
    assert_eq!(Version::parse("10.14.2").unwrap(), Version::new(10, 14, 2));

    assert!(matches!(Version::parse("1.2"), Err(LibrepoError::MalformedVersionString(_))));
    assert!(matches!(Version::parse(""), Err(LibrepoError::MalformedVersionString(_))));
}

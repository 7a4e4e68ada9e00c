//! URL helpers
//!
//! Only plain string handling: a "URL" here is anything carrying a
//! `scheme://` prefix, and a bare path is treated as a local location.

use std::fs;

use crate::observability::{log_trace, Event};

const SCHEME_SEPARATOR: &str = "://";
const FILE_PREFIX: &str = "file:/";
const FILE_SCHEME: &str = "file://";

/// Returns true if `s` carries a protocol prefix (`scheme://` or `file:/`).
pub fn has_url_protocol(s: &str) -> bool {
    s.contains(SCHEME_SEPARATOR) || s.starts_with(FILE_PREFIX)
}

/// Turn a path into a URL.
///
/// Strings that already carry a protocol are returned unchanged. Absolute
/// paths get a `file://` prefix; relative paths are resolved against the
/// current directory first. Returns `None` if a relative path cannot be
/// resolved (e.g. it does not exist).
pub fn prepend_url_protocol(path: &str) -> Option<String> {
    if has_url_protocol(path) {
        return Some(path.to_string());
    }

    if path.starts_with('/') {
        return Some(format!("{}{}", FILE_SCHEME, path));
    }

    match fs::canonicalize(path) {
        Ok(resolved) => Some(format!("{}{}", FILE_SCHEME, resolved.to_string_lossy())),
        Err(e) => {
            log_trace(Event::RealpathFailed, &[("path", path), ("error", &e.to_string())]);
            None
        }
    }
}

/// Strip the path from a URL, keeping the scheme and host.
///
/// Any `file:` URL maps to `file://`.
///
/// ```
/// use librepo::util::url_without_path;
///
/// assert_eq!(url_without_path("http://foo.bar/fedora/linux/"), "http://foo.bar");
/// assert_eq!(url_without_path("file:///home/repo"), "file://");
/// ```
pub fn url_without_path(url: &str) -> String {
    if url.starts_with(FILE_PREFIX) {
        return FILE_SCHEME.to_string();
    }

    let host_start = url
        .find(SCHEME_SEPARATOR)
        .map(|i| i + SCHEME_SEPARATOR.len())
        .unwrap_or(0);

    let host_end = url[host_start..]
        .find('/')
        .map(|i| host_start + i)
        .unwrap_or(url.len());

    url[..host_end].to_string()
}

/// Returns true if `path` refers to the local filesystem.
///
/// Empty strings are not local; URLs are local only with the `file://`
/// scheme.
pub fn is_local_path(path: &str) -> bool {
    if path.is_empty() {
        return false;
    }

    !(path.contains(SCHEME_SEPARATOR) && !path.starts_with(FILE_SCHEME))
}

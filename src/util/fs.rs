//! Filesystem helpers: temporary files, recursive removal, content copy

use std::fs::{self, File};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::errors::{LibrepoError, LibrepoResult};
use crate::observability::{log_trace, Event};

const TMPFILE_PREFIX: &str = "librepo-tmp-";
const TMPDIR_PREFIX: &str = "librepo-tmpdir-";

/// Create an anonymous temporary file.
///
/// The file lives in the configured temp directory and is unlinked already;
/// it disappears when the returned handle is dropped.
pub fn gettmpfile(config: &Config) -> LibrepoResult<File> {
    let dir = config.tmp_dir();
    let tmp = tempfile::Builder::new()
        .prefix(TMPFILE_PREFIX)
        .tempfile_in(&dir)
        .map_err(|e| tmp_error(dir, e))?;

    // Unlinks the path, leaving only the open handle
    Ok(tmp.into_file())
}

/// Create a temporary directory that outlives the call.
///
/// The caller owns the directory and should remove it with [`remove_dir`].
pub fn gettmpdir(config: &Config) -> LibrepoResult<PathBuf> {
    let dir = config.tmp_dir();
    let tmp = tempfile::Builder::new()
        .prefix(TMPDIR_PREFIX)
        .tempdir_in(&dir)
        .map_err(|e| tmp_error(dir, e))?;

    Ok(tmp.keep())
}

fn tmp_error(dir: PathBuf, source: io::Error) -> LibrepoError {
    log_trace(
        Event::TmpCreateFailed,
        &[("dir", &dir.to_string_lossy()), ("error", &source.to_string())],
    );
    LibrepoError::CannotCreateTmp { dir, source }
}

/// Recursively remove `path`, children first.
///
/// Symlinks are removed, never followed. Removal stops at the first entry
/// that cannot be removed; that entry is logged and its error returned.
pub fn remove_dir(path: &Path) -> LibrepoResult<()> {
    remove_tree(path).map_err(LibrepoError::from)
}

fn remove_tree(path: &Path) -> io::Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| removal_failed(path, e))?;

    if metadata.is_dir() {
        let entries = fs::read_dir(path).map_err(|e| removal_failed(path, e))?;
        for entry in entries {
            let entry = entry.map_err(|e| removal_failed(path, e))?;
            remove_tree(&entry.path())?;
        }
        fs::remove_dir(path).map_err(|e| removal_failed(path, e))
    } else {
        fs::remove_file(path).map_err(|e| removal_failed(path, e))
    }
}

fn removal_failed(path: &Path, e: io::Error) -> io::Error {
    log_trace(
        Event::RemoveFailed,
        &[("path", &path.to_string_lossy()), ("error", &e.to_string())],
    );
    e
}

/// Copy the whole content of `source` into `dest`.
///
/// Both are rewound to the start first. `dest` is not truncated. Returns the
/// number of bytes copied.
pub fn copy_content<R, W>(source: &mut R, dest: &mut W) -> LibrepoResult<u64>
where
    R: Read + Seek,
    W: Write + Seek,
{
    source.seek(SeekFrom::Start(0))?;
    dest.seek(SeekFrom::Start(0))?;
    let copied = io::copy(source, dest)?;
    dest.flush()?;
    Ok(copied)
}

//! # Utilities
//!
//! Path, URL and filesystem helpers shared by the rest of the library.

pub mod fs;
pub mod path;
pub mod url;

pub use fs::{copy_content, gettmpdir, gettmpfile, remove_dir};
pub use path::pathconcat;
pub use url::{has_url_protocol, is_local_path, prepend_url_protocol, url_without_path};

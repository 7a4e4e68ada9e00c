//! librepo - repository download helpers
//!
//! Exposes the library version plus the shared helpers a repository
//! downloader needs: path and URL handling, temporary files, checksum
//! selection and mirrorlist parsing.
//!
//! ```
//! assert_eq!(librepo::version().matches('.').count(), 2);
//! ```

pub mod checksum;
pub mod cli;
pub mod config;
pub mod errors;
pub mod init;
pub mod mirrorlist;
pub mod observability;
pub mod util;
pub mod version;

pub use config::Config;
pub use errors::{LibrepoError, LibrepoResult};
pub use init::{global_init, global_init_with};
pub use mirrorlist::Mirrorlist;
pub use version::{version, Version, VERSION, VERSION_MAJOR, VERSION_MINOR, VERSION_PATCH};

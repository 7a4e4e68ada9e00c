//! One-time global initialization

use std::sync::Once;

use crate::config::Config;
use crate::observability::{log_trace, Event, Logger};
use crate::version::VERSION;

static INIT: Once = Once::new();

/// Initialize librepo using configuration from the environment.
///
/// See [`global_init_with`].
pub fn global_init() -> bool {
    global_init_with(&Config::from_env())
}

/// Initialize librepo with an explicit configuration.
///
/// Runs at most once per process; concurrent callers block until the first
/// one finishes. The logger's minimum severity is only ever lowered, never
/// raised. Returns true only for the call that did the work.
pub fn global_init_with(config: &Config) -> bool {
    let mut performed = false;
    INIT.call_once(|| {
        let wanted = config.min_severity();
        if wanted < Logger::min_severity() {
            Logger::set_min_severity(wanted);
        }
        log_trace(Event::LibrepoInit, &[("version", VERSION)]);
        performed = true;
    });
    performed
}

/// Returns true once [`global_init`] has completed.
pub fn is_initialized() -> bool {
    INIT.is_completed()
}

//! Observability for librepo
//!
//! Structured JSON logging to stderr. Debug (TRACE) records are dropped
//! unless debug mode was switched on through [`crate::Config`].
//!
//! ```ignore
//! use librepo::observability::{log_trace, Event};
//!
//! log_trace(Event::RemoveFailed, &[("path", "/tmp/x"), ("error", "busy")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity, DEFAULT_MIN_SEVERITY};

/// Log an event at TRACE level with fields
pub fn log_trace(event: Event, fields: &[(&str, &str)]) {
    Logger::trace(event.as_str(), fields);
}

/// Log an event at WARN level with fields
pub fn log_warn(event: Event, fields: &[(&str, &str)]) {
    Logger::warn(event.as_str(), fields);
}

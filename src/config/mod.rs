//! Configuration management for portscout.
//!
//! Settings come from built-in defaults, optionally overlaid by a JSON
//! file passed on the command line. Nothing is read implicitly.

mod settings;

pub use settings::AppSettings;

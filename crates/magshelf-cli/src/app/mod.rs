//! Application-level utilities for the Magshelf CLI.
//!
//! This module provides:
//! - Path resolution for the config file, catalog database, and backups
//! - A lazily-loaded application context shared by command handlers
//! - Logging setup

mod context;
mod logging;
mod resolver;

// Re-export public API
pub use context::AppContext;
pub use logging::init_logging;
pub use resolver::resolve_config_path;

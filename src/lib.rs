// SPDX-License-Identifier: Apache-2.0 OR MIT
//! Thread-safe leveled line logging.
//!
//! Each [`Logger`] renders one line per call with optional date, time, title
//! and call-site fragments. A [`Registry`] maps titles to shared loggers so
//! levels can be changed or reset by name.
//!
//! ```
//! use clerk::{Flags, Logger, MemorySink, Registry, Severity};
//!
//! let registry = Registry::new();
//! let out = MemorySink::new();
//! let db = registry
//!     .register(Logger::new(out.clone().into(), "db", Flags::empty(), Severity::Warning, "--"))
//!     .unwrap();
//!
//! db.info("hidden");
//! registry.set_level_for("db", "info").unwrap();
//! db.info("shown");
//! registry.reset_all();
//! db.info("hidden again");
//!
//! assert_eq!(out.contents(), "(db) -- [INFO] -- shown\n");
//! ```

pub mod config;
pub mod logging;

pub use config::{ConfigError, LoggerConfig, LoggingConfig};
pub use logging::{
    CallSite, Flags, Logger, LoggingError, MemorySink, Registry, ResultExt, Severity, Sink,
    TracedError,
};

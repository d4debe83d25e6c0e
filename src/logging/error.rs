// SPDX-License-Identifier: Apache-2.0 OR MIT
// Errors surfaced by logger construction and registry administration

use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by registry and level-parsing operations
///
/// Rendering a line never produces one of these; sink failures are swallowed.
#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("logger with name {title} already exists")]
    DuplicateName { title: String },

    #[error("logger with name {title} does not exist")]
    NotFound { title: String },

    #[error("level {level} invalid")]
    InvalidLevel { level: String },

    #[error("cannot open log file {}: {source}", .path.display())]
    Sink {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, LoggingError>;

// SPDX-License-Identifier: Apache-2.0 OR MIT
// Call-site capture and single-line rendering

use super::{Flags, Severity};
use chrono::NaiveDateTime;
use std::panic::Location;
use std::path::Path;

/// File marker used when the call site cannot be determined
pub const UNKNOWN_SOURCE: &str = "UNKNOWN_SOURCE_ERROR";

/// Body substituted for an empty message
pub const EMPTY_MESSAGE: &str = "Unknown error\n";

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";

/// Source location of a logging call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    file: &'static str,
    line: i64,
}

impl CallSite {
    /// Sentinel for an undeterminable location
    pub const UNKNOWN: CallSite = CallSite {
        file: UNKNOWN_SOURCE,
        line: -1,
    };

    pub const fn new(file: &'static str, line: u32) -> Self {
        CallSite {
            file,
            line: line as i64,
        }
    }

    /// Location of the caller, propagated through `#[track_caller]` frames
    #[track_caller]
    #[inline]
    pub fn capture() -> Self {
        Self::from(Location::caller())
    }

    /// Build from parts that may be missing (e.g. records bridged from
    /// another logging framework). Any missing part yields [`CallSite::UNKNOWN`].
    pub fn from_parts(file: Option<&'static str>, line: Option<u32>) -> Self {
        match (file, line) {
            (Some(file), Some(line)) => CallSite::new(file, line),
            _ => CallSite::UNKNOWN,
        }
    }

    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> i64 {
        self.line
    }

    /// Final path segment of the file
    pub fn short_file(&self) -> &'static str {
        let file: &'static str = self.file;
        Path::new(file)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(file)
    }
}

impl From<&'static Location<'static>> for CallSite {
    fn from(location: &'static Location<'static>) -> Self {
        CallSite::new(location.file(), location.line())
    }
}

impl std::fmt::Display for CallSite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Snapshot of the formatting state a single line is rendered with
#[derive(Debug, Clone, Copy)]
pub(crate) struct LineFormat<'a> {
    pub title: &'a str,
    pub separator: &'a str,
    pub flags: Flags,
}

impl LineFormat<'_> {
    /// Render one complete line. `clock` is only consulted when the date or
    /// time fragment is enabled.
    pub fn render(
        &self,
        severity: Severity,
        site: &CallSite,
        msg: &str,
        clock: impl FnOnce() -> NaiveDateTime,
    ) -> Vec<u8> {
        let labels = self.flags.contains(Flags::LABELS);
        let mut line = String::with_capacity(64 + self.title.len() + msg.len());

        let label = |line: &mut String, name: &str| {
            if labels {
                line.push_str(name);
            }
        };

        if self.flags.intersects(Flags::DATE | Flags::TIME) {
            let now = clock();
            if self.flags.contains(Flags::DATE) {
                label(&mut line, "DATE = ");
                line.push_str(&now.format(DATE_FORMAT).to_string());
                self.push_separator(&mut line);
            }
            if self.flags.contains(Flags::TIME) {
                // The double space after '=' is part of the format
                label(&mut line, "TIME =  ");
                line.push_str(&now.format(TIME_FORMAT).to_string());
                self.push_separator(&mut line);
            }
        }

        if !self.title.is_empty() {
            label(&mut line, "TITLE = ");
            line.push('(');
            line.push_str(self.title);
            line.push(')');
            self.push_separator(&mut line);
        }

        label(&mut line, "LEVEL = ");
        line.push('[');
        line.push_str(severity.as_str());
        line.push(']');
        self.push_separator(&mut line);

        if self.flags.intersects(Flags::CALLER | Flags::SHORT_CALLER) {
            label(&mut line, "SRC = ");
            let file = if self.flags.contains(Flags::SHORT_CALLER) {
                site.short_file()
            } else {
                site.file()
            };
            line.push_str(file);
            line.push(':');
            line.push_str(&site.line().to_string());
            self.push_separator(&mut line);
        }

        label(&mut line, "MSG = ");
        if msg.is_empty() {
            line.push_str(EMPTY_MESSAGE);
        } else {
            line.push_str(msg);
            if !msg.ends_with('\n') {
                line.push('\n');
            }
        }

        line.into_bytes()
    }

    fn push_separator(&self, line: &mut String) {
        line.push(' ');
        line.push_str(self.separator);
        line.push(' ');
    }
}

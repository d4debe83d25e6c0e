// SPDX-License-Identifier: Apache-2.0 OR MIT
// Severity levels for line logging (DEBUG through FATAL)

use super::LoggingError;
use std::str::FromStr;

/// Log severity levels (0-4, higher is more severe)
///
/// Ordering follows the rank, never the textual name.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Verbose diagnostics
    Debug = 0,
    /// Normal operational messages
    Info = 1,
    /// Something unexpected but recoverable (default level)
    Warning = 2,
    /// An operation failed
    Error = 3,
    /// Unrecoverable; the process is terminated after logging
    Fatal = 4,
}

impl Severity {
    /// All severities in ascending rank
    pub const ALL: [Severity; 5] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Fatal,
    ];

    /// Get severity rank as u8 (0-4)
    #[inline]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Get severity name as static string
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }

    /// Create from rank (returns None if invalid)
    pub const fn from_rank(value: u8) -> Option<Self> {
        match value {
            0 => Some(Severity::Debug),
            1 => Some(Severity::Info),
            2 => Some(Severity::Warning),
            3 => Some(Severity::Error),
            4 => Some(Severity::Fatal),
            _ => None,
        }
    }
}

impl Default for Severity {
    fn default() -> Self {
        Severity::Warning
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = LoggingError;

    /// Case-insensitive parse. The error carries the upper-cased input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_uppercase();
        Severity::ALL
            .into_iter()
            .find(|severity| severity.as_str() == normalized)
            .ok_or(LoggingError::InvalidLevel { level: normalized })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Debug < Severity::Info);
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
        assert!(Severity::Error < Severity::Fatal);
    }

    #[test]
    fn test_severity_values() {
        assert_eq!(Severity::Debug.rank(), 0);
        assert_eq!(Severity::Fatal.rank(), 4);
    }

    #[test]
    fn test_severity_from_rank() {
        assert_eq!(Severity::from_rank(0), Some(Severity::Debug));
        assert_eq!(Severity::from_rank(4), Some(Severity::Fatal));
        assert_eq!(Severity::from_rank(5), None);
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(format!("{}", Severity::Warning), "WARNING");
        assert_eq!(format!("{}", Severity::Info), "INFO");
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("iNfO".parse::<Severity>().unwrap(), Severity::Info);
        assert_eq!("WArNING".parse::<Severity>().unwrap(), Severity::Warning);
        assert_eq!("fatal".parse::<Severity>().unwrap(), Severity::Fatal);
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        let err = "wrongLevel".parse::<Severity>().unwrap_err();
        assert!(matches!(
            err,
            LoggingError::InvalidLevel { ref level } if level == "WRONGLEVEL"
        ));
        assert_eq!(err.to_string(), "level WRONGLEVEL invalid");

        // Empty is not a level; defaulting happens at construction time
        assert!("".parse::<Severity>().is_err());
    }

    #[test]
    fn test_default_is_warning() {
        assert_eq!(Severity::default(), Severity::Warning);
    }
}

// SPDX-License-Identifier: Apache-2.0 OR MIT
// Logging macros for format-style messages
//
// The level gate is checked before the message is formatted, so filtered
// calls cost one lock and a comparison.

/// Log a formatted message with debug severity
///
/// # Examples
/// ```
/// use clerk::log_debug;
/// use clerk::logging::{Flags, Logger, MemorySink, Severity};
///
/// let out = MemorySink::new();
/// let logger = Logger::new(out.clone().into(), "", Flags::empty(), Severity::Debug, "--");
/// log_debug!(logger, "loaded {} rules", 3);
/// assert_eq!(out.contents(), "[DEBUG] -- loaded 3 rules\n");
/// ```
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::__log_gated!($logger, Debug, debug, $($arg)+)
    };
}

/// Log a formatted message with info severity
///
/// # Examples
/// ```ignore
/// log_info!(logger, "listening on {}", addr);
/// ```
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::__log_gated!($logger, Info, info, $($arg)+)
    };
}

/// Log a formatted message with warning severity
///
/// # Examples
/// ```ignore
/// log_warning!(logger, "retrying in {}s", delay);
/// ```
#[macro_export]
macro_rules! log_warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::__log_gated!($logger, Warning, warning, $($arg)+)
    };
}

/// Log a formatted message with error severity
///
/// # Examples
/// ```ignore
/// log_error!(logger, "request {} failed", id);
/// ```
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::__log_gated!($logger, Error, error, $($arg)+)
    };
}

/// Log a formatted message with fatal severity and run the exit hook
///
/// The exit hook runs whatever the logger's level is.
///
/// # Examples
/// ```ignore
/// log_fatal!(logger, "cannot bind {}", addr);
/// ```
#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal(&::std::format!($($arg)+))
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log_gated {
    ($logger:expr, $severity:ident, $method:ident, $($arg:tt)+) => {{
        let logger = &$logger;
        if logger.is_emittable($crate::logging::Severity::$severity) {
            logger.$method(&::std::format!($($arg)+));
        }
    }};
}

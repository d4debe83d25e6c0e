// SPDX-License-Identifier: Apache-2.0 OR MIT
// Logger: level gating and line output for one titled source

use super::entry::LineFormat;
use super::{CallSite, Direction, Flags, Result, Severity, Sink, SinkKind, TracedError};
use crate::config::LoggerConfig;
use std::borrow::Cow;
use std::error::Error;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Separator used when none is configured
pub const DEFAULT_SEPARATOR: &str = "--";

/// Environment variable that forces DEBUG on default loggers when set to `1`
pub const DEBUG_ENV: &str = "DEBUG";

/// Exit status passed to the termination hook by `fatal`
pub const FATAL_EXIT_CODE: i32 = 1;

/// Called with the exit status after a fatal log call
pub type ExitHook = Arc<dyn Fn(i32) + Send + Sync>;

/// Terminates the process; the default [`ExitHook`]
pub fn process_exit() -> ExitHook {
    Arc::new(|code| std::process::exit(code))
}

/// Mutable formatting state, always read and written under one lock
struct State {
    separator: String,
    level: Severity,
    flags: Flags,
    sink: Sink,
}

/// A titled, leveled line logger
///
/// All setters take `&self` and return `&Self`, so a logger can be shared
/// behind an `Arc` and reconfigured while other threads log through it.
///
/// ```
/// use clerk::logging::{Flags, Logger, MemorySink, Severity};
///
/// let out = MemorySink::new();
/// let logger = Logger::new(out.clone().into(), "app", Flags::empty(), Severity::Info, "|");
/// logger.set_separator("--").debug("dropped");
/// logger.info("ready");
/// assert_eq!(out.contents(), "(app) -- [INFO] -- ready\n");
/// ```
pub struct Logger {
    title: String,
    original_level: Severity,
    state: Mutex<State>,
    exit: ExitHook,
}

impl Logger {
    /// Create a logger; `level` also becomes the level restored by `reset_level`
    pub fn new(
        sink: Sink,
        title: impl Into<String>,
        flags: Flags,
        level: Severity,
        separator: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            original_level: level,
            state: Mutex::new(State {
                separator: separator.into(),
                level,
                flags,
                sink,
            }),
            exit: process_exit(),
        }
    }

    /// Stdout logger with short call sites and the default separator
    ///
    /// The level is DEBUG when `DEBUG=1` is set in the environment, otherwise
    /// `level`, otherwise WARNING.
    pub fn new_default(title: impl Into<String>, level: Option<Severity>) -> Self {
        let debug_env = std::env::var(DEBUG_ENV).ok();
        let level = default_level(debug_env.as_deref(), level);
        Self::new(
            Sink::stdout(),
            title,
            Flags::SHORT_CALLER,
            level,
            DEFAULT_SEPARATOR,
        )
    }

    /// Build a logger from configuration options
    ///
    /// An unrecognized level name falls back to WARNING. The only failure is
    /// a file direction that cannot be opened.
    pub fn from_config(cfg: &LoggerConfig) -> Result<Self> {
        let sink = Direction::parse(&cfg.direction).open()?;
        let level = config_level(&cfg.level);
        let separator = if cfg.separator.is_empty() {
            DEFAULT_SEPARATOR
        } else {
            cfg.separator.as_str()
        };

        let mut flags = Flags::empty();
        for (enabled, flag) in [
            (cfg.enable_date, Flags::DATE),
            (cfg.enable_time, Flags::TIME),
            (cfg.enable_caller, Flags::CALLER),
            (cfg.enable_short_caller, Flags::SHORT_CALLER),
            (cfg.enable_labels, Flags::LABELS),
        ] {
            if enabled {
                flags.insert(flag);
            }
        }

        Ok(Self::new(sink, cfg.title.as_str(), flags, level, separator))
    }

    /// Replace the termination hook run by `fatal` and `log_fatal`
    pub fn with_exit_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(i32) + Send + Sync + 'static,
    {
        self.exit = Arc::new(hook);
        self
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn level(&self) -> Severity {
        self.lock().level
    }

    /// Numeric rank of the current level
    pub fn level_rank(&self) -> u8 {
        self.level().rank()
    }

    pub fn original_level(&self) -> Severity {
        self.original_level
    }

    pub fn flags(&self) -> Flags {
        self.lock().flags
    }

    pub fn separator(&self) -> String {
        self.lock().separator.clone()
    }

    pub fn sink_kind(&self) -> SinkKind {
        self.lock().sink.kind()
    }

    pub fn set_sink(&self, sink: Sink) -> &Self {
        self.lock().sink = sink;
        self
    }

    /// Turn on the given flags, leaving the others as they are
    pub fn set_flags(&self, flags: Flags) -> &Self {
        self.lock().flags.insert(flags);
        self
    }

    /// Turn off the given flags, leaving the others as they are
    pub fn unset_flags(&self, flags: Flags) -> &Self {
        self.lock().flags.remove(flags);
        self
    }

    pub fn set_separator(&self, separator: impl Into<String>) -> &Self {
        self.lock().separator = separator.into();
        self
    }

    pub fn set_level(&self, level: Severity) -> &Self {
        self.lock().level = level;
        self
    }

    /// Restore the level the logger was constructed with
    pub fn reset_level(&self) -> &Self {
        self.lock().level = self.original_level;
        self
    }

    /// True if a line at `severity` would be written
    #[inline]
    pub fn is_emittable(&self, severity: Severity) -> bool {
        severity >= self.lock().level
    }

    #[track_caller]
    pub fn debug(&self, msg: &str) {
        self.log_at(Severity::Debug, CallSite::capture(), msg);
    }

    #[track_caller]
    pub fn info(&self, msg: &str) {
        self.log_at(Severity::Info, CallSite::capture(), msg);
    }

    #[track_caller]
    pub fn warning(&self, msg: &str) {
        self.log_at(Severity::Warning, CallSite::capture(), msg);
    }

    #[track_caller]
    pub fn error(&self, msg: &str) {
        self.log_at(Severity::Error, CallSite::capture(), msg);
    }

    /// Log at FATAL, then run the termination hook with status 1
    ///
    /// The hook runs whatever the current level is.
    #[track_caller]
    pub fn fatal(&self, msg: &str) {
        self.log_at(Severity::Fatal, CallSite::capture(), msg);
        (self.exit)(FATAL_EXIT_CODE);
    }

    /// Log at an explicit severity. FATAL does not terminate here.
    #[track_caller]
    pub fn log(&self, severity: Severity, msg: &str) {
        self.log_at(severity, CallSite::capture(), msg);
    }

    /// Log with an explicit call site, for records captured elsewhere
    pub fn log_at(&self, severity: Severity, site: CallSite, msg: &str) {
        self.emit(severity, site, |_| Cow::Borrowed(msg));
    }

    /// Log `err` at ERROR, followed by `parts`, all joined by the separator
    ///
    /// A [`TracedError`] also gets its trace appended on the following lines.
    /// Nothing happens when `err` is `None`.
    #[track_caller]
    pub fn log_error(&self, err: Option<&(dyn Error + 'static)>, parts: &[&str]) {
        if let Some(err) = err {
            let site = CallSite::capture();
            let text = ErrorText::new(err);
            self.emit(Severity::Error, site, |separator| {
                Cow::Owned(text.join(parts, separator))
            });
        }
    }

    /// Like [`log_error`](Self::log_error) at FATAL, then terminate
    #[track_caller]
    pub fn log_fatal(&self, err: Option<&(dyn Error + 'static)>, parts: &[&str]) {
        if let Some(err) = err {
            let site = CallSite::capture();
            let text = ErrorText::new(err);
            self.emit(Severity::Fatal, site, |separator| {
                Cow::Owned(text.join(parts, separator))
            });
            (self.exit)(FATAL_EXIT_CODE);
        }
    }

    /// Gate, render and write one line while holding the state lock, so the
    /// line never mixes old and new settings.
    fn emit<'m, F>(&self, severity: Severity, site: CallSite, message: F)
    where
        F: FnOnce(&str) -> Cow<'m, str>,
    {
        let mut state = self.lock();
        if severity < state.level {
            return;
        }

        let msg = message(state.separator.as_str());
        let line = LineFormat {
            title: &self.title,
            separator: &state.separator,
            flags: state.flags,
        }
        .render(severity, &site, &msg, || chrono::Local::now().naive_local());
        state.sink.write_line(&line);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("Logger")
            .field("title", &self.title)
            .field("level", &state.level)
            .field("original_level", &self.original_level)
            .field("flags", &state.flags)
            .field("separator", &state.separator)
            .field("sink", &state.sink)
            .finish()
    }
}

/// Level for a default logger: the debug override, then the requested level,
/// then WARNING
pub(crate) fn default_level(debug_env: Option<&str>, level: Option<Severity>) -> Severity {
    if debug_env == Some("1") {
        Severity::Debug
    } else {
        level.unwrap_or_default()
    }
}

/// Level named in configuration; empty or unknown names give WARNING
pub(crate) fn config_level(level: &str) -> Severity {
    level.parse().unwrap_or_default()
}

/// Error text rendered before the state lock is taken
///
/// An error's `Display` may itself log through the same logger.
struct ErrorText {
    message: String,
    trace: Option<String>,
}

impl ErrorText {
    fn new(err: &(dyn Error + 'static)) -> Self {
        Self {
            message: err.to_string(),
            trace: err.downcast_ref::<TracedError>().map(TracedError::trace),
        }
    }

    fn join(&self, parts: &[&str], separator: &str) -> String {
        let mut msg = self.message.clone();
        for part in parts {
            msg.push(' ');
            msg.push_str(separator);
            msg.push(' ');
            msg.push_str(part);
        }
        if let Some(trace) = &self.trace {
            msg.push('\n');
            msg.push_str(trace);
        }
        msg
    }
}

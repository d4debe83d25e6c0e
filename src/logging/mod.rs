// SPDX-License-Identifier: Apache-2.0 OR MIT
// Leveled line logging with configurable prefixes
//
// - Logger: level gate, prefix rendering, exit hook for fatal calls
// - Registry: named loggers with bulk level control
// - TracedError: errors carrying the call sites they were traced through

mod entry;
mod error;
mod flags;
mod logger;
#[macro_use]
mod macros;
mod registry;
mod severity;
mod sink;
mod trace;

// Public exports
pub use entry::{CallSite, EMPTY_MESSAGE, UNKNOWN_SOURCE};
pub use error::{LoggingError, Result};
pub use flags::Flags;
pub use logger::{process_exit, ExitHook, Logger, DEBUG_ENV, DEFAULT_SEPARATOR, FATAL_EXIT_CODE};
pub use registry::Registry;
pub use severity::Severity;
pub use sink::{Direction, MemorySink, Sink, SinkKind};
pub use trace::{trace, ResultExt, TracedError};

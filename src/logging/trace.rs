// SPDX-License-Identifier: Apache-2.0 OR MIT
// Errors decorated with the call sites they passed through

use super::CallSite;
use std::error::Error;
use std::fmt;

type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// An error wrapped with the call site where it was traced
///
/// Wrapping composes: tracing a `TracedError` again keeps the inner frames
/// behind the new one, and the chain ends with the original error's message.
///
/// ```
/// use clerk::logging::TracedError;
///
/// let err = TracedError::new("disk full");
/// let err = TracedError::new(err);
/// assert_eq!(err.to_string(), "disk full");
/// assert_eq!(err.frames().len(), 3);
/// ```
pub struct TracedError {
    frame: CallSite,
    code: Option<i32>,
    inner: Inner,
}

enum Inner {
    Plain(BoxError),
    Traced(Box<TracedError>),
}

impl TracedError {
    /// Wrap `err`, recording the caller's location
    #[track_caller]
    pub fn new<E>(err: E) -> Self
    where
        E: Into<BoxError>,
    {
        let inner = match err.into().downcast::<TracedError>() {
            Ok(traced) => Inner::Traced(traced),
            Err(plain) => Inner::Plain(plain),
        };
        TracedError {
            frame: CallSite::capture(),
            code: None,
            inner,
        }
    }

    pub fn with_code(mut self, code: i32) -> Self {
        self.code = Some(code);
        self
    }

    pub fn set_code(&mut self, code: i32) {
        self.code = Some(code);
    }

    /// This wrapper's code, or else the nearest traced inner error's code
    pub fn code(&self) -> Option<i32> {
        match (&self.code, &self.inner) {
            (Some(code), _) => Some(*code),
            (None, Inner::Traced(inner)) => inner.code(),
            (None, Inner::Plain(_)) => None,
        }
    }

    /// Location this layer was traced at
    pub fn call_site(&self) -> CallSite {
        self.frame
    }

    /// Outermost frame first, ending with `error occurred: <message>`
    ///
    /// Each frame is `file:line` only. `#[track_caller]` exposes no function
    /// name, so frames carry no `<func>` line.
    pub fn frames(&self) -> Vec<String> {
        let mut frames = Vec::new();
        let mut current = self;
        loop {
            frames.push(current.frame.to_string());
            match &current.inner {
                Inner::Traced(inner) => current = inner.as_ref(),
                Inner::Plain(err) => {
                    frames.push(format!("error occurred: {}", err));
                    return frames;
                }
            }
        }
    }

    /// Multi-line trace, one tab-indented frame per line
    pub fn trace(&self) -> String {
        self.frames()
            .iter()
            .map(|frame| format!("\t{}", frame))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The innermost, untraced error
    pub fn root(&self) -> &(dyn Error + Send + Sync + 'static) {
        match &self.inner {
            Inner::Plain(err) => err.as_ref(),
            Inner::Traced(inner) => inner.root(),
        }
    }
}

impl fmt::Display for TracedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.root(), f)
    }
}

impl fmt::Debug for TracedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TracedError")
            .field("message", &self.root().to_string())
            .field("code", &self.code())
            .field("frames", &self.frames())
            .finish()
    }
}

impl Error for TracedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.inner {
            Inner::Plain(err) => Some(err.as_ref()),
            Inner::Traced(inner) => Some(inner.as_ref()),
        }
    }
}

/// Trace an optional error. `None` stays `None` rather than becoming a
/// wrapper around nothing.
#[track_caller]
pub fn trace<E>(err: Option<E>) -> Option<TracedError>
where
    E: Into<BoxError>,
{
    match err {
        Some(err) => Some(TracedError::new(err)),
        None => None,
    }
}

/// Adds `.traced()` to results; `Ok` values pass through untouched
pub trait ResultExt<T> {
    fn traced(self) -> Result<T, TracedError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<BoxError>,
{
    #[track_caller]
    fn traced(self) -> Result<T, TracedError> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(TracedError::new(err)),
        }
    }
}

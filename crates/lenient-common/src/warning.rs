//! Scanner warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! [`WarningSink`] routes diagnostics through it.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use crate::diagnostic::{Diagnostic, DiagnosticCode, DiagnosticSink};
use crate::position::Position;

/// ANSI color codes for terminal output
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Print a warning once per unique `(component, message)` pair.
///
/// Returns true if the warning was printed, false if it was a repeat.
///
/// # Example
/// ```ignore
/// warn_once("element", "1:5: [duplicate-attribute] attribute name \"a\" has already been declared");
/// ```
pub fn warn_once(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    let should_print = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if should_print {
        eprintln!("{YELLOW}[lenient {component}] ⚠ {message}{RESET}");
    }
    should_print
}

/// Clear all recorded warnings (call before parsing a new document)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}

/// A [`DiagnosticSink`] that prints every diagnostic with [`warn_once`].
///
/// Optionally forwards to another sink, so diagnostics can be logged and
/// collected at the same time.
#[derive(Default)]
pub struct WarningSink<'a> {
    inner: Option<&'a mut dyn DiagnosticSink>,
}

impl<'a> WarningSink<'a> {
    /// A sink that only prints.
    #[must_use]
    pub const fn new() -> Self {
        Self { inner: None }
    }

    /// A sink that prints, then forwards to `inner`.
    #[must_use]
    pub fn forwarding_to(inner: &'a mut dyn DiagnosticSink) -> Self {
        Self { inner: Some(inner) }
    }
}

impl DiagnosticSink for WarningSink<'_> {
    fn report(&mut self, code: DiagnosticCode, position: Position, args: Vec<String>) {
        let diagnostic = Diagnostic::new(code, position, args);
        let _ = warn_once(code.component(), &diagnostic.to_string());
        if let Some(inner) = self.inner.as_mut() {
            inner.report(diagnostic.code, diagnostic.position, diagnostic.args);
        }
    }
}

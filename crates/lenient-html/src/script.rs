//! Hook for evaluating script processing instructions.
//!
//! `<?js ...?>` and `<?javascript ...?>` hand their content to a
//! [`ScriptEvaluator`] when one is configured. Without one they stay plain
//! processing instructions.

use lenient_dom::NodeType;
use thiserror::Error;

/// Processing-instruction targets (including the `?`) that run scripts.
pub const SCRIPT_TARGETS: &[&str] = &["?js", "?javascript"];

/// True if `target` names a script processing instruction.
#[must_use]
pub fn is_script_target(target: &str) -> bool {
    SCRIPT_TARGETS.contains(&target)
}

/// A failed script evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("script evaluation failed: {trace}")]
pub struct ScriptFailure {
    /// Human-readable error trace, stored verbatim in the error node.
    pub trace: String,
}

impl ScriptFailure {
    /// Wrap an error trace.
    #[must_use]
    pub fn new(trace: impl Into<String>) -> Self {
        Self {
            trace: trace.into(),
        }
    }
}

/// Evaluates the content of a script processing instruction.
///
/// On success the returned nodes become children of the processing
/// instruction. On failure the scanner replaces it with a
/// `script_pi_error` element holding the trace.
pub trait ScriptEvaluator {
    /// Run `content`. `source_id` names the document, for error traces.
    ///
    /// # Errors
    ///
    /// Returns a [`ScriptFailure`] if the script could not be run.
    fn evaluate(&mut self, content: &str, source_id: &str) -> Result<Vec<NodeType>, ScriptFailure>;
}

impl<F> ScriptEvaluator for F
where
    F: FnMut(&str, &str) -> Result<Vec<NodeType>, ScriptFailure>,
{
    fn evaluate(&mut self, content: &str, source_id: &str) -> Result<Vec<NodeType>, ScriptFailure> {
        self(content, source_id)
    }
}

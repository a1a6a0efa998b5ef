//! JavaScript evaluation for `<?js ...?>` processing instructions.
//!
//! Uses [Boa](https://boajs.dev/) as the JavaScript engine.
//!
//! # Example
//!
//! ```ignore
//! use lenient_common::DiagnosticLog;
//! use lenient_html::HtmlParser;
//! use lenient_js::BoaEvaluator;
//!
//! let mut evaluator = BoaEvaluator::new()?;
//! let mut log = DiagnosticLog::new();
//! let tree = HtmlParser::new("<?js 6 * 7?>", &mut log)
//!     .with_evaluator(&mut evaluator)
//!     .run();
//! ```
//!
//! A completion value other than `undefined` becomes a single text node
//! holding its string conversion. Thrown exceptions and syntax errors become
//! a [`ScriptFailure`] carrying the engine's error text.
//!
//! All instructions evaluated by one [`BoaEvaluator`] share a global object,
//! so a variable declared in one is visible to the next.

mod globals;

use boa_engine::{Context, JsError, JsResult, JsValue, Source};
use lenient_dom::NodeType;
use lenient_html::{ScriptEvaluator, ScriptFailure};

/// A [`ScriptEvaluator`] backed by a Boa context.
pub struct BoaEvaluator {
    /// The Boa JavaScript context.
    context: Context,
}

impl BoaEvaluator {
    /// Create an evaluator with the `console` global registered.
    ///
    /// # Errors
    ///
    /// Returns a `JsError` if the globals could not be registered.
    pub fn new() -> JsResult<Self> {
        let mut context = Context::default();
        globals::register_globals(&mut context)?;
        Ok(Self { context })
    }

    /// Execute JavaScript source code and return its completion value.
    ///
    /// # Errors
    ///
    /// Returns `JsError` if the code contains syntax errors or throws an
    /// uncaught exception.
    pub fn execute(&mut self, source: &str) -> Result<JsValue, JsError> {
        self.context.eval(Source::from_bytes(source))
    }
}

impl ScriptEvaluator for BoaEvaluator {
    fn evaluate(&mut self, content: &str, source_id: &str) -> Result<Vec<NodeType>, ScriptFailure> {
        let failure = |error: JsError| ScriptFailure::new(format!("{source_id}: {error}"));

        let value = self.execute(content).map_err(failure)?;
        if value.is_undefined() {
            return Ok(Vec::new());
        }
        let text = value
            .to_string(&mut self.context)
            .map_err(failure)?
            .to_std_string_escaped();
        Ok(vec![NodeType::Text(text)])
    }
}

//! Global objects available to evaluated scripts.
//!
//! # Implemented
//!
//! - `console` - `debug`, `log`, `info`, `warn` and `error`
//!
//! # Not Implemented
//!
//! - `document` - scripts cannot see or change the tree they are embedded in

mod console;

use boa_engine::{Context, JsResult};

/// Register all global objects on the context.
///
/// Called once per evaluator.
pub fn register_globals(context: &mut Context) -> JsResult<()> {
    console::register_console(context)
}

//! Lenient HTML scanner and tree builder.
//!
//! # Scope
//!
//! This crate implements:
//! - **Cursor** - a forward-only caret with line/column tracking
//! - **Node scanners** - element, CDATA, doctype, comment, processing
//!   instruction and text, tried in a fixed priority order
//!   - Attribute parsing with duplicate, quoting and spacing diagnostics
//!   - Raw-text bodies for `script`, `style`, `textarea` and `title`
//!   - Explicit and implicit closing of open elements
//! - **Tree builder** - a stack of open elements over the scanners
//!
//! Scanning never fails. Malformed input is recovered from and every anomaly
//! is reported once to a [`DiagnosticSink`](lenient_common::DiagnosticSink).
//!
//! # Not Implemented
//!
//! - Character reference decoding (entities are kept verbatim)
//! - Serializing a tree back to HTML
//! - Namespaces

/// Forward-only read cursor.
pub mod cursor;
/// Tree construction and tree dumps.
pub mod parser;
/// Node scanners.
pub mod scanner;
/// Script processing-instruction hook.
pub mod script;
/// Void, raw-text and implicit-close tables.
pub mod tables;

pub use cursor::Cursor;
pub use parser::{HtmlParser, ParserOptions, format_tree, parse, print_tree};
pub use scanner::{Closing, HtmlScanner, NodeScanner, Scan};
pub use scanner::pi::SCRIPT_ERROR_TAG;
pub use script::{SCRIPT_TARGETS, ScriptEvaluator, ScriptFailure};
pub use tables::ElementKind;

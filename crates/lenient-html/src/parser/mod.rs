//! Tree builder module.

/// Stack-of-open-elements tree construction.
pub mod core;
/// Indented tree dumps.
pub mod print;

pub use self::core::{HtmlParser, ParserOptions, parse};
pub use self::print::{format_tree, print_tree};

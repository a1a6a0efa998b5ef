//! Node scanners.
//!
//! One module per markup construct, all extending [`HtmlScanner`].

/// `<![CDATA[ ... ]]>` sections.
pub mod cdata;
/// Comments and bogus comments.
pub mod comment;
/// Scanner state, dispatch order and result types.
pub mod core;
/// `<!doctype ...>` declarations.
pub mod doctype;
/// Opening tags, attributes, raw text and closing detection.
pub mod element;
/// Processing instructions and the script hook.
pub mod pi;
/// Plain text fallback.
pub mod text;

pub use self::core::{Closing, DEFAULT_SOURCE_ID, HtmlScanner, NodeScanner, Scan};

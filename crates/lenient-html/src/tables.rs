//! Element classification and implicit-close tables.
//!
//! All names are lower case; callers lower-case tag names before lookup.

use strum_macros::Display;

/// Elements that never have content or a closing tag.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "basefont", "br", "col", "frame", "hr", "img", "input", "isindex", "link",
    "meta", "param", "command", "embed", "keygen", "source", "track", "wbr",
];

/// Elements whose body is kept verbatim up to the matching closing tag.
pub const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style", "textarea", "title"];

const P_CLOSERS: &[&str] = &[
    "address",
    "article",
    "aside",
    "blockquote",
    "dir",
    "div",
    "dl",
    "fieldset",
    "footer",
    "form",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "header",
    "hgroup",
    "hr",
    "main",
    "menu",
    "nav",
    "ol",
    "p",
    "pre",
    "section",
    "table",
    "ul",
];

/// Open element -> opening tags that end it.
pub const AUTO_CLOSE: &[(&str, &[&str])] = &[("p", P_CLOSERS), ("a", &["a"])];

/// Open element -> opening tags that end it while it has no element children.
pub const AUTO_CLOSE_FIRST: &[(&str, &[&str])] = &[
    ("li", &["li"]),
    ("dt", &["dt", "dd"]),
    ("dd", &["dt", "dd"]),
    ("rt", &["rt", "rp"]),
    ("rp", &["rt", "rp"]),
    ("optgroup", &["optgroup"]),
    ("option", &["optgroup", "option"]),
    ("thead", &["tbody", "tfoot"]),
    ("tbody", &["tbody", "tfoot"]),
    ("tfoot", &["tbody"]),
    ("tr", &["tr"]),
    ("td", &["td", "th"]),
    ("th", &["td", "th"]),
];

/// How an opening tag is scanned, decided by its name alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ElementKind {
    /// No children, no closing tag.
    Void,
    /// Body kept verbatim.
    RawText,
    /// An ordinary container.
    Normal,
}

impl ElementKind {
    /// Classify a lower-cased tag name.
    #[must_use]
    pub fn of(tag_name: &str) -> Self {
        if VOID_ELEMENTS.contains(&tag_name) {
            Self::Void
        } else if RAW_TEXT_ELEMENTS.contains(&tag_name) {
            Self::RawText
        } else {
            Self::Normal
        }
    }
}

fn lookup(table: &'static [(&'static str, &'static [&'static str])], name: &str) -> &'static [&'static str] {
    table
        .iter()
        .find(|(open, _)| *open == name)
        .map_or(&[], |(_, closers)| closers)
}

/// True if an opening `<upcoming>` tag ends an open `<open>` element.
#[must_use]
pub fn closes_sibling(open: &str, upcoming: &str) -> bool {
    lookup(AUTO_CLOSE, open).contains(&upcoming)
}

/// True if an opening `<upcoming>` tag ends an open `<open>` element that
/// has no element children yet.
#[must_use]
pub fn closes_first_child(open: &str, upcoming: &str) -> bool {
    lookup(AUTO_CLOSE_FIRST, open).contains(&upcoming)
}

//! Diagnostics emitted while scanning.
//!
//! Every anomaly the scanners recover from is reported exactly once through a
//! [`DiagnosticSink`]. Reporting never alters control flow: a parse always
//! completes and the diagnostics stream is purely informational.

use core::fmt;

use serde::Serialize;
use strum_macros::{Display, EnumIter, IntoStaticStr};

use crate::position::Position;

/// The closed set of recoverable anomalies.
///
/// Codes render in kebab-case, e.g. `DuplicateAttribute` displays as
/// `duplicate-attribute`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr, Serialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticCode {
    // ----- comment -----
    /// `<!` not followed by `--`.
    BogusCommentStarted,
    /// A terminator (`-->`, `>`, `]]>`) was never found.
    CloseNotFound,
    /// A bogus comment was terminated by `>`.
    CloseFound,
    /// `--` inside a comment body.
    EmbeddedDoubleHyphen,

    // ----- processing instruction -----
    /// `<?` with no target boundary before end of input.
    IgnoringProcessingInstruction,
    /// A processing instruction without `?>`.
    StartedButNotClosed,
    /// The script evaluation hook failed.
    EmbeddedScriptError,

    // ----- element -----
    /// A `<` inside an opening tag.
    StrayAngleBracket,
    /// A raw-text element without its closing tag.
    RawTextCloseNotFound,
    /// `/` in an opening tag not immediately followed by `>`.
    UnexpectedSlash,
    /// `/>` used on an element that is not void.
    SelfClosingOnNonVoid,
    /// Two attributes with nothing between them.
    MissingSpaceBetweenAttributes,
    /// A quote or `=` inside an unquoted attribute value.
    DisallowedCharacterInUnquotedValue,
    /// An unquoted attribute value terminated by `/`.
    SlashInUnquotedValue,
    /// A quoted attribute value whose closing quote is missing.
    UnterminatedQuotedValue,
    /// The same attribute name declared twice on one element.
    DuplicateAttribute,

    // ----- tree builder -----
    /// An element left open when its parent or the document ended.
    UnclosedElement,
    /// A closing tag with no matching open element.
    UnmatchedClosingTag,
}

impl DiagnosticCode {
    /// Name of the component that emits this code.
    ///
    /// Used as the component label of terminal warnings.
    #[must_use]
    pub const fn component(self) -> &'static str {
        match self {
            Self::BogusCommentStarted
            | Self::CloseNotFound
            | Self::CloseFound
            | Self::EmbeddedDoubleHyphen => "comment",
            Self::IgnoringProcessingInstruction
            | Self::StartedButNotClosed
            | Self::EmbeddedScriptError => "pi",
            Self::StrayAngleBracket
            | Self::RawTextCloseNotFound
            | Self::UnexpectedSlash
            | Self::SelfClosingOnNonVoid
            | Self::MissingSpaceBetweenAttributes
            | Self::DisallowedCharacterInUnquotedValue
            | Self::SlashInUnquotedValue
            | Self::UnterminatedQuotedValue
            | Self::DuplicateAttribute => "element",
            Self::UnclosedElement | Self::UnmatchedClosingTag => "tree",
        }
    }

    /// Message template. `{0}`, `{1}`, ... are replaced by the diagnostic's
    /// arguments.
    const fn template(self) -> &'static str {
        match self {
            Self::BogusCommentStarted => "bogus comment started",
            Self::CloseNotFound => "`{0}` not found",
            Self::CloseFound => "`>` found",
            Self::EmbeddedDoubleHyphen => "`--` in comment opened at {0}",
            Self::IgnoringProcessingInstruction => "ignoring processing instruction",
            Self::StartedButNotClosed => "`<{0}` was started but `?>` was not found",
            Self::EmbeddedScriptError => "errors in `<{0}` processing instruction",
            Self::StrayAngleBracket => "element discarded due to `<` at {0}",
            Self::RawTextCloseNotFound => "`RawText` closing tag `</{0}>` not found",
            Self::UnexpectedSlash => "`/` not immediately followed by `>`",
            Self::SelfClosingOnNonVoid => "self-closing syntax (`/>`) used in non-void element",
            Self::MissingSpaceBetweenAttributes => "no space between attributes",
            Self::DisallowedCharacterInUnquotedValue => "`{0}` found in unquoted attribute value",
            Self::SlashInUnquotedValue => "`/` found in unquoted attribute value",
            Self::UnterminatedQuotedValue => "assuming quoted attribute to close at {0}",
            Self::DuplicateAttribute => "attribute name \"{0}\" has already been declared",
            Self::UnclosedElement => "element `<{0}>` was never closed",
            Self::UnmatchedClosingTag => "closing tag `</{0}>` does not match any open element",
        }
    }
}

/// A single reported anomaly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// What went wrong.
    pub code: DiagnosticCode,
    /// Where it went wrong (or the start of the construct it refers to).
    pub position: Position,
    /// Message arguments, in template order.
    pub args: Vec<String>,
}

impl Diagnostic {
    /// Create a diagnostic.
    #[must_use]
    pub const fn new(code: DiagnosticCode, position: Position, args: Vec<String>) -> Self {
        Self {
            code,
            position,
            args,
        }
    }

    /// Render the human-readable message, without position or code.
    #[must_use]
    pub fn message(&self) -> String {
        let mut message = self.code.template().to_string();
        for (index, arg) in self.args.iter().enumerate() {
            message = message.replace(&format!("{{{index}}}"), arg);
        }
        message
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: [{}] {}", self.position, self.code, self.message())
    }
}

/// Receiver of diagnostics.
///
/// Fire-and-forget: implementations must not influence scanning.
pub trait DiagnosticSink {
    /// Record one anomaly.
    fn report(&mut self, code: DiagnosticCode, position: Position, args: Vec<String>);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn report(&mut self, code: DiagnosticCode, position: Position, args: Vec<String>) {
        (**self).report(code, position, args);
    }
}

/// A sink that keeps every diagnostic in report order.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticLog {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticLog {
    /// Create an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    /// All diagnostics, in the order they were reported.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Number of diagnostics carrying `code`.
    #[must_use]
    pub fn count(&self, code: DiagnosticCode) -> usize {
        self.diagnostics.iter().filter(|d| d.code == code).count()
    }

    /// Codes of all diagnostics, in report order.
    #[must_use]
    pub fn codes(&self) -> Vec<DiagnosticCode> {
        self.diagnostics.iter().map(|d| d.code).collect()
    }

    /// Number of diagnostics recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// True if nothing was reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

impl DiagnosticSink for DiagnosticLog {
    fn report(&mut self, code: DiagnosticCode, position: Position, args: Vec<String>) {
        self.diagnostics.push(Diagnostic::new(code, position, args));
    }
}

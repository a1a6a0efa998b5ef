//! Scanner state and dispatch.
//!
//! The individual scanners live in sibling modules as further `impl` blocks
//! on [`HtmlScanner`]. Each one either declines, leaving the caret where it
//! was and reporting nothing, or claims the input at the caret and returns a
//! [`Scan`].

use lenient_common::{DiagnosticCode, DiagnosticSink, Position};
use lenient_dom::Fragment;
use strum_macros::Display;

use crate::cursor::Cursor;
use crate::script::ScriptEvaluator;

/// Source identifier used when none is given.
pub const DEFAULT_SOURCE_ID: &str = "<string>";

/// Outcome of a scanner that claimed the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scan {
    /// The node is finished; the caret is past its last character.
    Complete(Fragment),
    /// An element that stays open and will receive children.
    Open(Fragment),
}

impl Scan {
    /// Consume the scan, returning the fragment.
    #[must_use]
    pub fn into_fragment(self) -> Fragment {
        match self {
            Self::Complete(fragment) | Self::Open(fragment) => fragment,
        }
    }
}

/// How an open element was ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Closing {
    /// `</name>` was consumed. Holds the position of its `<`.
    Explicit(Position),
    /// An upcoming opening tag ends the element. Nothing was consumed.
    Implicit(Position),
    /// The element stays open.
    NotClosed,
}

/// The node scanners, tried in [`NodeScanner::PRIORITY`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum NodeScanner {
    /// `<name ...>`
    Element,
    /// `<![CDATA[ ... ]]>`
    CData,
    /// `<!doctype ...>`
    DocumentType,
    /// `<!-- ... -->` and bogus `<! ... >`
    Comment,
    /// `<?target ...?>`
    ProcessingInstruction,
    /// Anything else, up to the next `<`.
    Text,
}

impl NodeScanner {
    /// Dispatch order. The first scanner that claims the input wins, so
    /// `<![CDATA[` must be tried before the bogus-comment fallback and
    /// `Text` always comes last.
    pub const PRIORITY: [Self; 6] = [
        Self::Element,
        Self::CData,
        Self::DocumentType,
        Self::Comment,
        Self::ProcessingInstruction,
        Self::Text,
    ];
}

/// Scans markup constructs at a forward-only caret.
///
/// Holds the [`Cursor`], the sink every anomaly is reported to, and the
/// optional script hook.
pub struct HtmlScanner<'a> {
    pub(crate) cursor: Cursor<'a>,
    sink: &'a mut dyn DiagnosticSink,
    pub(crate) evaluator: Option<&'a mut dyn ScriptEvaluator>,
    pub(crate) source_id: String,
}

impl<'a> HtmlScanner<'a> {
    /// Create a scanner over `text` reporting into `sink`.
    #[must_use]
    pub fn new(text: &'a str, sink: &'a mut dyn DiagnosticSink) -> Self {
        Self {
            cursor: Cursor::new(text),
            sink,
            evaluator: None,
            source_id: DEFAULT_SOURCE_ID.to_string(),
        }
    }

    /// Name the document for script error traces.
    #[must_use]
    pub fn with_source_id(mut self, source_id: impl Into<String>) -> Self {
        self.source_id = source_id.into();
        self
    }

    /// Evaluate `<?js` and `<?javascript` instructions with `evaluator`.
    #[must_use]
    pub fn with_evaluator(mut self, evaluator: &'a mut dyn ScriptEvaluator) -> Self {
        self.evaluator = Some(evaluator);
        self
    }

    /// The read cursor.
    #[must_use]
    pub const fn cursor(&self) -> &Cursor<'a> {
        &self.cursor
    }

    /// True once every character has been consumed.
    #[must_use]
    pub const fn at_end(&self) -> bool {
        self.cursor.at_end()
    }

    /// Run one scanner at the caret. `None` means it declined.
    pub fn try_start(&mut self, scanner: NodeScanner) -> Option<Scan> {
        if self.cursor.at_end() {
            return None;
        }
        match scanner {
            NodeScanner::Element => self.scan_element(),
            NodeScanner::CData => self.scan_cdata(),
            NodeScanner::DocumentType => self.scan_doctype(),
            NodeScanner::Comment => self.scan_comment(),
            NodeScanner::ProcessingInstruction => self.scan_processing_instruction(),
            NodeScanner::Text => self.scan_text(),
        }
    }

    /// Scan the next node, trying each scanner in priority order.
    ///
    /// Returns `None` only at end of input.
    pub fn next_node(&mut self) -> Option<(NodeScanner, Scan)> {
        NodeScanner::PRIORITY
            .into_iter()
            .find_map(|scanner| self.try_start(scanner).map(|scan| (scanner, scan)))
    }

    /// Report an anomaly.
    pub(crate) fn report(&mut self, code: DiagnosticCode, position: Position, args: Vec<String>) {
        self.sink.report(code, position, args);
    }
}

//! Tree construction over the node scanners.
//!
//! The builder keeps a stack of open elements. Before each scan it asks the
//! innermost open element whether it ends at the caret; otherwise it lets the
//! scanners claim the next node and appends it to that element.

use lenient_common::{DiagnosticCode, DiagnosticLog, DiagnosticSink};
use lenient_dom::{DomTree, Fragment, NodeId, NodeType};

use crate::scanner::{Closing, DEFAULT_SOURCE_ID, HtmlScanner, Scan};
use crate::script::ScriptEvaluator;

/// Knobs for [`HtmlParser`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserOptions {
    /// Name of the document, passed to the script evaluator.
    pub source_id: String,
    /// Keep closing tags that match no open element as text nodes. When
    /// false they are reported and dropped.
    pub keep_unmatched_closing_tags: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            source_id: DEFAULT_SOURCE_ID.to_string(),
            keep_unmatched_closing_tags: true,
        }
    }
}

impl ParserOptions {
    /// Set the document name.
    #[must_use]
    pub fn with_source_id(mut self, source_id: impl Into<String>) -> Self {
        self.source_id = source_id.into();
        self
    }

    /// Keep or drop unmatched closing tags.
    #[must_use]
    pub const fn with_keep_unmatched_closing_tags(mut self, keep: bool) -> Self {
        self.keep_unmatched_closing_tags = keep;
        self
    }
}

/// Builds a [`DomTree`] from text. Never fails: every anomaly is reported to
/// the sink and scanning continues.
///
/// # Example
///
/// ```
/// use lenient_common::DiagnosticLog;
/// use lenient_html::HtmlParser;
///
/// let mut log = DiagnosticLog::new();
/// let tree = HtmlParser::new("<p>one<p>two", &mut log).run();
/// assert_eq!(tree.children(tree.root()).len(), 2);
/// assert_eq!(log.len(), 1);
/// ```
pub struct HtmlParser<'a> {
    scanner: HtmlScanner<'a>,
    tree: DomTree,
    /// Open elements, innermost last.
    open: Vec<NodeId>,
    options: ParserOptions,
}

impl<'a> HtmlParser<'a> {
    /// Create a parser over `text` reporting into `sink`.
    #[must_use]
    pub fn new(text: &'a str, sink: &'a mut dyn DiagnosticSink) -> Self {
        Self {
            scanner: HtmlScanner::new(text, sink),
            tree: DomTree::new(),
            open: Vec::new(),
            options: ParserOptions::default(),
        }
    }

    /// Replace the parser options.
    #[must_use]
    pub fn with_options(mut self, options: ParserOptions) -> Self {
        self.scanner = self.scanner.with_source_id(options.source_id.clone());
        self.options = options;
        self
    }

    /// Evaluate `<?js` and `<?javascript` instructions with `evaluator`.
    #[must_use]
    pub fn with_evaluator(mut self, evaluator: &'a mut dyn ScriptEvaluator) -> Self {
        self.scanner = self.scanner.with_evaluator(evaluator);
        self
    }

    /// Consume the whole input and return the tree.
    #[must_use]
    pub fn run(mut self) -> DomTree {
        while !self.scanner.at_end() {
            if self.close_innermost() {
                continue;
            }
            if self.scanner.closing_tag().is_some() {
                self.handle_closing_tag();
                continue;
            }
            let Some((_, scan)) = self.scanner.next_node() else {
                break;
            };
            match scan {
                Scan::Open(fragment) => {
                    let id = self.append(fragment);
                    self.open.push(id);
                }
                Scan::Complete(fragment) => {
                    let _ = self.append(fragment);
                }
            }
        }

        while let Some(id) = self.open.pop() {
            self.report_unclosed(id);
        }
        self.tree
    }

    /// The element new nodes are appended to.
    fn current_parent(&self) -> NodeId {
        self.open.last().copied().unwrap_or(NodeId::ROOT)
    }

    fn append(&mut self, fragment: Fragment) -> NodeId {
        let parent = self.current_parent();
        self.tree.append_fragment(parent, fragment)
    }

    /// Pop the innermost open element if it ends at the caret.
    fn close_innermost(&mut self) -> bool {
        let Some(&innermost) = self.open.last() else {
            return false;
        };
        match self.scanner.close(&self.tree, innermost) {
            Closing::Explicit(_) | Closing::Implicit(_) => {
                let _ = self.open.pop();
                true
            }
            Closing::NotClosed => false,
        }
    }

    /// A closing tag the innermost element did not accept.
    ///
    /// If an outer element has that name, the innermost one is popped as
    /// unclosed and the tag is retried against its parent. Otherwise the tag
    /// matches nothing.
    fn handle_closing_tag(&mut self) {
        let Some((name, close)) = self.scanner.closing_tag() else {
            return;
        };
        let matches_open = self
            .open
            .iter()
            .any(|&id| self.tree.tag_name(id) == Some(name.as_str()));
        if matches_open {
            if let Some(id) = self.open.pop() {
                self.report_unclosed(id);
            }
            return;
        }

        let position = self.scanner.cursor.position();
        let raw = self
            .scanner
            .cursor
            .slice(self.scanner.cursor.caret(), close + 1)
            .to_string();
        self.scanner.cursor.advance(close + 1);
        self.scanner
            .report(DiagnosticCode::UnmatchedClosingTag, position, vec![name]);
        if self.options.keep_unmatched_closing_tags {
            let _ = self.append(Fragment::leaf(NodeType::Text(raw), position));
        }
    }

    fn report_unclosed(&mut self, id: NodeId) {
        let (Some(name), Some(position)) = (self.tree.tag_name(id), self.tree.position(id)) else {
            return;
        };
        let name = name.to_string();
        self.scanner
            .report(DiagnosticCode::UnclosedElement, position, vec![name]);
    }
}

/// Parse `text` with default options, collecting diagnostics.
#[must_use]
pub fn parse(text: &str) -> (DomTree, DiagnosticLog) {
    let mut log = DiagnosticLog::new();
    let tree = HtmlParser::new(text, &mut log).run();
    (tree, log)
}

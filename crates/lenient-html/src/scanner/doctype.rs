//! `<!doctype ...>` declarations.

use lenient_common::DiagnosticCode;
use lenient_dom::{Fragment, NodeType};

use super::{HtmlScanner, Scan};
use crate::cursor::is_space;

const KEYWORD: &str = "<!doctype";

impl HtmlScanner<'_> {
    /// The keyword matches case-insensitively and must be followed by
    /// whitespace. Content is everything after that whitespace character up
    /// to the first `>`.
    pub(crate) fn scan_doctype(&mut self) -> Option<Scan> {
        let caret = self.cursor.caret();
        if !self.cursor.matches_at_ignore_case(caret, KEYWORD) {
            return None;
        }
        if !self.cursor.byte_at(caret + KEYWORD.len()).is_some_and(is_space) {
            return None;
        }

        let position = self.cursor.position();
        let body = caret + KEYWORD.len() + 1;
        let content = match self.cursor.find(">", body) {
            Some(close) => {
                let content = self.cursor.slice(body, close);
                self.cursor.advance(close + 1);
                content
            }
            None => {
                self.report(DiagnosticCode::CloseNotFound, position, vec![">".to_string()]);
                let content = self.cursor.slice(body, self.cursor.end());
                self.cursor.advance_to_end();
                content
            }
        };

        Some(Scan::Complete(Fragment::leaf(
            NodeType::DocumentType(content.to_string()),
            position,
        )))
    }
}

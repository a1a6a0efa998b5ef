//! `<!-- ... -->` comments.
//!
//! A comment's content never contains `--`: every embedded `--` is rewritten
//! to `- ` and reported. `<!` without `--` starts a bogus comment that runs to
//! the next `>`.

use lenient_common::DiagnosticCode;
use lenient_dom::{Fragment, NodeType};

use super::{HtmlScanner, Scan};

const OPEN: &str = "<!--";
const CLOSE: &str = "-->";
const DOUBLE_HYPHEN: &str = "--";

impl HtmlScanner<'_> {
    pub(crate) fn scan_comment(&mut self) -> Option<Scan> {
        if !self.cursor.starts_with("<!") {
            return None;
        }
        if !self.cursor.starts_with(OPEN) {
            return Some(self.scan_bogus_comment());
        }

        let position = self.cursor.position();
        let body = self.cursor.caret() + OPEN.len();
        let Some(mut index) = self.cursor.find(DOUBLE_HYPHEN, body) else {
            self.report(DiagnosticCode::CloseNotFound, position, vec![CLOSE.to_string()]);
            let content = self.cursor.slice(body, self.cursor.end()).to_string();
            self.cursor.advance_to_end();
            return Some(Scan::Complete(Fragment::leaf(
                NodeType::Comment(content),
                position,
            )));
        };

        let mut content = self.cursor.slice(body, index).to_string();
        while !self.cursor.matches_at(index, CLOSE) {
            let at = self.cursor.position_of(index);
            self.report(
                DiagnosticCode::EmbeddedDoubleHyphen,
                at,
                vec![position.to_string()],
            );
            content.push_str("- ");
            match self.cursor.find(DOUBLE_HYPHEN, index + 1) {
                Some(next) => {
                    content.push_str(self.cursor.slice(index + 2, next));
                    index = next;
                }
                None => {
                    content.push_str(self.cursor.slice(index + 2, self.cursor.end()));
                    self.report(DiagnosticCode::CloseNotFound, position, vec![CLOSE.to_string()]);
                    self.cursor.advance_to_end();
                    return Some(Scan::Complete(Fragment::leaf(
                        NodeType::Comment(content),
                        position,
                    )));
                }
            }
        }
        self.cursor.advance(index + CLOSE.len());

        Some(Scan::Complete(Fragment::leaf(
            NodeType::Comment(content),
            position,
        )))
    }

    /// `<!` followed by anything but `--`. Runs to the next `>`.
    fn scan_bogus_comment(&mut self) -> Scan {
        let position = self.cursor.position();
        let body = self.cursor.caret() + 2;
        self.report(DiagnosticCode::BogusCommentStarted, position, Vec::new());

        let raw = match self.cursor.find(">", body) {
            Some(close) => {
                let raw = self.cursor.slice(body, close);
                let at = self.cursor.position_of(close);
                self.report(DiagnosticCode::CloseFound, at, Vec::new());
                self.cursor.advance(close + 1);
                raw
            }
            None => {
                let raw = self.cursor.slice(body, self.cursor.end());
                self.cursor.advance_to_end();
                let at = self.cursor.position();
                self.report(DiagnosticCode::CloseNotFound, at, vec![">".to_string()]);
                raw
            }
        };

        Scan::Complete(Fragment::leaf(
            NodeType::Comment(raw.replace(DOUBLE_HYPHEN, "- ")),
            position,
        ))
    }
}

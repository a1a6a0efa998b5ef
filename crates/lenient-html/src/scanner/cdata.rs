use lenient_common::DiagnosticCode;
use lenient_dom::{Fragment, NodeType};

use super::{HtmlScanner, Scan};

const OPEN: &str = "<![CDATA[";
const CLOSE: &str = "]]>";

impl HtmlScanner<'_> {
    /// `<![CDATA[ ... ]]>`. Content is kept verbatim.
    pub(crate) fn scan_cdata(&mut self) -> Option<Scan> {
        if !self.cursor.starts_with(OPEN) {
            return None;
        }
        let position = self.cursor.position();
        let body = self.cursor.caret() + OPEN.len();
        let content = if let Some(close) = self.cursor.find(CLOSE, body) {
            let content = self.cursor.slice(body, close);
            self.cursor.advance(close + CLOSE.len());
            content
        } else {
            self.report(DiagnosticCode::CloseNotFound, position, vec![CLOSE.to_string()]);
            let content = self.cursor.slice(body, self.cursor.end());
            self.cursor.advance_to_end();
            content
        };
        Some(Scan::Complete(Fragment::leaf(
            NodeType::CData(content.to_string()),
            position,
        )))
    }
}

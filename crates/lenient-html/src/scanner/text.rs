use lenient_dom::{Fragment, NodeType};

use super::{HtmlScanner, Scan};

impl HtmlScanner<'_> {
    /// Fallback: everything up to the next `<`, and always at least one
    /// character so that a `<` no other scanner claimed is kept as text.
    pub(crate) fn scan_text(&mut self) -> Option<Scan> {
        let caret = self.cursor.caret();
        let first = self.cursor.char_at(caret)?;
        let stop = self
            .cursor
            .find("<", caret + first.len_utf8())
            .unwrap_or_else(|| self.cursor.end());

        let position = self.cursor.position();
        let text = self.cursor.slice(caret, stop).to_string();
        self.cursor.advance(stop);
        Some(Scan::Complete(Fragment::leaf(NodeType::Text(text), position)))
    }
}

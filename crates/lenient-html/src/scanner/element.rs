//! Opening tags, attributes, raw-text bodies and closing detection.
//!
//! An opening tag is `<` followed by a letter, `:` or `_`, and runs to the
//! first `>`. A `<` before that `>` discards the tag: the element scanner
//! reports it and declines, and the text fallback picks the characters up.

use lenient_common::{DiagnosticCode, Position};
use lenient_dom::{DomTree, ElementData, Fragment, NodeId, NodeType};

use super::{Closing, HtmlScanner, Scan};
use crate::cursor::is_space;
use crate::tables::{ElementKind, closes_first_child, closes_sibling};

/// What sits at the caret, as far as opening tags are concerned.
enum OpeningTag {
    /// Not an opening tag.
    Absent,
    /// An opening tag interrupted by the `<` at this index.
    Stray(usize),
    /// An opening tag whose `>` is at this index.
    Tag(usize),
}

/// One attribute name read by [`HtmlScanner::read_name`].
struct AttributeName {
    name: String,
    /// Byte index of the name's first character.
    start: usize,
    /// The attribute has no `=value` part.
    implied: bool,
    /// The tag ended right after the name.
    tag_ended: bool,
}

/// True for bytes that end a tag name.
const fn ends_tag_name(byte: u8) -> bool {
    is_space(byte) || byte == b'/' || byte == b'>'
}

// ===== Opening tags =====

impl HtmlScanner<'_> {
    /// Look for an opening tag at the caret without consuming or reporting.
    fn probe_opening_tag(&self) -> OpeningTag {
        let caret = self.cursor.caret();
        if self.cursor.byte_at(caret) != Some(b'<') {
            return OpeningTag::Absent;
        }
        match self.cursor.char_at(caret + 1) {
            Some(c) if c.is_alphabetic() || c == ':' || c == '_' => {}
            _ => return OpeningTag::Absent,
        }
        let Some(end) = self.cursor.find(">", caret + 1) else {
            return OpeningTag::Absent;
        };
        match self.cursor.find_within("<", caret + 1, end) {
            Some(stray) => OpeningTag::Stray(stray),
            None => OpeningTag::Tag(end),
        }
    }

    /// Byte index where the tag name starting at `from` ends.
    fn tag_name_end(&self, from: usize) -> usize {
        self.cursor
            .find_byte(from, self.cursor.end(), ends_tag_name)
            .unwrap_or_else(|| self.cursor.end())
    }

    /// Lower-cased name of the opening tag at the caret.
    fn upcoming_tag_name(&self) -> String {
        let start = self.cursor.caret() + 1;
        self.cursor
            .slice(start, self.tag_name_end(start))
            .to_ascii_lowercase()
    }

    pub(crate) fn scan_element(&mut self) -> Option<Scan> {
        let position = self.cursor.position();
        let end = match self.probe_opening_tag() {
            OpeningTag::Absent => return None,
            OpeningTag::Stray(index) => {
                let stray = self.cursor.position_of(index);
                self.report(
                    DiagnosticCode::StrayAngleBracket,
                    position,
                    vec![stray.to_string()],
                );
                return None;
            }
            OpeningTag::Tag(end) => end,
        };

        let tag_name = self.upcoming_tag_name();
        let name_end = self.tag_name_end(self.cursor.caret() + 1);
        let kind = ElementKind::of(&tag_name);
        let mut element = ElementData::new(tag_name);

        self.cursor.advance(name_end);
        if self.cursor.byte_at(name_end) == Some(b'>') {
            self.cursor.advance(name_end + 1);
        } else {
            self.read_attributes(&mut element, end, kind);
        }

        let scan = match kind {
            ElementKind::Void => Scan::Complete(Fragment::leaf(NodeType::Void(element), position)),
            ElementKind::RawText => {
                let data = self.read_raw_text(&element.tag_name, position);
                Scan::Complete(Fragment::leaf(
                    NodeType::RawText { element, data },
                    position,
                ))
            }
            ElementKind::Normal => Scan::Open(Fragment::leaf(NodeType::Element(element), position)),
        };
        Some(scan)
    }
}

// ===== Attributes =====

impl HtmlScanner<'_> {
    /// Read attributes until the tag's `>` at `end`, leaving the caret
    /// just past it.
    fn read_attributes(&mut self, element: &mut ElementData, end: usize, kind: ElementKind) {
        while self.cursor.caret() < end {
            let Some(attribute) = self.read_name(element, end, kind) else {
                return;
            };
            if element.attrs.contains_key(&attribute.name) {
                let at = self.cursor.position_of(attribute.start);
                self.report(
                    DiagnosticCode::DuplicateAttribute,
                    at,
                    vec![attribute.name.clone()],
                );
            }
            if attribute.implied {
                let _ = element.attrs.insert(attribute.name, String::new());
                if attribute.tag_ended {
                    return;
                }
            } else {
                let value = self.read_value(end, kind);
                let _ = element.attrs.insert(attribute.name, value);
            }
        }
        self.cursor.advance(end + 1);
    }

    /// Handle a `/` at `index`. Consumes the rest of the tag.
    ///
    /// Returns false if there is no `/` at `index`.
    fn read_self_closing(&mut self, index: usize, end: usize, kind: ElementKind) -> bool {
        if self.cursor.byte_at(index) != Some(b'/') {
            return false;
        }
        self.cursor.advance(end + 1);
        if end - index > 1 {
            let at = self.cursor.position_of(index);
            self.report(DiagnosticCode::UnexpectedSlash, at, Vec::new());
        }
        if kind != ElementKind::Void {
            let at = self.cursor.position_of(index);
            self.report(DiagnosticCode::SelfClosingOnNonVoid, at, Vec::new());
        }
        true
    }

    /// Read one attribute name. `None` once the tag has ended.
    fn read_name(
        &mut self,
        element: &ElementData,
        end: usize,
        kind: ElementKind,
    ) -> Option<AttributeName> {
        let caret = self.cursor.caret();
        let start = self.cursor.skip_space(caret, end);
        if self.read_self_closing(start, end, kind) {
            return None;
        }
        if start >= end {
            self.cursor.advance(end + 1);
            return None;
        }
        if start == caret && !element.attrs.is_empty() {
            let at = self.cursor.position();
            self.report(DiagnosticCode::MissingSpaceBetweenAttributes, at, Vec::new());
        }

        let Some(delimiter) = self
            .cursor
            .find_byte(start, end, |b| is_space(b) || matches!(b, b'/' | b'>' | b'='))
        else {
            self.cursor.advance(end + 1);
            return Some(AttributeName {
                name: self.cursor.slice(start, end).to_string(),
                start,
                implied: true,
                tag_ended: true,
            });
        };

        let name = self.cursor.slice(start, delimiter).to_string();
        let mut attribute = AttributeName {
            name,
            start,
            implied: false,
            tag_ended: false,
        };
        match self.cursor.byte_at(delimiter) {
            Some(b'/') => {
                attribute.implied = true;
                attribute.tag_ended = self.read_self_closing(delimiter, end, kind);
            }
            Some(b'=') => self.cursor.advance(delimiter + 1),
            _ => {
                let next = self.cursor.skip_space(delimiter + 1, end);
                if self.cursor.byte_at(next) == Some(b'=') {
                    self.cursor.advance(next + 1);
                } else {
                    attribute.implied = true;
                    self.cursor.advance(next - 1);
                }
            }
        }
        Some(attribute)
    }

    /// Read the value after `=`.
    fn read_value(&mut self, end: usize, kind: ElementKind) -> String {
        let start = self.cursor.skip_space(self.cursor.caret(), end);
        if self.read_self_closing(start, end, kind) {
            return String::new();
        }
        if start >= end {
            self.cursor.advance(end + 1);
            return String::new();
        }

        let at = self.cursor.position();
        if let Some(quote @ (b'"' | b'\'')) = self.cursor.byte_at(start) {
            let body = start + 1;
            return match self.cursor.find_byte(body, end, |b| b == quote) {
                Some(close) => {
                    self.cursor.advance(close + 1);
                    self.cursor.slice(body, close).to_string()
                }
                None => {
                    let assumed = self.cursor.position_of(end);
                    self.report(
                        DiagnosticCode::UnterminatedQuotedValue,
                        at,
                        vec![assumed.to_string()],
                    );
                    self.cursor.advance(end + 1);
                    self.cursor.slice(body, end).to_string()
                }
            };
        }

        let delimiter = self
            .cursor
            .find_byte(start, end + 1, |b| is_space(b) || b == b'/' || b == b'>');
        let stop = delimiter.unwrap_or(end);
        let value = self.cursor.slice(start, stop).to_string();
        match delimiter {
            Some(index) => {
                if self.cursor.byte_at(index) == Some(b'/') {
                    self.report(DiagnosticCode::SlashInUnquotedValue, at, Vec::new());
                }
                self.cursor.advance(index);
            }
            None => self.cursor.advance(end + 1),
        }
        for disallowed in ['\'', '"', '='] {
            if value.contains(disallowed) {
                self.report(
                    DiagnosticCode::DisallowedCharacterInUnquotedValue,
                    at,
                    vec![disallowed.to_string()],
                );
            }
        }
        value
    }
}

// ===== Raw text and closing =====

impl HtmlScanner<'_> {
    /// Body of a raw-text element, up to a case-insensitive `</name>`.
    fn read_raw_text(&mut self, tag_name: &str, position: Position) -> String {
        let closing = format!("</{tag_name}>");
        let body = self.cursor.caret();
        if let Some(close) = self.cursor.find_ignore_case(&closing, body) {
            let data = self.cursor.slice(body, close).to_string();
            self.cursor.advance(close + closing.len());
            data
        } else {
            self.report(
                DiagnosticCode::RawTextCloseNotFound,
                position,
                vec![tag_name.to_string()],
            );
            let data = self.cursor.remaining().to_string();
            self.cursor.advance_to_end();
            data
        }
    }

    /// Lower-cased name and `>` index of a closing tag at the caret.
    #[must_use]
    pub fn closing_tag(&self) -> Option<(String, usize)> {
        let caret = self.cursor.caret();
        if !self.cursor.starts_with("</") {
            return None;
        }
        let close = self.cursor.find(">", caret + 2)?;
        Some((
            self.cursor.slice(caret + 2, close).to_ascii_lowercase(),
            close,
        ))
    }

    /// Decide whether the open element `open` ends at the caret.
    ///
    /// A matching `</name>` is consumed. An opening tag listed in the
    /// implicit-close tables ends the element without being consumed. A
    /// discarded opening tag is not reported here; the element scanner
    /// reports it when it reaches the same characters.
    pub fn close(&mut self, tree: &DomTree, open: NodeId) -> Closing {
        let Some(name) = tree.tag_name(open) else {
            return Closing::NotClosed;
        };
        let position = self.cursor.position();

        if let Some((closing, close)) = self.closing_tag() {
            if closing == name {
                self.cursor.advance(close + 1);
                return Closing::Explicit(position);
            }
            return Closing::NotClosed;
        }

        if !matches!(self.probe_opening_tag(), OpeningTag::Tag(_)) {
            return Closing::NotClosed;
        }
        let upcoming = self.upcoming_tag_name();
        if closes_sibling(name, &upcoming)
            || (closes_first_child(name, &upcoming) && !tree.has_element_child(open))
        {
            return Closing::Implicit(position);
        }
        Closing::NotClosed
    }
}

//! Read caret over the input text.
//!
//! The cursor owns the caret, the end-of-input boundary and the line/column
//! bookkeeping. It only ever moves forward.
//!
//! All searches work on bytes. Every needle the scanners look for is ASCII,
//! so any match index is also a `char` boundary and can be used to slice the
//! text.

use lenient_common::Position;

/// "Whitespace" for the purposes of scanning: space, tab, newline, carriage
/// return, form feed and vertical tab.
#[must_use]
pub const fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | b'\x0C' | b'\x0B')
}

/// A forward-only view over the text being scanned.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    text: &'a str,
    caret: usize,
    position: Position,
    /// Byte offset of the first character of every line.
    line_starts: Vec<usize>,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `text`.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(
                text.bytes()
                    .enumerate()
                    .filter(|&(_, b)| b == b'\n')
                    .map(|(i, _)| i + 1),
            )
            .collect();
        Self {
            text,
            caret: 0,
            position: Position::START,
            line_starts,
        }
    }

    /// The whole input.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// Byte offset of the caret.
    #[must_use]
    pub const fn caret(&self) -> usize {
        self.caret
    }

    /// Byte offset of the end of input.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.text.len()
    }

    /// True once the caret has reached the end of input.
    #[must_use]
    pub const fn at_end(&self) -> bool {
        self.caret >= self.text.len()
    }

    /// Text from the caret to the end of input.
    #[must_use]
    pub fn remaining(&self) -> &'a str {
        self.slice(self.caret, self.end())
    }

    /// Snapshot of the caret's position.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// The byte at `index`, if inside the input.
    #[must_use]
    pub fn byte_at(&self, index: usize) -> Option<u8> {
        self.text.as_bytes().get(index).copied()
    }

    /// The character starting at `index`, if inside the input.
    #[must_use]
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.text.get(index..)?.chars().next()
    }

    /// `text[from..to]`, or the empty string when the range is empty.
    #[must_use]
    pub fn slice(&self, from: usize, to: usize) -> &'a str {
        let to = to.min(self.end());
        if from >= to {
            return "";
        }
        self.text.get(from..to).unwrap_or_default()
    }

    /// True if `needle` occurs at `index`.
    #[must_use]
    pub fn matches_at(&self, index: usize, needle: &str) -> bool {
        self.text
            .as_bytes()
            .get(index..)
            .is_some_and(|rest| rest.starts_with(needle.as_bytes()))
    }

    /// True if `needle` occurs at `index`, ignoring ASCII case.
    #[must_use]
    pub fn matches_at_ignore_case(&self, index: usize, needle: &str) -> bool {
        self.text
            .as_bytes()
            .get(index..index + needle.len())
            .is_some_and(|window| window.eq_ignore_ascii_case(needle.as_bytes()))
    }

    /// True if the text at the caret starts with `prefix`.
    #[must_use]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.matches_at(self.caret, prefix)
    }

    /// First index of `needle` at or after `from`.
    #[must_use]
    pub fn find(&self, needle: &str, from: usize) -> Option<usize> {
        self.find_within(needle, from, self.end())
    }

    /// First index of `needle` such that the whole match lies in `from..to`.
    #[must_use]
    pub fn find_within(&self, needle: &str, from: usize, to: usize) -> Option<usize> {
        let needle = needle.as_bytes();
        let haystack = self.text.as_bytes().get(from..to.min(self.end()))?;
        if needle.is_empty() || haystack.len() < needle.len() {
            return None;
        }
        haystack
            .windows(needle.len())
            .position(|window| window == needle)
            .map(|i| i + from)
    }

    /// First index of `needle` at or after `from`, ignoring ASCII case.
    #[must_use]
    pub fn find_ignore_case(&self, needle: &str, from: usize) -> Option<usize> {
        let needle = needle.as_bytes();
        let haystack = self.text.as_bytes().get(from..)?;
        if needle.is_empty() || haystack.len() < needle.len() {
            return None;
        }
        haystack
            .windows(needle.len())
            .position(|window| window.eq_ignore_ascii_case(needle))
            .map(|i| i + from)
    }

    /// First index in `from..to` whose byte satisfies `predicate`.
    #[must_use]
    pub fn find_byte(&self, from: usize, to: usize, predicate: impl Fn(u8) -> bool) -> Option<usize> {
        self.text
            .as_bytes()
            .get(from..to.min(self.end()))?
            .iter()
            .position(|&b| predicate(b))
            .map(|i| i + from)
    }

    /// First index in `from..to` that is not whitespace, or `to`.
    #[must_use]
    pub fn skip_space(&self, from: usize, to: usize) -> usize {
        self.find_byte(from, to, |b| !is_space(b))
            .unwrap_or_else(|| to.min(self.end()).max(from))
    }

    /// Move the caret forward to `index`, counting the newlines crossed.
    ///
    /// Indices behind the caret are ignored; indices past the end clamp to it.
    pub fn advance(&mut self, index: usize) {
        let target = index.min(self.end());
        if target <= self.caret {
            return;
        }
        let crossed = self.slice(self.caret, target);
        match crossed.rfind('\n') {
            Some(last_newline) => {
                self.position.line += crossed.matches('\n').count();
                self.position.column = crossed[last_newline + 1..].chars().count() + 1;
            }
            None => self.position.column += crossed.chars().count(),
        }
        self.caret = target;
    }

    /// Move the caret to the end of input.
    pub fn advance_to_end(&mut self) {
        self.advance(self.end());
    }

    /// Position of an arbitrary byte offset, without moving the caret.
    #[must_use]
    pub fn position_of(&self, index: usize) -> Position {
        let index = index.min(self.end());
        let line = self.line_starts.partition_point(|&start| start <= index);
        let line_start = self.line_starts[line - 1];
        let column = self.text.get(line_start..index).map_or_else(
            || index - line_start,
            |prefix| prefix.chars().count(),
        );
        Position::new(line, column + 1)
    }
}

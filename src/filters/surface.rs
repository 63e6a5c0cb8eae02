//! Rendering-surface contract for highlighting and find-next navigation.
//!
//! The filter core never owns the rendered item view. It talks to it through
//! [`TextSurface`]: a read-only text buffer with a selection cursor and a set
//! of highlight spans. [`BufferSurface`] is the in-memory implementation used
//! by the applier and by tests; a real widget only has to expose the same
//! four operations.

use regex::Regex;

/// A half-open byte range into a surface's text.
///
/// Also serves as the selection cursor: a collapsed span (`start == end`) is
/// a caret, a non-empty span is a selected match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Visual emphasis applied to a highlight span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HighlightStyle {
    /// Any occurrence of the active filter.
    #[default]
    Match,
    /// The occurrence the find cursor is on.
    ActiveMatch,
}

/// A styled region of matching text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightSpan {
    pub span: Span,
    pub style: HighlightStyle,
}

/// Capability the item view exposes to the filter core.
pub trait TextSurface {
    /// Full text of the surface.
    fn text(&self) -> &str;

    /// Current selection cursor.
    fn cursor(&self) -> Span;

    fn set_cursor(&mut self, cursor: Span);

    /// Replace all highlight spans. An empty list clears highlighting.
    fn set_highlight_spans(&mut self, spans: Vec<HighlightSpan>);

    /// Find the next occurrence of `pattern` starting at byte offset `from`,
    /// searching toward the end of the text, or toward the start when
    /// `backwards`. A backward search returns the last occurrence ending at
    /// or before `from`.
    fn find_next(&self, pattern: &Regex, from: usize, backwards: bool) -> Option<Span> {
        let text = self.text();
        let from = clamp_to_char_boundary(text, from);
        if backwards {
            pattern
                .find_iter(text)
                .take_while(|m| m.end() <= from)
                .last()
                .map(|m| Span::new(m.start(), m.end()))
        } else {
            pattern.find_at(text, from).map(|m| Span::new(m.start(), m.end()))
        }
    }
}

/// In-memory surface: a text buffer, a cursor, and the applied spans.
#[derive(Debug, Clone, Default)]
pub struct BufferSurface {
    text: String,
    cursor: Span,
    spans: Vec<HighlightSpan>,
}

impl BufferSurface {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), cursor: Span::default(), spans: Vec::new() }
    }

    pub fn highlight_spans(&self) -> &[HighlightSpan] {
        &self.spans
    }

    /// Replace the buffer text, resetting cursor and highlighting.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = Span::default();
        self.spans.clear();
    }
}

impl TextSurface for BufferSurface {
    fn text(&self) -> &str {
        &self.text
    }

    fn cursor(&self) -> Span {
        self.cursor
    }

    fn set_cursor(&mut self, cursor: Span) {
        self.cursor = cursor;
    }

    fn set_highlight_spans(&mut self, spans: Vec<HighlightSpan>) {
        self.spans = spans;
    }
}

/// Largest char boundary not past `pos` (and not past the end of `text`).
pub(crate) fn clamp_to_char_boundary(text: &str, pos: usize) -> usize {
    let mut pos = pos.min(text.len());
    while pos > 0 && !text.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}

/// Smallest char boundary strictly after `pos`, or `pos` when already at the
/// end of `text`.
pub(crate) fn next_char_boundary(text: &str, pos: usize) -> usize {
    if pos >= text.len() {
        return pos;
    }
    let mut next = pos + 1;
    while next < text.len() && !text.is_char_boundary(next) {
        next += 1;
    }
    next
}

//! Compiled filter values.
//!
//! A [`Filter`] is the immutable result of compiling user filter input. It is
//! one of three things: an empty filter that matches everything, a broken
//! filter that matches nothing (invalid regex input), or a concrete pattern.
//! Exactly one classification holds at a time, and the original input text is
//! kept verbatim for history and emptiness checks.

use std::collections::BTreeMap;

use regex::{Regex, RegexBuilder};

use super::surface::{HighlightSpan, HighlightStyle, Span, TextSurface, next_char_boundary};

#[derive(Debug, Clone)]
pub(crate) enum FilterKind {
    /// Empty pattern: every item matches, nothing is highlighted.
    MatchAll,
    /// Non-empty input that failed to compile: nothing matches.
    MatchNone,
    /// A concrete compiled pattern.
    Pattern { re: Regex, case_insensitive: bool },
}

/// Compiled representation of user filter/search input.
#[derive(Debug, Clone)]
pub struct Filter {
    search_string: String,
    kind: FilterKind,
}

impl Filter {
    pub(crate) fn new(search_string: String, kind: FilterKind) -> Self {
        Self { search_string, kind }
    }

    /// The original, uncompiled input text. Used for history and for
    /// emptiness checks, never for matching.
    pub fn search_string(&self) -> &str {
        &self.search_string
    }

    /// True iff the compiled pattern is empty (raw empty input in either
    /// mode).
    pub fn matches_all(&self) -> bool {
        matches!(self.kind, FilterKind::MatchAll)
    }

    /// True iff the input was non-empty but did not compile. Only reachable
    /// in regex mode with invalid syntax.
    pub fn matches_none(&self) -> bool {
        matches!(self.kind, FilterKind::MatchNone)
    }

    /// True iff the pattern occurs anywhere in `text`. Search semantics, not
    /// full-match.
    pub fn matches(&self, text: &str) -> bool {
        match &self.kind {
            FilterKind::MatchAll => true,
            FilterKind::MatchNone => false,
            FilterKind::Pattern { re, .. } => re.is_match(text),
        }
    }

    /// Match data-format *names* when the pattern contains exactly one `/`.
    ///
    /// This is a narrow heuristic for locating items by a slash-qualified
    /// format reference such as `text/html`: the whole key must match the
    /// pattern, anchored. Any other pattern shape returns false regardless of
    /// the keys present.
    pub fn matches_formats(&self, formats: &BTreeMap<String, String>) -> bool {
        let FilterKind::Pattern { re, case_insensitive } = &self.kind else {
            return false;
        };
        if re.as_str().matches('/').count() != 1 {
            return false;
        }

        // The pattern already compiled once, so anchoring it compiles too.
        let Ok(anchored) = RegexBuilder::new(&format!("^(?:{})$", re.as_str()))
            .case_insensitive(*case_insensitive)
            .build()
        else {
            return false;
        };
        formats.keys().any(|key| anchored.is_match(key))
    }

    /// Mark every non-overlapping occurrence of the pattern on `surface`,
    /// replacing any previous highlight spans.
    ///
    /// Zero-width matches never advance the search cursor on their own; the
    /// scan force-advances by one character and gives up if still stuck, so
    /// patterns like `a*` terminate.
    pub fn highlight(&self, surface: &mut dyn TextSurface, style: HighlightStyle) {
        let spans = self
            .collect_spans(&*surface)
            .into_iter()
            .map(|span| HighlightSpan { span, style })
            .collect();
        surface.set_highlight_spans(spans);
    }

    /// Move the surface cursor to the next (or previous) occurrence of the
    /// pattern, wrapping around the document once, and re-style the
    /// occurrence the cursor lands on as [`HighlightStyle::ActiveMatch`].
    /// The cursor and spans are left unchanged when no match exists anywhere;
    /// match-all filters have nothing to navigate to and do nothing.
    pub fn search(&self, surface: &mut dyn TextSurface, backwards: bool) {
        let FilterKind::Pattern { re, .. } = &self.kind else {
            return;
        };

        let cursor = surface.cursor();
        let from = if backwards { cursor.start } else { cursor.end };

        let mut found = surface.find_next(re, from, backwards);
        if found.is_none() {
            let wrap_from = if backwards { surface.text().len() } else { 0 };
            found = surface.find_next(re, wrap_from, backwards);
        }

        let Some(active) = found else {
            return;
        };
        surface.set_cursor(active);

        let spans = self
            .collect_spans(&*surface)
            .into_iter()
            .map(|span| HighlightSpan {
                span,
                style: if span == active {
                    HighlightStyle::ActiveMatch
                } else {
                    HighlightStyle::Match
                },
            })
            .collect();
        surface.set_highlight_spans(spans);
    }

    /// Every non-overlapping, non-empty occurrence of the pattern, in order.
    fn collect_spans(&self, surface: &dyn TextSurface) -> Vec<Span> {
        let FilterKind::Pattern { re, .. } = &self.kind else {
            return Vec::new();
        };

        let mut spans = Vec::new();
        let len = surface.text().len();
        let mut pos = 0;
        while pos <= len {
            let Some(found) = surface.find_next(re, pos, false) else {
                break;
            };
            if !found.is_empty() {
                spans.push(found);
            }
            let next = if found.end > pos {
                found.end
            } else {
                next_char_boundary(surface.text(), pos)
            };
            if next == pos {
                break;
            }
            pos = next;
        }
        spans
    }
}

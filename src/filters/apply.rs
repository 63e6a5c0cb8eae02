//! Apply a compiled filter to the live item list.
//!
//! For every row this decides inclusion and keeps its rendered surface in
//! sync: included rows get their matches highlighted, excluded rows get their
//! spans cleared. Reapplying the same filter to an unchanged list is a no-op
//! in effect, and replacing the filter never leaves stale spans behind
//! because every pass starts by clearing all rows.

use super::filter::Filter;
use super::surface::{BufferSurface, HighlightStyle, TextSurface};
use crate::models::ClipItem;

/// One item of the list together with its render state.
#[derive(Debug, Clone)]
pub struct ItemRow {
    pub item: ClipItem,
    pub surface: BufferSurface,
    pub visible: bool,
}

impl ItemRow {
    pub fn new(item: ClipItem) -> Self {
        let surface = BufferSurface::new(item.display_text());
        Self { item, surface, visible: true }
    }
}

/// Recompute inclusion and highlighting for every row under `filter`.
///
/// A concrete filter includes a row when its display text matches or when the
/// slash-heuristic matches one of its format names. Row order is never
/// changed; exclusion only flips the `visible` flag.
pub fn apply_filter(rows: &mut [ItemRow], filter: &Filter, style: HighlightStyle) {
    for row in rows.iter_mut() {
        // Drop spans from whatever filter was applied before.
        row.surface.set_highlight_spans(Vec::new());

        row.visible = if filter.matches_all() {
            true
        } else if filter.matches_none() {
            false
        } else {
            filter.matches(row.item.display_text()) || filter.matches_formats(row.item.formats())
        };

        if row.visible {
            filter.highlight(&mut row.surface, style);
        }
    }
}

/// The included rows, in list order.
pub fn visible_rows(rows: &[ItemRow]) -> Vec<&ItemRow> {
    rows.iter().filter(|row| row.visible).collect()
}

//! Viewport arithmetic
//!
//! The option list is split into consecutive chunks of `rows` lines and the
//! viewport is always the chunk holding the focus. Both the current chunk and
//! the boundary check are derived from `rows` alone.

use std::ops::Range;

/// Index of the chunk holding a 1-based focus
pub fn chunk_of(focus: usize, rows: usize) -> usize {
    if rows == 0 {
        return 0;
    }
    focus.saturating_sub(1) / rows
}

/// Range of chunk `index` in the option list; the last chunk may be short
pub fn chunk_range(index: usize, rows: usize, len: usize) -> Range<usize> {
    let start = (index * rows).min(len);
    let end = (start + rows).min(len);
    start..end
}

/// Viewport for a given focus, or `None` when there is nothing to show
pub fn viewport_for(focus: usize, rows: usize, len: usize) -> Option<Range<usize>> {
    if len == 0 || rows == 0 {
        return None;
    }
    Some(chunk_range(chunk_of(focus, rows), rows, len))
}

/// Display row of the cursor inside the viewport
pub fn cursor_row(focus: usize, rows: usize) -> usize {
    if rows == 0 {
        return 0;
    }
    focus.saturating_sub(1) % rows
}

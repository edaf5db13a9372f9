//! Rendering adapter
//!
//! Turns a menu's viewport state into [`Display`] calls. The last column of
//! every row is reserved for the cursor glyph.

use crate::display::Display;
use crate::menu::tree::{Menu, MenuTree};
use std::io;

/// Cursor glyph used unless configured otherwise
pub const DEFAULT_CURSOR: char = '<';

/// Truncate a title to `width` characters
pub fn clamp_title(title: &str, width: usize) -> &str {
    match title.char_indices().nth(width) {
        Some((end, _)) => &title[..end],
        None => title,
    }
}

/// Clear the screen and print the options in the viewport
///
/// Does nothing when the menu has no viewport.
pub fn render_options<D, V>(display: &mut D, tree: &MenuTree<V>, menu: &Menu<V>) -> io::Result<()>
where
    D: Display + ?Sized,
{
    let Some(viewport) = menu.viewport() else {
        return Ok(());
    };

    display.clear()?;
    display.set_cursor(0, 0)?;

    let width = menu.cols().saturating_sub(1);
    for (line, option) in viewport.iter().enumerate() {
        display.set_cursor(0, line)?;
        display.print(clamp_title(tree.option_title(option), width))?;
    }
    Ok(())
}

/// Draw the cursor in the reserved column and blank it on the other viewport rows
pub fn render_cursor<D, V>(display: &mut D, menu: &Menu<V>, glyph: char) -> io::Result<()>
where
    D: Display + ?Sized,
{
    let Some(viewport) = menu.viewport_range() else {
        return Ok(());
    };
    let Some(col) = menu.cols().checked_sub(1) else {
        return Ok(());
    };

    let focused_row = crate::menu::viewport::cursor_row(menu.focus(), menu.rows());
    let mut buf = [0u8; 4];
    for line in 0..viewport.len() {
        display.set_cursor(col, line)?;
        if line == focused_row {
            display.print(glyph.encode_utf8(&mut buf))?;
        } else {
            display.print(" ")?;
        }
    }
    Ok(())
}

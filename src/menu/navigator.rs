//! Navigation
//!
//! [`Navigator`] owns the menu tree, the display and the single active menu
//! id. Starting, entering a submenu, returning to the parent and moving the
//! focus all go through it, so only one menu ever writes to the display.

use crate::display::Display;
use crate::error::{MenuError, Result};
use crate::menu::focus::Focus;
use crate::menu::option::MenuOption;
use crate::menu::render::{self, DEFAULT_CURSOR};
use crate::menu::tree::{Menu, MenuId, MenuTree};
use tracing::{debug, trace};

/// Drives a [`MenuTree`] on a [`Display`]
#[derive(Debug)]
pub struct Navigator<D, V = String> {
    tree: MenuTree<V>,
    display: D,
    active: Option<MenuId>,
    cursor: char,
}

impl<D: Display, V> Navigator<D, V> {
    /// Nothing is active until [`Navigator::start`]
    pub fn new(tree: MenuTree<V>, display: D) -> Self {
        Self {
            tree,
            display,
            active: None,
            cursor: DEFAULT_CURSOR,
        }
    }

    /// Use `glyph` as the cursor
    pub fn with_cursor(mut self, glyph: char) -> Self {
        self.cursor = glyph;
        self
    }

    /// Bind the display geometry to `menu`, compute its viewport and draw it
    ///
    /// The previously active menu, if any, stops being active.
    pub fn start(&mut self, menu: MenuId) -> Result<MenuId> {
        self.activate(menu)?;
        Ok(menu)
    }

    /// Recompute the viewport and fully redraw the active menu
    pub fn render(&mut self) -> Result<()> {
        let Some(id) = self.active else {
            return Ok(());
        };
        self.tree.get_mut(id)?.refresh_viewport();
        self.draw(true)
    }

    pub fn focus_next(&mut self) -> Result<()> {
        self.move_focus(|focus, len| {
            focus.next(len);
            Ok(())
        })
    }

    pub fn focus_prev(&mut self) -> Result<()> {
        self.move_focus(|focus, len| {
            focus.prev(len);
            Ok(())
        })
    }

    /// Move the focus to option `n` (1-based)
    pub fn focus_set(&mut self, n: usize) -> Result<()> {
        self.move_focus(|focus, len| focus.set(n, len))
    }

    /// Choose the focused option and return the menu that is active afterwards
    pub fn choose(&mut self) -> Result<MenuId> {
        let current = self.active.ok_or(MenuError::NotStarted)?;
        let menu = self.tree.get_mut(current)?;

        match menu.focused_option_mut() {
            Some(MenuOption::Submenu(child)) => {
                let child = *child;
                self.tree.get_mut(child)?.set_parent(current);
                self.activate(child)?;
                debug!(from = %current, to = %child, "Entered submenu");
                Ok(child)
            }
            Some(MenuOption::Action(action)) => {
                debug!(menu = %current, action = action.title(), "Invoking action");
                action.invoke()?;
                Ok(current)
            }
            Some(MenuOption::Noop { .. }) | None => Ok(current),
        }
    }

    /// Return to the parent menu; a no-op at the root
    pub fn parent(&mut self) -> Result<MenuId> {
        let current = self.active.ok_or(MenuError::NotStarted)?;
        match self.tree.get(current)?.parent() {
            Some(parent) => {
                self.activate(parent)?;
                debug!(from = %current, to = %parent, "Returned to parent menu");
                Ok(parent)
            }
            None => Ok(current),
        }
    }

    pub fn add_option(&mut self, menu: MenuId, option: MenuOption<V>) -> Result<()> {
        self.tree.add_option(menu, option)
    }

    pub fn active(&self) -> Option<MenuId> {
        self.active
    }

    pub fn is_active(&self, menu: MenuId) -> bool {
        self.active == Some(menu)
    }

    pub fn active_menu(&self) -> Option<&Menu<V>> {
        self.active.and_then(|id| self.tree.menu(id))
    }

    pub fn menu(&self, id: MenuId) -> Option<&Menu<V>> {
        self.tree.menu(id)
    }

    pub fn tree(&self) -> &MenuTree<V> {
        &self.tree
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Titles from the root down to the active menu
    pub fn path(&self) -> Vec<&str> {
        let mut titles = Vec::new();
        let mut next = self.active;
        while let Some(menu) = next.and_then(|id| self.tree.menu(id)) {
            titles.push(menu.title());
            next = menu.parent();
        }
        titles.reverse();
        titles
    }

    /// Nesting depth of the active menu, 0 at the root
    pub fn depth(&self) -> usize {
        self.path().len().saturating_sub(1)
    }

    fn activate(&mut self, id: MenuId) -> Result<()> {
        let (rows, cols) = (self.display.rows(), self.display.cols());
        let menu = self.tree.get_mut(id)?;
        menu.bind(rows, cols);
        menu.refresh_viewport();
        debug!(menu = %id, title = menu.title(), focus = menu.focus(), "Menu activated");
        self.active = Some(id);
        self.draw(true)
    }

    fn move_focus<F>(&mut self, step: F) -> Result<()>
    where
        F: FnOnce(&mut Focus, usize) -> Result<()>,
    {
        let Some(id) = self.active else {
            return Ok(());
        };
        let menu = self.tree.get_mut(id)?;
        let len = menu.len();
        if len == 0 {
            return Ok(());
        }

        step(menu.focus_state_mut(), len)?;

        let full = menu.needs_full_render() || menu.viewport_is_stale();
        if full {
            menu.refresh_viewport();
            debug!(
                menu = %id,
                from = menu.previous_focus(),
                focus = menu.focus(),
                "Viewport changed"
            );
        } else {
            trace!(
                menu = %id,
                from = menu.previous_focus(),
                focus = menu.focus(),
                "Cursor moved"
            );
        }
        self.draw(full)
    }

    fn draw(&mut self, full: bool) -> Result<()> {
        let Some(id) = self.active else {
            return Ok(());
        };
        let menu = self.tree.get(id)?;
        if full {
            render::render_options(&mut self.display, &self.tree, menu)?;
        }
        render::render_cursor(&mut self.display, menu, self.cursor)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::CharGrid;
    use std::cell::{Cell, RefCell};
    use std::io;
    use std::rc::Rc;

    /// Grid whose writes start failing once `broken` is set
    #[derive(Debug)]
    struct FlakyDisplay {
        grid: CharGrid,
        broken: Rc<Cell<bool>>,
    }

    impl FlakyDisplay {
        fn new(rows: usize, cols: usize) -> (Self, Rc<Cell<bool>>) {
            let broken = Rc::new(Cell::new(false));
            let display = Self {
                grid: CharGrid::new(rows, cols),
                broken: Rc::clone(&broken),
            };
            (display, broken)
        }

        fn check(&self) -> io::Result<()> {
            if self.broken.get() {
                return Err(io::Error::other("i2c write failed"));
            }
            Ok(())
        }
    }

    impl Display for FlakyDisplay {
        fn rows(&self) -> usize {
            self.grid.rows()
        }

        fn cols(&self) -> usize {
            self.grid.cols()
        }

        fn clear(&mut self) -> io::Result<()> {
            self.grid.clear()
        }

        fn set_cursor(&mut self, col: usize, row: usize) -> io::Result<()> {
            self.grid.set_cursor(col, row)
        }

        fn print(&mut self, text: &str) -> io::Result<()> {
            self.check()?;
            self.grid.print(text)
        }
    }

    fn letters(tree: &mut MenuTree, menu: MenuId, titles: &[&str]) {
        for title in titles {
            tree.add_option(menu, MenuOption::noop(*title)).unwrap();
        }
    }

    fn started(titles: &[&str], rows: usize, cols: usize) -> (Navigator<CharGrid>, MenuId) {
        let mut tree: MenuTree = MenuTree::new();
        let root = tree.add_menu("Main");
        letters(&mut tree, root, titles);
        let mut nav = Navigator::new(tree, CharGrid::new(rows, cols));
        nav.start(root).unwrap();
        (nav, root)
    }

    #[test]
    fn test_five_options_two_rows() {
        let (mut nav, root) = started(&["A", "B", "C", "D", "E"], 2, 8);

        assert_eq!(nav.display().lines(), vec!["A      <", "B       "]);
        assert_eq!(nav.menu(root).unwrap().viewport_range(), Some(0..2));

        for _ in 0..3 {
            nav.focus_next().unwrap();
        }

        let menu = nav.menu(root).unwrap();
        assert_eq!(menu.focus(), 4);
        assert_eq!(menu.viewport_range(), Some(2..4));
        assert_eq!(nav.display().lines(), vec!["C       ", "D      <"]);
    }

    #[test]
    fn test_short_last_chunk() {
        let (mut nav, root) = started(&["A", "B", "C", "D", "E"], 2, 8);
        nav.focus_prev().unwrap();

        assert_eq!(nav.menu(root).unwrap().focus(), 5);
        assert_eq!(nav.menu(root).unwrap().viewport_range(), Some(4..5));
        // the second row holds no option, so its cursor column is left alone
        assert_eq!(nav.display().lines(), vec!["E      <", "        "]);
    }

    #[test]
    fn test_interior_move_is_cursor_only() {
        let (mut nav, _) = started(&["A", "B", "C", "D"], 4, 6);
        let clears = nav.display().clears();

        nav.focus_next().unwrap();
        nav.focus_next().unwrap();
        assert_eq!(nav.display().clears(), clears);
        assert_eq!(nav.display().cell(5, 0), Some(' '));
        assert_eq!(nav.display().cell(5, 2), Some('<'));

        nav.focus_next().unwrap();
        nav.focus_next().unwrap(); // 4 -> 1 inside a single chunk
        assert_eq!(nav.display().clears(), clears);
        assert_eq!(nav.display().cell(5, 0), Some('<'));
    }

    #[test]
    fn test_boundary_move_rerenders() {
        let (mut nav, _) = started(&["A", "B", "C"], 2, 6);
        let clears = nav.display().clears();

        nav.focus_next().unwrap();
        assert_eq!(nav.display().clears(), clears);
        nav.focus_next().unwrap();
        assert_eq!(nav.display().clears(), clears + 1);
        nav.focus_next().unwrap(); // 3 -> 1
        assert_eq!(nav.display().clears(), clears + 2);
        assert_eq!(nav.display().line(0), "A    <");
    }

    #[test]
    fn test_titles_truncated_to_reserved_column() {
        let (nav, _) = started(&["Brightness", "Go"], 2, 6);
        assert_eq!(nav.display().lines(), vec!["Brigh<", "Go    "]);
    }

    #[test]
    fn test_focus_set() {
        let (mut nav, root) = started(&["A", "B", "C", "D", "E"], 2, 4);

        nav.focus_set(5).unwrap();
        assert_eq!(nav.menu(root).unwrap().previous_focus(), 1);
        assert_eq!(nav.menu(root).unwrap().viewport_range(), Some(4..5));
        assert_eq!(nav.display().line(0), "E  <");

        let err = nav.focus_set(6).unwrap_err();
        assert!(matches!(err, MenuError::FocusOutOfRange { focus: 6, len: 5 }));
        assert_eq!(nav.menu(root).unwrap().focus(), 5);
        assert!(nav.focus_set(0).is_err());
    }

    #[test]
    fn test_submenu_enter_and_return() {
        let mut tree: MenuTree = MenuTree::new();
        let root = tree.add_menu("Main");
        let settings = tree.add_menu("Settings");
        letters(&mut tree, root, &["A", "B"]);
        tree.add_option(root, MenuOption::submenu(settings)).unwrap();
        letters(&mut tree, settings, &["Contrast", "Backlight"]);

        let mut nav = Navigator::new(tree, CharGrid::new(2, 12));
        nav.start(root).unwrap();
        nav.focus_set(3).unwrap();

        let now = nav.choose().unwrap();
        assert_eq!(now, settings);
        assert!(nav.is_active(settings));
        assert!(!nav.is_active(root));
        assert_eq!(nav.menu(settings).unwrap().parent(), Some(root));
        assert_eq!(nav.display().lines(), vec!["Contrast   <", "Backlight   "]);
        assert_eq!(nav.path(), vec!["Main", "Settings"]);
        assert_eq!(nav.depth(), 1);

        nav.focus_next().unwrap();
        let back = nav.parent().unwrap();
        assert_eq!(back, root);
        assert!(nav.is_active(root));
        assert_eq!(nav.menu(root).unwrap().focus(), 3);
        assert_eq!(nav.display().lines(), vec!["Settings   <", "            "]);

        // the submenu keeps its own focus
        nav.choose().unwrap();
        assert_eq!(nav.menu(settings).unwrap().focus(), 2);
    }

    #[test]
    fn test_parent_at_root_is_noop() {
        let (mut nav, root) = started(&["A", "B"], 2, 4);
        let before = nav.display().clone();

        assert_eq!(nav.parent().unwrap(), root);
        assert!(nav.is_active(root));
        assert_eq!(nav.display(), &before);
        assert_eq!(nav.depth(), 0);
    }

    #[test]
    fn test_action_invoked_once_with_value() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);

        let mut tree: MenuTree<u32> = MenuTree::new();
        let root = tree.add_menu("Main");
        tree.add_option(
            root,
            MenuOption::action_with_value("Set 42", 42, move |v: Option<&u32>| {
                sink.borrow_mut().push(v.copied());
                Ok(())
            }),
        )
        .unwrap();

        let mut nav = Navigator::new(tree, CharGrid::new(2, 10));
        nav.start(root).unwrap();
        assert_eq!(nav.choose().unwrap(), root);
        assert_eq!(*calls.borrow(), vec![Some(42)]);
        assert!(nav.is_active(root));
    }

    #[test]
    fn test_action_error_propagates() {
        let mut tree: MenuTree = MenuTree::new();
        let root = tree.add_menu("Main");
        tree.add_option(
            root,
            MenuOption::action("Fail", |_| Err(anyhow::anyhow!("sensor offline"))),
        )
        .unwrap();

        let mut nav = Navigator::new(tree, CharGrid::new(2, 10));
        nav.start(root).unwrap();

        let err = nav.choose().unwrap_err();
        assert!(matches!(err, MenuError::Action(_)));
        assert_eq!(err.to_string(), "sensor offline");
        assert!(nav.is_active(root));
    }

    #[test]
    fn test_noop_and_empty_menu() {
        let mut tree: MenuTree = MenuTree::new();
        let root = tree.add_menu("Main");
        let empty = tree.add_menu("Empty");
        tree.add_option(root, MenuOption::noop("Spacer")).unwrap();
        tree.add_option(root, MenuOption::submenu(empty)).unwrap();

        let mut nav = Navigator::new(tree, CharGrid::new(2, 10));
        nav.start(root).unwrap();
        assert_eq!(nav.choose().unwrap(), root);

        nav.focus_next().unwrap();
        assert_eq!(nav.choose().unwrap(), empty);
        // no viewport, nothing drawn, focus moves ignored
        assert!(nav.menu(empty).unwrap().viewport().is_none());
        nav.focus_next().unwrap();
        assert_eq!(nav.menu(empty).unwrap().focus(), 1);
        assert_eq!(nav.choose().unwrap(), empty);
        assert_eq!(nav.parent().unwrap(), root);
    }

    #[test]
    fn test_not_started() {
        let mut tree: MenuTree = MenuTree::new();
        tree.add_menu("Main");
        let mut nav = Navigator::new(tree, CharGrid::new(2, 10));

        assert!(matches!(nav.choose(), Err(MenuError::NotStarted)));
        assert!(matches!(nav.parent(), Err(MenuError::NotStarted)));
        nav.focus_next().unwrap();
        nav.render().unwrap();
        assert_eq!(nav.display().clears(), 0);
    }

    #[test]
    fn test_custom_cursor_glyph() {
        let mut tree: MenuTree = MenuTree::new();
        let root = tree.add_menu("Main");
        letters(&mut tree, root, &["A"]);
        let mut nav = Navigator::new(tree, CharGrid::new(1, 4)).with_cursor('*');
        nav.start(root).unwrap();
        assert_eq!(nav.display().line(0), "A  *");
    }

    #[test]
    fn test_options_added_after_start_are_shown() {
        let (mut nav, root) = started(&["A"], 4, 6);
        nav.add_option(root, MenuOption::noop("B")).unwrap();

        nav.focus_next().unwrap();
        let menu = nav.menu(root).unwrap();
        assert_eq!(menu.focus(), 2);
        assert_eq!(menu.viewport_range(), Some(0..2));
        assert_eq!(nav.display().lines(), vec!["A     ", "B    <", "      ", "      "]);
    }

    #[test]
    fn test_empty_menu_filled_after_start() {
        let (mut nav, root) = started(&[], 4, 6);
        assert!(nav.menu(root).unwrap().viewport().is_none());

        nav.add_option(root, MenuOption::noop("A")).unwrap();
        nav.add_option(root, MenuOption::noop("B")).unwrap();
        nav.focus_next().unwrap();

        assert_eq!(nav.menu(root).unwrap().viewport_range(), Some(0..2));
        assert_eq!(nav.display().lines(), vec!["A     ", "B    <", "      ", "      "]);
    }

    #[test]
    fn test_render_is_idempotent() {
        let (mut nav, _) = started(&["A", "B", "C"], 2, 6);
        nav.focus_set(3).unwrap();

        nav.render().unwrap();
        let once = nav.display().lines();
        nav.render().unwrap();
        assert_eq!(nav.display().lines(), once);
        assert_eq!(once, vec!["C    <", "      "]);
    }

    #[test]
    fn test_display_errors_propagate() {
        let mut tree: MenuTree = MenuTree::new();
        let root = tree.add_menu("Main");
        let settings = tree.add_menu("Settings");
        letters(&mut tree, root, &["A", "B", "C"]);
        tree.add_option(root, MenuOption::submenu(settings)).unwrap();
        letters(&mut tree, settings, &["Contrast"]);

        let (display, broken) = FlakyDisplay::new(2, 10);
        let mut nav = Navigator::new(tree, display);

        broken.set(true);
        assert!(matches!(nav.start(root), Err(MenuError::Io(_))));

        broken.set(false);
        nav.start(root).unwrap();

        broken.set(true);
        // cursor-only update
        assert!(matches!(nav.focus_next(), Err(MenuError::Io(_))));
        // chunk change
        assert!(matches!(nav.focus_next(), Err(MenuError::Io(_))));

        broken.set(false);
        nav.focus_set(4).unwrap();
        broken.set(true);
        assert!(matches!(nav.choose(), Err(MenuError::Io(_))));
    }
}

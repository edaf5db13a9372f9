//! Menu tree
//!
//! Every menu lives in a [`MenuTree`] and menus refer to each other by
//! [`MenuId`]. Submenu options and parent links hold ids, never ownership.

use crate::error::{MenuError, Result};
use crate::menu::focus::Focus;
use crate::menu::option::MenuOption;
use crate::menu::viewport;
use std::fmt;
use std::ops::Range;

/// Handle of a menu inside its tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MenuId(usize);

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One node of the navigation tree
#[derive(Debug)]
pub struct Menu<V = String> {
    title: String,
    options: Vec<MenuOption<V>>,
    focus: Focus,
    viewport: Option<Range<usize>>,
    parent: Option<MenuId>,
    rows: usize,
    cols: usize,
}

impl<V> Menu<V> {
    fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            options: Vec::new(),
            focus: Focus::default(),
            viewport: None,
            parent: None,
            rows: 0,
            cols: 0,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn options(&self) -> &[MenuOption<V>] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Current focus, 1-based
    pub fn focus(&self) -> usize {
        self.focus.current()
    }

    pub fn previous_focus(&self) -> usize {
        self.focus.previous()
    }

    /// Options currently on screen
    pub fn viewport(&self) -> Option<&[MenuOption<V>]> {
        self.viewport.clone().map(|range| &self.options[range])
    }

    pub fn viewport_range(&self) -> Option<Range<usize>> {
        self.viewport.clone()
    }

    /// Menu this one was last entered from
    pub fn parent(&self) -> Option<MenuId> {
        self.parent
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub(crate) fn focused_option_mut(&mut self) -> Option<&mut MenuOption<V>> {
        let index = self.focus().wrapping_sub(1);
        self.options.get_mut(index)
    }

    pub(crate) fn focus_state_mut(&mut self) -> &mut Focus {
        &mut self.focus
    }

    pub(crate) fn set_parent(&mut self, parent: MenuId) {
        self.parent = Some(parent);
    }

    /// Bind the display geometry
    pub(crate) fn bind(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
    }

    /// Recompute the viewport from the current focus
    pub(crate) fn refresh_viewport(&mut self) {
        self.viewport = self.expected_viewport();
    }

    /// Whether the stored viewport no longer matches focus and option count,
    /// e.g. after options were appended to an active menu
    pub(crate) fn viewport_is_stale(&self) -> bool {
        self.viewport != self.expected_viewport()
    }

    fn expected_viewport(&self) -> Option<Range<usize>> {
        viewport::viewport_for(self.focus(), self.rows, self.options.len())
    }

    /// Whether the last focus move crossed a chunk boundary
    pub fn needs_full_render(&self) -> bool {
        self.focus.needs_full_render(self.rows)
    }
}

/// Owns every menu
#[derive(Debug)]
pub struct MenuTree<V = String> {
    menus: Vec<Menu<V>>,
}

impl<V> Default for MenuTree<V> {
    fn default() -> Self {
        Self { menus: Vec::new() }
    }
}

impl<V> MenuTree<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty menu
    pub fn add_menu(&mut self, title: impl Into<String>) -> MenuId {
        let id = MenuId(self.menus.len());
        self.menus.push(Menu::new(title));
        id
    }

    /// Append an option to `menu`
    ///
    /// A submenu must belong to this tree and must not be the menu itself or
    /// one of its ancestors. On error the option list is unchanged.
    pub fn add_option(&mut self, menu: MenuId, option: MenuOption<V>) -> Result<()> {
        self.get(menu)?;

        if let MenuOption::Submenu(child) = &option {
            let child = *child;
            if child.0 >= self.menus.len() {
                return Err(MenuError::InvalidOptionType {
                    kind: format!("submenu {child} (not in this tree)"),
                });
            }
            if self.reaches(child, menu) {
                return Err(MenuError::InvalidOptionType {
                    kind: format!("submenu {child} (would create a cycle)"),
                });
            }
        }

        self.menus[menu.0].options.push(option);
        Ok(())
    }

    pub fn menu(&self, id: MenuId) -> Option<&Menu<V>> {
        self.menus.get(id.0)
    }

    pub fn get(&self, id: MenuId) -> Result<&Menu<V>> {
        self.menus.get(id.0).ok_or(MenuError::UnknownMenu(id))
    }

    pub(crate) fn get_mut(&mut self, id: MenuId) -> Result<&mut Menu<V>> {
        self.menus.get_mut(id.0).ok_or(MenuError::UnknownMenu(id))
    }

    pub fn len(&self) -> usize {
        self.menus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.menus.is_empty()
    }

    /// Display text of an option; submenus show their own title
    pub fn option_title<'a>(&'a self, option: &'a MenuOption<V>) -> &'a str {
        match option {
            MenuOption::Submenu(id) => self.menu(*id).map(Menu::title).unwrap_or_default(),
            MenuOption::Action(action) => action.title(),
            MenuOption::Noop { title } => title,
        }
    }

    /// Whether `target` is reachable from `from` through submenu options
    fn reaches(&self, from: MenuId, target: MenuId) -> bool {
        let mut stack = vec![from];
        let mut seen = vec![false; self.menus.len()];
        while let Some(id) = stack.pop() {
            if id == target {
                return true;
            }
            if std::mem::replace(&mut seen[id.0], true) {
                continue;
            }
            for option in &self.menus[id.0].options {
                if let MenuOption::Submenu(child) = option {
                    stack.push(*child);
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_options_in_order() {
        let mut tree: MenuTree = MenuTree::new();
        let root = tree.add_menu("Main");
        let sub = tree.add_menu("Settings");
        tree.add_option(root, MenuOption::noop("A")).unwrap();
        tree.add_option(root, MenuOption::submenu(sub)).unwrap();

        let menu = tree.get(root).unwrap();
        let titles: Vec<_> = menu.options().iter().map(|o| tree.option_title(o)).collect();
        assert_eq!(titles, vec!["A", "Settings"]);
        assert_eq!(menu.focus(), 1);
        assert!(menu.viewport().is_none());
        assert!(menu.parent().is_none());
    }

    #[test]
    fn test_submenu_outside_tree_rejected() {
        let mut other: MenuTree = MenuTree::new();
        other.add_menu("x");
        let foreign = other.add_menu("y");

        let mut tree: MenuTree = MenuTree::new();
        let root = tree.add_menu("Main");
        tree.add_option(root, MenuOption::noop("A")).unwrap();

        let err = tree.add_option(root, MenuOption::submenu(foreign)).unwrap_err();
        assert!(matches!(err, MenuError::InvalidOptionType { .. }));
        assert_eq!(tree.get(root).unwrap().len(), 1);
    }

    #[test]
    fn test_submenu_cycle_rejected() {
        let mut tree: MenuTree = MenuTree::new();
        let root = tree.add_menu("Main");
        let sub = tree.add_menu("Sub");
        let leaf = tree.add_menu("Leaf");
        tree.add_option(root, MenuOption::submenu(sub)).unwrap();
        tree.add_option(sub, MenuOption::submenu(leaf)).unwrap();

        for (menu, child) in [(leaf, root), (leaf, sub), (sub, sub)] {
            let err = tree.add_option(menu, MenuOption::submenu(child)).unwrap_err();
            assert!(matches!(err, MenuError::InvalidOptionType { .. }));
        }
        assert_eq!(tree.get(leaf).unwrap().len(), 0);
        assert_eq!(tree.get(sub).unwrap().len(), 1);
    }

    #[test]
    fn test_shared_submenu_allowed() {
        let mut tree: MenuTree = MenuTree::new();
        let root = tree.add_menu("Main");
        let a = tree.add_menu("A");
        let shared = tree.add_menu("Shared");
        tree.add_option(root, MenuOption::submenu(a)).unwrap();
        tree.add_option(root, MenuOption::submenu(shared)).unwrap();
        tree.add_option(a, MenuOption::submenu(shared)).unwrap();
        assert_eq!(tree.get(a).unwrap().len(), 1);
    }

    #[test]
    fn test_add_to_unknown_menu() {
        let mut tree: MenuTree = MenuTree::new();
        tree.add_menu("Main");
        let mut other: MenuTree = MenuTree::new();
        other.add_menu("x");
        let missing = other.add_menu("y");

        assert!(matches!(
            tree.add_option(missing, MenuOption::noop("A")),
            Err(MenuError::UnknownMenu(_))
        ));
    }
}

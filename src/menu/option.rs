//! Menu options

use crate::error::MenuError;
use crate::menu::MenuId;
use std::fmt;
use std::str::FromStr;

/// Action callback, called with the bound value
pub type Callback<V> = Box<dyn FnMut(Option<&V>) -> anyhow::Result<()>>;

/// One entry in a menu
pub enum MenuOption<V = String> {
    /// Opens another menu of the same tree
    Submenu(MenuId),
    /// Leaf action
    Action(Action<V>),
    /// Placeholder; choosing it does nothing
    Noop {
        /// Display text
        title: String,
    },
}

impl<V> MenuOption<V> {
    /// Action without a bound value
    pub fn action<F>(title: impl Into<String>, callback: F) -> Self
    where
        F: FnMut(Option<&V>) -> anyhow::Result<()> + 'static,
    {
        MenuOption::Action(Action::new(title, None, callback))
    }

    /// Action with a bound value
    pub fn action_with_value<F>(title: impl Into<String>, value: V, callback: F) -> Self
    where
        F: FnMut(Option<&V>) -> anyhow::Result<()> + 'static,
    {
        MenuOption::Action(Action::new(title, Some(value), callback))
    }

    pub fn noop(title: impl Into<String>) -> Self {
        MenuOption::Noop {
            title: title.into(),
        }
    }

    pub fn submenu(menu: MenuId) -> Self {
        MenuOption::Submenu(menu)
    }

    pub fn kind(&self) -> OptionKind {
        match self {
            MenuOption::Submenu(_) => OptionKind::Submenu,
            MenuOption::Action(_) => OptionKind::Action,
            MenuOption::Noop { .. } => OptionKind::Noop,
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for MenuOption<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuOption::Submenu(id) => f.debug_tuple("Submenu").field(id).finish(),
            MenuOption::Action(action) => action.fmt(f),
            MenuOption::Noop { title } => f.debug_struct("Noop").field("title", title).finish(),
        }
    }
}

/// Leaf action: a title, an optional value and the callback it is passed to
pub struct Action<V = String> {
    title: String,
    value: Option<V>,
    callback: Callback<V>,
}

impl<V> Action<V> {
    pub fn new<F>(title: impl Into<String>, value: Option<V>, callback: F) -> Self
    where
        F: FnMut(Option<&V>) -> anyhow::Result<()> + 'static,
    {
        Self {
            title: title.into(),
            value,
            callback: Box::new(callback),
        }
    }

    /// Build from an already boxed callback
    pub fn from_callback(title: impl Into<String>, value: Option<V>, callback: Callback<V>) -> Self {
        Self {
            title: title.into(),
            value,
            callback,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Call the callback with the bound value
    pub fn invoke(&mut self) -> anyhow::Result<()> {
        (self.callback)(self.value.as_ref())
    }
}

impl<V: fmt::Debug> fmt::Debug for Action<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("title", &self.title)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

/// Text tag for option kinds, used when options come from untyped input
/// such as a config file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    Submenu,
    Action,
    Noop,
}

impl OptionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKind::Submenu => "submenu",
            OptionKind::Action => "action",
            OptionKind::Noop => "noop",
        }
    }
}

impl FromStr for OptionKind {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "submenu" => Ok(OptionKind::Submenu),
            "action" => Ok(OptionKind::Action),
            "noop" => Ok(OptionKind::Noop),
            _ => Err(MenuError::InvalidOptionType {
                kind: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

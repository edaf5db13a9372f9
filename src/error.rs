//! Error types for the menu engine

use crate::menu::MenuId;
use thiserror::Error;

/// Result type alias for menu operations
pub type Result<T> = std::result::Result<T, MenuError>;

/// Main error type for the menu engine
#[derive(Error, Debug)]
pub enum MenuError {
    #[error("Cannot add option to menu (required submenu, action or noop, got {kind})")]
    InvalidOptionType { kind: String },

    #[error("Focus {focus} is out of range for a menu with {len} options")]
    FocusOutOfRange { focus: usize, len: usize },

    #[error("No menu is active; start a menu first")]
    NotStarted,

    #[error("Menu {0} does not exist in this tree")]
    UnknownMenu(MenuId),

    #[error("Display error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure raised by an action callback, passed through untouched
    #[error(transparent)]
    Action(#[from] anyhow::Error),
}

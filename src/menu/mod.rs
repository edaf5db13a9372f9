//! Menu engine
//!
//! A focus/viewport state machine: the option list is chunked by display rows,
//! only the chunk holding the focus is drawn, and parent links stack menus
//! into a navigable hierarchy.

pub mod focus;
pub mod navigator;
pub mod option;
pub mod render;
pub mod tree;
pub mod viewport;

pub use focus::Focus;
pub use navigator::Navigator;
pub use option::{Action, Callback, MenuOption, OptionKind};
pub use render::{DEFAULT_CURSOR, clamp_title};
pub use tree::{Menu, MenuId, MenuTree};

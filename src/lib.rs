//! LCD Menu - A hierarchical menu engine for character LCD displays
//!
//! This library provides a cursor-driven menu tree for fixed-size
//! character displays (e.g. 20x4 HD44780 panels) with support for:
//! - Nested submenus with return-to-parent navigation
//! - Action entries with bound values and callbacks
//! - Viewport chunking so only the visible rows are redrawn
//! - Cheap cursor-only updates when focus stays inside a chunk
//! - TOML menu definitions and a terminal LCD emulator

// Initialize i18n with locale files
rust_i18n::i18n!("locales", fallback = "en");

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod i18n;
pub mod menu;
pub mod tui;

pub use cli::Cli;
pub use config::{Config, ConfigError, DisplayConfig, OptionConfig};
pub use display::{CharGrid, Display};
pub use error::{MenuError, Result};
pub use i18n::init_locale;
pub use menu::{Menu, MenuId, MenuOption, MenuTree, Navigator, OptionKind};
pub use tui::TuiApp;

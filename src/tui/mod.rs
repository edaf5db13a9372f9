//! Ratatui 终端 UI 模块
//!
//! 在终端中模拟字符液晶屏，用键盘驱动菜单。

pub mod app;
pub mod components;
pub mod event;
pub mod state;
pub mod theme;
pub mod ui;

pub use app::TuiApp;
pub use event::{EventPoll, TuiEvent};
pub use state::{AppState, Outbox, Status};
pub use theme::{LCD, Theme, theme};
pub use ui::{draw, render};

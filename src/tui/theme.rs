//! 配色
//!
//! 终端默认背景上的一块黄绿背光液晶屏。

use crate::tui::state::Status;
use ratatui::style::{Color, Modifier, Style};

/// 液晶模拟器配色
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// 背光
    pub backlight: Color,
    /// 液晶像素
    pub pixel: Color,
    /// 面板外框与导航路径
    pub bezel: Color,
    /// 状态栏文字
    pub text: Color,
    /// 按键提示
    pub dim: Color,
    /// 错误状态
    pub alert: Color,
}

impl Theme {
    /// 液晶面板
    pub fn panel(&self) -> Style {
        Style::new().fg(self.pixel).bg(self.backlight)
    }

    pub fn bezel(&self) -> Style {
        Style::new().fg(self.bezel)
    }

    /// 导航路径
    pub fn breadcrumb(&self) -> Style {
        self.bezel().add_modifier(Modifier::BOLD)
    }

    /// 状态栏，错误时醒目显示
    pub fn status(&self, status: &Status) -> Style {
        match status {
            Status::Info(_) => Style::new().fg(self.text),
            Status::Error(_) => Style::new().fg(self.alert).add_modifier(Modifier::BOLD),
        }
    }

    pub fn hint(&self) -> Style {
        Style::new().fg(self.dim)
    }
}

/// 经典 HD44780 黄绿屏
pub static LCD: Theme = Theme {
    backlight: Color::Rgb(0x9a, 0xb8, 0x3c),
    pixel: Color::Rgb(0x1e, 0x2a, 0x10),
    bezel: Color::Cyan,
    text: Color::White,
    dim: Color::Gray,
    alert: Color::Red,
};

pub fn theme() -> &'static Theme {
    &LCD
}

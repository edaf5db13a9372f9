//! UI渲染模块
//!
//! 把内存字符网格画成一块液晶面板，上方显示导航路径，下方显示状态和按键提示。

use crate::display::Display;
use crate::tui::components::{centered, render_hint, render_title_block, three_panel_layout};
use crate::tui::state::{AppState, Status};
use crate::tui::theme::theme;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    text::Line,
    widgets::{Block, BorderType, Paragraph},
};
use rust_i18n::t;

/// 渲染一帧
pub fn render(terminal: &mut DefaultTerminal, state: &AppState) -> std::io::Result<()> {
    terminal.draw(|frame| draw(frame, state))?;
    Ok(())
}

/// 绘制整个模拟器界面
pub fn draw(frame: &mut Frame, state: &AppState) {
    let [header, body, footer] = three_panel_layout(frame.area());

    render_title_block(&state.navigator.path().join(" > "), frame, header);
    draw_lcd(frame, body, state);
    draw_footer(frame, footer, state);
}

fn draw_lcd(frame: &mut Frame, area: Rect, state: &AppState) {
    let grid = state.navigator.display();
    let width = u16::try_from(grid.cols() + 2).unwrap_or(u16::MAX);
    let height = u16::try_from(grid.rows() + 2).unwrap_or(u16::MAX);
    let panel = centered(area, width, height);

    let lines: Vec<Line> = grid.lines().into_iter().map(Line::from).collect();
    let lcd = Paragraph::new(lines).style(theme().panel()).block(
        Block::bordered()
            .title(t!("display_title", rows = grid.rows(), cols = grid.cols()).to_string())
            .border_type(BorderType::Thick)
            .border_style(theme().bezel()),
    );
    frame.render_widget(lcd, panel);
}

fn draw_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let [status_area, hint_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

    let message = match &state.status {
        Status::Info(message) | Status::Error(message) => message.as_str(),
    };
    let status = Paragraph::new(message)
        .style(theme().status(&state.status))
        .alignment(Alignment::Center);
    frame.render_widget(status, status_area);

    render_hint(&t!("lcd_hint"), frame, hint_area);
}

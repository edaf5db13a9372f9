//! 模拟器状态
//!
//! 把终端输入翻译为导航调用，并收集动作回调产生的结果。

use crate::config::{Command, Config, ConfigError, OptionConfig};
use crate::display::CharGrid;
use crate::error::{MenuError, Result};
use crate::menu::{Callback, Navigator};
use crate::tui::event::TuiEvent;
use rust_i18n::t;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{info, warn};

/// 动作回调写入的结果
#[derive(Debug, Default)]
pub struct Outbox {
    /// 最近一次动作的值
    pub last_action: Option<String>,
    /// 是否请求退出
    pub quit: bool,
}

/// 状态栏消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Info(String),
    Error(String),
}

/// 模拟器状态
#[derive(Debug)]
pub struct AppState {
    /// 菜单导航器，显示设备为内存字符网格
    pub navigator: Navigator<CharGrid>,
    /// 状态栏
    pub status: Status,
    /// 是否退出
    pub should_exit: bool,
    outbox: Rc<RefCell<Outbox>>,
}

impl AppState {
    /// 按配置构建菜单树并启动根菜单
    pub fn from_config(config: &Config) -> std::result::Result<Self, ConfigError> {
        config.validate()?;

        let outbox = Rc::new(RefCell::new(Outbox::default()));
        let (tree, root) = config.build_tree(|option| make_callback(option, &outbox))?;

        let display = CharGrid::new(config.display.rows, config.display.cols);
        let mut navigator = Navigator::new(tree, display).with_cursor(config.display.cursor);
        navigator.start(root)?;

        Ok(Self {
            navigator,
            status: Status::Info(t!("status_ready").to_string()),
            should_exit: false,
            outbox,
        })
    }

    /// 处理一个输入事件，返回是否应退出
    pub fn handle_event(&mut self, event: TuiEvent) -> Result<bool> {
        let outcome = match event {
            TuiEvent::Next => self.navigator.focus_next(),
            TuiEvent::Prev => self.navigator.focus_prev(),
            TuiEvent::Choose => self.navigator.choose().map(|_| ()),
            TuiEvent::Back => self.navigator.parent().map(|_| ()),
            TuiEvent::Jump(n) => self.navigator.focus_set(n),
            TuiEvent::First | TuiEvent::Last => {
                let len = self.navigator.active_menu().map_or(0, |menu| menu.len());
                let target = if event == TuiEvent::First { 1 } else { len };
                if len == 0 {
                    Ok(())
                } else {
                    self.navigator.focus_set(target)
                }
            }
            TuiEvent::Quit => {
                self.should_exit = true;
                return Ok(true);
            }
            TuiEvent::Resize(..) | TuiEvent::None => Ok(()),
        };

        match outcome {
            Ok(()) => {}
            Err(MenuError::FocusOutOfRange { focus, len }) => {
                self.status = Status::Error(
                    t!("status_focus_out_of_range", focus = focus, len = len).to_string(),
                );
            }
            Err(MenuError::Action(e)) => {
                warn!(error = %e, "Action failed");
                self.status =
                    Status::Error(t!("status_action_error", error = e.to_string()).to_string());
            }
            Err(e) => return Err(e),
        }

        let mut outbox = self.outbox.borrow_mut();
        if let Some(value) = outbox.last_action.take() {
            self.status = Status::Info(t!("status_action", value = value).to_string());
        }
        if outbox.quit {
            self.status = Status::Info(t!("status_quit").to_string());
            self.should_exit = true;
        }
        Ok(self.should_exit)
    }
}

/// 为配置中的动作生成回调
fn make_callback(option: &OptionConfig, outbox: &Rc<RefCell<Outbox>>) -> Callback<String> {
    let outbox = Rc::clone(outbox);
    let title = option.title.clone();

    match option.command() {
        Command::Log => Box::new(move |value: Option<&String>| {
            let value = value.cloned().unwrap_or_else(|| title.clone());
            info!(action = %title, value = %value, "Action chosen");
            outbox.borrow_mut().last_action = Some(value);
            Ok(())
        }),
        Command::Quit => Box::new(move |_: Option<&String>| {
            info!(action = %title, "Quit requested");
            outbox.borrow_mut().quit = true;
            Ok(())
        }),
    }
}

//! TUI application main module
//!
//! Contains the emulator's terminal setup and event loop.

use crate::error::Result;
use crate::tui::event::{EventPoll, TuiEvent};
use crate::tui::state::AppState;
use crate::tui::ui::render;
use ratatui::DefaultTerminal;
use tracing::info;

/// TUI application
#[derive(Debug)]
pub struct TuiApp {
    /// Terminal
    pub terminal: DefaultTerminal,
    /// Event poller
    pub event_poll: EventPoll,
    /// Application state
    pub state: AppState,
}

impl TuiApp {
    /// Create new TUI application, taking over the terminal
    pub fn new(state: AppState) -> Self {
        let terminal = ratatui::init();
        let event_poll = EventPoll::default();

        Self {
            terminal,
            event_poll,
            state,
        }
    }

    /// Run application until the user quits
    pub fn run(&mut self) -> Result<()> {
        let result = self.event_loop();
        ratatui::restore();
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        // Initial render
        render(&mut self.terminal, &self.state)?;

        loop {
            match self.event_poll.next() {
                TuiEvent::None => continue,
                TuiEvent::Resize(_, _) => {
                    render(&mut self.terminal, &self.state)?;
                }
                event => {
                    if self.state.handle_event(event)? {
                        info!("Emulator exit requested");
                        break;
                    }
                    render(&mut self.terminal, &self.state)?;
                }
            }
        }

        Ok(())
    }
}

//! Keyboard input
//!
//! A real panel has a few buttons or a rotary encoder. Terminal keys are
//! folded into the same small set of navigation intents so the emulator
//! state never looks at raw key codes.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// Poll interval in milliseconds
const TICK_RATE: u64 = 50;

/// Navigation intent produced by one terminal event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    /// Focus the next option (Down, `j`)
    Next,
    /// Focus the previous option (Up, `k`)
    Prev,
    /// Choose the focused option (Enter, Right, Space, `l`)
    Choose,
    /// Return to the parent menu (Esc, Left, Backspace, `h`)
    Back,
    /// Focus the first option (Home, `g`)
    First,
    /// Focus the last option (End, `G`)
    Last,
    /// Focus option `n`, 1-based (digits)
    Jump(usize),
    /// Leave the emulator (`q`, Ctrl+C, Ctrl+D)
    Quit,
    /// Terminal resized
    Resize(u16, u16),
    /// Timeout or an unmapped key
    None,
}

impl From<Event> for TuiEvent {
    fn from(event: Event) -> Self {
        match event {
            Event::Key(key) => key.into(),
            Event::Resize(width, height) => TuiEvent::Resize(width, height),
            _ => TuiEvent::None,
        }
    }
}

impl From<KeyEvent> for TuiEvent {
    fn from(key: KeyEvent) -> Self {
        if key.kind != KeyEventKind::Press {
            return TuiEvent::None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('d') => TuiEvent::Quit,
                _ => TuiEvent::None,
            };
        }

        match key.code {
            KeyCode::Down | KeyCode::Char('j') => TuiEvent::Next,
            KeyCode::Up | KeyCode::Char('k') => TuiEvent::Prev,
            KeyCode::Enter | KeyCode::Right | KeyCode::Char(' ') | KeyCode::Char('l') => {
                TuiEvent::Choose
            }
            KeyCode::Esc | KeyCode::Left | KeyCode::Backspace | KeyCode::Char('h') => {
                TuiEvent::Back
            }
            KeyCode::Home | KeyCode::Char('g') => TuiEvent::First,
            KeyCode::End | KeyCode::Char('G') => TuiEvent::Last,
            KeyCode::Char(c @ '1'..='9') => c
                .to_digit(10)
                .map_or(TuiEvent::None, |n| TuiEvent::Jump(n as usize)),
            KeyCode::Char('q') => TuiEvent::Quit,
            _ => TuiEvent::None,
        }
    }
}

/// Blocking poller with a short timeout
#[derive(Debug)]
pub struct EventPoll {
    tick_rate: Duration,
}

impl EventPoll {
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Wait up to one tick for the next intent
    pub fn next(&self) -> TuiEvent {
        if event::poll(self.tick_rate).unwrap_or(false) {
            event::read()
                .map(TuiEvent::from)
                .unwrap_or(TuiEvent::None)
        } else {
            TuiEvent::None
        }
    }
}

impl Default for EventPoll {
    fn default() -> Self {
        Self::new(Duration::from_millis(TICK_RATE))
    }
}

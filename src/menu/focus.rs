//! Focus state

use crate::error::{MenuError, Result};
use crate::menu::viewport::chunk_of;

/// 1-based focus position with the position it last moved from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Focus {
    current: usize,
    previous: usize,
}

impl Default for Focus {
    fn default() -> Self {
        // previous = 0 means no move has happened yet
        Self {
            current: 1,
            previous: 0,
        }
    }
}

impl Focus {
    /// Current focus
    pub fn current(&self) -> usize {
        self.current
    }

    /// Focus before the last move
    pub fn previous(&self) -> usize {
        self.previous
    }

    /// Advance, wrapping past the end to 1
    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.previous = self.current;
        self.current += 1;
        if self.current > len {
            self.current = 1;
        }
    }

    /// Step back, wrapping past 1 to the end
    pub fn prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.previous = self.current;
        self.current = if self.current <= 1 {
            len
        } else {
            self.current - 1
        };
    }

    /// Jump to `focus`; values outside `1..=len` fail and change nothing
    pub fn set(&mut self, focus: usize, len: usize) -> Result<()> {
        if focus == 0 || focus > len {
            return Err(MenuError::FocusOutOfRange { focus, len });
        }
        self.previous = self.current;
        self.current = focus;
        Ok(())
    }

    /// Whether the last move crossed a chunk boundary
    pub fn needs_full_render(&self, rows: usize) -> bool {
        self.previous != 0 && chunk_of(self.previous, rows) != chunk_of(self.current, rows)
    }
}

//! Character display interface
//!
//! The menu core only talks to hardware through [`Display`]. [`CharGrid`] is
//! an in-memory implementation used by the terminal emulator and by tests.

use std::io;

/// A fixed-size character display such as an HD44780 panel
pub trait Display {
    fn rows(&self) -> usize;
    fn cols(&self) -> usize;
    /// Blank the whole screen
    fn clear(&mut self) -> io::Result<()>;
    /// Move the write position
    fn set_cursor(&mut self, col: usize, row: usize) -> io::Result<()>;
    /// Write text at the write position without wrapping
    fn print(&mut self, text: &str) -> io::Result<()>;
}

impl<D: Display + ?Sized> Display for &mut D {
    fn rows(&self) -> usize {
        (**self).rows()
    }

    fn cols(&self) -> usize {
        (**self).cols()
    }

    fn clear(&mut self) -> io::Result<()> {
        (**self).clear()
    }

    fn set_cursor(&mut self, col: usize, row: usize) -> io::Result<()> {
        (**self).set_cursor(col, row)
    }

    fn print(&mut self, text: &str) -> io::Result<()> {
        (**self).print(text)
    }
}

/// In-memory character grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharGrid {
    rows: usize,
    cols: usize,
    cells: Vec<char>,
    col: usize,
    row: usize,
    /// Number of clears, tells full redraws apart from cursor updates
    clears: usize,
}

impl CharGrid {
    /// Blank grid
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![' '; rows * cols],
            col: 0,
            row: 0,
            clears: 0,
        }
    }

    /// One row of text, trailing blanks included
    pub fn line(&self, row: usize) -> String {
        if row >= self.rows {
            return String::new();
        }
        let start = row * self.cols;
        self.cells[start..start + self.cols].iter().collect()
    }

    pub fn lines(&self) -> Vec<String> {
        (0..self.rows).map(|row| self.line(row)).collect()
    }

    pub fn cell(&self, col: usize, row: usize) -> Option<char> {
        if col < self.cols && row < self.rows {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    pub fn clears(&self) -> usize {
        self.clears
    }
}

impl Display for CharGrid {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn clear(&mut self) -> io::Result<()> {
        self.cells.fill(' ');
        self.col = 0;
        self.row = 0;
        self.clears += 1;
        Ok(())
    }

    fn set_cursor(&mut self, col: usize, row: usize) -> io::Result<()> {
        if col >= self.cols || row >= self.rows {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "cursor ({col}, {row}) outside {}x{} display",
                    self.cols, self.rows
                ),
            ));
        }
        self.col = col;
        self.row = row;
        Ok(())
    }

    fn print(&mut self, text: &str) -> io::Result<()> {
        // characters past the end of the row are dropped
        for ch in text.chars() {
            if self.col >= self.cols {
                break;
            }
            self.cells[self.row * self.cols + self.col] = ch;
            self.col += 1;
        }
        Ok(())
    }
}

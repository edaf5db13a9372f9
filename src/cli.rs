//! CLI argument parsing with clap

use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

/// LCD Menu - Character LCD menu emulator
///
/// Loads a menu tree from a TOML file and drives it on an emulated
/// character display in the terminal. Arrow keys move the cursor,
/// Enter chooses, Esc returns to the parent menu.
#[derive(Parser, Debug)]
#[command(name = "lcd-menu")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to menu configuration file (TOML format)
    ///
    /// When omitted, a built-in demo menu is used.
    #[arg(short = 'C', long, env = "LCD_MENU_CONFIG")]
    pub config: Option<PathBuf>,

    /// Display rows (overrides the config file)
    #[arg(short, long)]
    pub rows: Option<usize>,

    /// Display columns (overrides the config file)
    #[arg(short, long)]
    pub cols: Option<usize>,

    /// Cursor glyph (overrides the config file)
    #[arg(long)]
    pub cursor: Option<char>,

    /// Print a sample configuration file and exit
    #[arg(long)]
    pub sample_config: bool,

    /// Validate the configuration, print the menu tree and exit
    #[arg(long)]
    pub check: bool,

    /// Directory for log files (defaults to ./Log next to the executable)
    #[arg(long, env = "LCD_MENU_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output log format as JSON
    #[arg(long)]
    pub json_log: bool,
}

impl Cli {
    /// Get config file name (without extension) for log naming
    pub fn config_name(&self) -> Option<String> {
        self.config.as_ref().and_then(|p| {
            p.file_stem()
                .and_then(|s| s.to_str())
                .map(|s| s.to_string())
        })
    }

    /// Merge CLI arguments with config from file
    /// CLI arguments take precedence over config file settings
    pub fn merge_with_config(&self, mut config: Config) -> Config {
        if let Some(rows) = self.rows {
            config.display.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.display.cols = cols;
        }
        if let Some(cursor) = self.cursor {
            config.display.cursor = cursor;
        }

        config
    }
}

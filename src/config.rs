//! Configuration types for the menu emulator
//!
//! A configuration file describes the display geometry and the menu tree.
//! Option kinds are kept as text so that unknown kinds surface as
//! `InvalidOptionType` when the tree is built.

use crate::error::MenuError;
use crate::menu::{Action, Callback, MenuId, MenuOption, MenuTree, OptionKind};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// What an action entry does when chosen in the emulator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Command {
    /// Log the bound value and show it in the status line
    #[default]
    Log,
    /// Leave the emulator
    Quit,
}

/// Display geometry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Number of text rows
    pub rows: usize,

    /// Number of character columns (the last one holds the cursor)
    pub cols: usize,

    /// Cursor glyph drawn in the reserved column
    #[serde(default = "default_cursor")]
    pub cursor: char,
}

fn default_cursor() -> char {
    crate::menu::DEFAULT_CURSOR
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            rows: 4,
            cols: 20,
            cursor: default_cursor(),
        }
    }
}

/// One entry of a menu, as written in the configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionConfig {
    /// Option kind: "submenu", "action" or "noop"
    pub kind: String,

    /// Display label
    pub title: String,

    /// Action behaviour (actions only, defaults to log)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<Command>,

    /// Value passed to the action callback
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Nested entries (submenus only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionConfig>,
}

impl OptionConfig {
    fn new(kind: OptionKind, title: &str) -> Self {
        Self {
            kind: kind.as_str().to_string(),
            title: title.to_string(),
            command: None,
            value: None,
            options: vec![],
        }
    }

    /// Effective command of an action entry
    pub fn command(&self) -> Command {
        self.command.unwrap_or_default()
    }
}

/// Root menu definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuConfig {
    /// Title of the root menu
    pub title: String,

    /// Root entries
    #[serde(default)]
    pub options: Vec<OptionConfig>,
}

/// Configuration for the menu emulator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Display geometry
    #[serde(default)]
    pub display: DisplayConfig,

    /// Menu tree
    pub menu: MenuConfig,
}

impl Default for Config {
    fn default() -> Self {
        let mut hello = OptionConfig::new(OptionKind::Action, "Say hello");
        hello.value = Some("hello".into());

        let mut settings = OptionConfig::new(OptionKind::Submenu, "Settings");
        settings.options = ["Low", "Medium", "High"]
            .into_iter()
            .map(|level| {
                let mut option = OptionConfig::new(OptionKind::Action, &format!("Contrast {level}"));
                option.value = Some(level.to_lowercase());
                option
            })
            .collect();
        settings.options.push(OptionConfig::new(OptionKind::Noop, "----------"));

        let mut quit = OptionConfig::new(OptionKind::Action, "Quit");
        quit.command = Some(Command::Quit);

        Self {
            display: DisplayConfig::default(),
            menu: MenuConfig {
                title: "Main".into(),
                options: vec![hello, settings, quit],
            },
        }
    }
}

impl Config {
    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config = Config::parse(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError { source: e })?;

        fs::write(path, content).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }

    /// Check display geometry
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display.rows == 0 {
            return Err(ConfigError::Invalid("display.rows must be at least 1".into()));
        }
        if self.display.cols < 2 {
            return Err(ConfigError::Invalid(
                "display.cols must be at least 2 (one text column plus the cursor)".into(),
            ));
        }
        Ok(())
    }

    /// Build the menu tree, asking `make_action` for each action's callback
    pub fn build_tree<F>(&self, mut make_action: F) -> Result<(MenuTree, MenuId), ConfigError>
    where
        F: FnMut(&OptionConfig) -> Callback<String>,
    {
        let mut tree = MenuTree::new();
        let root = add_menu(&mut tree, &self.menu.title, &self.menu.options, &mut make_action)?;
        Ok((tree, root))
    }

    /// Generate a sample configuration file content
    pub fn sample_config() -> String {
        r#"# LCD Menu Configuration File
# This file uses TOML format (https://toml.io)

[display]
# Geometry of the character display
rows = 4
cols = 20
# Glyph drawn in the last column next to the focused entry
cursor = "<"

[menu]
title = "Main"

# Option kinds:
# - action: runs a command with an optional value ("log" or "quit")
# - submenu: opens a nested menu defined by its own options
# - noop: placeholder line, choosing it does nothing

[[menu.options]]
kind = "action"
title = "Say hello"
command = "log"
value = "hello"

[[menu.options]]
kind = "submenu"
title = "Settings"

[[menu.options.options]]
kind = "action"
title = "Contrast Low"
value = "low"

[[menu.options.options]]
kind = "action"
title = "Contrast High"
value = "high"

[[menu.options.options]]
kind = "noop"
title = "----------"

[[menu.options]]
kind = "action"
title = "Quit"
command = "quit"
"#
        .to_string()
    }
}

fn add_menu<F>(
    tree: &mut MenuTree,
    title: &str,
    options: &[OptionConfig],
    make_action: &mut F,
) -> Result<MenuId, ConfigError>
where
    F: FnMut(&OptionConfig) -> Callback<String>,
{
    let id = tree.add_menu(title);
    for option in options {
        let built = match option.kind.parse::<OptionKind>()? {
            OptionKind::Submenu => {
                let child = add_menu(tree, &option.title, &option.options, make_action)?;
                MenuOption::submenu(child)
            }
            OptionKind::Action => MenuOption::Action(Action::from_callback(
                option.title.as_str(),
                option.value.clone(),
                make_action(option),
            )),
            OptionKind::Noop => MenuOption::noop(option.title.as_str()),
        };
        tree.add_option(id, built)?;
    }
    Ok(id)
}

/// Errors that can occur when loading, saving or building configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read configuration file
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to parse configuration file
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// Failed to write configuration file
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to serialize configuration
    SerializeError { source: toml::ser::Error },
    /// Menu tree could not be built
    Menu(MenuError),
    /// Configuration values are out of range
    Invalid(String),
}

impl From<MenuError> for ConfigError {
    fn from(e: MenuError) -> Self {
        ConfigError::Menu(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError { path, source } => {
                write!(f, "Failed to read config file '{}': {}", path.display(), source)
            }
            ConfigError::ParseError { path, source } => {
                write!(f, "Failed to parse config file '{}': {}", path.display(), source)
            }
            ConfigError::WriteError { path, source } => {
                write!(f, "Failed to write config file '{}': {}", path.display(), source)
            }
            ConfigError::SerializeError { source } => {
                write!(f, "Failed to serialize config: {}", source)
            }
            ConfigError::Menu(source) => write!(f, "Invalid menu definition: {}", source),
            ConfigError::Invalid(message) => write!(f, "Invalid configuration: {}", message),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::ReadError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
            ConfigError::WriteError { source, .. } => Some(source),
            ConfigError::SerializeError { source } => Some(source),
            ConfigError::Menu(source) => Some(source),
            ConfigError::Invalid(_) => None,
        }
    }
}

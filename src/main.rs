//! LCD Menu - Character LCD menu emulator
//!
//! Loads a menu tree from a TOML file and drives it on an emulated
//! character display in the terminal.

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use lcd_menu::config::OptionConfig;
use lcd_menu::tui::AppState;
use lcd_menu::{Cli, Config, TuiApp, init_locale};
use std::path::{Path, PathBuf};
use tracing::{Level, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> Result<()> {
    // Initialize locale based on system settings
    init_locale();

    let cli = Cli::parse();

    if cli.sample_config {
        print!("{}", Config::sample_config());
        return Ok(());
    }

    let exe_dir = get_executable_dir()?;
    let log_path = get_log_path(&exe_dir, &cli);

    // The emulator owns the terminal, so logs only go to the file
    let _guard = setup_logging(&cli, &log_path)?;

    info!(version = env!("CARGO_PKG_VERSION"), "LCD Menu starting");

    let config = load_config(&cli, &exe_dir)?;
    config.validate()?;

    if cli.verbose {
        info!(?config, "Configuration loaded");
    }
    info!(log_file = %log_path.display(), "Log file location");

    if cli.check {
        config.build_tree(|_| Box::new(|_: Option<&String>| Ok(())))?;
        println!(
            "{} ({}x{})",
            config.menu.title, config.display.rows, config.display.cols
        );
        print_options(&config.menu.options, 1);
        return Ok(());
    }

    let state = AppState::from_config(&config)?;
    let mut app = TuiApp::new(state);
    app.run()?;

    info!("Session complete");
    Ok(())
}

/// Print the menu tree as an indented outline
fn print_options(options: &[OptionConfig], depth: usize) {
    for option in options {
        println!("{}- [{}] {}", "  ".repeat(depth), option.kind, option.title);
        print_options(&option.options, depth + 1);
    }
}

/// Get the directory where the executable is located
fn get_executable_dir() -> Result<PathBuf> {
    let exe_path = std::env::current_exe()?;
    Ok(exe_path
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".")))
}

/// Determine the log file path based on config file or timestamp
fn get_log_path(exe_dir: &Path, cli: &Cli) -> PathBuf {
    let log_dir = cli.log_dir.clone().unwrap_or_else(|| exe_dir.join("Log"));
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");

    let prefix = cli.config_name().unwrap_or_else(|| "Emulator".to_string());
    log_dir.join(format!("{}_{}.log", prefix, timestamp))
}

/// Resolve config path - supports shorthand syntax
fn resolve_config_path(exe_dir: &Path, config_path: &Path) -> PathBuf {
    if config_path.exists() {
        return config_path.to_path_buf();
    }

    let with_extension = if config_path.extension().is_none() {
        config_path.with_extension("toml")
    } else {
        config_path.to_path_buf()
    };

    if with_extension.exists() {
        return with_extension;
    }

    let config_dir = exe_dir.join("Config");
    let filename = config_path.file_name().unwrap_or(config_path.as_os_str());

    let mut in_config_dir = config_dir.join(filename);
    if in_config_dir.extension().is_none() {
        in_config_dir = in_config_dir.with_extension("toml");
    }

    if in_config_dir.exists() {
        return in_config_dir;
    }

    config_path.to_path_buf()
}

/// Load configuration from file, or use the built-in demo menu
fn load_config(cli: &Cli, exe_dir: &Path) -> Result<Config> {
    let config = match cli.config {
        Some(ref config_path) => {
            let resolved_path = resolve_config_path(exe_dir, config_path);
            info!(config_file = %resolved_path.display(), "Loading configuration from file");
            Config::load_from_file(&resolved_path)?
        }
        None => {
            info!("No configuration file given, using the demo menu");
            Config::default()
        }
    };

    Ok(cli.merge_with_config(config))
}

/// Setup file-only logging
fn setup_logging(cli: &Cli, log_path: &Path) -> Result<WorkerGuard> {
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_path)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if cli.json_log {
        subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .init();
    } else {
        subscriber
            .with(fmt::layer().with_ansi(false).with_writer(non_blocking))
            .init();
    }

    Ok(guard)
}

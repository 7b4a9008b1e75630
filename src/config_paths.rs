//! Where toolbench keeps its files on disk
//!
//! Everything lives in one per-user directory: `config.yaml`, the saved
//! `layout.json`, and a `logs/` folder for the rolling trace file.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

const APP_DIR: &str = "toolbench";
const CONFIG_FILE: &str = "config.yaml";
const LAYOUT_FILE: &str = "layout.json";
const LOGS_DIR: &str = "logs";

/// Pick the app directory from an explicit XDG base or the home directory
///
/// An empty or relative `XDG_CONFIG_HOME` is ignored, as the XDG base
/// directory rules require.
pub fn resolve_app_dir(xdg_config_home: Option<&Path>, home: Option<&Path>) -> Option<PathBuf> {
    let base = match xdg_config_home.filter(|p| p.is_absolute()) {
        Some(xdg) => xdg.to_path_buf(),
        None => home?.join(".config"),
    };
    Some(base.join(APP_DIR))
}

/// Per-user toolbench directory
///
/// `%APPDATA%\toolbench` on Windows, otherwise `$XDG_CONFIG_HOME/toolbench`
/// falling back to `~/.config/toolbench`.
pub fn config_dir() -> Option<PathBuf> {
    if cfg!(target_os = "windows") {
        return env::var_os("APPDATA").map(|appdata| PathBuf::from(appdata).join(APP_DIR));
    }
    let xdg = env::var_os("XDG_CONFIG_HOME").map(PathBuf::from);
    resolve_app_dir(xdg.as_deref(), dirs::home_dir().as_deref())
}

pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Default location of the saved layout
pub fn layout_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(LAYOUT_FILE))
}

pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(LOGS_DIR))
}

/// Create the logs directory (and the app directory above it) if missing
pub fn ensure_logs_dir() -> Result<PathBuf> {
    let logs = logs_dir().context("no per-user config directory available")?;
    fs::create_dir_all(&logs)
        .with_context(|| format!("failed to create log directory {}", logs.display()))?;
    Ok(logs)
}

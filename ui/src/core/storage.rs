//! Local persistence for user preferences (currently the theme).
//!
//! Web builds use `localStorage`; native builds write a small file in the
//! platform config directory. Callers treat every failure as "no preference".

use super::theme::Theme;

#[cfg(target_arch = "wasm32")]
const THEME_KEY: &str = "ingibcontrol.theme";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage backend unavailable")]
    Unavailable,
    #[error("storage write rejected: {0}")]
    Rejected(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Previously saved theme, if any.
pub fn load_theme() -> Option<Theme> {
    let raw = read_theme_raw()?;
    match raw.parse() {
        Ok(theme) => Some(theme),
        Err(err) => {
            dioxus::logger::tracing::warn!("[storage] ignoring stored theme ({err})");
            None
        }
    }
}

pub fn save_theme(theme: Theme) -> Result<(), StorageError> {
    write_theme_raw(theme.as_str())
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(target_arch = "wasm32")]
fn read_theme_raw() -> Option<String> {
    local_storage()?.get_item(THEME_KEY).ok().flatten()
}

#[cfg(target_arch = "wasm32")]
fn write_theme_raw(value: &str) -> Result<(), StorageError> {
    let storage = local_storage().ok_or(StorageError::Unavailable)?;
    storage
        .set_item(THEME_KEY, value)
        .map_err(|err| StorageError::Rejected(format!("{err:?}")))
}

/// Per-user configuration directory (`directories` project dirs).
#[cfg(not(target_arch = "wasm32"))]
pub fn config_dir() -> Option<std::path::PathBuf> {
    directories::ProjectDirs::from("ru", "Axon", "IngibControl")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

#[cfg(not(target_arch = "wasm32"))]
fn read_theme_raw() -> Option<String> {
    read_optional(&config_dir()?.join("theme"))
}

/// File contents, `None` when absent. Other I/O failures are logged.
#[cfg(not(target_arch = "wasm32"))]
fn read_optional(path: &std::path::Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(raw) => Some(raw),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
        Err(err) => {
            dioxus::logger::tracing::warn!("[storage] couldn't read {} ({err})", path.display());
            None
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_theme_raw(value: &str) -> Result<(), StorageError> {
    let dir = config_dir().ok_or(StorageError::Unavailable)?;
    std::fs::create_dir_all(&dir)?;
    std::fs::write(dir.join("theme"), value)?;
    Ok(())
}

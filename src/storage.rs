use crate::settings::Settings;
use std::path::{Path, PathBuf};

/// Expand a leading `~` to the user's home directory.
pub fn untildify(path: &str) -> String {
    if let Some(rest) = path.strip_prefix('~') {
        if rest.is_empty() || rest.starts_with('/') || rest.starts_with('\\') {
            if let Some(home) = dirs_next::home_dir() {
                return format!("{}{}", home.display(), rest);
            }
        }
    }
    path.to_string()
}

/// Platform default location of VS Code's `state.vscdb`.
///
/// Unrecognized platforms fall back to the macOS layout.
pub fn default_db_path() -> Option<PathBuf> {
    if cfg!(target_os = "windows") {
        std::env::var_os("APPDATA").map(|appdata| {
            Path::new(&appdata)
                .join("Code")
                .join("User")
                .join("globalStorage")
                .join("state.vscdb")
        })
    } else if cfg!(target_os = "linux") {
        dirs_next::home_dir().map(|h| h.join(".config/Code/User/globalStorage/state.vscdb"))
    } else {
        dirs_next::home_dir()
            .map(|h| h.join("Library/Application Support/Code/User/globalStorage/state.vscdb"))
    }
}

/// Determine which state database to read.
///
/// A persisted override wins regardless of whether it exists (the
/// extractor reports a missing file at use time). With no override,
/// an existing platform default is persisted as the new override and
/// returned. `Ok(None)` means nothing usable is configured.
///
/// Runs at the start of every extraction cycle; nothing is cached, so
/// external changes are picked up immediately.
pub fn resolve_db_path(
    settings: &mut Settings,
    settings_path: &str,
) -> anyhow::Result<Option<PathBuf>> {
    if let Some(over) = settings.db_path.as_deref() {
        if !over.is_empty() {
            return Ok(Some(PathBuf::from(untildify(over))));
        }
    }
    if let Some(default) = default_db_path() {
        if default.is_file() {
            tracing::debug!("auto-configuring state database {}", default.display());
            settings.db_path = Some(default.to_string_lossy().into_owned());
            settings.save(settings_path)?;
            return Ok(Some(default));
        }
    }
    Ok(None)
}

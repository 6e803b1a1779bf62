use chrono::{DateTime, Local};
use rusqlite::{params, Connection, OpenFlags, OptionalExtension};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Key under which VS Code stores its recently opened list.
pub const RECENT_KEY: &str = "history.recentlyOpenedPathsList";
/// The single key/value table inside `state.vscdb`.
pub const STATE_TABLE: &str = "ItemTable";

const WORKSPACE_SUFFIX: &str = ".code-workspace";

/// One folder ready to be reopened. Rebuilt on every extraction, never
/// persisted.
#[derive(Debug, Clone)]
pub struct Folder {
    /// Display label, the final path segment.
    pub name: String,
    /// Absolute, decoded path that existed when extracted.
    pub path: String,
    pub timestamp: DateTime<Local>,
}

/// A recent entry as VS Code stores it. Unknown fields are ignored and
/// none of the paths are guaranteed to still exist.
#[derive(Debug, Clone, Deserialize)]
pub struct RecentEntry {
    #[serde(rename = "folderUri")]
    pub folder_uri: Option<String>,
    pub workspace: Option<WorkspaceRef>,
    #[serde(rename = "remoteAuthority")]
    pub remote_authority: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WorkspaceRef {
    #[serde(rename = "configPath")]
    pub config_path: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct StoredList {
    #[serde(default)]
    entries: Vec<serde_json::Value>,
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("database not found: {0}")]
    DatabaseNotFound(PathBuf),
    #[error("could not read state database: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("recently opened list is corrupt: {0}")]
    CorruptData(#[from] serde_json::Error),
}

/// Turn one raw recent entry into a usable local path.
///
/// Returns `None` for remote entries, entries without a usable URI and
/// entries whose target no longer exists. Malformed input is expected
/// here and never an error.
pub fn normalize_entry(entry: &RecentEntry) -> Option<String> {
    if entry.remote_authority.is_some() {
        return None;
    }
    let (uri, from_workspace) = match (&entry.folder_uri, &entry.workspace) {
        (Some(uri), _) => (uri.as_str(), false),
        (None, Some(ws)) => (ws.config_path.as_deref()?, true),
        (None, None) => return None,
    };

    let stripped = uri.strip_prefix("file://").unwrap_or(uri);
    // VS Code percent-encodes spaces and colons even where the generic
    // decoder below would not expect them; fix those up first.
    let mut path = stripped.replace("%20", " ").replace("%3A", ":");
    if from_workspace {
        if let Some(p) = path.strip_suffix(WORKSPACE_SUFFIX) {
            path = p.to_string();
        }
    }
    // On malformed escapes keep the raw string instead of rejecting.
    let path = match urlencoding::decode(&path) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => path,
    };
    if path.is_empty() || !Path::new(&path).exists() {
        return None;
    }
    Some(path)
}

fn folder_from_path(path: String) -> Folder {
    let name = Path::new(&path)
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.clone());
    Folder {
        name,
        path,
        timestamp: Local::now(),
    }
}

/// Map the stored JSON document to folders, keeping the stored order.
/// Elements that are not recognizable recent entries are skipped.
pub fn folders_from_json(raw: &str) -> Result<Vec<Folder>, ExtractError> {
    let list: StoredList = serde_json::from_str(raw)?;
    let folders = list
        .entries
        .into_iter()
        .filter_map(|v| serde_json::from_value::<RecentEntry>(v).ok())
        .filter_map(|e| normalize_entry(&e))
        .map(folder_from_path)
        .collect();
    Ok(folders)
}

/// Read the recently opened list from a VS Code state database.
///
/// A database without the key (fresh install) yields an empty list; a
/// missing file or unparseable stored value is an error for the caller
/// to surface.
pub fn extract_recent(db_path: &Path) -> Result<Vec<Folder>, ExtractError> {
    if !db_path.is_file() {
        return Err(ExtractError::DatabaseNotFound(db_path.to_path_buf()));
    }
    let conn = Connection::open_with_flags(db_path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
    let raw: Option<String> = conn
        .query_row(
            &format!("SELECT value FROM {STATE_TABLE} WHERE key = ?1"),
            params![RECENT_KEY],
            |row| row.get(0),
        )
        .optional()?;
    let raw = match raw {
        Some(v) if !v.is_empty() => v,
        _ => return Ok(Vec::new()),
    };
    let folders = folders_from_json(&raw)?;
    tracing::debug!(
        "extracted {} folders from {}",
        folders.len(),
        db_path.display()
    );
    Ok(folders)
}

use serde::{Deserialize, Serialize};

pub const SETTINGS_FILE: &str = "codehop.json";

fn default_editor_command() -> String {
    "code".into()
}

fn default_toasts() -> bool {
    true
}

fn default_toast_duration() -> f32 {
    5.0
}

fn default_hide_after_open() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    /// User override for the VS Code state database. `None` until the
    /// resolver configures one or the user sets it in the dialog. May
    /// start with `~`.
    pub db_path: Option<String>,
    /// Command used to launch the editor; split shell-style, so
    /// wrappers with arguments work.
    #[serde(default = "default_editor_command")]
    pub editor_command: String,
    /// When enabled the application initialises the logger at debug level.
    #[serde(default)]
    pub debug_logging: bool,
    /// Enable toast notifications in the UI.
    #[serde(default = "default_toasts")]
    pub enable_toasts: bool,
    /// Duration of toast notifications in seconds.
    #[serde(default = "default_toast_duration")]
    pub toast_duration: f32,
    /// Close the window after successfully opening a folder.
    #[serde(default = "default_hide_after_open")]
    pub hide_after_open: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            db_path: None,
            editor_command: default_editor_command(),
            debug_logging: false,
            enable_toasts: default_toasts(),
            toast_duration: default_toast_duration(),
            hide_after_open: default_hide_after_open(),
        }
    }
}

impl Settings {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

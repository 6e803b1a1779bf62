use crate::actions::Action;
use anyhow::{bail, Context};
use arboard::Clipboard;
use std::path::Path;
use std::process::Command;

#[derive(Debug, PartialEq, Eq)]
pub enum ActionKind<'a> {
    /// Spawn the configured editor with the folder as argument.
    OpenInEditor(&'a str),
    /// Show the folder in the OS file browser.
    Reveal(&'a str),
    /// Copy text to the clipboard.
    ClipboardText(&'a str),
    Unknown(&'a str),
}

pub fn parse_action_kind(action: &Action) -> ActionKind<'_> {
    let s = action.action.as_str();
    if let Some(path) = s.strip_prefix("code:open:") {
        return ActionKind::OpenInEditor(path);
    }
    if let Some(path) = s.strip_prefix("folder:reveal:") {
        return ActionKind::Reveal(path);
    }
    if let Some(text) = s.strip_prefix("clipboard:") {
        return ActionKind::ClipboardText(text);
    }
    ActionKind::Unknown(s)
}

fn spawn_editor(editor_command: &str, path: &str) -> anyhow::Result<()> {
    let parts = shlex::split(editor_command)
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| vec![editor_command.to_string()]);
    let (program, args) = parts.split_first().context("editor command is empty")?;
    Command::new(program)
        .args(args)
        .arg(path)
        .spawn()
        .with_context(|| format!("could not launch editor '{editor_command}'"))?;
    Ok(())
}

/// Launch an [`Action`]. The editor command comes from the settings.
///
/// Folder actions verify that the target still exists at action time;
/// the list may be stale by the time the user picks an entry.
pub fn launch_action(action: &Action, editor_command: &str) -> anyhow::Result<()> {
    match parse_action_kind(action) {
        ActionKind::OpenInEditor(path) => {
            if !Path::new(path).exists() {
                bail!("folder no longer exists: {path}");
            }
            tracing::debug!("opening {path} with {editor_command}");
            spawn_editor(editor_command, path)
        }
        ActionKind::Reveal(path) => {
            if !Path::new(path).exists() {
                bail!("folder no longer exists: {path}");
            }
            open::that(path).map_err(|e| e.into())
        }
        ActionKind::ClipboardText(text) => {
            let mut cb = Clipboard::new()?;
            cb.set_text(text.to_string())?;
            Ok(())
        }
        ActionKind::Unknown(s) => bail!("unknown action: {s}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(s: &str) -> Action {
        Action {
            label: String::new(),
            desc: String::new(),
            action: s.into(),
            args: None,
        }
    }

    #[test]
    fn parse_open() {
        assert_eq!(
            parse_action_kind(&action("code:open:/tmp/proj")),
            ActionKind::OpenInEditor("/tmp/proj")
        );
    }

    #[test]
    fn parse_reveal() {
        assert_eq!(
            parse_action_kind(&action("folder:reveal:/tmp/proj")),
            ActionKind::Reveal("/tmp/proj")
        );
    }

    #[test]
    fn parse_clipboard() {
        assert_eq!(
            parse_action_kind(&action("clipboard:/tmp/proj")),
            ActionKind::ClipboardText("/tmp/proj")
        );
    }

    #[test]
    fn open_missing_folder_fails_before_spawning() {
        let res = launch_action(&action("code:open:/definitely/not/here"), "code");
        assert!(res.is_err());
    }

    #[test]
    fn reveal_missing_folder_fails() {
        let res = launch_action(&action("folder:reveal:/definitely/not/here"), "code");
        assert!(res.is_err());
    }
}

use crate::gui::LauncherApp;
use crate::storage::{default_db_path, untildify};
use eframe::egui;
use std::path::Path;

/// Form for the state-database override path.
pub struct StorageDialog {
    pub open: bool,
    path: String,
}

impl Default for StorageDialog {
    fn default() -> Self {
        Self {
            open: false,
            path: String::new(),
        }
    }
}

impl StorageDialog {
    /// Open the form pre-filled with the currently resolved path.
    pub fn open(&mut self, current: &str) {
        self.path = current.to_string();
        self.open = true;
    }

    pub fn ui(&mut self, ctx: &egui::Context, app: &mut LauncherApp) {
        if !self.open {
            return;
        }
        let mut close = false;
        egui::Window::new("Storage Path")
            .open(&mut self.open)
            .show(ctx, |ui| {
                ui.label("VS Code state database (state.vscdb):");
                ui.add(
                    egui::TextEdit::singleline(&mut self.path).desired_width(f32::INFINITY),
                );
                ui.horizontal(|ui| {
                    if ui.button("Save").clicked() {
                        let expanded = untildify(self.path.trim());
                        if expanded.is_empty() {
                            app.report_error("Storage path must not be empty");
                        } else if !Path::new(&expanded).is_file() {
                            app.report_error(format!("No such file: {expanded}"));
                        } else {
                            app.settings.db_path = Some(self.path.trim().to_string());
                            let settings_path = app.settings_path.clone();
                            if let Err(e) = app.settings.save(&settings_path) {
                                app.report_error(format!("Could not save settings: {e}"));
                            } else {
                                close = true;
                                app.refresh();
                                app.focus_input();
                            }
                        }
                    }
                    if ui.button("Reset to default").clicked() {
                        self.path = default_db_path()
                            .map(|p| p.to_string_lossy().into_owned())
                            .unwrap_or_default();
                    }
                    if ui.button("Cancel").clicked() {
                        close = true;
                    }
                });
            });
        if close {
            self.open = false;
        }
    }
}

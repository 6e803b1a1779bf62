mod storage_dialog;

pub use storage_dialog::StorageDialog;

use crate::actions::Action;
use crate::launcher::launch_action;
use crate::recent::{extract_recent, Folder};
use crate::settings::Settings;
use crate::storage::resolve_db_path;
use crate::toast_log::append_toast_log;
use eframe::egui;
use egui_toast::{Toast, ToastKind, ToastOptions, Toasts};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

fn push_toast(toasts: &mut Toasts, toast: Toast) {
    append_toast_log(toast.text.text());
    toasts.add(toast);
}

pub struct LauncherApp {
    pub settings: Settings,
    pub settings_path: String,
    pub query: String,
    /// Folders from the last extraction cycle, in stored order.
    folders: Vec<Folder>,
    /// Visible subset after fuzzy filtering. Same order as `folders`;
    /// VS Code already keeps the list most-recent-first.
    pub results: Vec<Action>,
    pub selected: Option<usize>,
    matcher: SkimMatcherV2,
    /// No override and no usable platform default.
    not_configured: bool,
    toasts: Toasts,
    focus_query: bool,
    storage_dialog: StorageDialog,
}

impl LauncherApp {
    pub fn new(settings: Settings, settings_path: String) -> Self {
        let mut app = Self {
            settings,
            settings_path,
            query: String::new(),
            folders: Vec::new(),
            results: Vec::new(),
            selected: None,
            matcher: SkimMatcherV2::default(),
            not_configured: false,
            toasts: Toasts::new().anchor(egui::Align2::RIGHT_TOP, [10.0, 10.0]),
            focus_query: true,
            storage_dialog: StorageDialog::default(),
        };
        app.refresh();
        app
    }

    pub fn add_toast(&mut self, toast: Toast) {
        push_toast(&mut self.toasts, toast);
    }

    pub fn report_error(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        tracing::warn!("{msg}");
        if self.settings.enable_toasts {
            let duration = self.settings.toast_duration;
            self.add_toast(Toast {
                text: msg.into(),
                kind: ToastKind::Error,
                options: ToastOptions::default().duration_in_seconds(duration as f64),
            });
        } else {
            append_toast_log(&msg);
        }
    }

    pub fn report_success(&mut self, msg: impl Into<String>) {
        if self.settings.enable_toasts {
            let duration = self.settings.toast_duration;
            self.add_toast(Toast {
                text: msg.into().into(),
                kind: ToastKind::Success,
                options: ToastOptions::default().duration_in_seconds(duration as f64),
            });
        }
    }

    /// Re-run path resolution and extraction. Called on startup, on
    /// Refresh and after the storage dialog changes the override, so
    /// external changes to the database are honored each cycle.
    pub fn refresh(&mut self) {
        self.folders.clear();
        self.not_configured = false;
        match resolve_db_path(&mut self.settings, &self.settings_path) {
            Ok(Some(db_path)) => match extract_recent(&db_path) {
                Ok(folders) => self.folders = folders,
                Err(e) => self.report_error(format!("Could not load recent folders: {e}")),
            },
            Ok(None) => self.not_configured = true,
            Err(e) => self.report_error(format!("Could not save settings: {e}")),
        }
        self.search();
    }

    pub fn search(&mut self) {
        self.results = self
            .folders
            .iter()
            .filter(|f| {
                self.query.is_empty()
                    || self.matcher.fuzzy_match(&f.name, &self.query).is_some()
                    || self.matcher.fuzzy_match(&f.path, &self.query).is_some()
            })
            .map(|f| Action {
                label: f.name.clone(),
                desc: f.path.clone(),
                action: format!("code:open:{}", f.path),
                args: None,
            })
            .collect();
        self.selected = None;
    }

    /// Handle a keyboard navigation key. Returns the index of a selected
    /// action when `Enter` is pressed and a selection is available.
    pub fn handle_key(&mut self, key: egui::Key) -> Option<usize> {
        match key {
            egui::Key::ArrowDown => {
                if !self.results.is_empty() {
                    let max = self.results.len() - 1;
                    self.selected = match self.selected {
                        Some(i) if i < max => Some(i + 1),
                        Some(i) => Some(i),
                        None => Some(0),
                    };
                }
                None
            }
            egui::Key::ArrowUp => {
                if !self.results.is_empty() {
                    let max = self.results.len() - 1;
                    self.selected = match self.selected {
                        Some(i) if i > 0 => Some(i - 1),
                        Some(i) => Some(i.min(max)),
                        None => Some(0),
                    };
                }
                None
            }
            egui::Key::Enter => {
                if let Some(i) = self.selected {
                    Some(i)
                } else if self.results.len() == 1 {
                    Some(0)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    pub fn focus_input(&mut self) {
        self.focus_query = true;
    }

    /// Path shown when the storage dialog opens: the expanded override
    /// if set, else the platform default template.
    fn resolved_db_path(&self) -> String {
        match self.settings.db_path.as_deref() {
            Some(p) if !p.is_empty() => crate::storage::untildify(p),
            _ => crate::storage::default_db_path()
                .map(|p| p.to_string_lossy().into_owned())
                .unwrap_or_default(),
        }
    }

    fn run_action(&mut self, action: &Action, ctx: &egui::Context) {
        let opened = action.action.starts_with("code:open:");
        match launch_action(action, &self.settings.editor_command) {
            Ok(()) => {
                if opened && self.settings.hide_after_open {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            }
            Err(e) => self.report_error(format!("Failed: {e}")),
        }
    }

    fn copy_path(&mut self, path: &str) {
        let action = Action {
            label: String::new(),
            desc: String::new(),
            action: format!("clipboard:{path}"),
            args: None,
        };
        match launch_action(&action, &self.settings.editor_command) {
            Ok(()) => self.report_success("Path copied"),
            Err(e) => self.report_error(format!("Failed: {e}")),
        }
    }
}

impl eframe::App for LauncherApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Recent Projects");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Configure…").clicked() {
                        let current = self.resolved_db_path();
                        self.storage_dialog.open(&current);
                    }
                    if ui.button("Refresh").clicked() {
                        self.refresh();
                        self.focus_input();
                    }
                });
            });

            let input = ui.add(
                egui::TextEdit::singleline(&mut self.query)
                    .hint_text("Search folders")
                    .desired_width(f32::INFINITY),
            );
            if self.focus_query {
                input.request_focus();
                self.focus_query = false;
            }
            if input.changed() {
                self.search();
            }

            if !self.storage_dialog.open {
                if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
                if ctx.input(|i| i.key_pressed(egui::Key::ArrowDown)) {
                    self.handle_key(egui::Key::ArrowDown);
                }
                if ctx.input(|i| i.key_pressed(egui::Key::ArrowUp)) {
                    self.handle_key(egui::Key::ArrowUp);
                }
                if ctx.input(|i| i.key_pressed(egui::Key::Enter)) {
                    if let Some(i) = self.handle_key(egui::Key::Enter) {
                        if let Some(a) = self.results.get(i) {
                            let a = a.clone();
                            self.run_action(&a, ctx);
                        }
                    }
                }
            }

            ui.separator();

            if self.not_configured {
                ui.label("No VS Code state database found.");
                if ui.button("Configure storage path…").clicked() {
                    let current = self.resolved_db_path();
                    self.storage_dialog.open(&current);
                }
            } else {
                let mut clicked: Option<Action> = None;
                let mut reveal: Option<Action> = None;
                let mut copy: Option<String> = None;
                egui::ScrollArea::vertical().show(ui, |ui| {
                    for (i, a) in self.results.iter().enumerate() {
                        ui.horizontal(|ui| {
                            let row = ui.selectable_label(
                                self.selected == Some(i),
                                format!("{} : {}", a.label, a.desc),
                            );
                            if row.clicked() {
                                clicked = Some(a.clone());
                            }
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if ui.small_button("Copy").clicked() {
                                        copy = Some(a.desc.clone());
                                    }
                                    if ui.small_button("Reveal").clicked() {
                                        reveal = Some(Action {
                                            label: a.label.clone(),
                                            desc: a.desc.clone(),
                                            action: format!("folder:reveal:{}", a.desc),
                                            args: None,
                                        });
                                    }
                                },
                            );
                        });
                    }
                    if self.results.is_empty() && !self.query.is_empty() {
                        ui.label("No matches");
                    }
                });
                if let Some(a) = clicked {
                    self.run_action(&a, ctx);
                }
                if let Some(a) = reveal {
                    self.run_action(&a, ctx);
                }
                if let Some(p) = copy {
                    self.copy_path(&p);
                }
            }
        });

        let mut dlg = std::mem::take(&mut self.storage_dialog);
        dlg.ui(ctx, self);
        self.storage_dialog = dlg;

        self.toasts.show(ctx);
    }
}

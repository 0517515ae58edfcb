use crate::backup;
use crate::filter::{self, CategoryFilter};
use crate::record::{Category, ProjectRecord, new_record_id, parse_date};
use crate::statics;
use crate::store::{QuiltStore, UpsertOutcome};
use anyhow::Context as _;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use chrono::NaiveDate;
use eframe::egui;
use egui_extras::{Column, TableBuilder};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

pub fn run_gui() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1100.0, 820.0]),
        ..Default::default()
    };
    let title = format!("{} {}", statics::EN_APP_TITLE, env!("CARGO_PKG_VERSION"));
    eframe::run_native(&title, options, Box::new(|_cc| Ok(Box::new(QuiltApp::new()))))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum View {
    Gallery,
    Favorites,
    Charity,
    Admin,
    Editor,
}

/// What the editor panel is doing. `Editing` carries the record id so a
/// half-open editor can never point at "no record".
#[derive(Clone, Debug, PartialEq, Eq, Default)]
enum EditorState {
    #[default]
    Closed,
    Creating,
    Editing(String),
}

/// Text buffers behind the editor form. Dates stay as text until submit so
/// the user can type freely; validation happens in one place.
#[derive(Clone, Debug, Default)]
struct EditorForm {
    title: String,
    category: Category,
    notes: String,
    deadline: String,
    completed_date: String,
    is_charity: bool,
    is_favorite: bool,
    photo: Option<String>,
}

/// Row/card interactions are collected while rendering and applied after,
/// so the record list is never mutated mid-draw.
#[derive(Clone, Debug)]
enum CardAction {
    ShowDetails(String),
    ToggleFavorite(String),
    Edit(String),
    Delete(String),
}

/// The main application state and GUI logic.
/// Owns the store plus all view/editor state; every mutation persists
/// immediately and the next frame re-renders from the store.
struct QuiltApp {
    store: QuiltStore,
    view: View,
    gallery_filter: CategoryFilter,
    favorites_filter: CategoryFilter,
    editor: EditorState,
    form: EditorForm,
    detail_id: Option<String>,
    pending_delete: Option<String>,
    status: String,
    last_error: Option<String>,
    dialog_dir: Option<PathBuf>,

    // Decoded photo textures, keyed by a hash of the data URL.
    photo_textures: HashMap<u64, Option<egui::TextureHandle>>,

    // Focus hints raised by submit validation, consumed on the next frame.
    focus_title: bool,
    focus_deadline: bool,
    focus_completed_date: bool,

    about_open: bool,
    theme_dark: bool,
}

impl QuiltApp {
    fn new() -> Self {
        let today = Self::today();
        let path = QuiltStore::default_path().unwrap_or_else(|| PathBuf::from(statics::STORE_FILE));
        let store = QuiltStore::load_path(&path, today);

        // Boot heuristic: land on favorites unless there are projects but
        // nobody starred one yet.
        let view = if !store.records().is_empty() && !store.has_favorites() {
            View::Gallery
        } else {
            View::Favorites
        };

        Self {
            store,
            view,
            gallery_filter: CategoryFilter::All,
            favorites_filter: CategoryFilter::All,
            editor: EditorState::Closed,
            form: EditorForm::default(),
            detail_id: None,
            pending_delete: None,
            status: String::new(),
            last_error: None,
            dialog_dir: None,
            photo_textures: HashMap::new(),
            focus_title: false,
            focus_deadline: false,
            focus_completed_date: false,
            about_open: false,
            theme_dark: true,
        }
    }

    fn today() -> NaiveDate {
        chrono::Local::now().date_naive()
    }

    fn switch_view(&mut self, view: View) {
        if self.view == View::Editor && view != View::Editor {
            self.close_editor();
        }
        // Navigating to the editor tab always starts a blank create form;
        // edit sessions enter through open_editor_for_edit instead.
        if view == View::Editor {
            self.open_editor_for_create();
        }
        self.view = view;
    }

    fn open_editor_for_create(&mut self) {
        self.editor = EditorState::Creating;
        self.form = EditorForm::default();
        self.clear_focus_hints();
    }

    fn open_editor_for_edit(&mut self, id: &str) {
        let Some(record) = self.store.get(id) else {
            return;
        };
        self.form = EditorForm {
            title: record.title.clone(),
            category: record.category,
            notes: record.notes.clone(),
            deadline: record.deadline.map(date_input).unwrap_or_default(),
            completed_date: record.completed_date.map(date_input).unwrap_or_default(),
            is_charity: record.is_charity,
            is_favorite: record.is_favorite,
            photo: record.photo.clone(),
        };
        self.editor = EditorState::Editing(id.to_string());
        self.clear_focus_hints();
        self.view = View::Editor;
    }

    fn close_editor(&mut self) {
        self.editor = EditorState::Closed;
        self.form = EditorForm::default();
        self.clear_focus_hints();
    }

    fn clear_focus_hints(&mut self) {
        self.focus_title = false;
        self.focus_deadline = false;
        self.focus_completed_date = false;
    }

    fn submit_editor(&mut self) {
        let title = self.form.title.trim().to_string();
        if title.is_empty() {
            self.last_error = Some(statics::EN_ERR_TITLE_REQUIRED.to_string());
            self.focus_title = true;
            return;
        }

        let Some(deadline) = date_field(&self.form.deadline) else {
            self.last_error = Some(statics::EN_ERR_BAD_DEADLINE.to_string());
            self.focus_deadline = true;
            return;
        };
        let Some(completed_date) = date_field(&self.form.completed_date) else {
            self.last_error = Some(statics::EN_ERR_BAD_COMPLETED_DATE.to_string());
            self.focus_completed_date = true;
            return;
        };

        let today = Self::today();
        if self.form.category == Category::Completed && deadline.is_some_and(|d| d > today) {
            self.last_error = Some(statics::EN_ERR_COMPLETED_FUTURE_DEADLINE.to_string());
            self.focus_deadline = true;
            return;
        }

        let (id, timestamp) = match &self.editor {
            EditorState::Editing(id) => {
                let stamp = self.store.get(id).map(|r| r.timestamp).unwrap_or(today);
                (id.clone(), stamp)
            }
            _ => (new_record_id(), today),
        };

        let record = ProjectRecord {
            id,
            title: title.clone(),
            category: self.form.category,
            notes: self.form.notes.trim().to_string(),
            deadline,
            completed_date,
            photo: self.form.photo.clone(),
            is_charity: self.form.is_charity,
            is_favorite: self.form.is_favorite,
            timestamp,
        };

        let outcome = self.store.upsert(record);
        self.persist();
        self.status = match outcome {
            UpsertOutcome::Added => format!("\"{title}\" has been added successfully!"),
            UpsertOutcome::Updated => format!("\"{title}\" has been updated successfully!"),
        };
        self.last_error = None;
        self.close_editor();
        self.view = View::Admin;
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.save() {
            self.last_error = Some(format!("Failed to save: {e:#}"));
        }
    }

    fn toggle_favorite(&mut self, id: &str) {
        let Some(now_favorite) = self.store.toggle_favorite(id) else {
            return;
        };
        self.persist();

        // Keep an open edit form in step with the list toggle.
        if matches!(&self.editor, EditorState::Editing(eid) if eid == id) {
            self.form.is_favorite = now_favorite;
        }
    }

    fn delete_record(&mut self, id: &str) {
        if !self.store.remove(id) {
            return;
        }
        self.persist();
        self.status = statics::EN_MSG_DELETED.to_string();

        if self.detail_id.as_deref() == Some(id) {
            self.detail_id = None;
        }
        if matches!(&self.editor, EditorState::Editing(eid) if eid == id) {
            self.close_editor();
            if self.view == View::Editor {
                self.view = View::Admin;
            }
        }
    }

    fn apply_actions(&mut self, actions: Vec<CardAction>) {
        for action in actions {
            match action {
                CardAction::ShowDetails(id) => self.detail_id = Some(id),
                CardAction::ToggleFavorite(id) => self.toggle_favorite(&id),
                CardAction::Edit(id) => self.open_editor_for_edit(&id),
                CardAction::Delete(id) => self.pending_delete = Some(id),
            }
        }
    }

    fn backup_dialog(&self) -> rfd::FileDialog {
        let mut dlg = rfd::FileDialog::new()
            .add_filter(statics::EN_DIALOG_BACKUP_FILTER, &statics::BACKUP_EXTENSIONS);
        if let Some(dir) = self.dialog_dir.clone() {
            dlg = dlg.set_directory(dir);
        }
        dlg
    }

    fn image_dialog(&self) -> rfd::FileDialog {
        let mut dlg = rfd::FileDialog::new()
            .add_filter(statics::EN_DIALOG_IMAGE_FILTER, &statics::IMAGE_EXTENSIONS);
        if let Some(dir) = self.dialog_dir.clone() {
            dlg = dlg.set_directory(dir);
        }
        dlg
    }

    fn export_backup(&mut self) {
        let Some(path) = self
            .backup_dialog()
            .set_file_name(backup::export_file_name(Self::today()))
            .save_file()
        else {
            return;
        };

        let result = backup::export_pretty(self.store.records())
            .and_then(|text| fs::write(&path, text).with_context(|| format!("writing {path:?}")));
        match result {
            Ok(()) => {
                self.dialog_dir = path.parent().map(PathBuf::from);
                self.status = format!("{} ({})", statics::EN_MSG_BACKUP_SAVED, path.display());
                self.last_error = None;
            }
            Err(e) => {
                self.last_error = Some(format!("Failed to export: {e:#}"));
            }
        }
    }

    fn import_backup(&mut self) {
        let Some(path) = self.backup_dialog().pick_file() else {
            return;
        };

        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                self.last_error = Some(format!("Import failed, cannot read {}: {e}", path.display()));
                return;
            }
        };

        match backup::import(&text, Self::today()) {
            Ok(outcome) => {
                self.dialog_dir = path.parent().map(PathBuf::from);
                self.store.replace_all(outcome.records);
                self.persist();
                self.photo_textures.clear();

                let count = self.store.records().len();
                self.status = if outcome.skipped > 0 {
                    format!(
                        "Imported {count} project{}. {} item{} skipped.",
                        plural(count),
                        outcome.skipped,
                        plural(outcome.skipped)
                    )
                } else {
                    format!("Imported {count} project{} successfully.", plural(count))
                };
                self.last_error = None;

                // Nothing starred in the new data: show everything instead of
                // an empty favorites view. Otherwise the active view and its
                // filters stay put.
                if !self.store.has_favorites() {
                    self.view = View::Gallery;
                }
                if self.view == View::Editor {
                    self.close_editor();
                    self.view = View::Admin;
                }
            }
            Err(e) => {
                self.last_error = Some(format!("Import failed: {e}."));
            }
        }
    }

    fn choose_photo(&mut self) {
        let Some(path) = self.image_dialog().pick_file() else {
            return;
        };

        match encode_photo_file(&path) {
            Ok(data_url) => {
                // The editor may have been closed while the dialog was up.
                if self.editor != EditorState::Closed {
                    self.form.photo = Some(data_url);
                }
                self.dialog_dir = path.parent().map(PathBuf::from);
            }
            Err(e) => {
                self.last_error = Some(format!("Failed to load photo: {e:#}"));
            }
        }
    }

    fn photo_texture(
        &mut self,
        ctx: &egui::Context,
        data_url: &str,
    ) -> Option<egui::TextureHandle> {
        let key = photo_cache_key(data_url);
        if let Some(cached) = self.photo_textures.get(&key) {
            return cached.clone();
        }

        let texture = decode_data_url(data_url)
            .and_then(|bytes| image::load_from_memory(&bytes).ok())
            .map(|img| {
                let rgba = img.to_rgba8();
                let size = [rgba.width() as usize, rgba.height() as usize];
                let color = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
                ctx.load_texture(
                    format!("photo_{key:016x}"),
                    color,
                    egui::TextureOptions::LINEAR,
                )
            });
        self.photo_textures.insert(key, texture.clone());
        texture
    }

    fn render_thumb(
        &mut self,
        ctx: &egui::Context,
        ui: &mut egui::Ui,
        record: &ProjectRecord,
        side: f32,
    ) {
        let texture = record
            .photo
            .as_deref()
            .and_then(|url| self.photo_texture(ctx, url));
        match texture {
            Some(texture) => {
                ui.image((texture.id(), egui::vec2(side, side)));
            }
            None => {
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::hover());
                ui.painter().rect_filled(
                    rect,
                    egui::CornerRadius::same(4),
                    ui.visuals().faint_bg_color,
                );
            }
        }
    }

    fn filter_row(ui: &mut egui::Ui, selected: &mut CategoryFilter) {
        ui.horizontal(|ui| {
            for choice in CategoryFilter::ALL_CHOICES {
                if ui.selectable_label(*selected == choice, choice.label()).clicked() {
                    *selected = choice;
                }
            }
        });
        ui.separator();
    }

    fn render_cards(
        &mut self,
        ui: &mut egui::Ui,
        records: &[ProjectRecord],
        empty_message: &str,
    ) -> Vec<CardAction> {
        let mut actions = Vec::new();

        if records.is_empty() {
            ui.label(empty_message);
            return actions;
        }

        let ctx = ui.ctx().clone();
        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                for record in records {
                    ui.group(|ui| {
                        ui.horizontal(|ui| {
                            self.render_thumb(&ctx, ui, record, 96.0);
                            ui.vertical(|ui| {
                                ui.horizontal(|ui| {
                                    let (glyph, tip) = if record.is_favorite {
                                        (
                                            statics::EN_GLYPH_FAVORITE_ON,
                                            statics::EN_BTN_UNFAVORITE,
                                        )
                                    } else {
                                        (
                                            statics::EN_GLYPH_FAVORITE_OFF,
                                            statics::EN_BTN_FAVORITE,
                                        )
                                    };
                                    if ui.small_button(glyph).on_hover_text(tip).clicked() {
                                        actions
                                            .push(CardAction::ToggleFavorite(record.id.clone()));
                                    }

                                    let title =
                                        egui::RichText::new(&record.title).strong().size(16.0);
                                    if ui
                                        .link(title)
                                        .on_hover_text(statics::EN_BTN_DETAILS)
                                        .clicked()
                                    {
                                        actions.push(CardAction::ShowDetails(record.id.clone()));
                                    }

                                    ui.colored_label(
                                        category_color(record.category),
                                        record.category.label(),
                                    );
                                    if record.is_charity {
                                        ui.colored_label(CHARITY_COLOR, statics::EN_TAG_CHARITY);
                                    }
                                });

                                if !record.notes.is_empty() {
                                    ui.label(truncate_text(&record.notes, 120));
                                }
                                if let Some(deadline) = record.deadline {
                                    ui.weak(format!(
                                        "{} {}",
                                        statics::EN_PREFIX_DUE,
                                        display_date(deadline)
                                    ));
                                }
                            });
                        });
                    });
                    ui.add_space(6.0);
                }
            });

        actions
    }

    fn show_gallery(&mut self, ui: &mut egui::Ui) {
        let mut selected = self.gallery_filter;
        Self::filter_row(ui, &mut selected);
        self.gallery_filter = selected;

        let records: Vec<ProjectRecord> =
            filter::by_category(self.store.records(), self.gallery_filter, Self::today())
                .into_iter()
                .cloned()
                .collect();
        let actions = self.render_cards(ui, &records, statics::EN_EMPTY_GALLERY);
        self.apply_actions(actions);
    }

    fn show_favorites(&mut self, ui: &mut egui::Ui) {
        let mut selected = self.favorites_filter;
        Self::filter_row(ui, &mut selected);
        self.favorites_filter = selected;

        let records: Vec<ProjectRecord> =
            filter::favorites(self.store.records(), self.favorites_filter, Self::today())
                .into_iter()
                .cloned()
                .collect();
        let actions = self.render_cards(ui, &records, statics::EN_EMPTY_FAVORITES);
        self.apply_actions(actions);
    }

    fn show_charity(&mut self, ui: &mut egui::Ui) {
        let records: Vec<ProjectRecord> = filter::charity(self.store.records())
            .into_iter()
            .cloned()
            .collect();
        let actions = self.render_cards(ui, &records, statics::EN_EMPTY_CHARITY);
        self.apply_actions(actions);
    }

    fn show_admin(&mut self, ui: &mut egui::Ui) {
        if ui.button(statics::EN_BTN_NEW_PROJECT).clicked() {
            self.switch_view(View::Editor);
            return;
        }
        ui.separator();

        let records: Vec<ProjectRecord> = self.store.records().to_vec();
        if records.is_empty() {
            ui.label(statics::EN_EMPTY_ADMIN);
            return;
        }

        let ctx = ui.ctx().clone();
        let mut actions = Vec::new();
        let header_h = ui.text_style_height(&egui::TextStyle::Body) + 6.0;
        let row_h = 56.0;

        TableBuilder::new(ui)
            .striped(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::initial(64.0).resizable(false))
            .column(Column::remainder().resizable(true))
            .column(Column::initial(110.0).resizable(false))
            .column(Column::initial(130.0).resizable(false))
            .column(Column::initial(280.0).resizable(false))
            .header(header_h, |mut header| {
                header.col(|ui| {
                    ui.strong(statics::EN_COL_PHOTO);
                });
                header.col(|ui| {
                    ui.strong(statics::EN_COL_TITLE);
                });
                header.col(|ui| {
                    ui.strong(statics::EN_COL_STATUS);
                });
                header.col(|ui| {
                    ui.strong(statics::EN_COL_DUE);
                });
                header.col(|ui| {
                    ui.strong(statics::EN_COL_ACTIONS);
                });
            })
            .body(|mut body| {
                for record in &records {
                    body.row(row_h, |mut row| {
                        row.col(|ui| {
                            self.render_thumb(&ctx, ui, record, 48.0);
                        });
                        row.col(|ui| {
                            ui.vertical(|ui| {
                                ui.strong(&record.title);
                                if record.is_charity {
                                    ui.colored_label(CHARITY_COLOR, statics::EN_TAG_CHARITY);
                                }
                            });
                        });
                        row.col(|ui| {
                            ui.colored_label(
                                category_color(record.category),
                                record.category.label(),
                            );
                        });
                        row.col(|ui| {
                            if let Some(deadline) = record.deadline {
                                ui.label(display_date(deadline));
                            }
                        });
                        row.col(|ui| {
                            let (glyph, label) = if record.is_favorite {
                                (statics::EN_GLYPH_FAVORITE_ON, statics::EN_BTN_UNFAVORITE)
                            } else {
                                (statics::EN_GLYPH_FAVORITE_OFF, statics::EN_BTN_FAVORITE)
                            };
                            if ui.small_button(format!("{glyph} {label}")).clicked() {
                                actions.push(CardAction::ToggleFavorite(record.id.clone()));
                            }
                            if ui.small_button(statics::EN_BTN_DETAILS).clicked() {
                                actions.push(CardAction::ShowDetails(record.id.clone()));
                            }
                            if ui.small_button(statics::EN_BTN_EDIT).clicked() {
                                actions.push(CardAction::Edit(record.id.clone()));
                            }
                            let delete =
                                egui::RichText::new(statics::EN_BTN_DELETE).color(DANGER_COLOR);
                            if ui.small_button(delete).clicked() {
                                actions.push(CardAction::Delete(record.id.clone()));
                            }
                        });
                    });
                }
            });

        self.apply_actions(actions);
    }

    fn show_editor(&mut self, ui: &mut egui::Ui) {
        let heading = match self.editor {
            EditorState::Editing(_) => statics::EN_EDITOR_HEADING_EDIT,
            _ => statics::EN_EDITOR_HEADING_ADD,
        };
        ui.heading(heading);
        ui.add_space(8.0);

        let ctx = ui.ctx().clone();
        let mut do_choose_photo = false;

        egui::Grid::new("editor_form")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label(statics::EN_LABEL_TITLE);
                let resp = ui.add(
                    egui::TextEdit::singleline(&mut self.form.title).desired_width(360.0),
                );
                if self.focus_title {
                    resp.request_focus();
                    self.focus_title = false;
                }
                ui.end_row();

                ui.label(statics::EN_LABEL_CATEGORY);
                egui::ComboBox::from_id_salt("project_category")
                    .selected_text(self.form.category.label())
                    .show_ui(ui, |ui| {
                        for category in Category::ALL {
                            ui.selectable_value(
                                &mut self.form.category,
                                category,
                                category.label(),
                            );
                        }
                    });
                ui.end_row();

                ui.label(statics::EN_LABEL_NOTES);
                ui.add(
                    egui::TextEdit::multiline(&mut self.form.notes)
                        .desired_rows(4)
                        .desired_width(360.0),
                );
                ui.end_row();

                ui.label(statics::EN_LABEL_DEADLINE);
                let resp = ui.add(
                    egui::TextEdit::singleline(&mut self.form.deadline)
                        .hint_text(statics::EN_HINT_DATE)
                        .desired_width(140.0),
                );
                if self.focus_deadline {
                    resp.request_focus();
                    self.focus_deadline = false;
                }
                ui.end_row();

                ui.label(statics::EN_LABEL_COMPLETED_DATE);
                let resp = ui.add(
                    egui::TextEdit::singleline(&mut self.form.completed_date)
                        .hint_text(statics::EN_HINT_DATE)
                        .desired_width(140.0),
                );
                if self.focus_completed_date {
                    resp.request_focus();
                    self.focus_completed_date = false;
                }
                ui.end_row();

                ui.label("");
                ui.horizontal(|ui| {
                    ui.checkbox(&mut self.form.is_charity, statics::EN_LABEL_CHARITY);
                    ui.checkbox(&mut self.form.is_favorite, statics::EN_LABEL_FAVORITE);
                });
                ui.end_row();

                ui.label(statics::EN_LABEL_PHOTO);
                let photo = self.form.photo.clone();
                ui.vertical(|ui| {
                    match photo.as_deref().and_then(|url| self.photo_texture(&ctx, url)) {
                        Some(texture) => {
                            ui.image((texture.id(), egui::vec2(160.0, 160.0)));
                        }
                        None => {
                            ui.weak(statics::EN_PHOTO_NONE);
                        }
                    }
                    ui.horizontal(|ui| {
                        if ui.button(statics::EN_BTN_CHOOSE_PHOTO).clicked() {
                            do_choose_photo = true;
                        }
                        if photo.is_some() && ui.button(statics::EN_BTN_REMOVE_PHOTO).clicked() {
                            self.form.photo = None;
                        }
                    });
                });
                ui.end_row();
            });

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button(statics::EN_BTN_SAVE_PROJECT).clicked() {
                self.submit_editor();
            }
            if ui.button(statics::EN_BTN_CANCEL).clicked() {
                self.close_editor();
                self.view = View::Admin;
            }
        });

        if do_choose_photo {
            self.choose_photo();
        }
    }

    fn show_detail_window(&mut self, ctx: &egui::Context) {
        let Some(id) = self.detail_id.clone() else {
            return;
        };
        let Some(record) = self.store.get(&id).cloned() else {
            self.detail_id = None;
            return;
        };

        let mut open = true;
        let mut close_clicked = false;
        egui::Window::new(statics::EN_WINDOW_DETAILS)
            .collapsible(false)
            .open(&mut open)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    if let Some(url) = record.photo.as_deref() {
                        if let Some(texture) = self.photo_texture(ctx, url) {
                            ui.image((texture.id(), egui::vec2(240.0, 240.0)));
                        }
                    }
                    ui.heading(&record.title);
                    ui.horizontal(|ui| {
                        ui.colored_label(
                            category_color(record.category),
                            record.category.label(),
                        );
                        if record.is_charity {
                            ui.colored_label(CHARITY_COLOR, statics::EN_TAG_CHARITY);
                        }
                    });
                    ui.separator();

                    if record.is_favorite {
                        detail_line(ui, statics::EN_DETAIL_FAVORITE, statics::EN_DETAIL_YES);
                    }
                    if record.is_charity {
                        detail_line(ui, statics::EN_DETAIL_CHARITY, statics::EN_DETAIL_YES);
                    }
                    if !record.notes.is_empty() {
                        detail_line(ui, statics::EN_DETAIL_DESCRIPTION, &record.notes);
                    }
                    if let Some(deadline) = record.deadline {
                        detail_line(ui, statics::EN_DETAIL_DUE, &display_date(deadline));
                    }
                    if let Some(date) = record.completed_date {
                        detail_line(ui, statics::EN_DETAIL_COMPLETED, &display_date(date));
                    }
                    detail_line(ui, statics::EN_DETAIL_ADDED, &display_date(record.timestamp));

                    ui.separator();
                    if ui.button(statics::EN_BTN_CLOSE).clicked() {
                        close_clicked = true;
                    }
                });
            });

        if !open || close_clicked {
            self.detail_id = None;
        }
    }

    fn show_confirm_delete_window(&mut self, ctx: &egui::Context) {
        let Some(id) = self.pending_delete.clone() else {
            return;
        };
        let Some(record) = self.store.get(&id).cloned() else {
            self.pending_delete = None;
            return;
        };

        let mut open = true;
        let mut decided = false;
        egui::Window::new(statics::EN_WINDOW_CONFIRM_DELETE)
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label(format!(
                    "Are you sure you want to delete \"{}\"? {}",
                    record.title,
                    statics::EN_CONFIRM_DELETE_TAIL
                ));
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    let delete = egui::RichText::new(statics::EN_BTN_DELETE).color(DANGER_COLOR);
                    if ui.button(delete).clicked() {
                        self.delete_record(&id);
                        decided = true;
                    }
                    if ui.button(statics::EN_BTN_CANCEL).clicked() {
                        decided = true;
                    }
                });
            });

        if !open || decided {
            self.pending_delete = None;
        }
    }
}

impl eframe::App for QuiltApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                let tabs = [
                    (View::Gallery, statics::EN_TAB_GALLERY),
                    (View::Favorites, statics::EN_TAB_FAVORITES),
                    (View::Charity, statics::EN_TAB_CHARITY),
                    (View::Admin, statics::EN_TAB_ADMIN),
                ];
                for (view, label) in tabs {
                    if ui.selectable_label(self.view == view, label).clicked() {
                        self.switch_view(view);
                    }
                }
                if ui
                    .selectable_label(self.view == View::Editor, statics::EN_BTN_NEW_PROJECT)
                    .clicked()
                {
                    self.switch_view(View::Editor);
                }

                ui.separator();
                if ui.button(statics::EN_BTN_EXPORT).clicked() {
                    self.export_backup();
                }
                if ui.button(statics::EN_BTN_IMPORT).clicked() {
                    self.import_backup();
                }

                ui.separator();
                if ui.button(statics::EN_BTN_ABOUT).clicked() {
                    self.about_open = true;
                }
                if ui.button(statics::EN_BTN_TOGGLE_THEME).clicked() {
                    self.theme_dark = !self.theme_dark;
                    if self.theme_dark {
                        ctx.set_visuals(egui::Visuals::dark());
                    } else {
                        ctx.set_visuals(egui::Visuals::light());
                    }
                }

                if !self.status.is_empty() {
                    ui.separator();
                    ui.label(&self.status);
                }
            });
        });

        if let Some(err) = self.last_error.clone() {
            egui::TopBottomPanel::top("error_bar").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.colored_label(egui::Color32::RED, err);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button(statics::EN_BTN_CLEAR).clicked() {
                            self.last_error = None;
                        }
                    });
                });
            });
        }

        if self.about_open {
            let mut open = self.about_open;
            egui::Window::new(statics::EN_WINDOW_ABOUT)
                .collapsible(false)
                .open(&mut open)
                .show(ctx, |ui| {
                    ui.heading(statics::EN_ABOUT_HEADING);
                    ui.label(format!(
                        "{} {}",
                        statics::EN_ABOUT_VERSION,
                        env!("CARGO_PKG_VERSION")
                    ));
                    ui.label(statics::EN_ABOUT_BLURB);
                    ui.separator();
                    ui.hyperlink_to(
                        format!("{} @ {}", statics::EN_PROJECT_REPO, statics::GITHUB_URL),
                        statics::GITHUB_URL,
                    );
                });
            self.about_open = open;
        }

        self.show_confirm_delete_window(ctx);
        self.show_detail_window(ctx);

        egui::TopBottomPanel::bottom("bottom_status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let count = self.store.records().len();
                ui.label(format!("{count} project{}", plural(count)));
                ui.separator();
                ui.weak(self.store.path().display().to_string());
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.view {
            View::Gallery => self.show_gallery(ui),
            View::Favorites => self.show_favorites(ui),
            View::Charity => self.show_charity(ui),
            View::Admin => self.show_admin(ui),
            View::Editor => self.show_editor(ui),
        });
    }
}

const CHARITY_COLOR: egui::Color32 = egui::Color32::from_rgb(128, 0, 128);
const DANGER_COLOR: egui::Color32 = egui::Color32::from_rgb(220, 0, 0);

fn category_color(category: Category) -> egui::Color32 {
    match category {
        Category::Upcoming => egui::Color32::from_rgb(0, 120, 255),
        Category::InProgress => egui::Color32::from_rgb(255, 165, 0),
        Category::Completed => egui::Color32::from_rgb(0, 160, 0),
    }
}

fn detail_line(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal_wrapped(|ui| {
        ui.strong(label);
        ui.label(value);
    });
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

fn display_date(date: NaiveDate) -> String {
    date.format(statics::DISPLAY_DATE_FMT).to_string()
}

fn date_input(date: NaiveDate) -> String {
    crate::record::format_date(date)
}

/// Empty text means "no date"; anything else must parse.
fn date_field(raw: &str) -> Option<Option<NaiveDate>> {
    if raw.trim().is_empty() {
        return Some(None);
    }
    parse_date(raw).map(Some)
}

fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{cut}...")
    }
}

fn photo_cache_key(data_url: &str) -> u64 {
    // Deterministic FNV-1a over the data URL, cheap enough per frame.
    let mut h = 0xcbf2_9ce4_8422_2325_u64;
    for b in data_url.as_bytes() {
        h ^= u64::from(*b);
        h = h.wrapping_mul(0x0000_0100_0000_01b3);
    }
    h
}

fn decode_data_url(data_url: &str) -> Option<Vec<u8>> {
    let (_, payload) = data_url.split_once("base64,")?;
    STANDARD.decode(payload).ok()
}

fn encode_photo_file(path: &Path) -> anyhow::Result<String> {
    let bytes = fs::read(path).with_context(|| format!("reading {path:?}"))?;
    let format = image::guess_format(&bytes).context("unrecognized image format")?;
    image::load_from_memory(&bytes).context("decoding image")?;
    Ok(format!(
        "data:{};base64,{}",
        format.to_mime_type(),
        STANDARD.encode(&bytes)
    ))
}

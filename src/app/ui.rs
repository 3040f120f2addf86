use super::{FileManagerApp, FileManagerState, ListingRow, ListingView, UploadOutcome};
use crate::upload::file_filter::ACCEPTED_EXTENSIONS;
use eframe::egui::{self, Color32, RichText};
use rfd::FileDialog;

const ACCENT: Color32 = Color32::from_rgb(161, 89, 225);
const SUCCESS: Color32 = Color32::from_rgb(0, 180, 0);
const FAILURE: Color32 = Color32::from_rgb(220, 50, 50);

impl FileManagerApp {
    fn tr(&self, key: &str) -> String {
        self.widget.localizer().translate(key)
    }

    pub fn render(&mut self, ctx: &egui::Context, state: &FileManagerState) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(20.0);
            ui.vertical_centered(|ui| {
                ui.heading(self.tr("app.title"));
                ui.add_space(5.0);
                ui.label(
                    RichText::new(self.tr("app.subtitle"))
                        .color(ui.visuals().text_color().gamma_multiply(0.7)),
                );
            });

            ui.add_space(20.0);
            self.render_auth(ui);
            ui.add_space(20.0);

            ui.vertical_centered(|ui| {
                let label = if state.panel_open {
                    self.tr("panel.close")
                } else {
                    self.tr("panel.open")
                };
                let button = egui::Button::new(label).min_size(egui::vec2(200.0, 40.0));
                if ui.add(button).clicked() {
                    self.toggle_panel(ctx);
                }
            });
        });

        if state.panel_open {
            egui::Window::new(self.tr("panel.title"))
                .collapsible(false)
                .default_width(420.0)
                .show(ctx, |ui| self.render_panel(ctx, ui, state));
        }
    }

    fn render_auth(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.label(self.tr("auth.curl_label"));
                ui.add_space(4.0);
                let status = if self.session.has_token() {
                    RichText::new(self.tr("auth.signed_in")).color(SUCCESS)
                } else {
                    RichText::new(self.tr("auth.signed_out")).color(FAILURE)
                };
                ui.label(status);
            });

            ui.add_space(8.0);
            let hint = self.tr("auth.curl_hint");
            egui::ScrollArea::vertical()
                .max_height(120.0)
                .show(ui, |ui| {
                    let text_edit = egui::TextEdit::multiline(&mut self.curl_text)
                        .desired_width(ui.available_width())
                        .font(egui::TextStyle::Monospace)
                        .hint_text(hint);
                    ui.add_sized([ui.available_width(), 120.0], text_edit);
                });

            ui.add_space(4.0);
            let can_apply = !self.curl_text.trim().is_empty();
            if ui
                .add_enabled(can_apply, egui::Button::new(self.tr("auth.apply")))
                .clicked()
            {
                self.apply_curl();
            }

            if let Some(error) = &self.auth_error {
                ui.colored_label(FAILURE, error);
            }
        });
    }

    fn render_panel(&self, ctx: &egui::Context, ui: &mut egui::Ui, state: &FileManagerState) {
        let mut group_access = state.group_access_requested;
        if ui
            .checkbox(&mut group_access, self.tr("upload.group_access"))
            .changed()
        {
            self.widget.set_group_access_requested(group_access);
        }

        ui.horizontal(|ui| {
            if ui
                .add_enabled(!state.uploading, egui::Button::new(self.tr("upload.choose")))
                .clicked()
            {
                let path = FileDialog::new()
                    .add_filter(self.tr("upload.filter"), &ACCEPTED_EXTENSIONS)
                    .pick_file();
                self.upload(ctx, path, group_access);
            }

            if state.uploading {
                ui.spinner();
                ui.label(self.tr("upload.in_progress"));
            }
        });

        match &state.upload_outcome {
            Some(UploadOutcome::Success(message)) => {
                ui.colored_label(SUCCESS, message);
            }
            Some(UploadOutcome::Error(message)) => {
                ui.colored_label(FAILURE, message);
            }
            None => {}
        }

        ui.separator();
        ui.label(RichText::new(self.tr("list.heading")).strong());
        ui.add_space(4.0);

        match state.listing_view() {
            ListingView::Loading => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(self.tr("list.loading"));
                });
            }
            ListingView::Empty => {
                ui.label(
                    RichText::new(self.tr("list.empty"))
                        .color(ui.visuals().text_color().gamma_multiply(0.7)),
                );
            }
            ListingView::Rows(rows) => {
                egui::ScrollArea::vertical()
                    .max_height(240.0)
                    .show(ui, |ui| {
                        for row in &rows {
                            self.render_row(ctx, ui, row);
                        }
                    });
            }
        }
    }

    fn render_row(&self, ctx: &egui::Context, ui: &mut egui::Ui, row: &ListingRow) {
        ui.horizontal(|ui| {
            if let Some(glyph) = row.group_glyph {
                ui.colored_label(ACCENT, glyph);
            }
            ui.label(&row.entry.display_name);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let button = egui::Button::new(self.tr(row.control.label_key));
                if ui.add_enabled(row.control.enabled, button).clicked() {
                    self.delete(ctx, row);
                }
            });
        });
    }
}

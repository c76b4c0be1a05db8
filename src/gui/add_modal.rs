use eframe::egui;

use super::theme::Theme;

pub struct AddWordModal {
    open: bool,
    input: String,
}

impl AddWordModal {
    pub fn new() -> Self {
        Self { open: false, input: String::new() }
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.input.clear();
    }

    /// Returns the raw word input when the user submits it. While a
    /// generation request is pending the submit button is disabled, so
    /// re-entry is impossible from this modal.
    pub fn show(&mut self, ctx: &egui::Context, theme: &Theme, pending: bool) -> Option<String> {
        if !self.open {
            return None;
        }

        let mut submitted = None;

        let modal = egui::Modal::new(egui::Id::new("add_word_modal")).show(ctx, |ui| {
            ui.set_width(360.0);

            ui.label(theme.heading("Add a word group"));
            ui.add_space(4.0);
            ui.label(theme.muted("One word, or a few related words separated by commas."));
            ui.add_space(8.0);

            ui.add_enabled(
                !pending,
                egui::TextEdit::multiline(&mut self.input)
                    .hint_text("dominate, nominate, intimidate")
                    .desired_width(f32::INFINITY)
                    .desired_rows(2),
            );

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if pending {
                    ui.add(egui::Spinner::new());
                    ui.label(theme.muted("Generating..."));
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let can_submit = !pending && !self.input.trim().is_empty();
                    if ui.add_enabled(can_submit, egui::Button::new("Generate")).clicked() {
                        submitted = Some(self.input.trim().to_string());
                    }
                    if ui.add_enabled(!pending, egui::Button::new("Cancel")).clicked() {
                        ui.close();
                    }
                });
            });
        });

        if modal.should_close() && !pending {
            self.close();
        }

        submitted
    }
}

impl Default for AddWordModal {
    fn default() -> Self {
        Self::new()
    }
}

use eframe::egui::{
    self,
    RichText,
};

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    theme::Theme,
};
use crate::{
    core::CardSet,
    deck::{
        projection::matches_search,
        DeckState,
    },
};

const GRID_COLUMNS: usize = 3;

/// Full-library overlay: every set, unfiltered, with live search.
/// Selecting a card goes through the deck's selection bridge, which
/// adjusts filters if the target is hidden.
pub struct Overview {
    pub open: bool,
    search: String,
}

impl Overview {
    pub fn new() -> Self {
        Self { open: false, search: String::new() }
    }

    pub fn open(&mut self) {
        self.open = true;
        self.search.clear();
    }

    pub fn show(
        &mut self,
        ctx: &egui::Context,
        deck: &DeckState,
        theme: &Theme,
        actions: &mut ActionQueue,
    ) {
        if !self.open {
            return;
        }

        // Dimmed backdrop behind the library window.
        egui::Area::new(egui::Id::new("overview_backdrop"))
            .order(egui::Order::Middle)
            .fixed_pos(egui::Pos2::ZERO)
            .show(ctx, |ui| {
                let screen = ui.ctx().screen_rect();
                ui.allocate_space(screen.size());
                ui.painter().rect_filled(screen, 0.0, egui::Color32::from_black_alpha(90));
            });

        let screen = ctx.screen_rect();
        let size = egui::vec2(screen.width().min(760.0) - 32.0, screen.height() - 64.0);

        let mut close = false;
        egui::Window::new("Library")
            .order(egui::Order::Foreground)
            .collapsible(false)
            .resizable(false)
            .title_bar(false)
            .fixed_size(size)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                let sets = deck.store().sets();
                let visible: Vec<&CardSet> =
                    sets.iter().filter(|set| matches_search(set, &self.search)).collect();

                ui.horizontal(|ui| {
                    ui.label(theme.heading("Library").size(18.0));
                    ui.label(theme.muted(&visible.len().to_string()));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Close").clicked() {
                            close = true;
                        }

                        let search = egui::TextEdit::singleline(&mut self.search)
                            .hint_text("Search words...")
                            .desired_width(200.0);
                        if ui.add(search).changed() {
                            actions.push(UiAction::SetSearch(self.search.clone()));
                        }
                    });
                });

                ui.separator();

                if visible.is_empty() {
                    ui.vertical_centered(|ui| {
                        ui.add_space(60.0);
                        ui.label(theme.faint(&format!(
                            "No cards found matching \"{}\"",
                            self.search
                        )));
                    });
                    return;
                }

                egui::ScrollArea::vertical().show(ui, |ui| {
                    egui::Grid::new("overview_grid")
                        .num_columns(GRID_COLUMNS)
                        .spacing(egui::vec2(10.0, 10.0))
                        .show(ui, |ui| {
                            for (index, set) in visible.iter().enumerate() {
                                if self.grid_cell(ui, set, theme) {
                                    actions.push(UiAction::Select(set.id));
                                    close = true;
                                }
                                if (index + 1) % GRID_COLUMNS == 0 {
                                    ui.end_row();
                                }
                            }
                        });
                });
            });

        if close || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.open = false;
        }
    }

    fn grid_cell(&self, ui: &mut egui::Ui, set: &CardSet, theme: &Theme) -> bool {
        let cell = ui.group(|ui| {
            ui.set_width(210.0);

            ui.horizontal(|ui| {
                ui.horizontal_wrapped(|ui| {
                    for entry in &set.words {
                        ui.label(theme.heading(&entry.word).size(14.0));
                    }
                });
                if set.is_bookmarked {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                        ui.label(RichText::new("★").size(12.0).color(theme.amber()));
                    });
                }
            });

            ui.horizontal_wrapped(|ui| {
                for entry in &set.words {
                    ui.label(theme.muted(&entry.translation).size(11.0));
                }
            });
        });

        cell.response
            .interact(egui::Sense::click())
            .on_hover_cursor(egui::CursorIcon::PointingHand)
            .clicked()
    }
}

impl Default for Overview {
    fn default() -> Self {
        Self::new()
    }
}

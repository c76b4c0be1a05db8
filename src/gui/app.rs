use std::time::{
    Duration,
    Instant,
};

use eframe::egui::{
    self,
    Color32,
    RichText,
};

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    add_modal::AddWordModal,
    card::card_view,
    error_modal::ErrorModal,
    overview::Overview,
    theme::{
        set_theme,
        Theme,
        BACKGROUNDS,
    },
};
use crate::{
    core::{
        seed,
        CardStore,
    },
    deck::{
        DeckState,
        SortMode,
    },
    generation::{
        GenerationManager,
        GenerationResult,
    },
};

pub struct MnemoApp {
    deck: DeckState,
    generation: GenerationManager,
    add_modal: AddWordModal,
    error_modal: ErrorModal,
    overview: Overview,
    theme: Theme,
    background: Color32,
    actions: ActionQueue,
}

impl MnemoApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let theme = Theme::sage();
        set_theme(&cc.egui_ctx, &theme);

        Self {
            deck: DeckState::new(CardStore::new(seed::initial_sets())),
            generation: GenerationManager::new(),
            add_modal: AddWordModal::new(),
            error_modal: ErrorModal::new(),
            overview: Overview::new(),
            theme,
            background: BACKGROUNDS[0].1,
            actions: ActionQueue::new(),
        }
    }

    fn handle_generation_result(&mut self, result: GenerationResult) {
        match result {
            Ok(set) => {
                println!("Generated card set with {} words", set.words.len());
                self.deck.add_set(set);
                self.add_modal.close();
            }
            Err(error) => {
                eprintln!("Generation failed: {error}");
                self.error_modal.show_error(
                    "Generation Error",
                    "Could not generate the card set. Check the API key and try again.",
                    Some(&error),
                );
            }
        }
    }

    fn apply_action(&mut self, action: UiAction, now: Instant) {
        match action {
            UiAction::Next => self.deck.next(now),
            UiAction::Prev => self.deck.prev(now),
            UiAction::Flip => self.deck.flip(),
            UiAction::ToggleReveal(index) => self.deck.toggle_reveal(index),
            UiAction::ToggleBookmark(id) => {
                if let Err(error) = self.deck.toggle_bookmark(id) {
                    eprintln!("Bookmark toggle failed: {error}");
                }
            }
            UiAction::ToggleBookmarkFilter => {
                let active = self.deck.settings().bookmarked_only;
                self.deck.set_bookmarked_only(!active);
            }
            UiAction::ToggleSortMode => self.deck.toggle_sort_mode(),
            UiAction::Select(id) => {
                if let Err(error) = self.deck.select_by_id(id) {
                    eprintln!("Selection failed: {error}");
                }
            }
            UiAction::SetSearch(search) => self.deck.set_search(search),
        }
    }

    fn top_bar(&mut self, ctx: &egui::Context) {
        let frame = egui::Frame::new().fill(self.background).inner_margin(egui::Margin::same(8));

        egui::TopBottomPanel::top("top_bar").frame(frame).show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.theme.heading("Mnemo").size(20.0));
                ui.label(self.theme.faint("MASTERY CARDS").size(9.0));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("+ Add").on_hover_text("Add a word group").clicked() {
                        self.add_modal.open();
                    }

                    ui.menu_button("🎨", |ui| {
                        for (name, color) in BACKGROUNDS {
                            let swatch = RichText::new("●").color(*color).size(14.0);
                            if ui.button(swatch).on_hover_text(*name).clicked() {
                                self.background = *color;
                                ui.close();
                            }
                        }
                    });

                    let sort_icon = match self.deck.settings().sort_mode {
                        SortMode::Latest => "⏰",
                        SortMode::Random => "🔀",
                    };
                    let sort_hint = match self.deck.settings().sort_mode {
                        SortMode::Latest => "Sorted by newest",
                        SortMode::Random => "Random shuffle",
                    };
                    if ui.button(sort_icon).on_hover_text(sort_hint).clicked() {
                        self.actions.push(UiAction::ToggleSortMode);
                    }

                    let filter_active = self.deck.settings().bookmarked_only;
                    let star = if filter_active {
                        RichText::new("★").color(self.theme.amber())
                    } else {
                        RichText::new("☆")
                    };
                    if ui.button(star).on_hover_text("Show bookmarked only").clicked() {
                        self.actions.push(UiAction::ToggleBookmarkFilter);
                    }

                    if ui.button("⊞").on_hover_text("Overview").clicked() {
                        self.overview.open();
                    }
                });
            });
        });
    }

    fn deck_panel(&mut self, ctx: &egui::Context, now: Instant) {
        let frame = egui::Frame::new().fill(self.background).inner_margin(egui::Margin::same(12));

        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            if self.deck.current_card().is_none() {
                self.empty_state(ui);
                return;
            }

            card_view(ui, &self.deck, &self.theme, now, &mut self.actions);

            ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    let width = ui.available_width();
                    ui.add_space((width * 0.5 - 90.0).max(0.0));

                    if ui.button(RichText::new("◀").size(18.0)).clicked() {
                        self.actions.push(UiAction::Prev);
                    }

                    let counter = format!(
                        "{} / {}",
                        self.deck.current_index() + 1,
                        self.deck.visible_len()
                    );
                    ui.add_sized(
                        [90.0, 24.0],
                        egui::Label::new(self.theme.heading(&counter).size(15.0)),
                    );

                    if ui.button(RichText::new("▶").size(18.0)).clicked() {
                        self.actions.push(UiAction::Next);
                    }
                });
            });
        });
    }

    fn empty_state(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.3);
            ui.label(self.theme.muted("No flashcards found.").size(16.0));
            ui.add_space(8.0);

            if self.deck.settings().bookmarked_only {
                if ui.link("Show all cards").clicked() {
                    self.actions.push(UiAction::ToggleBookmarkFilter);
                }
            } else if ui.link("Add your first word group").clicked() {
                self.add_modal.open();
            }
        });
    }
}

impl eframe::App for MnemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        if let Some(result) = self.generation.poll() {
            self.handle_generation_result(result);
        }

        self.deck.tick(now);

        self.top_bar(ctx);
        self.deck_panel(ctx, now);

        self.overview.show(ctx, &self.deck, &self.theme, &mut self.actions);

        if let Some(input) = self.add_modal.show(ctx, &self.theme, self.generation.is_pending()) {
            println!("Generating card set for: {input}");
            self.generation.request(input);
        }

        self.error_modal.show(ctx);

        let actions: Vec<UiAction> = self.actions.drain().collect();
        for action in actions {
            self.apply_action(action, now);
        }

        // The transition deadlines and the generation channel need
        // frames even without input events.
        if self.deck.in_transition() || self.generation.is_pending() {
            ctx.request_repaint_after(Duration::from_millis(16));
        }
    }
}

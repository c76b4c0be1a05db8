use std::time::Instant;

use eframe::egui::{
    self,
    Color32,
    CornerRadius,
    FontId,
    Margin,
    RichText,
    Sense,
    TextFormat,
};

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    theme::Theme,
};
use crate::{
    core::{
        markup::parse_emphasis,
        CardSet,
        WordEntry,
    },
    deck::{
        DeckState,
        TransitionPhase,
    },
};

/// How far the card slides while exiting/entering, in points.
const SLIDE_DISTANCE: f32 = 60.0;

/// Lays marked-up text into a single wrapped label, alternating the
/// plain and emphasis colors.
fn markup_job(text: &str, base: Color32, emphasis: Color32, size: f32) -> egui::text::LayoutJob {
    let mut job = egui::text::LayoutJob::default();
    for segment in parse_emphasis(text) {
        let format = TextFormat {
            font_id: FontId::proportional(size),
            color: if segment.emphasized { emphasis } else { base },
            ..Default::default()
        };
        job.append(&segment.text, 0.0, format);
    }
    job
}

fn bookmark_star(ui: &mut egui::Ui, card: &CardSet, theme: &Theme, actions: &mut ActionQueue) {
    let star = if card.is_bookmarked {
        RichText::new("★").size(18.0).color(theme.amber())
    } else {
        RichText::new("☆").size(18.0).color(theme.ink_faint())
    };
    if ui.add(egui::Button::new(star).frame(false)).on_hover_text("Bookmark").clicked() {
        actions.push(UiAction::ToggleBookmark(card.id));
    }
}

pub fn card_view(
    ui: &mut egui::Ui,
    deck: &DeckState,
    theme: &Theme,
    now: Instant,
    actions: &mut ActionQueue,
) {
    let Some(card) = deck.current_card() else {
        return;
    };

    let progress = deck.phase_progress(now);
    let (offset, opacity) = match deck.phase() {
        TransitionPhase::Idle => (0.0, 1.0),
        TransitionPhase::Exiting => (progress * SLIDE_DISTANCE, 1.0 - progress),
        TransitionPhase::Entering => ((progress - 1.0) * SLIDE_DISTANCE, progress),
    };

    let available = ui.available_rect_before_wrap();
    let size = egui::vec2(available.width().min(420.0), (available.height() - 70.0).max(220.0));
    let rect = egui::Rect::from_min_size(
        egui::pos2(available.center().x - size.x * 0.5 + offset, available.top()),
        size,
    );

    ui.scope_builder(egui::UiBuilder::new().max_rect(rect), |ui| {
        ui.set_opacity(opacity);

        // Background click flips; widgets drawn on top keep their own clicks.
        let response = ui.interact(rect, ui.id().with("card_face"), Sense::click());
        if response.clicked() {
            actions.push(UiAction::Flip);
        }

        egui::Frame::new()
            .fill(theme.card())
            .stroke(egui::Stroke::new(1.0, theme.card_border()))
            .corner_radius(CornerRadius::same(16))
            .inner_margin(Margin::same(18))
            .show(ui, |ui| {
                ui.set_min_size(ui.available_size());
                if deck.is_flipped() {
                    back_face(ui, card, theme);
                } else {
                    front_face(ui, card, deck, theme, actions);
                }
            });
    });
}

fn front_face(
    ui: &mut egui::Ui,
    card: &CardSet,
    deck: &DeckState,
    theme: &Theme,
    actions: &mut ActionQueue,
) {
    ui.horizontal(|ui| {
        ui.label(theme.faint(&format!("{} WORDS", card.words.len())).size(10.0));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            bookmark_star(ui, card, theme, actions);
        });
    });

    // Wider gaps for sparse cards, tight ones for full cards.
    let gap = match card.words.len() {
        0..=2 => 34.0,
        3 => 20.0,
        _ => 10.0,
    };

    ui.add_space(gap);
    for (index, entry) in card.words.iter().enumerate() {
        front_word(ui, index, entry, deck, theme, actions);
        ui.add_space(gap);
    }

    ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
        ui.label(theme.faint("CLICK WORD TO PEEK · FLIP FOR DETAILS").size(9.0));
    });
}

fn front_word(
    ui: &mut egui::Ui,
    index: usize,
    entry: &WordEntry,
    deck: &DeckState,
    theme: &Theme,
    actions: &mut ActionQueue,
) {
    ui.vertical_centered(|ui| {
        let word = egui::Label::new(theme.heading(&entry.word).size(26.0)).sense(Sense::click());
        if ui.add(word).on_hover_text("Peek at the meaning").clicked() {
            actions.push(UiAction::ToggleReveal(index));
        }

        ui.horizontal(|ui| {
            // Rough centering for the phonetic + reveal row.
            ui.add_space((ui.available_width() - 170.0).max(0.0) * 0.5);
            ui.label(theme.faint(&entry.phonetic).monospace().size(11.0));

            let revealed = deck.is_revealed(index);
            let label = if revealed {
                RichText::new(&entry.translation).size(12.0).color(theme.amber())
            } else {
                RichText::new("Show Meaning").size(12.0).color(theme.ink_faint())
            };
            let fill = if revealed { theme.amber_soft() } else { theme.panel() };
            let button = egui::Button::new(label).fill(fill).corner_radius(CornerRadius::same(6));
            if ui.add(button).clicked() {
                actions.push(UiAction::ToggleReveal(index));
            }
        });
    });
}

fn back_face(ui: &mut egui::Ui, card: &CardSet, theme: &Theme) {
    for (index, entry) in card.words.iter().enumerate() {
        if index > 0 {
            ui.add_space(6.0);
            ui.separator();
            ui.add_space(6.0);
        }
        back_word(ui, entry, theme);
    }
}

fn back_word(ui: &mut egui::Ui, entry: &WordEntry, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.label(theme.heading(&entry.word).size(16.0));
        ui.label(theme.faint(&entry.phonetic).monospace().size(10.0));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            egui::Frame::new()
                .fill(theme.amber_soft())
                .corner_radius(CornerRadius::same(4))
                .inner_margin(Margin::symmetric(6, 2))
                .show(ui, |ui| {
                    ui.label(RichText::new(&entry.translation).size(12.0).color(theme.amber()));
                });
        });
    });

    ui.add_space(2.0);
    ui.horizontal_wrapped(|ui| {
        ui.label(theme.muted("[释义]").size(11.0).strong());
        ui.label(markup_job(&entry.definition, theme.ink_soft(), theme.highlight(), 11.0));
    });

    ui.add_space(4.0);
    egui::Frame::new()
        .fill(theme.panel())
        .corner_radius(CornerRadius::same(6))
        .inner_margin(Margin::same(6))
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new("✨").size(10.0));
                ui.label(markup_job(&entry.mnemonic, theme.ink(), theme.highlight(), 11.0));
            });
        });

    if let Some(example) = entry.examples.first() {
        ui.add_space(4.0);
        ui.label(markup_job(&example.source, theme.ink(), theme.highlight(), 10.0));
        ui.label(markup_job(&example.target, theme.ink_soft(), theme.highlight(), 10.0));
    }
}

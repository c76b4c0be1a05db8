use eframe::egui::{
    self,
    Color32,
    RichText,
    Stroke,
    Visuals,
};

/// Background choices offered by the palette picker.
pub const BACKGROUNDS: &[(&str, Color32)] = &[
    ("Sage", Color32::from_rgb(0xf4, 0xf7, 0xf5)),
    ("Cream", Color32::from_rgb(0xfd, 0xfb, 0xf7)),
    ("Mist", Color32::from_rgb(0xf0, 0xf4, 0xf8)),
    ("Pale Pink", Color32::from_rgb(0xff, 0xf5, 0xf5)),
    ("Pale Amber", Color32::from_rgb(0xff, 0xfb, 0xf0)),
];

#[derive(Clone)]
pub struct Theme {
    card: Color32,
    card_border: Color32,
    ink: Color32,
    ink_soft: Color32,
    ink_faint: Color32,
    amber: Color32,
    amber_soft: Color32,
    highlight: Color32,
    panel: Color32,
}

impl Theme {
    pub fn sage() -> Self {
        Self {
            card: Color32::from_rgb(0xff, 0xff, 0xff),
            card_border: Color32::from_rgb(0xdd, 0xe5, 0xdf),
            ink: Color32::from_rgb(0x1f, 0x2d, 0x24),
            ink_soft: Color32::from_rgb(0x5d, 0x6e, 0x64),
            ink_faint: Color32::from_rgb(0xa4, 0xb2, 0xa9),
            amber: Color32::from_rgb(0xb4, 0x6a, 0x1d),
            amber_soft: Color32::from_rgb(0xfc, 0xef, 0xd4),
            highlight: Color32::from_rgb(0x8a, 0x5a, 0x14),
            panel: Color32::from_rgb(0xec, 0xf1, 0xee),
        }
    }

    pub fn card(&self) -> Color32 {
        self.card
    }

    pub fn card_border(&self) -> Color32 {
        self.card_border
    }

    pub fn ink(&self) -> Color32 {
        self.ink
    }

    pub fn ink_soft(&self) -> Color32 {
        self.ink_soft
    }

    pub fn ink_faint(&self) -> Color32 {
        self.ink_faint
    }

    pub fn amber(&self) -> Color32 {
        self.amber
    }

    pub fn amber_soft(&self) -> Color32 {
        self.amber_soft
    }

    /// Color for emphasized markup spans.
    pub fn highlight(&self) -> Color32 {
        self.highlight
    }

    pub fn panel(&self) -> Color32 {
        self.panel
    }

    pub fn heading(&self, content: &str) -> RichText {
        RichText::new(content).color(self.ink).strong()
    }

    pub fn muted(&self, content: &str) -> RichText {
        RichText::new(content).color(self.ink_soft)
    }

    pub fn faint(&self, content: &str) -> RichText {
        RichText::new(content).color(self.ink_faint)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::sage()
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    let mut visuals = Visuals::light();

    visuals.override_text_color = Some(theme.ink);
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, theme.card_border);
    visuals.widgets.inactive.bg_fill = theme.panel;
    visuals.widgets.inactive.weak_bg_fill = theme.panel;
    visuals.widgets.hovered.bg_fill = theme.card;
    visuals.widgets.hovered.weak_bg_fill = theme.card;
    visuals.widgets.active.bg_fill = theme.amber_soft;
    visuals.widgets.active.weak_bg_fill = theme.amber_soft;
    visuals.selection.bg_fill = theme.amber_soft;
    visuals.selection.stroke = Stroke::new(1.0, theme.amber);
    visuals.window_fill = theme.card;
    visuals.panel_fill = BACKGROUNDS[0].1;

    ctx.set_theme(egui::Theme::Light);
    ctx.set_visuals_of(egui::Theme::Light, visuals);
}

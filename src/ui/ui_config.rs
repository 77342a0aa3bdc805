use {
    crate::{app::Theme, domain::Tone},
    eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke},
};

/// Colours for one theme.
#[derive(Clone, Copy)]
pub struct Palette {
    pub page_bg: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_strong: Color32,
    pub card_bg: Color32,
    pub card_ring: Color32,
    pub chip_bg: Color32,
    pub bar_track: Color32,
    pub control_selected: Color32,
}

pub static DARK: Palette = Palette {
    page_bg: Color32::from_rgb(2, 6, 23),
    text_primary: Color32::from_rgb(241, 245, 249),
    text_secondary: Color32::from_rgb(148, 163, 184),
    text_strong: Color32::from_rgb(248, 250, 252),
    card_bg: Color32::from_rgb(15, 19, 36),
    card_ring: Color32::from_rgb(40, 44, 60),
    chip_bg: Color32::from_rgb(8, 11, 26),
    bar_track: Color32::from_rgb(30, 41, 59),
    control_selected: Color32::from_rgb(45, 50, 70),
};

pub static LIGHT: Palette = Palette {
    page_bg: Color32::from_rgb(248, 250, 252),
    text_primary: Color32::from_rgb(15, 23, 42),
    text_secondary: Color32::from_rgb(71, 85, 105),
    text_strong: Color32::from_rgb(15, 23, 42),
    card_bg: Color32::WHITE,
    card_ring: Color32::from_rgb(226, 232, 240),
    chip_bg: Color32::from_rgb(241, 245, 249),
    bar_track: Color32::from_rgb(226, 232, 240),
    control_selected: Color32::from_rgb(226, 232, 240),
};

pub fn palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Dark => &DARK,
        Theme::Light => &LIGHT,
    }
}

pub fn tone_color(tone: Tone) -> Color32 {
    match tone {
        Tone::Indigo => Color32::from_rgb(129, 140, 248),
        Tone::Violet => Color32::from_rgb(167, 139, 250),
        Tone::Fuchsia => Color32::from_rgb(232, 121, 249),
        Tone::Lavender => Color32::from_rgb(196, 181, 253),
    }
}

pub const LIVE_BADGE: Color32 = Color32::from_rgb(16, 185, 129);
pub const MOVE_UP: Color32 = Color32::from_rgb(34, 197, 94);
pub const MOVE_DOWN: Color32 = Color32::from_rgb(239, 68, 68);

impl Palette {
    /// Frame for a sector card or info box
    pub fn card_frame(&self) -> Frame {
        Frame {
            fill: self.card_bg,
            stroke: Stroke::new(1.0, self.card_ring),
            inner_margin: Margin::same(16),
            corner_radius: CornerRadius::same(14),
            ..Default::default()
        }
    }

    /// Frame for small chips (status pill, momentum box)
    pub fn chip_frame(&self) -> Frame {
        Frame {
            fill: self.chip_bg,
            stroke: Stroke::new(1.0, self.card_ring),
            inner_margin: Margin::symmetric(8, 4),
            corner_radius: CornerRadius::same(10),
            ..Default::default()
        }
    }

    /// Frame for the whole page
    pub fn page_frame(&self) -> Frame {
        Frame {
            fill: self.page_bg,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(24, 20),
            ..Default::default()
        }
    }
}

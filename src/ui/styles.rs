use {
    crate::{
        domain::{Tone, bar_fraction, format_score, score_to_pct},
        ui::{Palette, tone_color},
    },
    eframe::egui::{
        Context, CornerRadius, FontId, Label, Rect, Response, RichText, Sense, Stroke, StrokeKind,
        Ui, Vec2, Visuals, WidgetInfo, WidgetType,
    },
};

const CHIP_FONT_SIZE: f32 = 14.0;
const CHIP_PADDING: Vec2 = Vec2::new(10.0, 5.0);

pub(crate) trait UiStyleExt {
    /// Pill toggle drawn like the card chips: ring on hover, filled with an
    /// indigo underline when selected.
    fn toggle_chip(&mut self, text: &str, is_selected: bool, palette: &Palette) -> Response;

    fn label_subdued(&mut self, text: impl Into<String>, palette: &Palette) -> Response;

    /// One horizon row: label, clamped bar, raw value.
    fn score_bar(&mut self, label: &str, value: f64, tone: Tone, palette: &Palette);
}

impl UiStyleExt for Ui {
    fn toggle_chip(&mut self, text: &str, is_selected: bool, palette: &Palette) -> Response {
        let color = if is_selected {
            palette.text_strong
        } else {
            palette.text_secondary
        };
        let galley = self.painter().layout_no_wrap(
            text.to_string(),
            FontId::proportional(CHIP_FONT_SIZE),
            color,
        );
        let size = galley.size() + CHIP_PADDING * 2.0;
        let (rect, response) = self.allocate_exact_size(size, Sense::click());
        response.widget_info(|| WidgetInfo::selected(WidgetType::Button, true, is_selected, text));

        if self.is_rect_visible(rect) {
            let painter = self.painter();
            let radius = CornerRadius::same(10);
            if is_selected {
                painter.rect(
                    rect,
                    radius,
                    palette.control_selected,
                    Stroke::new(1.0, palette.card_ring),
                    StrokeKind::Inside,
                );
                let underline = Rect::from_min_max(
                    rect.left_bottom() + Vec2::new(CHIP_PADDING.x, -3.0),
                    rect.right_bottom() + Vec2::new(-CHIP_PADDING.x, -1.0),
                );
                painter.rect_filled(underline, 1.0, tone_color(Tone::Indigo));
            } else if response.hovered() || response.has_focus() {
                painter.rect_stroke(
                    rect,
                    radius,
                    Stroke::new(1.0, palette.card_ring),
                    StrokeKind::Inside,
                );
            }
            painter.galley(rect.min + CHIP_PADDING, galley, color);
        }
        response
    }

    fn label_subdued(&mut self, text: impl Into<String>, palette: &Palette) -> Response {
        self.label(RichText::new(text).small().color(palette.text_secondary))
    }

    fn score_bar(&mut self, label: &str, value: f64, tone: Tone, palette: &Palette) {
        self.horizontal(|ui| {
            ui.add_sized(
                [40.0, 14.0],
                Label::new(RichText::new(label).small().color(palette.text_secondary)),
            );

            let value_width = 36.0;
            let bar_width = (ui.available_width() - value_width).max(20.0);
            let (rect, bar) = ui.allocate_exact_size(Vec2::new(bar_width, 10.0), Sense::hover());
            if ui.is_rect_visible(rect) {
                let painter = ui.painter();
                painter.rect_filled(rect, 5.0, palette.bar_track);
                let mut filled = rect;
                filled.set_width(rect.width() * bar_fraction(value));
                if filled.width() > 0.0 {
                    painter.rect_filled(filled, 5.0, tone_color(tone).gamma_multiply(0.8));
                }
            }
            bar.on_hover_text(score_to_pct(value));

            ui.label(
                RichText::new(format_score(value))
                    .small()
                    .monospace()
                    .color(palette.text_primary),
            );
        });
    }
}

pub(crate) fn setup_custom_visuals(ctx: &Context, palette: &Palette, dark: bool) {
    let mut visuals = if dark { Visuals::dark() } else { Visuals::light() };
    visuals.window_fill = palette.page_bg;
    visuals.panel_fill = palette.page_bg;
    visuals.widgets.noninteractive.fg_stroke.color = palette.text_primary;
    visuals.widgets.inactive.fg_stroke.color = palette.text_secondary;
    visuals.widgets.hovered.fg_stroke.color = palette.text_strong;
    visuals.widgets.active.fg_stroke.color = palette.text_strong;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{app::Theme, ui::palette};
    use eframe::egui::{CentralPanel, RawInput};

    #[test]
    fn toggle_chip_wraps_text_in_padding() {
        let ctx = Context::default();
        let _ = ctx.run(RawInput::default(), |ctx| {
            CentralPanel::default().show(ctx, |ui| {
                let pal = palette(Theme::Dark);
                let selected = ui.toggle_chip("Fast", true, pal);
                let idle = ui.toggle_chip("Fast", false, pal);
                assert_eq!(selected.rect.size(), idle.rect.size());
                assert!(selected.rect.width() > CHIP_PADDING.x * 2.0);
                assert!(selected.rect.height() > CHIP_PADDING.y * 2.0);
                assert!(!idle.clicked());
            });
        });
    }
}

use {
    crate::{
        app::{Lang, Preferences},
        config::LABS_STORE,
        data::FetchState,
        domain::{Mode, SectorRecord, Tone, format_score},
        ui::{
            HOME_URL, ICON_SORT_RULE, LIVE_BADGE, Localized, Palette, UiStyleExt, UiText,
            palette, tone_color, ui_text,
        },
    },
    eframe::egui::{Align, Hyperlink, Layout, RichText, Ui},
};

const CARD_MIN_WIDTH: f32 = 300.0;

/// Grid of sector cards in ranked order.
pub(crate) fn render_board(
    ui: &mut Ui,
    ordered: &[SectorRecord],
    prefs: &Preferences,
    fetch: &FetchState,
) {
    let pal = palette(prefs.theme);
    let text = ui_text(prefs.lang);

    if fetch.is_loading() {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label_subdued(text.loading_override, pal);
        });
    } else if let Some(err) = fetch.error() {
        ui.label_subdued(text.override_failed, pal)
            .on_hover_text(err.to_string());
    }
    ui.add_space(8.0);

    let live = fetch.value().is_some();
    let cols = ((ui.available_width() / CARD_MIN_WIDTH).floor() as usize).clamp(1, 3);
    ui.columns(cols, |columns| {
        for (i, sector) in ordered.iter().enumerate() {
            let ui = &mut columns[i % cols];
            let is_live = live && sector.id == LABS_STORE.designated_sector;
            render_card(ui, sector, prefs.mode, prefs.lang, pal, text, is_live);
            ui.add_space(12.0);
        }
    });
}

fn render_card(
    ui: &mut Ui,
    sector: &SectorRecord,
    mode: Mode,
    lang: Lang,
    pal: &Palette,
    text: &UiText,
    is_live: bool,
) {
    let view = sector.view(mode);
    pal.card_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(sector.icon.glyph()).size(20.0));
                    ui.label(
                        RichText::new(sector.localized(lang))
                            .strong()
                            .size(16.0)
                            .color(pal.text_strong),
                    );
                    if is_live {
                        ui.label(
                            RichText::new(text.realtime)
                                .small()
                                .color(LIVE_BADGE)
                                .background_color(LIVE_BADGE.gamma_multiply(0.2)),
                        );
                    }
                });
                pal.chip_frame().show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("●").color(tone_color(view.status.tone())));
                        ui.label(RichText::new(text.current_status).small().color(pal.text_secondary));
                        ui.label(
                            RichText::new(view.status.localized(lang))
                                .small()
                                .strong()
                                .color(pal.text_strong),
                        );
                    });
                });
            });

            ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
                pal.chip_frame().show(ui, |ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(text.momentum).small().color(pal.text_secondary));
                        ui.label(
                            RichText::new(format!("{}", view.scores.momentum().round()))
                                .strong()
                                .color(pal.text_strong),
                        );
                    });
                });
            });
        });

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new(text.score_label).small().color(pal.text_secondary));
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label_subdued(text.score_range, pal);
            });
        });

        let [(l4, s4), (l14, s14), (l54, s54)] = view.scores.horizons();
        ui.score_bar(l4, s4, view.status.lead_bar_tone(), pal);
        ui.score_bar(l14, s14, Tone::Violet, pal);
        ui.score_bar(l54, s54, Tone::Lavender, pal);
    })
    .response
    .on_hover_text(format!(
        "{}: {}",
        text.momentum,
        format_score((view.scores.momentum() * 100.0).round() / 100.0)
    ));
}

/// Sort rule explainer and footer.
pub(crate) fn render_footer(ui: &mut Ui, prefs: &Preferences) {
    let pal = palette(prefs.theme);
    let text = ui_text(prefs.lang);

    pal.card_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(RichText::new(ICON_SORT_RULE).color(pal.text_secondary));
            ui.vertical(|ui| {
                ui.label(RichText::new(text.sort_rule).strong().color(pal.text_primary));
                ui.label(RichText::new(text.sort_rule_desc).color(pal.text_secondary));
            });
        });
    });

    ui.add_space(24.0);
    ui.separator();
    ui.horizontal(|ui| {
        ui.add(Hyperlink::from_label_and_url(
            RichText::new(text.home_link).color(pal.text_primary),
            HOME_URL,
        ));
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            ui.label_subdued(text.copyright, pal);
        });
    });
}

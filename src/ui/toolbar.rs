use {
    crate::{
        app::{Exchange, Lang, PrefAction, Preferences, Theme},
        domain::Mode,
        ui::{ICON_FAST, ICON_MOON, ICON_NORMAL, ICON_STABLE, ICON_SUN, UiStyleExt, palette, ui_text},
    },
    eframe::egui::{ComboBox, RichText, Ui},
    strum::IntoEnumIterator,
};

fn mode_icon(mode: Mode) -> &'static str {
    match mode {
        Mode::Fast => ICON_FAST,
        Mode::Normal => ICON_NORMAL,
        Mode::Stable => ICON_STABLE,
    }
}

/// Header: title, subtitle and the preference controls.
/// Returns the transitions the user asked for this frame.
pub(crate) fn render_toolbar(ui: &mut Ui, prefs: &Preferences) -> Vec<PrefAction> {
    let pal = palette(prefs.theme);
    let text = ui_text(prefs.lang);
    let mut actions = Vec::new();

    ui.heading(RichText::new(text.title).size(26.0).strong().color(pal.text_strong));
    ui.label(RichText::new(text.subtitle).color(pal.text_secondary));
    ui.add_space(12.0);

    ui.horizontal_wrapped(|ui| {
        pal.chip_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                for (theme, icon, label) in [
                    (Theme::Light, ICON_SUN, text.label_theme_light),
                    (Theme::Dark, ICON_MOON, text.label_theme_dark),
                ] {
                    if ui
                        .toggle_chip(icon, prefs.theme == theme, pal)
                        .on_hover_text(label)
                        .clicked()
                    {
                        actions.push(PrefAction::SetTheme(theme));
                    }
                }
            });
        });

        let mut lang = prefs.lang;
        ComboBox::from_id_salt("labs_lang")
            .selected_text(lang.native_name())
            .show_ui(ui, |ui| {
                for l in Lang::iter() {
                    ui.selectable_value(&mut lang, l, l.native_name());
                }
            });
        if lang != prefs.lang {
            actions.push(PrefAction::SetLang(lang));
        }

        let mut exchange = prefs.exchange;
        ComboBox::from_id_salt("labs_exchange")
            .selected_text(exchange.label())
            .show_ui(ui, |ui| {
                for x in Exchange::iter() {
                    ui.selectable_value(&mut exchange, x, x.label());
                }
            });
        if exchange != prefs.exchange {
            actions.push(PrefAction::SetExchange(exchange));
        }

        pal.chip_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                for mode in Mode::iter() {
                    let label = format!("{} {}", mode_icon(mode), mode);
                    if ui.toggle_chip(&label, prefs.mode == mode, pal).clicked()
                    {
                        actions.push(PrefAction::SetMode(mode));
                    }
                }
            });
        });
    });

    actions
}

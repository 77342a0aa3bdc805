use {
    crate::{
        app::Preferences,
        models::{COIN_WEATHER, CoinWeather},
        ui::{Localized, MOVE_DOWN, MOVE_UP, UiStyleExt, palette, ui_text},
    },
    eframe::egui::{RichText, Ui},
    egui_plot::{Bar, BarChart, Plot},
};

/// Static coin weather strip with a bar chart of recent moves per coin.
pub(crate) fn render_weather(ui: &mut Ui, prefs: &Preferences) {
    let pal = palette(prefs.theme);
    let text = ui_text(prefs.lang);

    pal.card_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.label(
            RichText::new(text.weather_heading)
                .strong()
                .color(pal.text_primary),
        );
        ui.add_space(6.0);

        let cols = COIN_WEATHER.len();
        ui.columns(cols, |columns| {
            for (ui, coin) in columns.iter_mut().zip(COIN_WEATHER) {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(coin.weather.glyph()).size(22.0));
                    ui.vertical(|ui| {
                        ui.label(RichText::new(coin.symbol).strong().color(pal.text_strong));
                        ui.label_subdued(coin.weather.localized(prefs.lang), pal);
                    });
                });
                ui.label_subdued(text.weather_moves, pal);
                moves_chart(ui, coin);
            }
        });
    });
}

fn moves_chart(ui: &mut Ui, coin: &CoinWeather) {
    let bars: Vec<Bar> = coin
        .recent_moves_pct
        .iter()
        .enumerate()
        .map(|(i, &pct)| {
            let color = if pct >= 0.0 { MOVE_UP } else { MOVE_DOWN };
            Bar::new(i as f64, pct).width(0.7).fill(color)
        })
        .collect();

    Plot::new(format!("weather_moves_{}", coin.symbol))
        .height(80.0)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show_axes([false, true])
        .show_grid(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(coin.symbol, bars));
        });
}

use {
    eframe::{
        Frame, Storage,
        egui::{CentralPanel, Context, ScrollArea},
    },
    serde::{Deserialize, Serialize},
};

use crate::{
    Cli,
    app::{BoardCache, PrefAction, Preferences, Theme},
    config::PERSISTENCE,
    data::{FetchOutcome, FetchState, OverrideFetch, select_store},
    models::SECTORS,
    ui::{
        palette, render_board, render_footer, render_toolbar, render_weather,
        setup_custom_visuals,
    },
};

#[cfg(debug_assertions)]
use crate::config::DF;

#[derive(Deserialize, Serialize, Default)]
#[serde(default)]
pub struct App {
    pub(crate) prefs: Preferences, // persists across sessions.
    #[serde(skip)]
    pub(crate) fetch: Option<OverrideFetch>,
    #[serde(skip)]
    pub(crate) board: BoardCache,
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, PERSISTENCE.app.preferences_key).unwrap_or_default()
        } else {
            Self::default()
        };

        if let Some(lang) = args.lang {
            app.dispatch(PrefAction::SetLang(lang));
        }
        if let Some(theme) = args.theme {
            app.dispatch(PrefAction::SetTheme(theme));
        }

        app.fetch = Some(OverrideFetch::spawn(select_store(&args)));
        app
    }

    pub(crate) fn dispatch(&mut self, action: PrefAction) {
        self.prefs = self.prefs.reduce(action);
    }

    /// Drains the fetch channel. Returns true while the read is still pending.
    fn poll_fetch(&mut self) -> bool {
        match self.fetch.as_mut() {
            Some(fetch) => fetch.poll().is_loading(),
            None => false,
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        if self.poll_fetch() {
            ctx.request_repaint();
        }

        let pal = palette(self.prefs.theme);
        setup_custom_visuals(ctx, pal, self.prefs.theme == Theme::Dark);

        let idle = FetchState::Ready(FetchOutcome::default());
        let fetch_state = self.fetch.as_ref().map_or(&idle, OverrideFetch::state);
        let prefs = self.prefs;
        let ordered = self.board.ordered(SECTORS, prefs.mode, fetch_state.value());

        let mut actions = Vec::new();
        CentralPanel::default()
            .frame(pal.page_frame())
            .show(ctx, |ui| {
                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        actions = render_toolbar(ui, &prefs);
                        ui.add_space(16.0);
                        render_board(ui, ordered, &prefs, fetch_state);
                        ui.add_space(16.0);
                        render_weather(ui, &prefs);
                        ui.add_space(16.0);
                        render_footer(ui, &prefs);
                    });
            });

        for action in actions {
            self.dispatch(action);
        }
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        #[cfg(debug_assertions)]
        if DF.log_preferences {
            log::info!("💾 SAVE [App]: Preferences = {:?}", self.prefs);
        }
        eframe::set_value(storage, PERSISTENCE.app.preferences_key, self);
    }
}

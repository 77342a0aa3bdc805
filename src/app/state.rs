// src/app/state.rs

use {
    crate::{
        analysis::rank,
        domain::{Mode, SectorRecord},
    },
    clap::ValueEnum,
    serde::{Deserialize, Serialize},
    strum_macros::EnumIter,
};

#[cfg(debug_assertions)]
use crate::config::DF;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumIter, ValueEnum,
)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumIter, ValueEnum,
)]
pub enum Lang {
    #[default]
    Ko,
    En,
}

impl Lang {
    pub fn native_name(self) -> &'static str {
        match self {
            Self::Ko => "한국어",
            Self::En => "English",
        }
    }
}

/// Exchange shown in the selector. Display only; does not change data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumIter)]
pub enum Exchange {
    #[default]
    Upbit,
    Binance,
    Bithumb,
}

impl Exchange {
    pub fn label(self) -> &'static str {
        match self {
            Self::Upbit => "Upbit",
            Self::Binance => "Binance",
            Self::Bithumb => "Bithumb",
        }
    }
}

/// Display preferences. Only ever changed through `reduce`.
/// Only the theme is saved; the rest start from defaults each launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub theme: Theme,
    #[serde(skip)]
    pub lang: Lang,
    #[serde(skip)]
    pub exchange: Exchange,
    #[serde(skip)]
    pub mode: Mode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefAction {
    SetTheme(Theme),
    ToggleTheme,
    SetLang(Lang),
    SetExchange(Exchange),
    SetMode(Mode),
}

impl Preferences {
    pub fn reduce(self, action: PrefAction) -> Self {
        let next = match action {
            PrefAction::SetTheme(theme) => Self { theme, ..self },
            PrefAction::ToggleTheme => Self {
                theme: match self.theme {
                    Theme::Light => Theme::Dark,
                    Theme::Dark => Theme::Light,
                },
                ..self
            },
            PrefAction::SetLang(lang) => Self { lang, ..self },
            PrefAction::SetExchange(exchange) => Self { exchange, ..self },
            PrefAction::SetMode(mode) => Self { mode, ..self },
        };

        #[cfg(debug_assertions)]
        if DF.log_preferences && next != self {
            log::info!("PREFS: {:?} -> {:?}", action, next);
        }

        next
    }
}

/// Ordered board memoised on (mode, override).
#[derive(Debug, Default)]
pub struct BoardCache {
    key: Option<(Mode, Option<u64>)>,
    ordered: Vec<SectorRecord>,
}

impl BoardCache {
    /// Re-ranks only when the mode or the override value changed.
    pub fn ordered(
        &mut self,
        sectors: &[SectorRecord],
        mode: Mode,
        score_override: Option<f64>,
    ) -> &[SectorRecord] {
        let key = (mode, score_override.map(f64::to_bits));
        if self.key != Some(key) {
            self.ordered = rank(sectors, mode, score_override);
            self.key = Some(key);
        }
        &self.ordered
    }
}

mod board;
mod styles;
mod toolbar;
mod ui_config;
mod ui_text;
mod weather;

pub(crate) use board::{render_board, render_footer};
pub(crate) use styles::{UiStyleExt, setup_custom_visuals};
pub(crate) use toolbar::render_toolbar;
pub(crate) use weather::render_weather;

pub use ui_config::{LIVE_BADGE, MOVE_DOWN, MOVE_UP, Palette, palette, tone_color};
pub use ui_text::{
    HOME_URL, ICON_FAST, ICON_MOON, ICON_NORMAL, ICON_SORT_RULE, ICON_STABLE, ICON_SUN,
    Localized, UiText, ui_text,
};

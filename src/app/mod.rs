mod root;
mod state;

pub use state::{BoardCache, Exchange, Lang, PrefAction, Preferences, Theme};

pub use root::App;
